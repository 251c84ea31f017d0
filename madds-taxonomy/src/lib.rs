//! MADDS Taxonomy - Mutual Aid Dewey Decimal System
//!
//! This crate implements the three-tier classification used to catalog
//! shared goods and services:
//!
//! - **Main category**: a single digit `0`-`9` (e.g. `1` NOURISH BODY)
//! - **Subcategory**: three digits, main digit first (e.g. `110` Plant Proteins)
//! - **Specific item**: subcategory plus `.W00` (e.g. `110.300` Chickpeas)
//!
//! # Key Components
//!
//! - [`TaxonomyStore`]: validated, immutable tables built once at startup
//! - Accessor methods on the store (`main_category_of`, `parse`, `search`,
//!   `label`, ...) that never fail and report misses as `None` / empty lists
//! - [`StrictTaxonomy`]: the same lookups, but every miss is a [`LookupError`]
//! - [`CatalogFields`]: the denormalized fields persisted beside a code,
//!   with recompute/repair
//! - [`LegendBuilder`]: compact category legend for LLM prompts
//!
//! # Example
//!
//! ```ignore
//! use madds_taxonomy::TaxonomyStore;
//!
//! let store = TaxonomyStore::builtin()?;
//! let parsed = store.parse("110.300");
//! assert_eq!(parsed.specific.map(|s| s.name.as_str()), Some("Chickpeas/garbanzo beans"));
//! println!("{}", store.label("110.300"));
//! ```

pub mod categories;
pub mod code;
pub mod denormalize;
pub mod legend;
pub mod lookup;
pub mod search;
pub mod store;
pub mod strict;
pub mod types;

// Re-export main types
pub use categories::CategoryProvider;
pub use code::{CodeError, TaxonomyCode};
pub use denormalize::{CatalogFields, RepairOutcome};
pub use legend::LegendBuilder;
pub use search::SearchHit;
pub use store::{CategoryData, TaxonomyDataset, TaxonomyError, TaxonomyStats, TaxonomyStore};
pub use strict::{LookupError, Resolved, StrictTaxonomy};
pub use types::*;
