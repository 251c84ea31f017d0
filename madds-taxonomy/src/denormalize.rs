//! Denormalized taxonomy fields stored on catalog entries.
//!
//! Listings and needs persist `madds_class` and `two_word_code` beside the
//! code so the read path never has to consult the taxonomy. The code is the
//! source of truth; these fields can always be recomputed from it.

use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

use crate::store::TaxonomyStore;

/// The three taxonomy fields carried by a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct CatalogFields {
    /// Assigned code, stored verbatim
    pub madds_code: String,
    /// Main category title
    pub madds_class: String,
    /// Specific item mnemonic, or the subcategory's when there is none
    pub two_word_code: String,
}

/// Result of [`CatalogFields::repair`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RepairOutcome {
    /// Fields already matched the taxonomy
    Unchanged,
    /// Fields were rewritten; the old values are kept for auditing
    Repaired { previous: CatalogFields },
    /// The code no longer resolves to a subcategory; fields left as they were
    Unresolvable,
}

impl CatalogFields {
    /// Compute the fields for a code.
    ///
    /// Returns `None` unless the code resolves at least to a subcategory.
    pub fn derive(store: &TaxonomyStore, code: &str) -> Option<Self> {
        let parsed = store.parse(code);
        let main = parsed.main?;
        let sub = parsed.sub?;
        let two_word = parsed.specific.map_or(&sub.two_word, |s| &s.two_word);

        Some(Self {
            madds_code: code.to_string(),
            madds_class: main.title.clone(),
            two_word_code: two_word.clone(),
        })
    }

    /// Recompute the denormalized fields from `madds_code`.
    pub fn repair(&mut self, store: &TaxonomyStore) -> RepairOutcome {
        let Some(fresh) = Self::derive(store, &self.madds_code) else {
            tracing::warn!(code = %self.madds_code, "Catalog code no longer resolves");
            return RepairOutcome::Unresolvable;
        };

        if fresh == *self {
            return RepairOutcome::Unchanged;
        }

        let previous = std::mem::replace(self, fresh);
        tracing::debug!(
            code = %self.madds_code,
            previous_class = %previous.madds_class,
            previous_two_word = %previous.two_word_code,
            "Repaired catalog fields"
        );
        RepairOutcome::Repaired { previous }
    }
}
