//! The value handed back when a code is picked.

use serde::{Deserialize, Serialize};

use madds_taxonomy::{CatalogFields, MainCategory, SpecificItem, Subcategory};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// A picked code with its resolved ancestor chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Selection {
    /// `XYZ` or `XYZ.W00`
    pub code: String,
    pub main_category: MainCategory,
    pub sub_category: Subcategory,
    /// Set when a specific item was picked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific: Option<SpecificItem>,
}

impl Selection {
    /// Denormalized fields a catalog entry stores for this code.
    pub fn catalog_fields(&self) -> CatalogFields {
        let two_word_code = match &self.specific {
            Some(item) => item.two_word.clone(),
            None => self.sub_category.two_word.clone(),
        };
        CatalogFields {
            madds_code: self.code.clone(),
            madds_class: self.main_category.title.clone(),
            two_word_code,
        }
    }
}
