//! Strict lookups for non-display callers.
//!
//! Validation steps (imports, the CLI, backend checks) want a miss to be an
//! error, not a blank field. [`StrictTaxonomy`] wraps the store and turns
//! every miss into a [`LookupError`], leaving the lenient accessor alone.

use serde::Serialize;

use crate::code::{CodeError, TaxonomyCode};
use crate::store::TaxonomyStore;
use crate::types::{split_code, MainCategory, SpecificItem, Subcategory};

/// Error returned by strict lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// Code is syntactically invalid
    #[error(transparent)]
    Malformed(#[from] CodeError),

    /// No main category for this digit
    #[error("Unknown main category {0:?}")]
    UnknownMainCategory(String),

    /// No subcategory with this code
    #[error("Unknown subcategory {0:?}")]
    UnknownSubcategory(String),

    /// No specific item with this code
    #[error("Unknown specific item {0:?}")]
    UnknownSpecificItem(String),
}

/// A fully resolved ancestor chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolved<'a> {
    /// Main category
    pub main: &'a MainCategory,
    /// Subcategory
    pub sub: &'a Subcategory,
    /// Specific item, when the code names one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific: Option<&'a SpecificItem>,
}

/// Strict view over a [`TaxonomyStore`].
#[derive(Debug, Clone, Copy)]
pub struct StrictTaxonomy<'a> {
    store: &'a TaxonomyStore,
}

impl<'a> StrictTaxonomy<'a> {
    /// Wrap a store.
    pub fn new(store: &'a TaxonomyStore) -> Self {
        Self { store }
    }

    /// Main category for the first digit of `code`.
    pub fn main_category_of(&self, code: &str) -> Result<&'a MainCategory, LookupError> {
        self.store
            .main_category_of(code)
            .ok_or_else(|| LookupError::UnknownMainCategory(code.to_string()))
    }

    /// Subcategories of a main digit; an unknown digit is an error.
    pub fn subcategories_of(&self, main_digit: &str) -> Result<&'a [Subcategory], LookupError> {
        let main = self.main_category_of(main_digit)?;
        Ok(self.store.subcategories_of(&main.code))
    }

    /// Specific items of a subcategory; an unknown subcategory is an error.
    ///
    /// A known subcategory with no breakdown yields an empty slice.
    pub fn specific_items_of(&self, sub_code: &str) -> Result<&'a [SpecificItem], LookupError> {
        let sub = self.subcategory(sub_code)?;
        Ok(self.store.specific_items_of(&sub.code))
    }

    /// Subcategory by exact code.
    pub fn subcategory(&self, code: &str) -> Result<&'a Subcategory, LookupError> {
        self.store
            .subcategory(code)
            .ok_or_else(|| LookupError::UnknownSubcategory(code.to_string()))
    }

    /// Specific item by exact code.
    pub fn specific_item(&self, code: &str) -> Result<&'a SpecificItem, LookupError> {
        self.store
            .specific_item(code)
            .ok_or_else(|| LookupError::UnknownSpecificItem(code.to_string()))
    }

    /// Validate a code and resolve every tier it names.
    pub fn resolve(&self, code: &str) -> Result<Resolved<'a>, LookupError> {
        let code = TaxonomyCode::parse(code)?;
        let (sub_code, specific) = split_code(code.as_str());

        let main = self.main_category_of(sub_code)?;
        let sub = self.subcategory(sub_code)?;
        let specific = match specific {
            Some(_) => Some(self.specific_item(code.as_str())?),
            None => None,
        };

        Ok(Resolved {
            main,
            sub,
            specific,
        })
    }

    /// Breadcrumb label; fails unless every tier the code names resolves.
    pub fn label(&self, code: &str) -> Result<String, LookupError> {
        self.resolve(code)?;
        Ok(self.store.label(code.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_full_chain() {
        let store = TaxonomyStore::builtin().unwrap();
        let strict = StrictTaxonomy::new(&store);

        let resolved = strict.resolve("210.500").unwrap();
        assert_eq!(resolved.main.title, "SHELTER SAFELY");
        assert_eq!(resolved.sub.name, "Bedding & Sleep");
        assert_eq!(resolved.specific.unwrap().name, "Blankets");

        let resolved = strict.resolve("720").unwrap();
        assert!(resolved.specific.is_none());
    }

    #[test]
    fn test_misses_are_errors() {
        let store = TaxonomyStore::builtin().unwrap();
        let strict = StrictTaxonomy::new(&store);

        assert!(matches!(strict.resolve("11"), Err(LookupError::Malformed(_))));
        assert_eq!(
            strict.resolve("060"),
            Err(LookupError::UnknownSubcategory("060".to_string()))
        );
        assert_eq!(
            strict.resolve("310.100"),
            Err(LookupError::UnknownSpecificItem("310.100".to_string()))
        );
        assert!(strict.main_category_of("").is_err());
        assert!(strict.subcategories_of("x").is_err());
        assert!(strict.specific_items_of("999").is_err());
    }

    #[test]
    fn test_known_empty_bucket_is_ok() {
        let store = TaxonomyStore::builtin().unwrap();
        let strict = StrictTaxonomy::new(&store);

        assert_eq!(strict.specific_items_of("310").unwrap().len(), 0);
        assert_eq!(strict.label("310").unwrap(), "CONNECT COMMUNITY → Communication Tools");
    }
}
