//! Lenient lookups over the store.
//!
//! Every function here has a defined miss value (`None`, an empty slice or
//! the input echoed back) and never fails. Display code calls these
//! speculatively, before input is known to be valid.

use crate::store::TaxonomyStore;
use crate::types::{split_code, MainCategory, ParsedCode, SpecificItem, Subcategory};

/// Separator used when rendering breadcrumbs.
pub const LABEL_SEPARATOR: &str = " → ";

impl TaxonomyStore {
    /// All main categories in digit order.
    pub fn main_categories(&self) -> &[MainCategory] {
        &self.main_categories
    }

    /// Main category named by the first character of `code`.
    pub fn main_category_of(&self, code: &str) -> Option<&MainCategory> {
        let digit = code.chars().next()?.to_digit(10)?;
        self.main_categories.get(digit as usize)
    }

    /// Subcategories of a main digit, in display order. Empty if unknown.
    pub fn subcategories_of(&self, main_digit: &str) -> &[Subcategory] {
        self.subcategories
            .get(main_digit)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Specific items of a subcategory, in display order. Empty if unknown
    /// or if the subcategory has no finer breakdown.
    pub fn specific_items_of(&self, sub_code: &str) -> &[SpecificItem] {
        self.specific_items
            .get(sub_code)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Subcategory with exactly this three-digit code.
    pub fn subcategory(&self, code: &str) -> Option<&Subcategory> {
        let main_digit = code.get(..1)?;
        self.subcategories_of(main_digit)
            .iter()
            .find(|s| s.code == code)
    }

    /// Specific item with exactly this `XYZ.W00` code.
    pub fn specific_item(&self, code: &str) -> Option<&SpecificItem> {
        let (sub_code, _) = split_code(code);
        self.specific_items_of(sub_code)
            .iter()
            .find(|i| i.code == code)
    }

    /// Resolve each tier of a code independently.
    ///
    /// Fields that fail to match are left `None`; the input is echoed in
    /// `full_code`.
    pub fn parse(&self, code: &str) -> ParsedCode<'_> {
        let (sub_code, specific_segment) = split_code(code);

        let parsed = ParsedCode {
            main: self.main_category_of(sub_code),
            sub: self.subcategory(sub_code),
            specific: specific_segment.and_then(|_| self.specific_item(code)),
            full_code: code.to_string(),
        };

        if parsed.main.is_none() {
            tracing::debug!(code, "Code does not name a main category");
        }
        parsed
    }

    /// Human-readable breadcrumb, e.g. `NOURISH BODY → Plant Proteins → Lentils`.
    ///
    /// Unresolved tiers are dropped from the end; if not even the main
    /// category resolves, the code itself is returned.
    pub fn label(&self, code: &str) -> String {
        let parsed = self.parse(code);
        let Some(main) = parsed.main else {
            return code.to_string();
        };

        let mut parts = vec![main.title.as_str()];
        if let Some(sub) = parsed.sub {
            parts.push(sub.name.as_str());
            if let Some(specific) = parsed.specific {
                parts.push(specific.name.as_str());
            }
        }
        parts.join(LABEL_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CodeTier;

    fn store() -> TaxonomyStore {
        TaxonomyStore::builtin().unwrap()
    }

    #[test]
    fn test_main_category_of() {
        let store = store();
        assert_eq!(store.main_category_of("110.300").unwrap().title, "NOURISH BODY");
        assert_eq!(store.main_category_of("0").unwrap().title, "EMERGENCY SURVIVAL");
        assert!(store.main_category_of("").is_none());
        assert!(store.main_category_of("x10").is_none());
    }

    #[test]
    fn test_unknown_buckets_are_empty() {
        let store = store();
        assert_eq!(store.subcategories_of("1").len(), 9);
        assert!(store.subcategories_of("x").is_empty());
        assert!(store.subcategories_of("").is_empty());
        assert!(store.specific_items_of("310").is_empty());
        assert!(store.specific_items_of("999").is_empty());
    }

    #[test]
    fn test_parse_specific() {
        let store = store();
        let parsed = store.parse("110.300");

        assert_eq!(parsed.main.unwrap().code, "1");
        assert_eq!(parsed.sub.unwrap().two_word, "NOURISH PLANT");
        assert_eq!(parsed.specific.unwrap().name, "Chickpeas/garbanzo beans");
        assert_eq!(parsed.deepest_tier(), Some(CodeTier::Specific));
        assert!(parsed.is_complete());
    }

    #[test]
    fn test_parse_every_specific_round_trips() {
        let store = store();
        for sub in store.main_categories().iter().flat_map(|m| store.subcategories_of(&m.code)) {
            for item in store.specific_items_of(&sub.code) {
                let parsed = store.parse(&item.code);
                assert_eq!(parsed.specific.map(|s| s.code.as_str()), Some(item.code.as_str()));
                assert_eq!(parsed.sub.map(|s| s.code.as_str()), Some(item.subcategory_code()));
                assert_eq!(parsed.main.map(|m| m.code.as_str()), Some(&item.code[..1]));
            }
        }
    }

    #[test]
    fn test_parse_misses_do_not_fail() {
        let store = store();

        let parsed = store.parse("999.999");
        assert_eq!(parsed.main.unwrap().title, "TRANSITION LIFE");
        assert!(parsed.sub.is_none());
        assert!(parsed.specific.is_none());
        assert_eq!(parsed.full_code, "999.999");

        let parsed = store.parse("garbage");
        assert_eq!(parsed, ParsedCode::unresolved("garbage"));

        // Sub without a breakdown: specific segment can never resolve
        let parsed = store.parse("310.100");
        assert!(parsed.sub.is_some());
        assert!(parsed.specific.is_none());
        assert!(!parsed.is_complete());
    }

    #[test]
    fn test_label_degrades() {
        let store = store();
        assert_eq!(
            store.label("110.300"),
            "NOURISH BODY → Plant Proteins → Chickpeas/garbanzo beans"
        );
        assert_eq!(store.label("220"), "SHELTER SAFELY → Furniture (Living)");
        assert_eq!(store.label("110.950"), "NOURISH BODY → Plant Proteins");
        assert_eq!(store.label("999"), "TRANSITION LIFE");
        assert_eq!(store.label("abc"), "abc");
    }

    #[test]
    fn test_direct_lookups() {
        let store = store();
        assert_eq!(store.subcategory("220").unwrap().two_word, "FURNISH HOME");
        assert!(store.subcategory("22").is_none());
        assert_eq!(store.specific_item("010.200").unwrap().two_word, "FEED BABY");
        assert!(store.specific_item("010").is_none());
    }
}
