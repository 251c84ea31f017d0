//! Core types for the MADDS taxonomy.
//!
//! These types model the fixed three-tier hierarchy
//! (main category → subcategory → specific item).
//!
//! With the `typescript` feature enabled, the owned record types can be exported
//! to TypeScript using ts-rs for consistency with the browser application.

use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Separator between the subcategory and specific segments of a code.
pub const CODE_SEPARATOR: char = '.';

/// Tier of the hierarchy a record or code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum CodeTier {
    /// Single digit, e.g. `1`
    Main,
    /// Three digits, e.g. `110`
    Sub,
    /// Three digits, separator, three digits, e.g. `110.300`
    Specific,
}

impl CodeTier {
    /// Get string representation for prompts and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Sub => "sub",
            Self::Specific => "specific",
        }
    }
}

/// A top-level category. Exactly ten exist, codes `0` through `9`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct MainCategory {
    /// Single digit code
    pub code: String,
    /// Short uppercase label, e.g. "NOURISH BODY"
    pub title: String,
    /// One-line gloss
    pub description: String,
    /// Display hint (CSS color)
    pub color: String,
    /// Display hint (emoji)
    pub icon: String,
}

impl MainCategory {
    /// Create a main category record.
    pub fn new(
        code: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        color: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            description: description.into(),
            color: color.into(),
            icon: icon.into(),
        }
    }

    /// The code as shown on badges and in prompts (`1` → `100`).
    pub fn display_code(&self) -> String {
        format!("{}00", self.code)
    }
}

/// A second-tier category, e.g. `110` Plant Proteins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Subcategory {
    /// Three digit code
    pub code: String,
    /// Human-readable name
    pub name: String,
    /// One-line gloss
    pub description: String,
    /// Two-word imperative mnemonic, e.g. "NOURISH PLANT"
    pub two_word: String,
}

impl Subcategory {
    /// Create a subcategory record.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        two_word: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            description: description.into(),
            two_word: two_word.into(),
        }
    }

    /// Main category digit this subcategory belongs to.
    pub fn main_digit(&self) -> Option<char> {
        self.code.chars().next()
    }
}

/// A third-tier entry, e.g. `110.300` Chickpeas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct SpecificItem {
    /// Full code, `XYZ.W00`
    pub code: String,
    /// Human-readable name
    pub name: String,
    /// Optional gloss (examples, sizes, variants)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Two-word imperative mnemonic
    pub two_word: String,
}

impl SpecificItem {
    /// Create a specific item with a description.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        two_word: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            description: Some(description.into()),
            two_word: two_word.into(),
        }
    }

    /// Create a specific item without a description.
    pub fn bare(code: impl Into<String>, name: impl Into<String>, two_word: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            description: None,
            two_word: two_word.into(),
        }
    }

    /// Code of the subcategory this item belongs to (the segment before `.`).
    pub fn subcategory_code(&self) -> &str {
        split_code(&self.code).0
    }
}

/// Result of resolving a code against the store.
///
/// Every stage that fails to match leaves its field `None`; the input is
/// always echoed back in `full_code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedCode<'a> {
    /// Resolved main category
    pub main: Option<&'a MainCategory>,
    /// Resolved subcategory
    pub sub: Option<&'a Subcategory>,
    /// Resolved specific item (only attempted when the code has a `.` segment)
    pub specific: Option<&'a SpecificItem>,
    /// The code exactly as given
    pub full_code: String,
}

impl<'a> ParsedCode<'a> {
    /// A parse result where nothing matched.
    pub fn unresolved(code: impl Into<String>) -> Self {
        Self {
            main: None,
            sub: None,
            specific: None,
            full_code: code.into(),
        }
    }

    /// Deepest tier that resolved, if any.
    pub fn deepest_tier(&self) -> Option<CodeTier> {
        match (self.main, self.sub, self.specific) {
            (_, Some(_), Some(_)) => Some(CodeTier::Specific),
            (_, Some(_), None) => Some(CodeTier::Sub),
            (Some(_), None, _) => Some(CodeTier::Main),
            (None, None, _) => None,
        }
    }

    /// Whether the full ancestor chain resolved for the tier the code names.
    pub fn is_complete(&self) -> bool {
        let names_specific = split_code(&self.full_code).1.is_some();
        match self.deepest_tier() {
            Some(CodeTier::Specific) => self.main.is_some(),
            Some(CodeTier::Sub) => !names_specific && self.main.is_some(),
            _ => false,
        }
    }
}

/// Split a code into its subcategory segment and optional specific segment.
///
/// `"110.300"` → `("110", Some("300"))`, `"110"` → `("110", None)`.
pub fn split_code(code: &str) -> (&str, Option<&str>) {
    match code.split_once(CODE_SEPARATOR) {
        Some((sub, specific)) => (sub, Some(specific)),
        None => (code, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_code() {
        assert_eq!(split_code("110.300"), ("110", Some("300")));
        assert_eq!(split_code("110"), ("110", None));
        assert_eq!(split_code(""), ("", None));
    }

    #[test]
    fn test_specific_item_parent() {
        let item = SpecificItem::bare("110.300", "Chickpeas/garbanzo beans", "FEED FAMILY");
        assert_eq!(item.subcategory_code(), "110");
        assert!(item.description.is_none());
    }

    #[test]
    fn test_main_display_code() {
        let main = MainCategory::new("1", "NOURISH BODY", "Food, water, nutrition", "#16a34a", "🍎");
        assert_eq!(main.display_code(), "100");
    }

    #[test]
    fn test_tier_serialization() {
        assert_eq!(serde_json::to_string(&CodeTier::Sub).unwrap(), "\"sub\"");
        assert_eq!(CodeTier::Specific.as_str(), "specific");
    }
}
