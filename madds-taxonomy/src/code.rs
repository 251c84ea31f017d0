//! Syntactic handling of taxonomy codes.
//!
//! A code is either `XYZ` (subcategory) or `XYZ.W00` (specific item), where
//! `X` is the main digit, `Y` is 1-9 followed by `Z = 0`, and `W` is 1-9.
//! Whether a well-formed code names an existing entry is a store question;
//! this module only checks shape.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::{split_code, CodeTier, CODE_SEPARATOR};

/// Error returned when a string is not a well-formed taxonomy code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeError {
    /// Nothing to parse
    #[error("Empty taxonomy code")]
    Empty,

    /// Subcategory segment is not `X[1-9]0`
    #[error("Malformed subcategory segment in {0:?}: expected three digits ending in 0")]
    MalformedSubcategory(String),

    /// Specific segment is not `[1-9]00`
    #[error("Malformed specific segment in {0:?}: expected one of 100..900")]
    MalformedSpecific(String),
}

/// A well-formed taxonomy code.
///
/// Codes are immutable identifiers; once assigned to a catalog entry they
/// are stored verbatim and never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaxonomyCode(String);

impl TaxonomyCode {
    /// Parse and validate a code.
    pub fn parse(code: &str) -> Result<Self, CodeError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(CodeError::Empty);
        }

        let (sub, specific) = split_code(code);
        if !is_subcategory_segment(sub) {
            return Err(CodeError::MalformedSubcategory(code.to_string()));
        }
        if let Some(specific) = specific {
            if !is_specific_segment(specific) {
                return Err(CodeError::MalformedSpecific(code.to_string()));
            }
        }

        Ok(Self(code.to_string()))
    }

    /// Whether `code` has the shape of a taxonomy code.
    pub fn is_well_formed(code: &str) -> bool {
        Self::parse(code).is_ok()
    }

    /// The code as stored.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Main category digit.
    pub fn main_digit(&self) -> char {
        // Validated non-empty ASCII on construction.
        self.0.as_bytes()[0] as char
    }

    /// The three-digit subcategory segment.
    pub fn subcategory_code(&self) -> &str {
        split_code(&self.0).0
    }

    /// Whether this code names a specific item.
    pub fn is_specific(&self) -> bool {
        self.0.contains(CODE_SEPARATOR)
    }

    /// Tier this code names.
    pub fn tier(&self) -> CodeTier {
        if self.is_specific() {
            CodeTier::Specific
        } else {
            CodeTier::Sub
        }
    }
}

fn is_subcategory_segment(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.len() == 3
        && bytes.iter().all(u8::is_ascii_digit)
        && bytes[1] != b'0'
        && bytes[2] == b'0'
}

fn is_specific_segment(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.len() == 3 && (b'1'..=b'9').contains(&bytes[0]) && bytes[1] == b'0' && bytes[2] == b'0'
}

impl FromStr for TaxonomyCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TaxonomyCode {
    type Error = CodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TaxonomyCode> for String {
    fn from(code: TaxonomyCode) -> Self {
        code.0
    }
}

impl AsRef<str> for TaxonomyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaxonomyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_codes() {
        assert!(TaxonomyCode::is_well_formed("110"));
        assert!(TaxonomyCode::is_well_formed("110.300"));
        assert!(TaxonomyCode::is_well_formed("010.900"));
        assert!(TaxonomyCode::is_well_formed(" 220 "));
    }

    #[test]
    fn test_malformed_codes() {
        assert_eq!(TaxonomyCode::parse(""), Err(CodeError::Empty));
        assert!(matches!(
            TaxonomyCode::parse("1"),
            Err(CodeError::MalformedSubcategory(_))
        ));
        assert!(matches!(
            TaxonomyCode::parse("100"),
            Err(CodeError::MalformedSubcategory(_))
        ));
        assert!(matches!(
            TaxonomyCode::parse("115"),
            Err(CodeError::MalformedSubcategory(_))
        ));
        assert!(matches!(
            TaxonomyCode::parse("110.350"),
            Err(CodeError::MalformedSpecific(_))
        ));
        assert!(matches!(
            TaxonomyCode::parse("110."),
            Err(CodeError::MalformedSpecific(_))
        ));
        assert!(!TaxonomyCode::is_well_formed("abc"));
    }

    #[test]
    fn test_code_segments() {
        let code: TaxonomyCode = "110.300".parse().unwrap();
        assert_eq!(code.main_digit(), '1');
        assert_eq!(code.subcategory_code(), "110");
        assert_eq!(code.tier(), CodeTier::Specific);

        let sub = TaxonomyCode::parse("220").unwrap();
        assert_eq!(sub.tier(), CodeTier::Sub);
        assert_eq!(sub.to_string(), "220");
    }

    #[test]
    fn test_serde_validates() {
        let code: TaxonomyCode = serde_json::from_str("\"110.300\"").unwrap();
        assert_eq!(code.as_str(), "110.300");
        assert!(serde_json::from_str::<TaxonomyCode>("\"11\"").is_err());
    }
}
