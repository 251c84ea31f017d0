//! Reconciling suggested codes with the taxonomy.
//!
//! The collaborator only sees the subcategory legend, and may answer with a
//! bare main digit, a two-digit fragment or a full specific code. Every code
//! is reduced to its subcategory segment, right-padded with zeros to three
//! digits and resolved. Anything that does not resolve is dropped.

use std::collections::HashSet;

use madds_taxonomy::{split_code, TaxonomyStore};

use crate::response::ClassificationSuggestion;
use crate::schema::{Confidence, RankedCode};

/// Width of a subcategory code.
const SUBCATEGORY_WIDTH: usize = 3;

/// Normalize a raw suggested code to subcategory form.
///
/// `"1"` → `"100"`, `"11"` → `"110"`, `"110.300"` → `"110"`. Returns `None`
/// for anything that is not one to three ASCII digits before the separator.
pub fn pad_subcategory_code(raw: &str) -> Option<String> {
    let (segment, _) = split_code(raw.trim());
    let is_fragment = !segment.is_empty()
        && segment.len() <= SUBCATEGORY_WIDTH
        && segment.bytes().all(|b| b.is_ascii_digit());

    is_fragment.then(|| format!("{:0<width$}", segment, width = SUBCATEGORY_WIDTH))
}

/// Resolve ranked codes against the store, in order.
///
/// Malformed and unresolvable codes are dropped; duplicates after padding
/// keep their first occurrence; at most `limit` suggestions are returned.
/// `confidence` is attached to the first suggestion only.
pub fn resolve_suggestions(
    store: &TaxonomyStore,
    codes: &[RankedCode],
    confidence: Option<Confidence>,
    limit: usize,
) -> Vec<ClassificationSuggestion> {
    let mut seen = HashSet::new();
    let mut suggestions: Vec<ClassificationSuggestion> = Vec::new();

    for ranked in codes {
        if suggestions.len() >= limit {
            break;
        }

        let Some(code) = pad_subcategory_code(&ranked.code) else {
            tracing::debug!(raw = %ranked.code, "Dropping malformed suggested code");
            continue;
        };
        if !seen.insert(code.clone()) {
            continue;
        }

        let (Some(main), Some(sub)) = (store.main_category_of(&code), store.subcategory(&code))
        else {
            tracing::debug!(raw = %ranked.code, %code, "Dropping unresolvable suggested code");
            continue;
        };

        suggestions.push(ClassificationSuggestion {
            suggested_code: code,
            raw_code: ranked.code.clone(),
            reason: ranked.reason.clone(),
            main_category: main.clone(),
            subcategory: sub.clone(),
            confidence: if suggestions.is_empty() { confidence } else { None },
        });
    }

    suggestions
}
