//! Full-text search across all three tiers.
//!
//! A linear scan over the in-memory tables on every call. Results follow a
//! depth-first walk of the table: each main category, then each of its
//! subcategories followed by that subcategory's specific items. There is no
//! relevance ranking.

use serde::Serialize;

use crate::store::TaxonomyStore;
use crate::types::{CodeTier, MainCategory, SpecificItem, Subcategory};

/// One search result, tagged by tier so callers can render breadcrumbs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchHit<'a> {
    /// A main category matched
    Main {
        #[serde(flatten)]
        category: &'a MainCategory,
    },
    /// A subcategory matched
    Sub {
        #[serde(flatten)]
        subcategory: &'a Subcategory,
        main_category: &'a MainCategory,
    },
    /// A specific item matched
    Specific {
        #[serde(flatten)]
        item: &'a SpecificItem,
        main_category: &'a MainCategory,
        sub_category: &'a Subcategory,
    },
}

impl<'a> SearchHit<'a> {
    /// Tier of the matched record.
    pub fn tier(&self) -> CodeTier {
        match self {
            Self::Main { .. } => CodeTier::Main,
            Self::Sub { .. } => CodeTier::Sub,
            Self::Specific { .. } => CodeTier::Specific,
        }
    }

    /// Code of the matched record.
    pub fn code(&self) -> &'a str {
        match self {
            Self::Main { category } => &category.code,
            Self::Sub { subcategory, .. } => &subcategory.code,
            Self::Specific { item, .. } => &item.code,
        }
    }

    /// Main category the record sits under.
    pub fn main_category(&self) -> &'a MainCategory {
        match self {
            Self::Main { category } => category,
            Self::Sub { main_category, .. } | Self::Specific { main_category, .. } => {
                main_category
            }
        }
    }
}

impl TaxonomyStore {
    /// Case-insensitive substring search over titles, names, descriptions
    /// and mnemonics, plus a raw substring match on sub and specific codes.
    ///
    /// A query that is empty after trimming matches nothing.
    pub fn search(&self, query: &str) -> Vec<SearchHit<'_>> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        let matches = |text: &str| text.to_lowercase().contains(&needle);

        let mut hits = Vec::new();

        for main_category in &self.main_categories {
            if matches(&main_category.title) || matches(&main_category.description) {
                hits.push(SearchHit::Main {
                    category: main_category,
                });
            }

            for sub_category in self.subcategories_of(&main_category.code) {
                if sub_category.code.contains(query)
                    || matches(&sub_category.name)
                    || matches(&sub_category.description)
                    || matches(&sub_category.two_word)
                {
                    hits.push(SearchHit::Sub {
                        subcategory: sub_category,
                        main_category,
                    });
                }

                for item in self.specific_items_of(&sub_category.code) {
                    if item.code.contains(query)
                        || matches(&item.name)
                        || item.description.as_deref().is_some_and(matches)
                        || matches(&item.two_word)
                    {
                        hits.push(SearchHit::Specific {
                            item,
                            main_category,
                            sub_category,
                        });
                    }
                }
            }
        }

        tracing::debug!(query, hits = hits.len(), "Taxonomy search");
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> TaxonomyStore {
        TaxonomyStore::builtin().unwrap()
    }

    fn codes<'a>(hits: &[SearchHit<'a>]) -> Vec<&'a str> {
        hits.iter().map(SearchHit::code).collect()
    }

    #[test]
    fn test_every_mnemonic_finds_its_subcategory() {
        let store = store();
        for main in store.main_categories() {
            for sub in store.subcategories_of(&main.code) {
                let hits = store.search(&sub.two_word);
                assert!(
                    hits.iter()
                        .any(|h| h.tier() == CodeTier::Sub && h.code() == sub.code),
                    "{} not found by {:?}",
                    sub.code,
                    sub.two_word
                );
            }
        }
    }

    #[test]
    fn test_case_insensitive() {
        let store = store();
        let upper = store.search("FEED");
        let lower = store.search("feed");

        assert!(!upper.is_empty());
        assert_eq!(codes(&upper), codes(&lower));
    }

    #[test]
    fn test_results_follow_table_order() {
        let store = store();
        let hits = store.search("feed");

        // Position of every record in a depth-first walk of the table
        let mut walk = Vec::new();
        for main in store.main_categories() {
            walk.push(main.code.as_str());
            for sub in store.subcategories_of(&main.code) {
                walk.push(sub.code.as_str());
                for item in store.specific_items_of(&sub.code) {
                    walk.push(item.code.as_str());
                }
            }
        }
        let positions: Vec<usize> = hits
            .iter()
            .map(|h| walk.iter().position(|code| *code == h.code()).unwrap())
            .collect();

        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_specifics_follow_their_subcategory() {
        let store = store();
        let hits = store.search("feed");
        let found = codes(&hits);

        let sub = found.iter().position(|c| *c == "010").unwrap();
        let specific = found.iter().position(|c| c.starts_with("010.")).unwrap();
        let next_main_sub = found
            .iter()
            .position(|c| !c.contains('.') && c.len() == 3 && !c.starts_with('0'))
            .unwrap();

        assert!(sub < specific);
        assert!(specific < next_main_sub);
    }

    #[test]
    fn test_code_substring() {
        let store = store();
        let hits = store.search("110.3");

        assert_eq!(codes(&hits), ["110.300"]);
        match &hits[0] {
            SearchHit::Specific {
                main_category,
                sub_category,
                ..
            } => {
                assert_eq!(main_category.code, "1");
                assert_eq!(sub_category.code, "110");
            }
            other => panic!("unexpected hit {other:?}"),
        }
    }

    #[test]
    fn test_description_matches() {
        let store = store();
        let hits = store.search("garbanzo");
        assert_eq!(codes(&hits), ["110.300"]);

        let hits = store.search("tortillas");
        assert_eq!(codes(&hits), ["130.500"]);
    }

    #[test]
    fn test_blank_query_matches_nothing() {
        let store = store();
        assert!(store.search("").is_empty());
        assert!(store.search("   ").is_empty());
        assert!(store.search("zzzzqqq").is_empty());
    }

    #[test]
    fn test_hit_serializes_with_type_tag() {
        let store = store();
        let hits = store.search("Plant Proteins");
        let json = serde_json::to_value(&hits[0]).unwrap();

        assert_eq!(json["type"], "sub");
        assert_eq!(json["code"], "110");
        assert_eq!(json["main_category"]["title"], "NOURISH BODY");
    }
}
