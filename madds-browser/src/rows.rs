//! Flattened rows a renderer would draw for the current state.

use serde::Serialize;

use madds_taxonomy::{MainCategory, SearchHit, SpecificItem, Subcategory, TaxonomyStore};

use crate::state::{BrowserMode, BrowserState};

/// One row on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "row", rename_all = "snake_case")]
pub enum BrowserRow<'a> {
    Main {
        category: &'a MainCategory,
        expanded: bool,
    },
    Sub {
        subcategory: &'a Subcategory,
        main_category: &'a MainCategory,
        /// Selecting expands rather than emits
        has_children: bool,
        expanded: bool,
    },
    Specific {
        item: &'a SpecificItem,
        main_category: &'a MainCategory,
        sub_category: &'a Subcategory,
    },
    Hit {
        hit: SearchHit<'a>,
    },
}

impl<'a> BrowserRow<'a> {
    /// Code the row selects.
    pub fn code(&self) -> &'a str {
        match self {
            Self::Main { category, .. } => &category.code,
            Self::Sub { subcategory, .. } => &subcategory.code,
            Self::Specific { item, .. } => &item.code,
            Self::Hit { hit } => hit.code(),
        }
    }

    /// Nesting depth for indentation.
    pub fn depth(&self) -> usize {
        match self {
            Self::Main { .. } | Self::Hit { .. } => 0,
            Self::Sub { .. } => 1,
            Self::Specific { .. } => 2,
        }
    }
}

impl BrowserState {
    /// Rows visible in the current state, top to bottom.
    ///
    /// Browsing shows every main category with the expanded main's
    /// subcategories (and the expanded sub's specific items) nested under
    /// it. Searching shows the search hits for the query.
    pub fn visible_rows<'a>(&self, store: &'a TaxonomyStore) -> Vec<BrowserRow<'a>> {
        if self.mode == BrowserMode::Searching {
            return store
                .search(&self.query)
                .into_iter()
                .map(|hit| BrowserRow::Hit { hit })
                .collect();
        }

        let mut rows = Vec::new();
        for category in store.main_categories() {
            let expanded = self.is_main_expanded(&category.code);
            rows.push(BrowserRow::Main { category, expanded });
            if !expanded {
                continue;
            }

            for subcategory in store.subcategories_of(&category.code) {
                let items = store.specific_items_of(&subcategory.code);
                let expanded = !items.is_empty() && self.is_sub_expanded(&subcategory.code);
                rows.push(BrowserRow::Sub {
                    subcategory,
                    main_category: category,
                    has_children: !items.is_empty(),
                    expanded,
                });
                if expanded {
                    rows.extend(items.iter().map(|item| BrowserRow::Specific {
                        item,
                        main_category: category,
                        sub_category: subcategory,
                    }));
                }
            }
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::BrowserAction;

    #[test]
    fn test_collapsed_rows() {
        let store = TaxonomyStore::builtin().unwrap();
        let rows = BrowserState::new().visible_rows(&store);

        assert_eq!(rows.len(), 10);
        assert!(rows.iter().all(|r| r.depth() == 0));
        assert_eq!(rows[1].code(), "1");
    }

    #[test]
    fn test_expanded_rows() {
        let store = TaxonomyStore::builtin().unwrap();
        let mut state = BrowserState::new();
        state.step(&store, BrowserAction::SelectMain("1".to_string()));
        state.step(&store, BrowserAction::SelectSub("110".to_string()));

        let rows = state.visible_rows(&store);
        let codes: Vec<&str> = rows.iter().map(|r| r.code()).collect();

        let at_110 = codes.iter().position(|c| *c == "110").unwrap();
        assert_eq!(codes[at_110 + 1], "110.100");
        assert!(codes.contains(&"110.300"));
        assert!(codes.contains(&"190"));
        assert!(!codes.contains(&"210"));
        assert_eq!(rows.len(), 10 + store.subcategories_of("1").len() + 9);

        match &rows[at_110] {
            BrowserRow::Sub {
                has_children,
                expanded,
                ..
            } => assert!(*has_children && *expanded),
            other => panic!("expected sub row, got {other:?}"),
        }
    }

    #[test]
    fn test_search_rows() {
        let store = TaxonomyStore::builtin().unwrap();
        let mut state = BrowserState::new();
        state.step(&store, BrowserAction::SetQuery("chickpeas".to_string()));

        let rows = state.visible_rows(&store);
        assert!(rows.iter().any(|r| r.code() == "110.300"));
        assert!(rows.iter().all(|r| matches!(r, BrowserRow::Hit { .. })));
    }
}
