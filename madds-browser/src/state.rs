//! Browser state and transitions.
//!
//! The state is a small value owned by the caller. Each action is applied
//! with [`BrowserState::step`], which updates the state in place and
//! reports whether the action changed it, emitted a selection or was
//! ignored.

use serde::{Deserialize, Serialize};
use tracing::debug;

use madds_taxonomy::{split_code, SearchHit, TaxonomyStore};

#[cfg(feature = "typescript")]
use ts_rs::TS;

use crate::selection::Selection;

/// Which list is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum BrowserMode {
    /// Main categories, with at most one main and one sub expanded
    #[default]
    Browsing,
    /// Flat list of search hits for the current query
    Searching,
}

/// Browser state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct BrowserState {
    pub mode: BrowserMode,
    /// Text in the search field
    pub query: String,
    /// Expanded main category code
    pub expanded_main: Option<String>,
    /// Expanded subcategory code (always under `expanded_main`)
    pub expanded_sub: Option<String>,
}

/// User actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum BrowserAction {
    /// Search field edited
    SetQuery(String),
    /// Search field cleared
    ClearQuery,
    /// Back to the category list, keeping the query text
    BrowseAll,
    /// Main category row clicked
    SelectMain(String),
    /// Subcategory row clicked
    SelectSub(String),
    /// Specific item row clicked
    SelectSpecific(String),
    /// Search hit clicked
    SelectSearchHit(String),
}

/// Why an action had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// The code is not in the taxonomy
    UnknownCode,
    /// The code exists but its row is not on screen
    NotVisible,
}

/// Result of applying an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum StepOutcome {
    /// State changed; nothing emitted
    Changed,
    /// A code was picked; the state has been reset
    Selected(Selection),
    /// State unchanged
    Ignored(IgnoreReason),
}

impl StepOutcome {
    /// The emitted selection, if any.
    pub fn selection(&self) -> Option<&Selection> {
        match self {
            Self::Selected(selection) => Some(selection),
            _ => None,
        }
    }
}

impl BrowserState {
    /// Initial state: browsing, nothing expanded, empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this main category is expanded.
    pub fn is_main_expanded(&self, code: &str) -> bool {
        self.expanded_main.as_deref() == Some(code)
    }

    /// Whether this subcategory is expanded.
    pub fn is_sub_expanded(&self, code: &str) -> bool {
        self.expanded_sub.as_deref() == Some(code)
    }

    /// Apply an action.
    pub fn step(&mut self, store: &TaxonomyStore, action: BrowserAction) -> StepOutcome {
        debug!(?action, mode = ?self.mode, "Browser action");

        let outcome = match action {
            BrowserAction::SetQuery(text) => self.set_query(text),
            BrowserAction::ClearQuery => {
                self.query.clear();
                self.mode = BrowserMode::Browsing;
                StepOutcome::Changed
            }
            BrowserAction::BrowseAll => {
                self.mode = BrowserMode::Browsing;
                StepOutcome::Changed
            }
            BrowserAction::SelectMain(code) => self.select_main(store, &code),
            BrowserAction::SelectSub(code) => self.select_sub(store, &code),
            BrowserAction::SelectSpecific(code) => self.select_specific(store, &code),
            BrowserAction::SelectSearchHit(code) => self.select_search_hit(store, &code),
        };

        if let StepOutcome::Selected(selection) = &outcome {
            debug!(code = %selection.code, "Selection emitted");
            *self = Self::default();
        }
        outcome
    }

    fn set_query(&mut self, text: String) -> StepOutcome {
        self.mode = if text.trim().is_empty() {
            BrowserMode::Browsing
        } else {
            BrowserMode::Searching
        };
        self.query = text;
        StepOutcome::Changed
    }

    fn select_main(&mut self, store: &TaxonomyStore, code: &str) -> StepOutcome {
        if !store.main_categories().iter().any(|m| m.code == code) {
            return StepOutcome::Ignored(IgnoreReason::UnknownCode);
        }
        if self.mode != BrowserMode::Browsing {
            return StepOutcome::Ignored(IgnoreReason::NotVisible);
        }

        self.expanded_main = if self.is_main_expanded(code) {
            None
        } else {
            Some(code.to_string())
        };
        self.expanded_sub = None;
        StepOutcome::Changed
    }

    fn select_sub(&mut self, store: &TaxonomyStore, code: &str) -> StepOutcome {
        let (Some(main), Some(sub)) = (store.main_category_of(code), store.subcategory(code)) else {
            return StepOutcome::Ignored(IgnoreReason::UnknownCode);
        };
        if self.mode != BrowserMode::Browsing || !self.is_main_expanded(&main.code) {
            return StepOutcome::Ignored(IgnoreReason::NotVisible);
        }

        if store.specific_items_of(code).is_empty() {
            return StepOutcome::Selected(Selection {
                code: sub.code.clone(),
                main_category: main.clone(),
                sub_category: sub.clone(),
                specific: None,
            });
        }

        self.expanded_sub = if self.is_sub_expanded(code) {
            None
        } else {
            Some(code.to_string())
        };
        StepOutcome::Changed
    }

    fn select_specific(&mut self, store: &TaxonomyStore, code: &str) -> StepOutcome {
        let parsed = store.parse(code);
        let (Some(main), Some(sub), Some(item)) = (parsed.main, parsed.sub, parsed.specific) else {
            return StepOutcome::Ignored(IgnoreReason::UnknownCode);
        };
        let (sub_code, _) = split_code(code);
        if self.mode != BrowserMode::Browsing
            || !self.is_main_expanded(&main.code)
            || !self.is_sub_expanded(sub_code)
        {
            return StepOutcome::Ignored(IgnoreReason::NotVisible);
        }

        StepOutcome::Selected(Selection {
            code: item.code.clone(),
            main_category: main.clone(),
            sub_category: sub.clone(),
            specific: Some(item.clone()),
        })
    }

    fn select_search_hit(&mut self, store: &TaxonomyStore, code: &str) -> StepOutcome {
        if store.parse(code).deepest_tier().is_none() {
            return StepOutcome::Ignored(IgnoreReason::UnknownCode);
        }
        if self.mode != BrowserMode::Searching {
            return StepOutcome::Ignored(IgnoreReason::NotVisible);
        }

        let hits = store.search(&self.query);
        let Some(hit) = hits.iter().find(|hit| hit.code() == code) else {
            return StepOutcome::Ignored(IgnoreReason::NotVisible);
        };

        match *hit {
            SearchHit::Main { category } => {
                *self = Self {
                    expanded_main: Some(category.code.clone()),
                    ..Self::default()
                };
                StepOutcome::Changed
            }
            SearchHit::Sub {
                subcategory,
                main_category,
            } => StepOutcome::Selected(Selection {
                code: subcategory.code.clone(),
                main_category: main_category.clone(),
                sub_category: subcategory.clone(),
                specific: None,
            }),
            SearchHit::Specific {
                item,
                main_category,
                sub_category,
            } => StepOutcome::Selected(Selection {
                code: item.code.clone(),
                main_category: main_category.clone(),
                sub_category: sub_category.clone(),
                specific: Some(item.clone()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> TaxonomyStore {
        TaxonomyStore::builtin().unwrap()
    }

    fn select_main(code: &str) -> BrowserAction {
        BrowserAction::SelectMain(code.to_string())
    }

    fn select_sub(code: &str) -> BrowserAction {
        BrowserAction::SelectSub(code.to_string())
    }

    #[test]
    fn test_manual_browse_to_specific() {
        let store = store();
        let mut state = BrowserState::new();

        assert_eq!(state.step(&store, select_main("1")), StepOutcome::Changed);
        assert!(state.is_main_expanded("1"));

        // 110 has specific items, so it expands instead of emitting
        assert_eq!(state.step(&store, select_sub("110")), StepOutcome::Changed);
        assert!(state.is_sub_expanded("110"));

        let outcome = state.step(&store, BrowserAction::SelectSpecific("110.300".to_string()));
        let selection = outcome.selection().unwrap();
        assert_eq!(selection.code, "110.300");
        assert_eq!(selection.main_category.title, "NOURISH BODY");
        assert_eq!(selection.sub_category.name, "Plant Proteins");
        assert_eq!(selection.sub_category.two_word, "NOURISH PLANT");
        assert_eq!(
            selection.specific.as_ref().map(|s| s.name.as_str()),
            Some("Chickpeas/garbanzo beans")
        );

        assert_eq!(state, BrowserState::default());
    }

    #[test]
    fn test_sub_without_children_emits() {
        let store = store();
        let mut state = BrowserState::new();

        state.step(&store, select_main("3"));
        let outcome = state.step(&store, select_sub("310"));

        let selection = outcome.selection().unwrap();
        assert_eq!(selection.code, "310");
        assert!(selection.specific.is_none());
        assert_eq!(selection.catalog_fields().two_word_code, "STAY CONNECTED");
        assert_eq!(state, BrowserState::default());
    }

    #[test]
    fn test_main_toggle_collapses_others() {
        let store = store();
        let mut state = BrowserState::new();

        state.step(&store, select_main("1"));
        state.step(&store, select_sub("110"));
        state.step(&store, select_main("2"));
        assert!(state.is_main_expanded("2"));
        assert_eq!(state.expanded_sub, None);

        state.step(&store, select_main("2"));
        assert_eq!(state.expanded_main, None);
    }

    #[test]
    fn test_sub_toggle() {
        let store = store();
        let mut state = BrowserState::new();

        state.step(&store, select_main("1"));
        state.step(&store, select_sub("110"));
        assert_eq!(state.step(&store, select_sub("110")), StepOutcome::Changed);
        assert_eq!(state.expanded_sub, None);
        assert!(state.is_main_expanded("1"));
    }

    #[test]
    fn test_ignored_actions() {
        let store = store();
        let mut state = BrowserState::new();

        assert_eq!(
            state.step(&store, select_main("X")),
            StepOutcome::Ignored(IgnoreReason::UnknownCode)
        );
        // 110 exists but main 1 is collapsed
        assert_eq!(
            state.step(&store, select_sub("110")),
            StepOutcome::Ignored(IgnoreReason::NotVisible)
        );
        assert_eq!(
            state.step(&store, select_sub("999")),
            StepOutcome::Ignored(IgnoreReason::UnknownCode)
        );

        state.step(&store, select_main("1"));
        assert_eq!(
            state.step(&store, BrowserAction::SelectSpecific("110.300".to_string())),
            StepOutcome::Ignored(IgnoreReason::NotVisible)
        );
        assert_eq!(
            state.step(&store, BrowserAction::SelectSpecific("110.950".to_string())),
            StepOutcome::Ignored(IgnoreReason::UnknownCode)
        );
        assert!(state.is_main_expanded("1"));
    }

    #[test]
    fn test_search_round_trip() {
        let store = store();
        let mut state = BrowserState::new();

        state.step(&store, select_main("1"));
        state.step(&store, BrowserAction::SetQuery("feed".to_string()));
        assert_eq!(state.mode, BrowserMode::Searching);

        // Browse rows are hidden while searching
        assert_eq!(
            state.step(&store, select_main("2")),
            StepOutcome::Ignored(IgnoreReason::NotVisible)
        );

        state.step(&store, BrowserAction::BrowseAll);
        assert_eq!(state.mode, BrowserMode::Browsing);
        assert_eq!(state.query, "feed");
        assert!(state.is_main_expanded("1"));

        state.step(&store, BrowserAction::SetQuery("feed".to_string()));
        state.step(&store, BrowserAction::ClearQuery);
        assert_eq!(state.mode, BrowserMode::Browsing);
        assert!(state.query.is_empty());

        state.step(&store, BrowserAction::SetQuery("   ".to_string()));
        assert_eq!(state.mode, BrowserMode::Browsing);
    }

    #[test]
    fn test_search_hit_selection() {
        let store = store();
        let mut state = BrowserState::new();

        state.step(&store, BrowserAction::SetQuery("FEED QUICKLY".to_string()));
        let outcome = state.step(&store, BrowserAction::SelectSearchHit("010".to_string()));

        let selection = outcome.selection().unwrap();
        assert_eq!(selection.code, "010");
        assert_eq!(selection.main_category.code, "0");
        assert_eq!(state, BrowserState::default());

        state.step(&store, BrowserAction::SetQuery("chickpeas".to_string()));
        let outcome = state.step(&store, BrowserAction::SelectSearchHit("110.300".to_string()));
        assert_eq!(outcome.selection().unwrap().sub_category.code, "110");
    }

    #[test]
    fn test_main_search_hit_expands() {
        let store = store();
        let mut state = BrowserState::new();

        state.step(&store, BrowserAction::SetQuery("shelter".to_string()));
        assert_eq!(
            state.step(&store, BrowserAction::SelectSearchHit("2".to_string())),
            StepOutcome::Changed
        );
        assert_eq!(state.mode, BrowserMode::Browsing);
        assert!(state.is_main_expanded("2"));
        assert!(state.query.is_empty());
    }

    #[test]
    fn test_search_hit_not_in_results() {
        let store = store();
        let mut state = BrowserState::new();

        state.step(&store, BrowserAction::SetQuery("chickpeas".to_string()));
        assert_eq!(
            state.step(&store, BrowserAction::SelectSearchHit("220".to_string())),
            StepOutcome::Ignored(IgnoreReason::NotVisible)
        );
        assert_eq!(state.mode, BrowserMode::Searching);
    }

    #[test]
    fn test_action_serialization() {
        let json = serde_json::to_value(BrowserAction::SelectSub("110".to_string())).unwrap();
        assert_eq!(json, serde_json::json!({"action": "select_sub", "value": "110"}));

        let json = serde_json::to_value(StepOutcome::Ignored(IgnoreReason::NotVisible)).unwrap();
        assert_eq!(json, serde_json::json!({"outcome": "ignored", "detail": "not_visible"}));
    }
}
