//! Compact category legend for LLM prompts.
//!
//! The legend lists every main category with its display code and, beneath
//! it, one line of `code = MNEMONIC (Name)` pairs for its subcategories.
//! Specific items are left out to keep the prompt small, so a model reading
//! the legend can only answer at subcategory granularity.

use crate::store::TaxonomyStore;
use crate::types::MainCategory;

/// Builds prompt legends from a store.
pub struct LegendBuilder;

impl LegendBuilder {
    /// Full legend: main categories with their subcategory lines.
    pub fn build_legend(store: &TaxonomyStore) -> String {
        let mut legend = String::new();

        for main in store.main_categories() {
            legend.push_str(&Self::main_line(main));
            legend.push('\n');

            let subs = Self::subcategory_line(store, main);
            if !subs.is_empty() {
                legend.push_str("  ");
                legend.push_str(&subs);
                legend.push('\n');
            }
            legend.push('\n');
        }

        legend.trim_end().to_string()
    }

    /// Main categories only, one per line.
    pub fn main_list(store: &TaxonomyStore) -> String {
        store
            .main_categories()
            .iter()
            .map(Self::main_line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `100 - NOURISH BODY (food, water, nutrition)`
    pub fn main_line(main: &MainCategory) -> String {
        format!(
            "{} - {} ({})",
            main.display_code(),
            main.title,
            main.description.to_lowercase()
        )
    }

    /// `110 = NOURISH PLANT (Plant Proteins), 120 = ...`
    pub fn subcategory_line(store: &TaxonomyStore, main: &MainCategory) -> String {
        store
            .subcategories_of(&main.code)
            .iter()
            .map(|s| format!("{} = {} ({})", s.code, s.two_word, s.name))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Estimate token count for a prompt (rough approximation).
    ///
    /// Uses 4 characters per token.
    pub fn estimate_tokens(text: &str) -> usize {
        text.len() / 4
    }
}
