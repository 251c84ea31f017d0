//! The taxonomy store.
//!
//! Three indexed tables built once at process start and never mutated:
//! main categories (ten, digit order), subcategories keyed by main digit,
//! and specific items keyed by subcategory code. Construction validates the
//! whole hierarchy; a store that exists is internally consistent.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::categories::{builtin_providers, CategoryProvider};
use crate::code::TaxonomyCode;
use crate::types::{MainCategory, SpecificItem, Subcategory};

/// Number of main categories, codes `0` through `9`.
pub const MAIN_CATEGORY_COUNT: usize = 10;

/// Maximum entries in any subcategory or specific-item bucket.
pub const MAX_BUCKET_SIZE: usize = 9;

/// Errors raised while building a store. All of them are data bugs.
#[derive(Debug, thiserror::Error)]
pub enum TaxonomyError {
    /// Not exactly ten main categories
    #[error("Expected {MAIN_CATEGORY_COUNT} main categories, found {0}")]
    MainCategoryCount(usize),

    /// A code does not match the grammar for its tier
    #[error("Invalid code {code:?}: {reason}")]
    InvalidCode { code: String, reason: String },

    /// The same code appears twice
    #[error("Duplicate code {0:?}")]
    DuplicateCode(String),

    /// Subcategory filed under a main category it does not belong to
    #[error("Subcategory {code:?} does not belong to main category {main:?}")]
    OrphanSubcategory { code: String, main: String },

    /// Specific item whose subcategory does not exist
    #[error("Specific item {code:?} refers to missing subcategory {subcategory:?}")]
    OrphanSpecificItem { code: String, subcategory: String },

    /// More than nine entries in one bucket
    #[error("Bucket {bucket:?} holds {count} entries (max {MAX_BUCKET_SIZE})")]
    BucketOverflow { bucket: String, count: usize },

    /// Dataset could not be (de)serialized
    #[error("Dataset YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// One main category with everything filed under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryData {
    /// The main category record
    #[serde(flatten)]
    pub main: MainCategory,
    /// Subcategories in display order
    pub subcategories: Vec<Subcategory>,
    /// Specific items in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specific_items: Vec<SpecificItem>,
}

impl CategoryData {
    /// Collect a provider's data.
    pub fn from_provider(provider: &dyn CategoryProvider) -> Self {
        Self {
            main: provider.main_category(),
            subcategories: provider.subcategories(),
            specific_items: provider.specific_items(),
        }
    }
}

/// Serializable form of a whole taxonomy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyDataset {
    /// Main categories with their subcategories and specific items
    pub categories: Vec<CategoryData>,
}

impl TaxonomyDataset {
    /// Dataset assembled from category providers.
    pub fn from_providers(providers: &[Box<dyn CategoryProvider>]) -> Self {
        Self {
            categories: providers
                .iter()
                .map(|p| CategoryData::from_provider(p.as_ref()))
                .collect(),
        }
    }
}

/// Entry counts for a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyStats {
    /// Main categories (always ten)
    pub main_categories: usize,
    /// Subcategories across all main categories
    pub subcategories: usize,
    /// Specific items across all subcategories
    pub specific_items: usize,
    /// Subcategories with at least one specific item
    pub populated_buckets: usize,
}

/// Validated, read-only taxonomy tables.
#[derive(Debug, Clone)]
pub struct TaxonomyStore {
    /// Main categories in digit order
    pub(crate) main_categories: Vec<MainCategory>,
    /// Main digit → subcategories
    pub(crate) subcategories: BTreeMap<String, Vec<Subcategory>>,
    /// Subcategory code → specific items
    pub(crate) specific_items: BTreeMap<String, Vec<SpecificItem>>,
    /// Fingerprint of the tables
    revision: String,
}

impl TaxonomyStore {
    /// Build the compiled-in taxonomy.
    pub fn builtin() -> Result<Self, TaxonomyError> {
        Self::build(&builtin_providers())
    }

    /// Build a store from category providers.
    pub fn build(providers: &[Box<dyn CategoryProvider>]) -> Result<Self, TaxonomyError> {
        Self::from_dataset(TaxonomyDataset::from_providers(providers))
    }

    /// Load and validate a dataset from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, TaxonomyError> {
        let dataset: TaxonomyDataset = serde_yaml::from_str(yaml)?;
        Self::from_dataset(dataset)
    }

    /// Serialize the store's tables to YAML.
    pub fn to_yaml(&self) -> Result<String, TaxonomyError> {
        Ok(serde_yaml::to_string(&self.dataset())?)
    }

    /// Validate a dataset and index it.
    pub fn from_dataset(dataset: TaxonomyDataset) -> Result<Self, TaxonomyError> {
        let mut categories = dataset.categories;
        if categories.len() != MAIN_CATEGORY_COUNT {
            return Err(TaxonomyError::MainCategoryCount(categories.len()));
        }

        let mut seen: HashSet<String> = HashSet::new();
        for category in &categories {
            let code = &category.main.code;
            let is_digit = code.len() == 1 && code.as_bytes()[0].is_ascii_digit();
            if !is_digit {
                return Err(TaxonomyError::InvalidCode {
                    code: code.clone(),
                    reason: "main category code must be a single digit".to_string(),
                });
            }
            if !seen.insert(code.clone()) {
                return Err(TaxonomyError::DuplicateCode(code.clone()));
            }
        }
        categories.sort_by(|a, b| a.main.code.cmp(&b.main.code));

        let mut main_categories = Vec::with_capacity(MAIN_CATEGORY_COUNT);
        let mut subcategories = BTreeMap::new();
        let mut specific_items: BTreeMap<String, Vec<SpecificItem>> = BTreeMap::new();

        for category in categories {
            let main_code = category.main.code.clone();
            validate_subcategories(&main_code, &category.subcategories, &mut seen)?;

            let sub_codes: HashSet<&str> =
                category.subcategories.iter().map(|s| s.code.as_str()).collect();
            for item in &category.specific_items {
                validate_specific_item(&main_code, item, &sub_codes, &mut seen)?;
                specific_items
                    .entry(item.subcategory_code().to_string())
                    .or_default()
                    .push(item.clone());
            }

            main_categories.push(category.main);
            subcategories.insert(main_code, category.subcategories);
        }

        if let Some((bucket, items)) = specific_items
            .iter()
            .find(|(_, items)| items.len() > MAX_BUCKET_SIZE)
        {
            return Err(TaxonomyError::BucketOverflow {
                bucket: bucket.clone(),
                count: items.len(),
            });
        }

        let revision = compute_revision(&main_categories, &subcategories, &specific_items);
        let store = Self {
            main_categories,
            subcategories,
            specific_items,
            revision,
        };

        let stats = store.stats();
        tracing::info!(
            subcategories = stats.subcategories,
            specific_items = stats.specific_items,
            populated_buckets = stats.populated_buckets,
            revision = %&store.revision[..12],
            "Taxonomy store built"
        );

        Ok(store)
    }

    /// Export the tables in dataset form.
    pub fn dataset(&self) -> TaxonomyDataset {
        let categories = self
            .main_categories
            .iter()
            .map(|main| {
                let subcategories = self.subcategories_of(&main.code).to_vec();
                let specific_items = subcategories
                    .iter()
                    .flat_map(|s| self.specific_items_of(&s.code).iter().cloned())
                    .collect();
                CategoryData {
                    main: main.clone(),
                    subcategories,
                    specific_items,
                }
            })
            .collect();
        TaxonomyDataset { categories }
    }

    /// SHA-256 fingerprint (hex) over every code, name and mnemonic.
    pub fn revision(&self) -> &str {
        &self.revision
    }

    /// Entry counts.
    pub fn stats(&self) -> TaxonomyStats {
        TaxonomyStats {
            main_categories: self.main_categories.len(),
            subcategories: self.subcategories.values().map(Vec::len).sum(),
            specific_items: self.specific_items.values().map(Vec::len).sum(),
            populated_buckets: self.specific_items.values().filter(|v| !v.is_empty()).count(),
        }
    }
}

fn validate_subcategories(
    main_code: &str,
    subcategories: &[Subcategory],
    seen: &mut HashSet<String>,
) -> Result<(), TaxonomyError> {
    if subcategories.len() > MAX_BUCKET_SIZE {
        return Err(TaxonomyError::BucketOverflow {
            bucket: main_code.to_string(),
            count: subcategories.len(),
        });
    }

    for sub in subcategories {
        let code = TaxonomyCode::parse(&sub.code).map_err(|e| TaxonomyError::InvalidCode {
            code: sub.code.clone(),
            reason: e.to_string(),
        })?;
        if code.is_specific() || code.as_str() != sub.code {
            return Err(TaxonomyError::InvalidCode {
                code: sub.code.clone(),
                reason: "subcategory code must be exactly three digits".to_string(),
            });
        }
        if !sub.code.starts_with(main_code) {
            return Err(TaxonomyError::OrphanSubcategory {
                code: sub.code.clone(),
                main: main_code.to_string(),
            });
        }
        if !seen.insert(sub.code.clone()) {
            return Err(TaxonomyError::DuplicateCode(sub.code.clone()));
        }
    }
    Ok(())
}

fn validate_specific_item(
    main_code: &str,
    item: &SpecificItem,
    sub_codes: &HashSet<&str>,
    seen: &mut HashSet<String>,
) -> Result<(), TaxonomyError> {
    let code = TaxonomyCode::parse(&item.code).map_err(|e| TaxonomyError::InvalidCode {
        code: item.code.clone(),
        reason: e.to_string(),
    })?;
    if !code.is_specific() || code.as_str() != item.code {
        return Err(TaxonomyError::InvalidCode {
            code: item.code.clone(),
            reason: "specific item code must have the form XYZ.W00".to_string(),
        });
    }

    let subcategory = code.subcategory_code();
    if !subcategory.starts_with(main_code) || !sub_codes.contains(subcategory) {
        return Err(TaxonomyError::OrphanSpecificItem {
            code: item.code.clone(),
            subcategory: subcategory.to_string(),
        });
    }
    if !seen.insert(item.code.clone()) {
        return Err(TaxonomyError::DuplicateCode(item.code.clone()));
    }
    Ok(())
}

fn compute_revision(
    main_categories: &[MainCategory],
    subcategories: &BTreeMap<String, Vec<Subcategory>>,
    specific_items: &BTreeMap<String, Vec<SpecificItem>>,
) -> String {
    let mut hasher = Sha256::new();
    for main in main_categories {
        hasher.update(format!("{}\t{}\n", main.code, main.title));
        for sub in subcategories.get(&main.code).into_iter().flatten() {
            hasher.update(format!("{}\t{}\t{}\n", sub.code, sub.name, sub.two_word));
            for item in specific_items.get(&sub.code).into_iter().flatten() {
                hasher.update(format!("{}\t{}\t{}\n", item.code, item.name, item.two_word));
            }
        }
    }
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin_dataset() -> TaxonomyDataset {
        TaxonomyStore::builtin().unwrap().dataset()
    }

    #[test]
    fn test_builtin_store_builds() {
        let store = TaxonomyStore::builtin().unwrap();
        let stats = store.stats();

        assert_eq!(stats.main_categories, 10);
        assert_eq!(stats.subcategories, 86);
        assert_eq!(stats.populated_buckets, 23);
        assert_eq!(stats.specific_items, 23 * 9);
    }

    #[test]
    fn test_revision_is_stable_hex() {
        let a = TaxonomyStore::builtin().unwrap();
        let b = TaxonomyStore::builtin().unwrap();

        assert_eq!(a.revision(), b.revision());
        assert_eq!(a.revision().len(), 64);
        assert!(a.revision().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_revision_tracks_renames() {
        let original = TaxonomyStore::builtin().unwrap();
        let mut dataset = original.dataset();
        dataset.categories[1].subcategories[0].two_word = "EAT BEANS".to_string();

        let revised = TaxonomyStore::from_dataset(dataset).unwrap();
        assert_ne!(original.revision(), revised.revision());
    }

    #[test]
    fn test_yaml_export_reloads() {
        let store = TaxonomyStore::builtin().unwrap();
        let yaml = store.to_yaml().unwrap();
        let reloaded = TaxonomyStore::from_yaml(&yaml).unwrap();

        assert_eq!(store.revision(), reloaded.revision());
        assert_eq!(store.stats(), reloaded.stats());
    }

    #[test]
    fn test_wrong_main_count_rejected() {
        let mut dataset = builtin_dataset();
        dataset.categories.pop();

        assert!(matches!(
            TaxonomyStore::from_dataset(dataset),
            Err(TaxonomyError::MainCategoryCount(9))
        ));
    }

    #[test]
    fn test_orphan_specific_item_rejected() {
        let mut dataset = builtin_dataset();
        dataset.categories[3]
            .specific_items
            .push(SpecificItem::bare("305.100", "Stray", "GO NOWHERE"));

        // 305 is not even a well-formed subcategory
        assert!(matches!(
            TaxonomyStore::from_dataset(dataset.clone()),
            Err(TaxonomyError::InvalidCode { .. })
        ));

        dataset.categories[3].specific_items.pop();
        dataset.categories[3].subcategories.pop();
        dataset.categories[3]
            .specific_items
            .push(SpecificItem::bare("390.100", "Stray", "GO NOWHERE"));
        assert!(matches!(
            TaxonomyStore::from_dataset(dataset),
            Err(TaxonomyError::OrphanSpecificItem { .. })
        ));
    }

    #[test]
    fn test_misfiled_subcategory_rejected() {
        let mut dataset = builtin_dataset();
        let stray = dataset.categories[4].subcategories.pop().unwrap();
        dataset.categories[3].subcategories.pop();
        dataset.categories[3].subcategories.push(stray);

        assert!(matches!(
            TaxonomyStore::from_dataset(dataset),
            Err(TaxonomyError::OrphanSubcategory { .. })
        ));
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let mut dataset = builtin_dataset();
        let first = dataset.categories[1].specific_items[0].clone();
        dataset.categories[1].specific_items.push(first);

        assert!(matches!(
            TaxonomyStore::from_dataset(dataset),
            Err(TaxonomyError::DuplicateCode(code)) if code == "110.100"
        ));
    }

    #[test]
    fn test_subcategory_bucket_overflow_rejected() {
        let mut dataset = builtin_dataset();
        dataset.categories[0]
            .subcategories
            .extend((6..=9).map(|d| Subcategory::new(format!("0{d}0"), "Extra", "", "ADD MORE")));
        dataset.categories[0]
            .subcategories
            .push(Subcategory::new("0A0", "Broken", "", "BREAK IT"));

        let err = TaxonomyStore::from_dataset(dataset).unwrap_err();
        assert!(matches!(err, TaxonomyError::BucketOverflow { count: 10, .. }));
    }
}
