//! Configuration for the `madds` binary
//!
//! CLI arguments and environment variable handling using clap.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use madds_advisor::AdvisorConfig;
use madds_taxonomy::TaxonomyStore;

use crate::commands::Commands;

/// madds - MADDS taxonomy lookups and item classification
#[derive(Parser, Debug)]
#[command(name = "madds")]
#[command(about = "Look up, search and assign MADDS taxonomy codes")]
#[command(version)]
pub struct Cli {
    /// Taxonomy dataset YAML (the built-in dataset when unset)
    #[arg(long, env = "MADDS_DATASET", global = true)]
    pub dataset: Option<PathBuf>,

    /// Advisor configuration YAML (defaults when unset)
    #[arg(long, env = "MADDS_ADVISOR_CONFIG", global = true)]
    pub advisor_config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "warn", global = true)]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long, env = "LOG_JSON", default_value = "false", global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Load the configured taxonomy.
    pub fn load_store(&self) -> anyhow::Result<TaxonomyStore> {
        match &self.dataset {
            Some(path) => load_dataset(path),
            None => Ok(TaxonomyStore::builtin()?),
        }
    }

    /// Load the advisor configuration.
    pub fn load_advisor_config(&self) -> anyhow::Result<AdvisorConfig> {
        let Some(path) = &self.advisor_config else {
            return Ok(AdvisorConfig::default());
        };
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("reading advisor config {}", path.display()))?;
        AdvisorConfig::from_yaml(&yaml)
            .with_context(|| format!("parsing advisor config {}", path.display()))
    }
}

/// Load and validate a taxonomy dataset file.
pub fn load_dataset(path: &Path) -> anyhow::Result<TaxonomyStore> {
    let yaml = std::fs::read_to_string(path)
        .with_context(|| format!("reading dataset {}", path.display()))?;
    TaxonomyStore::from_yaml(&yaml).with_context(|| format!("validating dataset {}", path.display()))
}
