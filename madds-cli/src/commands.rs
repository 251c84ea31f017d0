//! Subcommands
//!
//! Each command returns its output as a string: pretty JSON for
//! structured results, plain text for `label`, `legend` and `export`.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use serde_json::json;
use tracing::info;

use madds_advisor::{
    BackendProvider, ClassificationAdvisor, ClassificationRequest, ItemKind, SuggestionShape,
};
use madds_browser::{BrowserAction, BrowserState, StepOutcome};
use madds_taxonomy::{
    split_code, CatalogFields, LegendBuilder, StrictTaxonomy, TaxonomyCode, TaxonomyStore,
};

use crate::config::{load_dataset, Cli};

/// madds commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve a code, failing if any tier is missing
    Lookup {
        /// Code, e.g. 110 or 110.300
        code: String,
    },

    /// Resolve each tier of a code, leaving misses empty
    Parse {
        /// Code, e.g. 110 or 110.300
        code: String,
    },

    /// Print the breadcrumb label for a code
    Label {
        /// Code, e.g. 110 or 110.300
        code: String,
    },

    /// Search titles, names, descriptions, mnemonics and codes
    Search {
        /// Search text
        query: String,
    },

    /// Print the category legend sent to the LLM
    Legend {
        /// Main categories only
        #[arg(long)]
        mains_only: bool,
    },

    /// Validate a taxonomy dataset and print its stats
    Validate {
        /// Dataset YAML (the configured dataset when unset)
        file: Option<PathBuf>,
    },

    /// Export the taxonomy as YAML
    Export,

    /// Recompute the denormalized catalog fields for a code
    Repair {
        /// Stored code
        code: String,
        /// Stored main category title
        #[arg(long, default_value = "")]
        class: String,
        /// Stored two-word mnemonic
        #[arg(long, default_value = "")]
        two_word: String,
    },

    /// Walk the category browser by clicking codes in order
    Browse {
        /// Search text to enter first
        #[arg(short, long)]
        query: Option<String>,
        /// Codes to click, in order
        codes: Vec<String>,
    },

    /// Classify an item with the configured LLM backend
    Classify(ClassifyArgs),
}

/// Arguments for `classify`.
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Item title
    #[arg(short, long, default_value = "")]
    pub title: String,

    /// Item description
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// URL of an already uploaded image
    #[arg(long)]
    pub image_url: Option<String>,

    /// Classify a need instead of an offer
    #[arg(long)]
    pub need: bool,

    /// Ask for ranked suggestions instead of one
    #[arg(long)]
    pub ranked: bool,

    /// Most ranked suggestions to keep
    #[arg(long)]
    pub max: Option<usize>,

    /// Backend provider override (openai, ollama, vllm)
    #[arg(long, env = "MADDS_PROVIDER")]
    pub provider: Option<BackendProvider>,

    /// Model override
    #[arg(long, env = "MADDS_MODEL")]
    pub model: Option<String>,

    /// Base URL override
    #[arg(long, env = "MADDS_BASE_URL")]
    pub base_url: Option<String>,
}

/// Run a command and return its output.
pub async fn execute(cli: &Cli) -> anyhow::Result<String> {
    match &cli.command {
        Commands::Validate { file } => {
            let store = match file {
                Some(path) => load_dataset(path)?,
                None => cli.load_store()?,
            };
            pretty(&json!({
                "valid": true,
                "revision": store.revision(),
                "stats": store.stats(),
            }))
        }
        Commands::Classify(args) => classify(cli, args).await,
        command => {
            let store = cli.load_store()?;
            run(&store, command)
        }
    }
}

/// Run a command that only needs the taxonomy.
pub fn run(store: &TaxonomyStore, command: &Commands) -> anyhow::Result<String> {
    match command {
        Commands::Lookup { code } => {
            let code = TaxonomyCode::parse(code)?;
            let resolved = StrictTaxonomy::new(store).resolve(code.as_str())?;
            pretty(&json!({
                "code": code,
                "tier": code.tier(),
                "resolved": resolved,
                "catalog_fields": CatalogFields::derive(store, code.as_str()),
            }))
        }
        Commands::Parse { code } => pretty(&store.parse(code)),
        Commands::Label { code } => Ok(store.label(code)),
        Commands::Search { query } => pretty(&store.search(query)),
        Commands::Legend { mains_only } => {
            let legend = if *mains_only {
                LegendBuilder::main_list(store)
            } else {
                LegendBuilder::build_legend(store)
            };
            info!(estimated_tokens = LegendBuilder::estimate_tokens(&legend), "Built legend");
            Ok(legend)
        }
        Commands::Export => Ok(store.to_yaml()?),
        Commands::Repair {
            code,
            class,
            two_word,
        } => {
            let mut fields = CatalogFields {
                madds_code: code.clone(),
                madds_class: class.clone(),
                two_word_code: two_word.clone(),
            };
            let outcome = fields.repair(store);
            pretty(&json!({ "fields": fields, "repair": outcome }))
        }
        Commands::Browse { query, codes } => browse(store, query.as_deref(), codes),
        Commands::Validate { .. } | Commands::Classify(_) => {
            anyhow::bail!("command needs more than the taxonomy")
        }
    }
}

/// Apply clicks to a fresh browser and report where it ends up.
fn browse(store: &TaxonomyStore, query: Option<&str>, codes: &[String]) -> anyhow::Result<String> {
    let mut state = BrowserState::new();
    let mut outcome = StepOutcome::Changed;

    if let Some(query) = query {
        outcome = state.step(store, BrowserAction::SetQuery(query.to_string()));
    }

    for code in codes {
        outcome = state.step(store, click(&state, code));
        if let StepOutcome::Ignored(reason) = &outcome {
            anyhow::bail!("click on {} ignored: {:?}", code, reason);
        }
        if outcome.selection().is_some() {
            break;
        }
    }

    match outcome {
        StepOutcome::Selected(selection) => pretty(&json!({
            "selection": selection,
            "catalog_fields": selection.catalog_fields(),
        })),
        _ => pretty(&json!({
            "state": state,
            "rows": state.visible_rows(store),
        })),
    }
}

/// The action a click on `code` means in the current state.
fn click(state: &BrowserState, code: &str) -> BrowserAction {
    if state.mode == madds_browser::BrowserMode::Searching {
        return BrowserAction::SelectSearchHit(code.to_string());
    }
    match split_code(code) {
        (_, Some(_)) => BrowserAction::SelectSpecific(code.to_string()),
        (sub, None) if sub.len() == 1 => BrowserAction::SelectMain(code.to_string()),
        _ => BrowserAction::SelectSub(code.to_string()),
    }
}

async fn classify(cli: &Cli, args: &ClassifyArgs) -> anyhow::Result<String> {
    let store = Arc::new(cli.load_store()?);

    let mut config = cli.load_advisor_config()?;
    if let Some(provider) = args.provider {
        config.backend.provider = provider;
        if provider != BackendProvider::OpenAi {
            config.backend.api_key_env = None;
        }
    }
    if let Some(model) = &args.model {
        config.backend.model = model.clone();
    }
    if let Some(base_url) = &args.base_url {
        config.backend.base_url = Some(base_url.clone());
    }
    if let Some(max) = args.max {
        config.max_suggestions = max;
    }

    let backend = config.build_backend()?;
    let kind = if args.need {
        ItemKind::Need
    } else {
        ItemKind::Offer
    };
    let shape = if args.ranked {
        SuggestionShape::Ranked {
            max: config.max_suggestions,
        }
    } else {
        SuggestionShape::Single
    };

    let mut request = ClassificationRequest::new(kind, &args.title, &args.description).with_shape(shape);
    if let Some(url) = &args.image_url {
        request = request.with_image(url);
    }

    let advisor = ClassificationAdvisor::new(vec![backend], store).with_config(config);
    pretty(&advisor.classify(request).await)
}

fn pretty<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
