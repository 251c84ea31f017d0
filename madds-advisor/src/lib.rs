//! MADDS Advisor - LLM-assisted classification
//!
//! Turns a title, description and optional image into MADDS subcategory
//! suggestions:
//! - Trait-based LLM backends (OpenAI-compatible servers, mock)
//! - One schema-constrained call per item
//! - Suggested codes padded and resolved against the taxonomy
//! - Best-effort outcomes: failures become `NoClassification`, never errors
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         ClassificationAdvisor           │
//! │  (prompt → one call → resolve codes)    │
//! └────────────────┬────────────────────────┘
//!                  │
//!      ┌───────────┼───────────┐
//!      ▼           ▼           ▼
//! ┌──────────┐ ┌──────────┐ ┌──────────┐
//! │LlmBackend│ │ Taxonomy │ │BlobStore │
//! │ (OpenAI/ │ │  Store   │ │ (images) │
//! │  mock)   │ │          │ │          │
//! └──────────┘ └──────────┘ └──────────┘
//! ```

pub mod backend;
pub mod blob;
pub mod config;
pub mod mapping;
pub mod prompt;
pub mod request;
pub mod response;
pub mod schema;
pub mod service;

// Re-export main types for convenience
pub use backend::traits::{
    CompletionRequest, CompletionResponse, FinishReason, LlmBackend, LlmError, ModelCapabilities,
};
pub use backend::{MockBackend, OpenAiBackend};
pub use blob::{BlobError, BlobStore, ImageUpload};
pub use config::{AdvisorConfig, BackendConfig, BackendProvider, ConfigError};
pub use mapping::pad_subcategory_code;
pub use prompt::ClassificationPrompt;
pub use request::{ClassificationRequest, ItemKind, SuggestionShape};
pub use response::{
    Classification, ClassificationCost, ClassificationOutcome, ClassificationSuggestion,
    ItemEnrichment, NoClassificationReason,
};
pub use schema::{Condition, Confidence, Urgency};
pub use service::{AdvisorError, ClassificationAdvisor};
