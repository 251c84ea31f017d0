//! ClassificationAdvisor - main entry point for classification.
//!
//! Orchestrates one LLM call per request and reconciles the reply against
//! the taxonomy. Every failure is reported as a `NoClassification`
//! outcome, never as an error.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use madds_taxonomy::TaxonomyStore;

use crate::backend::traits::{CompletionRequest, FinishReason, LlmBackend, LlmError};
use crate::blob::{BlobError, BlobStore, ImageUpload};
use crate::config::AdvisorConfig;
use crate::mapping::resolve_suggestions;
use crate::prompt::ClassificationPrompt;
use crate::request::{ClassificationRequest, SuggestionShape};
use crate::response::{
    Classification, ClassificationCost, ClassificationOutcome, ItemEnrichment,
    NoClassificationReason,
};
use crate::schema::{reply_schema, ClassificationReply, SCHEMA_NAME};

/// Why a classification attempt failed.
#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    /// Nothing to classify
    #[error("Nothing to classify: title, description and image are all empty")]
    EmptyInput,

    /// Image could not be stored
    #[error("Image upload failed: {0}")]
    Upload(#[from] BlobError),

    /// No backend available
    #[error("No LLM backend available")]
    NoBackendAvailable,

    /// Backend error
    #[error("Backend error: {0}")]
    Backend(#[from] LlmError),

    /// Reply did not match the schema
    #[error("Malformed reply: {0}")]
    Malformed(#[from] serde_json::Error),

    /// No suggested code resolved
    #[error("No suggested code resolved (suggested: {suggested:?})")]
    NoResolvableCode { suggested: Vec<String> },
}

impl AdvisorError {
    /// Outcome reason for this error.
    pub fn reason(&self) -> NoClassificationReason {
        match self {
            Self::EmptyInput => NoClassificationReason::EmptyInput,
            Self::Upload(_) => NoClassificationReason::UploadFailed,
            Self::NoBackendAvailable => NoClassificationReason::NoBackendAvailable,
            Self::Backend(_) => NoClassificationReason::BackendFailed,
            Self::Malformed(_) => NoClassificationReason::MalformedResponse,
            Self::NoResolvableCode { .. } => NoClassificationReason::NoResolvableCode,
        }
    }
}

/// Classification advisor.
pub struct ClassificationAdvisor {
    /// Configuration
    config: AdvisorConfig,
    /// Candidate backends, in preference order
    backends: Vec<Arc<dyn LlmBackend>>,
    /// Taxonomy suggestions are resolved against
    store: Arc<TaxonomyStore>,
}

impl ClassificationAdvisor {
    /// Create a new advisor with the given backends.
    pub fn new(backends: Vec<Arc<dyn LlmBackend>>, store: Arc<TaxonomyStore>) -> Self {
        Self {
            config: AdvisorConfig::default(),
            backends,
            store,
        }
    }

    /// Create with configuration.
    pub fn with_config(mut self, config: AdvisorConfig) -> Self {
        self.config = config;
        self
    }

    /// Taxonomy in use.
    pub fn store(&self) -> &TaxonomyStore {
        &self.store
    }

    /// Classify one item.
    pub async fn classify(&self, request: ClassificationRequest) -> ClassificationOutcome {
        let request_id = request.request_id.clone();
        self.outcome(&request_id, self.try_classify(request).await)
    }

    /// Classify several items concurrently.
    ///
    /// Each request gets its own call; one failure does not affect the
    /// others. Outcomes are returned in input order.
    pub async fn classify_batch(
        &self,
        requests: Vec<ClassificationRequest>,
    ) -> Vec<ClassificationOutcome> {
        futures::future::join_all(requests.into_iter().map(|request| self.classify(request))).await
    }

    /// Store an image, then classify the request with the stored URL.
    pub async fn classify_upload(
        &self,
        blobs: &dyn BlobStore,
        upload: ImageUpload,
        request: ClassificationRequest,
    ) -> ClassificationOutcome {
        let request_id = request.request_id.clone();

        let url = match blobs.store(upload).await {
            Ok(url) => url,
            Err(e) => return self.outcome(&request_id, Err(e.into())),
        };
        debug!(request_id = %request_id, url = %url, "Stored image for classification");

        self.classify(request.with_image(url)).await
    }

    /// Attempt a classification, surfacing the failure.
    pub async fn try_classify(
        &self,
        request: ClassificationRequest,
    ) -> Result<Classification, AdvisorError> {
        if request.is_empty() {
            return Err(AdvisorError::EmptyInput);
        }

        let backend = self.select_backend(request.has_image()).await?;
        self.process_request(&request, backend.as_ref()).await
    }

    /// Select the first available backend, skipping text-only models when
    /// the request carries an image.
    async fn select_backend(&self, needs_vision: bool) -> Result<Arc<dyn LlmBackend>, AdvisorError> {
        for backend in &self.backends {
            if needs_vision && !backend.capabilities().supports_vision {
                debug!(backend = %backend.id(), "Skipping text-only backend for image request");
                continue;
            }
            if backend.is_available().await {
                return Ok(Arc::clone(backend));
            }
        }
        Err(AdvisorError::NoBackendAvailable)
    }

    async fn process_request(
        &self,
        request: &ClassificationRequest,
        backend: &dyn LlmBackend,
    ) -> Result<Classification, AdvisorError> {
        let start = std::time::Instant::now();

        let shape = self.effective_shape(request.shape);
        let request = ClassificationRequest {
            shape,
            ..request.clone()
        };

        let user_prompt = ClassificationPrompt::build(&self.store, &request);
        let schema = reply_schema(request.kind, shape, request.has_image());

        let mut completion_request = CompletionRequest::user(user_prompt)
            .with_system(ClassificationPrompt::system_prompt())
            .with_max_tokens(self.config.max_tokens)
            .with_temperature(self.config.temperature)
            .with_json_schema(SCHEMA_NAME, schema);
        if let Some(url) = request.image_url.as_deref().filter(|_| request.has_image()) {
            completion_request = completion_request.with_image(url);
        }

        debug!(
            request_id = %request.request_id,
            backend = %backend.id(),
            kind = request.kind.as_str(),
            "Requesting classification"
        );

        let completion = backend.complete(completion_request).await?;
        let latency_ms = start.elapsed().as_millis() as u64;

        if completion.finish_reason != FinishReason::Stop {
            warn!(
                request_id = %request.request_id,
                backend = %backend.id(),
                finish_reason = ?completion.finish_reason,
                output_tokens = completion.usage.completion_tokens,
                "Reply did not finish normally"
            );
        }

        let reply = ClassificationReply::parse(&completion.content)?;
        let ranked = reply.ranked_codes();
        let mut suggestions =
            resolve_suggestions(&self.store, &ranked, reply.confidence, shape.limit());

        if suggestions.is_empty() {
            return Err(AdvisorError::NoResolvableCode {
                suggested: ranked.into_iter().map(|r| r.code).collect(),
            });
        }
        let primary = suggestions.remove(0);

        Ok(Classification {
            request_id: request.request_id.clone(),
            primary,
            alternates: suggestions,
            enrichment: ItemEnrichment::from(&reply),
            backend: backend.id().to_string(),
            taxonomy_revision: self.store.revision().to_string(),
            cost: ClassificationCost {
                input_tokens: completion.usage.prompt_tokens,
                output_tokens: completion.usage.completion_tokens,
                latency_ms,
            },
            classified_at: Utc::now(),
        })
    }

    /// Cap ranked requests at the configured maximum.
    fn effective_shape(&self, shape: SuggestionShape) -> SuggestionShape {
        match shape {
            SuggestionShape::Single => SuggestionShape::Single,
            SuggestionShape::Ranked { max } => SuggestionShape::Ranked {
                max: max.clamp(1, self.config.max_suggestions.max(1)),
            },
        }
    }

    fn outcome(
        &self,
        request_id: &str,
        result: Result<Classification, AdvisorError>,
    ) -> ClassificationOutcome {
        match result {
            Ok(classification) => {
                info!(
                    request_id = %request_id,
                    backend = %classification.backend,
                    code = %classification.primary.suggested_code,
                    alternates = classification.alternates.len(),
                    latency_ms = classification.cost.latency_ms,
                    "Classified item"
                );
                ClassificationOutcome::Classified(classification)
            }
            Err(AdvisorError::EmptyInput) => {
                debug!(request_id = %request_id, "Skipping empty classification request");
                ClassificationOutcome::none(request_id, NoClassificationReason::EmptyInput)
            }
            Err(e) => {
                let reason = e.reason();
                warn!(
                    request_id = %request_id,
                    reason = reason.as_str(),
                    error = %e,
                    "No classification available"
                );
                ClassificationOutcome::none(request_id, reason)
            }
        }
    }
}
