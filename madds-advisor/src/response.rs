//! Classification outcome types.
//!
//! Classification is best-effort: the public result is always a
//! [`ClassificationOutcome`], and every failure collapses to
//! `NoClassification` with a typed reason.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use madds_taxonomy::{CatalogFields, MainCategory, Subcategory};

#[cfg(feature = "typescript")]
use ts_rs::TS;

use crate::schema::{ClassificationReply, Condition, Confidence, Urgency};

/// One resolved suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct ClassificationSuggestion {
    /// Padded subcategory code
    pub suggested_code: String,
    /// Code as the collaborator returned it
    pub raw_code: String,
    /// Why the collaborator picked it (ranked replies only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Resolved main category
    pub main_category: MainCategory,
    /// Resolved subcategory
    pub subcategory: Subcategory,
    /// Reported confidence (primary suggestion only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
}

impl ClassificationSuggestion {
    /// Denormalized fields a catalog entry would store for this suggestion.
    pub fn catalog_fields(&self) -> CatalogFields {
        CatalogFields {
            madds_code: self.suggested_code.clone(),
            madds_class: self.main_category.title.clone(),
            two_word_code: self.subcategory.two_word.clone(),
        }
    }
}

/// Text improvements returned with a classification.
///
/// The advisor never applies these; the caller decides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct ItemEnrichment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub improved_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub improved_description: Option<String>,
    /// Offers only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
    /// Needs only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency: Option<Urgency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
}

impl From<&ClassificationReply> for ItemEnrichment {
    fn from(reply: &ClassificationReply) -> Self {
        let non_blank = |s: &Option<String>| s.as_ref().filter(|s| !s.trim().is_empty()).cloned();
        Self {
            improved_title: non_blank(&reply.improved_title),
            improved_description: non_blank(&reply.improved_description),
            condition: reply.condition,
            urgency: reply.urgency,
            confidence: reply.confidence,
        }
    }
}

/// Cost of one collaborator call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct ClassificationCost {
    /// Number of input tokens processed
    pub input_tokens: u32,
    /// Number of output tokens generated
    pub output_tokens: u32,
    /// Wall time of the call in milliseconds
    pub latency_ms: u64,
}

/// A successful classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Classification {
    /// Request ID this answers
    pub request_id: String,
    /// Best resolved suggestion
    pub primary: ClassificationSuggestion,
    /// Remaining resolved suggestions, in rank order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternates: Vec<ClassificationSuggestion>,
    /// Text improvements from the reply
    pub enrichment: ItemEnrichment,
    /// Backend that answered
    pub backend: String,
    /// Taxonomy revision the codes were resolved against
    pub taxonomy_revision: String,
    /// Token usage and latency
    pub cost: ClassificationCost,
    /// When the classification completed
    #[cfg_attr(feature = "typescript", ts(type = "string"))]
    pub classified_at: DateTime<Utc>,
}

/// Why no classification is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum NoClassificationReason {
    /// Nothing to classify; no call was made
    EmptyInput,
    /// Image upload failed before classification
    UploadFailed,
    /// No configured backend reported itself available
    NoBackendAvailable,
    /// The collaborator call failed (network, timeout, HTTP error)
    BackendFailed,
    /// The reply did not match the schema
    MalformedResponse,
    /// None of the suggested codes resolved
    NoResolvableCode,
}

impl NoClassificationReason {
    /// Get string representation for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::UploadFailed => "upload_failed",
            Self::NoBackendAvailable => "no_backend_available",
            Self::BackendFailed => "backend_failed",
            Self::MalformedResponse => "malformed_response",
            Self::NoResolvableCode => "no_resolvable_code",
        }
    }
}

/// Result of a classification request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ClassificationOutcome {
    /// At least one code resolved
    Classified(Classification),
    /// No usable suggestion
    NoClassification {
        request_id: String,
        reason: NoClassificationReason,
    },
}

impl ClassificationOutcome {
    /// Build a no-classification outcome.
    pub fn none(request_id: impl Into<String>, reason: NoClassificationReason) -> Self {
        Self::NoClassification {
            request_id: request_id.into(),
            reason,
        }
    }

    /// Request ID this answers.
    pub fn request_id(&self) -> &str {
        match self {
            Self::Classified(c) => &c.request_id,
            Self::NoClassification { request_id, .. } => request_id,
        }
    }

    /// The classification, if any.
    pub fn classification(&self) -> Option<&Classification> {
        match self {
            Self::Classified(c) => Some(c),
            Self::NoClassification { .. } => None,
        }
    }

    /// Why there is no classification, if there isn't one.
    pub fn reason(&self) -> Option<NoClassificationReason> {
        match self {
            Self::Classified(_) => None,
            Self::NoClassification { reason, .. } => Some(*reason),
        }
    }

    /// Whether a suggestion is available.
    pub fn is_classified(&self) -> bool {
        matches!(self, Self::Classified(_))
    }

    /// Catalog fields for the primary suggestion.
    pub fn catalog_fields(&self) -> Option<CatalogFields> {
        self.classification().map(|c| c.primary.catalog_fields())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enrichment_drops_blank_text() {
        let reply = ClassificationReply {
            improved_title: Some("  ".to_string()),
            improved_description: Some("Warm, size M".to_string()),
            condition: Some(Condition::Used),
            ..Default::default()
        };
        let enrichment = ItemEnrichment::from(&reply);

        assert!(enrichment.improved_title.is_none());
        assert_eq!(enrichment.improved_description.as_deref(), Some("Warm, size M"));
        assert_eq!(enrichment.condition, Some(Condition::Used));
    }

    #[test]
    fn test_no_classification_serialization() {
        let outcome = ClassificationOutcome::none("req-9", NoClassificationReason::NoResolvableCode);
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["status"], "no_classification");
        assert_eq!(json["reason"], "no_resolvable_code");
        assert_eq!(outcome.request_id(), "req-9");
        assert!(outcome.catalog_fields().is_none());
        assert_eq!(outcome.reason().map(|r| r.as_str()), Some("no_resolvable_code"));
    }
}
