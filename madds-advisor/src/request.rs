//! Classification request types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Default number of ranked suggestions to ask for.
pub const DEFAULT_RANKED_SUGGESTIONS: usize = 3;

/// What the person is doing with the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Sharing something they have
    #[default]
    Offer,
    /// Asking for something they need
    Need,
}

impl ItemKind {
    /// Get string representation for prompts and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Offer => "offer",
            Self::Need => "need",
        }
    }
}

/// How many suggestions to ask the collaborator for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum SuggestionShape {
    /// One `suggested_code`
    #[default]
    Single,
    /// Up to `max` ranked `suggested_codes`, each with a reason
    Ranked { max: usize },
}

impl SuggestionShape {
    /// Ranked shape with the default size.
    pub fn ranked() -> Self {
        Self::Ranked {
            max: DEFAULT_RANKED_SUGGESTIONS,
        }
    }

    /// Most suggestions this shape keeps.
    pub fn limit(&self) -> usize {
        match self {
            Self::Single => 1,
            Self::Ranked { max } => (*max).max(1),
        }
    }
}

/// Request to classify one item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct ClassificationRequest {
    /// Unique request identifier
    pub request_id: String,
    /// Offer or need
    pub kind: ItemKind,
    /// Title as entered (may be empty)
    pub title: String,
    /// Description as entered (may be empty)
    pub description: String,
    /// Image reference returned by blob storage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Suggestion shape
    pub shape: SuggestionShape,
    /// When the request was made
    #[cfg_attr(feature = "typescript", ts(type = "string"))]
    pub requested_at: DateTime<Utc>,
}

impl ClassificationRequest {
    /// Create a new request.
    pub fn new(kind: ItemKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            request_id: uuid::Uuid::new_v4().to_string(),
            kind,
            title: title.into(),
            description: description.into(),
            image_url: None,
            shape: SuggestionShape::Single,
            requested_at: Utc::now(),
        }
    }

    /// Request for an item someone wants to share.
    pub fn offer(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ItemKind::Offer, title, description)
    }

    /// Request for an item someone needs.
    pub fn need(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ItemKind::Need, title, description)
    }

    /// Attach an image reference.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Set suggestion shape.
    pub fn with_shape(mut self, shape: SuggestionShape) -> Self {
        self.shape = shape;
        self
    }

    /// Set request ID.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = request_id.into();
        self
    }

    /// Whether there is nothing to classify: blank title, blank description
    /// and no image.
    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty()
            && self.description.trim().is_empty()
            && self.image_url.as_deref().map_or(true, |u| u.trim().is_empty())
    }

    /// Whether this request carries an image.
    pub fn has_image(&self) -> bool {
        self.image_url.as_deref().is_some_and(|u| !u.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = ClassificationRequest::need("Crib", "For a newborn")
            .with_shape(SuggestionShape::ranked())
            .with_request_id("req-1");

        assert_eq!(request.kind, ItemKind::Need);
        assert_eq!(request.request_id, "req-1");
        assert_eq!(request.shape.limit(), DEFAULT_RANKED_SUGGESTIONS);
        assert!(!request.has_image());
    }

    #[test]
    fn test_empty_detection() {
        assert!(ClassificationRequest::offer("", "").is_empty());
        assert!(ClassificationRequest::offer("  ", "\n").is_empty());
        assert!(!ClassificationRequest::offer("", "wool blanket").is_empty());

        let image_only = ClassificationRequest::offer("", "").with_image("https://blobs.example/1.jpg");
        assert!(!image_only.is_empty());
        assert!(image_only.has_image());
    }

    #[test]
    fn test_shape_serialization() {
        let json = serde_json::to_value(SuggestionShape::Ranked { max: 3 }).unwrap();
        assert_eq!(json, serde_json::json!({"shape": "ranked", "max": 3}));
        assert_eq!(SuggestionShape::Ranked { max: 0 }.limit(), 1);
    }
}
