//! Reply contract with the LLM collaborator.
//!
//! The JSON schema sent with each request and the typed reply it is
//! parsed into. A reply that does not deserialize is a malformed response.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};

#[cfg(feature = "typescript")]
use ts_rs::TS;

use crate::request::{ItemKind, SuggestionShape};

/// Name the schema is registered under with the backend.
pub const SCHEMA_NAME: &str = "madds_classification";

/// Physical condition of an offered item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    New,
    LikeNew,
    Used,
    AsIs,
}

/// How soon a need must be met.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Emergency,
    Urgent,
    Soon,
    Flexible,
}

/// The collaborator's self-reported confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// One ranked code as returned by the collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RankedCode {
    /// Raw code fragment, e.g. `"1"`, `"11"`, `"110"` or `"110.300"`
    #[serde(deserialize_with = "code_string")]
    pub code: String,
    /// Why this code fits
    #[serde(default)]
    pub reason: Option<String>,
}

/// Parsed collaborator reply.
///
/// Image replies name the text fields `title`/`description`; those fill in
/// the improved fields when the reply does not carry them itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawReply")]
pub struct ClassificationReply {
    pub improved_title: Option<String>,
    pub improved_description: Option<String>,
    pub condition: Option<Condition>,
    pub urgency: Option<Urgency>,
    pub confidence: Option<Confidence>,
    pub suggested_code: Option<String>,
    pub suggested_codes: Vec<RankedCode>,
}

/// Reply as it arrives on the wire.
#[derive(Deserialize)]
struct RawReply {
    #[serde(default)]
    improved_title: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    improved_description: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    condition: Option<Condition>,
    #[serde(default)]
    urgency: Option<Urgency>,
    #[serde(default)]
    confidence: Option<Confidence>,
    #[serde(default, deserialize_with = "optional_code_string")]
    suggested_code: Option<String>,
    #[serde(default)]
    suggested_codes: Vec<RankedCode>,
}

impl From<RawReply> for ClassificationReply {
    fn from(raw: RawReply) -> Self {
        Self {
            improved_title: raw.improved_title.or(raw.title),
            improved_description: raw.improved_description.or(raw.description),
            condition: raw.condition,
            urgency: raw.urgency,
            confidence: raw.confidence,
            suggested_code: raw.suggested_code,
            suggested_codes: raw.suggested_codes,
        }
    }
}

impl ClassificationReply {
    /// Parse reply text, tolerating a fenced code block around the JSON.
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(strip_code_fence(content))
    }

    /// Every suggested code in rank order: `suggested_code` first, then
    /// `suggested_codes`.
    pub fn ranked_codes(&self) -> Vec<RankedCode> {
        self.suggested_code
            .iter()
            .map(|code| RankedCode {
                code: code.clone(),
                reason: None,
            })
            .chain(self.suggested_codes.iter().cloned())
            .collect()
    }

    /// Whether the reply carries any code at all.
    pub fn has_codes(&self) -> bool {
        self.suggested_code.is_some() || !self.suggested_codes.is_empty()
    }
}

fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Codes may arrive as strings or bare numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCode {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawCode> for String {
    fn from(raw: RawCode) -> Self {
        match raw {
            RawCode::Text(text) => text,
            RawCode::Number(number) => number.to_string(),
        }
    }
}

fn code_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    RawCode::deserialize(deserializer).map(String::from)
}

fn optional_code_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Option::<RawCode>::deserialize(deserializer).map(|raw| raw.map(String::from))
}

/// JSON schema for the reply to a request of this kind and shape.
pub fn reply_schema(kind: ItemKind, shape: SuggestionShape, with_image: bool) -> Value {
    let (title_field, description_field) = if with_image {
        ("title", "description")
    } else {
        ("improved_title", "improved_description")
    };

    let mut properties = serde_json::Map::new();
    properties.insert(title_field.to_string(), json!({ "type": "string" }));
    properties.insert(description_field.to_string(), json!({ "type": "string" }));

    match kind {
        ItemKind::Offer => {
            properties.insert(
                "condition".to_string(),
                json!({ "type": "string", "enum": ["new", "like_new", "used", "as_is"] }),
            );
        }
        ItemKind::Need => {
            properties.insert(
                "urgency".to_string(),
                json!({ "type": "string", "enum": ["emergency", "urgent", "soon", "flexible"] }),
            );
        }
    }

    let required = match shape {
        SuggestionShape::Single => {
            properties.insert("suggested_code".to_string(), json!({ "type": "string" }));
            "suggested_code"
        }
        SuggestionShape::Ranked { max } => {
            properties.insert(
                "suggested_codes".to_string(),
                json!({
                    "type": "array",
                    "maxItems": max.max(1),
                    "items": {
                        "type": "object",
                        "properties": {
                            "code": { "type": "string" },
                            "reason": { "type": "string" }
                        },
                        "required": ["code"]
                    }
                }),
            );
            "suggested_codes"
        }
    };

    properties.insert(
        "confidence".to_string(),
        json!({ "type": "string", "enum": ["high", "medium", "low"] }),
    );

    json!({
        "type": "object",
        "properties": properties,
        "required": [required]
    })
}
