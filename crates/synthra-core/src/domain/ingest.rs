//! Ingestion normalizer - turns inbound JSON into candidate post fields.
//!
//! Two payload shapes are recognized: a flat object carrying post fields
//! directly, and an AI chat-completion response whose first choice holds the
//! article (ideally as a JSON object encoded in a string).

use serde_json::{Map, Value};

use crate::error::DomainError;

pub const FALLBACK_TITLE: &str = "Novo Artigo de IA";
pub const FALLBACK_EXCERPT: &str = "Artigo gerado automaticamente pela IA.";
pub const FALLBACK_CATEGORY: &str = "IA";
pub const FALLBACK_READ_TIME: &str = "5 min";

/// Fields the direct creation path refuses to default, in check order.
pub const REQUIRED_FIELDS: [&str; 3] = ["title", "content", "excerpt"];

/// Candidate post fields; `None` means "apply the default".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFields {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub read_time: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub telegram_summary: Option<String>,
}

impl PostFields {
    /// Read fields from a JSON object. Values of the wrong type count as absent.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        let text = |key: &str| object.get(key).and_then(Value::as_str).map(str::to_owned);

        Self {
            title: text("title"),
            excerpt: text("excerpt"),
            content: text("content"),
            author: text("author"),
            read_time: text("readTime"),
            category: text("category"),
            tags: object.get("tags").and_then(Value::as_array).map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect()
            }),
            telegram_summary: text("telegramSummary"),
        }
    }

    /// Read fields from any JSON value; non-objects yield no fields.
    pub fn from_value(raw: &Value) -> Self {
        raw.as_object().map(Self::from_object).unwrap_or_default()
    }

    /// Fields for the direct creation path, which rejects submissions missing
    /// any of [`REQUIRED_FIELDS`]. The first missing one is reported.
    pub fn require_direct(raw: &Value) -> Result<Self, DomainError> {
        let fields = Self::from_value(raw);
        let present = [
            fields.title.is_some(),
            fields.content.is_some(),
            fields.excerpt.is_some(),
        ];

        match REQUIRED_FIELDS.into_iter().zip(present).find(|(_, ok)| !ok) {
            Some((name, _)) => Err(DomainError::MissingField(name)),
            None => Ok(fields),
        }
    }

    /// Candidate built around completion text that is not a JSON object.
    fn fallback(content: String) -> Self {
        Self {
            title: Some(FALLBACK_TITLE.to_string()),
            excerpt: Some(FALLBACK_EXCERPT.to_string()),
            content: Some(content),
            category: Some(FALLBACK_CATEGORY.to_string()),
            read_time: Some(FALLBACK_READ_TIME.to_string()),
            ..Self::default()
        }
    }
}

/// Shape of an inbound webhook payload.
#[derive(Debug, Clone, PartialEq)]
pub enum IngestPayload {
    /// Flat object of post fields.
    Direct(PostFields),
    /// Wrapped completion response; `content` is `choices[0].message.content`.
    Completion { content: String },
}

impl IngestPayload {
    /// Classify a raw payload. Never fails.
    pub fn detect(raw: &Value) -> Self {
        let first_choice = raw
            .get("choices")
            .and_then(Value::as_array)
            .and_then(|choices| choices.first());

        match first_choice {
            Some(choice) => {
                let content = match choice.pointer("/message/content") {
                    Some(Value::String(text)) => text.clone(),
                    None | Some(Value::Null) => String::new(),
                    Some(other) => other.to_string(),
                };
                Self::Completion { content }
            }
            None => Self::Direct(PostFields::from_value(raw)),
        }
    }

    /// Resolve to candidate fields. Completion text that does not parse as a
    /// JSON object is kept verbatim as the body of a fallback article.
    pub fn into_fields(self) -> PostFields {
        match self {
            Self::Direct(fields) => fields,
            Self::Completion { content } => match serde_json::from_str::<Value>(&content) {
                Ok(Value::Object(object)) => PostFields::from_object(&object),
                _ => PostFields::fallback(content),
            },
        }
    }
}
