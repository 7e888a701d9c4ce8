use chrono::{DateTime, Local, Locale, SecondsFormat};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ingest::PostFields;

pub const DEFAULT_AUTHOR: &str = "Camila Goulart";
pub const DEFAULT_READ_TIME: &str = "5 min";
pub const DEFAULT_CATEGORY: &str = "IA";
pub const DEFAULT_TAGS: [&str; 3] = ["IA", "Automação", "Synthra"];

/// Placeholders used when an ingested payload lacks the text fields.
pub const PLACEHOLDER_TITLE: &str = "Novo Artigo";
pub const PLACEHOLDER_EXCERPT: &str = "Artigo gerado automaticamente.";

/// Maximum length, in characters, of a derived telegram summary.
pub const SUMMARY_MAX_CHARS: usize = 200;

const ID_LEN: usize = 8;
const DATE_FORMAT: &str = "%d de %B, %Y";

/// Post entity - a published blog article.
///
/// Field names on the wire and on disk follow the front-end's camelCase
/// convention, except `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub date: String,
    pub read_time: String,
    pub category: String,
    pub tags: Vec<String>,
    pub telegram_summary: String,
    #[serde(rename = "created_at")]
    pub created_at: String,
}

/// Values applied to fields a submission leaves out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDefaults {
    pub author: String,
    pub read_time: String,
    pub category: String,
    pub tags: Vec<String>,
}

impl Default for PostDefaults {
    fn default() -> Self {
        Self {
            author: DEFAULT_AUTHOR.to_string(),
            read_time: DEFAULT_READ_TIME.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            tags: DEFAULT_TAGS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl PostDefaults {
    /// Defaults with a different author name.
    pub fn with_author(author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            ..Self::default()
        }
    }
}

impl Post {
    /// Build a canonical post, resolving every absent field to its default.
    ///
    /// The telegram summary falls back to the *resolved* excerpt, so a
    /// placeholder excerpt also yields a placeholder summary.
    pub fn assemble(
        id: String,
        fields: PostFields,
        defaults: &PostDefaults,
        now: DateTime<Local>,
    ) -> Self {
        let excerpt = fields
            .excerpt
            .unwrap_or_else(|| PLACEHOLDER_EXCERPT.to_string());
        let telegram_summary = fields
            .telegram_summary
            .unwrap_or_else(|| summarize(&excerpt));

        Self {
            id,
            title: fields
                .title
                .unwrap_or_else(|| PLACEHOLDER_TITLE.to_string()),
            content: fields.content.unwrap_or_default(),
            author: fields.author.unwrap_or_else(|| defaults.author.clone()),
            date: now
                .format_localized(DATE_FORMAT, Locale::pt_BR)
                .to_string(),
            read_time: fields
                .read_time
                .unwrap_or_else(|| defaults.read_time.clone()),
            category: fields
                .category
                .unwrap_or_else(|| defaults.category.clone()),
            tags: fields.tags.unwrap_or_else(|| defaults.tags.clone()),
            telegram_summary,
            created_at: now.to_rfc3339_opts(SecondsFormat::Micros, false),
            excerpt,
        }
    }
}

/// First [`SUMMARY_MAX_CHARS`] characters of `text`.
pub fn summarize(text: &str) -> String {
    text.chars().take(SUMMARY_MAX_CHARS).collect()
}

/// Generate a short opaque post id (32 random bits, hex encoded).
pub fn generate_post_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(ID_LEN);
    id
}
