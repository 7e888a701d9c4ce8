//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use synthra_core::domain::DEFAULT_AUTHOR;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageConfig,
    /// Author assigned to posts that do not name one.
    pub default_author: String,
}

/// Where posts are persisted.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// JSON document holding the whole collection.
    pub posts_file: PathBuf,
    /// Directory for per-post backup files; `None` disables the mirror.
    pub backup_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let backup_enabled = env::var("POST_BACKUP_ENABLED")
            .map(|v| parse_flag(&v))
            .unwrap_or(true);

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5001),
            storage: StorageConfig {
                posts_file: env::var("POSTS_FILE")
                    .unwrap_or_else(|_| "blog_posts.json".to_string())
                    .into(),
                backup_dir: backup_enabled.then(|| {
                    env::var("POSTS_BACKUP_DIR")
                        .unwrap_or_else(|_| "posts".to_string())
                        .into()
                }),
            },
            default_author: env::var("BLOG_DEFAULT_AUTHOR")
                .ok()
                .filter(|a| !a.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
        }
    }
}

/// `false`, `0`, `no` and `off` (any case) disable a flag; anything else enables it.
fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}
