//! Application state - shared across all handlers.

use std::sync::Arc;

use synthra_core::PostService;
use synthra_core::domain::PostDefaults;
use synthra_core::ports::PostStore;
use synthra_infra::{FileBackupMirror, JsonFilePostStore};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostService>,
}

impl AppState {
    /// Build the application state from configuration.
    pub async fn new(config: &AppConfig) -> Self {
        let storage = &config.storage;
        let store: Arc<dyn PostStore> = Arc::new(JsonFilePostStore::new(&storage.posts_file));
        tracing::info!(path = %storage.posts_file.display(), "Using JSON file post store");

        let mut service = PostService::new(store, PostDefaults::with_author(&config.default_author));

        match &storage.backup_dir {
            Some(dir) => match FileBackupMirror::init(dir).await {
                Ok(mirror) => {
                    tracing::info!(dir = %dir.display(), "Per-post backups enabled");
                    service = service.with_mirror(Arc::new(mirror));
                }
                Err(e) => {
                    tracing::error!(
                        dir = %dir.display(),
                        error = %e,
                        "Failed to prepare backup directory. Continuing without backups."
                    );
                }
            },
            None => tracing::info!("Per-post backups disabled"),
        }

        tracing::info!("Application state initialized");

        Self::from_service(service)
    }

    pub fn from_service(service: PostService) -> Self {
        Self {
            posts: Arc::new(service),
        }
    }
}
