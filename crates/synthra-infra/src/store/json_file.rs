//! JSON-file post store - the whole collection lives in one array document.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use synthra_core::StoreError;
use synthra_core::domain::Post;
use synthra_core::ports::PostStore;

/// Post store backed by a single pretty-printed JSON array on disk.
///
/// Writes overwrite the file in place; callers serialize access through
/// `PostService`.
#[derive(Debug, Clone)]
pub struct JsonFilePostStore {
    path: PathBuf,
}

impl JsonFilePostStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PostStore for JsonFilePostStore {
    async fn load_all(&self) -> Result<Vec<Post>, StoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Posts file not found, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn save_all(&self, posts: &[Post]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_vec_pretty(posts)?;
        fs::write(&self.path, json).await?;

        tracing::debug!(path = %self.path.display(), count = posts.len(), "Posts saved");
        Ok(())
    }
}
