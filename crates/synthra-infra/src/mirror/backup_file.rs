//! Per-post backup files: `<dir>/<id>.json`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use synthra_core::StoreError;
use synthra_core::domain::Post;
use synthra_core::ports::PostMirror;

/// Writes each created post to its own JSON file and removes it on delete.
#[derive(Debug, Clone)]
pub struct FileBackupMirror {
    dir: PathBuf,
}

impl FileBackupMirror {
    /// Create the mirror, making sure the backup directory exists.
    pub async fn init(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Backup path for `id`, or `None` when the id could escape the directory.
    fn file_for(&self, id: &str) -> Option<PathBuf> {
        let safe = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        safe.then(|| self.dir.join(format!("{id}.json")))
    }
}

#[async_trait]
impl PostMirror for FileBackupMirror {
    async fn store(&self, post: &Post) -> Result<(), StoreError> {
        let Some(path) = self.file_for(&post.id) else {
            tracing::warn!(post_id = %post.id, "Skipping backup for unsafe post id");
            return Ok(());
        };

        let json = serde_json::to_vec_pretty(post)?;
        fs::write(&path, json).await?;
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<(), StoreError> {
        let Some(path) = self.file_for(id) else {
            return Ok(());
        };

        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
