use async_trait::async_trait;

use crate::domain::Post;
use crate::error::StoreError;

/// Secondary sink that keeps a copy of each post outside the main collection.
#[async_trait]
pub trait PostMirror: Send + Sync {
    async fn store(&self, post: &Post) -> Result<(), StoreError>;

    /// Remove the copy for `id`; a missing copy is not an error.
    async fn remove(&self, id: &str) -> Result<(), StoreError>;
}
