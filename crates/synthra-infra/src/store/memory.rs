//! In-memory post store - used in tests and when no file should be touched.

use async_trait::async_trait;
use tokio::sync::RwLock;

use synthra_core::StoreError;
use synthra_core::domain::Post;
use synthra_core::ports::PostStore;

/// Post store holding the collection in process memory.
///
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `posts` (most recent first).
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn load_all(&self) -> Result<Vec<Post>, StoreError> {
        Ok(self.posts.read().await.clone())
    }

    async fn save_all(&self, posts: &[Post]) -> Result<(), StoreError> {
        let mut stored = self.posts.write().await;
        *stored = posts.to_vec();
        Ok(())
    }
}
