use async_trait::async_trait;

use crate::domain::Post;
use crate::error::StoreError;

/// Whole-collection persistence for posts.
///
/// Implementations read and write the entire ordered sequence at once; there
/// is no partial update.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Load every stored post, most recent first. A store that has never been
    /// written returns an empty sequence.
    async fn load_all(&self) -> Result<Vec<Post>, StoreError>;

    /// Replace the stored collection with `posts`.
    async fn save_all(&self, posts: &[Post]) -> Result<(), StoreError>;
}
