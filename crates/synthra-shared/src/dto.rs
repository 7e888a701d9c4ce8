//! Data Transfer Objects - payloads placed inside [`crate::ApiResponse`].

use serde::{Deserialize, Serialize};
use synthra_core::domain::Post;

/// `GET /api/posts`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListResponse {
    pub posts: Vec<Post>,
    pub total: usize,
}

impl From<Vec<Post>> for PostListResponse {
    fn from(posts: Vec<Post>) -> Self {
        Self {
            total: posts.len(),
            posts,
        }
    }
}

/// A single post, as returned by get and direct creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub post: Post,
}

/// Acknowledgement for a webhook-created post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookReceipt {
    pub post_id: String,
    pub title: String,
}

impl From<&Post> for WebhookReceipt {
    fn from(post: &Post) -> Self {
        Self {
            post_id: post.id.clone(),
            title: post.title.clone(),
        }
    }
}

/// Body for endpoints that only report a message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Empty {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub timestamp: String,
    pub version: String,
}
