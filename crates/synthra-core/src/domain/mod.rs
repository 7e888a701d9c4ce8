//! Domain entities and the pure logic around them.

pub mod collection;
pub mod ingest;
mod post;

pub use ingest::{IngestPayload, PostFields};
pub use post::{
    DEFAULT_AUTHOR, PLACEHOLDER_EXCERPT, PLACEHOLDER_TITLE, Post, PostDefaults, SUMMARY_MAX_CHARS,
    generate_post_id, summarize,
};
