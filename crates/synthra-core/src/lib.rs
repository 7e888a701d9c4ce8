//! # Synthra Core
//!
//! The domain layer of the Synthra blog service: the post model, the
//! ingestion normalizer for webhook payloads, storage ports, and the
//! service that serializes every read-modify-write of the collection.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::{DomainError, StoreError};
pub use service::PostService;
