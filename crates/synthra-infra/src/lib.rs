//! # Synthra Infrastructure
//!
//! Concrete implementations of the ports defined in `synthra-core`:
//! the JSON-file post store, an in-memory store, and the per-post backup
//! mirror.

pub mod mirror;
pub mod store;

pub use mirror::FileBackupMirror;
pub use store::{InMemoryPostStore, JsonFilePostStore};
