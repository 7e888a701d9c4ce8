//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod mirror;
mod store;

pub use mirror::PostMirror;
pub use store::PostStore;
