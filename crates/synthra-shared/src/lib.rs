//! # Synthra Shared
//!
//! Response envelopes and DTOs exchanged with the blog front-end.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
