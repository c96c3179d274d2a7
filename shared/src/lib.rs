//! Shared types for the back-office suite
//!
//! Common types used across the client and application crates: domain
//! models, unified error codes, and the API response envelope.

pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use response::ApiResponse;
