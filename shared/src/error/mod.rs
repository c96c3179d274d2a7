//! Unified error system for the back-office suite
//!
//! - [`ErrorCode`]: standardized error codes shared with the backend
//! - [`ErrorCategory`]: classification of errors by domain
//! - [`AppError`]: rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 6xxx: Menu errors (items, categories)
//! - 7xxx: Table and zone errors
//! - 8xxx: Import errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::NotFound);
//! let err = AppError::validation("name must not be empty")
//!     .with_detail("field", "name");
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
