//! Client error types

use http::StatusCode;
use shared::error::{AppError, ErrorCode};
use shared::response::ApiResponse;
use thiserror::Error;

/// Client error type
///
/// Non-success statuses are categorized at the call site: 409 means
/// conflict/duplicate, 400 means validation, everything else is generic.
/// The raw body text is preserved so validation messages can still be
/// distributed onto form fields.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport failed (DNS, TLS, timeout, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required (401)
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied (403)
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Conflict / duplicate (409)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Validation error (400)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Generic backend error (anything else)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl From<validator::ValidationErrors> for ClientError {
    fn from(e: validator::ValidationErrors) -> Self {
        Self::Validation(e.to_string())
    }
}

impl ClientError {
    /// Categorize a non-success response.
    ///
    /// The body may be a bare message or the standard envelope; the
    /// envelope's message wins when it parses.
    pub fn from_status(status: StatusCode, body: String) -> Self {
        let message = match serde_json::from_str::<ApiResponse<serde_json::Value>>(&body) {
            Ok(envelope) => envelope.message,
            Err(_) => body,
        };

        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::FORBIDDEN => Self::Forbidden(message),
            StatusCode::NOT_FOUND => Self::NotFound(message),
            StatusCode::CONFLICT => Self::Conflict(message),
            StatusCode::BAD_REQUEST => Self::Validation(message),
            _ => Self::Internal(message),
        }
    }

    /// Convert into the shared [`AppError`] the UI layer consumes
    pub fn to_app_error(&self) -> AppError {
        match self {
            Self::Http(e) if e.is_timeout() => {
                AppError::with_message(ErrorCode::TimeoutError, e.to_string())
            }
            Self::Http(e) => AppError::network(e.to_string()),
            Self::InvalidResponse(m) => AppError::internal(m.clone()),
            Self::Unauthorized => AppError::with_message(
                ErrorCode::InvalidRequest,
                "Authentication required",
            ),
            Self::Forbidden(m) => AppError::invalid_request(m.clone()),
            Self::NotFound(m) => AppError::with_message(ErrorCode::NotFound, m.clone()),
            Self::Conflict(m) => AppError::with_message(ErrorCode::AlreadyExists, m.clone()),
            Self::Validation(m) => AppError::validation(m.clone()),
            Self::Internal(m) => AppError::internal(m.clone()),
            Self::Serialization(e) => AppError::internal(e.to_string()),
        }
    }
}
