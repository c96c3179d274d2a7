//! Error types

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// The primary error type for the back-office suite:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details (field-level errors, context)
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", r))
            .with_detail("resource", r)
    }

    /// Create an already exists error
    pub fn already_exists(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::AlreadyExists, format!("{} already exists", r))
            .with_detail("resource", r)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::NetworkError, msg)
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    // ==================== Field errors ====================

    /// Distribute a validation message onto known form field names.
    ///
    /// The backend may return structured per-field errors under the `fields`
    /// detail key; those are honored first. Otherwise the message is matched
    /// against each candidate field name by case-insensitive substring — a
    /// fragile but long-standing convention of this backend (messages read
    /// "name already exists", "price must be positive", ...).
    pub fn field_errors(&self, known_fields: &[&str]) -> HashMap<String, String> {
        let mut out = HashMap::new();

        if let Some(fields) = self.details.as_ref().and_then(|d| d.get("fields")) {
            if let Some(map) = fields.as_object() {
                for (field, msg) in map {
                    if let Some(msg) = msg.as_str() {
                        out.insert(field.clone(), msg.to_string());
                    }
                }
                if !out.is_empty() {
                    return out;
                }
            }
        }

        let lowered = self.message.to_lowercase();
        for field in known_fields {
            if lowered.contains(&field.to_lowercase()) {
                out.insert(field.to_string(), self.message.clone());
            }
        }
        out
    }
}

/// Result type using [`AppError`]
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_message() {
        let err = AppError::new(ErrorCode::TableNotFound);
        assert_eq!(err.message, "Table not found");
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_with_detail() {
        let err = AppError::validation("name must not be empty").with_detail("field", "name");
        let details = err.details.unwrap();
        assert_eq!(details["field"], "name");
    }

    #[test]
    fn test_field_errors_substring() {
        let err = AppError::validation("Name already exists");
        let errors = err.field_errors(&["name", "price"]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["name"], "Name already exists");
    }

    #[test]
    fn test_field_errors_structured_takes_precedence() {
        let err = AppError::validation("validation failed")
            .with_detail("fields", serde_json::json!({"price": "must be positive"}));
        let errors = err.field_errors(&["name", "price"]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["price"], "must be positive");
    }

    #[test]
    fn test_field_errors_no_match() {
        let err = AppError::validation("something went wrong");
        assert!(err.field_errors(&["name", "price"]).is_empty());
    }
}
