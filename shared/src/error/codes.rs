//! Unified error codes shared with the restaurant backend
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 6xxx: Menu errors (items, categories)
//! - 7xxx: Table and zone errors
//! - 8xxx: Import errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 6xxx: Menu ====================
    /// Menu item not found
    MenuItemNotFound = 6001,
    /// Category not found
    CategoryNotFound = 6002,
    /// Category name already exists
    CategoryNameExists = 6003,
    /// Category still has menu items
    CategoryHasItems = 6004,
    /// Menu item name already exists
    MenuItemNameExists = 6005,
    /// Modifier group not found
    ModifierGroupNotFound = 6006,

    // ==================== 7xxx: Table / Zone ====================
    /// Table not found
    TableNotFound = 7001,
    /// Zone not found
    ZoneNotFound = 7002,
    /// Zone name already exists
    ZoneNameExists = 7003,
    /// Zone still has tables
    ZoneHasTables = 7004,
    /// Table name already exists in zone
    TableNameExists = 7005,

    // ==================== 8xxx: Import ====================
    /// Import file could not be parsed
    ImportFileInvalid = 8001,
    /// Import mode is not one of create/update/upsert
    ImportModeInvalid = 8002,
    /// One or more import rows failed
    ImportRowFailed = 8003,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Network error (transient)
    NetworkError = 9003,
    /// Request timed out (transient)
    TimeoutError = 9004,
}

impl ErrorCode {
    /// Get the numeric code value
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default human-readable message for this code
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::InvalidFormat => "Invalid format",
            Self::RequiredField => "Required field missing",
            Self::ValueOutOfRange => "Value out of range",

            Self::MenuItemNotFound => "Menu item not found",
            Self::CategoryNotFound => "Category not found",
            Self::CategoryNameExists => "Category name already exists",
            Self::CategoryHasItems => "Category still has menu items",
            Self::MenuItemNameExists => "Menu item name already exists",
            Self::ModifierGroupNotFound => "Modifier group not found",

            Self::TableNotFound => "Table not found",
            Self::ZoneNotFound => "Zone not found",
            Self::ZoneNameExists => "Zone name already exists",
            Self::ZoneHasTables => "Zone still has tables",
            Self::TableNameExists => "Table name already exists in zone",

            Self::ImportFileInvalid => "Import file could not be parsed",
            Self::ImportModeInvalid => "Invalid import mode",
            Self::ImportRowFailed => "One or more import rows failed",

            Self::InternalError => "Internal error",
            Self::NetworkError => "Network error",
            Self::TimeoutError => "Request timed out",
        }
    }

    /// Format as an `Exxxx` code string (the envelope representation)
    pub fn code_str(&self) -> String {
        format!("E{:04}", self.code())
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code as u16
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Menu
            6001 => Ok(ErrorCode::MenuItemNotFound),
            6002 => Ok(ErrorCode::CategoryNotFound),
            6003 => Ok(ErrorCode::CategoryNameExists),
            6004 => Ok(ErrorCode::CategoryHasItems),
            6005 => Ok(ErrorCode::MenuItemNameExists),
            6006 => Ok(ErrorCode::ModifierGroupNotFound),

            // Table / Zone
            7001 => Ok(ErrorCode::TableNotFound),
            7002 => Ok(ErrorCode::ZoneNotFound),
            7003 => Ok(ErrorCode::ZoneNameExists),
            7004 => Ok(ErrorCode::ZoneHasTables),
            7005 => Ok(ErrorCode::TableNameExists),

            // Import
            8001 => Ok(ErrorCode::ImportFileInvalid),
            8002 => Ok(ErrorCode::ImportModeInvalid),
            8003 => Ok(ErrorCode::ImportRowFailed),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),

            other => Err(InvalidErrorCode(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for code in [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::AlreadyExists,
            ErrorCode::TableNotFound,
            ErrorCode::ImportRowFailed,
            ErrorCode::NetworkError,
        ] {
            let raw: u16 = code.into();
            assert_eq!(ErrorCode::try_from(raw), Ok(code));
        }
    }

    #[test]
    fn test_invalid_code() {
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
    }

    #[test]
    fn test_code_str() {
        assert_eq!(ErrorCode::Success.code_str(), "E0000");
        assert_eq!(ErrorCode::TableNotFound.code_str(), "E7001");
    }
}
