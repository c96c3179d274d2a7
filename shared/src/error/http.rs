//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::MenuItemNotFound
            | Self::CategoryNotFound
            | Self::ModifierGroupNotFound
            | Self::TableNotFound
            | Self::ZoneNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists
            | Self::CategoryNameExists
            | Self::CategoryHasItems
            | Self::MenuItemNameExists
            | Self::ZoneNameExists
            | Self::ZoneHasTables
            | Self::TableNameExists => StatusCode::CONFLICT,

            // 503 Service Unavailable (transient errors, client can retry)
            Self::NetworkError | Self::TimeoutError => StatusCode::SERVICE_UNAVAILABLE,

            // 500 Internal Server Error
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (default for validation/business errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// Classify a backend HTTP status into a generic error code
    ///
    /// Used at call sites when the response body carries no structured code:
    /// 409 means conflict/duplicate, 400 means validation, anything else is
    /// generic.
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::CONFLICT => Self::AlreadyExists,
            StatusCode::BAD_REQUEST => Self::ValidationFailed,
            StatusCode::NOT_FOUND => Self::NotFound,
            StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => Self::TimeoutError,
            StatusCode::SERVICE_UNAVAILABLE => Self::NetworkError,
            s if s.is_server_error() => Self::InternalError,
            _ => Self::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_status() {
        assert_eq!(ErrorCode::Success.http_status(), StatusCode::OK);
    }

    #[test]
    fn test_conflict_codes() {
        assert_eq!(ErrorCode::ZoneNameExists.http_status(), StatusCode::CONFLICT);
        assert_eq!(ErrorCode::AlreadyExists.http_status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_from_status() {
        assert_eq!(
            ErrorCode::from_status(StatusCode::CONFLICT),
            ErrorCode::AlreadyExists
        );
        assert_eq!(
            ErrorCode::from_status(StatusCode::BAD_REQUEST),
            ErrorCode::ValidationFailed
        );
        assert_eq!(
            ErrorCode::from_status(StatusCode::INTERNAL_SERVER_ERROR),
            ErrorCode::InternalError
        );
        assert_eq!(
            ErrorCode::from_status(StatusCode::IM_A_TEAPOT),
            ErrorCode::Unknown
        );
    }
}
