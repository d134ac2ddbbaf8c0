//! Error types and result aliases for the application.

use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong with the configuration.
        message: String,
    },

    /// Session store failure.
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Analysis service failure.
    #[error("Analysis service error: {0}")]
    Service(#[from] ServiceError),
}

/// Session store errors
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading or writing the session file failed.
    #[error("Session file error: {0}")]
    Io(#[from] std::io::Error),

    /// The session could not be encoded or decoded.
    #[error("Session encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Analysis service errors.
///
/// These never reach callers of the fetcher: every failure degrades to the
/// deterministic fallback result, with the error captured as the
/// degradation reason.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The service answered with a non-2xx status.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        message: String,
    },

    /// The response body did not match the expected shape.
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// Parse failure detail.
        message: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("Request timeout after {timeout_ms}ms")]
    Timeout {
        /// Configured timeout in milliseconds.
        timeout_ms: u64,
    },

    /// Transport-level failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for session store operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Result type alias for analysis service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::Config {
            message: "bad endpoint".to_string(),
        };
        assert_eq!(err.to_string(), "Configuration error: bad endpoint");
    }

    #[test]
    fn test_service_error_display() {
        let err = ServiceError::Api {
            status: 503,
            message: "service unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 503 - service unavailable");

        let err = ServiceError::InvalidResponse {
            message: "malformed JSON".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid response: malformed JSON");

        let err = ServiceError::Timeout { timeout_ms: 5000 };
        assert_eq!(err.to_string(), "Request timeout after 5000ms");
    }

    #[test]
    fn test_session_error_conversion_to_app_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let session_err = SessionError::Io(io_err);
        let app_err: AppError = session_err.into();
        assert!(matches!(app_err, AppError::Session(_)));
    }

    #[test]
    fn test_service_error_conversion_to_app_error() {
        let service_err = ServiceError::Timeout { timeout_ms: 1000 };
        let app_err: AppError = service_err.into();
        assert!(matches!(app_err, AppError::Service(_)));
    }
}
