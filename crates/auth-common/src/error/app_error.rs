//! Application error types
//!
//! Unified error handling for the auth backend. Three kinds: configuration
//! errors are fatal at startup, validation errors belong to the client, and
//! database errors surface driver or session failures.

use serde::Serialize;
use std::fmt;
use validator::ValidationErrors;

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),
}

impl AppError {
    /// Get HTTP status code for this error
    ///
    /// The routing layer is external; this is the translation it consumes.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request
            Self::Validation(_) => 400,

            // 500 Internal Server Error
            Self::Config(_) | Self::Database(_) => 500,
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        let status = self.status_code();
        (400..500).contains(&status)
    }

    /// Create a validation error
    #[must_use]
    pub fn validation(msg: impl fmt::Display) -> Self {
        Self::Validation(msg.to_string())
    }

    /// Create a database error
    #[must_use]
    pub fn database(msg: impl fmt::Display) -> Self {
        Self::Database(msg.to_string())
    }
}

impl From<ValidationErrors> for AppError {
    /// Flatten validator output into one message, one `field: reason` part
    /// per offending field, sorted so the text is deterministic.
    fn from(errors: ValidationErrors) -> Self {
        let mut parts: Vec<String> = errors
            .field_errors()
            .iter()
            .map(|(field, field_errors)| {
                let reasons: Vec<String> = field_errors
                    .iter()
                    .filter_map(|e| e.message.as_ref().map(ToString::to_string))
                    .collect();
                if reasons.is_empty() {
                    format!("{field}: invalid value")
                } else {
                    format!("{field}: {}", reasons.join(", "))
                }
            })
            .collect();
        parts.sort_unstable();

        Self::Validation(parts.join("; "))
    }
}

/// Error response structure for API responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.error_code().to_string(),
            message: err.to_string(),
            details: None,
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        Self::from(&err)
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::Validation("test".to_string()).status_code(), 400);
        assert_eq!(AppError::Database("test".to_string()).status_code(), 500);
        assert_eq!(
            AppError::Config(ConfigError::MissingVar("DB_USER")).status_code(),
            500
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::Validation("test".to_string()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            AppError::Database("test".to_string()).error_code(),
            "DATABASE_ERROR"
        );
        assert_eq!(
            AppError::Config(ConfigError::MissingVar("DB_USER")).error_code(),
            "CONFIG_ERROR"
        );
    }

    #[test]
    fn test_is_client_error() {
        assert!(AppError::Validation("test".to_string()).is_client_error());
        assert!(!AppError::Database("test".to_string()).is_client_error());
    }

    #[test]
    fn test_config_error_message_names_variable() {
        let err = AppError::from(ConfigError::MissingVar("DB_PASSWORD"));
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: DB_PASSWORD"
        );
    }

    #[test]
    fn test_error_response() {
        let err = AppError::validation("email is required");
        let response = ErrorResponse::from(&err);

        assert_eq!(response.code, "VALIDATION_ERROR");
        assert_eq!(response.message, "Validation error: email is required");
        assert!(response.details.is_none());
    }
}
