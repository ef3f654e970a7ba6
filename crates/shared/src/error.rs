//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input rejected before it reached the API.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Referenced record does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The API answered with `success: false`.
    #[error("API error: {0}")]
    Api(String),

    /// The request never produced a usable HTTP response.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response body could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the error code used in logs and user-facing messages.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Api(_) => "API_ERROR",
            Self::Transport(_) => "TRANSPORT_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns true if the failure happened before the server could answer.
    #[must_use]
    pub const fn is_connectivity(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}
