//! Validation error types.

use expensa_shared::AppError;
use thiserror::Error;

/// A form field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A mandatory field is missing or blank.
    #[error("{field} is required")]
    Required {
        /// Field name.
        field: &'static str,
    },

    /// A quantity that must be strictly positive is zero or negative.
    #[error("{field} must be greater than zero")]
    NotPositive {
        /// Field name.
        field: &'static str,
    },

    /// A rate or amount is negative.
    #[error("{field} must not be negative")]
    Negative {
        /// Field name.
        field: &'static str,
    },

    /// Two fields contradict each other.
    #[error("{0}")]
    Inconsistent(&'static str),
}

impl ValidationError {
    /// Name of the rejected field, if the error is about a single field.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::Required { field } | Self::NotPositive { field } | Self::Negative { field } => {
                Some(*field)
            }
            Self::Inconsistent(_) => None,
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}
