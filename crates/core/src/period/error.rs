//! Period error types.

use expensa_shared::AppError;
use thiserror::Error;

/// Period-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    /// Month outside 1..=12 or year outside the supported calendar.
    #[error("Invalid month: {year}-{month}")]
    InvalidMonth {
        /// Requested year.
        year: i32,
        /// Requested month.
        month: u32,
    },

    /// Stepping past the supported calendar range.
    #[error("Period out of range")]
    OutOfRange,
}

impl From<PeriodError> for AppError {
    fn from(err: PeriodError) -> Self {
        Self::Validation(err.to_string())
    }
}
