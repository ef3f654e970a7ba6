//! Receipt error types.

use expensa_shared::AppError;
use thiserror::Error;

/// Receipt scanning errors.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// An extraction pattern failed to compile.
    #[error("invalid extraction pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The upload has no file name.
    #[error("empty file name")]
    MissingFileName,

    /// The upload has no content.
    #[error("empty image")]
    EmptyImage,

    /// The file is larger than the API accepts.
    #[error("file too large: {size} bytes exceeds maximum {max} bytes")]
    FileTooLarge {
        /// Actual file size.
        size: u64,
        /// Maximum allowed size.
        max: u64,
    },

    /// The file is not an image.
    #[error("unsupported file type: {0}")]
    UnsupportedType(String),
}

impl From<ReceiptError> for AppError {
    fn from(err: ReceiptError) -> Self {
        match err {
            ReceiptError::Pattern(_) => Self::Internal(err.to_string()),
            _ => Self::Validation(err.to_string()),
        }
    }
}
