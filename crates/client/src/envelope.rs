//! Response envelope.

use expensa_shared::{AppError, AppResult};
use serde::Deserialize;

/// `{ "success": bool, "data": ..., "error": "..." }`
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// The payload of a successful response.
    pub fn into_data(self, endpoint: &str) -> AppResult<T> {
        self.check()?
            .data
            .ok_or_else(|| AppError::Decode(format!("{endpoint}: missing data")))
    }

    /// Fails when the API reported `success: false`.
    pub fn check(self) -> AppResult<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(AppError::Api(
                self.error.unwrap_or_else(|| "unknown error".to_string()),
            ))
        }
    }
}

/// Create and update endpoints answer with the affected rows.
pub(crate) fn first_row<T>(rows: Vec<T>, endpoint: &str) -> AppResult<T> {
    rows.into_iter()
        .next()
        .ok_or_else(|| AppError::NotFound(format!("{endpoint}: no row returned")))
}
