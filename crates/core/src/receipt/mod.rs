//! Receipt scanning.
//!
//! This module provides:
//! - Upload checks before the image is sent to the API
//! - Field extraction from raw OCR text
//! - Expense form prefill from a scan result

mod error;
mod extract;
mod prefill;
mod types;
mod upload;

pub use error::ReceiptError;
pub use extract::ReceiptExtractor;
pub use prefill::{ExpensePrefill, parse_receipt_date};
pub use types::{OcrFields, ReceiptScan};
pub use upload::ReceiptUpload;
