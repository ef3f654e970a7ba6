//! Receipt scan data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fields recognized in a receipt.
///
/// Every field is optional: OCR may be unavailable, in which case only
/// `warning` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrFields {
    /// Raw recognized text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_text: Option<String>,
    /// Total amount.
    #[serde(rename = "importo", default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    /// Date as printed on the receipt, e.g. `05/03/2026` or `05.03.26`.
    #[serde(rename = "data", default, skip_serializing_if = "Option::is_none")]
    pub date_text: Option<String>,
    /// Supplier VAT number, 11 digits.
    #[serde(rename = "partita_iva", default, skip_serializing_if = "Option::is_none")]
    pub vat_id: Option<String>,
    /// Set when the OCR engine is not configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl OcrFields {
    /// Returns true when nothing usable was recognized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.date_text.is_none() && self.vat_id.is_none()
    }
}

/// Response of `/upload-ricevuta`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptScan {
    /// Public URL of the stored image.
    pub image_url: String,
    /// Recognized fields.
    #[serde(default)]
    pub ocr_data: OcrFields,
}
