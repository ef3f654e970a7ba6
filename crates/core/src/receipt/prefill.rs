//! Expense form prefill from a receipt scan.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::types::ReceiptScan;

/// Values copied into a new expense form after a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpensePrefill {
    /// Recognized total.
    pub amount: Option<Decimal>,
    /// Recognized date, when it had a four-digit year.
    pub date: Option<NaiveDate>,
    /// Date text that could not be converted, left for the user.
    pub unparsed_date: Option<String>,
    /// Supplier VAT number.
    pub vat_id: Option<String>,
    /// Stored image, attached to the expense.
    pub receipt_url: Option<String>,
    /// OCR warning to show next to the form.
    pub warning: Option<String>,
}

impl ExpensePrefill {
    /// Builds the prefill from the upload response.
    #[must_use]
    pub fn from_scan(scan: &ReceiptScan) -> Self {
        let ocr = &scan.ocr_data;
        let date = ocr.date_text.as_deref().and_then(parse_receipt_date);

        Self {
            amount: ocr.amount,
            date,
            unparsed_date: if date.is_none() {
                ocr.date_text.clone()
            } else {
                None
            },
            vat_id: ocr.vat_id.clone(),
            receipt_url: Some(scan.image_url.clone()).filter(|url| !url.is_empty()),
            warning: ocr.warning.clone(),
        }
    }
}

/// Converts `dd/mm/yyyy` (separators `/`, `-` or `.`) to a date.
///
/// Two-digit years and impossible dates yield `None`.
#[must_use]
pub fn parse_receipt_date(text: &str) -> Option<NaiveDate> {
    let mut parts = text.trim().split(['/', '-', '.']);
    let day = parts.next()?;
    let month = parts.next()?;
    let year = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let digits = |s: &str, len: usize| s.len() == len && s.bytes().all(|b| b.is_ascii_digit());
    if !(digits(day, 2) && digits(month, 2) && digits(year, 4)) {
        return None;
    }

    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}
