//! Field extraction from OCR text.

use std::str::FromStr;

use regex::Regex;
use rust_decimal::Decimal;

use super::error::ReceiptError;
use super::types::OcrFields;

const AMOUNT_PATTERNS: [&str; 4] = [
    r"(?i)TOTALE[:\s]+€?\s*(\d+[,.]\d{2})",
    r"(?i)TOTALE?[:\s]+€?\s*(\d+[,.]\d{2})",
    r"(?i)EUR[:\s]+(\d+[,.]\d{2})",
    r"(?i)€\s*(\d+[,.]\d{2})",
];

const DATE_PATTERNS: [&str; 2] = [
    r"(\d{2}[/\-.]\d{2}[/\-.]\d{4})",
    r"(\d{2}[/\-.]\d{2}[/\-.]\d{2})",
];

const VAT_PATTERN: &str = r"(?i)P\.?\s*IVA[:\s]+(\d{11})";

/// Pulls the total, the date and the VAT number out of receipt text.
///
/// Patterns are tried in order and the first match wins, so an explicit
/// `TOTALE` line takes precedence over any other euro amount.
#[derive(Debug, Clone)]
pub struct ReceiptExtractor {
    amount: Vec<Regex>,
    date: Vec<Regex>,
    vat: Regex,
}

impl ReceiptExtractor {
    /// Compiles the extraction patterns.
    ///
    /// # Errors
    ///
    /// Returns `ReceiptError::Pattern` if a pattern does not compile.
    pub fn new() -> Result<Self, ReceiptError> {
        Ok(Self {
            amount: compile_all(&AMOUNT_PATTERNS)?,
            date: compile_all(&DATE_PATTERNS)?,
            vat: Regex::new(VAT_PATTERN)?,
        })
    }

    /// Extracts fields from `text`; the text itself is kept as `full_text`.
    #[must_use]
    pub fn extract(&self, text: &str) -> OcrFields {
        OcrFields {
            full_text: Some(text.to_string()),
            amount: self.amount(text),
            date_text: first_capture(&self.date, text).map(str::to_string),
            vat_id: self
                .vat
                .captures(text)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string()),
            warning: None,
        }
    }

    /// Fills the fields the OCR service left empty from its `full_text`.
    ///
    /// Recognized values and the warning are kept as they are.
    #[must_use]
    pub fn complete(&self, fields: OcrFields) -> OcrFields {
        let Some(text) = fields.full_text.as_deref() else {
            return fields;
        };
        let found = self.extract(text);

        OcrFields {
            amount: fields.amount.or(found.amount),
            date_text: fields.date_text.or(found.date_text),
            vat_id: fields.vat_id.or(found.vat_id),
            ..fields
        }
    }

    /// The total amount, with a comma or a dot as decimal separator.
    #[must_use]
    pub fn amount(&self, text: &str) -> Option<Decimal> {
        let raw = first_capture(&self.amount, text)?;
        Decimal::from_str(&raw.replace(',', ".")).ok()
    }
}

fn compile_all(patterns: &[&str]) -> Result<Vec<Regex>, ReceiptError> {
    patterns
        .iter()
        .map(|p| Regex::new(p).map_err(ReceiptError::from))
        .collect()
}

fn first_capture<'t>(patterns: &[Regex], text: &'t str) -> Option<&'t str> {
    patterns
        .iter()
        .find_map(|re| re.captures(text).and_then(|c| c.get(1)))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn extractor() -> ReceiptExtractor {
        ReceiptExtractor::new().unwrap()
    }

    const RECEIPT: &str = "AUTOGRILL SPA\n\
        P.IVA 01234567890\n\
        CAFFE 1,20\n\
        PANINO 5,50\n\
        TOTALE EURO\n\
        TOTALE: € 6,70\n\
        12/03/2026 13:45";

    #[test]
    fn test_extract_full_receipt() {
        let fields = extractor().extract(RECEIPT);

        assert_eq!(fields.amount, Some(dec!(6.70)));
        assert_eq!(fields.date_text.as_deref(), Some("12/03/2026"));
        assert_eq!(fields.vat_id.as_deref(), Some("01234567890"));
        assert_eq!(fields.full_text.as_deref(), Some(RECEIPT));
        assert!(fields.warning.is_none());
    }

    #[rstest]
    #[case("Totale 12.50", dec!(12.50))]
    #[case("TOTAL: 8,00", dec!(8.00))]
    #[case("EUR 3,10", dec!(3.10))]
    #[case("importo € 45.99", dec!(45.99))]
    #[case("totale: €19,90 contanti €20,00", dec!(19.90))]
    fn test_amount_patterns(#[case] text: &str, #[case] expected: Decimal) {
        assert_eq!(extractor().amount(text), Some(expected));
    }

    #[test]
    fn test_total_line_beats_earlier_euro_amount() {
        let text = "€ 2,00 sconto\nTOTALE 14,00";
        assert_eq!(extractor().amount(text), Some(dec!(14.00)));
    }

    #[rstest]
    #[case("del 01-02-2026", "01-02-2026")]
    #[case("data 01.02.26 ore 10", "01.02.26")]
    fn test_date_patterns(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(extractor().extract(text).date_text.as_deref(), Some(expected));
    }

    #[test]
    fn test_vat_variants() {
        let ex = extractor();
        assert_eq!(
            ex.extract("p iva: 98765432109").vat_id.as_deref(),
            Some("98765432109")
        );
        assert!(ex.extract("P.IVA 1234").vat_id.is_none());
    }

    #[test]
    fn test_complete_fills_only_missing_fields() {
        let fields = OcrFields {
            full_text: Some(RECEIPT.to_string()),
            amount: Some(dec!(7.00)),
            ..OcrFields::default()
        };

        let completed = extractor().complete(fields);

        assert_eq!(completed.amount, Some(dec!(7.00)));
        assert_eq!(completed.date_text.as_deref(), Some("12/03/2026"));
        assert_eq!(completed.vat_id.as_deref(), Some("01234567890"));
    }

    #[test]
    fn test_complete_without_text_is_unchanged() {
        let fields = OcrFields {
            warning: Some("OCR non disponibile".to_string()),
            ..OcrFields::default()
        };
        assert_eq!(extractor().complete(fields.clone()), fields);
    }

    #[test]
    fn test_nothing_recognized() {
        let fields = extractor().extract("grazie e arrivederci");
        assert!(fields.is_empty());
        assert!(fields.full_text.is_some());
    }
}
