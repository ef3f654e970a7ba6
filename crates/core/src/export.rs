//! Spreadsheet export requests.
//!
//! The workbook itself is built by the API; the client only posts the
//! request and saves the returned bytes.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use expensa_shared::types::ClientId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::period::MonthPeriod;

/// MIME type of the returned workbook.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// What to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExportKind {
    /// Expense list.
    #[serde(rename = "spese")]
    Expenses,
    /// Mileage trip list.
    #[serde(rename = "chilometriche")]
    Trips,
}

impl ExportKind {
    /// Identifier on the wire and in file names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Expenses => "spese",
            Self::Trips => "chilometriche",
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown export kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown export kind: {0}")]
pub struct UnknownExportKind(pub String);

impl FromStr for ExportKind {
    type Err = UnknownExportKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "expenses" | "spese" => Ok(Self::Expenses),
            "trips" | "mileage" | "km" | "chilometriche" => Ok(Self::Trips),
            _ => Err(UnknownExportKind(s.to_string())),
        }
    }
}

/// Optional export filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportFilters {
    /// First day included.
    #[serde(rename = "data_inizio", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Last day included.
    #[serde(rename = "data_fine", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Only records for this client.
    #[serde(rename = "cliente_id", skip_serializing_if = "Option::is_none")]
    pub client_id: Option<ClientId>,
}

impl ExportFilters {
    /// Filters covering one month.
    #[must_use]
    pub fn for_period(period: &MonthPeriod) -> Self {
        Self {
            start_date: Some(period.start()),
            end_date: Some(period.end()),
            client_id: None,
        }
    }
}

/// Body of `POST /export/excel`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRequest {
    /// What to export.
    #[serde(rename = "tipo")]
    pub kind: ExportKind,
    /// Filters.
    #[serde(rename = "filtri", default)]
    pub filters: ExportFilters,
}

impl ExportRequest {
    /// Creates a request.
    #[must_use]
    pub const fn new(kind: ExportKind, filters: ExportFilters) -> Self {
        Self { kind, filters }
    }

    /// Suggested download name, e.g. `spese_2026-10-18.xlsx`.
    #[must_use]
    pub fn file_name(&self, today: NaiveDate) -> String {
        format!("{}_{}.xlsx", self.kind, today.format("%Y-%m-%d"))
    }
}
