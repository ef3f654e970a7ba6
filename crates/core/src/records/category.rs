//! Expense categories.

use expensa_shared::types::CategoryId;
use serde::{Deserialize, Serialize};

/// An expense category. Immutable reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category ID.
    pub id: CategoryId,
    /// Display name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Display color as a CSS hex string.
    #[serde(rename = "colore")]
    pub color: String,
}

/// Category columns embedded in an expense row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// Display name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Display color, absent when the join selected only the name.
    #[serde(rename = "colore", default)]
    pub color: Option<String>,
}
