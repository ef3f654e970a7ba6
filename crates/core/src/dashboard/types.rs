//! Dashboard data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::breakdown::{CategoryShares, CategoryTotals};
use crate::period::MonthPeriod;

/// Statistics for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Month the figures cover.
    pub period: MonthPeriod,
    /// Sum of all expense amounts.
    pub total_expenses: Decimal,
    /// Sum of billable expense amounts.
    pub total_billable: Decimal,
    /// Kilometers traveled.
    pub total_distance: Decimal,
    /// Sum of trip reimbursements.
    pub total_reimbursement: Decimal,
    /// Number of expenses.
    pub expense_count: usize,
    /// Number of trips.
    pub trip_count: usize,
    /// Expense totals per category.
    pub categories: CategoryTotals,
}

impl DashboardStats {
    /// Percentage shares of the category breakdown.
    #[must_use]
    pub fn category_shares(&self) -> CategoryShares {
        self.categories.shares()
    }
}

/// Pre-aggregated dashboard object returned by `/stats/dashboard`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerDashboardStats {
    /// Sum of this month's expenses.
    #[serde(rename = "totale_spese_mese")]
    pub total_expenses: Decimal,
    /// Sum of billable expenses not yet charged.
    #[serde(rename = "totale_addebitabili")]
    pub total_billable: Decimal,
    /// Kilometers traveled this month.
    #[serde(rename = "totale_km_mese")]
    pub total_distance: Decimal,
    /// Sum of this month's trip reimbursements.
    #[serde(rename = "totale_rimborsi_km")]
    pub total_reimbursement: Decimal,
    /// Number of expenses this month.
    #[serde(rename = "num_spese_mese", default)]
    pub expense_count: usize,
    /// Number of trips this month.
    #[serde(rename = "num_viaggi_mese", default)]
    pub trip_count: usize,
    /// Category name to total and color.
    #[serde(rename = "spese_per_categoria", default)]
    pub categories: CategoryTotals,
}

/// One row of the yearly series (`/stats/mensili`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTotals {
    /// Month number, 1-based.
    #[serde(rename = "mese")]
    pub month: u32,
    /// Sum of expense amounts.
    #[serde(rename = "totale_spese")]
    pub total_expenses: Decimal,
    /// Kilometers traveled.
    #[serde(rename = "totale_km")]
    pub total_distance: Decimal,
    /// Sum of trip reimbursements.
    #[serde(rename = "totale_rimborsi")]
    pub total_reimbursement: Decimal,
}
