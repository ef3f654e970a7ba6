//! Mileage data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Totals over a filtered list of trips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MileageTotals {
    /// Number of trips.
    pub trip_count: usize,
    /// Kilometers traveled.
    pub total_distance: Decimal,
    /// Sum of the stored reimbursements.
    pub total_reimbursement: Decimal,
}
