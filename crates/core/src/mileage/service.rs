//! Mileage reimbursement service.

use expensa_shared::types::money::{AMOUNT_DECIMALS, round_half_away};
use rust_decimal::Decimal;

use super::types::MileageTotals;
use crate::records::Trip;

/// Mileage calculations.
pub struct MileageService;

impl MileageService {
    /// Exact reimbursement: `distance × rate`, no rounding.
    #[must_use]
    pub fn reimbursement(distance: Decimal, rate: Decimal) -> Decimal {
        distance * rate
    }

    /// Reimbursement as stored with a trip: rounded to cents, half away from
    /// zero.
    #[must_use]
    pub fn stored_reimbursement(distance: Decimal, rate: Decimal) -> Decimal {
        round_half_away(Self::reimbursement(distance, rate), AMOUNT_DECIMALS)
    }

    /// Reimbursement to store after an update.
    ///
    /// Returns `None` when the update touches neither distance nor rate, so
    /// the stored value stays as it is. Otherwise the missing side is taken
    /// from the current trip.
    #[must_use]
    pub fn recompute_for_update(
        current: &Trip,
        new_distance: Option<Decimal>,
        new_rate: Option<Decimal>,
    ) -> Option<Decimal> {
        if new_distance.is_none() && new_rate.is_none() {
            return None;
        }

        let distance = new_distance.unwrap_or(current.distance);
        let rate = new_rate.unwrap_or(current.applied_rate);
        Some(Self::stored_reimbursement(distance, rate))
    }

    /// Distance and reimbursement totals, e.g. for the trips page footer.
    #[must_use]
    pub fn totals<'a, I>(trips: I) -> MileageTotals
    where
        I: IntoIterator<Item = &'a Trip>,
    {
        trips
            .into_iter()
            .fold(MileageTotals::default(), |mut totals, trip| {
                totals.trip_count += 1;
                totals.total_distance += trip.distance;
                totals.total_reimbursement += trip.reimbursement_or_computed();
                totals
            })
    }
}
