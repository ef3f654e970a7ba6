//! Dashboard aggregation service.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use super::types::{DashboardStats, MonthlyTotals, ServerDashboardStats};
use crate::breakdown::CategoryAggregator;
use crate::context::ReferenceData;
use crate::mileage::MileageService;
use crate::period::{MonthPeriod, PeriodError};
use crate::records::{Expense, Trip};

/// Dashboard aggregation.
pub struct DashboardService;

impl DashboardService {
    /// Computes the month's statistics from raw records.
    ///
    /// Records dated outside `period` are ignored, so callers may pass a
    /// wider list than the month.
    #[must_use]
    pub fn compute(
        period: MonthPeriod,
        expenses: &[Expense],
        trips: &[Trip],
        reference: &ReferenceData,
    ) -> DashboardStats {
        let in_month: Vec<&Expense> = expenses
            .iter()
            .filter(|e| period.contains(e.date))
            .collect();

        let total_expenses = in_month.iter().map(|e| e.amount).sum();
        let total_billable = in_month
            .iter()
            .filter(|e| e.billable)
            .map(|e| e.amount)
            .sum();

        let mileage = MileageService::totals(trips.iter().filter(|t| period.contains(t.date)));

        DashboardStats {
            period,
            total_expenses,
            total_billable,
            total_distance: mileage.total_distance,
            total_reimbursement: mileage.total_reimbursement,
            expense_count: in_month.len(),
            trip_count: mileage.trip_count,
            categories: CategoryAggregator::aggregate(in_month.iter().copied(), reference),
        }
    }

    /// Adapts the API's pre-aggregated object for `period`.
    #[must_use]
    pub fn from_server(period: MonthPeriod, server: ServerDashboardStats) -> DashboardStats {
        DashboardStats {
            period,
            total_expenses: server.total_expenses,
            total_billable: server.total_billable,
            total_distance: server.total_distance,
            total_reimbursement: server.total_reimbursement,
            expense_count: server.expense_count,
            trip_count: server.trip_count,
            categories: server.categories,
        }
    }

    /// Twelve monthly rows for `year`.
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::InvalidMonth` if the year is outside chrono's
    /// range.
    pub fn yearly_series(
        year: i32,
        expenses: &[Expense],
        trips: &[Trip],
    ) -> Result<Vec<MonthlyTotals>, PeriodError> {
        let months = MonthPeriod::months_of(year)?;

        Ok(months
            .into_iter()
            .map(|period| {
                let mileage =
                    MileageService::totals(trips.iter().filter(|t| period.contains(t.date)));
                MonthlyTotals {
                    month: period.month(),
                    total_expenses: expenses
                        .iter()
                        .filter(|e| period.contains(e.date))
                        .map(|e| e.amount)
                        .sum::<Decimal>(),
                    total_distance: mileage.total_distance,
                    total_reimbursement: mileage.total_reimbursement,
                }
            })
            .collect())
    }

    /// Expenses of the last `days` days up to `today`, newest first, at most
    /// `limit` of them.
    #[must_use]
    pub fn recent_expenses(
        expenses: &[Expense],
        today: NaiveDate,
        days: u32,
        limit: usize,
    ) -> Vec<&Expense> {
        let since = today
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);

        let mut recent: Vec<&Expense> = expenses
            .iter()
            .filter(|e| e.date >= since && e.date <= today)
            .collect();
        recent.sort_by(|a, b| b.date.cmp(&a.date));
        recent.truncate(limit);
        recent
    }
}
