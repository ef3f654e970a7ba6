//! Dashboard statistics.
//!
//! This module provides:
//! - Monthly totals (expenses, billable expenses, distance, reimbursements)
//! - The category breakdown of the month
//! - A twelve-month series and the recent expenses panel

pub mod service;
pub mod types;


pub use service::DashboardService;
pub use types::{DashboardStats, MonthlyTotals, ServerDashboardStats};
