//! Calendar month periods.

pub mod error;
pub mod month;

pub use error::PeriodError;
pub use month::MonthPeriod;
