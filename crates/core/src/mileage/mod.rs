//! Trip reimbursement and mileage totals.

pub mod service;
pub mod types;

#[cfg(test)]
mod props;

pub use service::MileageService;
pub use types::MileageTotals;
