//! Expense totals and percentage shares per category.

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::CategoryAggregator;
pub use types::{
    CategoryShare, CategoryShares, CategoryTotal, CategoryTotals, UNCATEGORIZED_COLOR,
    UNCATEGORIZED_NAME,
};
