//! Endpoint wrappers, one module per resource.

pub mod catalog;
pub mod expenses;
pub mod export;
pub mod health;
pub mod receipts;
pub mod stats;
pub mod trips;
