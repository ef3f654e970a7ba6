//! Core expense and mileage logic for Expensa.
//!
//! This crate contains pure business logic with ZERO network dependencies.
//! Records, calculations, validation rules and prefill logic live here; the
//! REST plumbing lives in `expensa-client`.
//!
//! # Modules
//!
//! - `records` - Categories, clients, projects, vehicles, expenses and trips
//! - `rate` - Applicable per-kilometer rate for a vehicle
//! - `mileage` - Trip reimbursement and mileage totals
//! - `breakdown` - Expense totals and percentage shares per category
//! - `dashboard` - Monthly dashboard statistics and yearly series
//! - `period` - Calendar month periods
//! - `context` - Read-only reference data passed to aggregations
//! - `page` - Navigable pages and the data each one needs
//! - `receipt` - Receipt upload checks, OCR text extraction and prefill
//! - `forms` - Form input validation into API payloads
//! - `export` - Spreadsheet export requests
//! - `display` - Display rounding and formatting

pub mod breakdown;
pub mod context;
pub mod dashboard;
pub mod display;
pub mod export;
pub mod forms;
pub mod mileage;
pub mod page;
pub mod period;
pub mod rate;
pub mod receipt;
pub mod records;

pub use context::ReferenceData;
pub use period::MonthPeriod;
