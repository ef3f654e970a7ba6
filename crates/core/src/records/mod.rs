//! Records served by the expense API.
//!
//! Field names are English; serde renames map them onto the API's wire keys.
//! Records may carry summaries of joined rows (category name and color, client
//! name, vehicle plate) when the API embeds them.

pub mod category;
pub mod client;
pub mod expense;
pub mod project;
pub mod trip;
pub mod vehicle;

pub use category::{Category, CategorySummary};
pub use client::{Client, ClientSummary};
pub use expense::Expense;
pub use project::{Project, ProjectSummary};
pub use trip::Trip;
pub use vehicle::{Vehicle, VehicleSummary};

fn default_true() -> bool {
    true
}
