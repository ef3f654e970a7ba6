//! REST client for the Expensa expense API.
//!
//! [`ApiClient`] wraps every endpoint of the external API and decodes the
//! `{ success, data, error }` envelope. [`Session`] owns the reference data
//! loaded at start-up and turns a [`Page`](expensa_core::page::Page) into the
//! data it displays.

mod client;
mod envelope;
pub mod filters;
mod resources;
pub mod session;

pub use client::ApiClient;
pub use filters::{ExpenseFilter, TripFilter};
pub use resources::health::Health;
pub use session::{DashboardView, PageData, Session, TripsView};
