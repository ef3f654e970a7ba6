//! Form input validation.
//!
//! Each form collects raw user input. `validate` checks it and produces the
//! draft payload posted to the API, so an invalid record never leaves the
//! client.

mod category;
mod client;
mod error;
mod expense;
mod project;
mod trip;
mod vehicle;

pub use category::{CategoryDraft, CategoryForm};
pub use client::{ClientDraft, ClientForm};
pub use error::ValidationError;
pub use expense::{ExpenseDraft, ExpenseForm};
pub use project::{ProjectDraft, ProjectForm};
pub use trip::{TripDraft, TripForm, TripPatch};
pub use vehicle::{VehicleDraft, VehicleForm};

/// Trims `value` and maps blank input to `None`.
fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Trims a mandatory text field.
fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(value.to_string())
}
