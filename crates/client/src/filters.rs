//! List filters sent as query parameters.

use chrono::NaiveDate;
use expensa_core::MonthPeriod;
use expensa_shared::types::{CategoryId, ClientId, ProjectId, VehicleId};
use serde::Serialize;

/// Filters for `GET /spese`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExpenseFilter {
    /// First day included.
    #[serde(rename = "data_inizio", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Last day included.
    #[serde(rename = "data_fine", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Only this client.
    #[serde(rename = "cliente_id", skip_serializing_if = "Option::is_none")]
    pub client_id: Option<ClientId>,
    /// Only this project.
    #[serde(rename = "progetto_id", skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
    /// Only this category.
    #[serde(rename = "categoria_id", skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    /// Only billable (`true`) or non-billable (`false`) expenses.
    #[serde(rename = "addebitabile", skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
}

impl ExpenseFilter {
    /// Expenses dated within `period`.
    #[must_use]
    pub fn for_period(period: &MonthPeriod) -> Self {
        Self::between(period.start(), period.end())
    }

    /// Expenses dated from `start` to `end`, both included.
    #[must_use]
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start_date: Some(start),
            end_date: Some(end),
            ..Self::default()
        }
    }
}

/// Filters for `GET /chilometriche`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TripFilter {
    /// First day included.
    #[serde(rename = "data_inizio", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Last day included.
    #[serde(rename = "data_fine", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Only this vehicle.
    #[serde(rename = "veicolo_id", skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<VehicleId>,
    /// Only this client.
    #[serde(rename = "cliente_id", skip_serializing_if = "Option::is_none")]
    pub client_id: Option<ClientId>,
}

impl TripFilter {
    /// Trips dated within `period`.
    #[must_use]
    pub fn for_period(period: &MonthPeriod) -> Self {
        Self {
            start_date: Some(period.start()),
            end_date: Some(period.end()),
            ..Self::default()
        }
    }
}

/// Filter for `GET /progetti`.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub(crate) struct ProjectFilter {
    #[serde(rename = "cliente_id", skip_serializing_if = "Option::is_none")]
    pub client_id: Option<ClientId>,
}
