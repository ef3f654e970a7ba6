//! Vehicles used for mileage trips.

use expensa_shared::types::VehicleId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rate::{RateResolver, ResolvedRate};

/// A vehicle with its reimbursement rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Vehicle ID.
    pub id: VehicleId,
    /// License plate.
    #[serde(rename = "targa")]
    pub plate: String,
    /// Vehicle type (car, van, ...).
    #[serde(rename = "tipo", default)]
    pub kind: Option<String>,
    /// Manufacturer.
    #[serde(rename = "marca", default)]
    pub make: Option<String>,
    /// Model.
    #[serde(rename = "modello", default)]
    pub model: Option<String>,
    /// Registration year.
    #[serde(rename = "anno", default)]
    pub year: Option<i32>,
    /// Standard reference rate per kilometer.
    #[serde(rename = "tariffa_km_aci")]
    pub standard_rate: Decimal,
    /// Vehicle-specific override rate per kilometer.
    #[serde(rename = "tariffa_km_custom", default)]
    pub custom_rate: Option<Decimal>,
    /// Whether the override rate applies.
    #[serde(rename = "usa_tariffa_custom", default)]
    pub uses_custom_rate: bool,
    /// False once the vehicle has been retired.
    #[serde(rename = "attivo", default = "super::default_true")]
    pub active: bool,
}

impl Vehicle {
    /// The rate a new trip with this vehicle is reimbursed at.
    #[must_use]
    pub fn effective_rate(&self) -> Decimal {
        RateResolver::effective_rate(self)
    }

    /// The effective rate together with where it came from.
    #[must_use]
    pub fn resolved_rate(&self) -> ResolvedRate {
        RateResolver::resolve(self)
    }

    /// `make model`, or the plate when neither is known.
    #[must_use]
    pub fn label(&self) -> String {
        match (self.make.as_deref(), self.model.as_deref()) {
            (Some(make), Some(model)) => format!("{make} {model}"),
            (Some(only), None) | (None, Some(only)) => only.to_string(),
            (None, None) => self.plate.clone(),
        }
    }
}

/// Vehicle columns embedded in a trip row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleSummary {
    /// License plate.
    #[serde(rename = "targa")]
    pub plate: String,
    /// Manufacturer.
    #[serde(rename = "marca", default)]
    pub make: Option<String>,
    /// Model.
    #[serde(rename = "modello", default)]
    pub model: Option<String>,
}
