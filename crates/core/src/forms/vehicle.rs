//! Vehicle form.

use rust_decimal::Decimal;
use serde::Serialize;

use super::{ValidationError, non_blank, required};
use crate::records::Vehicle;

/// Vehicle type used when none is given.
pub const DEFAULT_KIND: &str = "auto";

/// Vehicle input.
#[derive(Debug, Clone, Default)]
pub struct VehicleForm {
    /// License plate.
    pub plate: String,
    /// Vehicle type.
    pub kind: Option<String>,
    /// Manufacturer.
    pub make: Option<String>,
    /// Model.
    pub model: Option<String>,
    /// Registration year.
    pub year: Option<i32>,
    /// Standard reference rate.
    pub standard_rate: Option<Decimal>,
    /// Override rate.
    pub custom_rate: Option<Decimal>,
    /// Whether the override applies.
    pub uses_custom_rate: bool,
}

/// Payload for `POST /veicoli` and `PUT /veicoli/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleDraft {
    /// License plate, upper case.
    #[serde(rename = "targa")]
    pub plate: String,
    /// Vehicle type.
    #[serde(rename = "tipo")]
    pub kind: String,
    /// Manufacturer.
    #[serde(rename = "marca")]
    pub make: Option<String>,
    /// Model.
    #[serde(rename = "modello")]
    pub model: Option<String>,
    /// Registration year.
    #[serde(rename = "anno", skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Standard reference rate.
    #[serde(rename = "tariffa_km_aci", with = "rust_decimal::serde::float")]
    pub standard_rate: Decimal,
    /// Override rate.
    #[serde(rename = "tariffa_km_custom", with = "rust_decimal::serde::float_option")]
    pub custom_rate: Option<Decimal>,
    /// Whether the override applies.
    #[serde(rename = "usa_tariffa_custom")]
    pub uses_custom_rate: bool,
}

impl VehicleForm {
    /// Prefills the form for editing.
    #[must_use]
    pub fn from_vehicle(vehicle: &Vehicle) -> Self {
        Self {
            plate: vehicle.plate.clone(),
            kind: vehicle.kind.clone(),
            make: vehicle.make.clone(),
            model: vehicle.model.clone(),
            year: vehicle.year,
            standard_rate: Some(vehicle.standard_rate),
            custom_rate: vehicle.custom_rate,
            uses_custom_rate: vehicle.uses_custom_rate,
        }
    }

    /// Validates the form.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the plate or the standard rate is
    /// missing, a rate is negative, or the override is switched on without an
    /// override rate.
    pub fn validate(&self) -> Result<VehicleDraft, ValidationError> {
        let plate = required(&self.plate, "plate")?.to_uppercase();

        let standard_rate = self
            .standard_rate
            .ok_or(ValidationError::Required { field: "standard rate" })?;
        if standard_rate < Decimal::ZERO {
            return Err(ValidationError::Negative { field: "standard rate" });
        }
        if self.custom_rate.is_some_and(|rate| rate < Decimal::ZERO) {
            return Err(ValidationError::Negative { field: "custom rate" });
        }
        if self.uses_custom_rate && self.custom_rate.is_none() {
            return Err(ValidationError::Inconsistent(
                "custom rate is required when the custom rate is enabled",
            ));
        }

        Ok(VehicleDraft {
            plate,
            kind: non_blank(self.kind.as_deref()).unwrap_or_else(|| DEFAULT_KIND.to_string()),
            make: non_blank(self.make.as_deref()),
            model: non_blank(self.model.as_deref()),
            year: self.year,
            standard_rate,
            custom_rate: self.custom_rate,
            uses_custom_rate: self.uses_custom_rate,
        })
    }
}
