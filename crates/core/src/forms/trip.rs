//! Mileage trip form.

use chrono::NaiveDate;
use expensa_shared::types::{ClientId, ProjectId, VehicleId};
use rust_decimal::Decimal;
use serde::Serialize;

use super::{ValidationError, non_blank, required};
use crate::mileage::MileageService;
use crate::records::{Trip, Vehicle};

/// Trip input.
#[derive(Debug, Clone, Default)]
pub struct TripForm {
    /// Travel date.
    pub date: Option<NaiveDate>,
    /// Vehicle used.
    pub vehicle_id: Option<VehicleId>,
    /// Departure place.
    pub origin: String,
    /// Arrival place.
    pub destination: String,
    /// Kilometers.
    pub distance: Option<Decimal>,
    /// Rate per kilometer, filled from the vehicle.
    pub applied_rate: Option<Decimal>,
    /// Client.
    pub client_id: Option<ClientId>,
    /// Project.
    pub project_id: Option<ProjectId>,
    /// Chargeable to the client.
    pub billable: bool,
    /// Purpose of the trip.
    pub description: Option<String>,
}

/// Payload for `POST /chilometriche` and `PUT /chilometriche/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripDraft {
    /// Travel date.
    #[serde(rename = "data_viaggio")]
    pub date: NaiveDate,
    /// Vehicle used.
    #[serde(rename = "veicolo_id")]
    pub vehicle_id: VehicleId,
    /// Departure place.
    #[serde(rename = "partenza")]
    pub origin: String,
    /// Arrival place.
    #[serde(rename = "arrivo")]
    pub destination: String,
    /// Kilometers.
    #[serde(rename = "km_percorsi", with = "rust_decimal::serde::float")]
    pub distance: Decimal,
    /// Rate snapshot.
    #[serde(rename = "tariffa_applicata", with = "rust_decimal::serde::float")]
    pub applied_rate: Decimal,
    /// Reimbursement rounded to cents.
    #[serde(rename = "rimborso_calcolato", with = "rust_decimal::serde::float")]
    pub reimbursement: Decimal,
    /// Client.
    #[serde(rename = "cliente_id")]
    pub client_id: Option<ClientId>,
    /// Project.
    #[serde(rename = "progetto_id")]
    pub project_id: Option<ProjectId>,
    /// Chargeable to the client.
    #[serde(rename = "addebitabile")]
    pub billable: bool,
    /// Purpose of the trip.
    #[serde(rename = "descrizione")]
    pub description: Option<String>,
}

impl TripForm {
    /// New trip with `vehicle`, its effective rate copied into the form.
    #[must_use]
    pub fn for_vehicle(vehicle: &Vehicle, today: NaiveDate) -> Self {
        let mut form = Self {
            date: Some(today),
            ..Self::default()
        };
        form.select_vehicle(vehicle);
        form
    }

    /// Prefills the form for editing. The stored rate is kept.
    #[must_use]
    pub fn from_trip(trip: &Trip) -> Self {
        Self {
            date: Some(trip.date),
            vehicle_id: trip.vehicle_id,
            origin: trip.origin.clone(),
            destination: trip.destination.clone(),
            distance: Some(trip.distance),
            applied_rate: Some(trip.applied_rate),
            client_id: trip.client_id,
            project_id: trip.project_id,
            billable: trip.billable,
            description: trip.description.clone(),
        }
    }

    /// Switches vehicle and snapshots its current effective rate.
    pub fn select_vehicle(&mut self, vehicle: &Vehicle) {
        self.vehicle_id = Some(vehicle.id);
        self.applied_rate = Some(vehicle.effective_rate());
    }

    /// Live reimbursement while the user types; missing inputs count as zero.
    #[must_use]
    pub fn preview_reimbursement(&self) -> Decimal {
        MileageService::reimbursement(
            self.distance.unwrap_or_default(),
            self.applied_rate.unwrap_or_default(),
        )
    }

    /// Validates the form and computes the stored reimbursement.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the date, vehicle, origin, destination
    /// or distance is missing, the distance is not positive, or the rate is
    /// missing or negative.
    pub fn validate(&self) -> Result<TripDraft, ValidationError> {
        let date = self.date.ok_or(ValidationError::Required { field: "date" })?;
        let vehicle_id = self
            .vehicle_id
            .ok_or(ValidationError::Required { field: "vehicle" })?;
        let origin = required(&self.origin, "origin")?;
        let destination = required(&self.destination, "destination")?;

        let distance = self
            .distance
            .ok_or(ValidationError::Required { field: "distance" })?;
        if distance <= Decimal::ZERO {
            return Err(ValidationError::NotPositive { field: "distance" });
        }
        let applied_rate = self
            .applied_rate
            .ok_or(ValidationError::Required { field: "rate" })?;
        if applied_rate < Decimal::ZERO {
            return Err(ValidationError::Negative { field: "rate" });
        }

        Ok(TripDraft {
            date,
            vehicle_id,
            origin,
            destination,
            distance,
            applied_rate,
            reimbursement: MileageService::stored_reimbursement(distance, applied_rate),
            client_id: self.client_id,
            project_id: self.project_id,
            billable: self.billable,
            description: non_blank(self.description.as_deref()),
        })
    }
}

/// Partial update for `PUT /chilometriche/{id}`.
///
/// Only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TripPatch {
    /// New travel date.
    #[serde(rename = "data_viaggio", skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// New departure place.
    #[serde(rename = "partenza", skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    /// New arrival place.
    #[serde(rename = "arrivo", skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// New distance.
    #[serde(
        rename = "km_percorsi",
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub distance: Option<Decimal>,
    /// New rate.
    #[serde(
        rename = "tariffa_applicata",
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub applied_rate: Option<Decimal>,
    /// Recomputed reimbursement; set by [`TripPatch::reconcile`].
    #[serde(
        rename = "rimborso_calcolato",
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub reimbursement: Option<Decimal>,
    /// New billable flag.
    #[serde(rename = "addebitabile", skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    /// New description.
    #[serde(rename = "descrizione", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TripPatch {
    /// Returns true when nothing would be sent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Recomputes the reimbursement against the trip being updated.
    ///
    /// When the patch changes neither distance nor rate, the reimbursement is
    /// left out and the stored value stays.
    #[must_use]
    pub fn reconcile(mut self, current: &Trip) -> Self {
        self.reimbursement =
            MileageService::recompute_for_update(current, self.distance, self.applied_rate);
        self
    }
}
