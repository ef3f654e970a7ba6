//! Mileage trips.

use chrono::NaiveDate;
use expensa_shared::types::{ClientId, ProjectId, TripId, VehicleId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ClientSummary, ProjectSummary, VehicleSummary};
use crate::mileage::MileageService;

/// A mileage trip as returned by the API.
///
/// `applied_rate` is the vehicle's effective rate when the trip was created.
/// It is never refreshed from the vehicle afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    /// Trip ID.
    pub id: TripId,
    /// Travel date.
    #[serde(rename = "data_viaggio")]
    pub date: NaiveDate,
    /// Vehicle used.
    #[serde(rename = "veicolo_id", default)]
    pub vehicle_id: Option<VehicleId>,
    /// Departure place.
    #[serde(rename = "partenza")]
    pub origin: String,
    /// Arrival place.
    #[serde(rename = "arrivo")]
    pub destination: String,
    /// Kilometers traveled.
    #[serde(rename = "km_percorsi")]
    pub distance: Decimal,
    /// Rate snapshot per kilometer.
    #[serde(rename = "tariffa_applicata")]
    pub applied_rate: Decimal,
    /// Reimbursement stored by the API, rounded to cents.
    #[serde(rename = "rimborso_calcolato", default)]
    pub reimbursement: Option<Decimal>,
    /// Client the trip relates to.
    #[serde(rename = "cliente_id", default)]
    pub client_id: Option<ClientId>,
    /// Project the trip relates to.
    #[serde(rename = "progetto_id", default)]
    pub project_id: Option<ProjectId>,
    /// Whether the trip can be charged to the client.
    #[serde(rename = "addebitabile", default)]
    pub billable: bool,
    /// Purpose of the trip.
    #[serde(rename = "descrizione", default)]
    pub description: Option<String>,
    /// Embedded vehicle.
    #[serde(rename = "veicoli", default, skip_serializing)]
    pub vehicle: Option<VehicleSummary>,
    /// Embedded client.
    #[serde(rename = "clienti", default, skip_serializing)]
    pub client: Option<ClientSummary>,
    /// Embedded project.
    #[serde(rename = "progetti", default, skip_serializing)]
    pub project: Option<ProjectSummary>,
}

impl Trip {
    /// Exact reimbursement, `distance × applied_rate`.
    #[must_use]
    pub fn computed_reimbursement(&self) -> Decimal {
        MileageService::reimbursement(self.distance, self.applied_rate)
    }

    /// The stored reimbursement, or the computed one rounded to cents when
    /// the API row lacks it.
    #[must_use]
    pub fn reimbursement_or_computed(&self) -> Decimal {
        self.reimbursement
            .unwrap_or_else(|| MileageService::stored_reimbursement(self.distance, self.applied_rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn decode(json: &str) -> Trip {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_decodes_joined_api_row() {
        let trip = decode(
            r#"{
                "id": 3,
                "data_viaggio": "2026-10-10",
                "veicolo_id": 2,
                "partenza": "Brescia",
                "arrivo": "Milano",
                "km_percorsi": 120.0,
                "tariffa_applicata": 0.5,
                "rimborso_calcolato": 60.0,
                "addebitabile": false,
                "veicoli": {"targa": "EF456GH", "marca": "Fiat", "modello": "Ducato"}
            }"#,
        );

        assert_eq!(trip.vehicle_id, Some(VehicleId::new(2)));
        assert_eq!(trip.distance, dec!(120));
        assert_eq!(trip.reimbursement, Some(dec!(60)));
        assert_eq!(trip.vehicle.unwrap().plate, "EF456GH");
    }

    #[test]
    fn test_reimbursement_falls_back_to_computed() {
        let trip = decode(
            r#"{"id": 4, "data_viaggio": "2026-10-11", "partenza": "A", "arrivo": "B",
                "km_percorsi": 33.3, "tariffa_applicata": 0.685}"#,
        );

        assert_eq!(trip.computed_reimbursement(), dec!(22.8105));
        assert_eq!(trip.reimbursement_or_computed(), dec!(22.81));
    }
}
