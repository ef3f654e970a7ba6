//! Mileage trips.

use expensa_core::forms::{TripDraft, TripPatch};
use expensa_core::records::Trip;
use expensa_shared::AppResult;
use expensa_shared::types::TripId;

use crate::client::ApiClient;
use crate::envelope::first_row;
use crate::filters::TripFilter;

impl ApiClient {
    /// Trips matching `filter`, newest first.
    pub async fn trips(&self, filter: &TripFilter) -> AppResult<Vec<Trip>> {
        self.get_with_query("/chilometriche", filter).await
    }

    /// Creates a trip with its rate snapshot and reimbursement.
    pub async fn create_trip(&self, draft: &TripDraft) -> AppResult<Trip> {
        let rows = self.post("/chilometriche", draft).await?;
        first_row(rows, "/chilometriche")
    }

    /// Replaces a trip.
    pub async fn update_trip(&self, id: TripId, draft: &TripDraft) -> AppResult<Trip> {
        let endpoint = format!("/chilometriche/{id}");
        let rows = self.put(&endpoint, draft).await?;
        first_row(rows, &endpoint)
    }

    /// Sends a partial update. Call [`TripPatch::reconcile`] first so the
    /// reimbursement follows a changed distance or rate.
    pub async fn patch_trip(&self, id: TripId, patch: &TripPatch) -> AppResult<Trip> {
        let endpoint = format!("/chilometriche/{id}");
        let rows = self.put(&endpoint, patch).await?;
        first_row(rows, &endpoint)
    }

    /// Deletes a trip.
    pub async fn delete_trip(&self, id: TripId) -> AppResult<()> {
        self.delete(&format!("/chilometriche/{id}")).await
    }
}
