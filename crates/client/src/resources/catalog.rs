//! Categories, clients, projects and vehicles.

use expensa_core::forms::{CategoryDraft, ClientDraft, ProjectDraft, VehicleDraft};
use expensa_core::records::{Category, Client, Project, Vehicle};
use expensa_shared::AppResult;
use expensa_shared::types::{ClientId, ProjectId, VehicleId};

use crate::client::ApiClient;
use crate::envelope::first_row;
use crate::filters::ProjectFilter;

impl ApiClient {
    /// Active categories.
    pub async fn categories(&self) -> AppResult<Vec<Category>> {
        self.get("/categorie").await
    }

    /// Creates a category.
    pub async fn create_category(&self, draft: &CategoryDraft) -> AppResult<Category> {
        let rows = self.post("/categorie", draft).await?;
        first_row(rows, "/categorie")
    }

    /// Active clients, ordered by name.
    pub async fn clients(&self) -> AppResult<Vec<Client>> {
        self.get("/clienti").await
    }

    /// One client, active or not.
    pub async fn client(&self, id: ClientId) -> AppResult<Client> {
        self.get(&format!("/clienti/{id}")).await
    }

    /// Creates a client.
    pub async fn create_client(&self, draft: &ClientDraft) -> AppResult<Client> {
        let rows = self.post("/clienti", draft).await?;
        first_row(rows, "/clienti")
    }

    /// Updates a client.
    pub async fn update_client(&self, id: ClientId, draft: &ClientDraft) -> AppResult<Client> {
        let endpoint = format!("/clienti/{id}");
        let rows = self.put(&endpoint, draft).await?;
        first_row(rows, &endpoint)
    }

    /// Deactivates a client. The record is kept for existing expenses.
    pub async fn deactivate_client(&self, id: ClientId) -> AppResult<()> {
        self.delete(&format!("/clienti/{id}")).await
    }

    /// Projects, newest first, optionally for one client only.
    pub async fn projects(&self, client: Option<ClientId>) -> AppResult<Vec<Project>> {
        self.get_with_query("/progetti", &ProjectFilter { client_id: client })
            .await
    }

    /// Creates a project.
    pub async fn create_project(&self, draft: &ProjectDraft) -> AppResult<Project> {
        let rows = self.post("/progetti", draft).await?;
        first_row(rows, "/progetti")
    }

    /// Updates a project.
    pub async fn update_project(&self, id: ProjectId, draft: &ProjectDraft) -> AppResult<Project> {
        let endpoint = format!("/progetti/{id}");
        let rows = self.put(&endpoint, draft).await?;
        first_row(rows, &endpoint)
    }

    /// Active vehicles, ordered by plate.
    pub async fn vehicles(&self) -> AppResult<Vec<Vehicle>> {
        self.get("/veicoli").await
    }

    /// Creates a vehicle.
    pub async fn create_vehicle(&self, draft: &VehicleDraft) -> AppResult<Vehicle> {
        let rows = self.post("/veicoli", draft).await?;
        first_row(rows, "/veicoli")
    }

    /// Updates a vehicle. Existing trips keep their rate snapshot.
    pub async fn update_vehicle(&self, id: VehicleId, draft: &VehicleDraft) -> AppResult<Vehicle> {
        let endpoint = format!("/veicoli/{id}");
        let rows = self.put(&endpoint, draft).await?;
        first_row(rows, &endpoint)
    }
}
