//! Read-only reference data.
//!
//! Categories, clients, vehicles and projects are fetched once per session
//! and handed to every aggregation or prefill call that needs to resolve an id.

use expensa_shared::types::{CategoryId, ClientId, ProjectId, VehicleId};

use crate::records::{Category, Client, Project, Vehicle};

/// Reference records resolved by id.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    categories: Vec<Category>,
    clients: Vec<Client>,
    vehicles: Vec<Vehicle>,
    projects: Vec<Project>,
}

impl ReferenceData {
    /// Builds the context from freshly loaded collections.
    #[must_use]
    pub fn new(categories: Vec<Category>, clients: Vec<Client>, vehicles: Vec<Vehicle>) -> Self {
        Self {
            categories,
            clients,
            vehicles,
            projects: Vec::new(),
        }
    }

    /// Adds the project list.
    #[must_use]
    pub fn with_projects(mut self, projects: Vec<Project>) -> Self {
        self.projects = projects;
        self
    }

    /// Replaces the client list, keeping everything else.
    #[must_use]
    pub fn with_clients(mut self, clients: Vec<Client>) -> Self {
        self.clients = clients;
        self
    }

    /// Replaces the vehicle list, keeping everything else.
    #[must_use]
    pub fn with_vehicles(mut self, vehicles: Vec<Vehicle>) -> Self {
        self.vehicles = vehicles;
        self
    }

    /// All categories in API order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All clients in API order (by name).
    #[must_use]
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// All vehicles in API order (by plate).
    #[must_use]
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// All projects.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Looks up a category.
    #[must_use]
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Looks up a client.
    #[must_use]
    pub fn client(&self, id: ClientId) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    /// Looks up a vehicle.
    #[must_use]
    pub fn vehicle(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    /// Looks up a project.
    #[must_use]
    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Clients that have not been deactivated.
    pub fn active_clients(&self) -> impl Iterator<Item = &Client> {
        self.clients.iter().filter(|c| c.active)
    }

    /// Projects belonging to a client.
    pub fn projects_for_client(&self, client: ClientId) -> impl Iterator<Item = &Project> {
        self.projects
            .iter()
            .filter(move |p| p.client_id == Some(client))
    }
}
