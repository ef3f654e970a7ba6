//! Client projects.

use chrono::NaiveDate;
use expensa_shared::types::{ClientId, ProjectId};
use serde::{Deserialize, Serialize};

use super::ClientSummary;

/// A project run for a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project ID.
    pub id: ProjectId,
    /// Owning client.
    #[serde(rename = "cliente_id", default)]
    pub client_id: Option<ClientId>,
    /// Project code, e.g. `PRJ-2024-001`.
    #[serde(rename = "codice", default)]
    pub code: Option<String>,
    /// Project name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Start date.
    #[serde(rename = "data_inizio", default)]
    pub start_date: Option<NaiveDate>,
    /// Free-form status (`attivo`, `completato`, ...).
    #[serde(rename = "stato", default)]
    pub status: Option<String>,
    /// Embedded client.
    #[serde(rename = "clienti", default, skip_serializing)]
    pub client: Option<ClientSummary>,
}

/// Project columns embedded in an expense or trip row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    /// Project name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Project code.
    #[serde(rename = "codice", default)]
    pub code: Option<String>,
}
