//! Clients expenses and trips can be billed to.

use expensa_shared::types::ClientId;
use serde::{Deserialize, Serialize};

/// A client.
///
/// Clients are never hard-deleted; deleting one clears `active`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Client ID.
    pub id: ClientId,
    /// Company name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Internal client code.
    #[serde(rename = "codice", default)]
    pub code: Option<String>,
    /// VAT number.
    #[serde(rename = "partita_iva", default)]
    pub vat_id: Option<String>,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone.
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    /// City.
    #[serde(rename = "citta", default)]
    pub city: Option<String>,
    /// Province code.
    #[serde(rename = "provincia", default)]
    pub province: Option<String>,
    /// False once the client has been deactivated.
    #[serde(rename = "attivo", default = "super::default_true")]
    pub active: bool,
}

/// Client columns embedded in an expense, trip or project row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSummary {
    /// Company name.
    #[serde(rename = "nome")]
    pub name: String,
}
