//! Client form.

use serde::Serialize;

use super::{ValidationError, non_blank, required};
use crate::records::Client;

/// Client input.
#[derive(Debug, Clone, Default)]
pub struct ClientForm {
    /// Company name.
    pub name: String,
    /// Internal code.
    pub code: Option<String>,
    /// VAT number.
    pub vat_id: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
    /// City.
    pub city: Option<String>,
    /// Province code.
    pub province: Option<String>,
}

/// Payload for `POST /clienti` and `PUT /clienti/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientDraft {
    /// Company name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Internal code.
    #[serde(rename = "codice")]
    pub code: Option<String>,
    /// VAT number.
    #[serde(rename = "partita_iva")]
    pub vat_id: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone.
    #[serde(rename = "telefono")]
    pub phone: Option<String>,
    /// City.
    #[serde(rename = "citta", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Province code.
    #[serde(rename = "provincia", skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
}

impl ClientForm {
    /// Prefills the form for editing.
    #[must_use]
    pub fn from_client(client: &Client) -> Self {
        Self {
            name: client.name.clone(),
            code: client.code.clone(),
            vat_id: client.vat_id.clone(),
            email: client.email.clone(),
            phone: client.phone.clone(),
            city: client.city.clone(),
            province: client.province.clone(),
        }
    }

    /// Validates the form. Blank optional fields are sent as `null`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Required` if the name is blank.
    pub fn validate(&self) -> Result<ClientDraft, ValidationError> {
        Ok(ClientDraft {
            name: required(&self.name, "name")?,
            code: non_blank(self.code.as_deref()),
            vat_id: non_blank(self.vat_id.as_deref()),
            email: non_blank(self.email.as_deref()),
            phone: non_blank(self.phone.as_deref()),
            city: non_blank(self.city.as_deref()),
            province: non_blank(self.province.as_deref()).map(|p| p.to_uppercase()),
        })
    }
}
