//! Project form.

use chrono::NaiveDate;
use expensa_shared::types::ClientId;
use serde::Serialize;

use super::{ValidationError, non_blank, required};

/// Status given to new projects.
pub const DEFAULT_STATUS: &str = "attivo";

/// Project input.
#[derive(Debug, Clone, Default)]
pub struct ProjectForm {
    /// Owning client.
    pub client_id: Option<ClientId>,
    /// Project code.
    pub code: Option<String>,
    /// Project name.
    pub name: String,
    /// Start date.
    pub start_date: Option<NaiveDate>,
    /// Status.
    pub status: Option<String>,
}

/// Payload for `POST /progetti` and `PUT /progetti/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDraft {
    /// Owning client.
    #[serde(rename = "cliente_id")]
    pub client_id: ClientId,
    /// Project code.
    #[serde(rename = "codice")]
    pub code: Option<String>,
    /// Project name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Start date.
    #[serde(rename = "data_inizio")]
    pub start_date: Option<NaiveDate>,
    /// Status.
    #[serde(rename = "stato")]
    pub status: String,
}

impl ProjectForm {
    /// Validates the form.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Required` if the client or the name is
    /// missing.
    pub fn validate(&self) -> Result<ProjectDraft, ValidationError> {
        let client_id = self
            .client_id
            .ok_or(ValidationError::Required { field: "client" })?;

        Ok(ProjectDraft {
            client_id,
            code: non_blank(self.code.as_deref()),
            name: required(&self.name, "name")?,
            start_date: self.start_date,
            status: non_blank(self.status.as_deref())
                .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_active() {
        let draft = ProjectForm {
            client_id: Some(ClientId::new(3)),
            code: Some("PRJ-2026-001".to_string()),
            name: "Impianto depurazione".to_string(),
            ..ProjectForm::default()
        }
        .validate()
        .unwrap();

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["cliente_id"], 3);
        assert_eq!(json["stato"], "attivo");
        assert!(json["data_inizio"].is_null());
    }

    #[test]
    fn test_client_required() {
        let form = ProjectForm {
            name: "Senza cliente".to_string(),
            ..ProjectForm::default()
        };
        assert_eq!(form.validate().unwrap_err().field(), Some("client"));
    }
}
