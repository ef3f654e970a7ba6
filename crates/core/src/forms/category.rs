//! Category form.

use serde::Serialize;

use super::{ValidationError, required};
use crate::breakdown::UNCATEGORIZED_COLOR;

/// New category input.
#[derive(Debug, Clone, Default)]
pub struct CategoryForm {
    /// Display name.
    pub name: String,
    /// Hex color; grey when left blank.
    pub color: Option<String>,
}

/// Payload for `POST /categorie`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDraft {
    /// Display name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Hex color.
    #[serde(rename = "colore")]
    pub color: String,
}

impl CategoryForm {
    /// Validates the form.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Required` if the name is blank.
    pub fn validate(&self) -> Result<CategoryDraft, ValidationError> {
        Ok(CategoryDraft {
            name: required(&self.name, "name")?,
            color: super::non_blank(self.color.as_deref())
                .unwrap_or_else(|| UNCATEGORIZED_COLOR.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_color() {
        let draft = CategoryForm {
            name: " Pedaggi ".to_string(),
            color: Some(String::new()),
        }
        .validate()
        .unwrap();

        assert_eq!(draft.name, "Pedaggi");
        assert_eq!(draft.color, "#6B7280");
    }

    #[test]
    fn test_name_required() {
        let err = CategoryForm::default().validate().unwrap_err();
        assert_eq!(err.field(), Some("name"));
    }
}
