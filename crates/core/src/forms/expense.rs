//! Expense form.

use chrono::NaiveDate;
use expensa_shared::types::{CategoryId, ClientId, ProjectId};
use rust_decimal::Decimal;
use serde::Serialize;

use super::{ValidationError, non_blank, required};
use crate::receipt::ExpensePrefill;
use crate::records::Expense;

/// Expense input.
#[derive(Debug, Clone, Default)]
pub struct ExpenseForm {
    /// Date the expense was incurred.
    pub date: Option<NaiveDate>,
    /// Amount.
    pub amount: Option<Decimal>,
    /// Category.
    pub category_id: Option<CategoryId>,
    /// Client.
    pub client_id: Option<ClientId>,
    /// Project.
    pub project_id: Option<ProjectId>,
    /// What was bought.
    pub description: String,
    /// Chargeable to the client.
    pub billable: bool,
    /// Supplier name.
    pub supplier: Option<String>,
    /// Free-form note.
    pub note: Option<String>,
    /// Scanned receipt.
    pub receipt_url: Option<String>,
}

/// Payload for `POST /spese` and `PUT /spese/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseDraft {
    /// Date.
    #[serde(rename = "data_spesa")]
    pub date: NaiveDate,
    /// Amount, sent as a JSON number.
    #[serde(rename = "importo", with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Category.
    #[serde(rename = "categoria_id")]
    pub category_id: Option<CategoryId>,
    /// Client.
    #[serde(rename = "cliente_id")]
    pub client_id: Option<ClientId>,
    /// Project.
    #[serde(rename = "progetto_id")]
    pub project_id: Option<ProjectId>,
    /// What was bought.
    #[serde(rename = "descrizione")]
    pub description: String,
    /// Chargeable to the client.
    #[serde(rename = "addebitabile")]
    pub billable: bool,
    /// Supplier name.
    #[serde(rename = "fornitore")]
    pub supplier: Option<String>,
    /// Free-form note.
    pub note: Option<String>,
    /// Scanned receipt.
    #[serde(rename = "ricevuta_url", skip_serializing_if = "Option::is_none")]
    pub receipt_url: Option<String>,
}

impl ExpenseForm {
    /// Empty form dated `today`.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: Some(today),
            ..Self::default()
        }
    }

    /// Prefills the form for editing.
    #[must_use]
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            date: Some(expense.date),
            amount: Some(expense.amount),
            category_id: expense.category_id,
            client_id: expense.client_id,
            project_id: expense.project_id,
            description: expense.description.clone(),
            billable: expense.billable,
            supplier: expense.supplier.clone(),
            note: expense.note.clone(),
            receipt_url: expense.receipt_url.clone(),
        }
    }

    /// Copies recognized receipt values over the current input.
    ///
    /// Fields the scan did not recognize keep what the user typed.
    pub fn apply_prefill(&mut self, prefill: &ExpensePrefill) {
        if let Some(amount) = prefill.amount {
            self.amount = Some(amount);
        }
        if let Some(date) = prefill.date {
            self.date = Some(date);
        }
        if let Some(url) = &prefill.receipt_url {
            self.receipt_url = Some(url.clone());
        }
    }

    /// Validates the form.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the date is missing, the amount is
    /// missing or not positive, or the description is blank.
    pub fn validate(&self) -> Result<ExpenseDraft, ValidationError> {
        let date = self.date.ok_or(ValidationError::Required { field: "date" })?;
        let amount = self
            .amount
            .ok_or(ValidationError::Required { field: "amount" })?;
        if amount <= Decimal::ZERO {
            return Err(ValidationError::NotPositive { field: "amount" });
        }
        let description = required(&self.description, "description")?;

        Ok(ExpenseDraft {
            date,
            amount,
            category_id: self.category_id,
            client_id: self.client_id,
            project_id: self.project_id,
            description,
            billable: self.billable,
            supplier: non_blank(self.supplier.as_deref()),
            note: non_blank(self.note.as_deref()),
            receipt_url: non_blank(self.receipt_url.as_deref()),
        })
    }
}
