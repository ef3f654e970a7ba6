//! Expenses.

use chrono::NaiveDate;
use expensa_shared::types::{CategoryId, ClientId, ExpenseId, ProjectId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CategorySummary, ClientSummary, ProjectSummary};

/// An expense as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Expense ID.
    pub id: ExpenseId,
    /// Date the expense was incurred.
    #[serde(rename = "data_spesa")]
    pub date: NaiveDate,
    /// Amount, always positive.
    #[serde(rename = "importo")]
    pub amount: Decimal,
    /// Category.
    #[serde(rename = "categoria_id", default)]
    pub category_id: Option<CategoryId>,
    /// Client the expense relates to.
    #[serde(rename = "cliente_id", default)]
    pub client_id: Option<ClientId>,
    /// Project the expense relates to.
    #[serde(rename = "progetto_id", default)]
    pub project_id: Option<ProjectId>,
    /// What was bought.
    #[serde(rename = "descrizione")]
    pub description: String,
    /// Whether the cost can be charged to the client.
    #[serde(rename = "addebitabile", default)]
    pub billable: bool,
    /// Whether it has already been charged.
    #[serde(rename = "addebitata", default)]
    pub billed: bool,
    /// Supplier name.
    #[serde(rename = "fornitore", default)]
    pub supplier: Option<String>,
    /// Free-form note.
    #[serde(default)]
    pub note: Option<String>,
    /// Public URL of the scanned receipt.
    #[serde(rename = "ricevuta_url", default)]
    pub receipt_url: Option<String>,
    /// Embedded category.
    #[serde(rename = "categorie", default, skip_serializing)]
    pub category: Option<CategorySummary>,
    /// Embedded client.
    #[serde(rename = "clienti", default, skip_serializing)]
    pub client: Option<ClientSummary>,
    /// Embedded project.
    #[serde(rename = "progetti", default, skip_serializing)]
    pub project: Option<ProjectSummary>,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::NaiveDate;
    use expensa_shared::types::{CategoryId, ExpenseId};
    use rust_decimal::Decimal;

    use super::Expense;

    pub fn expense(id: i64, date: NaiveDate, amount: Decimal, category: Option<i64>) -> Expense {
        Expense {
            id: ExpenseId::new(id),
            date,
            amount,
            category_id: category.map(CategoryId::new),
            client_id: None,
            project_id: None,
            description: format!("Expense {id}"),
            billable: false,
            billed: false,
            supplier: None,
            note: None,
            receipt_url: None,
            category: None,
            client: None,
            project: None,
        }
    }
}
