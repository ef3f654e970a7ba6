//! Expenses.

use expensa_core::forms::ExpenseDraft;
use expensa_core::records::Expense;
use expensa_shared::AppResult;
use expensa_shared::types::ExpenseId;

use crate::client::ApiClient;
use crate::envelope::first_row;
use crate::filters::ExpenseFilter;

impl ApiClient {
    /// Expenses matching `filter`, newest first.
    pub async fn expenses(&self, filter: &ExpenseFilter) -> AppResult<Vec<Expense>> {
        self.get_with_query("/spese", filter).await
    }

    /// Creates an expense.
    pub async fn create_expense(&self, draft: &ExpenseDraft) -> AppResult<Expense> {
        let rows = self.post("/spese", draft).await?;
        first_row(rows, "/spese")
    }

    /// Updates an expense.
    pub async fn update_expense(&self, id: ExpenseId, draft: &ExpenseDraft) -> AppResult<Expense> {
        let endpoint = format!("/spese/{id}");
        let rows = self.put(&endpoint, draft).await?;
        first_row(rows, &endpoint)
    }

    /// Deletes an expense.
    pub async fn delete_expense(&self, id: ExpenseId) -> AppResult<()> {
        self.delete(&format!("/spese/{id}")).await
    }
}
