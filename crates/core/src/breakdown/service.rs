//! Category aggregation service.

use super::types::{CategoryTotals, UNCATEGORIZED_COLOR, UNCATEGORIZED_NAME};
use crate::context::ReferenceData;
use crate::period::MonthPeriod;
use crate::records::Expense;

/// Groups expense amounts by category.
pub struct CategoryAggregator;

impl CategoryAggregator {
    /// Sums expense amounts per category name.
    ///
    /// The name and color come from the category embedded in the expense row
    /// when present, otherwise from the reference data. Expenses whose
    /// category cannot be resolved are grouped under [`UNCATEGORIZED_NAME`], the
    /// same bucket the API's dashboard figures use.
    #[must_use]
    pub fn aggregate<'a, I>(expenses: I, reference: &ReferenceData) -> CategoryTotals
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let mut totals = CategoryTotals::new();

        for expense in expenses {
            let (name, color) = Self::label(expense, reference);
            totals.add(name, color, expense.amount);
        }

        totals
    }

    /// Same as [`CategoryAggregator::aggregate`], restricted to one month.
    #[must_use]
    pub fn aggregate_period<'a, I>(
        expenses: I,
        period: &MonthPeriod,
        reference: &ReferenceData,
    ) -> CategoryTotals
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        Self::aggregate(
            expenses.into_iter().filter(|e| period.contains(e.date)),
            reference,
        )
    }

    fn label<'a>(expense: &'a Expense, reference: &'a ReferenceData) -> (&'a str, &'a str) {
        if let Some(embedded) = &expense.category {
            let color = embedded
                .color
                .as_deref()
                .or_else(|| {
                    expense
                        .category_id
                        .and_then(|id| reference.category(id))
                        .map(|c| c.color.as_str())
                })
                .unwrap_or(UNCATEGORIZED_COLOR);
            return (embedded.name.as_str(), color);
        }

        expense
            .category_id
            .and_then(|id| reference.category(id))
            .map_or((UNCATEGORIZED_NAME, UNCATEGORIZED_COLOR), |c| {
                (c.name.as_str(), c.color.as_str())
            })
    }
}
