//! Category breakdown types.

use std::collections::BTreeMap;

use expensa_shared::types::money::round_half_away;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Group name for expenses without a category.
pub const UNCATEGORIZED_NAME: &str = "Non categorizzata";

/// Display color for expenses without a category.
pub const UNCATEGORIZED_COLOR: &str = "#6B7280";

/// Decimal places of a percentage share.
pub const PERCENT_DECIMALS: u32 = 1;

/// Total spent in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// Sum of expense amounts.
    #[serde(rename = "totale")]
    pub total: Decimal,
    /// Category display color.
    #[serde(rename = "colore")]
    pub color: String,
}

/// Category name to total mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTotals {
    totals: BTreeMap<String, CategoryTotal>,
}

/// One category's share of the overall total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryShare {
    /// Category name.
    pub name: String,
    /// Category display color.
    pub color: String,
    /// Sum of expense amounts.
    pub total: Decimal,
    /// Share of the overall total, 0-100, rounded to one decimal.
    pub percent: Decimal,
}

/// Percentage shares, or the absence of anything to divide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "shares", rename_all = "snake_case")]
pub enum CategoryShares {
    /// The overall total is zero.
    NoData,
    /// Shares ordered by total, largest first.
    Shares(Vec<CategoryShare>),
}

impl CategoryShares {
    /// Returns true when there is nothing to chart.
    #[must_use]
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData)
    }

    /// The shares, empty when there is no data.
    #[must_use]
    pub fn as_slice(&self) -> &[CategoryShare] {
        match self {
            Self::NoData => &[],
            Self::Shares(shares) => shares,
        }
    }
}

impl CategoryTotals {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an amount to a category, creating it with `color` if new.
    ///
    /// The color of the first expense seen for a category wins.
    pub fn add(&mut self, name: &str, color: &str, amount: Decimal) {
        self.totals
            .entry(name.to_string())
            .or_insert_with(|| CategoryTotal {
                total: Decimal::ZERO,
                color: color.to_string(),
            })
            .total += amount;
    }

    /// Total for one category.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CategoryTotal> {
        self.totals.get(name)
    }

    /// Categories in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryTotal)> {
        self.totals.iter().map(|(name, total)| (name.as_str(), total))
    }

    /// Number of categories with at least one expense.
    #[must_use]
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Returns true if no expense was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Sum of all category totals.
    #[must_use]
    pub fn grand_total(&self) -> Decimal {
        self.totals.values().map(|t| t.total).sum()
    }

    /// Percentage share of each category.
    ///
    /// `share = category total / grand total × 100`, rounded to one decimal.
    /// A zero grand total yields `NoData` instead of a division by zero.
    #[must_use]
    pub fn shares(&self) -> CategoryShares {
        let grand_total = self.grand_total();
        if grand_total.is_zero() {
            return CategoryShares::NoData;
        }

        let mut shares: Vec<CategoryShare> = self
            .totals
            .iter()
            .map(|(name, entry)| CategoryShare {
                name: name.clone(),
                color: entry.color.clone(),
                total: entry.total,
                percent: round_half_away(
                    entry.total / grand_total * Decimal::ONE_HUNDRED,
                    PERCENT_DECIMALS,
                ),
            })
            .collect();

        shares.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.name.cmp(&b.name)));
        CategoryShares::Shares(shares)
    }
}

impl FromIterator<(String, CategoryTotal)> for CategoryTotals {
    fn from_iter<I: IntoIterator<Item = (String, CategoryTotal)>>(iter: I) -> Self {
        Self {
            totals: iter.into_iter().collect(),
        }
    }
}
