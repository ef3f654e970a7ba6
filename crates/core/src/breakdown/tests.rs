//! Tests for the category breakdown.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::service::CategoryAggregator;
use super::types::{CategoryShares, CategoryTotals, UNCATEGORIZED_COLOR, UNCATEGORIZED_NAME};
use crate::context::ReferenceData;
use crate::context::fixtures::{category, reference};
use crate::period::MonthPeriod;
use crate::records::CategorySummary;
use crate::records::expense::fixtures::expense;

fn oct(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, day).unwrap()
}

#[test]
fn test_fuel_and_meals_example() {
    let expenses = vec![
        expense(1, oct(1), dec!(30), Some(1)),
        expense(2, oct(2), dec!(70), Some(2)),
    ];

    let totals = CategoryAggregator::aggregate(&expenses, &reference());

    assert_eq!(totals.get("Fuel").unwrap().total, dec!(30));
    assert_eq!(totals.get("Meals").unwrap().total, dec!(70));

    let CategoryShares::Shares(shares) = totals.shares() else {
        panic!("expected shares");
    };
    assert_eq!(shares[0].name, "Meals");
    assert_eq!(shares[0].percent, dec!(70.0));
    assert_eq!(shares[1].name, "Fuel");
    assert_eq!(shares[1].percent, dec!(30.0));
    assert_eq!(shares[1].color, "#F59E0B");
}

#[test]
fn test_sums_within_category() {
    let expenses = vec![
        expense(1, oct(1), dec!(12.40), Some(1)),
        expense(2, oct(5), dec!(7.60), Some(1)),
        expense(3, oct(9), dec!(80.00), Some(3)),
    ];

    let totals = CategoryAggregator::aggregate(&expenses, &reference());

    assert_eq!(totals.len(), 2);
    assert_eq!(totals.get("Fuel").unwrap().total, dec!(20.00));
    assert_eq!(totals.grand_total(), dec!(100.00));
}

#[test]
fn test_missing_or_unknown_category_is_uncategorized() {
    let expenses = vec![
        expense(1, oct(1), dec!(10), None),
        expense(2, oct(1), dec!(5), Some(42)),
    ];

    let totals = CategoryAggregator::aggregate(&expenses, &reference());
    let bucket = totals.get(UNCATEGORIZED_NAME).unwrap();

    assert_eq!(bucket.total, dec!(15));
    assert_eq!(bucket.color, UNCATEGORIZED_COLOR);
}

#[test]
fn test_embedded_category_wins_over_reference() {
    let mut e = expense(1, oct(1), dec!(10), Some(1));
    e.category = Some(CategorySummary {
        name: "Carburante".to_string(),
        color: Some("#FF0000".to_string()),
    });

    let totals = CategoryAggregator::aggregate(&[e], &reference());

    assert_eq!(totals.get("Carburante").unwrap().color, "#FF0000");
    assert!(totals.get("Fuel").is_none());
}

#[test]
fn test_embedded_name_without_color_borrows_reference_color() {
    let mut e = expense(1, oct(1), dec!(10), Some(2));
    e.category = Some(CategorySummary {
        name: "Meals".to_string(),
        color: None,
    });

    let totals = CategoryAggregator::aggregate(&[e], &reference());

    assert_eq!(totals.get("Meals").unwrap().color, "#10B981");
}

#[test]
fn test_period_filter() {
    let expenses = vec![
        expense(1, oct(31), dec!(10), Some(1)),
        expense(2, NaiveDate::from_ymd_opt(2026, 11, 1).unwrap(), dec!(99), Some(1)),
    ];
    let period = MonthPeriod::new(2026, 10).unwrap();

    let totals = CategoryAggregator::aggregate_period(&expenses, &period, &reference());

    assert_eq!(totals.grand_total(), dec!(10));
}

#[test]
fn test_no_expenses_is_no_data() {
    let totals = CategoryAggregator::aggregate(&[], &reference());
    assert!(totals.is_empty());
    assert_eq!(totals.shares(), CategoryShares::NoData);
}

#[test]
fn test_zero_total_is_no_data() {
    let mut totals = CategoryTotals::new();
    totals.add("Fuel", "#F59E0B", Decimal::ZERO);

    let shares = totals.shares();

    assert!(shares.is_no_data());
    assert!(shares.as_slice().is_empty());
}

#[test]
fn test_thirds_round_to_one_decimal() {
    let ctx = ReferenceData::new(
        vec![category(1, "A", "#000"), category(2, "B", "#111"), category(3, "C", "#222")],
        Vec::new(),
        Vec::new(),
    );
    let expenses = vec![
        expense(1, oct(1), dec!(1), Some(1)),
        expense(2, oct(1), dec!(1), Some(2)),
        expense(3, oct(1), dec!(1), Some(3)),
    ];

    let shares = CategoryAggregator::aggregate(&expenses, &ctx).shares();

    for share in shares.as_slice() {
        assert_eq!(share.percent, dec!(33.3));
    }
}

#[test]
fn test_server_map_decodes_into_totals() {
    let json = r##"{
        "Carburante": {"totale": 120.5, "colore": "#F59E0B"},
        "Non categorizzata": {"totale": 0, "colore": "#6B7280"}
    }"##;

    let totals: CategoryTotals = serde_json::from_str(json).unwrap();

    assert_eq!(totals.len(), 2);
    assert_eq!(totals.grand_total(), dec!(120.5));
}

/// Strategy for per-category amounts in cents.
fn amounts() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec((1i64..10_000_000i64).prop_map(|c| Decimal::new(c, 2)), 1..12)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Shares of a non-empty breakdown add up to 100 within 0.1 per category.
    #[test]
    fn prop_shares_sum_to_hundred(values in amounts()) {
        let mut totals = CategoryTotals::new();
        for (i, amount) in values.iter().enumerate() {
            totals.add(&format!("C{i}"), "#000000", *amount);
        }

        let shares = totals.shares();
        let sum: Decimal = shares.as_slice().iter().map(|s| s.percent).sum();
        let tolerance = Decimal::new(1, 1) * Decimal::from(shares.as_slice().len());

        prop_assert!((sum - Decimal::ONE_HUNDRED).abs() <= tolerance);
    }

    /// Every share lies within 0..=100.
    #[test]
    fn prop_share_bounds(values in amounts()) {
        let mut totals = CategoryTotals::new();
        for (i, amount) in values.iter().enumerate() {
            totals.add(&format!("C{i}"), "#000000", *amount);
        }

        for share in totals.shares().as_slice() {
            prop_assert!(share.percent >= Decimal::ZERO);
            prop_assert!(share.percent <= Decimal::ONE_HUNDRED);
        }
    }
}
