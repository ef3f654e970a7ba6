//! Plain-text rendering of page data.
//!
//! Every function writes to any [`fmt::Write`] so the output can be checked
//! without a terminal.

use std::fmt::{self, Write};

use expensa_client::{DashboardView, Health, TripsView};
use expensa_core::ReferenceData;
use expensa_core::breakdown::CategoryShares;
use expensa_core::dashboard::MonthlyTotals;
use expensa_core::display::{
    format_amount, format_date, format_distance, format_distance_whole, format_percent,
    format_rate,
};
use expensa_core::receipt::ExpensePrefill;
use expensa_core::records::{Client, Expense, Vehicle};
use expensa_shared::types::Currency;

const RULE: &str = "------------------------------------------------------------";

/// Dashboard cards, category chart and recent expenses.
pub fn dashboard(out: &mut impl Write, view: &DashboardView, currency: Currency) -> fmt::Result {
    let stats = &view.stats;
    writeln!(out, "Dashboard {}", stats.period)?;
    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "Expenses      {:>14}  ({} items)",
        format_amount(stats.total_expenses, currency),
        stats.expense_count
    )?;
    writeln!(
        out,
        "Billable      {:>14}",
        format_amount(stats.total_billable, currency)
    )?;
    writeln!(
        out,
        "Mileage       {:>14}  ({} trips)",
        format_distance_whole(stats.total_distance),
        stats.trip_count
    )?;
    writeln!(
        out,
        "Reimbursement {:>14}",
        format_amount(stats.total_reimbursement, currency)
    )?;

    writeln!(out)?;
    writeln!(out, "By category")?;
    shares(out, &view.shares, currency)?;

    writeln!(out)?;
    writeln!(out, "Recent expenses")?;
    if view.recent.is_empty() {
        writeln!(out, "  none")?;
    }
    for expense in &view.recent {
        writeln!(
            out,
            "  {}  {:<32} {:>12}",
            format_date(expense.date),
            expense.description,
            format_amount(expense.amount, currency)
        )?;
    }
    Ok(())
}

fn shares(out: &mut impl Write, shares: &CategoryShares, currency: Currency) -> fmt::Result {
    match shares {
        CategoryShares::NoData => writeln!(out, "  no data"),
        CategoryShares::Shares(rows) => {
            for share in rows {
                writeln!(
                    out,
                    "  {:<20} {:>12} {:>7}",
                    share.name,
                    format_amount(share.total, currency),
                    format_percent(share.percent)
                )?;
            }
            Ok(())
        }
    }
}

/// Expense table.
pub fn expenses(
    out: &mut impl Write,
    expenses: &[Expense],
    reference: &ReferenceData,
    currency: Currency,
) -> fmt::Result {
    for expense in expenses {
        let category = expense
            .category
            .as_ref()
            .map(|c| c.name.as_str())
            .or_else(|| {
                expense
                    .category_id
                    .and_then(|id| reference.category(id))
                    .map(|c| c.name.as_str())
            })
            .unwrap_or("-");
        let client = expense
            .client_id
            .and_then(|id| reference.client(id))
            .map_or("-", |c| c.name.as_str());

        writeln!(
            out,
            "{:>5}  {}  {:<16} {:<24} {:<28} {:>12}{}",
            expense.id,
            format_date(expense.date),
            category,
            client,
            expense.description,
            format_amount(expense.amount, currency),
            if expense.billable { "  B" } else { "" }
        )?;
    }
    writeln!(out, "{RULE}")?;
    let total = expenses.iter().map(|e| e.amount).sum();
    writeln!(
        out,
        "{} expenses, total {}",
        expenses.len(),
        format_amount(total, currency)
    )
}

/// Trip table with totals.
pub fn trips(out: &mut impl Write, view: &TripsView, currency: Currency) -> fmt::Result {
    for trip in &view.trips {
        let vehicle = trip.vehicle.as_ref().map_or("-", |v| v.plate.as_str());
        writeln!(
            out,
            "{:>5}  {}  {:<9} {:<14} {:<14} {:>10} {:>9} {:>12}",
            trip.id,
            format_date(trip.date),
            vehicle,
            trip.origin,
            trip.destination,
            format_distance(trip.distance),
            format_rate(trip.applied_rate, currency),
            format_amount(trip.reimbursement_or_computed(), currency)
        )?;
    }
    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "{} trips, {}, reimbursement {}",
        view.totals.trip_count,
        format_distance(view.totals.total_distance),
        format_amount(view.totals.total_reimbursement, currency)
    )
}

/// Client table.
pub fn clients(out: &mut impl Write, clients: &[Client]) -> fmt::Result {
    for client in clients {
        let place = match (client.city.as_deref(), client.province.as_deref()) {
            (Some(city), Some(province)) => format!("{city} ({province})"),
            (Some(city), None) => city.to_string(),
            _ => String::new(),
        };
        writeln!(
            out,
            "{:>4}  {:<8} {:<32} {:<13} {}",
            client.id,
            client.code.as_deref().unwrap_or("-"),
            client.name,
            client.vat_id.as_deref().unwrap_or("-"),
            place
        )?;
    }
    Ok(())
}

/// Vehicle table with the rate trips are reimbursed at.
pub fn vehicles(out: &mut impl Write, vehicles: &[Vehicle], currency: Currency) -> fmt::Result {
    for vehicle in vehicles {
        let resolved = vehicle.resolved_rate();
        writeln!(
            out,
            "{:>4}  {:<9} {:<24} {:>9}  {}",
            vehicle.id,
            vehicle.plate,
            vehicle.label(),
            format_rate(resolved.rate, currency),
            resolved.source.label()
        )?;
    }
    Ok(())
}

/// Twelve monthly rows.
pub fn monthly(out: &mut impl Write, rows: &[MonthlyTotals], currency: Currency) -> fmt::Result {
    writeln!(out, "Month      Expenses      Distance  Reimbursement")?;
    for row in rows {
        writeln!(
            out,
            "{:>5} {:>13} {:>13} {:>14}",
            row.month,
            format_amount(row.total_expenses, currency),
            format_distance_whole(row.total_distance),
            format_amount(row.total_reimbursement, currency)
        )?;
    }
    Ok(())
}

/// What a receipt scan recognized.
pub fn prefill(out: &mut impl Write, prefill: &ExpensePrefill, currency: Currency) -> fmt::Result {
    if let Some(warning) = &prefill.warning {
        writeln!(out, "warning: {warning}")?;
    }
    match prefill.amount {
        Some(amount) => writeln!(out, "Amount   {}", format_amount(amount, currency))?,
        None => writeln!(out, "Amount   not recognized")?,
    }
    match (prefill.date, prefill.unparsed_date.as_deref()) {
        (Some(date), _) => writeln!(out, "Date     {}", format_date(date))?,
        (None, Some(text)) => writeln!(out, "Date     {text} (not converted)")?,
        (None, None) => writeln!(out, "Date     not recognized")?,
    }
    if let Some(vat_id) = &prefill.vat_id {
        writeln!(out, "VAT ID   {vat_id}")?;
    }
    if let Some(url) = &prefill.receipt_url {
        writeln!(out, "Receipt  {url}")?;
    }
    Ok(())
}

/// One-line health summary.
pub fn health(health: &Health) -> String {
    if health.is_ok() {
        format!("API up ({})", health.timestamp)
    } else {
        format!("API reports '{}' ({})", health.status, health.timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expensa_core::breakdown::{CategoryShare, CategoryTotals};
    use expensa_core::dashboard::DashboardStats;
    use expensa_core::MonthPeriod;
    use rust_decimal_macros::dec;

    fn stats() -> DashboardStats {
        DashboardStats {
            period: MonthPeriod::new(2026, 10).unwrap(),
            total_expenses: dec!(100),
            total_billable: dec!(70),
            total_distance: dec!(130.1),
            total_reimbursement: dec!(66.92),
            expense_count: 2,
            trip_count: 2,
            categories: CategoryTotals::new(),
        }
    }

    #[test]
    fn test_dashboard_cards() {
        let view = DashboardView {
            stats: stats(),
            shares: CategoryShares::Shares(vec![CategoryShare {
                name: "Ristoranti".to_string(),
                color: "#10B981".to_string(),
                total: dec!(70),
                percent: dec!(70.0),
            }]),
            recent: Vec::new(),
        };
        let mut out = String::new();

        dashboard(&mut out, &view, Currency::Eur).unwrap();

        assert!(out.starts_with("Dashboard 2026-10\n"));
        assert!(out.contains("€ 100.00"));
        assert!(out.contains("130 km"));
        assert!(out.contains("€ 66.92"));
        assert!(out.contains("Ristoranti"));
        assert!(out.contains("70.0%"));
        assert!(out.contains("  none"));
    }

    #[test]
    fn test_empty_chart_says_no_data() {
        let mut out = String::new();
        shares(&mut out, &CategoryShares::NoData, Currency::Eur).unwrap();
        assert_eq!(out, "  no data\n");
    }

    #[test]
    fn test_prefill_lines() {
        let scan = ExpensePrefill {
            amount: Some(dec!(6.7)),
            unparsed_date: Some("12/03/26".to_string()),
            warning: Some("low confidence".to_string()),
            ..ExpensePrefill::default()
        };
        let mut out = String::new();

        prefill(&mut out, &scan, Currency::Eur).unwrap();

        assert_eq!(
            out,
            "warning: low confidence\nAmount   € 6.70\nDate     12/03/26 (not converted)\n"
        );
    }

    #[test]
    fn test_health_line() {
        let up = Health {
            status: "ok".to_string(),
            timestamp: "2026-10-18T09:30:00".to_string(),
        };
        assert_eq!(health(&up), "API up (2026-10-18T09:30:00)");
    }
}
