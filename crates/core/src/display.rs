//! Display rounding and formatting.
//!
//! Values are kept exact everywhere else and rounded only here, half away
//! from zero, to a fixed number of places.

use chrono::NaiveDate;
use expensa_shared::types::money::{AMOUNT_DECIMALS, round_half_away};
use expensa_shared::types::{Currency, Money};
use rust_decimal::Decimal;

use crate::breakdown::types::PERCENT_DECIMALS;

/// Decimal places shown for distances.
pub const DISTANCE_DECIMALS: u32 = 1;

/// Decimal places shown for per-kilometer rates.
pub const RATE_DECIMALS: u32 = 3;

/// Rounds and pads `value` to exactly `decimal_places`.
#[must_use]
pub fn fixed(value: Decimal, decimal_places: u32) -> Decimal {
    let mut rounded = round_half_away(value, decimal_places);
    rounded.rescale(decimal_places);
    rounded
}

/// `€ 60.00`
#[must_use]
pub fn format_amount(amount: Decimal, currency: Currency) -> String {
    Money::new(amount, currency).to_string()
}

/// `120.0 km`
#[must_use]
pub fn format_distance(km: Decimal) -> String {
    format!("{} km", fixed(km, DISTANCE_DECIMALS))
}

/// Whole kilometers, as on the dashboard card: `120 km`.
#[must_use]
pub fn format_distance_whole(km: Decimal) -> String {
    format!("{} km", fixed(km, 0))
}

/// `€ 0.500`
#[must_use]
pub fn format_rate(rate: Decimal, currency: Currency) -> String {
    format!("{} {}", currency.symbol(), fixed(rate, RATE_DECIMALS))
}

/// `30.0%`
#[must_use]
pub fn format_percent(percent: Decimal) -> String {
    format!("{}%", fixed(percent, PERCENT_DECIMALS))
}

/// `18/10/2026`
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Amount rounded to cents, without currency symbol.
#[must_use]
pub fn cents(amount: Decimal) -> Decimal {
    fixed(amount, AMOUNT_DECIMALS)
}
