//! Rate resolution.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::records::Vehicle;

/// Where an effective rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateSource {
    /// The standard reference table rate.
    Standard,
    /// The vehicle-specific override.
    Custom,
}

impl RateSource {
    /// Short label shown next to a rate.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Custom => "Custom",
        }
    }
}

/// An effective rate and its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRate {
    /// Rate per kilometer.
    pub rate: Decimal,
    /// Which of the vehicle's rates was picked.
    pub source: RateSource,
}

/// Picks the rate a vehicle's trips are reimbursed at.
pub struct RateResolver;

impl RateResolver {
    /// Resolves the effective rate of a vehicle.
    ///
    /// The custom rate wins only when `uses_custom_rate` is set AND a custom
    /// rate is present. A present custom rate of zero is honored. Otherwise
    /// the standard rate applies, silently.
    #[must_use]
    pub fn resolve(vehicle: &Vehicle) -> ResolvedRate {
        match vehicle.custom_rate {
            Some(custom) if vehicle.uses_custom_rate => ResolvedRate {
                rate: custom,
                source: RateSource::Custom,
            },
            _ => ResolvedRate {
                rate: vehicle.standard_rate,
                source: RateSource::Standard,
            },
        }
    }

    /// Shorthand for [`RateResolver::resolve`] when only the number matters.
    #[must_use]
    pub fn effective_rate(vehicle: &Vehicle) -> Decimal {
        Self::resolve(vehicle).rate
    }
}
