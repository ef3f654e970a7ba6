//! Applicable per-kilometer rate for a vehicle.

pub mod resolver;

#[cfg(test)]
mod props;

pub use resolver::{RateResolver, RateSource, ResolvedRate};
