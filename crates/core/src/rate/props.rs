//! Property-based tests for rate resolution.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::resolver::fixtures::vehicle;
use super::resolver::RateResolver;

/// Strategy for rates between 0.000 and 9.999 per kilometer.
fn rate() -> impl Strategy<Value = Decimal> {
    (0i64..10_000i64).prop_map(|v| Decimal::new(v, 3))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The effective rate is the custom rate iff the flag is set and a custom
    /// rate is present; otherwise it is the standard rate.
    #[test]
    fn prop_effective_rate_rule(
        standard in rate(),
        custom in proptest::option::of(rate()),
        uses_custom in any::<bool>(),
    ) {
        let v = vehicle(standard, custom, uses_custom);
        let effective = RateResolver::effective_rate(&v);

        match custom {
            Some(c) if uses_custom => prop_assert_eq!(effective, c),
            _ => prop_assert_eq!(effective, standard),
        }
    }
}
