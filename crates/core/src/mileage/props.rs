//! Property-based tests for mileage calculations.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::MileageService;

/// Strategy for distances between 0.0 and 9,999.9 km.
fn distance() -> impl Strategy<Value = Decimal> {
    (0i64..100_000i64).prop_map(|v| Decimal::new(v, 1))
}

/// Strategy for rates between 0.000 and 9.999 per kilometer.
fn rate() -> impl Strategy<Value = Decimal> {
    (0i64..10_000i64).prop_map(|v| Decimal::new(v, 3))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Dividing the exact reimbursement by the rate gives back the distance.
    #[test]
    fn prop_reimbursement_recovers_distance(d in distance(), r in rate()) {
        prop_assume!(r > Decimal::ZERO);
        prop_assert_eq!(MileageService::reimbursement(d, r) / r, d);
    }

    /// Splitting a journey in two legs at the same rate does not change the
    /// exact reimbursement.
    #[test]
    fn prop_split_journey_same_reimbursement(a in distance(), b in distance(), r in rate()) {
        prop_assert_eq!(
            MileageService::reimbursement(a, r) + MileageService::reimbursement(b, r),
            MileageService::reimbursement(a + b, r)
        );
    }

    /// The stored value is within half a cent of the exact value and has at
    /// most two decimals.
    #[test]
    fn prop_stored_is_nearest_cent(d in distance(), r in rate()) {
        let exact = MileageService::reimbursement(d, r);
        let stored = MileageService::stored_reimbursement(d, r);

        prop_assert!((stored - exact).abs() <= Decimal::new(5, 3));
        prop_assert_eq!(stored, stored.round_dp(2));
    }

    /// Rounding never truncates: a remainder of at least half a cent rounds up.
    #[test]
    fn prop_half_cent_rounds_up(d in distance(), r in rate()) {
        let exact = MileageService::reimbursement(d, r);
        let stored = MileageService::stored_reimbursement(d, r);
        let truncated = exact.trunc_with_scale(2);

        if exact - truncated >= Decimal::new(5, 3) {
            prop_assert!(stored > truncated);
        } else {
            prop_assert_eq!(stored, truncated);
        }
    }
}
