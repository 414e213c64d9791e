//! Property tests for clamped arithmetic.

use bounded_arith::{add, subtract, BoundedArithmetic, Bounds, ErrorKind};
use proptest::prelude::*;

fn out_of_range() -> impl Strategy<Value = i64> {
    prop_oneof![i64::MIN..0i64, 101i64..=i64::MAX]
}

proptest! {
    #[test]
    fn add_is_min_of_sum_and_100(a in 0i64..=100, b in 0i64..=100) {
        prop_assert_eq!(add(a, b).unwrap(), (a + b).min(100));
    }

    #[test]
    fn subtract_is_max_of_difference_and_0(a in 0i64..=100, b in 0i64..=100) {
        prop_assert_eq!(subtract(a, b).unwrap(), (a - b).max(0));
    }

    #[test]
    fn repeated_calls_agree(a in 0i64..=100, b in 0i64..=100) {
        prop_assert_eq!(add(a, b), add(a, b));
        prop_assert_eq!(subtract(a, b), subtract(a, b));
    }

    #[test]
    fn bad_first_operand_fails(a in out_of_range(), b in any::<i64>()) {
        prop_assert_eq!(add(a, b).unwrap_err().kind(), ErrorKind::Range);
        prop_assert_eq!(subtract(a, b).unwrap_err().kind(), ErrorKind::Range);
    }

    #[test]
    fn bad_second_operand_fails(a in 0i64..=100, b in out_of_range()) {
        prop_assert!(add(a, b).unwrap_err().is_range());
        prop_assert!(subtract(a, b).unwrap_err().is_range());
    }

    #[test]
    fn results_stay_within_bounds(
        min in -1_000i64..=1_000,
        span in 0i64..=2_000,
        x in 0i64..=2_000,
        y in 0i64..=2_000,
    ) {
        let max = min + span;
        let arith = BoundedArithmetic::new(Bounds::new(min, max)).unwrap();
        let a = min + x.min(span);
        let b = min + y.min(span);
        let bounds = arith.bounds();
        prop_assert!(bounds.contains(arith.add(a, b).unwrap()));
        prop_assert!(bounds.contains(arith.subtract(a, b).unwrap()));
    }
}
