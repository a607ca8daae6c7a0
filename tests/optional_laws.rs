//! Property-based tests for Optional monad laws.
//!
//! 1. **Left Identity**: `Present(a).flat_map(f) == f(a)`
//! 2. **Right Identity**: `m.flat_map(Present) == m`
//! 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`

use proptest::prelude::*;
use super_iterables::Optional;

fn optional() -> impl Strategy<Value = Optional<i32>> {
    any::<Option<i32>>().prop_map(Optional::from)
}

fn halve(value: i32) -> Optional<i32> {
    if value % 2 == 0 {
        Optional::Present(value / 2)
    } else {
        Optional::Absent
    }
}

fn positive(value: i32) -> Optional<i32> {
    if value > 0 {
        Optional::Present(value)
    } else {
        Optional::Absent
    }
}

proptest! {
    #[test]
    fn prop_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Optional::Present(value).flat_map(halve), halve(value));
    }

    #[test]
    fn prop_right_identity(value in optional()) {
        prop_assert_eq!(value.flat_map(Optional::Present), value);
    }

    #[test]
    fn prop_associativity(value in optional()) {
        let left = value.flat_map(halve).flat_map(positive);
        let right = value.flat_map(|x| halve(x).flat_map(positive));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_map_identity(value in optional()) {
        prop_assert_eq!(value.map(|x| x), value);
    }

    #[test]
    fn prop_option_roundtrip(value in any::<Option<i32>>()) {
        prop_assert_eq!(Optional::from(value).into_option(), value);
    }

    #[test]
    fn prop_filter_not_is_complement(value in optional()) {
        let kept = value.filter(|x| *x > 0);
        let dropped = value.filter_not(|x| *x > 0);
        prop_assert!(kept.is_empty() || dropped.is_empty());
        prop_assert_eq!(kept.or(dropped), value);
    }
}
