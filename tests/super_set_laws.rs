//! Property-based tests for SuperSet algebra laws.

use proptest::prelude::*;
use super_iterables::SuperSet;

fn super_set() -> impl Strategy<Value = SuperSet<i16>> {
    prop::collection::vec(-50..50_i16, 0..30).prop_map(|values| values.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_union_then_intersection_is_identity(a in super_set(), b in super_set()) {
        prop_assert_eq!(a.union([&b]).intersection([&a]), a);
    }

    #[test]
    fn prop_difference_with_self_is_empty(a in super_set()) {
        prop_assert!(a.difference([&a]).is_empty());
    }

    #[test]
    fn prop_union_commutative(a in super_set(), b in super_set()) {
        prop_assert_eq!(a.union([&b]), b.union([&a]));
    }

    #[test]
    fn prop_symmetric_difference_is_union_minus_intersection(a in super_set(), b in super_set()) {
        let expected = a.union([&b]).difference([&a.intersection([&b])]);
        prop_assert_eq!(a.symmetric_difference([&b]), expected);
    }

    #[test]
    fn prop_subset_relations(a in super_set(), b in super_set()) {
        let union = a.union([&b]);
        prop_assert!(a.is_subset(&union));
        prop_assert!(union.is_superset(&b));
        prop_assert!(a.difference([&b]).is_disjoint(&b));
    }

    #[test]
    fn prop_map_identity(a in super_set()) {
        prop_assert_eq!(a.clone().map(|x| x), a);
    }

    #[test]
    fn prop_filter_idempotent(a in super_set()) {
        let once = a.filter(|x| *x > 0);
        prop_assert_eq!(once.clone().filter(|x| *x > 0), once);
    }
}
