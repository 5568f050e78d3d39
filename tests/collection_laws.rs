#![cfg(feature = "collection")]
//! Property-based tests for the collection operations.
//!
//! Laws:
//!
//! 1. **Map Identity Law**: mapping a clone yields the original.
//!    ```text
//!    map(xs, |x| x.clone()) == xs
//!    ```
//!
//! 2. **Partition Law**: select and reject split the input between them,
//!    each keeping the original order.
//!
//! 3. **Uniq Law**: uniq keeps the first occurrence of each value and
//!    nothing else.
//!
//! 4. **Fold Law**: fold agrees with iterator fold in traversal order.

#![forbid(unsafe_code)]

use collars::collection::{
    contains, difference, every, first, fold, intersection, last, map, range, reduce, reject,
    select, uniq,
};
use proptest::prelude::*;

// =============================================================================
// Traversal Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_map_identity_law(elements in prop::collection::vec(any::<i32>(), 0..30)) {
        let mapped = map(&elements, Clone::clone);
        prop_assert_eq!(mapped, elements);
    }

    #[test]
    fn prop_map_composition_law(elements in prop::collection::vec(any::<i32>(), 0..30)) {
        let function1 = |x: &i32| x.wrapping_add(1);
        let function2 = |x: &i32| x.wrapping_mul(3);

        let composed = map(&elements, |x| function2(&function1(x)));
        let intermediate = map(&elements, function1);
        let sequential = map(&intermediate, function2);

        prop_assert_eq!(composed, sequential);
    }

    #[test]
    fn prop_fold_matches_iterator_fold(elements in prop::collection::vec(any::<i16>(), 0..30)) {
        let expected = elements
            .iter()
            .fold(Vec::new(), |mut reduction, value| {
                reduction.push(*value);
                reduction
            });
        let folded = fold(&elements, Vec::new(), |mut reduction, value, _, _| {
            reduction.push(*value);
            reduction
        });
        prop_assert_eq!(folded, expected);
    }

    #[test]
    fn prop_reduce_without_seed_equals_seeded_tail(elements in prop::collection::vec(any::<i32>(), 1..30)) {
        let unseeded = reduce(&elements, |sum, value, _, _| sum.wrapping_add(*value), None);
        let seeded = reduce(
            &elements[1..],
            |sum, value, _, _| sum.wrapping_add(*value),
            Some(elements[0]),
        );
        prop_assert_eq!(unseeded, seeded);
    }
}

// =============================================================================
// Filtering Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_select_reject_partition_law(
        elements in prop::collection::vec(any::<i32>(), 0..30),
        divisor in 1_i32..5
    ) {
        let selected = select(&elements, |value, _, _| value % divisor == 0);
        let rejected = reject(&elements, |value, _, _| value % divisor == 0);

        prop_assert_eq!(selected.len() + rejected.len(), elements.len());
        prop_assert_eq!(
            &selected,
            &elements.iter().copied().filter(|value| value % divisor == 0).collect::<Vec<_>>()
        );
        prop_assert_eq!(
            &rejected,
            &elements.iter().copied().filter(|value| value % divisor != 0).collect::<Vec<_>>()
        );
    }

    #[test]
    fn prop_every_element_is_contained(elements in prop::collection::vec(any::<u8>(), 0..30)) {
        prop_assert!(every(&elements, |value| contains(&elements, value)));
    }

    #[test]
    fn prop_uniq_keeps_first_occurrences(elements in prop::collection::vec(0_u8..10, 0..40)) {
        let unique = uniq(&elements);

        let mut expected = Vec::new();
        for value in &elements {
            if !expected.contains(value) {
                expected.push(*value);
            }
        }
        prop_assert_eq!(&unique, &expected);
        prop_assert_eq!(uniq(&unique), unique);
    }
}

// =============================================================================
// Combination Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_intersection_and_difference_partition_first(
        head in prop::collection::vec(0_u8..20, 0..30),
        other in prop::collection::vec(0_u8..20, 0..30)
    ) {
        let common = intersection(&[&head[..], &other[..]]);
        let remaining = difference(&[&head[..], &other[..]]);

        prop_assert_eq!(common.len() + remaining.len(), head.len());
        prop_assert!(common.iter().all(|value| other.contains(value)));
        prop_assert!(remaining.iter().all(|value| !other.contains(value)));
    }
}

// =============================================================================
// Slicing and Generation Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_first_last_are_clamped(
        elements in prop::collection::vec(any::<i32>(), 0..20),
        count in 0_usize..40
    ) {
        let head = first(&elements[..], Some(count)).unwrap_or_default();
        let tail = last(&elements[..], Some(count)).unwrap_or_default();
        let expected_length = count.min(elements.len());

        prop_assert_eq!(head.len(), expected_length);
        prop_assert_eq!(tail.len(), expected_length);
        prop_assert_eq!(&head[..], &elements[..expected_length]);
        prop_assert_eq!(&tail[..], &elements[elements.len() - expected_length..]);
    }

    #[test]
    fn prop_range_counts_up_from_zero(upper in -50_i64..500) {
        let generated = range(upper);
        prop_assert_eq!(generated.len(), usize::try_from(upper.max(0)).unwrap());
        prop_assert!(generated.iter().enumerate().all(|(index, value)| i64::try_from(index).unwrap() == *value));
    }
}

// =============================================================================
// Shuffle Laws
// =============================================================================

#[cfg(feature = "shuffle")]
mod shuffle_laws {
    use collars::collection::shuffle_with;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    proptest! {
        #[test]
        fn prop_shuffle_is_permutation(
            elements in prop::collection::vec(any::<i32>(), 0..40),
            seed in any::<u64>()
        ) {
            let mut shuffled = shuffle_with(&elements, &mut StdRng::seed_from_u64(seed));
            let mut sorted = elements.clone();
            shuffled.sort_unstable();
            sorted.sort_unstable();
            prop_assert_eq!(shuffled, sorted);
        }
    }
}
