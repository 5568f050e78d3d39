//! Reordering sequences.
//!
//! [`sort_by`] and [`sort_by_property`] sort their input in place and hand
//! it back, unlike the rest of the module. `shuffle` works on a copy and
//! leaves its input untouched.

use std::cmp::Ordering;

#[cfg(feature = "shuffle")]
use rand::Rng;
#[cfg(feature = "shuffle")]
use rand::seq::SliceRandom;

use super::Property;

/// Three-way comparison of two sort keys.
///
/// A greater key orders after, a lesser key before; keys that are neither
/// (equal or incomparable) tie.
fn compare_keys<K: PartialOrd>(left: &K, right: &K) -> Ordering {
    if left > right {
        Ordering::Greater
    } else if left < right {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

/// Sorts `sequence` in place by the key `key_function` derives from each
/// element, and returns it.
///
/// The sort is not stable: elements with equal keys may be reordered. Keys
/// should be totally ordered; incomparable keys (such as `NaN`) tie with
/// everything and leave the resulting order unspecified.
///
/// # Examples
///
/// ```rust
/// use collars::collection::sort_by;
///
/// let mut words = vec!["banana", "fig", "apple"];
/// sort_by(&mut words, |word| word.len());
/// assert_eq!(words, vec!["fig", "apple", "banana"]);
/// ```
pub fn sort_by<T, K, F>(sequence: &mut [T], mut key_function: F) -> &mut [T]
where
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    sequence.sort_unstable_by(|left, right| {
        compare_keys(&key_function(left), &key_function(right))
    });
    sequence
}

/// Sorts `sequence` in place by the property `name` of each element, and
/// returns it.
///
/// Elements missing the property sort before every element that has it.
/// Like [`sort_by`], the sort is not stable.
///
/// # Examples
///
/// ```rust
/// use collars::collection::sort_by_property;
/// use std::collections::HashMap;
///
/// let mut people = vec![
///     HashMap::from([("name".to_string(), "moe")]),
///     HashMap::from([("name".to_string(), "curly")]),
///     HashMap::from([("name".to_string(), "larry")]),
/// ];
/// sort_by_property(&mut people, "name");
/// let names: Vec<_> = people.iter().map(|person| person["name"]).collect();
/// assert_eq!(names, vec!["curly", "larry", "moe"]);
/// ```
pub fn sort_by_property<'s, T, K>(sequence: &'s mut [T], name: &K) -> &'s mut [T]
where
    T: Property<K>,
    T::Output: PartialOrd,
    K: ?Sized,
{
    sequence.sort_unstable_by(|left, right| {
        compare_keys(&left.property(name), &right.property(name))
    });
    sequence
}

/// Returns a random permutation of a copy of `sequence`.
///
/// The input is not modified. Uses the thread-local random generator; see
/// [`shuffle_with`] to supply one.
///
/// # Examples
///
/// ```rust
/// use collars::collection::shuffle;
///
/// let values = vec![1, 2, 3, 4, 5];
/// let mut shuffled = shuffle(&values);
/// assert_eq!(values, vec![1, 2, 3, 4, 5]);
///
/// shuffled.sort_unstable();
/// assert_eq!(shuffled, values);
/// ```
#[cfg(feature = "shuffle")]
pub fn shuffle<T: Clone>(sequence: &[T]) -> Vec<T> {
    shuffle_with(sequence, &mut rand::rng())
}

/// Returns a random permutation of a copy of `sequence`, drawing from `random`.
///
/// Every permutation is equally likely (Fisher-Yates).
///
/// # Examples
///
/// ```rust
/// use collars::collection::shuffle_with;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let values = vec!['a', 'b', 'c', 'd'];
/// let first = shuffle_with(&values, &mut StdRng::seed_from_u64(7));
/// let second = shuffle_with(&values, &mut StdRng::seed_from_u64(7));
/// assert_eq!(first, second);
/// ```
#[cfg(feature = "shuffle")]
pub fn shuffle_with<T, R>(sequence: &[T], random: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut copy = sequence.to_vec();
    copy.shuffle(random);
    copy
}
