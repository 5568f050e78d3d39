//! Folding a collection into a single value.
//!
//! [`fold`] is the seeded fold every derived operation is built on.
//! [`reduce`] adds the optional-seed behavior: without a seed the first
//! visited element becomes the accumulator and folding starts from the
//! second element.

use super::{Collection, Key};

/// Folds `collection` from its first element to its last with an explicit seed.
///
/// For each element the accumulator is replaced by
/// `iterator(accumulator, element, key, collection)`. An empty collection
/// returns `initial` unchanged.
///
/// # Examples
///
/// ```rust
/// use collars::collection::fold;
///
/// let joined = fold(&["a", "b", "c"], String::new(), |mut accumulator, value, _, _| {
///     accumulator.push_str(value);
///     accumulator
/// });
/// assert_eq!(joined, "abc");
/// ```
pub fn fold<'a, T, A, C, F>(collection: C, initial: A, mut iterator: F) -> A
where
    T: 'a,
    C: Into<Collection<'a, T>>,
    F: FnMut(A, &'a T, Key<'a>, Collection<'a, T>) -> A,
{
    let collection = collection.into();
    collection
        .entries()
        .fold(initial, |accumulator, (key, value)| {
            iterator(accumulator, value, key, collection)
        })
}

/// Reduces `collection` to a single value of its element type.
///
/// When `initial` is `Some(seed)` the fold starts from `seed`. When it is
/// `None`, the first visited element seeds the accumulator and `iterator` is
/// first applied to the second element. An empty collection returns
/// `initial` as given, so an unseeded reduction of nothing is `None`.
///
/// # Examples
///
/// ```rust
/// use collars::collection::reduce;
///
/// let values = vec![1, 2, 3];
///
/// assert_eq!(reduce(&values, |sum, value, _, _| sum + value, None), Some(6));
/// assert_eq!(reduce(&values, |sum, value, _, _| sum + value, Some(10)), Some(16));
///
/// let empty: Vec<i32> = Vec::new();
/// assert_eq!(reduce(&empty, |sum, value, _, _| sum + value, None), None);
/// ```
pub fn reduce<'a, T, C, F>(collection: C, mut iterator: F, initial: Option<T>) -> Option<T>
where
    T: Clone + 'a,
    C: Into<Collection<'a, T>>,
    F: FnMut(T, &'a T, Key<'a>, Collection<'a, T>) -> T,
{
    fold(
        collection,
        initial,
        |accumulator, value, key, collection| match accumulator {
            None => Some(value.clone()),
            Some(current) => Some(iterator(current, value, key, collection)),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    struct Tally {
        names: Vec<String>,
    }

    #[rstest]
    fn test_fold_threads_a_move_only_accumulator() {
        let stock = HashMap::from([("pears".to_string(), 0), ("plums".to_string(), 4)]);
        let tally = fold(&stock, Tally { names: Vec::new() }, |mut tally, _, key, _| {
            tally.names.push(key.to_string());
            tally
        });

        let mut names = tally.names;
        names.sort();
        assert_eq!(names, vec!["pears", "plums"]);
    }

    #[rstest]
    fn test_fold_visits_sequence_keys_in_order() {
        let keys = fold(&['a', 'b', 'c'], Vec::new(), |mut keys, _, key, collection| {
            assert_eq!(collection.len(), 3);
            keys.push(key);
            keys
        });
        assert_eq!(keys, vec![Key::Index(0), Key::Index(1), Key::Index(2)]);
    }
}
