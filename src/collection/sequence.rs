//! Derived operations built on [`fold`].
//!
//! Each operation here is a single fold over the input collection. None of
//! them modify their input; results that are sequences are freshly
//! allocated and keep the traversal order of the input.

use super::{Collection, Key, Nested, Property, Truthy, fold};

/// Applies `transform` to every element and collects the results.
///
/// The output has one element per input element, in traversal order. A
/// `None` sequence maps to an empty `Vec`.
///
/// # Examples
///
/// ```rust
/// use collars::collection::map;
///
/// assert_eq!(map(&[1, 2, 3], |value| value * 10), vec![10, 20, 30]);
/// assert!(map(None::<&[i32]>, |value| value * 10).is_empty());
/// ```
pub fn map<'a, T, U, C, F>(collection: C, mut transform: F) -> Vec<U>
where
    T: 'a,
    C: Into<Collection<'a, T>>,
    F: FnMut(&'a T) -> U,
{
    let collection = collection.into();
    fold(
        collection,
        Vec::with_capacity(collection.len()),
        |mut reduction, value, _, _| {
            reduction.push(transform(value));
            reduction
        },
    )
}

/// Reads the property `key` of every element.
///
/// Equivalent to `map(collection, |element| element.property(key).cloned())`.
/// Elements without the property produce `None`.
///
/// # Examples
///
/// ```rust
/// use collars::collection::pluck;
/// use std::collections::HashMap;
///
/// let people = vec![
///     HashMap::from([("name".to_string(), "moe"), ("age".to_string(), "40")]),
///     HashMap::from([("name".to_string(), "larry")]),
/// ];
/// assert_eq!(pluck(&people, "name"), vec![Some("moe"), Some("larry")]);
/// assert_eq!(pluck(&people, "age"), vec![Some("40"), None]);
/// ```
pub fn pluck<'a, T, K, C>(collection: C, key: &K) -> Vec<Option<T::Output>>
where
    T: Property<K> + 'a,
    T::Output: Clone,
    K: ?Sized,
    C: Into<Collection<'a, T>>,
{
    map(collection, |element| element.property(key).cloned())
}

/// Returns the elements for which `predicate` holds, in order.
///
/// The predicate receives the element, its key and the whole collection.
///
/// # Examples
///
/// ```rust
/// use collars::collection::select;
///
/// let evens = select(&[1, 2, 3, 4, 5, 6], |value, _, _| value % 2 == 0);
/// assert_eq!(evens, vec![2, 4, 6]);
///
/// let after_first = select(&['a', 'b', 'c'], |_, key, _| key.as_index() != Some(0));
/// assert_eq!(after_first, vec!['b', 'c']);
/// ```
pub fn select<'a, T, C, F>(collection: C, mut predicate: F) -> Vec<T>
where
    T: Clone + 'a,
    C: Into<Collection<'a, T>>,
    F: FnMut(&'a T, Key<'a>, Collection<'a, T>) -> bool,
{
    fold(
        collection,
        Vec::new(),
        |mut reduction, value, key, collection| {
            if predicate(value, key, collection) {
                reduction.push(value.clone());
            }
            reduction
        },
    )
}

/// Returns the elements for which `predicate` does not hold, in order.
///
/// The complement of [`select`]: together they partition the input.
///
/// # Examples
///
/// ```rust
/// use collars::collection::reject;
///
/// let odds = reject(&[1, 2, 3, 4, 5, 6], |value, _, _| value % 2 == 0);
/// assert_eq!(odds, vec![1, 3, 5]);
/// ```
pub fn reject<'a, T, C, F>(collection: C, mut predicate: F) -> Vec<T>
where
    T: Clone + 'a,
    C: Into<Collection<'a, T>>,
    F: FnMut(&'a T, Key<'a>, Collection<'a, T>) -> bool,
{
    fold(
        collection,
        Vec::new(),
        |mut reduction, value, key, collection| {
            if !predicate(value, key, collection) {
                reduction.push(value.clone());
            }
            reduction
        },
    )
}

/// Returns `true` if `predicate` holds for every element.
///
/// An empty collection satisfies every predicate. The predicate is called
/// for every element; evaluation does not stop at the first failure.
///
/// # Examples
///
/// ```rust
/// use collars::collection::every;
///
/// assert!(every(&[2, 4, 6], |value| value % 2 == 0));
/// assert!(!every(&[2, 3, 6], |value| value % 2 == 0));
/// assert!(every(&Vec::<i32>::new(), |_| false));
/// ```
pub fn every<'a, T, C, F>(collection: C, mut predicate: F) -> bool
where
    T: 'a,
    C: Into<Collection<'a, T>>,
    F: FnMut(&'a T) -> bool,
{
    fold(collection, true, |previous, value, _, _| {
        predicate(value) && previous
    })
}

/// Returns `true` if `predicate` holds for at least one element.
///
/// An empty collection yields `false`. Like [`every`], the predicate is
/// called for every element.
///
/// # Examples
///
/// ```rust
/// use collars::collection::any;
///
/// assert!(any(&[1, 2, 3], |value| *value > 2));
/// assert!(!any(&[1, 2, 3], |value| *value > 3));
/// ```
pub fn any<'a, T, C, F>(collection: C, mut predicate: F) -> bool
where
    T: 'a,
    C: Into<Collection<'a, T>>,
    F: FnMut(&'a T) -> bool,
{
    fold(collection, false, |previous, value, _, _| {
        predicate(value) || previous
    })
}

/// Returns `true` if at least one element is itself truthy.
///
/// This is [`any`] without a predicate; see [`Truthy`] for what counts as
/// true.
///
/// # Examples
///
/// ```rust
/// use collars::collection::any_truthy;
///
/// assert!(any_truthy(&[0, 0, 3]));
/// assert!(!any_truthy(&["", ""]));
/// assert!(!any_truthy(&Vec::<bool>::new()));
/// ```
pub fn any_truthy<'a, T, C>(collection: C) -> bool
where
    T: Truthy + 'a,
    C: Into<Collection<'a, T>>,
{
    any(collection, Truthy::is_truthy)
}

/// Returns `true` if some element equals `target`.
///
/// # Examples
///
/// ```rust
/// use collars::collection::contains;
///
/// assert!(contains(&[1, 2, 3], &3));
/// assert!(!contains(&[1, 2, 3], &4));
/// ```
pub fn contains<'a, T, C>(collection: C, target: &T) -> bool
where
    T: PartialEq + 'a,
    C: Into<Collection<'a, T>>,
{
    fold(collection, false, |reduction, value, _, _| {
        value == target || reduction
    })
}

/// Returns the elements with duplicates removed, keeping first occurrences.
///
/// An element is kept when its key is the first key holding an equal value,
/// so the output preserves the order in which values were first seen.
///
/// # Examples
///
/// ```rust
/// use collars::collection::uniq;
///
/// assert_eq!(uniq(&[1, 2, 1, 3, 2, 4]), vec![1, 2, 3, 4]);
/// ```
pub fn uniq<'a, T, C>(collection: C) -> Vec<T>
where
    T: PartialEq + Clone + 'a,
    C: Into<Collection<'a, T>>,
{
    select(collection, |value, key, collection| {
        collection.position(value) == Some(key)
    })
}

/// Flattens arbitrarily nested sequences into one sequence.
///
/// Nested sequences are expanded recursively to any depth; plain values are
/// kept in their traversal order.
///
/// # Examples
///
/// ```rust
/// use collars::collection::{flatten, Nested};
///
/// let input = vec![
///     Nested::Value(1),
///     Nested::Sequence(vec![
///         Nested::Value(2),
///         Nested::Sequence(vec![Nested::Value(3), Nested::Value(4)]),
///     ]),
///     Nested::Value(5),
/// ];
/// assert_eq!(flatten(&input), vec![1, 2, 3, 4, 5]);
/// ```
pub fn flatten<T: Clone>(nested: &[Nested<T>]) -> Vec<T> {
    fold(nested, Vec::new(), |mut reduction, element, _, _| {
        match element {
            Nested::Sequence(inner) => reduction.extend(flatten(inner)),
            Nested::Value(value) => reduction.push(value.clone()),
        }
        reduction
    })
}
