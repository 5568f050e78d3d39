//! Property lookup by name or by index.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Types whose elements can be looked up by a key of type `K`.
///
/// `Property` is what [`pluck`](super::pluck), [`zip`](super::zip) and
/// [`sort_by_property`](super::sort_by_property) use to read "the property
/// named `key`" of an element. Maps are addressed by `str`, sequences by
/// `usize`. Implement it for your own records to pluck or sort them by field
/// name.
///
/// # Examples
///
/// ```rust
/// use collars::collection::Property;
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Property<str> for Point {
///     type Output = i32;
///
///     fn property(&self, key: &str) -> Option<&i32> {
///         match key {
///             "x" => Some(&self.x),
///             "y" => Some(&self.y),
///             _ => None,
///         }
///     }
/// }
///
/// let point = Point { x: 1, y: 2 };
/// assert_eq!(point.property("y"), Some(&2));
/// assert_eq!(point.property("z"), None);
/// ```
pub trait Property<K: ?Sized> {
    /// The type of the looked-up value.
    type Output;

    /// Returns the value stored under `key`, if any.
    fn property(&self, key: &K) -> Option<&Self::Output>;
}

impl<V, S: BuildHasher> Property<str> for HashMap<String, V, S> {
    type Output = V;

    #[inline]
    fn property(&self, key: &str) -> Option<&V> {
        self.get(key)
    }
}

impl<V> Property<str> for BTreeMap<String, V> {
    type Output = V;

    #[inline]
    fn property(&self, key: &str) -> Option<&V> {
        self.get(key)
    }
}

impl<T> Property<usize> for [T] {
    type Output = T;

    #[inline]
    fn property(&self, key: &usize) -> Option<&T> {
        self.get(*key)
    }
}

impl<T> Property<usize> for Vec<T> {
    type Output = T;

    #[inline]
    fn property(&self, key: &usize) -> Option<&T> {
        self.get(*key)
    }
}

impl<T, const N: usize> Property<usize> for [T; N] {
    type Output = T;

    #[inline]
    fn property(&self, key: &usize) -> Option<&T> {
        self.get(*key)
    }
}

impl<K: ?Sized, P: Property<K> + ?Sized> Property<K> for &P {
    type Output = P::Output;

    #[inline]
    fn property(&self, key: &K) -> Option<&Self::Output> {
        (**self).property(key)
    }
}
