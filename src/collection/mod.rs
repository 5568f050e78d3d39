//! Collection operations over sequences and keyed collections.
//!
//! Every operation in this module accepts anything convertible into a
//! [`Collection`]: slices, arrays, `Vec`s and `HashMap<String, T>`s.
//! The module is layered on a single traversal primitive:
//!
//! - [`each`]: visits every element or entry
//! - [`fold`] and [`reduce`]: accumulate a single value
//! - Derived operations: [`map`], [`pluck`], [`select`], [`reject`], [`every`],
//!   [`any`], [`any_truthy`], [`contains`], [`uniq`], [`flatten`]
//! - Slicing: [`first`], [`last`]
//! - Combination: [`zip`], [`intersection`], [`difference`]
//! - Ordering: [`sort_by`], [`sort_by_property`], `shuffle`
//! - Merging: [`extend`], [`defaults`]
//! - Generation: [`range`]
//!
//! # Examples
//!
//! ```rust
//! use collars::collection::{each, Key};
//! use std::collections::HashMap;
//!
//! let mut visited = Vec::new();
//! each(&vec!["a", "b"], |value, key, _| visited.push((key.to_string(), *value)));
//! assert_eq!(visited, vec![("0".to_string(), "a"), ("1".to_string(), "b")]);
//!
//! let scores = HashMap::from([("alice".to_string(), 3)]);
//! each(&scores, |value, key, _| {
//!     assert_eq!(key, Key::Name("alice"));
//!     assert_eq!(*value, 3);
//! });
//! ```
//!
//! # Caller responsibility
//!
//! The operations do not validate their inputs beyond what the type system
//! already guarantees. A `None` sequence behaves as an empty one wherever a
//! [`Collection`] is accepted; [`first`] and [`last`] report it as `None`.

mod combine;
mod fold;
mod merge;
mod nested;
mod order;
mod property;
mod range;
mod sequence;
mod slice;
mod truthy;

pub use combine::{difference, intersection, zip};
pub use fold::{fold, reduce};
pub use merge::{defaults, extend};
pub use nested::Nested;
#[cfg(feature = "shuffle")]
pub use order::{shuffle, shuffle_with};
pub use order::{sort_by, sort_by_property};
pub use property::Property;
pub use range::range;
pub use sequence::{any, any_truthy, contains, every, flatten, map, pluck, reject, select, uniq};
pub use slice::{MaybeSequence, first, last};
pub use truthy::Truthy;

use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::iter::Enumerate;
use std::slice::Iter;

/// The position of an element inside a [`Collection`].
///
/// Sequences address their elements by zero-based index, keyed collections
/// by the entry's key.
///
/// # Examples
///
/// ```rust
/// use collars::collection::Key;
///
/// assert_eq!(Key::Index(2).to_string(), "2");
/// assert_eq!(Key::Name("id").to_string(), "id");
/// assert_eq!(Key::Index(2).as_index(), Some(2));
/// assert_eq!(Key::Name("id").as_index(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum Key<'a> {
    /// A position in a sequence.
    Index(usize),
    /// A key in a keyed collection.
    Name(&'a str),
}

impl<'a> Key<'a> {
    /// Returns the index if this key addresses a sequence position.
    #[inline]
    pub const fn as_index(self) -> Option<usize> {
        match self {
            Self::Index(index) => Some(index),
            Self::Name(_) => None,
        }
    }

    /// Returns the name if this key addresses a keyed entry.
    #[inline]
    pub const fn as_name(self) -> Option<&'a str> {
        match self {
            Self::Index(_) => None,
            Self::Name(name) => Some(name),
        }
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(formatter, "{index}"),
            Self::Name(name) => write!(formatter, "{name}"),
        }
    }
}

/// A borrowed view over one of the two supported collection shapes.
///
/// `Collection` is the explicit tagged union every operation dispatches on:
/// an ordered [`Sequence`](Collection::Sequence) or an unordered
/// [`Keyed`](Collection::Keyed) collection. It is `Copy`, so it can be passed
/// to every callback invocation alongside the element.
///
/// # Examples
///
/// ```rust
/// use collars::collection::Collection;
///
/// let values = vec![10, 20, 30];
/// let collection = Collection::from(&values);
/// assert!(collection.is_sequence());
/// assert_eq!(collection.len(), 3);
///
/// let missing: Collection<'_, i32> = Collection::from(None::<&[i32]>);
/// assert!(missing.is_empty());
/// ```
pub enum Collection<'a, T> {
    /// An ordered sequence addressed by position.
    Sequence(&'a [T]),
    /// An unordered mapping from string keys to values.
    Keyed(&'a HashMap<String, T>),
}

impl<'a, T> Collection<'a, T> {
    /// Returns the number of elements or entries.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Self::Sequence(elements) => elements.len(),
            Self::Keyed(entries) => entries.len(),
        }
    }

    /// Returns `true` if the collection has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` for the sequence shape.
    #[inline]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    /// Returns `true` for the keyed shape.
    #[inline]
    pub const fn is_keyed(&self) -> bool {
        matches!(self, Self::Keyed(_))
    }

    /// Looks up the element addressed by `key`.
    ///
    /// A key of the wrong shape (a name for a sequence, an index for a keyed
    /// collection) finds nothing.
    pub fn get(&self, key: Key<'_>) -> Option<&'a T> {
        match (*self, key) {
            (Self::Sequence(elements), Key::Index(index)) => elements.get(index),
            (Self::Keyed(entries), Key::Name(name)) => entries.get(name),
            _ => None,
        }
    }

    /// Returns an iterator over `(key, element)` pairs.
    ///
    /// Sequences are visited in ascending position order; keyed collections in
    /// the map's own enumeration order.
    pub fn entries(&self) -> Entries<'a, T> {
        let inner = match *self {
            Self::Sequence(elements) => EntriesInner::Sequence(elements.iter().enumerate()),
            Self::Keyed(entries) => EntriesInner::Keyed(entries.iter()),
        };
        Entries { inner }
    }

    /// Returns the key of the first element equal to `target`.
    pub fn position(&self, target: &T) -> Option<Key<'a>>
    where
        T: PartialEq,
    {
        self.entries()
            .find(|(_, value)| *value == target)
            .map(|(key, _)| key)
    }
}

impl<T> Clone for Collection<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Collection<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Collection<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequence(elements) => formatter.debug_tuple("Sequence").field(elements).finish(),
            Self::Keyed(entries) => formatter.debug_tuple("Keyed").field(entries).finish(),
        }
    }
}

impl<'a, T> From<&'a [T]> for Collection<'a, T> {
    fn from(elements: &'a [T]) -> Self {
        Self::Sequence(elements)
    }
}

impl<'a, T> From<&'a Vec<T>> for Collection<'a, T> {
    fn from(elements: &'a Vec<T>) -> Self {
        Self::Sequence(elements.as_slice())
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for Collection<'a, T> {
    fn from(elements: &'a [T; N]) -> Self {
        Self::Sequence(elements.as_slice())
    }
}

impl<'a, T> From<&'a HashMap<String, T>> for Collection<'a, T> {
    fn from(entries: &'a HashMap<String, T>) -> Self {
        Self::Keyed(entries)
    }
}

impl<'a, T> From<Option<&'a [T]>> for Collection<'a, T> {
    fn from(elements: Option<&'a [T]>) -> Self {
        Self::Sequence(elements.unwrap_or_default())
    }
}

/// Iterator over the `(key, element)` pairs of a [`Collection`].
///
/// Created by [`Collection::entries`].
pub struct Entries<'a, T> {
    inner: EntriesInner<'a, T>,
}

enum EntriesInner<'a, T> {
    Sequence(Enumerate<Iter<'a, T>>),
    Keyed(hash_map::Iter<'a, String, T>),
}

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = (Key<'a>, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            EntriesInner::Sequence(elements) => elements
                .next()
                .map(|(index, value)| (Key::Index(index), value)),
            EntriesInner::Keyed(entries) => entries
                .next()
                .map(|(name, value)| (Key::Name(name.as_str()), value)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            EntriesInner::Sequence(elements) => elements.size_hint(),
            EntriesInner::Keyed(entries) => entries.size_hint(),
        }
    }
}

impl<T> ExactSizeIterator for Entries<'_, T> {}

/// Invokes `iterator` once per element of `collection`.
///
/// For a sequence the callback receives `(element, Key::Index(position),
/// collection)` in ascending position order. For a keyed collection it
/// receives `(value, Key::Name(key), collection)` once per entry, in the
/// map's enumeration order.
///
/// This and [`fold`] are the only operations that walk a collection, both
/// through [`Collection::entries`]; every other operation in the module is
/// expressed through one of them.
///
/// # Examples
///
/// ```rust
/// use collars::collection::each;
///
/// let mut total = 0;
/// each(&[1, 2, 3], |value, key, collection| {
///     total += value * key.as_index().unwrap_or_default() as i32;
///     assert_eq!(collection.len(), 3);
/// });
/// assert_eq!(total, 8);
/// ```
pub fn each<'a, T, C, F>(collection: C, mut iterator: F)
where
    T: 'a,
    C: Into<Collection<'a, T>>,
    F: FnMut(&'a T, Key<'a>, Collection<'a, T>),
{
    let collection = collection.into();
    for (key, value) in collection.entries() {
        iterator(value, key, collection);
    }
}
