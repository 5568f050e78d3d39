//! Merging keyed collections into a target.
//!
//! Both operations mutate `target` and return it, visiting the sources in
//! argument order.

use std::collections::HashMap;

use super::{each, fold};

/// Copies every entry of every source into `target`, overwriting existing
/// keys. On a collision the later source wins.
///
/// # Examples
///
/// ```rust
/// use collars::collection::extend;
/// use std::collections::HashMap;
///
/// let mut target = HashMap::from([("a".to_string(), 1)]);
/// let second = HashMap::from([("b".to_string(), 2)]);
/// let third = HashMap::from([("a".to_string(), 3)]);
///
/// extend(&mut target, &[&second, &third]);
/// assert_eq!(target, HashMap::from([("a".to_string(), 3), ("b".to_string(), 2)]));
/// ```
pub fn extend<'t, T: Clone>(
    target: &'t mut HashMap<String, T>,
    sources: &[&HashMap<String, T>],
) -> &'t mut HashMap<String, T> {
    fold(sources, target, |target, source, _, _| {
        each(*source, |value, key, _| {
            target.insert(key.to_string(), value.clone());
        });
        target
    })
}

/// Fills in keys missing from `target` with entries from the sources.
///
/// A key already present in `target`, or filled in by an earlier source, is
/// never overwritten.
///
/// # Examples
///
/// ```rust
/// use collars::collection::defaults;
/// use std::collections::HashMap;
///
/// let mut options = HashMap::from([("a".to_string(), 1)]);
/// let fallback = HashMap::from([("a".to_string(), 9), ("b".to_string(), 2)]);
///
/// defaults(&mut options, &[&fallback]);
/// assert_eq!(options, HashMap::from([("a".to_string(), 1), ("b".to_string(), 2)]));
/// ```
pub fn defaults<'t, T: Clone>(
    target: &'t mut HashMap<String, T>,
    sources: &[&HashMap<String, T>],
) -> &'t mut HashMap<String, T> {
    fold(sources, target, |target, source, _, _| {
        each(*source, |value, key, _| {
            target
                .entry(key.to_string())
                .or_insert_with(|| value.clone());
        });
        target
    })
}
