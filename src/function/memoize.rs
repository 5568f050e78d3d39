//! A function wrapper that caches results by argument.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use super::CacheKey;

/// A function wrapper that caches each result under its arguments' key.
///
/// On every call the arguments are turned into a textual key with
/// [`CacheKey`]. A cached result for that key is returned as a clone;
/// otherwise the wrapped function is called with the original arguments and
/// its result is cached. Pass several arguments as a tuple.
///
/// The cache lives as long as the wrapper and is never shared with other
/// wrappers. Entries are never evicted.
///
/// # Thread Safety
///
/// This type is NOT thread-safe (it is `!Sync`).
///
/// # Examples
///
/// ```rust
/// use collars::function::memoize;
/// use std::cell::Cell;
///
/// let calls = Cell::new(0);
/// let square = memoize(|value: u64| {
///     calls.set(calls.get() + 1);
///     value * value
/// });
///
/// assert_eq!(square.call(12), 144);
/// assert_eq!(square.call(12), 144);
/// assert_eq!(calls.get(), 1);
///
/// let area = memoize(|(width, height): (u32, u32)| width * height);
/// assert_eq!(area.call((3, 4)), 12);
/// ```
pub struct Memoized<A, R, F> {
    function: F,
    cache: RefCell<HashMap<String, R>>,
    argument: PhantomData<fn(A)>,
}

impl<A, R, F> Memoized<A, R, F>
where
    A: CacheKey,
    R: Clone,
    F: Fn(A) -> R,
{
    /// Wraps `function` with an empty cache.
    #[inline]
    pub fn new(function: F) -> Self {
        Self {
            function,
            cache: RefCell::new(HashMap::new()),
            argument: PhantomData,
        }
    }

    /// Returns the result for `arguments`, calling the function on a cache miss.
    pub fn call(&self, arguments: A) -> R {
        let key = arguments.cache_key();
        if let Some(cached) = self.cache.borrow().get(&key) {
            tracing::trace!(%key, "memoized cache hit");
            return cached.clone();
        }

        tracing::trace!(%key, "memoized cache miss");
        let result = (self.function)(arguments);
        self.cache.borrow_mut().insert(key, result.clone());
        result
    }
}

impl<A, R, F> Memoized<A, R, F> {
    /// Returns the number of cached results.
    #[inline]
    pub fn cached_len(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl<A, R: fmt::Debug, F> fmt::Debug for Memoized<A, R, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoized")
            .field("cache", &*self.cache.borrow())
            .finish_non_exhaustive()
    }
}

static_assertions::assert_not_impl_any!(Memoized<i32, i32, fn(i32) -> i32>: Sync);

/// Wraps `function` so that repeated calls with the same arguments are
/// answered from a cache.
///
/// Shorthand for [`Memoized::new`].
#[inline]
pub fn memoize<A, R, F>(function: F) -> Memoized<A, R, F>
where
    A: CacheKey,
    R: Clone,
    F: Fn(A) -> R,
{
    Memoized::new(function)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_cached_len_counts_distinct_keys() {
        let identity = memoize(|value: i32| value);
        identity.call(1);
        identity.call(2);
        identity.call(1);
        assert_eq!(identity.cached_len(), 2);
    }

    #[rstest]
    fn test_arguments_with_same_text_share_an_entry() {
        let calls = Cell::new(0);
        let joined = memoize(|arguments: Vec<String>| {
            calls.set(calls.get() + 1);
            arguments.len()
        });
        assert_eq!(joined.call(vec!["a,b".to_string()]), 1);
        assert_eq!(joined.call(vec!["a".to_string(), "b".to_string()]), 1);
        assert_eq!(calls.get(), 1);
    }
}
