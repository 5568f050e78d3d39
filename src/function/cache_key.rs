//! Cache keys derived from argument values.

/// Arguments that can be turned into a [`Memoized`](super::Memoized) cache key.
///
/// The key is the textual form of the arguments: primitives render as
/// themselves, tuples and sequences join their elements' keys with `,`, and
/// `None` renders as the empty string.
///
/// Different arguments can share a key. `("a,b",)` and `("a", "b")` both
/// become `a,b`, so a memoized function sees them as the same call. Use
/// arguments whose textual forms are unambiguous.
///
/// # Examples
///
/// ```rust
/// use collars::function::CacheKey;
///
/// assert_eq!(42_u32.cache_key(), "42");
/// assert_eq!((1, "two", 3.5).cache_key(), "1,two,3.5");
/// assert_eq!(vec![1, 2, 3].cache_key(), "1,2,3");
/// assert_eq!(None::<i32>.cache_key(), "");
/// ```
pub trait CacheKey {
    /// Returns the textual cache key for these arguments.
    fn cache_key(&self) -> String;
}

macro_rules! impl_cache_key_for_display {
    ($($primitive:ty),* $(,)?) => {
        $(
            impl CacheKey for $primitive {
                #[inline]
                fn cache_key(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_cache_key_for_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, str,
    String
);

impl CacheKey for () {
    #[inline]
    fn cache_key(&self) -> String {
        String::new()
    }
}

impl<T: CacheKey + ?Sized> CacheKey for &T {
    #[inline]
    fn cache_key(&self) -> String {
        (**self).cache_key()
    }
}

impl<T: CacheKey> CacheKey for Option<T> {
    #[inline]
    fn cache_key(&self) -> String {
        self.as_ref().map(CacheKey::cache_key).unwrap_or_default()
    }
}

impl<T: CacheKey> CacheKey for [T] {
    fn cache_key(&self) -> String {
        self.iter()
            .map(CacheKey::cache_key)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl<T: CacheKey> CacheKey for Vec<T> {
    #[inline]
    fn cache_key(&self) -> String {
        self.as_slice().cache_key()
    }
}

macro_rules! impl_cache_key_for_tuple {
    ($($name:ident),+) => {
        impl<$($name: CacheKey),+> CacheKey for ($($name,)+) {
            #[allow(non_snake_case)]
            fn cache_key(&self) -> String {
                let ($($name,)+) = self;
                [$($name.cache_key()),+].join(",")
            }
        }
    };
}

impl_cache_key_for_tuple!(A);
impl_cache_key_for_tuple!(A, B);
impl_cache_key_for_tuple!(A, B, C);
impl_cache_key_for_tuple!(A, B, C, D);
impl_cache_key_for_tuple!(A, B, C, D, E);
impl_cache_key_for_tuple!(A, B, C, D, E, G);
