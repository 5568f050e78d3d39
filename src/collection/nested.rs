//! Arbitrarily nested sequences.

/// A value or a sequence of further nested values.
///
/// `Nested<T>` describes the input of [`flatten`](super::flatten): a sequence
/// whose elements may themselves be sequences, to any depth. The
/// [`nested!`](crate::nested) macro builds one from a bracketed literal.
///
/// With the `serde` feature a `Nested<T>` deserializes from plain nested
/// arrays, with every non-array element read as a `T`.
///
/// # Examples
///
/// ```rust
/// use collars::collection::Nested;
/// use collars::nested;
///
/// let built = nested![1, [2, 3]];
/// assert_eq!(
///     built,
///     vec![
///         Nested::Value(1),
///         Nested::Sequence(vec![Nested::Value(2), Nested::Value(3)]),
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Nested<T> {
    /// A nested sequence.
    Sequence(Vec<Nested<T>>),
    /// A plain element.
    Value(T),
}

impl<T> Nested<T> {
    /// Wraps a plain element.
    #[inline]
    pub const fn value(value: T) -> Self {
        Self::Value(value)
    }

    /// Wraps a sequence of nested elements.
    #[inline]
    pub const fn sequence(elements: Vec<Self>) -> Self {
        Self::Sequence(elements)
    }

    /// Returns `true` if this is a nested sequence.
    #[inline]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }
}

/// Builds a `Vec<Nested<T>>` from a bracketed literal.
///
/// Each element is either a bracketed group, which becomes a
/// [`Nested::Sequence`], or a single token tree (a literal, an identifier or
/// a parenthesized expression), which becomes a [`Nested::Value`].
/// Negative numbers must be parenthesized: `nested![(-1), 2]`.
///
/// # Examples
///
/// ```rust
/// use collars::collection::flatten;
/// use collars::nested;
///
/// let input = nested![1, [2, [3, 4]], 5];
/// assert_eq!(flatten(&input), vec![1, 2, 3, 4, 5]);
///
/// let offset = 10;
/// let input = nested![(-1), [offset, (offset + 1)]];
/// assert_eq!(flatten(&input), vec![-1, 10, 11]);
/// ```
#[macro_export]
macro_rules! nested {
    (@element [$($inner:tt),* $(,)?]) => {
        $crate::collection::Nested::Sequence(::std::vec![$($crate::nested!(@element $inner)),*])
    };
    (@element $value:expr) => {
        $crate::collection::Nested::Value($value)
    };
    ($($element:tt),* $(,)?) => {
        ::std::vec![$($crate::nested!(@element $element)),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_macro_builds_empty_inner_sequence() {
        let built: Vec<Nested<i32>> = crate::nested![[], 1];
        assert_eq!(built, vec![Nested::sequence(vec![]), Nested::value(1)]);
    }

    #[rstest]
    fn test_is_sequence() {
        assert!(Nested::<i32>::sequence(vec![]).is_sequence());
        assert!(!Nested::value(0).is_sequence());
    }
}
