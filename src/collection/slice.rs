//! Leading and trailing slices of a sequence.

/// A sequence argument that may be absent.
///
/// Implemented for slices, arrays and `Vec`s by reference, and for
/// `Option<&[T]>` where `None` stands for a missing sequence.
pub trait MaybeSequence<'a, T> {
    /// Returns the borrowed elements, or `None` for a missing sequence.
    fn into_sequence(self) -> Option<&'a [T]>;
}

impl<'a, T> MaybeSequence<'a, T> for &'a [T] {
    #[inline]
    fn into_sequence(self) -> Option<&'a [T]> {
        Some(self)
    }
}

impl<'a, T> MaybeSequence<'a, T> for &'a Vec<T> {
    #[inline]
    fn into_sequence(self) -> Option<&'a [T]> {
        Some(self.as_slice())
    }
}

impl<'a, T, const N: usize> MaybeSequence<'a, T> for &'a [T; N] {
    #[inline]
    fn into_sequence(self) -> Option<&'a [T]> {
        Some(self.as_slice())
    }
}

impl<'a, T> MaybeSequence<'a, T> for Option<&'a [T]> {
    #[inline]
    fn into_sequence(self) -> Option<&'a [T]> {
        self
    }
}

/// Returns the first `count` elements of `sequence`.
///
/// - A `None` sequence yields `None`, as opposed to an empty result.
/// - Without a count, yields a one-element `Vec` holding the first element
///   (empty if the sequence is empty).
/// - A count of zero yields an empty `Vec`.
/// - A count past the end is clamped to the whole sequence.
///
/// # Examples
///
/// ```rust
/// use collars::collection::first;
///
/// let values = vec![1, 2, 3, 4];
/// assert_eq!(first(&values, Some(2)), Some(vec![1, 2]));
/// assert_eq!(first(&values[..], None), Some(vec![1]));
/// assert_eq!(first(&values[..], Some(0)), Some(vec![]));
/// assert_eq!(first(&values[..], Some(10)), Some(vec![1, 2, 3, 4]));
/// assert_eq!(first(None::<&[i32]>, Some(2)), None);
/// ```
pub fn first<'a, T, S>(sequence: S, count: Option<usize>) -> Option<Vec<T>>
where
    T: Clone + 'a,
    S: MaybeSequence<'a, T>,
{
    let elements = sequence.into_sequence()?;
    let count = count.unwrap_or(1).min(elements.len());
    Some(elements[..count].to_vec())
}

/// Returns the last `count` elements of `sequence`, in their original order.
///
/// Follows the same rules as [`first`], taken from the end of the sequence.
///
/// # Examples
///
/// ```rust
/// use collars::collection::last;
///
/// let values = [1, 2, 3, 4];
/// assert_eq!(last(&values, Some(2)), Some(vec![3, 4]));
/// assert_eq!(last(&values[..], None), Some(vec![4]));
/// assert_eq!(last(&values[..], Some(0)), Some(vec![]));
/// assert_eq!(last(None::<&[i32]>, None), None);
/// ```
pub fn last<'a, T, S>(sequence: S, count: Option<usize>) -> Option<Vec<T>>
where
    T: Clone + 'a,
    S: MaybeSequence<'a, T>,
{
    let elements = sequence.into_sequence()?;
    let count = count.unwrap_or(1).min(elements.len());
    Some(elements[elements.len() - count..].to_vec())
}
