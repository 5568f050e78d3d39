//! Operations combining several sequences.
//!
//! Each operation takes its sequences as a slice, so any number of them can
//! be combined. Vectors, arrays and slices are all accepted.

use super::{any, contains, every, map, pluck, select};

/// Groups the elements of every sequence by position.
///
/// The result has as many rows as the longest input sequence. Row `i` holds
/// the `i`-th element of each input in argument order, with `None` where a
/// shorter sequence has run out.
///
/// # Examples
///
/// ```rust
/// use collars::collection::zip;
///
/// let zipped = zip(&[vec![1, 2, 3], vec![10, 20]]);
/// assert_eq!(
///     zipped,
///     vec![
///         vec![Some(1), Some(10)],
///         vec![Some(2), Some(20)],
///         vec![Some(3), None],
///     ]
/// );
/// ```
pub fn zip<T, S>(sequences: &[S]) -> Vec<Vec<Option<T>>>
where
    T: Clone,
    S: AsRef<[T]>,
{
    let sequences: Vec<&[T]> = map(sequences, |sequence| sequence.as_ref());
    let length = map(&sequences, |sequence| sequence.len())
        .into_iter()
        .max()
        .unwrap_or(0);
    (0..length)
        .map(|position| pluck(&sequences, &position))
        .collect()
}

/// Returns the elements of the first sequence present in all the others.
///
/// Order and duplicates of the first sequence are preserved. An empty
/// argument list yields an empty result.
///
/// # Examples
///
/// ```rust
/// use collars::collection::intersection;
///
/// assert_eq!(intersection(&[vec![1, 2, 3], vec![2, 3, 4]]), vec![2, 3]);
/// assert_eq!(
///     intersection(&[vec![1, 1, 2], vec![1, 2], vec![1]]),
///     vec![1, 1]
/// );
/// ```
pub fn intersection<T, S>(sequences: &[S]) -> Vec<T>
where
    T: PartialEq + Clone,
    S: AsRef<[T]>,
{
    let sequences: Vec<&[T]> = map(sequences, |sequence| sequence.as_ref());
    let Some(head) = sequences.first().copied() else {
        return Vec::new();
    };
    select(head, |value, _, _| {
        every(&sequences, |sequence| contains(*sequence, value))
    })
}

/// Returns the elements of the first sequence present in none of the others.
///
/// Order and duplicates of the first sequence are preserved. An empty
/// argument list yields an empty result.
///
/// # Examples
///
/// ```rust
/// use collars::collection::difference;
///
/// assert_eq!(difference(&[vec![1, 2, 3], vec![2, 3, 4]]), vec![1]);
/// assert_eq!(difference(&[vec![1, 2, 3, 4], vec![2], vec![4]]), vec![1, 3]);
/// ```
pub fn difference<T, S>(sequences: &[S]) -> Vec<T>
where
    T: PartialEq + Clone,
    S: AsRef<[T]>,
{
    let sequences: Vec<&[T]> = map(sequences, |sequence| sequence.as_ref());
    let Some((head, others)) = sequences.split_first() else {
        return Vec::new();
    };
    select(*head, |value, _, _| {
        !any(others, |sequence| contains(*sequence, value))
    })
}
