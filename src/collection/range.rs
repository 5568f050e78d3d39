//! Integer sequence generation.

/// Returns the sequence `[0, 1, ..., upper - 1]`.
///
/// A non-positive `upper` yields an empty sequence.
///
/// # Examples
///
/// ```rust
/// use collars::collection::range;
///
/// assert_eq!(range(5), vec![0, 1, 2, 3, 4]);
/// assert!(range(0).is_empty());
/// assert!(range(-3).is_empty());
/// ```
pub fn range(upper: i64) -> Vec<i64> {
    (0..upper).collect()
}
