#![cfg(feature = "collection")]
//! Unit tests for zip, intersection and difference.

use collars::collection::{difference, intersection, zip};
use rstest::rstest;

#[derive(Debug, Clone, PartialEq)]
enum Cell {
    Letter(char),
    Number(i32),
}

// =============================================================================
// zip
// =============================================================================

#[rstest]
fn test_zip_pads_shorter_sequences_with_none() {
    let letters = ["a", "b", "c"];
    let digits = ["1", "2"];
    assert_eq!(
        zip(&[&letters[..], &digits[..]]),
        vec![
            vec![Some("a"), Some("1")],
            vec![Some("b"), Some("2")],
            vec![Some("c"), None],
        ]
    );
}

#[rstest]
fn test_zip_letters_with_numbers_through_shared_element_type() {
    let letters = [Cell::Letter('a'), Cell::Letter('b'), Cell::Letter('c')];
    let numbers = [Cell::Number(1), Cell::Number(2)];
    assert_eq!(
        zip(&[&letters[..], &numbers[..]]),
        vec![
            vec![Some(Cell::Letter('a')), Some(Cell::Number(1))],
            vec![Some(Cell::Letter('b')), Some(Cell::Number(2))],
            vec![Some(Cell::Letter('c')), None],
        ]
    );
}

#[rstest]
fn test_zip_length_is_longest_input() {
    let zipped = zip(&[vec![1], vec![1, 2, 3, 4], vec![1, 2]]);
    assert_eq!(zipped.len(), 4);
    assert_eq!(zipped[3], vec![None, Some(4), None]);
}

#[rstest]
fn test_zip_three_sequences_keeps_argument_order() {
    let zipped = zip(&[vec![1, 2], vec![3, 4], vec![5, 6]]);
    assert_eq!(
        zipped,
        vec![
            vec![Some(1), Some(3), Some(5)],
            vec![Some(2), Some(4), Some(6)],
        ]
    );
}

#[rstest]
fn test_zip_of_nothing_is_empty() {
    let sequences: [Vec<i32>; 0] = [];
    assert!(zip(&sequences).is_empty());
}

#[rstest]
fn test_zip_of_empty_sequences_is_empty() {
    let sequences: [Vec<i32>; 2] = [vec![], vec![]];
    assert!(zip(&sequences).is_empty());
}

// =============================================================================
// intersection
// =============================================================================

#[rstest]
fn test_intersection_of_two() {
    assert_eq!(intersection(&[vec![1, 2, 3], vec![2, 3, 4]]), vec![2, 3]);
}

#[rstest]
fn test_intersection_of_three() {
    let result = intersection(&[
        vec!["moe", "curly", "larry"],
        vec!["moe", "groucho", "larry"],
        vec!["larry", "moe"],
    ]);
    assert_eq!(result, vec!["moe", "larry"]);
}

#[rstest]
fn test_intersection_keeps_duplicates_of_first() {
    assert_eq!(intersection(&[vec![2, 1, 2], vec![2]]), vec![2, 2]);
}

#[rstest]
fn test_intersection_of_single_sequence_is_itself() {
    assert_eq!(intersection(&[vec![3, 1, 3]]), vec![3, 1, 3]);
}

#[rstest]
fn test_intersection_of_nothing_is_empty() {
    let sequences: [Vec<i32>; 0] = [];
    assert!(intersection(&sequences).is_empty());
}

#[rstest]
fn test_intersection_with_disjoint_is_empty() {
    assert!(intersection(&[vec![1, 2], vec![3, 4]]).is_empty());
}

// =============================================================================
// difference
// =============================================================================

#[rstest]
fn test_difference_of_two() {
    assert_eq!(difference(&[vec![1, 2, 3], vec![2, 3, 4]]), vec![1]);
}

#[rstest]
fn test_difference_against_several() {
    let result = difference(&[vec![1, 2, 3, 4, 5], vec![5, 2, 10], vec![4]]);
    assert_eq!(result, vec![1, 3]);
}

#[rstest]
fn test_difference_keeps_duplicates_of_first() {
    assert_eq!(difference(&[vec![1, 1, 2], vec![2]]), vec![1, 1]);
}

#[rstest]
fn test_difference_of_single_sequence_is_itself() {
    assert_eq!(difference(&[vec![4, 4]]), vec![4, 4]);
}

#[rstest]
fn test_difference_of_nothing_is_empty() {
    let sequences: [&[i32]; 0] = [];
    assert!(difference(&sequences).is_empty());
}

#[rstest]
fn test_combination_does_not_modify_inputs() {
    let left = vec![1, 2, 3];
    let right = vec![3];
    let _ = difference(&[&left[..], &right[..]]);
    let _ = intersection(&[&left[..], &right[..]]);
    assert_eq!(left, vec![1, 2, 3]);
    assert_eq!(right, vec![3]);
}
