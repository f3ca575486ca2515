//! Unit tests for `SequenceExt`.
//!
//! Partitioning, grouping, set algebra and the smaller lookup helpers, plus
//! `Nested` flattening.

#![cfg(feature = "sequence")]

use rstest::rstest;
use sundry::Error;
use sundry::sequence::{Nested, SequenceExt};

// =============================================================================
// partition
// =============================================================================

#[rstest]
#[case(&[1, 2, 3, 4, 5], 2, None, vec![vec![1, 2], vec![3, 4]])]
#[case(&[1, 2, 3, 4, 5], 3, Some(1), vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]])]
#[case(&[1, 2, 3, 4, 5], 2, Some(3), vec![vec![1, 2], vec![4, 5]])]
#[case(&[1, 2, 3, 4, 5], 5, None, vec![vec![1, 2, 3, 4, 5]])]
#[case(&[1, 2, 3, 4, 5], 1, None, vec![vec![1], vec![2], vec![3], vec![4], vec![5]])]
fn test_partition_yields_full_windows(
    #[case] values: &[i32],
    #[case] size: usize,
    #[case] step: Option<usize>,
    #[case] expected: Vec<Vec<i32>>,
) {
    assert_eq!(values.partition(size, step), expected);
}

#[rstest]
fn test_partition_larger_than_sequence_yields_one_empty_window() {
    let windows = [1, 2, 3].partition(4, None);

    assert_eq!(windows, vec![Vec::<i32>::new()]);
}

#[rstest]
fn test_partition_of_empty_sequence_yields_one_empty_window() {
    let empty: [u8; 0] = [];

    assert_eq!(empty.partition(1, None), vec![Vec::<u8>::new()]);
}

#[rstest]
fn test_partition_zero_size_yields_nothing() {
    assert!([1, 2, 3].partition(0, None).is_empty());
    assert!([1, 2, 3].partition_all(0, Some(1)).is_empty());
    assert!([1, 2, 3].partition_padded(0, None, &[0]).is_empty());
}

#[rstest]
#[case(&[1, 2, 3, 4], None)]
#[case(&[1, 2, 3, 4], Some(0))]
#[case(&[1, 2, 3, 4], Some(2))]
#[case(&[], None)]
fn test_zero_size_never_yields_empty_windows(#[case] values: &[i32], #[case] step: Option<usize>) {
    assert_eq!(values.partition(0, step), Vec::<Vec<i32>>::new());
    assert_eq!(values.partition_padded(0, step, &[9, 9]), Vec::<Vec<i32>>::new());
    assert_eq!(values.partition_all(0, step), Vec::<Vec<i32>>::new());
}

#[rstest]
fn test_partition_does_not_modify_input() {
    let values = vec![String::from("a"), String::from("b"), String::from("c")];
    let windows = values.partition(2, Some(1));

    assert_eq!(values, vec!["a", "b", "c"]);
    assert_eq!(windows.len(), 2);
}

// =============================================================================
// partition_padded
// =============================================================================

#[rstest]
#[case(&[1, 2, 3, 4, 5], 2, None, &[0, 0], vec![vec![1, 2], vec![3, 4], vec![5, 0]])]
#[case(&[1, 2, 3, 4, 5], 3, None, &[7, 8, 9], vec![vec![1, 2, 3], vec![4, 5, 7]])]
#[case(&[1, 2, 3, 4, 5], 4, None, &[], vec![vec![1, 2, 3, 4], vec![5]])]
#[case(&[1, 2, 3, 4, 5], 3, Some(2), &[0], vec![vec![1, 2, 3], vec![3, 4, 5], vec![5, 0]])]
#[case(&[1, 2], 5, None, &[9], vec![vec![1, 2, 9]])]
fn test_partition_padded_tops_up_first_partial_window(
    #[case] values: &[i32],
    #[case] size: usize,
    #[case] step: Option<usize>,
    #[case] pad: &[i32],
    #[case] expected: Vec<Vec<i32>>,
) {
    assert_eq!(values.partition_padded(size, step, pad), expected);
}

#[rstest]
fn test_partition_padded_stops_after_partial_window() {
    let windows = [1, 2, 3, 4].partition_padded(3, Some(1), &[0, 0]);

    assert_eq!(windows, vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 0]]);
}

#[rstest]
fn test_partition_padded_of_empty_sequence_is_empty() {
    let empty: [i32; 0] = [];

    assert!(empty.partition_padded(2, None, &[1, 1]).is_empty());
}

// =============================================================================
// partition_all
// =============================================================================

#[rstest]
#[case(&[1, 2, 3, 4, 5], 2, None, vec![vec![1, 2], vec![3, 4], vec![5]])]
#[case(&[1, 2, 3, 4, 5], 3, Some(2), vec![vec![1, 2, 3], vec![3, 4, 5], vec![5]])]
#[case(&[1, 2, 3], 2, Some(1), vec![vec![1, 2], vec![2, 3], vec![3]])]
#[case(&[1, 2], 5, None, vec![vec![1, 2]])]
#[case(&[], 3, None, vec![])]
fn test_partition_all_keeps_trailing_windows(
    #[case] values: &[i32],
    #[case] size: usize,
    #[case] step: Option<usize>,
    #[case] expected: Vec<Vec<i32>>,
) {
    assert_eq!(values.partition_all(size, step), expected);
}

// =============================================================================
// partition_by
// =============================================================================

#[rstest]
fn test_partition_by_identity_splits_runs() {
    let runs = [1, 1, 2, 2, 2, 3].partition_by(|value| *value);

    assert_eq!(runs, vec![vec![1, 1], vec![2, 2, 2], vec![3]]);
}

#[rstest]
fn test_partition_by_starts_new_run_when_key_returns() {
    let runs = [1, 3, 2, 4, 5].partition_by(|value| value % 2 == 0);

    assert_eq!(runs, vec![vec![1, 3], vec![2, 4], vec![5]]);
}

#[rstest]
fn test_partition_by_of_empty_sequence_is_empty() {
    let empty: Vec<&str> = Vec::new();

    assert!(empty.partition_by(|word| word.len()).is_empty());
}

// =============================================================================
// group_by / count_by
// =============================================================================

#[rstest]
fn test_group_by_parity_keeps_first_seen_key_order() {
    let groups = [1, 2, 3, 4].group_by(|value| if value % 2 == 0 { "even" } else { "odd" });

    let keys: Vec<_> = groups.keys().copied().collect();
    assert_eq!(keys, vec!["odd", "even"]);
    assert_eq!(groups["odd"], vec![1, 3]);
    assert_eq!(groups["even"], vec![2, 4]);
}

#[rstest]
fn test_group_by_keeps_element_order_within_groups() {
    let words = ["pear", "fig", "plum", "kiwi", "apple"];
    let groups = words.group_by(|word| word.len());

    assert_eq!(groups[&4], vec!["pear", "plum", "kiwi"]);
    assert_eq!(groups[&3], vec!["fig"]);
    assert_eq!(groups[&5], vec!["apple"]);
    assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![4, 3, 5]);
}

#[rstest]
fn test_count_by_word_length() {
    let counts = ["a", "bb", "cc", "d"].count_by(|word| word.len());

    assert_eq!(counts.len(), 2);
    assert_eq!(counts[&1], 2);
    assert_eq!(counts[&2], 2);
    assert_eq!(counts.get_index(0), Some((&1, &2)));
}

#[rstest]
fn test_grouping_empty_sequence_is_empty() {
    let empty: [i32; 0] = [];

    assert!(empty.group_by(|value| *value).is_empty());
    assert!(empty.count_by(|value| *value).is_empty());
}

// =============================================================================
// Set algebra
// =============================================================================

#[rstest]
fn test_set_algebra_examples() {
    assert_eq!([1, 2, 3].difference(&[2, 3]), vec![1]);
    assert_eq!([1, 2].intersection(&[2, 3]), vec![2]);
    assert_eq!([1, 2].union(&[2, 3]), vec![1, 2, 3]);
}

#[rstest]
fn test_difference_keeps_left_duplicates() {
    assert_eq!([1, 2, 1, 3, 1].difference(&[3]), vec![1, 2, 1, 1]);
}

#[rstest]
fn test_union_keeps_left_as_is_and_adds_new_right_once() {
    assert_eq!([3, 1, 3].union(&[4, 1, 4, 5]), vec![3, 1, 3, 4, 5]);
}

#[rstest]
fn test_intersection_keeps_left_order_once() {
    assert_eq!([5, 1, 5, 2, 9].intersection(&[2, 5, 7]), vec![5, 2]);
}

#[rstest]
fn test_set_algebra_with_empty_operands() {
    let empty: [i32; 0] = [];

    assert_eq!([1, 2].difference(&empty), vec![1, 2]);
    assert_eq!(empty.difference(&[1]), Vec::<i32>::new());
    assert_eq!(empty.union(&[1, 1]), vec![1]);
    assert!([1, 2].intersection(&empty).is_empty());
}

#[rstest]
#[case(&[&[2][..], &[4, 9]], vec![1, 3, 5])]
#[case(&[&[1, 2][..], &[3, 4, 5]], vec![])]
#[case(&[], vec![1, 2, 3, 4, 5])]
fn test_difference_all_removes_every_operand(
    #[case] others: &[&[i32]],
    #[case] expected: Vec<i32>,
) {
    assert_eq!([1, 2, 3, 4, 5].difference_all(others), expected);
}

#[rstest]
fn test_union_all_appends_each_operand_in_turn() {
    let merged = ["a", "b"].union_all(&[&["c", "a"], &["d", "c", "b", "e"]]);

    assert_eq!(merged, vec!["a", "b", "c", "d", "e"]);
}

#[rstest]
#[case(&[&[1, 2, 3][..], &[3, 2]], vec![3, 2])]
#[case(&[&[1, 2, 3][..], &[]], vec![])]
#[case(&[], vec![3, 1, 2])]
fn test_intersection_all_requires_every_operand(
    #[case] others: &[&[i32]],
    #[case] expected: Vec<i32>,
) {
    assert_eq!([3, 1, 2, 3].intersection_all(others), expected);
}

#[rstest]
fn test_unique_keeps_first_occurrence_order() {
    assert_eq!(["b", "a", "b", "c", "a"].unique(), vec!["b", "a", "c"]);
}

// =============================================================================
// Lookup helpers
// =============================================================================

#[rstest]
fn test_contains_all() {
    assert!([1, 2, 3].contains_all(&[3, 1]));
    assert!([1, 2, 3].contains_all(&[]));
    assert!(![1, 2, 3].contains_all(&[4]));
}

#[rstest]
fn test_index_of_and_last_index_of() {
    let values = ['a', 'b', 'a', 'c'];

    assert_eq!(values.index_of(&'a'), Some(0));
    assert_eq!(values.last_index_of(&'a'), Some(2));
    assert_eq!(values.index_of(&'z'), None);
    assert_eq!(values.last_index_of(&'z'), None);
}

#[rstest]
fn test_reduce_right_folds_from_the_back() {
    let digits = [1, 2, 3].reduce_right(0, |accumulator, digit| accumulator * 10 + digit);

    assert_eq!(digits, 321);
}

// =============================================================================
// Conversion and nesting
// =============================================================================

#[rstest]
fn test_try_cast_reports_each_element() {
    let converted = [10_i32, -1, 255, 256].try_cast::<u8>();

    assert_eq!(converted.len(), 4);
    assert_eq!(converted[0].as_ref().ok(), Some(&10));
    assert!(matches!(converted[1], Err(Error::Conversion { index: 1, .. })));
    assert_eq!(converted[2].as_ref().ok(), Some(&255));
    assert!(matches!(converted[3], Err(Error::Conversion { index: 3, .. })));
}

#[rstest]
fn test_nested_flatten_depth_first() {
    let tree = Nested::list([
        Nested::list([Nested::item("a"), Nested::item("b")]),
        Nested::item("c"),
        Nested::list([Nested::list([Nested::item("d")]), Nested::list([])]),
    ]);

    assert_eq!(tree.flatten(), vec!["a", "b", "c", "d"]);
    assert_eq!(tree.leaves().count(), 4);
    assert_eq!(tree.depth(), 3);
}

#[rstest]
fn test_nested_single_item() {
    let leaf = Nested::item(5);

    assert_eq!(leaf.flatten(), vec![5]);
    assert_eq!(leaf.depth(), 0);
}

#[rstest]
fn test_nested_try_flatten_indexes_failures_in_flat_order() {
    let tree = Nested::list([
        Nested::item(1_i64),
        Nested::list([Nested::item(-2), Nested::item(3)]),
        Nested::item(i64::MAX),
    ]);

    let converted = tree.try_flatten::<u32>();
    let failed: Vec<usize> = converted
        .iter()
        .filter_map(|result| match result {
            Err(Error::Conversion { index, .. }) => Some(*index),
            _ => None,
        })
        .collect();

    assert_eq!(failed, vec![1, 3]);
    assert_eq!(converted[2].as_ref().ok(), Some(&3));
}
