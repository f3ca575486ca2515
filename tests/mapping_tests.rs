//! Unit tests for `MappingExt` over `HashMap`, `BTreeMap` and `IndexMap`.

#![cfg(feature = "mapping")]

use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use rstest::{fixture, rstest};
use sundry::mapping::MappingExt;

#[fixture]
fn inventory() -> BTreeMap<&'static str, u32> {
    BTreeMap::from([("apple", 3), ("banana", 0), ("cherry", 7)])
}

// =============================================================================
// Set algebra
// =============================================================================

#[rstest]
fn test_difference_drops_entries_equal_in_other(inventory: BTreeMap<&'static str, u32>) {
    let other = BTreeMap::from([("banana", 0), ("cherry", 1)]);

    assert_eq!(
        inventory.difference(&other),
        BTreeMap::from([("apple", 3), ("cherry", 7)])
    );
}

#[rstest]
fn test_intersection_keeps_entries_equal_in_other(inventory: BTreeMap<&'static str, u32>) {
    let other = BTreeMap::from([("banana", 0), ("cherry", 1), ("durian", 2)]);

    assert_eq!(inventory.intersection(&other), BTreeMap::from([("banana", 0)]));
}

#[rstest]
fn test_union_prefers_values_from_other(inventory: BTreeMap<&'static str, u32>) {
    let other = BTreeMap::from([("banana", 12), ("durian", 1)]);

    assert_eq!(
        inventory.union(&other),
        BTreeMap::from([("apple", 3), ("banana", 12), ("cherry", 7), ("durian", 1)])
    );
}

#[rstest]
fn test_union_orders_self_keys_first_for_index_map() {
    let left = IndexMap::<_, _>::from_iter([("z", 1), ("a", 2)]);
    let right = IndexMap::<_, _>::from_iter([("m", 3), ("z", 9)]);

    let merged = left.union(&right);

    assert_eq!(
        merged.into_iter().collect::<Vec<_>>(),
        vec![("z", 9), ("a", 2), ("m", 3)]
    );
}

#[rstest]
fn test_set_algebra_across_map_types() {
    let hashed: HashMap<u8, char> = HashMap::from([(1, 'a'), (2, 'b'), (3, 'c')]);
    let ordered = BTreeMap::from([(2, 'b'), (3, 'x')]);

    let remaining = hashed.difference(&ordered);
    assert_eq!(remaining, HashMap::from([(1, 'a'), (3, 'c')]));

    let shared = hashed.intersection(&ordered);
    assert_eq!(shared, HashMap::from([(2, 'b')]));
}

#[rstest]
fn test_hash_map_union_through_entries_prefers_other() {
    let left: HashMap<u8, char> = HashMap::from([(1, 'a'), (2, 'b')]);
    let right: HashMap<u8, char> = HashMap::from([(2, 'z'), (3, 'c')]);

    let mut merged: Vec<(u8, char)> = left.union(&right).into_iter().collect();
    merged.sort_unstable();

    assert_eq!(merged, vec![(1, 'a'), (2, 'z'), (3, 'c')]);
}

#[rstest]
fn test_entries_borrow_outlives_map_type_parameters() {
    let owned: HashMap<String, Vec<u8>> = HashMap::from([(String::from("k"), vec![1, 2])]);
    let collected: Vec<(&String, &Vec<u8>)> = owned.entries().collect();

    assert_eq!(collected, vec![(&String::from("k"), &vec![1, 2])]);
}

#[rstest]
fn test_set_algebra_with_empty_other(inventory: BTreeMap<&'static str, u32>) {
    let empty = BTreeMap::new();

    assert_eq!(inventory.difference(&empty), inventory);
    assert!(inventory.intersection(&empty).is_empty());
    assert_eq!(inventory.union(&empty), inventory);
}

// =============================================================================
// Set algebra over several maps
// =============================================================================

#[rstest]
fn test_difference_all_drops_entries_matched_by_any(inventory: BTreeMap<&'static str, u32>) {
    let sold_out = BTreeMap::from([("banana", 0)]);
    let reserved = BTreeMap::from([("cherry", 7), ("apple", 1)]);

    assert_eq!(
        inventory.difference_all(&[&sold_out, &reserved]),
        BTreeMap::from([("apple", 3)])
    );
}

#[rstest]
fn test_intersection_all_keeps_entries_matched_by_every(inventory: BTreeMap<&'static str, u32>) {
    let first = BTreeMap::from([("apple", 3), ("banana", 0), ("cherry", 1)]);
    let second = BTreeMap::from([("apple", 3), ("banana", 5)]);

    assert_eq!(
        inventory.intersection_all(&[&first, &second]),
        BTreeMap::from([("apple", 3)])
    );
}

#[rstest]
fn test_union_all_last_map_wins_and_keeps_first_position() {
    let base = IndexMap::<_, _>::from_iter([("x", 1), ("y", 2)]);
    let first = IndexMap::<_, _>::from_iter([("z", 3), ("x", 10)]);
    let second = IndexMap::<_, _>::from_iter([("x", 100), ("w", 4)]);

    let merged = base.union_all(&[&first, &second]);

    assert_eq!(
        merged.into_iter().collect::<Vec<_>>(),
        vec![("x", 100), ("y", 2), ("z", 3), ("w", 4)]
    );
}

#[rstest]
fn test_all_forms_with_no_operands(inventory: BTreeMap<&'static str, u32>) {
    let none: &[&BTreeMap<&'static str, u32>] = &[];

    assert_eq!(inventory.difference_all(none), inventory);
    assert_eq!(inventory.intersection_all(none), inventory);
    assert_eq!(inventory.union_all(none), inventory);
}

#[rstest]
fn test_all_forms_with_one_operand_match_two_operand_forms(inventory: BTreeMap<&'static str, u32>) {
    let other = BTreeMap::from([("banana", 0), ("cherry", 9), ("durian", 2)]);

    assert_eq!(inventory.difference_all(&[&other]), inventory.difference(&other));
    assert_eq!(inventory.intersection_all(&[&other]), inventory.intersection(&other));
    assert_eq!(inventory.union_all(&[&other]), inventory.union(&other));
}

// =============================================================================
// pick / map_values
// =============================================================================

#[rstest]
fn test_pick_keeps_only_listed_keys(inventory: BTreeMap<&'static str, u32>) {
    assert_eq!(
        inventory.pick(&["cherry", "apple", "missing"]),
        BTreeMap::from([("apple", 3), ("cherry", 7)])
    );
    assert!(inventory.pick(&[]).is_empty());
}

#[rstest]
fn test_map_values_keeps_keys_in_map_order(inventory: BTreeMap<&'static str, u32>) {
    let labelled = inventory.map_values(|name, count| format!("{count} x {name}"));

    assert_eq!(
        labelled.values().map(String::as_str).collect::<Vec<_>>(),
        vec!["3 x apple", "0 x banana", "7 x cherry"]
    );
}

// =============================================================================
// group_by / count_by
// =============================================================================

#[rstest]
fn test_group_by_collects_values_in_entry_order(inventory: BTreeMap<&'static str, u32>) {
    let by_availability = inventory.group_by(|_, count| *count > 0);

    assert_eq!(by_availability.keys().copied().collect::<Vec<_>>(), vec![true, false]);
    assert_eq!(by_availability[&true], vec![3, 7]);
    assert_eq!(by_availability[&false], vec![0]);
}

#[rstest]
fn test_count_by_key_initial(inventory: BTreeMap<&'static str, u32>) {
    let counts = inventory.count_by(|name, _| name.len());

    assert_eq!(counts[&5], 1);
    assert_eq!(counts[&6], 2);
}

#[rstest]
fn test_grouping_empty_map_is_empty() {
    let empty: HashMap<String, i32> = HashMap::new();

    assert!(empty.group_by(|key, _| key.clone()).is_empty());
    assert!(empty.count_by(|_, value| *value).is_empty());
}
