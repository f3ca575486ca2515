//! Bucketing by derived key.

use std::hash::Hash;

use crate::hash::{Counts, Groups};

pub(super) fn group_by<T, K, F>(sequence: &[T], mut key_of: F) -> Groups<K, T>
where
    T: Clone,
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    let mut groups = Groups::default();
    for element in sequence {
        groups
            .entry(key_of(element))
            .or_insert_with(Vec::new)
            .push(element.clone());
    }
    groups
}

pub(super) fn count_by<T, K, F>(sequence: &[T], mut key_of: F) -> Counts<K>
where
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    let mut counts = Counts::default();
    for element in sequence {
        *counts.entry(key_of(element)).or_insert(0) += 1;
    }
    counts
}
