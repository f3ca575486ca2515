//! Order-preserving set algebra over slices.
//!
//! Every operation walks the left operand in order, so the result keeps its
//! relative ordering. Membership is decided by `Eq` + `Hash`. The `_all`
//! forms fold over any number of right operands; the two-operand forms are
//! the one-operand case of them.

use std::hash::Hash;

use crate::hash::LookupSet;

/// Left elements absent from `other`. Duplicates in the left operand stay.
#[inline]
pub(super) fn difference<T>(sequence: &[T], other: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    difference_all(sequence, &[other])
}

/// Left elements absent from every operand in `others`.
pub(super) fn difference_all<T>(sequence: &[T], others: &[&[T]]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let excluded: LookupSet<'_, T> = others.iter().copied().flatten().collect();
    sequence
        .iter()
        .filter(|element| !excluded.contains(element))
        .cloned()
        .collect()
}

/// The left operand unchanged, then the elements of `other` not seen yet.
#[inline]
pub(super) fn union<T>(sequence: &[T], other: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    union_all(sequence, &[other])
}

/// The left operand unchanged, then each operand's unseen elements in turn.
pub(super) fn union_all<T>(sequence: &[T], others: &[&[T]]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let mut seen: LookupSet<'_, T> = sequence.iter().collect();
    let mut merged = sequence.to_vec();
    for element in others.iter().copied().flatten() {
        if seen.insert(element) {
            merged.push(element.clone());
        }
    }
    merged
}

/// Left elements present in `other`, first occurrence only.
#[inline]
pub(super) fn intersection<T>(sequence: &[T], other: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    intersection_all(sequence, &[other])
}

/// Left elements present in every operand, first occurrence only.
///
/// With no operands every distinct left element qualifies.
pub(super) fn intersection_all<T>(sequence: &[T], others: &[&[T]]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let present: Vec<LookupSet<'_, T>> = others
        .iter()
        .map(|other| other.iter().collect())
        .collect();
    let mut emitted = LookupSet::default();
    sequence
        .iter()
        .filter(|element| {
            present.iter().all(|operand| operand.contains(element)) && emitted.insert(*element)
        })
        .cloned()
        .collect()
}

/// First occurrence of every distinct element.
pub(super) fn unique<T>(sequence: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let mut seen = LookupSet::default();
    sequence
        .iter()
        .filter(|element| seen.insert(*element))
        .cloned()
        .collect()
}
