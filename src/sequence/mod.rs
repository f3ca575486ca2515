//! Sequence transforms for slices.
//!
//! [`SequenceExt`] adds partitioning, grouping and order-preserving set
//! algebra to every slice, and therefore to `Vec`, arrays and anything else
//! that dereferences to `[T]`.
//!
//! # Overview
//!
//! | Operation                              | Result |
//! |----------------------------------------|--------|
//! | [`partition`](SequenceExt::partition)           | full windows of `n` |
//! | [`partition_padded`](SequenceExt::partition_padded) | full windows, then one padded partial window |
//! | [`partition_all`](SequenceExt::partition_all)   | every window, partial ones included |
//! | [`partition_by`](SequenceExt::partition_by)     | maximal runs of equal keys |
//! | [`group_by`](SequenceExt::group_by)             | elements per key, first-seen key order |
//! | [`count_by`](SequenceExt::count_by)             | occurrences per key, first-seen key order |
//! | [`unique`](SequenceExt::unique)                 | first occurrence of each element |
//! | [`difference`](SequenceExt::difference) / [`union`](SequenceExt::union) / [`intersection`](SequenceExt::intersection) | set algebra, left-operand order |
//! | [`difference_all`](SequenceExt::difference_all) / [`union_all`](SequenceExt::union_all) / [`intersection_all`](SequenceExt::intersection_all) | the same, folded over several operands |
//!
//! Every operation returns new, owned containers; the input is never
//! modified.
//!
//! # Examples
//!
//! ```
//! use sundry::sequence::SequenceExt;
//!
//! let runs = [1, 1, 2, 2, 2, 3].partition_by(|value| *value);
//! assert_eq!(runs, vec![vec![1, 1], vec![2, 2, 2], vec![3]]);
//!
//! let parity = [1, 2, 3, 4].group_by(|value| if value % 2 == 0 { "even" } else { "odd" });
//! assert_eq!(parity.keys().copied().collect::<Vec<_>>(), vec!["odd", "even"]);
//! assert_eq!(parity["even"], vec![2, 4]);
//!
//! assert_eq!([1, 2, 3].difference(&[2, 3]), vec![1]);
//! assert_eq!([1, 2].intersection(&[2, 3]), vec![2]);
//! assert_eq!([1, 2].union(&[2, 3]), vec![1, 2, 3]);
//! ```

mod group;
mod nested;
mod partition;
mod set;

use std::hash::Hash;

pub use nested::{Leaves, Nested};

use crate::error::{Error, Result};
use crate::hash::{Counts, Groups};

/// Partitioning, grouping and set algebra for slices.
///
/// Implemented for `[T]`; call it on a `Vec`, an array or a slice.
pub trait SequenceExt<T> {
    /// Splits the sequence into windows of exactly `size` elements.
    ///
    /// Windows start every `step` elements (`None` means `size`, giving
    /// non-overlapping windows; `Some(0)` is treated as 1). Partitioning stops
    /// as soon as a full window can no longer be formed, so a trailing
    /// remainder is dropped.
    ///
    /// For `size >= 1` and a sequence of length `L >= size` the result holds
    /// `(L - size) / step + 1` windows.
    ///
    /// # Edge Cases
    ///
    /// - `size == 0` yields no windows. The size is not clamped, so there is
    ///   no run of `len + 1` empty windows either.
    /// - `size` greater than the length yields a single **empty** window,
    ///   not an empty result. Callers relying on "no windows" must check the
    ///   length first.
    ///
    /// # Examples
    ///
    /// ```
    /// use sundry::sequence::SequenceExt;
    ///
    /// let values = [1, 2, 3, 4, 5];
    /// assert_eq!(values.partition(2, None), vec![vec![1, 2], vec![3, 4]]);
    /// assert_eq!(values.partition(3, Some(1)), vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]);
    /// assert_eq!(values.partition(6, None), vec![Vec::<i32>::new()]);
    /// ```
    fn partition(&self, size: usize, step: Option<usize>) -> Vec<Vec<T>>
    where
        T: Clone;

    /// Like [`partition`](Self::partition), but the first window that cannot
    /// be filled from the sequence is kept and topped up with elements taken
    /// from the front of `pad`.
    ///
    /// Partitioning ends with that window. If `pad` is too short the window
    /// stays short.
    ///
    /// # Edge Cases
    ///
    /// - `size == 0` yields no windows, whatever `pad` holds. The size is not
    ///   clamped into a series of empty windows.
    /// - An empty sequence yields no windows.
    ///
    /// # Examples
    ///
    /// ```
    /// use sundry::sequence::SequenceExt;
    ///
    /// let values = [1, 2, 3, 4, 5];
    /// assert_eq!(
    ///     values.partition_padded(2, None, &[0, 0]),
    ///     vec![vec![1, 2], vec![3, 4], vec![5, 0]]
    /// );
    /// assert_eq!(
    ///     values.partition_padded(4, None, &[]),
    ///     vec![vec![1, 2, 3, 4], vec![5]]
    /// );
    /// ```
    fn partition_padded(&self, size: usize, step: Option<usize>, pad: &[T]) -> Vec<Vec<T>>
    where
        T: Clone;

    /// Splits the sequence into windows of at most `size` elements, starting
    /// a window every `step` elements for as long as elements remain.
    ///
    /// # Edge Cases
    ///
    /// - `size == 0` yields no windows, not one empty window per position.
    ///
    /// # Examples
    ///
    /// ```
    /// use sundry::sequence::SequenceExt;
    ///
    /// let values = [1, 2, 3, 4, 5];
    /// assert_eq!(values.partition_all(2, None), vec![vec![1, 2], vec![3, 4], vec![5]]);
    /// assert_eq!(
    ///     values.partition_all(3, Some(2)),
    ///     vec![vec![1, 2, 3], vec![3, 4, 5], vec![5]]
    /// );
    /// ```
    fn partition_all(&self, size: usize, step: Option<usize>) -> Vec<Vec<T>>
    where
        T: Clone;

    /// Splits the sequence into maximal runs of consecutive elements whose
    /// keys compare equal. A new run starts whenever the key changes.
    fn partition_by<K, F>(&self, key: F) -> Vec<Vec<T>>
    where
        T: Clone,
        K: PartialEq,
        F: FnMut(&T) -> K;

    /// Buckets elements by key.
    ///
    /// Each bucket keeps its elements in sequence order, and keys iterate in
    /// the order they first occurred.
    fn group_by<K, F>(&self, key: F) -> Groups<K, T>
    where
        T: Clone,
        K: Hash + Eq,
        F: FnMut(&T) -> K;

    /// Counts elements per key, keys in first-occurrence order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sundry::sequence::SequenceExt;
    ///
    /// let counts = ["a", "bb", "cc", "d"].count_by(|word| word.len());
    /// assert_eq!(counts.into_iter().collect::<Vec<_>>(), vec![(1, 2), (2, 2)]);
    /// ```
    fn count_by<K, F>(&self, key: F) -> Counts<K>
    where
        K: Hash + Eq,
        F: FnMut(&T) -> K;

    /// Removes repeated elements, keeping each first occurrence in place.
    fn unique(&self) -> Vec<T>
    where
        T: Clone + Eq + Hash;

    /// Elements of `self` that do not occur in `other`, in `self` order.
    ///
    /// Repeated elements of `self` are all kept.
    fn difference(&self, other: &[T]) -> Vec<T>
    where
        T: Clone + Eq + Hash;

    /// All of `self`, followed by the elements of `other` that are not in
    /// `self` (each added once, in `other` order).
    fn union(&self, other: &[T]) -> Vec<T>
    where
        T: Clone + Eq + Hash;

    /// Elements of `self` that also occur in `other`, each kept once, in
    /// `self` order.
    fn intersection(&self, other: &[T]) -> Vec<T>
    where
        T: Clone + Eq + Hash;

    /// [`difference`](Self::difference) against several operands at once:
    /// elements of `self` that occur in none of `others`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sundry::sequence::SequenceExt;
    ///
    /// let remaining = [1, 2, 3, 4, 5].difference_all(&[&[2], &[4, 9]]);
    /// assert_eq!(remaining, vec![1, 3, 5]);
    /// ```
    fn difference_all(&self, others: &[&[T]]) -> Vec<T>
    where
        T: Clone + Eq + Hash;

    /// [`union`](Self::union) with several operands, merged left to right.
    fn union_all(&self, others: &[&[T]]) -> Vec<T>
    where
        T: Clone + Eq + Hash;

    /// Elements of `self` that occur in every one of `others`, each kept
    /// once, in `self` order.
    ///
    /// With no operands the result is [`unique`](Self::unique).
    ///
    /// # Examples
    ///
    /// ```
    /// use sundry::sequence::SequenceExt;
    ///
    /// let shared = [3, 1, 2, 3].intersection_all(&[&[1, 2, 3], &[3, 2]]);
    /// assert_eq!(shared, vec![3, 2]);
    /// ```
    fn intersection_all(&self, others: &[&[T]]) -> Vec<T>
    where
        T: Clone + Eq + Hash;

    /// Returns `true` when every element of `items` occurs in `self`.
    fn contains_all(&self, items: &[T]) -> bool
    where
        T: PartialEq;

    /// Position of the first element equal to `item`.
    fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq;

    /// Position of the last element equal to `item`.
    fn last_index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq;

    /// Folds the sequence from the last element to the first.
    ///
    /// # Examples
    ///
    /// ```
    /// use sundry::sequence::SequenceExt;
    ///
    /// let spelled = ['a', 'b', 'c'].reduce_right(String::new(), |mut text, letter| {
    ///     text.push(*letter);
    ///     text
    /// });
    /// assert_eq!(spelled, "cba");
    /// ```
    fn reduce_right<U, F>(&self, initial: U, combine: F) -> U
    where
        F: FnMut(U, &T) -> U;

    /// Converts every element to `U`, reporting success or failure per
    /// element.
    ///
    /// # Examples
    ///
    /// ```
    /// use sundry::sequence::SequenceExt;
    ///
    /// let converted = [1_i64, -1, 300].try_cast::<u8>();
    /// assert!(converted[0].is_ok());
    /// assert!(converted[1].is_err());
    /// assert!(converted[2].is_err());
    /// ```
    fn try_cast<U>(&self) -> Vec<Result<U>>
    where
        T: Clone,
        U: TryFrom<T>;
}

impl<T> SequenceExt<T> for [T] {
    #[inline]
    fn partition(&self, size: usize, step: Option<usize>) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        partition::partition(self, size, step)
    }

    #[inline]
    fn partition_padded(&self, size: usize, step: Option<usize>, pad: &[T]) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        partition::partition_padded(self, size, step, pad)
    }

    #[inline]
    fn partition_all(&self, size: usize, step: Option<usize>) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        partition::partition_all(self, size, step)
    }

    #[inline]
    fn partition_by<K, F>(&self, key: F) -> Vec<Vec<T>>
    where
        T: Clone,
        K: PartialEq,
        F: FnMut(&T) -> K,
    {
        partition::partition_by(self, key)
    }

    #[inline]
    fn group_by<K, F>(&self, key: F) -> Groups<K, T>
    where
        T: Clone,
        K: Hash + Eq,
        F: FnMut(&T) -> K,
    {
        group::group_by(self, key)
    }

    #[inline]
    fn count_by<K, F>(&self, key: F) -> Counts<K>
    where
        K: Hash + Eq,
        F: FnMut(&T) -> K,
    {
        group::count_by(self, key)
    }

    #[inline]
    fn unique(&self) -> Vec<T>
    where
        T: Clone + Eq + Hash,
    {
        set::unique(self)
    }

    #[inline]
    fn difference(&self, other: &[T]) -> Vec<T>
    where
        T: Clone + Eq + Hash,
    {
        set::difference(self, other)
    }

    #[inline]
    fn union(&self, other: &[T]) -> Vec<T>
    where
        T: Clone + Eq + Hash,
    {
        set::union(self, other)
    }

    #[inline]
    fn intersection(&self, other: &[T]) -> Vec<T>
    where
        T: Clone + Eq + Hash,
    {
        set::intersection(self, other)
    }

    #[inline]
    fn difference_all(&self, others: &[&[T]]) -> Vec<T>
    where
        T: Clone + Eq + Hash,
    {
        set::difference_all(self, others)
    }

    #[inline]
    fn union_all(&self, others: &[&[T]]) -> Vec<T>
    where
        T: Clone + Eq + Hash,
    {
        set::union_all(self, others)
    }

    #[inline]
    fn intersection_all(&self, others: &[&[T]]) -> Vec<T>
    where
        T: Clone + Eq + Hash,
    {
        set::intersection_all(self, others)
    }

    fn contains_all(&self, items: &[T]) -> bool
    where
        T: PartialEq,
    {
        items.iter().all(|item| self.contains(item))
    }

    fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|element| element == item)
    }

    fn last_index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().rposition(|element| element == item)
    }

    fn reduce_right<U, F>(&self, initial: U, combine: F) -> U
    where
        F: FnMut(U, &T) -> U,
    {
        self.iter().rev().fold(initial, combine)
    }

    fn try_cast<U>(&self) -> Vec<Result<U>>
    where
        T: Clone,
        U: TryFrom<T>,
    {
        self.iter()
            .cloned()
            .enumerate()
            .map(|(index, element)| {
                U::try_from(element).map_err(|_| Error::conversion::<U>(index))
            })
            .collect()
    }
}
