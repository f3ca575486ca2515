//! Mapping transforms for key-value maps.
//!
//! [`MappingExt`] adds set algebra, key picking, value mapping and grouping
//! to [`HashMap`], [`BTreeMap`] and [`IndexMap`].
//!
//! # Semantics
//!
//! Two entries are "the same" when their keys are equal **and** their values
//! compare equal:
//!
//! - [`difference`](MappingExt::difference) drops the entries of `self` that
//!   also appear, with an equal value, in `other`
//! - [`intersection`](MappingExt::intersection) keeps only those entries
//! - [`union`](MappingExt::union) merges `other` into `self`; on a key
//!   collision the value from `other` wins
//!
//! Each has an `_all` form taking a slice of maps: `difference_all` drops an
//! entry matched by any of them, `intersection_all` keeps an entry matched
//! by all of them, and `union_all` merges them in order.
//!
//! Results of the set algebra and of [`pick`](MappingExt::pick) have the same
//! map type as `self`. Grouping results are [`IndexMap`]s, ordered by the
//! first occurrence of each group key while iterating `self`.
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//! use sundry::mapping::MappingExt;
//!
//! let stock = BTreeMap::from([("apple", 3), ("banana", 0), ("cherry", 7)]);
//! let sold_out = BTreeMap::from([("banana", 0)]);
//!
//! let available = stock.difference(&sold_out);
//! assert_eq!(available, BTreeMap::from([("apple", 3), ("cherry", 7)]));
//!
//! let restocked = stock.union(&BTreeMap::from([("banana", 12)]));
//! assert_eq!(restocked["banana"], 12);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;

use crate::hash::{Counts, DefaultHashBuilder, Groups};

/// Set algebra and grouping for key-value maps.
///
/// Implementors supply [`entries`](Self::entries) and
/// [`lookup`](Self::lookup); every other operation is provided.
pub trait MappingExt<K, V> {
    /// Iterates the entries in the map's own order.
    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a;

    /// Looks up the value stored under `key`.
    fn lookup(&self, key: &K) -> Option<&V>;

    /// Entries of `self` that are not present, with an equal value, in
    /// `other`.
    fn difference<M>(&self, other: &M) -> Self
    where
        Self: Sized + FromIterator<(K, V)>,
        M: MappingExt<K, V> + ?Sized,
        K: Clone,
        V: Clone + PartialEq,
    {
        self.entries()
            .filter(|(key, value)| other.lookup(key) != Some(*value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Entries of `self` that are present, with an equal value, in `other`.
    fn intersection<M>(&self, other: &M) -> Self
    where
        Self: Sized + FromIterator<(K, V)>,
        M: MappingExt<K, V> + ?Sized,
        K: Clone,
        V: Clone + PartialEq,
    {
        self.entries()
            .filter(|(key, value)| other.lookup(key) == Some(*value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// All keys of `self` and `other`; values from `other` win on collision.
    ///
    /// For ordered maps the keys of `self` come first, then the new keys of
    /// `other` in `other` order.
    fn union<M>(&self, other: &M) -> Self
    where
        Self: Sized + FromIterator<(K, V)>,
        M: MappingExt<K, V> + ?Sized,
        K: Clone,
        V: Clone,
    {
        let overridden = self
            .entries()
            .map(|(key, value)| (key.clone(), other.lookup(key).unwrap_or(value).clone()));
        let added = other
            .entries()
            .filter(|(key, _)| self.lookup(key).is_none())
            .map(|(key, value)| (key.clone(), value.clone()));
        overridden.chain(added).collect()
    }

    /// Entries of `self` that no map in `others` holds with an equal value.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use sundry::mapping::MappingExt;
    ///
    /// let stock = BTreeMap::from([("apple", 3), ("banana", 0), ("cherry", 7)]);
    /// let sold_out = BTreeMap::from([("banana", 0)]);
    /// let reserved = BTreeMap::from([("cherry", 7), ("apple", 1)]);
    ///
    /// assert_eq!(stock.difference_all(&[&sold_out, &reserved]), BTreeMap::from([("apple", 3)]));
    /// ```
    fn difference_all<M>(&self, others: &[&M]) -> Self
    where
        Self: Sized + FromIterator<(K, V)>,
        M: MappingExt<K, V> + ?Sized,
        K: Clone,
        V: Clone + PartialEq,
    {
        self.entries()
            .filter(|(key, value)| others.iter().all(|other| other.lookup(key) != Some(*value)))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Entries of `self` that every map in `others` holds with an equal
    /// value. With no `others` this is a copy of `self`.
    fn intersection_all<M>(&self, others: &[&M]) -> Self
    where
        Self: Sized + FromIterator<(K, V)>,
        M: MappingExt<K, V> + ?Sized,
        K: Clone,
        V: Clone + PartialEq,
    {
        self.entries()
            .filter(|(key, value)| others.iter().all(|other| other.lookup(key) == Some(*value)))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Merges every map in `others` into `self`, left to right; on a key
    /// collision the value from the last map holding the key wins.
    ///
    /// Relies on later entries overwriting earlier ones when collected, as
    /// [`HashMap`], [`BTreeMap`] and [`IndexMap`] all do. An [`IndexMap`]
    /// keeps each key where it first appeared.
    fn union_all<M>(&self, others: &[&M]) -> Self
    where
        Self: Sized + FromIterator<(K, V)>,
        M: MappingExt<K, V> + ?Sized,
        K: Clone,
        V: Clone,
    {
        let mut merged: Vec<(K, V)> = self
            .entries()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        for other in others {
            merged.extend(other.entries().map(|(key, value)| (key.clone(), value.clone())));
        }
        merged.into_iter().collect()
    }

    /// Entries whose key is one of `keys`.
    fn pick(&self, keys: &[K]) -> Self
    where
        Self: Sized + FromIterator<(K, V)>,
        K: Clone + PartialEq,
        V: Clone,
    {
        self.entries()
            .filter(|(key, _)| keys.contains(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Maps every value through `transform`, keeping keys and their order.
    fn map_values<U, F>(&self, mut transform: F) -> IndexMap<K, U, DefaultHashBuilder>
    where
        K: Clone + Hash + Eq,
        F: FnMut(&K, &V) -> U,
    {
        self.entries()
            .map(|(key, value)| (key.clone(), transform(key, value)))
            .collect()
    }

    /// Buckets the values by a key derived from each entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexmap::IndexMap;
    /// use sundry::mapping::MappingExt;
    ///
    /// let ages = IndexMap::<_, _>::from_iter([("ann", 31), ("bob", 17), ("cy", 45)]);
    /// let by_majority = ages.group_by(|_, age| *age >= 18);
    ///
    /// assert_eq!(by_majority[&true], vec![31, 45]);
    /// assert_eq!(by_majority[&false], vec![17]);
    /// ```
    fn group_by<G, F>(&self, mut key: F) -> Groups<G, V>
    where
        V: Clone,
        G: Hash + Eq,
        F: FnMut(&K, &V) -> G,
    {
        let mut groups = Groups::default();
        for (entry_key, value) in self.entries() {
            groups
                .entry(key(entry_key, value))
                .or_insert_with(Vec::new)
                .push(value.clone());
        }
        groups
    }

    /// Counts entries per derived key.
    fn count_by<G, F>(&self, mut key: F) -> Counts<G>
    where
        G: Hash + Eq,
        F: FnMut(&K, &V) -> G,
    {
        let mut counts = Counts::default();
        for (entry_key, value) in self.entries() {
            *counts.entry(key(entry_key, value)).or_insert(0) += 1;
        }
        counts
    }
}

impl<K, V, S> MappingExt<K, V> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    #[inline]
    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.iter()
    }

    #[inline]
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V> MappingExt<K, V> for BTreeMap<K, V>
where
    K: Ord,
{
    #[inline]
    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.iter()
    }

    #[inline]
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V, S> MappingExt<K, V> for IndexMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    #[inline]
    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.iter()
    }

    #[inline]
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}
