//! Hasher selection and result map aliases for grouping operations.
//!
//! Grouping results are [`IndexMap`]s so that keys iterate in the order they
//! were first seen. The hasher defaults to the standard library's SipHash
//! based [`RandomState`](std::hash::RandomState); the `fxhash` and `ahash`
//! features swap in a faster, non-HashDoS-resistant hasher.
//!
//! `fxhash` wins when both features are enabled.

use indexmap::IndexMap;

/// The hasher used by [`Groups`], [`Counts`] and the set algebra helpers.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// The hasher used by [`Groups`], [`Counts`] and the set algebra helpers.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// The hasher used by [`Groups`], [`Counts`] and the set algebra helpers.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::hash::RandomState;

/// Elements bucketed by key, keys in first-seen order.
pub type Groups<K, V> = IndexMap<K, Vec<V>, DefaultHashBuilder>;

/// Occurrence counts per key, keys in first-seen order.
pub type Counts<K> = IndexMap<K, usize, DefaultHashBuilder>;

/// Set of borrowed elements used for membership tests.
#[cfg(feature = "sequence")]
pub(crate) type LookupSet<'a, T> = std::collections::HashSet<&'a T, DefaultHashBuilder>;
