//! Nested sequences and fallible flattening.
//!
//! [`Nested`] models an arbitrarily deep list-of-lists. Flattening into a
//! concrete element type is an explicit conversion that reports, leaf by
//! leaf, whether the conversion succeeded.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A value that is either a single item or a list of nested values.
///
/// With the `serde` feature the representation is untagged, so JSON such as
/// `[1, [2, [3]]]` deserializes directly.
///
/// # Examples
///
/// ```
/// use sundry::sequence::Nested;
///
/// let tree = Nested::list([
///     Nested::item(1),
///     Nested::list([Nested::item(2), Nested::list([Nested::item(3)])]),
/// ]);
///
/// assert_eq!(tree.flatten(), vec![1, 2, 3]);
/// assert_eq!(tree.depth(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum Nested<T> {
    /// A single leaf value.
    Item(T),
    /// A list of nested values.
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Creates a leaf.
    #[inline]
    pub const fn item(value: T) -> Self {
        Self::Item(value)
    }

    /// Creates a list from any iterable of nested values.
    #[inline]
    pub fn list(children: impl IntoIterator<Item = Self>) -> Self {
        Self::List(children.into_iter().collect())
    }

    /// Iterates the leaves depth-first, left to right.
    #[inline]
    pub fn leaves(&self) -> Leaves<'_, T> {
        Leaves { stack: vec![self] }
    }

    /// Nesting depth: 0 for a leaf, 1 for a flat list.
    pub fn depth(&self) -> usize {
        match self {
            Self::Item(_) => 0,
            Self::List(children) => 1 + children.iter().map(Self::depth).max().unwrap_or(0),
        }
    }

    /// Collects the leaves into a flat vector.
    pub fn flatten(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.leaves().cloned().collect()
    }

    /// Converts every leaf to `U`, reporting success or failure per leaf.
    ///
    /// A failed leaf yields [`Error::Conversion`] carrying its position in the
    /// flattened order; the remaining leaves are still converted.
    ///
    /// # Examples
    ///
    /// ```
    /// use sundry::sequence::Nested;
    ///
    /// let tree = Nested::list([Nested::item(7_i32), Nested::list([Nested::item(-1)])]);
    /// let converted = tree.try_flatten::<u8>();
    ///
    /// assert_eq!(converted.len(), 2);
    /// assert_eq!(*converted[0].as_ref().unwrap(), 7_u8);
    /// assert!(converted[1].is_err());
    /// ```
    pub fn try_flatten<U>(&self) -> Vec<Result<U>>
    where
        T: Clone,
        U: TryFrom<T>,
    {
        self.leaves()
            .cloned()
            .enumerate()
            .map(|(index, leaf)| U::try_from(leaf).map_err(|_| Error::conversion::<U>(index)))
            .collect()
    }
}

/// Depth-first iterator over the leaves of a [`Nested`] value.
#[derive(Debug, Clone)]
pub struct Leaves<'a, T> {
    stack: Vec<&'a Nested<T>>,
}

impl<'a, T> Iterator for Leaves<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                Nested::Item(value) => return Some(value),
                Nested::List(children) => self.stack.extend(children.iter().rev()),
            }
        }
        None
    }
}
