//! # sundry
//!
//! Extension traits and call-gating combinators for Rust's built-in slices,
//! maps, strings and integers.
//!
//! ## Overview
//!
//! The crate is a collection of small, independent helpers that the standard
//! library does not provide. It includes:
//!
//! - **Combinators**: [`once`](combinator::once), [`after`](combinator::after),
//!   [`partial`](combinator::partial) and [`bind`](combinator::bind), which wrap
//!   a function to change how it is invoked
//! - **Sequence transforms**: windowed partitioning, runs, grouping, counting
//!   and order-preserving set algebra over slices
//! - **Mapping transforms**: set algebra, picking and grouping over
//!   `HashMap`, `BTreeMap` and `IndexMap`
//! - **Text and numbers**: regex match predicates, string helpers, integer
//!   digits, gcd/lcm and iteration helpers
//!
//! ## Feature Flags
//!
//! - `combinator`: `Once`, `After`, `Partial`, `Bind`
//! - `sync`: thread-safe `SyncOnce` / `SyncAfter`
//! - `sequence`: [`SequenceExt`](sequence::SequenceExt) for slices
//! - `mapping`: [`MappingExt`](mapping::MappingExt) for maps
//! - `text`: [`TextExt`](text::TextExt) and regex predicates
//! - `number`: [`IntegerExt`](number::IntegerExt) and [`FloatExt`](number::FloatExt)
//! - `random`: uniform random numbers, ranges, shuffles and samples
//! - `serde`: `Serialize`/`Deserialize` for the crate's data types
//! - `fxhash` / `ahash`: faster hashers for grouping results
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use sundry::prelude::*;
//!
//! let windows = [1, 2, 3, 4, 5].partition(2, None);
//! assert_eq!(windows, vec![vec![1, 2], vec![3, 4]]);
//!
//! let greet = once(|name: &str| format!("hello, {name}"));
//! assert_eq!(greet.call(("world",)), Some("hello, world".to_string()));
//! assert_eq!(greet.call(("again",)), None);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the extension traits and combinator constructors of every
/// enabled feature.
///
/// # Usage
///
/// ```rust
/// use sundry::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::Error;

    #[cfg(any(feature = "sequence", feature = "mapping"))]
    pub use crate::hash::{Counts, DefaultHashBuilder, Groups};

    #[cfg(feature = "combinator")]
    pub use crate::combinator::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "mapping")]
    pub use crate::mapping::*;

    #[cfg(feature = "text")]
    pub use crate::text::*;

    #[cfg(feature = "number")]
    pub use crate::number::*;

    #[cfg(feature = "random")]
    pub use crate::random::*;
}

pub mod error;

#[cfg(any(feature = "sequence", feature = "mapping"))]
pub mod hash;

#[cfg(feature = "combinator")]
pub mod combinator;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "mapping")]
pub mod mapping;

#[cfg(feature = "text")]
pub mod text;

#[cfg(feature = "number")]
pub mod number;

#[cfg(feature = "random")]
pub mod random;

pub use error::{Error, Result};
