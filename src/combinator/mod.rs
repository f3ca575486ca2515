//! Call-gating and fixed-argument combinators.
//!
//! This module provides wrappers that change how a caller-supplied function
//! is invoked without changing what it computes.
//!
//! # Overview
//!
//! - [`once`]: run the function on the first call only
//! - [`after`]: suppress the first `n` calls, then run on every call
//! - [`partial`] / [`partial!`]: fix the leading arguments
//! - [`bind`] / [`bind!`]: fix every argument, producing a thunk
//!
//! With the `sync` feature, [`sync::SyncOnce`] and [`sync::SyncAfter`] offer
//! the same gating for functions shared between threads.
//!
//! # Arguments as Tuples
//!
//! Arguments are always passed as one tuple: `gate.call(())` for a nullary
//! function, `gate.call((x,))` for a unary one, `gate.call((x, y))` for a
//! binary one. The [`Apply`] family of traits spreads the tuple into the call
//! and is implemented for closures and functions of up to six arguments.
//!
//! # Examples
//!
//! ## Run once
//!
//! ```
//! use sundry::combinator::once;
//!
//! let setup = once(|| 42);
//! assert_eq!(setup.call(()), Some(42));
//! assert_eq!(setup.call(()), None);
//! ```
//!
//! ## Run after two calls
//!
//! ```
//! use sundry::combinator::after;
//!
//! let third_time_lucky = after(2, |attempt: u32| attempt);
//! assert_eq!(third_time_lucky.call((1,)), None);
//! assert_eq!(third_time_lucky.call((2,)), None);
//! assert_eq!(third_time_lucky.call((3,)), Some(3));
//! ```
//!
//! ## Partial application and binding
//!
//! ```
//! use sundry::combinator::{bind, partial};
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//!
//! let add_five = partial(add, (5,));
//! assert_eq!(add_five.call((3,)), 8);
//!
//! let eight = bind(add, (3, 5));
//! assert_eq!(eight.call(), 8);
//! ```
//!
//! ## Nesting
//!
//! The wrappers implement [`Apply`] themselves, so they compose:
//!
//! ```
//! use sundry::combinator::{after, once, partial};
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//!
//! let add_five_once = once(partial(add, (5,)));
//! assert_eq!(add_five_once.call((1,)), Some(6));
//! assert_eq!(add_five_once.call((1,)), None);
//!
//! let add_five_later = after(1, partial(add, (5,)));
//! assert_eq!(add_five_later.call((1,)), None);
//! assert_eq!(add_five_later.call((2,)), Some(7));
//! ```
//!
//! # Thread Safety
//!
//! [`Once`] and [`After`] keep their state in `Cell`/`RefCell` and are
//! therefore not `Sync`; the compiler rejects sharing them across threads.
//! [`Partial`] and [`Bind`] hold no mutable state.

mod after;
mod apply;
mod fixed;
mod macros;
mod once;
#[cfg(feature = "sync")]
pub mod sync;

pub use after::{After, after};
pub use apply::{Apply, ApplyMut, ApplyOnce};
pub use fixed::{Bind, Partial, bind, partial};
pub use once::{Once, once};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::bind;
pub use crate::partial;
