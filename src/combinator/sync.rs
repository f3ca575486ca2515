//! Thread-safe call gating.
//!
//! [`SyncOnce`] and [`SyncAfter`] have the same semantics as
//! [`Once`](super::Once) and [`After`](super::After), with their flag and
//! counter guarded by a [`parking_lot::Mutex`] so that a single gate can be
//! shared between threads.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::thread;
//! use sundry::combinator::sync::SyncOnce;
//!
//! let invocations = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&invocations);
//! let gate = Arc::new(SyncOnce::new(move || {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! }));
//!
//! let handles: Vec<_> = (0..8)
//!     .map(|_| {
//!         let gate = Arc::clone(&gate);
//!         thread::spawn(move || gate.call(()).is_some())
//!     })
//!     .collect();
//!
//! let fired = handles
//!     .into_iter()
//!     .map(|handle| handle.join().unwrap())
//!     .filter(|fired| *fired)
//!     .count();
//!
//! assert_eq!(fired, 1);
//! assert_eq!(invocations.load(Ordering::SeqCst), 1);
//! ```

use std::fmt;

use parking_lot::Mutex;

use super::apply::ApplyMut;
use super::apply::ApplyOnce;

/// A thread-safe wrapper that invokes its function on the first call only.
///
/// Exactly one of any number of concurrent callers observes `Some`.
pub struct SyncOnce<F> {
    function: Mutex<Option<F>>,
}

impl<F> SyncOnce<F> {
    /// Creates a new wrapper around `function`.
    #[inline]
    pub fn new(function: F) -> Self {
        Self {
            function: Mutex::new(Some(function)),
        }
    }

    /// Invokes the wrapped function if no caller has done so yet.
    ///
    /// The lock is released before the wrapped function runs, so the function
    /// may itself call the gate (and observe `None`).
    pub fn call<Args>(&self, arguments: Args) -> Option<F::Output>
    where
        F: ApplyOnce<Args>,
    {
        let function = self.function.lock().take()?;
        Some(function.apply_once(arguments))
    }

    /// Returns `true` once the wrapped function has been invoked.
    #[inline]
    pub fn is_spent(&self) -> bool {
        self.function.lock().is_none()
    }
}

impl<F> fmt::Debug for SyncOnce<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SyncOnce")
            .field("spent", &self.is_spent())
            .finish()
    }
}

struct AfterState<F> {
    remaining: usize,
    function: F,
}

/// A thread-safe gate that starts invoking its function after `n` calls.
///
/// Calls are counted in the order they acquire the internal lock. The lock is
/// held while the wrapped function runs, so invocations never overlap.
pub struct SyncAfter<F> {
    state: Mutex<AfterState<F>>,
}

impl<F> SyncAfter<F> {
    /// Creates a gate that suppresses the first `n` calls to `function`.
    #[inline]
    pub fn new(n: usize, function: F) -> Self {
        Self {
            state: Mutex::new(AfterState {
                remaining: n,
                function,
            }),
        }
    }

    /// Counts the call and invokes the wrapped function once the count is
    /// exhausted.
    ///
    /// # Deadlocks
    ///
    /// The wrapped function must not call this same gate: the re-entrant call
    /// waits on the lock forever.
    pub fn call<Args>(&self, arguments: Args) -> Option<F::Output>
    where
        F: ApplyMut<Args>,
    {
        let mut state = self.state.lock();
        if state.remaining > 0 {
            state.remaining -= 1;
            return None;
        }
        Some(state.function.apply_mut(arguments))
    }

    /// Number of calls still to be suppressed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.state.lock().remaining
    }
}

/// Formatting never waits on the lock: while a call holds it, `remaining`
/// shows as `<locked>`.
impl<F> fmt::Debug for SyncAfter<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = formatter.debug_struct("SyncAfter");
        match self.state.try_lock() {
            Some(state) => debug.field("remaining", &state.remaining),
            None => debug.field("remaining", &format_args!("<locked>")),
        };
        debug.finish()
    }
}

static_assertions::assert_impl_all!(SyncOnce<fn()>: Send, Sync);
static_assertions::assert_impl_all!(SyncAfter<fn()>: Send, Sync);
