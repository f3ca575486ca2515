//! Call-count gating.
//!
//! [`After`] swallows the first `n` calls and forwards every call after that.

use std::cell::{Cell, RefCell};
use std::fmt;

use super::apply::{Apply, ApplyMut, ApplyOnce};

/// A wrapper that starts invoking its function after `n` suppressed calls.
///
/// Calls `1..=n` return `None` without invoking the function; call `n + 1`
/// and every later call invoke it and return `Some(output)`. With `n == 0`
/// the very first call goes through.
///
/// # Thread Safety
///
/// The remaining-call counter is a plain [`Cell`], so `After` is not [`Sync`].
/// Use [`SyncAfter`](crate::combinator::sync::SyncAfter) (feature `sync`) to
/// share a gate between threads.
///
/// # Examples
///
/// ```
/// use sundry::combinator::after;
///
/// let ready = after(2, |name: &str| format!("{name} is ready"));
///
/// assert_eq!(ready.call(("first",)), None);
/// assert_eq!(ready.call(("second",)), None);
/// assert_eq!(ready.call(("third",)), Some("third is ready".to_string()));
/// assert_eq!(ready.call(("fourth",)), Some("fourth is ready".to_string()));
/// ```
pub struct After<F> {
    remaining: Cell<usize>,
    function: RefCell<F>,
}

/// Wraps `function` so that it only runs from call `n + 1` onwards.
///
/// Shorthand for [`After::new`].
#[inline]
pub const fn after<F>(n: usize, function: F) -> After<F> {
    After::new(n, function)
}

impl<F> After<F> {
    /// Creates a gate that suppresses the first `n` calls to `function`.
    #[inline]
    pub const fn new(n: usize, function: F) -> Self {
        Self {
            remaining: Cell::new(n),
            function: RefCell::new(function),
        }
    }

    /// Counts the call and invokes the wrapped function once the count is
    /// exhausted.
    ///
    /// # Panics
    ///
    /// Panics if the wrapped function calls this same gate again while it is
    /// still running, since the function is borrowed mutably for the call.
    pub fn call<Args>(&self, arguments: Args) -> Option<F::Output>
    where
        F: ApplyMut<Args>,
    {
        let remaining = self.remaining.get();
        if remaining > 0 {
            self.remaining.set(remaining - 1);
            tracing::trace!(remaining = remaining - 1, "after: call suppressed");
            return None;
        }
        Some(ApplyMut::apply_mut(&mut *self.function.borrow_mut(), arguments))
    }

    /// Number of calls still to be suppressed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.remaining.get()
    }

    /// Returns `true` when the next call will invoke the wrapped function.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.remaining.get() == 0
    }

    /// Unwraps the gate, returning the function.
    #[inline]
    pub fn into_inner(self) -> F {
        self.function.into_inner()
    }
}

impl<F> fmt::Debug for After<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("After")
            .field("remaining", &self.remaining.get())
            .finish()
    }
}

impl<F, Args> ApplyOnce<Args> for After<F>
where
    F: ApplyMut<Args>,
{
    type Output = Option<F::Output>;

    #[inline]
    fn apply_once(self, arguments: Args) -> Self::Output {
        self.call(arguments)
    }
}

impl<F, Args> ApplyMut<Args> for After<F>
where
    F: ApplyMut<Args>,
{
    #[inline]
    fn apply_mut(&mut self, arguments: Args) -> Self::Output {
        self.call(arguments)
    }
}

impl<F, Args> Apply<Args> for After<F>
where
    F: ApplyMut<Args>,
{
    #[inline]
    fn apply(&self, arguments: Args) -> Self::Output {
        self.call(arguments)
    }
}

static_assertions::assert_not_impl_any!(After<fn()>: Sync);
