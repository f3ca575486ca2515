//! Call-once gating.
//!
//! [`Once`] lets the wrapped function run on the first call only. Later calls
//! return `None` without touching the function. The result of the first call
//! is handed back to the caller, not cached.

use std::cell::RefCell;
use std::fmt;

use super::apply::{Apply, ApplyMut, ApplyOnce};

/// A wrapper that invokes its function on the first call only.
///
/// Because the function runs at most once, `Once` accepts any [`FnOnce`].
///
/// # Thread Safety
///
/// The has-run flag is a plain [`RefCell`], so `Once` is not [`Sync`]: it
/// cannot be invoked concurrently from several threads. Wrap it in a mutex,
/// or use [`SyncOnce`](crate::combinator::sync::SyncOnce) with the `sync`
/// feature, when it has to be shared.
///
/// # Examples
///
/// ```
/// use sundry::combinator::once;
///
/// let initialize = once(|| "initialized");
///
/// assert_eq!(initialize.call(()), Some("initialized"));
/// assert_eq!(initialize.call(()), None);
/// assert!(initialize.is_spent());
/// ```
///
/// Any owned resource can be moved into the wrapped closure:
///
/// ```
/// use sundry::combinator::once;
///
/// let message = String::from("bye");
/// let farewell = once(move |suffix: &str| message + suffix);
///
/// assert_eq!(farewell.call(("!",)), Some("bye!".to_string()));
/// assert_eq!(farewell.call(("?",)), None);
/// ```
pub struct Once<F> {
    function: RefCell<Option<F>>,
}

/// Wraps `function` so that it runs on the first call only.
///
/// Shorthand for [`Once::new`].
#[inline]
pub const fn once<F>(function: F) -> Once<F> {
    Once::new(function)
}

impl<F> Once<F> {
    /// Creates a new wrapper around `function`.
    #[inline]
    pub const fn new(function: F) -> Self {
        Self {
            function: RefCell::new(Some(function)),
        }
    }

    /// Invokes the wrapped function if it has not run yet.
    ///
    /// # Returns
    ///
    /// `Some(output)` on the first call, `None` on every later call.
    ///
    /// A call made from inside the wrapped function itself observes the
    /// wrapper as already spent and returns `None`.
    pub fn call<Args>(&self, arguments: Args) -> Option<F::Output>
    where
        F: ApplyOnce<Args>,
    {
        let Some(function) = self.function.borrow_mut().take() else {
            tracing::trace!("once: wrapper already spent, call suppressed");
            return None;
        };
        Some(function.apply_once(arguments))
    }

    /// Returns `true` once the wrapped function has been invoked.
    #[inline]
    pub fn is_spent(&self) -> bool {
        self.function.borrow().is_none()
    }

    /// Returns the wrapped function if it has not been invoked.
    #[inline]
    pub fn into_inner(self) -> Option<F> {
        self.function.into_inner()
    }
}

impl<F> fmt::Debug for Once<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Once")
            .field("spent", &self.is_spent())
            .finish()
    }
}

impl<F, Args> ApplyOnce<Args> for Once<F>
where
    F: ApplyOnce<Args>,
{
    type Output = Option<F::Output>;

    #[inline]
    fn apply_once(self, arguments: Args) -> Self::Output {
        self.call(arguments)
    }
}

impl<F, Args> ApplyMut<Args> for Once<F>
where
    F: ApplyOnce<Args>,
{
    #[inline]
    fn apply_mut(&mut self, arguments: Args) -> Self::Output {
        self.call(arguments)
    }
}

impl<F, Args> Apply<Args> for Once<F>
where
    F: ApplyOnce<Args>,
{
    #[inline]
    fn apply(&self, arguments: Args) -> Self::Output {
        self.call(arguments)
    }
}

static_assertions::assert_not_impl_any!(Once<fn()>: Sync);
