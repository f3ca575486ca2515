//! Fixed-argument application: [`Partial`] and [`Bind`].
//!
//! Both wrappers store arguments up front and supply them on every call.
//! Stored arguments are cloned for each call made through `&self` or
//! `&mut self`; a call that consumes the wrapper moves them instead.

use super::apply::{Apply, ApplyMut, ApplyOnce};

/// A function with a prefix of its arguments already supplied.
///
/// Calling a `Partial` with the remaining arguments invokes the wrapped
/// function with the fixed arguments first, followed by the remaining ones,
/// in that order.
///
/// # Supported Argument Counts
///
/// Up to three fixed arguments followed by up to three remaining arguments.
/// The wrapped value may be a closure, a function, or another combinator.
///
/// # Examples
///
/// ```
/// use sundry::combinator::partial;
///
/// fn volume(length: u32, width: u32, height: u32) -> u32 {
///     length * width * height
/// }
///
/// let floor_of_ten_by_two = partial(volume, (10, 2));
/// assert_eq!(floor_of_ten_by_two.call((3,)), 60);
///
/// let greeting = partial(|salutation: &str, name: &str| format!("{salutation}, {name}"), ("Hello",));
/// assert_eq!(greeting.call(("Ada",)), "Hello, Ada");
/// ```
#[derive(Clone, Debug)]
pub struct Partial<F, Fixed> {
    function: F,
    fixed: Fixed,
}

/// Fixes the leading `fixed` arguments of `function`.
///
/// Shorthand for [`Partial::new`]. See also the [`partial!`](crate::partial)
/// macro, which takes the fixed arguments unwrapped.
#[inline]
pub const fn partial<F, Fixed>(function: F, fixed: Fixed) -> Partial<F, Fixed> {
    Partial::new(function, fixed)
}

impl<F, Fixed> Partial<F, Fixed> {
    /// Creates a partial application of `function` to the `fixed` tuple.
    #[inline]
    pub const fn new(function: F, fixed: Fixed) -> Self {
        Self { function, fixed }
    }

    /// Invokes the wrapped function with the fixed arguments followed by
    /// `remaining`.
    #[inline]
    pub fn call<Rest>(&self, remaining: Rest) -> <Self as ApplyOnce<Rest>>::Output
    where
        Self: Apply<Rest>,
    {
        Apply::apply(self, remaining)
    }

    /// The fixed arguments.
    #[inline]
    pub const fn fixed(&self) -> &Fixed {
        &self.fixed
    }
}

macro_rules! impl_apply_for_partial {
    ([$($fixed:ident),*] [$($rest:ident),*]) => {
        impl<Function, $($fixed,)* $($rest,)*> ApplyOnce<($($rest,)*)>
            for Partial<Function, ($($fixed,)*)>
        where
            Function: ApplyOnce<($($fixed,)* $($rest,)*)>,
        {
            type Output = Function::Output;

            #[inline]
            #[allow(non_snake_case)]
            fn apply_once(self, ($($rest,)*): ($($rest,)*)) -> Self::Output {
                let ($($fixed,)*) = self.fixed;
                self.function.apply_once(($($fixed,)* $($rest,)*))
            }
        }

        impl<Function, $($fixed,)* $($rest,)*> ApplyMut<($($rest,)*)>
            for Partial<Function, ($($fixed,)*)>
        where
            Function: ApplyMut<($($fixed,)* $($rest,)*)>,
            $($fixed: Clone,)*
        {
            #[inline]
            #[allow(non_snake_case)]
            fn apply_mut(&mut self, ($($rest,)*): ($($rest,)*)) -> Self::Output {
                let ($($fixed,)*) = self.fixed.clone();
                self.function.apply_mut(($($fixed,)* $($rest,)*))
            }
        }

        impl<Function, $($fixed,)* $($rest,)*> Apply<($($rest,)*)>
            for Partial<Function, ($($fixed,)*)>
        where
            Function: Apply<($($fixed,)* $($rest,)*)>,
            $($fixed: Clone,)*
        {
            #[inline]
            #[allow(non_snake_case)]
            fn apply(&self, ($($rest,)*): ($($rest,)*)) -> Self::Output {
                let ($($fixed,)*) = self.fixed.clone();
                self.function.apply(($($fixed,)* $($rest,)*))
            }
        }
    };
}

macro_rules! impl_apply_for_partial_with_rest {
    ($fixed:tt) => {
        impl_apply_for_partial!($fixed []);
        impl_apply_for_partial!($fixed [R1]);
        impl_apply_for_partial!($fixed [R1, R2]);
        impl_apply_for_partial!($fixed [R1, R2, R3]);
    };
}

impl_apply_for_partial_with_rest!([]);
impl_apply_for_partial_with_rest!([P1]);
impl_apply_for_partial_with_rest!([P1, P2]);
impl_apply_for_partial_with_rest!([P1, P2, P3]);

/// A function with all of its arguments bound, callable with no arguments.
///
/// # Examples
///
/// ```
/// use sundry::combinator::bind;
///
/// fn describe(name: &str, age: u32) -> String {
///     format!("{name} ({age})")
/// }
///
/// let thunk = bind(describe, ("Grace", 85));
/// assert_eq!(thunk.call(), "Grace (85)");
/// assert_eq!(thunk.call(), "Grace (85)");
/// ```
#[derive(Clone, Debug)]
pub struct Bind<F, Args> {
    function: F,
    arguments: Args,
}

/// Binds every argument of `function`, producing a zero-argument callable.
///
/// Shorthand for [`Bind::new`]. See also the [`bind!`](crate::bind) macro.
#[inline]
pub const fn bind<F, Args>(function: F, arguments: Args) -> Bind<F, Args> {
    Bind::new(function, arguments)
}

impl<F, Args> Bind<F, Args> {
    /// Creates a thunk calling `function` with `arguments`.
    #[inline]
    pub const fn new(function: F, arguments: Args) -> Self {
        Self {
            function,
            arguments,
        }
    }

    /// Invokes the wrapped function with the bound arguments.
    #[inline]
    pub fn call(&self) -> F::Output
    where
        F: Apply<Args>,
        Args: Clone,
    {
        self.function.apply(self.arguments.clone())
    }

    /// The bound arguments.
    #[inline]
    pub const fn arguments(&self) -> &Args {
        &self.arguments
    }
}

impl<F, Args> ApplyOnce<()> for Bind<F, Args>
where
    F: ApplyOnce<Args>,
{
    type Output = F::Output;

    #[inline]
    fn apply_once(self, (): ()) -> Self::Output {
        self.function.apply_once(self.arguments)
    }
}

impl<F, Args> ApplyMut<()> for Bind<F, Args>
where
    F: ApplyMut<Args>,
    Args: Clone,
{
    #[inline]
    fn apply_mut(&mut self, (): ()) -> Self::Output {
        self.function.apply_mut(self.arguments.clone())
    }
}

impl<F, Args> Apply<()> for Bind<F, Args>
where
    F: Apply<Args>,
    Args: Clone,
{
    #[inline]
    fn apply(&self, (): ()) -> Self::Output {
        self.function.apply(self.arguments.clone())
    }
}
