//! Tuple-call traits.
//!
//! Rust has no variadic functions, so every combinator in this module takes
//! its arguments as a single tuple. [`ApplyOnce`], [`ApplyMut`] and [`Apply`]
//! mirror the `FnOnce`/`FnMut`/`Fn` hierarchy and spread that tuple into an
//! ordinary call.
//!
//! The traits are implemented for every closure and function pointer taking
//! up to six arguments, and for the combinator wrappers themselves so that
//! they nest (`once(partial(f, (1,)))`).
//!
//! # Examples
//!
//! ```
//! use sundry::combinator::{Apply, ApplyOnce};
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//!
//! assert_eq!(add.apply((2, 3)), 5);
//! assert_eq!((|| "thunk").apply_once(()), "thunk");
//! ```

/// Calls a value once, consuming it, with a tuple of arguments.
pub trait ApplyOnce<Args> {
    /// The value produced by the call.
    type Output;

    /// Invokes `self` with the spread `arguments`.
    fn apply_once(self, arguments: Args) -> Self::Output;
}

/// Calls a value by mutable reference with a tuple of arguments.
pub trait ApplyMut<Args>: ApplyOnce<Args> {
    /// Invokes `self` with the spread `arguments`.
    fn apply_mut(&mut self, arguments: Args) -> Self::Output;
}

/// Calls a value by shared reference with a tuple of arguments.
pub trait Apply<Args>: ApplyMut<Args> {
    /// Invokes `self` with the spread `arguments`.
    fn apply(&self, arguments: Args) -> Self::Output;
}

macro_rules! impl_apply_for_functions {
    ($($argument:ident),*) => {
        impl<Function, Return, $($argument,)*> ApplyOnce<($($argument,)*)> for Function
        where
            Function: FnOnce($($argument,)*) -> Return,
        {
            type Output = Return;

            #[inline]
            #[allow(non_snake_case)]
            fn apply_once(self, ($($argument,)*): ($($argument,)*)) -> Return {
                self($($argument,)*)
            }
        }

        impl<Function, Return, $($argument,)*> ApplyMut<($($argument,)*)> for Function
        where
            Function: FnMut($($argument,)*) -> Return,
        {
            #[inline]
            #[allow(non_snake_case)]
            fn apply_mut(&mut self, ($($argument,)*): ($($argument,)*)) -> Return {
                self($($argument,)*)
            }
        }

        impl<Function, Return, $($argument,)*> Apply<($($argument,)*)> for Function
        where
            Function: Fn($($argument,)*) -> Return,
        {
            #[inline]
            #[allow(non_snake_case)]
            fn apply(&self, ($($argument,)*): ($($argument,)*)) -> Return {
                self($($argument,)*)
            }
        }
    };
}

impl_apply_for_functions!();
impl_apply_for_functions!(A1);
impl_apply_for_functions!(A1, A2);
impl_apply_for_functions!(A1, A2, A3);
impl_apply_for_functions!(A1, A2, A3, A4);
impl_apply_for_functions!(A1, A2, A3, A4, A5);
impl_apply_for_functions!(A1, A2, A3, A4, A5, A6);
