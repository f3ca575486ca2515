//! The `partial!` and `bind!` macros.
//!
//! Both are thin front-ends over [`partial`](crate::combinator::partial) and
//! [`bind`](crate::combinator::bind) that take the fixed arguments as loose
//! expressions instead of a tuple.

/// Fixes the leading arguments of a function.
///
/// `partial!(f, a, b)` is `partial(f, (a, b))`: calling the result with
/// `(c,)` invokes `f(a, b, c)`.
///
/// # Type Requirements
///
/// - Fixed values must implement [`Clone`] to be called through `call`
///   (the partial application may be called multiple times)
///
/// # Supported Argument Counts
///
/// Up to three fixed arguments, leaving up to three to be supplied.
///
/// # Examples
///
/// ```
/// use sundry::partial;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let add_five = partial!(add, 5);
/// assert_eq!(add_five.call((3,)), 8);
/// assert_eq!(add_five.call((10,)), 15);
/// ```
///
/// ## Three-argument function
///
/// ```
/// use sundry::partial;
///
/// fn format_greeting(greeting: &str, name: &str, punctuation: &str) -> String {
///     format!("{}, {}{}", greeting, name, punctuation)
/// }
///
/// let hello = partial!(format_greeting, "Hello");
/// assert_eq!(hello.call(("Alice", "!")), "Hello, Alice!");
/// ```
#[macro_export]
macro_rules! partial {
    ($function:expr $(, $fixed:expr)* $(,)?) => {
        $crate::combinator::partial($function, ($($fixed,)*))
    };
}

/// Binds every argument of a function, producing a zero-argument thunk.
///
/// `bind!(f, a, b)` is `bind(f, (a, b))`.
///
/// # Examples
///
/// ```
/// use sundry::bind;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let thunk = bind!(add, 3, 5);
/// assert_eq!(thunk.call(), 8);
/// ```
#[macro_export]
macro_rules! bind {
    ($function:expr $(, $argument:expr)* $(,)?) => {
        $crate::combinator::bind($function, ($($argument,)*))
    };
}
