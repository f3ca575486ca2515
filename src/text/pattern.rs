//! Regular-expression predicates.
//!
//! Patterns are compiled with `.` matching line separators, optionally
//! case-insensitive. Compilation happens on every call of the convenience
//! predicates; compile once with [`compile_pattern`] when matching in a loop.

use regex::{Regex, RegexBuilder};

use crate::error::{Error, Result};

/// Compiles `pattern`, with `.` matching newlines and optional case folding.
///
/// # Errors
///
/// Returns [`Error::InvalidPattern`] when the pattern does not compile.
///
/// # Examples
///
/// ```
/// use sundry::text::compile_pattern;
///
/// let regex = compile_pattern("^hello.world$", true).unwrap();
/// assert!(regex.is_match("HELLO\nWORLD"));
///
/// assert!(compile_pattern("(unclosed", false).is_err());
/// ```
pub fn compile_pattern(pattern: &str, ignore_case: bool) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .dot_matches_new_line(true)
        .case_insensitive(ignore_case)
        .build()
        .map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_owned(),
            source,
        })
}

/// Returns `true` when `pattern` matches anywhere in `haystack`.
///
/// An invalid pattern matches nothing; the compilation error is logged at
/// `warn` level.
///
/// # Examples
///
/// ```
/// use sundry::text::matches_pattern;
///
/// assert!(matches_pattern("Order #1234", r"#\d+", false));
/// assert!(matches_pattern("RUST", "rust", true));
/// assert!(!matches_pattern("RUST", "rust", false));
/// assert!(!matches_pattern("anything", "(", false));
/// ```
pub fn matches_pattern(haystack: &str, pattern: &str, ignore_case: bool) -> bool {
    compile_or_log(pattern, ignore_case).is_some_and(|regex| regex.is_match(haystack))
}

/// Returns `true` when `pattern` matches every string in `haystacks`.
///
/// Vacuously `true` for an empty slice, even if the pattern is invalid.
pub fn all_match<S: AsRef<str>>(haystacks: &[S], pattern: &str, ignore_case: bool) -> bool {
    if haystacks.is_empty() {
        return true;
    }
    compile_or_log(pattern, ignore_case).is_some_and(|regex| {
        haystacks
            .iter()
            .all(|haystack| regex.is_match(haystack.as_ref()))
    })
}

/// Returns `true` when `pattern` matches at least one string in `haystacks`.
pub fn any_match<S: AsRef<str>>(haystacks: &[S], pattern: &str, ignore_case: bool) -> bool {
    compile_or_log(pattern, ignore_case).is_some_and(|regex| {
        haystacks
            .iter()
            .any(|haystack| regex.is_match(haystack.as_ref()))
    })
}

fn compile_or_log(pattern: &str, ignore_case: bool) -> Option<Regex> {
    match compile_pattern(pattern, ignore_case) {
        Ok(regex) => Some(regex),
        Err(error) => {
            tracing::warn!(%error, "pattern failed to compile, treating it as matching nothing");
            None
        }
    }
}
