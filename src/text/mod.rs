//! String helpers and regular-expression predicates.
//!
//! [`TextExt`] works on `str` and counts positions in `char`s, never in
//! bytes. The free functions in this module wrap the [`regex`] crate.
//!
//! # Examples
//!
//! ```
//! use sundry::text::{TextExt, matches_pattern};
//!
//! assert_eq!("a,,b,c".explode(','), vec!["a", "b", "c"]);
//! assert_eq!("hello WORLD".capitalized(), "Hello World");
//! assert_eq!("ab".repeat_with(3, "-"), "ab-ab-ab");
//!
//! assert!(matches_pattern("release-2024", r"\d{4}$", false));
//! ```

mod pattern;

pub use pattern::{all_match, any_match, compile_pattern, matches_pattern};

use crate::error::Result;

/// Convenience operations on string slices.
pub trait TextExt {
    /// Length in `char`s.
    fn length(&self) -> usize;

    /// Splits on `separator`, dropping empty pieces.
    fn explode(&self, separator: char) -> Vec<&str>;

    /// Upper-cases the first letter of every whitespace-separated word and
    /// lower-cases the rest.
    fn capitalized(&self) -> String;

    /// Inserts `text` before the `char` at `index`.
    ///
    /// An `index` past the end appends.
    ///
    /// # Examples
    ///
    /// ```
    /// use sundry::text::TextExt;
    ///
    /// assert_eq!("héllo".insert_at(2, "--"), "hé--llo");
    /// assert_eq!("abc".insert_at(99, "!"), "abc!");
    /// ```
    fn insert_at(&self, index: usize, text: &str) -> String;

    /// Repeats the string `times` times, joined by `separator`.
    fn repeat_with(&self, times: usize, separator: &str) -> String;

    /// Returns `true` when `pattern` matches anywhere in the string.
    ///
    /// Shorthand for [`matches_pattern`]; an invalid pattern matches nothing.
    fn is_match(&self, pattern: &str, ignore_case: bool) -> bool;

    /// Every non-overlapping match of `pattern`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`](crate::Error::InvalidPattern) when
    /// the pattern does not compile.
    ///
    /// # Examples
    ///
    /// ```
    /// use sundry::text::TextExt;
    ///
    /// let found = "a1 b22 c333".pattern_matches(r"\d+", false).unwrap();
    /// assert_eq!(found, vec!["1", "22", "333"]);
    /// ```
    fn pattern_matches(&self, pattern: &str, ignore_case: bool) -> Result<Vec<&str>>;
}

impl TextExt for str {
    #[inline]
    fn length(&self) -> usize {
        self.chars().count()
    }

    fn explode(&self, separator: char) -> Vec<&str> {
        self.split(separator)
            .filter(|piece| !piece.is_empty())
            .collect()
    }

    fn capitalized(&self) -> String {
        let mut result = String::with_capacity(self.len());
        let mut at_word_start = true;
        for character in self.chars() {
            if character.is_whitespace() {
                result.push(character);
                at_word_start = true;
            } else if at_word_start {
                result.extend(character.to_uppercase());
                at_word_start = false;
            } else {
                result.extend(character.to_lowercase());
            }
        }
        result
    }

    fn insert_at(&self, index: usize, text: &str) -> String {
        let byte_index = self
            .char_indices()
            .nth(index)
            .map_or(self.len(), |(position, _)| position);
        let mut result = String::with_capacity(self.len() + text.len());
        result.push_str(&self[..byte_index]);
        result.push_str(text);
        result.push_str(&self[byte_index..]);
        result
    }

    fn repeat_with(&self, times: usize, separator: &str) -> String {
        vec![self; times].join(separator)
    }

    #[inline]
    fn is_match(&self, pattern: &str, ignore_case: bool) -> bool {
        matches_pattern(self, pattern, ignore_case)
    }

    fn pattern_matches(&self, pattern: &str, ignore_case: bool) -> Result<Vec<&str>> {
        let regex = compile_pattern(pattern, ignore_case)?;
        Ok(regex.find_iter(self).map(|found| found.as_str()).collect())
    }
}
