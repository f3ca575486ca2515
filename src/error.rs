//! Error types for the fallible helpers.
//!
//! Most of the crate is infallible: out-of-range input yields an empty
//! container or `None`. The few operations that can genuinely fail (pattern
//! compilation and element conversion) report through [`Error`].

use thiserror::Error;

/// Errors produced by the fallible helpers in this crate.
///
/// # Examples
///
/// ```rust
/// use sundry::Error;
///
/// let error = Error::conversion::<u8>(3);
/// assert_eq!(
///     error.to_string(),
///     "element 3 could not be converted to `u8`"
/// );
/// ```
#[derive(Debug, Error)]
pub enum Error {
    /// A regular expression failed to compile.
    #[cfg(feature = "text")]
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The pattern as given by the caller.
        pattern: String,
        /// The underlying compilation error.
        #[source]
        source: regex::Error,
    },

    /// An element could not be converted to the requested type.
    #[error("element {index} could not be converted to `{target}`")]
    Conversion {
        /// Position of the element in the (flattened) input.
        index: usize,
        /// Name of the type the conversion targeted.
        target: &'static str,
    },
}

impl Error {
    /// Creates a conversion error for the element at `index` targeting `U`.
    #[must_use]
    pub fn conversion<U>(index: usize) -> Self {
        Self::Conversion {
            index,
            target: std::any::type_name::<U>(),
        }
    }
}

/// Result alias using the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
