//! Integer and floating-point helpers.
//!
//! [`IntegerExt`] is implemented for every primitive integer type and
//! [`FloatExt`] for `f32` and `f64`.
//!
//! # Examples
//!
//! ```
//! use sundry::number::{FloatExt, IntegerExt};
//!
//! assert!(4_u8.is_even());
//! assert_eq!(12_i32.gcd(-18), 6);
//! assert_eq!(4_u64.lcm(6), 12);
//! assert_eq!(&(-905_i32).digits()[..], &[9, 0, 5]);
//!
//! let digits = 12.25_f64.digits();
//! assert_eq!(digits.integer_part, vec![1, 2]);
//! assert_eq!(digits.fractional_part, vec![2, 5]);
//! ```

mod float;
mod integer;

pub use float::{Digits, FloatExt};
pub use integer::{DigitBuffer, IntegerExt};
