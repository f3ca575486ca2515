#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Decimal digits of a floating-point value, split at the decimal point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Digits {
    /// Digits before the decimal point, most significant first.
    pub integer_part: Vec<u8>,
    /// Digits after the decimal point; `[0]` for a whole number.
    pub fractional_part: Vec<u8>,
}

/// Digit extraction for `f32` and `f64`.
pub trait FloatExt {
    /// Splits the shortest round-tripping decimal form of the magnitude
    /// into its integer and fractional digits.
    ///
    /// Non-finite values have no digits: the integer part is empty and the
    /// fractional part is `[0]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sundry::number::FloatExt;
    ///
    /// let digits = (-0.5_f32).digits();
    /// assert_eq!(digits.integer_part, vec![0]);
    /// assert_eq!(digits.fractional_part, vec![5]);
    ///
    /// assert_eq!(40.0_f64.digits().fractional_part, vec![0]);
    /// ```
    fn digits(self) -> Digits;
}

macro_rules! impl_float_ext {
    ($($float:ty),*) => {
        $(
            impl FloatExt for $float {
                fn digits(self) -> Digits {
                    split_digits(&self.to_string())
                }
            }
        )*
    };
}

impl_float_ext!(f32, f64);

#[allow(clippy::cast_possible_truncation)]
fn split_digits(rendered: &str) -> Digits {
    let mut integer_part = None;
    let mut current = Vec::new();
    for character in rendered.chars() {
        if let Some(digit) = character.to_digit(10) {
            current.push(digit as u8);
        } else if character == '.' {
            integer_part = Some(std::mem::take(&mut current));
        }
    }
    match integer_part {
        Some(integer_part) => Digits {
            integer_part,
            fractional_part: current,
        },
        None => Digits {
            integer_part: current,
            fractional_part: vec![0],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_values_have_no_integer_digits() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let digits = value.digits();
            assert!(digits.integer_part.is_empty());
            assert_eq!(digits.fractional_part, vec![0]);
        }
    }
}
