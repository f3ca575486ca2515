use std::ops::RangeInclusive;

use smallvec::SmallVec;

/// Decimal digits of an integer, most significant first.
///
/// Inline capacity covers the 39 digits of `u128::MAX`, so no integer ever
/// spills to the heap.
pub type DigitBuffer = SmallVec<[u8; 40]>;

/// Arithmetic predicates and iteration helpers for primitive integers.
pub trait IntegerExt: Copy + Sized {
    /// Returns `true` for multiples of two, zero included.
    fn is_even(self) -> bool;

    /// Returns `true` when the value is not even.
    #[inline]
    fn is_odd(self) -> bool {
        !self.is_even()
    }

    /// Greatest common divisor of the magnitudes. `gcd(0, 0)` is 0.
    ///
    /// # Panics
    ///
    /// Panics when the result does not fit in `Self`, which only happens for
    /// `MIN.gcd(0)` and `MIN.gcd(MIN)` of a signed type.
    fn gcd(self, other: Self) -> Self;

    /// Least common multiple of the magnitudes; 0 when either side is 0.
    ///
    /// # Panics
    ///
    /// Panics when the result does not fit in `Self`.
    fn lcm(self, other: Self) -> Self;

    /// Decimal digits of the magnitude, most significant first. The sign is
    /// ignored and zero yields `[0]`.
    fn digits(self) -> DigitBuffer;

    /// Returns `true` when the value lies in `range`; with `strict` both
    /// bounds are excluded.
    ///
    /// # Examples
    ///
    /// ```
    /// use sundry::number::IntegerExt;
    ///
    /// assert!(5_i32.is_within(1..=5, false));
    /// assert!(!5_i32.is_within(1..=5, true));
    /// assert!(3_i32.is_within(1..=5, true));
    /// ```
    fn is_within(self, range: RangeInclusive<Self>, strict: bool) -> bool;

    /// Calls `action` with `0, 1, ..., self - 1`. Non-positive values call it
    /// never.
    fn times<F: FnMut(Self)>(self, action: F);

    /// Calls `action` with every value from `self` up to `limit` inclusive.
    /// Nothing happens when `limit < self`.
    fn up_to<F: FnMut(Self)>(self, limit: Self, action: F);

    /// Calls `action` with every value from `self` down to `limit` inclusive.
    /// Nothing happens when `limit > self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sundry::number::IntegerExt;
    ///
    /// let mut countdown = Vec::new();
    /// 3_u8.down_to(1, |value| countdown.push(value));
    /// assert_eq!(countdown, vec![3, 2, 1]);
    /// ```
    fn down_to<F: FnMut(Self)>(self, limit: Self, action: F);
}

macro_rules! impl_integer_ext {
    ($($integer:ty => $unsigned:ty, $magnitude:expr);* $(;)?) => {
        $(
            impl IntegerExt for $integer {
                #[inline]
                fn is_even(self) -> bool {
                    self % 2 == 0
                }

                fn gcd(self, other: Self) -> Self {
                    let greatest = euclid(($magnitude)(self), ($magnitude)(other));
                    <$integer>::try_from(greatest).unwrap_or_else(|_| {
                        panic!(
                            "gcd({self}, {other}) does not fit in {}",
                            stringify!($integer)
                        )
                    })
                }

                fn lcm(self, other: Self) -> Self {
                    if self == 0 || other == 0 {
                        return 0;
                    }
                    let left: $unsigned = ($magnitude)(self);
                    let right: $unsigned = ($magnitude)(other);
                    (left / euclid(left, right))
                        .checked_mul(right)
                        .and_then(|least| <$integer>::try_from(least).ok())
                        .unwrap_or_else(|| {
                            panic!(
                                "lcm({self}, {other}) does not fit in {}",
                                stringify!($integer)
                            )
                        })
                }

                #[allow(clippy::cast_possible_truncation)]
                fn digits(self) -> DigitBuffer {
                    let mut remaining: $unsigned = ($magnitude)(self);
                    let mut digits = DigitBuffer::new();
                    loop {
                        digits.push((remaining % 10) as u8);
                        remaining /= 10;
                        if remaining == 0 {
                            break;
                        }
                    }
                    digits.reverse();
                    digits
                }

                fn is_within(self, range: RangeInclusive<Self>, strict: bool) -> bool {
                    if strict {
                        *range.start() < self && self < *range.end()
                    } else {
                        range.contains(&self)
                    }
                }

                fn times<F: FnMut(Self)>(self, action: F) {
                    (0..self).for_each(action);
                }

                fn up_to<F: FnMut(Self)>(self, limit: Self, action: F) {
                    (self..=limit).for_each(action);
                }

                fn down_to<F: FnMut(Self)>(self, limit: Self, action: F) {
                    (limit..=self).rev().for_each(action);
                }
            }
        )*
    };
}

macro_rules! impl_euclid {
    ($($unsigned:ty),*) => {
        $(
            impl Euclid for $unsigned {
                fn euclid(mut self, mut other: Self) -> Self {
                    while other != 0 {
                        (self, other) = (other, self % other);
                    }
                    self
                }
            }
        )*
    };
}

trait Euclid {
    fn euclid(self, other: Self) -> Self;
}

impl_euclid!(u8, u16, u32, u64, u128, usize);

#[inline]
fn euclid<T: Euclid>(left: T, right: T) -> T {
    left.euclid(right)
}

impl_integer_ext! {
    i8 => u8, i8::unsigned_abs;
    i16 => u16, i16::unsigned_abs;
    i32 => u32, i32::unsigned_abs;
    i64 => u64, i64::unsigned_abs;
    i128 => u128, i128::unsigned_abs;
    isize => usize, isize::unsigned_abs;
    u8 => u8, std::convert::identity::<u8>;
    u16 => u16, std::convert::identity::<u16>;
    u32 => u32, std::convert::identity::<u32>;
    u64 => u64, std::convert::identity::<u64>;
    u128 => u128, std::convert::identity::<u128>;
    usize => usize, std::convert::identity::<usize>;
}
