//! Uniform random numbers, strings, ranges and slice draws.
//!
//! The plain functions draw from [`rand::rng`], the thread-local generator.
//! The `_with` variants take any [`Rng`], so a seeded
//! [`StdRng`](rand::rngs::StdRng) gives reproducible sequences.
//!
//! # Examples
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use sundry::random::{random_int, random_int_with};
//!
//! let roll = random_int(1, 6);
//! assert!((1..=6).contains(&roll));
//!
//! let mut first = StdRng::seed_from_u64(7);
//! let mut second = StdRng::seed_from_u64(7);
//! assert_eq!(random_int_with(&mut first, 0, 100), random_int_with(&mut second, 0, 100));
//! ```

use std::ops::RangeInclusive;

use rand::Rng;
use rand::distr::uniform::SampleUniform;
use rand::seq::{SliceRandom, index};

/// Characters used by [`random_string`]: ASCII letters and digits.
pub const ALPHANUMERIC: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Draws an integer uniformly from `[min, max]`, both bounds included.
///
/// # Panics
///
/// Panics if `min > max`.
pub fn random_int<T>(min: T, max: T) -> T
where
    T: SampleUniform + PartialOrd,
{
    random_int_with(&mut rand::rng(), min, max)
}

/// [`random_int`] drawing from `rng`.
///
/// # Panics
///
/// Panics if `min > max`.
pub fn random_int_with<T, R>(rng: &mut R, min: T, max: T) -> T
where
    T: SampleUniform + PartialOrd,
    R: Rng + ?Sized,
{
    assert!(min <= max, "random_int requires min <= max");
    rng.random_range(min..=max)
}

/// Draws a float uniformly from `[min, max)`. Returns `min` when the range
/// is empty.
///
/// # Panics
///
/// Panics if `min > max` or either bound is not finite.
pub fn random_float(min: f64, max: f64) -> f64 {
    random_float_with(&mut rand::rng(), min, max)
}

/// [`random_float`] drawing from `rng`.
///
/// # Panics
///
/// Panics if `min > max` or either bound is not finite.
#[allow(clippy::float_cmp)]
pub fn random_float_with<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    assert!(
        min.is_finite() && max.is_finite() && min <= max,
        "random_float requires finite bounds with min <= max"
    );
    if min == max {
        return min;
    }
    rng.random_range(min..max)
}

/// A string of `length` characters drawn uniformly from `charset`.
///
/// An empty `charset` yields an empty string.
///
/// # Examples
///
/// ```
/// use sundry::random::{ALPHANUMERIC, random_string};
///
/// let token = random_string(12, ALPHANUMERIC);
/// assert_eq!(token.chars().count(), 12);
/// assert!(token.chars().all(|character| character.is_ascii_alphanumeric()));
/// ```
pub fn random_string(length: usize, charset: &str) -> String {
    random_string_with(&mut rand::rng(), length, charset)
}

/// [`random_string`] drawing from `rng`.
pub fn random_string_with<R: Rng + ?Sized>(rng: &mut R, length: usize, charset: &str) -> String {
    let characters: Vec<char> = charset.chars().collect();
    if characters.is_empty() {
        return String::new();
    }
    (0..length)
        .map(|_| characters[rng.random_range(0..characters.len())])
        .collect()
}

/// A random inclusive range inside `[from, to]`.
///
/// The lower bound is drawn from `[from, to]`, then the upper bound from
/// `[lower, to]`, so the range is never empty.
///
/// # Panics
///
/// Panics if `from > to`.
///
/// # Examples
///
/// ```
/// use sundry::random::random_subrange;
///
/// let span = random_subrange(10_u32, 20);
/// assert!(10 <= *span.start() && span.start() <= span.end() && *span.end() <= 20);
/// ```
pub fn random_subrange<T>(from: T, to: T) -> RangeInclusive<T>
where
    T: SampleUniform + PartialOrd + Clone,
{
    random_subrange_with(&mut rand::rng(), from, to)
}

/// [`random_subrange`] drawing from `rng`.
///
/// # Panics
///
/// Panics if `from > to`.
pub fn random_subrange_with<T, R>(rng: &mut R, from: T, to: T) -> RangeInclusive<T>
where
    T: SampleUniform + PartialOrd + Clone,
    R: Rng + ?Sized,
{
    let lower = random_int_with(rng, from, to.clone());
    let upper = random_int_with(rng, lower.clone(), to);
    lower..=upper
}

/// A copy of `items` in uniformly random order.
pub fn shuffled<T: Clone>(items: &[T]) -> Vec<T> {
    shuffled_with(&mut rand::rng(), items)
}

/// [`shuffled`] drawing from `rng`.
pub fn shuffled_with<T, R>(rng: &mut R, items: &[T]) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut reordered = items.to_vec();
    reordered.shuffle(rng);
    reordered
}

/// `size` distinct positions of `items`, chosen uniformly, returned in
/// source order.
///
/// A `size` of at least `items.len()` returns every element.
///
/// # Examples
///
/// ```
/// use sundry::random::sample;
///
/// let letters = ['a', 'b', 'c', 'd', 'e'];
/// let picked = sample(&letters, 3);
///
/// assert_eq!(picked.len(), 3);
/// assert!(picked.windows(2).all(|pair| pair[0] < pair[1]));
/// assert_eq!(sample(&letters, 9), letters.to_vec());
/// ```
pub fn sample<T: Clone>(items: &[T], size: usize) -> Vec<T> {
    sample_with(&mut rand::rng(), items, size)
}

/// [`sample`] drawing from `rng`.
pub fn sample_with<T, R>(rng: &mut R, items: &[T], size: usize) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    if size >= items.len() {
        return items.to_vec();
    }
    let mut positions = index::sample(rng, items.len(), size).into_vec();
    positions.sort_unstable();
    positions
        .into_iter()
        .map(|position| items[position].clone())
        .collect()
}
