//! Deterministic random number generation
//!
//! Five interchangeable generators share one capability, [`Generator`]:
//! a concrete generator only supplies raw 64-bit output and gets ranged
//! integers and doubles for free.
//!
//! # Generators
//!
//! - [`LinearCongruential`]: 64-bit LCG, one word of state
//! - [`SplitMix64`]: golden-ratio counter with a 3-step mixer
//! - [`Xoshiro256StarStar`]: four words, xor/shift/rotate scramble
//! - [`SplittableRandom`]: seed + odd gamma, can hand out independent children
//! - [`ChaCha20`]: ChaCha20 block function used as a keystream cache
//!
//! # Determinism
//!
//! Same seed → same sequence. Combined with [`crate::serialization`] a
//! generator can be stopped and resumed bit-for-bit.

mod any;
pub mod bits;
mod chacha20;
mod linear_congruential;
mod splitmix64;
mod splittable;
mod xoshiro;

pub use any::{AnyGenerator, GeneratorKind};
pub use chacha20::ChaCha20;
pub use linear_congruential::LinearCongruential;
pub use splitmix64::SplitMix64;
pub use splittable::SplittableRandom;
pub use xoshiro::Xoshiro256StarStar;

use thiserror::Error;

/// Errors raised by generator construction and bounded generation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RngError {
    #[error("lower bound {lower} cannot be greater than upper bound {upper}")]
    InvalidRange { lower: i64, upper: i64 },

    #[error("range has to be nonnegative, got {0}")]
    NegativeRange(i64),

    #[error("seed cannot be 0")]
    ZeroSeed,
}

/// Scale applied to the top 53 non-sign bits in [`Generator::generate_double`].
const DOUBLE_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// Pseudo-random generator capability
///
/// Implementors provide [`Generator::generate`]; every other operation is
/// derived from it and should not be overridden.
///
/// # Example
/// ```
/// use seedstream_core_rs::rng::{Generator, LinearCongruential};
///
/// let mut rng = LinearCongruential::new(1).unwrap();
/// assert_eq!(rng.generate(), -288103957898298394);
///
/// let die = rng.generate_in_range(1, 6).unwrap();
/// assert!((1..=6).contains(&die));
/// ```
pub trait Generator {
    /// Generate the next raw 64-bit value, advancing the state.
    fn generate(&mut self) -> i64;

    /// Generate a double in `[0.0, 1.0)` from a single raw draw.
    ///
    /// The sign bit is masked off and the top 53 of the remaining 63 bits
    /// become the numerator over `2^53`, so every result is exactly
    /// representable and strictly below 1.
    ///
    /// # Example
    /// ```
    /// use seedstream_core_rs::rng::{Generator, SplitMix64};
    ///
    /// let mut rng = SplitMix64::new(7);
    /// let p = rng.generate_double();
    /// assert!(p >= 0.0 && p < 1.0);
    /// ```
    fn generate_double(&mut self) -> f64 {
        let magnitude = (self.generate() as u64) & (i64::MAX as u64);
        (magnitude >> 10) as f64 * DOUBLE_UNIT
    }

    /// Generate a value in `[lower, upper]` (both inclusive).
    ///
    /// # Errors
    /// [`RngError::InvalidRange`] if `lower > upper`.
    ///
    /// # Example
    /// ```
    /// use seedstream_core_rs::rng::{Generator, Xoshiro256StarStar};
    ///
    /// let mut rng = Xoshiro256StarStar::new(1234).unwrap();
    /// assert_eq!(rng.generate_in_range(5, 5).unwrap(), 5);
    /// assert!(rng.generate_in_range(10, 1).is_err());
    /// ```
    fn generate_in_range(&mut self, lower: i64, upper: i64) -> Result<i64, RngError> {
        if lower > upper {
            return Err(RngError::InvalidRange { lower, upper });
        }
        if lower == upper {
            return Ok(lower);
        }

        // Unsigned distance so that i64::MIN..=i64::MAX does not overflow
        let span = upper.wrapping_sub(lower) as u64;
        Ok(lower.wrapping_add(reduce(self, span) as i64))
    }

    /// Generate a value in `[0, range]`.
    ///
    /// # Errors
    /// [`RngError::NegativeRange`] if `range < 0`.
    fn generate_less_or_equal_to(&mut self, range: i64) -> Result<i64, RngError> {
        if range < 0 {
            return Err(RngError::NegativeRange(range));
        }
        if range == 0 {
            return Ok(0);
        }

        Ok(reduce(self, range as u64) as i64)
    }
}

impl<G: Generator + ?Sized> Generator for &mut G {
    fn generate(&mut self) -> i64 {
        (**self).generate()
    }
}

/// Draw uniformly from `[0, range]` by rejection sampling under the tightest
/// all-ones mask covering `range`. Each draw is accepted with probability
/// above 1/2.
fn reduce<G: Generator + ?Sized>(generator: &mut G, range: u64) -> u64 {
    let mask = bits::mask_for(range);
    loop {
        let candidate = (generator.generate() as u64) & mask;
        if candidate <= range {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of raw outputs.
    struct Scripted {
        values: Vec<i64>,
        position: usize,
    }

    impl Scripted {
        fn new(values: Vec<i64>) -> Self {
            Self {
                values,
                position: 0,
            }
        }
    }

    impl Generator for Scripted {
        fn generate(&mut self) -> i64 {
            let value = self.values[self.position % self.values.len()];
            self.position += 1;
            value
        }
    }

    #[test]
    fn test_reduce_rejects_out_of_range_candidates() {
        // range 5 -> mask 0b111; 7 and 6 are rejected, 3 accepted
        let mut rng = Scripted::new(vec![7, 6, 3]);
        assert_eq!(rng.generate_less_or_equal_to(5).unwrap(), 3);
        assert_eq!(rng.position, 3);
    }

    #[test]
    fn test_reduce_masks_high_bits() {
        let mut rng = Scripted::new(vec![-1i64 << 8 | 0b101]);
        assert_eq!(rng.generate_less_or_equal_to(5).unwrap(), 5);
    }

    #[test]
    fn test_in_range_offsets_from_lower() {
        let mut rng = Scripted::new(vec![2]);
        assert_eq!(rng.generate_in_range(-10, -7).unwrap(), -8);
    }

    #[test]
    fn test_full_span_uses_every_bit() {
        let mut rng = Scripted::new(vec![-1]);
        assert_eq!(rng.generate_in_range(i64::MIN, i64::MAX).unwrap(), i64::MAX);

        let mut rng = Scripted::new(vec![0]);
        assert_eq!(rng.generate_in_range(i64::MIN, i64::MAX).unwrap(), i64::MIN);
    }

    #[test]
    fn test_zero_range_does_not_draw() {
        let mut rng = Scripted::new(vec![1]);
        assert_eq!(rng.generate_less_or_equal_to(0).unwrap(), 0);
        assert_eq!(rng.generate_in_range(3, 3).unwrap(), 3);
        assert_eq!(rng.position, 0);
    }

    #[test]
    fn test_invalid_arguments() {
        let mut rng = Scripted::new(vec![1]);
        assert_eq!(
            rng.generate_in_range(100, 50),
            Err(RngError::InvalidRange {
                lower: 100,
                upper: 50
            })
        );
        assert_eq!(
            rng.generate_less_or_equal_to(-1),
            Err(RngError::NegativeRange(-1))
        );
    }

    #[test]
    fn test_double_extremes() {
        let mut rng = Scripted::new(vec![-1, i64::MAX, 0, i64::MIN]);
        let top = rng.generate_double();
        assert!(top < 1.0);
        assert_eq!(top, 1.0 - DOUBLE_UNIT);
        assert_eq!(rng.generate_double(), 1.0 - DOUBLE_UNIT);
        assert_eq!(rng.generate_double(), 0.0);
        assert_eq!(rng.generate_double(), 0.0);
    }

    #[test]
    fn test_generator_by_mutable_reference() {
        fn draw(mut generator: impl Generator) -> i64 {
            generator.generate()
        }

        let mut rng = Scripted::new(vec![11, 12]);
        assert_eq!(draw(&mut rng), 11);
        assert_eq!(rng.generate(), 12);
    }
}
