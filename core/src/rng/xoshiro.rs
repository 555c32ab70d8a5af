//! Xoshiro256** (Blackman & Vigna)
//!
//! 256 bits of state, `**` scrambler on the second word. The all-zero state
//! is a fixed point; seeding through another generator avoids it in practice.

use super::{Generator, LinearCongruential, RngError, SplittableRandom};

/// Xoshiro256** generator
///
/// # Example
/// ```
/// use seedstream_core_rs::rng::{Generator, SplitMix64, Xoshiro256StarStar};
///
/// // Seeded from any other generator
/// let mut seeder = SplitMix64::new(42);
/// let mut rng = Xoshiro256StarStar::from_seeder(&mut seeder);
/// let _ = rng.generate();
///
/// // Or from a seed via an internal linear congruential generator
/// let mut rng = Xoshiro256StarStar::new(1).unwrap();
/// assert_eq!(rng.generate(), 6664573482289026999);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xoshiro256StarStar {
    s: [u64; 4],
}

impl Xoshiro256StarStar {
    /// Seed from a 64-bit value through a [`LinearCongruential`] seeder.
    ///
    /// # Errors
    /// [`RngError::ZeroSeed`] if `seed == 0`.
    pub fn new(seed: u64) -> Result<Self, RngError> {
        let mut seeder = LinearCongruential::new(seed)?;
        Ok(Self::from_seeder(&mut seeder))
    }

    /// Fill the four state words with four successive draws of `seeder`.
    /// The seeder is only borrowed for the duration of the call.
    pub fn from_seeder<G: Generator + ?Sized>(seeder: &mut G) -> Self {
        let s0 = seeder.generate() as u64;
        let s1 = seeder.generate() as u64;
        let s2 = seeder.generate() as u64;
        let s3 = seeder.generate() as u64;
        Self::from_words([s0, s1, s2, s3])
    }

    pub(crate) fn from_words(s: [u64; 4]) -> Self {
        Self { s }
    }

    pub(crate) fn words(&self) -> [u64; 4] {
        self.s
    }
}

impl Default for Xoshiro256StarStar {
    fn default() -> Self {
        Self::from_seeder(&mut SplittableRandom::default())
    }
}

impl Generator for Xoshiro256StarStar {
    #[inline]
    fn generate(&mut self) -> i64 {
        let [s0, s1, s2, s3] = &mut self.s;

        let result = s1.wrapping_mul(5).rotate_left(7).wrapping_mul(9);
        let t = *s1 << 17;

        *s2 ^= *s0;
        *s3 ^= *s1;
        *s1 ^= *s2;
        *s0 ^= *s3;

        *s2 ^= t;
        *s3 = s3.rotate_left(45);

        result as i64
    }
}
