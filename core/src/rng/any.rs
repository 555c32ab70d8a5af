//! Closed set of generator variants
//!
//! [`AnyGenerator`] lets callers hold "some generator" without trait
//! objects, and lets [`crate::serialization::AnySerializer`] reject a
//! mismatched variant with a plain `match`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{
    ChaCha20, Generator, LinearCongruential, RngError, SplitMix64, SplittableRandom,
    Xoshiro256StarStar,
};
use crate::serialization::codec::WORD_SIZE;
use crate::serialization::{
    ChaCha20Serializer, LinearCongruentialSerializer, SplitMix64Serializer,
    SplittableRandomSerializer, StateSerializer, Xoshiro256StarStarSerializer,
};

/// Tag naming one of the five generator algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeneratorKind {
    LinearCongruential,
    SplitMix64,
    Xoshiro256StarStar,
    SplittableRandom,
    ChaCha20,
}

impl GeneratorKind {
    pub const ALL: [GeneratorKind; 5] = [
        GeneratorKind::LinearCongruential,
        GeneratorKind::SplitMix64,
        GeneratorKind::Xoshiro256StarStar,
        GeneratorKind::SplittableRandom,
        GeneratorKind::ChaCha20,
    ];

    /// Fixed size in bytes of this kind's serialized state
    pub fn state_size(self) -> usize {
        let words = match self {
            GeneratorKind::LinearCongruential => LinearCongruentialSerializer::WORDS,
            GeneratorKind::SplitMix64 => SplitMix64Serializer::WORDS,
            GeneratorKind::Xoshiro256StarStar => Xoshiro256StarStarSerializer::WORDS,
            GeneratorKind::SplittableRandom => SplittableRandomSerializer::WORDS,
            GeneratorKind::ChaCha20 => ChaCha20Serializer::WORDS,
        };
        words * WORD_SIZE
    }

    pub fn name(self) -> &'static str {
        match self {
            GeneratorKind::LinearCongruential => "LinearCongruential",
            GeneratorKind::SplitMix64 => "SplitMix64",
            GeneratorKind::Xoshiro256StarStar => "Xoshiro256StarStar",
            GeneratorKind::SplittableRandom => "SplittableRandom",
            GeneratorKind::ChaCha20 => "ChaCha20",
        }
    }

    /// Construct a generator of this kind from a seed
    ///
    /// # Errors
    /// [`RngError::ZeroSeed`] for kinds seeded through a linear congruential
    /// generator.
    pub fn seeded(self, seed: u64) -> Result<AnyGenerator, RngError> {
        Ok(match self {
            GeneratorKind::LinearCongruential => LinearCongruential::new(seed)?.into(),
            GeneratorKind::SplitMix64 => SplitMix64::new(seed).into(),
            GeneratorKind::Xoshiro256StarStar => Xoshiro256StarStar::new(seed)?.into(),
            GeneratorKind::SplittableRandom => SplittableRandom::new(seed).into(),
            GeneratorKind::ChaCha20 => ChaCha20::new(seed).into(),
        })
    }

    /// Construct a generator of this kind from the process-wide default
    /// seed sequence.
    pub fn unseeded(self) -> AnyGenerator {
        match self {
            GeneratorKind::LinearCongruential => LinearCongruential::default().into(),
            GeneratorKind::SplitMix64 => SplitMix64::default().into(),
            GeneratorKind::Xoshiro256StarStar => Xoshiro256StarStar::default().into(),
            GeneratorKind::SplittableRandom => SplittableRandom::default().into(),
            GeneratorKind::ChaCha20 => ChaCha20::default().into(),
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GeneratorKind {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalized: String = input
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "lcg" | "linearcongruential" => Ok(GeneratorKind::LinearCongruential),
            "splitmix" | "splitmix64" => Ok(GeneratorKind::SplitMix64),
            "xoshiro" | "xoshiro256" | "xoshiro256starstar" | "xoshiro256**" => {
                Ok(GeneratorKind::Xoshiro256StarStar)
            }
            "splittable" | "splittablerandom" => Ok(GeneratorKind::SplittableRandom),
            "chacha" | "chacha20" => Ok(GeneratorKind::ChaCha20),
            _ => Err(format!(
                "Unknown generator kind '{}'; expected one of lcg, splitmix64, xoshiro, splittable, chacha20",
                input
            )),
        }
    }
}

/// One generator of any supported kind
///
/// # Example
/// ```
/// use seedstream_core_rs::rng::{Generator, GeneratorKind};
///
/// let mut rng = GeneratorKind::ChaCha20.seeded(1).unwrap();
/// assert_eq!(rng.kind(), GeneratorKind::ChaCha20);
/// assert_eq!(rng.generate(), -8183708576023727317);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyGenerator {
    LinearCongruential(LinearCongruential),
    SplitMix64(SplitMix64),
    Xoshiro256StarStar(Xoshiro256StarStar),
    SplittableRandom(SplittableRandom),
    ChaCha20(ChaCha20),
}

impl AnyGenerator {
    pub fn kind(&self) -> GeneratorKind {
        match self {
            AnyGenerator::LinearCongruential(_) => GeneratorKind::LinearCongruential,
            AnyGenerator::SplitMix64(_) => GeneratorKind::SplitMix64,
            AnyGenerator::Xoshiro256StarStar(_) => GeneratorKind::Xoshiro256StarStar,
            AnyGenerator::SplittableRandom(_) => GeneratorKind::SplittableRandom,
            AnyGenerator::ChaCha20(_) => GeneratorKind::ChaCha20,
        }
    }
}

impl Generator for AnyGenerator {
    fn generate(&mut self) -> i64 {
        match self {
            AnyGenerator::LinearCongruential(g) => g.generate(),
            AnyGenerator::SplitMix64(g) => g.generate(),
            AnyGenerator::Xoshiro256StarStar(g) => g.generate(),
            AnyGenerator::SplittableRandom(g) => g.generate(),
            AnyGenerator::ChaCha20(g) => g.generate(),
        }
    }
}

macro_rules! impl_from_generator {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for AnyGenerator {
                fn from(generator: $variant) -> Self {
                    AnyGenerator::$variant(generator)
                }
            }
        )*
    };
}

impl_from_generator!(
    LinearCongruential,
    SplitMix64,
    Xoshiro256StarStar,
    SplittableRandom,
    ChaCha20,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::AnySerializer;

    #[test]
    fn test_kind_parsing() {
        assert_eq!("lcg".parse::<GeneratorKind>(), Ok(GeneratorKind::LinearCongruential));
        assert_eq!("linear-congruential".parse::<GeneratorKind>(), Ok(GeneratorKind::LinearCongruential));
        assert_eq!("SplitMix64".parse::<GeneratorKind>(), Ok(GeneratorKind::SplitMix64));
        assert_eq!("xoshiro".parse::<GeneratorKind>(), Ok(GeneratorKind::Xoshiro256StarStar));
        assert_eq!("Xoshiro256**".parse::<GeneratorKind>(), Ok(GeneratorKind::Xoshiro256StarStar));
        assert_eq!("splittable_random".parse::<GeneratorKind>(), Ok(GeneratorKind::SplittableRandom));
        assert_eq!("CHACHA20".parse::<GeneratorKind>(), Ok(GeneratorKind::ChaCha20));
        assert!("mersenne".parse::<GeneratorKind>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for kind in GeneratorKind::ALL {
            assert_eq!(kind.to_string().parse::<GeneratorKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_seeded_matches_concrete_generator() {
        let mut any = GeneratorKind::SplittableRandom.seeded(1234).unwrap();
        let mut concrete = SplittableRandom::new(1234);
        for _ in 0..10 {
            assert_eq!(any.generate(), concrete.generate());
        }
    }

    #[test]
    fn test_seeded_zero_seed() {
        assert_eq!(
            GeneratorKind::LinearCongruential.seeded(0),
            Err(RngError::ZeroSeed)
        );
        assert_eq!(
            GeneratorKind::Xoshiro256StarStar.seeded(0),
            Err(RngError::ZeroSeed)
        );
        assert!(GeneratorKind::SplitMix64.seeded(0).is_ok());
        assert!(GeneratorKind::ChaCha20.seeded(0).is_ok());
    }

    #[test]
    fn test_state_size_matches_serializer() {
        for kind in GeneratorKind::ALL {
            let generator = kind.seeded(1).unwrap();
            assert_eq!(
                kind.state_size(),
                AnySerializer::new(kind).expected_size(&generator).unwrap(),
                "{} state size disagrees with its serializer",
                kind
            );
        }
        assert_eq!(GeneratorKind::ChaCha20.state_size(), 64);
        assert_eq!(GeneratorKind::SplitMix64.state_size(), 8);
    }

    #[test]
    fn test_unseeded_has_requested_kind() {
        for kind in GeneratorKind::ALL {
            assert_eq!(kind.unseeded().kind(), kind);
        }
    }
}
