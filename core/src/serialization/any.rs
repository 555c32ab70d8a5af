//! Serializer bound to a [`GeneratorKind`] instead of a generator type

use std::io::{Read, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use super::{
    ChaCha20Serializer, LinearCongruentialSerializer, SerializationError, SplitMix64Serializer,
    SplittableRandomSerializer, StateSerializer, Xoshiro256StarStarSerializer,
};
use crate::rng::{AnyGenerator, GeneratorKind};

/// Run `$body` with the typed serializer and generator when the generator's
/// variant matches `$kind`, otherwise fail with a type mismatch.
macro_rules! dispatch {
    ($kind:expr, $generator:expr, |$serializer:ident, $inner:ident| $body:expr) => {
        match ($kind, $generator) {
            (GeneratorKind::LinearCongruential, AnyGenerator::LinearCongruential($inner)) => {
                let $serializer = LinearCongruentialSerializer;
                $body
            }
            (GeneratorKind::SplitMix64, AnyGenerator::SplitMix64($inner)) => {
                let $serializer = SplitMix64Serializer;
                $body
            }
            (GeneratorKind::Xoshiro256StarStar, AnyGenerator::Xoshiro256StarStar($inner)) => {
                let $serializer = Xoshiro256StarStarSerializer;
                $body
            }
            (GeneratorKind::SplittableRandom, AnyGenerator::SplittableRandom($inner)) => {
                let $serializer = SplittableRandomSerializer;
                $body
            }
            (GeneratorKind::ChaCha20, AnyGenerator::ChaCha20($inner)) => {
                let $serializer = ChaCha20Serializer;
                $body
            }
            (serializer, other) => Err(SerializationError::TypeMismatch {
                serializer,
                actual: other.kind(),
            }),
        }
    };
}

/// Capability-erased serializer
///
/// Works on [`AnyGenerator`] and rejects generators of a different kind
/// than the one it was created for.
///
/// # Example
/// ```
/// use seedstream_core_rs::rng::{Generator, GeneratorKind, LinearCongruential};
/// use seedstream_core_rs::serialization::AnySerializer;
///
/// let serializer = AnySerializer::new(GeneratorKind::LinearCongruential);
/// let generator = LinearCongruential::new(1).unwrap().into();
///
/// let text = serializer.write_to_base64_string(&generator).unwrap();
/// assert_eq!(text, "AAAAAAAAAAE=");
///
/// let mut restored = serializer.read_from_base64_string(&text).unwrap();
/// assert_eq!(restored.generate(), -288103957898298394);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnySerializer {
    kind: GeneratorKind,
}

impl AnySerializer {
    pub fn new(kind: GeneratorKind) -> Self {
        Self { kind }
    }

    /// Serializer matching `generator`'s own kind
    pub fn for_generator(generator: &AnyGenerator) -> Self {
        Self::new(generator.kind())
    }

    pub fn kind(&self) -> GeneratorKind {
        self.kind
    }

    pub fn expected_size(&self, generator: &AnyGenerator) -> Result<usize, SerializationError> {
        dispatch!(self.kind, generator, |serializer, inner| Ok(
            serializer.expected_size(inner)
        ))
    }

    pub fn write_to_buffer(
        &self,
        generator: &AnyGenerator,
        buffer: &mut [u8],
    ) -> Result<usize, SerializationError> {
        dispatch!(self.kind, generator, |serializer, inner| serializer
            .write_to_buffer(inner, buffer))
    }

    pub fn write_to_stream<W: Write + ?Sized>(
        &self,
        generator: &AnyGenerator,
        target: &mut W,
    ) -> Result<(), SerializationError> {
        dispatch!(self.kind, generator, |serializer, inner| serializer
            .write_to_stream(inner, target))
    }

    pub fn read_from_buffer(
        &self,
        buffer: &[u8],
    ) -> Result<(AnyGenerator, usize), SerializationError> {
        fn erase<G: Into<AnyGenerator>>(
            read: Result<(G, usize), SerializationError>,
        ) -> Result<(AnyGenerator, usize), SerializationError> {
            read.map(|(generator, count)| (generator.into(), count))
        }

        match self.kind {
            GeneratorKind::LinearCongruential => {
                erase(LinearCongruentialSerializer.read_from_buffer(buffer))
            }
            GeneratorKind::SplitMix64 => erase(SplitMix64Serializer.read_from_buffer(buffer)),
            GeneratorKind::Xoshiro256StarStar => {
                erase(Xoshiro256StarStarSerializer.read_from_buffer(buffer))
            }
            GeneratorKind::SplittableRandom => {
                erase(SplittableRandomSerializer.read_from_buffer(buffer))
            }
            GeneratorKind::ChaCha20 => erase(ChaCha20Serializer.read_from_buffer(buffer)),
        }
    }

    pub fn read_from_stream<R: Read + ?Sized>(
        &self,
        source: &mut R,
    ) -> Result<AnyGenerator, SerializationError> {
        Ok(match self.kind {
            GeneratorKind::LinearCongruential => {
                LinearCongruentialSerializer.read_from_stream(source)?.into()
            }
            GeneratorKind::SplitMix64 => SplitMix64Serializer.read_from_stream(source)?.into(),
            GeneratorKind::Xoshiro256StarStar => {
                Xoshiro256StarStarSerializer.read_from_stream(source)?.into()
            }
            GeneratorKind::SplittableRandom => {
                SplittableRandomSerializer.read_from_stream(source)?.into()
            }
            GeneratorKind::ChaCha20 => ChaCha20Serializer.read_from_stream(source)?.into(),
        })
    }

    pub fn write_to_byte_array(
        &self,
        generator: &AnyGenerator,
    ) -> Result<Vec<u8>, SerializationError> {
        let mut bytes = vec![0u8; self.expected_size(generator)?];
        self.write_to_buffer(generator, &mut bytes)?;
        Ok(bytes)
    }

    /// Standard base64 (with padding) of [`AnySerializer::write_to_byte_array`]
    pub fn write_to_base64_string(
        &self,
        generator: &AnyGenerator,
    ) -> Result<String, SerializationError> {
        Ok(STANDARD.encode(self.write_to_byte_array(generator)?))
    }

    pub fn read_from_byte_array(&self, bytes: &[u8]) -> Result<AnyGenerator, SerializationError> {
        self.read_from_buffer(bytes).map(|(generator, _)| generator)
    }

    pub fn read_from_base64_string(&self, text: &str) -> Result<AnyGenerator, SerializationError> {
        let bytes = STANDARD.decode(text)?;
        self.read_from_byte_array(&bytes)
    }
}
