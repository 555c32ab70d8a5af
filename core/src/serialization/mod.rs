//! Bit-exact generator state serialization
//!
//! Each generator has a stateless serializer mapping its words to a fixed
//! big-endian layout:
//!
//! | Generator            | Bytes | Layout                                  |
//! |----------------------|-------|-----------------------------------------|
//! | `LinearCongruential` | 8     | `state`                                 |
//! | `SplitMix64`         | 8     | `state`                                 |
//! | `Xoshiro256StarStar` | 32    | `s0, s1, s2, s3`                        |
//! | `SplittableRandom`   | 16    | `seed, gamma`                           |
//! | `ChaCha20`           | 64    | key words paired, high word first       |
//!
//! Reading produces a new generator whose future output is identical to
//! the one that was written. Reads and writes are all-or-nothing.
//!
//! # Example
//! ```
//! use seedstream_core_rs::rng::{Generator, Xoshiro256StarStar};
//! use seedstream_core_rs::serialization::{StateSerializer, Xoshiro256StarStarSerializer};
//!
//! let mut rng = Xoshiro256StarStar::new(98326).unwrap();
//! rng.generate();
//!
//! let serializer = Xoshiro256StarStarSerializer;
//! let mut buffer = [0u8; 32];
//! serializer.write_to_buffer(&rng, &mut buffer).unwrap();
//!
//! let (mut restored, read) = serializer.read_from_buffer(&buffer).unwrap();
//! assert_eq!(read, 32);
//! assert_eq!(restored.generate(), rng.generate());
//! ```

mod any;
pub mod codec;
mod generators;

pub use any::AnySerializer;
pub use generators::{
    ChaCha20Serializer, LinearCongruentialSerializer, SplitMix64Serializer,
    SplittableRandomSerializer, Xoshiro256StarStarSerializer,
};

use std::io::{Read, Write};

use thiserror::Error;

use crate::rng::GeneratorKind;
use codec::{MAX_WORDS, WORD_SIZE};

/// Errors that can occur while writing or reading generator state
#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("{serializer} serializer cannot handle {actual} generators")]
    TypeMismatch {
        serializer: GeneratorKind,
        actual: GeneratorKind,
    },

    #[error("Buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid base64 state: {0}")]
    Base64(#[from] base64::DecodeError),
}

mod private {
    pub trait Sealed {}
}

/// Serializer for one generator type
///
/// Implementors describe the layout with [`StateSerializer::WORDS`],
/// [`StateSerializer::encode`] and [`StateSerializer::decode`]; the buffer
/// and stream operations are provided. The trait is sealed: the five
/// serializers in this module are the only implementors.
pub trait StateSerializer: private::Sealed {
    type Generator;

    /// Number of 64-bit words in the layout (at most [`MAX_WORDS`]).
    const WORDS: usize;

    /// Copy the generator's state into the first `WORDS` entries of `words`.
    /// Later entries are left untouched.
    fn encode(&self, generator: &Self::Generator, words: &mut [u64; MAX_WORDS]);

    /// Rebuild a generator from the first `WORDS` entries of `words`.
    /// Later entries are ignored.
    fn decode(&self, words: &[u64; MAX_WORDS]) -> Self::Generator;

    /// Size in bytes needed to serialize `generator`
    fn expected_size(&self, _generator: &Self::Generator) -> usize {
        Self::WORDS * WORD_SIZE
    }

    /// Write the state to the front of `buffer`, returning bytes written.
    ///
    /// # Errors
    /// [`SerializationError::BufferTooSmall`] if `buffer` is shorter than
    /// [`StateSerializer::expected_size`]; nothing is written in that case.
    fn write_to_buffer(
        &self,
        generator: &Self::Generator,
        buffer: &mut [u8],
    ) -> Result<usize, SerializationError> {
        let mut words = [0u64; MAX_WORDS];
        self.encode(generator, &mut words);
        codec::encode_words(&words[..Self::WORDS], buffer)
    }

    /// Write the state to `target` with a single `write_all` of the whole
    /// layout.
    fn write_to_stream<W: Write + ?Sized>(
        &self,
        generator: &Self::Generator,
        target: &mut W,
    ) -> Result<(), SerializationError> {
        let mut words = [0u64; MAX_WORDS];
        self.encode(generator, &mut words);
        codec::write_words(&words[..Self::WORDS], target)
    }

    /// Read a generator from the front of `buffer`, returning it with the
    /// number of bytes consumed. Trailing bytes are ignored.
    fn read_from_buffer(
        &self,
        buffer: &[u8],
    ) -> Result<(Self::Generator, usize), SerializationError> {
        let mut words = [0u64; MAX_WORDS];
        let read = codec::decode_words(buffer, &mut words[..Self::WORDS])?;
        Ok((self.decode(&words), read))
    }

    /// Read exactly one layout from `source`.
    ///
    /// # Errors
    /// [`SerializationError::Io`] with `UnexpectedEof` if the stream ends
    /// before the layout is complete.
    fn read_from_stream<R: Read + ?Sized>(
        &self,
        source: &mut R,
    ) -> Result<Self::Generator, SerializationError> {
        let mut words = [0u64; MAX_WORDS];
        codec::read_words(source, &mut words[..Self::WORDS])?;
        Ok(self.decode(&words))
    }
}
