//! One serializer per generator

use super::codec::MAX_WORDS;
use super::{private::Sealed, StateSerializer};
use crate::rng::{ChaCha20, LinearCongruential, SplitMix64, SplittableRandom, Xoshiro256StarStar};

/// 8 bytes: `state`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearCongruentialSerializer;

impl Sealed for LinearCongruentialSerializer {}

impl StateSerializer for LinearCongruentialSerializer {
    type Generator = LinearCongruential;
    const WORDS: usize = 1;

    fn encode(&self, generator: &LinearCongruential, words: &mut [u64; MAX_WORDS]) {
        words[0] = generator.state();
    }

    fn decode(&self, words: &[u64; MAX_WORDS]) -> LinearCongruential {
        LinearCongruential::from_state(words[0])
    }
}

/// 8 bytes: `state`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitMix64Serializer;

impl Sealed for SplitMix64Serializer {}

impl StateSerializer for SplitMix64Serializer {
    type Generator = SplitMix64;
    const WORDS: usize = 1;

    fn encode(&self, generator: &SplitMix64, words: &mut [u64; MAX_WORDS]) {
        words[0] = generator.state();
    }

    fn decode(&self, words: &[u64; MAX_WORDS]) -> SplitMix64 {
        SplitMix64::new(words[0])
    }
}

/// 32 bytes: `s0, s1, s2, s3`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Xoshiro256StarStarSerializer;

impl Sealed for Xoshiro256StarStarSerializer {}

impl StateSerializer for Xoshiro256StarStarSerializer {
    type Generator = Xoshiro256StarStar;
    const WORDS: usize = 4;

    fn encode(&self, generator: &Xoshiro256StarStar, words: &mut [u64; MAX_WORDS]) {
        words[..4].copy_from_slice(&generator.words());
    }

    fn decode(&self, words: &[u64; MAX_WORDS]) -> Xoshiro256StarStar {
        Xoshiro256StarStar::from_words([words[0], words[1], words[2], words[3]])
    }
}

/// 16 bytes: `seed, gamma`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplittableRandomSerializer;

impl Sealed for SplittableRandomSerializer {}

impl StateSerializer for SplittableRandomSerializer {
    type Generator = SplittableRandom;
    const WORDS: usize = 2;

    fn encode(&self, generator: &SplittableRandom, words: &mut [u64; MAX_WORDS]) {
        words[0] = generator.seed();
        words[1] = generator.gamma();
    }

    fn decode(&self, words: &[u64; MAX_WORDS]) -> SplittableRandom {
        SplittableRandom::from_parts(words[0], words[1])
    }
}

/// 64 bytes: the 16 key words as 8 pairs, high word first
///
/// The cache is not written; reading rebuilds it from the counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChaCha20Serializer;

impl Sealed for ChaCha20Serializer {}

impl StateSerializer for ChaCha20Serializer {
    type Generator = ChaCha20;
    const WORDS: usize = 8;

    fn encode(&self, generator: &ChaCha20, words: &mut [u64; MAX_WORDS]) {
        for (word, pair) in words.iter_mut().zip(generator.key().chunks_exact(2)) {
            *word = ((pair[0] as u64) << 32) | pair[1] as u64;
        }
    }

    fn decode(&self, words: &[u64; MAX_WORDS]) -> ChaCha20 {
        let mut key = [0u32; 16];
        for (pair, word) in key.chunks_exact_mut(2).zip(words.iter()) {
            pair[0] = (word >> 32) as u32;
            pair[1] = *word as u32;
        }
        ChaCha20::from_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Generator;

    #[test]
    fn test_expected_sizes() {
        assert_eq!(
            LinearCongruentialSerializer.expected_size(&LinearCongruential::new(1).unwrap()),
            8
        );
        assert_eq!(SplitMix64Serializer.expected_size(&SplitMix64::new(1)), 8);
        assert_eq!(
            Xoshiro256StarStarSerializer.expected_size(&Xoshiro256StarStar::new(1).unwrap()),
            32
        );
        assert_eq!(
            SplittableRandomSerializer.expected_size(&SplittableRandom::new(1)),
            16
        );
        assert_eq!(ChaCha20Serializer.expected_size(&ChaCha20::new(1)), 64);
    }

    #[test]
    fn test_lcg_layout() {
        let mut buffer = [0u8; 8];
        let written = LinearCongruentialSerializer
            .write_to_buffer(&LinearCongruential::new(1).unwrap(), &mut buffer)
            .unwrap();
        assert_eq!(written, 8);
        assert_eq!(buffer, 1u64.to_be_bytes());
    }

    #[test]
    fn test_chacha_pairs_high_word_first() {
        let generator = ChaCha20::new(1);
        let mut words = [0u64; 8];
        ChaCha20Serializer.encode(&generator, &mut words);
        assert_eq!(words[0], 0x61707865_3320646e);
        assert_eq!(words[2], 0x00000001_00000000);
        assert_eq!(words[6] >> 32, 0, "counter starts at zero");
    }

    #[test]
    fn test_short_layouts_ignore_trailing_words() {
        let words = [1, 2, 3, 4, 99, 99, 99, 99];
        let mut restored = Xoshiro256StarStarSerializer.decode(&words);
        let mut expected = Xoshiro256StarStar::from_words([1, 2, 3, 4]);
        assert_eq!(restored.generate(), expected.generate());

        let mut padded = [u64::MAX; MAX_WORDS];
        SplittableRandomSerializer.encode(&SplittableRandom::from_parts(7, 9), &mut padded);
        assert_eq!(padded[..2], [7, 9]);
        assert!(padded[2..].iter().all(|w| *w == u64::MAX), "encode wrote past its layout");

        let mut single = [0u64; MAX_WORDS];
        single[0] = 1;
        assert_eq!(LinearCongruentialSerializer.decode(&single).state(), 1);
    }

    /// Records the size of every `write` call it receives.
    struct CallLog(Vec<usize>);

    impl std::io::Write for CallLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.push(buf.len());
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_stream_write_is_one_call_per_layout() {
        let mut log = CallLog(Vec::new());
        ChaCha20Serializer
            .write_to_stream(&ChaCha20::new(1), &mut log)
            .unwrap();
        Xoshiro256StarStarSerializer
            .write_to_stream(&Xoshiro256StarStar::new(1).unwrap(), &mut log)
            .unwrap();
        assert_eq!(log.0, vec![64, 32]);
    }

    #[test]
    fn test_chacha_decode_inverts_encode_mid_block() {
        let mut generator = ChaCha20::new(31337);
        for _ in 0..5 {
            generator.generate();
        }

        let mut words = [0u64; 8];
        ChaCha20Serializer.encode(&generator, &mut words);
        let mut restored = ChaCha20Serializer.decode(&words);

        assert_eq!(restored.key(), generator.key());
        for _ in 0..20 {
            assert_eq!(restored.generate(), generator.generate());
        }
    }
}
