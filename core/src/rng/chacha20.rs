//! ChaCha20 block function used as a stream generator
//!
//! The 16-word ChaCha state doubles as the generator state:
//!
//! | words  | content                                              |
//! |--------|------------------------------------------------------|
//! | 0..4   | "expand 32-byte k" constants                         |
//! | 4..12  | seed, low/high halves repeated four times            |
//! | 12     | output counter; `counter / 8` is the block number    |
//! | 13..16 | nonce, three draws of a [`LinearCongruential`]       |
//!
//! One block yields 16 words = 8 outputs, so the block function runs once
//! every 8 calls and `counter % 8` is the cursor into the cached block.
//! After `2^16 + 7` outputs the generator reseeds itself from its last
//! output, bounding how long one key is used.

use super::{splittable, Generator, LinearCongruential};

const ROUNDS: usize = 20;
const BLOCK_WORDS: usize = 16;
const OUTPUTS_PER_BLOCK: u32 = 8;
const COUNTER: usize = 12;
const RESEED_THRESHOLD: u32 = (1 << 16) + 7;

/// Substitute for a zero seed, which would leave the nonce LCG unseedable.
const ZERO_SEED_REPLACEMENT: u64 = 0x2654633dc37cc394;

const CONSTANTS: [u32; 4] = [0x61707865, 0x3320646e, 0x79622d32, 0x6b206574];

#[inline(always)]
fn quarter_round(x: &mut [u32; BLOCK_WORDS], a: usize, b: usize, c: usize, d: usize) {
    x[a] = x[a].wrapping_add(x[b]);
    x[d] = (x[d] ^ x[a]).rotate_left(16);
    x[c] = x[c].wrapping_add(x[d]);
    x[b] = (x[b] ^ x[c]).rotate_left(12);
    x[a] = x[a].wrapping_add(x[b]);
    x[d] = (x[d] ^ x[a]).rotate_left(8);
    x[c] = x[c].wrapping_add(x[d]);
    x[b] = (x[b] ^ x[c]).rotate_left(7);
}

/// 20-round ChaCha block with feed-forward.
fn chacha_block(input: &[u32; BLOCK_WORDS]) -> [u32; BLOCK_WORDS] {
    let mut x = *input;

    for _ in 0..ROUNDS / 2 {
        // Columns
        quarter_round(&mut x, 0, 4, 8, 12);
        quarter_round(&mut x, 1, 5, 9, 13);
        quarter_round(&mut x, 2, 6, 10, 14);
        quarter_round(&mut x, 3, 7, 11, 15);

        // Diagonals
        quarter_round(&mut x, 0, 5, 10, 15);
        quarter_round(&mut x, 1, 6, 11, 12);
        quarter_round(&mut x, 2, 7, 8, 13);
        quarter_round(&mut x, 3, 4, 9, 14);
    }

    for (word, original) in x.iter_mut().zip(input.iter()) {
        *word = word.wrapping_add(*original);
    }
    x
}

fn initial_key(seed: u64) -> [u32; BLOCK_WORDS] {
    let seed = if seed == 0 { ZERO_SEED_REPLACEMENT } else { seed };

    let mut key = [0u32; BLOCK_WORDS];
    key[..4].copy_from_slice(&CONSTANTS);
    for pair in key[4..COUNTER].chunks_exact_mut(2) {
        pair[0] = seed as u32;
        pair[1] = (seed >> 32) as u32;
    }
    key[COUNTER] = 0;

    let mut nonce = LinearCongruential::from_state(seed);
    for word in &mut key[COUNTER + 1..] {
        *word = nonce.generate() as u32;
    }
    key
}

/// ChaCha20-based generator
///
/// # Example
/// ```
/// use seedstream_core_rs::rng::{ChaCha20, Generator};
///
/// let mut rng = ChaCha20::new(1);
/// assert_eq!(rng.generate(), -8183708576023727317);
/// assert_eq!(rng.generate(), -6446727672260194149);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChaCha20 {
    key: [u32; BLOCK_WORDS],
    /// Block `key[12] / 8`; stale whenever `key[12] % 8 == 0`.
    cache: [u32; BLOCK_WORDS],
}

impl ChaCha20 {
    /// Create a generator from a 64-bit seed. A zero seed is replaced by a
    /// fixed non-zero constant.
    pub fn new(seed: u64) -> Self {
        Self {
            key: initial_key(seed),
            cache: [0; BLOCK_WORDS],
        }
    }

    /// Resume from a raw key array, possibly captured mid-block.
    ///
    /// When the counter is not a multiple of 8 the cached block is rebuilt so
    /// the next output continues at the right cursor.
    pub(crate) fn from_key(key: [u32; BLOCK_WORDS]) -> Self {
        let mut generator = Self {
            key,
            cache: [0; BLOCK_WORDS],
        };
        if generator.key[COUNTER] % OUTPUTS_PER_BLOCK != 0 {
            generator.refresh_cache();
        }
        generator
    }

    pub(crate) fn key(&self) -> &[u32; BLOCK_WORDS] {
        &self.key
    }

    /// Run the block function for block `counter / 8`, leaving the counter
    /// untouched.
    fn refresh_cache(&mut self) {
        let counter = self.key[COUNTER];
        self.key[COUNTER] = counter / OUTPUTS_PER_BLOCK;
        self.cache = chacha_block(&self.key);
        self.key[COUNTER] = counter;
    }
}

impl Default for ChaCha20 {
    fn default() -> Self {
        Self::new(splittable::fresh_seed())
    }
}

impl Generator for ChaCha20 {
    fn generate(&mut self) -> i64 {
        let cursor = (self.key[COUNTER] % OUTPUTS_PER_BLOCK) as usize;
        if cursor == 0 {
            self.refresh_cache();
        }
        self.key[COUNTER] = self.key[COUNTER].wrapping_add(1);

        let high = self.cache[2 * cursor] as u64;
        let low = self.cache[2 * cursor + 1] as u64;
        let result = (high << 32) | low;

        if self.key[COUNTER] >= RESEED_THRESHOLD {
            log::debug!("ChaCha20 reached {} outputs, reseeding", RESEED_THRESHOLD);
            *self = Self::new(result);
        }
        result as i64
    }
}
