//! SplittableRandom (Steele, Lea & Flood, "Fast Splittable Pseudorandom
//! Number Generators")
//!
//! State is a `seed` advanced by an odd `gamma`; output is the Murmur3
//! finalizer of the seed. [`SplittableRandom::split`] derives a child with a
//! fresh seed *and* a fresh gamma, so children do not share a stream with the
//! parent or with each other.
//!
//! # Default seeding
//!
//! `SplittableRandom::default()` draws from one process-wide counter. The
//! counter is initialized once, on first use, from the wall clock and is never
//! reset. Every default construction atomically advances it by
//! `2 * GOLDEN_GAMMA` with a lock-free compare-and-swap loop, so concurrent
//! constructions always observe distinct values.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use super::splitmix64::{mix64_variant13, GOLDEN_GAMMA};
use super::Generator;

/// Gamma values whose adjacent-bit transitions reach this count are
/// considered too regular and are flipped with an alternating pattern.
const GAMMA_TRANSITION_LIMIT: u32 = 24;

static DEFAULT_GEN: OnceLock<AtomicU64> = OnceLock::new();

/// Atomically add `delta` to the process-wide counter and return the new
/// value.
fn advance_default_gen(delta: u64) -> u64 {
    let counter = DEFAULT_GEN.get_or_init(|| {
        let initial = initial_seed();
        log::trace!("default seed counter initialized to {:#018x}", initial);
        AtomicU64::new(initial)
    });

    let mut current = counter.load(Ordering::Relaxed);
    loop {
        let next = current.wrapping_add(delta);
        match counter.compare_exchange_weak(current, next, Ordering::AcqRel, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(observed) => current = observed,
        }
    }
}

fn initial_seed() -> u64 {
    // A clock before the epoch still yields a usable (if fixed) seed
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(GOLDEN_GAMMA)
}

/// Seed for the `Default` impls of the other generators.
pub(crate) fn fresh_seed() -> u64 {
    SplittableRandom::default().generate() as u64
}

/// Murmur3 64-bit finalizer.
#[inline]
fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 33)).wrapping_mul(0xff51afd7ed558ccd);
    z = (z ^ (z >> 33)).wrapping_mul(0xc4ceb9fe1a85ec53);
    z ^ (z >> 33)
}

/// Derive an odd gamma with a bounded number of bit transitions.
fn mix_gamma(z: u64) -> u64 {
    let z = mix64_variant13(z) | 1;
    if (z ^ (z >> 1)).count_ones() >= GAMMA_TRANSITION_LIMIT {
        z ^ 0xaaaaaaaaaaaaaaaa
    } else {
        z
    }
}

/// Splittable generator
///
/// # Example
/// ```
/// use seedstream_core_rs::rng::{Generator, SplittableRandom};
///
/// let mut root = SplittableRandom::new(1);
/// assert_eq!(root.generate(), -1874130600990937387);
///
/// // Hand an independent stream to a worker
/// let mut child = root.split();
/// assert_ne!(child.generate(), root.generate());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplittableRandom {
    seed: u64,
    gamma: u64,
}

impl SplittableRandom {
    /// Create a generator with the golden-ratio gamma.
    pub fn new(seed: u64) -> Self {
        Self::from_parts(seed, GOLDEN_GAMMA)
    }

    pub(crate) fn from_parts(seed: u64, gamma: u64) -> Self {
        Self { seed, gamma }
    }

    pub(crate) fn seed(&self) -> u64 {
        self.seed
    }

    pub(crate) fn gamma(&self) -> u64 {
        self.gamma
    }

    /// Derive an independent child generator, advancing this one twice.
    pub fn split(&mut self) -> Self {
        let seed = mix64(self.next_seed());
        let gamma = mix_gamma(self.next_seed());
        Self::from_parts(seed, gamma)
    }

    #[inline]
    fn next_seed(&mut self) -> u64 {
        self.seed = self.seed.wrapping_add(self.gamma);
        self.seed
    }
}

impl Default for SplittableRandom {
    fn default() -> Self {
        let s = advance_default_gen(GOLDEN_GAMMA.wrapping_mul(2));
        Self::from_parts(mix64(s), mix_gamma(s.wrapping_add(GOLDEN_GAMMA)))
    }
}

impl Generator for SplittableRandom {
    #[inline]
    fn generate(&mut self) -> i64 {
        mix64(self.next_seed()) as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_golden_sequences() {
        let cases = [
            (1u64, -1874130600990937387i64, -1706819287460639110i64),
            (1234, -460151231511528161, -8217047239040255225),
            (2619692, -7578984719245052296, 2883906529479494349),
        ];

        for (seed, first, second) in cases {
            let mut rng = SplittableRandom::new(seed);
            assert_eq!(rng.generate(), first, "seed {}", seed);
            assert_eq!(rng.generate(), second, "seed {}", seed);
        }
    }

    #[test]
    fn test_mix_gamma_is_always_odd() {
        let mut source = SplittableRandom::new(77);
        for _ in 0..10_000 {
            assert_eq!(mix_gamma(source.generate() as u64) & 1, 1);
        }
    }

    #[test]
    fn test_mix_gamma_bounds_transitions() {
        let mut source = SplittableRandom::new(3);
        for _ in 0..10_000 {
            let gamma = mix_gamma(source.generate() as u64);
            // A flipped gamma has its transition count mirrored around 32
            let transitions = (gamma ^ (gamma >> 1)).count_ones();
            assert!(transitions <= 40, "gamma {:#x} has {} transitions", gamma, transitions);
        }
    }

    #[test]
    fn test_split_advances_parent_twice() {
        let mut parent = SplittableRandom::new(10);
        let before = parent.seed();
        let child = parent.split();

        assert_eq!(parent.seed(), before.wrapping_add(GOLDEN_GAMMA.wrapping_mul(2)));
        assert_eq!(child.seed(), mix64(before.wrapping_add(GOLDEN_GAMMA)));
        assert_eq!(child.gamma() & 1, 1);
    }

    #[test]
    fn test_default_counter_yields_distinct_generators() {
        let states: HashSet<(u64, u64)> = (0..1000)
            .map(|_| {
                let rng = SplittableRandom::default();
                (rng.seed(), rng.gamma())
            })
            .collect();
        assert_eq!(states.len(), 1000);
    }

    #[test]
    fn test_advance_default_gen_returns_new_value() {
        let a = advance_default_gen(0);
        let b = advance_default_gen(16);
        assert_ne!(a, b);
    }
}
