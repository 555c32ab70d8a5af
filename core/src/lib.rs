//! Seedstream Core - deterministic pseudo-random generators
//!
//! Reproducible random streams whose state can be saved and resumed
//! bit-for-bit.
//!
//! # Architecture
//!
//! - **rng**: The [`rng::Generator`] capability and five generators
//! - **serialization**: Fixed big-endian state layouts and base64 text
//! - **checkpoint**: JSON snapshots tagged with the generator kind
//! - **config**: Serde-friendly generator selection
//!
//! # Critical Invariants
//!
//! 1. Same seed produces the same sequence, on every platform
//! 2. Ranged values are unbiased (rejection sampling, never modulo)
//! 3. A deserialized generator continues exactly where the serialized one stopped
//!
//! # Example
//! ```
//! use seedstream_core_rs::{AnySerializer, Generator, GeneratorKind};
//!
//! let mut rng = GeneratorKind::Xoshiro256StarStar.seeded(98326).unwrap();
//! let roll = rng.generate_in_range(1, 6).unwrap();
//! assert!((1..=6).contains(&roll));
//!
//! let serializer = AnySerializer::for_generator(&rng);
//! let saved = serializer.write_to_base64_string(&rng).unwrap();
//! let mut resumed = serializer.read_from_base64_string(&saved).unwrap();
//! assert_eq!(resumed.generate(), rng.generate());
//! ```

// Module declarations
pub mod checkpoint;
pub mod config;
pub mod rng;
pub mod serialization;

// Re-exports for convenience
pub use checkpoint::{CheckpointError, GeneratorSnapshot};
pub use config::GeneratorConfig;
pub use rng::{
    AnyGenerator, ChaCha20, Generator, GeneratorKind, LinearCongruential, RngError, SplitMix64,
    SplittableRandom, Xoshiro256StarStar,
};
pub use serialization::{AnySerializer, SerializationError, StateSerializer};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn seedstream_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::generator::PyGenerator>()?;
    Ok(())
}
