//! FFI (Foreign Function Interface) module
//!
//! PyO3 bindings exposing the generators to Python.
//!
//! # Design Principles
//!
//! 1. **Minimal boundary**: one `Generator` class wrapping [`crate::rng::AnyGenerator`]
//! 2. **Simple types**: kinds and states cross as strings, values as ints/floats
//! 3. **Safe errors**: every Rust error becomes a Python `ValueError`

pub mod generator;
