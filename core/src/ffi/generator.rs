//! PyO3 wrapper for generators

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::rng::{AnyGenerator, Generator, GeneratorKind};
use crate::serialization::AnySerializer;

fn parse_kind(kind: &str) -> PyResult<GeneratorKind> {
    kind.parse::<GeneratorKind>().map_err(PyValueError::new_err)
}

fn value_error<E: std::fmt::Display>(err: E) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for any of the five generators
///
/// # Example (from Python)
///
/// ```python
/// from seedstream_core_rs import Generator
///
/// rng = Generator("chacha20", seed=1234)
/// rng.generate_in_range(1, 6)
/// saved = rng.to_base64()
///
/// resumed = Generator.from_base64("chacha20", saved)
/// assert resumed.generate() == rng.generate()
/// ```
#[pyclass(name = "Generator")]
pub struct PyGenerator {
    inner: AnyGenerator,
}

#[pymethods]
impl PyGenerator {
    /// Create a generator of `kind`
    ///
    /// # Arguments
    ///
    /// * `kind` - Generator name, e.g. `"lcg"`, `"xoshiro"`, `"chacha20"`
    /// * `seed` - Optional seed; omitted means process-time derived
    ///
    /// # Errors
    ///
    /// Raises ValueError for an unknown kind or a zero seed where the kind
    /// rejects it.
    #[new]
    #[pyo3(signature = (kind, seed=None))]
    fn new(kind: &str, seed: Option<u64>) -> PyResult<Self> {
        let kind = parse_kind(kind)?;
        let inner = match seed {
            Some(seed) => kind.seeded(seed).map_err(value_error)?,
            None => kind.unseeded(),
        };
        Ok(PyGenerator { inner })
    }

    /// Restore a generator saved with `to_base64`
    #[staticmethod]
    fn from_base64(kind: &str, data: &str) -> PyResult<Self> {
        let inner = AnySerializer::new(parse_kind(kind)?)
            .read_from_base64_string(data)
            .map_err(value_error)?;
        Ok(PyGenerator { inner })
    }

    #[getter]
    fn kind(&self) -> &'static str {
        self.inner.kind().name()
    }

    fn generate(&mut self) -> i64 {
        self.inner.generate()
    }

    fn generate_double(&mut self) -> f64 {
        self.inner.generate_double()
    }

    fn generate_in_range(&mut self, lower: i64, upper: i64) -> PyResult<i64> {
        self.inner
            .generate_in_range(lower, upper)
            .map_err(value_error)
    }

    fn generate_less_or_equal_to(&mut self, range: i64) -> PyResult<i64> {
        self.inner
            .generate_less_or_equal_to(range)
            .map_err(value_error)
    }

    /// Current state as standard base64
    fn to_base64(&self) -> PyResult<String> {
        AnySerializer::for_generator(&self.inner)
            .write_to_base64_string(&self.inner)
            .map_err(value_error)
    }

    fn __repr__(&self) -> String {
        format!("Generator(kind='{}')", self.inner.kind())
    }
}
