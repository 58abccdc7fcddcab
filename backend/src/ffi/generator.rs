//! PyO3 wrapper for Generator64
//!
//! This module provides the Python interface to the Rust generator.

use pyo3::prelude::*;

use crate::rng::Generator64;

/// Python wrapper for Rust Generator64
///
/// # Example (from Python)
///
/// ```python
/// from pcg_core_rs import Generator
///
/// rng = Generator.new(42, 42, 54, 54)
/// assert rng.next() == 0xA15C02B71A410F65
/// rng.advance(-1)
/// print(rng.take(4))
/// ```
#[pyclass(name = "Generator")]
pub struct PyGenerator {
    inner: Generator64,
}

#[pymethods]
impl PyGenerator {
    /// Create a generator seeded by value
    #[staticmethod]
    fn new(seed1: u64, seed2: u64, seq1: u64, seq2: u64) -> Self {
        PyGenerator {
            inner: Generator64::with_seeds(seed1, seed2, seq1, seq2),
        }
    }

    /// Create a generator seeded from OS entropy
    ///
    /// # Errors
    ///
    /// Raises RuntimeError if the OS entropy source is unavailable
    #[staticmethod]
    fn from_entropy() -> PyResult<Self> {
        let inner = Generator64::from_entropy().map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                "Failed to seed generator: {}",
                e
            ))
        })?;
        Ok(PyGenerator { inner })
    }

    /// Draw the next 64-bit value
    fn next(&mut self) -> u64 {
        self.inner.next()
    }

    /// Jump forwards or backwards by `steps` draws
    fn advance(&mut self, steps: i64) {
        self.inner.advance(steps);
    }

    /// Draw `n` values as a list
    fn take(&mut self, n: usize) -> Vec<u64> {
        (0..n).map(|_| self.inner.next()).collect()
    }
}
