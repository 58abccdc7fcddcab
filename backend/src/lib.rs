//! PCG Core - Rust Engine
//!
//! Deterministic 64-bit pseudo-random number generation built on the
//! Permuted Congruential Generator family.
//!
//! # Architecture
//!
//! - **rng**: Stream32, Generator64, seeding traits, thread-local instance
//! - **entropy**: OS and device entropy sources for seeding
//! - **config**: Serde configuration for building generators
//!
//! # Critical Invariants
//!
//! 1. Same seed words produce the same sequence on every platform
//! 2. Stream increments are always odd and the two streams never share one
//! 3. Both streams advance in lock-step
//! 4. Not cryptographically secure

// Module declarations
pub mod config;
pub mod entropy;
pub mod rng;

// Re-exports for convenience
pub use config::{ConfigError, GeneratorConfig, SeedConfig};
pub use entropy::{DeviceRandom, DeviceSource, EntropyError, OsEntropy};
pub use rng::{
    is_shared_seeded, shared_advance, shared_next, with_shared, DrawSource, FillSource,
    Generator64, RngError, Stream32, MULTIPLIER, SEED_BYTES,
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn pcg_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::generator::PyGenerator>()?;
    Ok(())
}
