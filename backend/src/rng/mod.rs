//! Deterministic random number generation
//!
//! Uses a 64-bit PCG built from two PCG-XSH-RR 32-bit streams.
//! CRITICAL: bit-exact output for a given seed is part of the contract.

mod generator;
mod shared;
mod source;
mod stream;

use thiserror::Error;

pub use generator::{Generator64, SEED_BYTES};
pub use shared::{is_shared_seeded, shared_advance, shared_next, with_shared};
pub use source::{DrawSource, FillSource};
pub use stream::{Stream32, MULTIPLIER};

/// Errors raised when rebuilding generator state from raw parts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RngError {
    #[error("Stream increment must be odd, got {0:#x}")]
    EvenIncrement(u64),

    #[error("Both generator streams share increment {0:#x}")]
    SharedStream(u64),
}
