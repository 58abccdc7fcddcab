//! Combined two-stream 64-bit PCG generator
//!
//! Concatenates the outputs of two independent [`Stream32`] instances: stream
//! A supplies the high 32 bits of each draw, stream B the low 32 bits. Both
//! streams always advance in lock-step, one internal step per draw.
//!
//! # Properties
//!
//! - Period: 2^64
//! - Statistical quality: passes TestU01 BigCrush and PractRand
//! - Not cryptographically secure
//!
//! # Determinism
//!
//! Same four seed words → same sequence on every platform. Byte-based seeding
//! reads the words little-endian.

use std::convert::Infallible;

use rand_core::{impls, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use super::source::{fill_from_draws, DrawSource, FillSource};
use super::stream::Stream32;
use super::RngError;
use crate::entropy::{EntropyError, OsEntropy};

/// Low 63 bits: the part of a sequence id that reaches the increment
const SEQUENCE_MASK: u64 = !0 >> 1;

/// Number of seed bytes consumed by [`Generator64::seed_from_bytes`]
pub const SEED_BYTES: usize = 32;

/// 64-bit PCG generator built from two 32-bit streams
///
/// # Example
/// ```
/// use pcg_core_rs::Generator64;
///
/// let mut rng = Generator64::with_seeds(42, 42, 54, 54);
/// assert_eq!(rng.next(), 0xa15c02b71a410f65);
///
/// rng.advance(-1);
/// assert_eq!(rng.next(), 0xa15c02b71a410f65);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GeneratorParts")]
pub struct Generator64 {
    /// High half of each draw
    stream_a: Stream32,
    /// Low half of each draw
    stream_b: Stream32,
}

/// Deserialized form of a generator, checked for a shared stream
#[derive(Deserialize)]
struct GeneratorParts {
    stream_a: Stream32,
    stream_b: Stream32,
}

impl TryFrom<GeneratorParts> for Generator64 {
    type Error = RngError;

    fn try_from(parts: GeneratorParts) -> Result<Self, Self::Error> {
        if parts.stream_a.increment() == parts.stream_b.increment() {
            return Err(RngError::SharedStream(parts.stream_a.increment()));
        }
        Ok(Self {
            stream_a: parts.stream_a,
            stream_b: parts.stream_b,
        })
    }
}

impl Default for Generator64 {
    fn default() -> Self {
        // Unseeded constants, with stream B tie-broken like a seeded generator
        let stream_a = Stream32::new();
        let stream_b = stream_a.complemented();
        Self { stream_a, stream_b }
    }
}

impl Generator64 {
    /// Create a generator holding the default (unseeded) constants
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator seeded by value
    pub fn with_seeds(seed1: u64, seed2: u64, seq1: u64, seq2: u64) -> Self {
        let mut rng = Self::new();
        rng.seed(seed1, seed2, seq1, seq2);
        rng
    }

    /// Create a generator seeded from four draws of `source`
    pub fn from_source<S: DrawSource + ?Sized>(source: &mut S) -> Self {
        let mut rng = Self::new();
        rng.seed_from(source);
        rng
    }

    /// Create a generator seeded from operating system entropy
    ///
    /// # Errors
    /// Returns [`EntropyError::Os`] if the OS source is unavailable.
    pub fn from_entropy() -> Result<Self, EntropyError> {
        let mut rng = Self::new();
        rng.seed_from_fill(&mut OsEntropy)?;
        Ok(rng)
    }

    /// Seed both streams by value
    ///
    /// If `seq1` and `seq2` agree in their low 63 bits, `seq2` is replaced by
    /// its complement so the two streams never share an increment.
    pub fn seed(&mut self, seed1: u64, seed2: u64, seq1: u64, seq2: u64) {
        let distinct_seq2 = if seq1 & SEQUENCE_MASK == seq2 & SEQUENCE_MASK {
            !seq2
        } else {
            seq2
        };

        self.stream_a.seed(seed1, seq1);
        self.stream_b.seed(seed2, distinct_seq2);
    }

    /// Seed from four sequential draws, taken as `(seed1, seed2, seq1, seq2)`
    pub fn seed_from<S: DrawSource + ?Sized>(&mut self, source: &mut S) {
        let seed1 = source.next_u64();
        let seed2 = source.next_u64();
        let seq1 = source.next_u64();
        let seq2 = source.next_u64();
        self.seed(seed1, seed2, seq1, seq2);
    }

    /// Seed from a single 32-byte fill of `source`
    ///
    /// Produces the same state as [`seed_from`](Self::seed_from) when the
    /// bytes are the little-endian encoding of the same four draws.
    ///
    /// # Errors
    /// Propagates the source's error; the generator is left unchanged.
    pub fn seed_from_fill<S: FillSource + ?Sized>(&mut self, source: &mut S) -> Result<(), S::Error> {
        let mut bytes = [0u8; SEED_BYTES];
        source.fill_bytes(&mut bytes)?;
        self.seed_from_bytes(bytes);
        Ok(())
    }

    /// Seed from 32 bytes read as four little-endian words
    pub fn seed_from_bytes(&mut self, bytes: [u8; SEED_BYTES]) {
        let mut words = [0u64; 4];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(chunk);
            *word = u64::from_le_bytes(buf);
        }
        let [seed1, seed2, seq1, seq2] = words;
        self.seed(seed1, seed2, seq1, seq2);
    }

    /// Generate the next 64-bit value
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u64 {
        (u64::from(self.stream_a.next()) << 32) | u64::from(self.stream_b.next())
    }

    /// Jump both streams forwards or backwards by `steps` draws
    ///
    /// `steps` is taken modulo 2^64.
    pub fn advance(&mut self, steps: i64) {
        self.stream_a.advance(steps);
        self.stream_b.advance(steps);
    }

    /// Borrow the two underlying streams as `(high, low)`
    pub fn streams(&self) -> (&Stream32, &Stream32) {
        (&self.stream_a, &self.stream_b)
    }
}

impl DrawSource for Generator64 {
    fn next_u64(&mut self) -> u64 {
        self.next()
    }
}

impl FillSource for Generator64 {
    type Error = Infallible;

    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Infallible> {
        fill_from_draws(self, dest);
        Ok(())
    }
}

impl RngCore for Generator64 {
    fn next_u32(&mut self) -> u32 {
        (self.next() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        RngCore::fill_bytes(self, dest);
        Ok(())
    }
}

impl SeedableRng for Generator64 {
    type Seed = [u8; SEED_BYTES];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut rng = Self::new();
        rng.seed_from_bytes(seed);
        rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_sequences_are_tie_broken() {
        let rng = Generator64::with_seeds(1, 1, 54, 54);
        let (a, b) = rng.streams();
        assert_ne!(a.increment(), b.increment());
        assert_eq!(b.increment(), (!54u64 << 1) | 1);
    }

    #[test]
    fn test_sequences_equal_modulo_top_bit_are_tie_broken() {
        let seq = 0x1234_5678u64;
        let rng = Generator64::with_seeds(1, 1, seq, seq | (1 << 63));
        let (a, b) = rng.streams();
        assert_ne!(a.increment(), b.increment());
    }

    #[test]
    fn test_distinct_sequences_left_alone() {
        let rng = Generator64::with_seeds(1, 1, 54, 55);
        let (_, b) = rng.streams();
        assert_eq!(b.increment(), (55u64 << 1) | 1);
    }

    #[test]
    fn test_next_concatenates_streams() {
        let rng = Generator64::with_seeds(9, 10, 11, 12);
        let (a, b) = rng.streams();
        let (mut a, mut b) = (a.clone(), b.clone());

        let mut rng = rng;
        let expected = (u64::from(a.next()) << 32) | u64::from(b.next());
        assert_eq!(rng.next(), expected);
    }

    #[test]
    fn test_next_u32_is_high_half() {
        let mut rng = Generator64::with_seeds(9, 10, 11, 12);
        let mut copy = rng.clone();
        assert_eq!(RngCore::next_u32(&mut rng), (copy.next() >> 32) as u32);
    }

    #[test]
    fn test_from_seed_matches_seed_from_bytes() {
        let mut bytes = [0u8; SEED_BYTES];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        let mut manual = Generator64::new();
        manual.seed_from_bytes(bytes);
        assert_eq!(Generator64::from_seed(bytes), manual);
    }

    #[test]
    fn test_default_streams_are_distinct() {
        let rng = Generator64::new();
        let (a, b) = rng.streams();
        assert_eq!(a, &Stream32::new());
        assert_eq!(b.state(), a.state());
        assert_ne!(b.increment(), a.increment());
    }
}
