//! Single 32-bit PCG stream (PCG-XSH-RR 64/32)
//!
//! A 64-bit linear congruential state permuted down to 32 bits of output.
//!
//! # Algorithm
//!
//! - State update: `state = state * MULTIPLIER + increment (mod 2^64)`
//! - Output: xorshift the high bits down, then rotate right by the top
//!   5 bits of the same state (XSH-RR)
//!
//! The increment must be odd. Distinct odd increments select distinct,
//! non-overlapping streams, each with period 2^64.

use serde::{Deserialize, Serialize};

use super::RngError;

/// LCG multiplier shared by every stream
pub const MULTIPLIER: u64 = 0x5851_f42d_4c95_7f2d;

const DEFAULT_STATE: u64 = 0x853c_49e6_748f_ea9b;
const DEFAULT_INCREMENT: u64 = 0xda3e_39cb_94b9_5bdb;

/// One 32-bit PCG state machine
///
/// # Example
/// ```
/// use pcg_core_rs::Stream32;
///
/// let mut stream = Stream32::new();
/// stream.seed(42, 54);
/// let value: u32 = stream.next();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StreamParts", into = "StreamParts")]
pub struct Stream32 {
    /// Current LCG state
    state: u64,
    /// Additive constant, always odd
    increment: u64,
}

/// Serialized form of a stream, validated on the way back in
#[derive(Serialize, Deserialize)]
struct StreamParts {
    state: u64,
    increment: u64,
}

impl TryFrom<StreamParts> for Stream32 {
    type Error = RngError;

    fn try_from(parts: StreamParts) -> Result<Self, Self::Error> {
        Stream32::from_parts(parts.state, parts.increment)
    }
}

impl From<Stream32> for StreamParts {
    fn from(stream: Stream32) -> Self {
        Self {
            state: stream.state,
            increment: stream.increment,
        }
    }
}

impl Default for Stream32 {
    fn default() -> Self {
        Self::new()
    }
}

impl Stream32 {
    /// Create a stream holding the fixed default constants
    pub fn new() -> Self {
        Self {
            state: DEFAULT_STATE,
            increment: DEFAULT_INCREMENT,
        }
    }

    /// Rebuild a stream from a raw state and increment
    ///
    /// # Errors
    /// Returns [`RngError::EvenIncrement`] if `increment` is even.
    ///
    /// # Example
    /// ```
    /// use pcg_core_rs::Stream32;
    ///
    /// assert!(Stream32::from_parts(1, 3).is_ok());
    /// assert!(Stream32::from_parts(1, 4).is_err());
    /// ```
    pub fn from_parts(state: u64, increment: u64) -> Result<Self, RngError> {
        if increment & 1 == 0 {
            return Err(RngError::EvenIncrement(increment));
        }
        Ok(Self { state, increment })
    }

    /// Seed the stream
    ///
    /// The top bit of `init_seq` is shifted out when forming the odd
    /// increment, so only its low 63 bits select a stream.
    pub fn seed(&mut self, init_state: u64, init_seq: u64) {
        self.state = 0;
        self.increment = (init_seq << 1) | 1;
        self.step();
        self.state = self.state.wrapping_add(init_state);
        self.step();
    }

    /// Generate the next 32-bit output
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u32 {
        // Output is computed from the pre-step state
        let old_state = self.state;
        self.step();

        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rotation = (old_state >> 59) as u32;
        xorshifted.rotate_right(rotation)
    }

    /// Jump the stream forwards (or backwards, for negative `steps`)
    ///
    /// Runs in O(log |steps|) using F. Brown, "Random Number Generation with
    /// Arbitrary Stride" (1994). The count is taken modulo the period 2^64,
    /// so `advance(-n)` equals `advance(2^64 - n)`.
    ///
    /// # Example
    /// ```
    /// use pcg_core_rs::Stream32;
    ///
    /// let mut stepped = Stream32::new();
    /// let mut jumped = stepped.clone();
    /// for _ in 0..100 {
    ///     stepped.next();
    /// }
    /// jumped.advance(100);
    /// assert_eq!(stepped, jumped);
    /// ```
    pub fn advance(&mut self, steps: i64) {
        let mut cur_mult = MULTIPLIER;
        let mut cur_plus = self.increment;
        let mut acc_mult: u64 = 1;
        let mut acc_plus: u64 = 0;

        let mut delta = steps as u64;
        while delta > 0 {
            if delta & 1 != 0 {
                acc_mult = acc_mult.wrapping_mul(cur_mult);
                acc_plus = acc_plus.wrapping_mul(cur_mult).wrapping_add(cur_plus);
            }
            cur_plus = cur_mult.wrapping_add(1).wrapping_mul(cur_plus);
            cur_mult = cur_mult.wrapping_mul(cur_mult);
            delta >>= 1;
        }

        self.state = acc_mult.wrapping_mul(self.state).wrapping_add(acc_plus);
    }

    /// Same state, on the stream whose sequence id is the complement of ours
    pub(super) fn complemented(&self) -> Self {
        Self {
            state: self.state,
            increment: !self.increment | 1,
        }
    }

    /// Current raw LCG state
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Current increment (always odd)
    pub fn increment(&self) -> u64 {
        self.increment
    }

    fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(self.increment);
    }
}
