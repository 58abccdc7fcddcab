//! Generator configuration
//!
//! A small serde document describing how to build a [`Generator64`]:
//!
//! ```json
//! { "seed": { "seed1": 42, "seed2": 42, "seq1": 54, "seq2": 54 }, "skip": 0 }
//! ```
//!
//! Omitting `seed` seeds from OS entropy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entropy::EntropyError;
use crate::rng::Generator64;

/// Errors raised while loading or applying a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid generator config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Entropy error: {0}")]
    Entropy(#[from] EntropyError),
}

/// Explicit seed words, in `Generator64::seed` order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    pub seed1: u64,
    pub seed2: u64,
    pub seq1: u64,
    pub seq2: u64,
}

/// How to construct a generator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Explicit seed; `None` means OS entropy
    #[serde(default)]
    pub seed: Option<SeedConfig>,

    /// Draws to jump over after seeding (negative jumps back)
    #[serde(default)]
    pub skip: i64,
}

impl GeneratorConfig {
    /// Parse a JSON configuration
    ///
    /// # Example
    /// ```
    /// use pcg_core_rs::GeneratorConfig;
    ///
    /// let config = GeneratorConfig::from_json(
    ///     r#"{"seed": {"seed1": 42, "seed2": 42, "seq1": 54, "seq2": 54}}"#,
    /// ).unwrap();
    /// let mut rng = config.build().unwrap();
    /// assert_eq!(rng.next(), 0xa15c02b71a410f65);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a generator from this configuration
    ///
    /// # Errors
    /// Returns [`ConfigError::Entropy`] when no seed is given and OS entropy
    /// is unavailable.
    pub fn build(&self) -> Result<Generator64, ConfigError> {
        let mut rng = match self.seed {
            Some(s) => Generator64::with_seeds(s.seed1, s.seed2, s.seq1, s.seq2),
            None => Generator64::from_entropy()?,
        };
        rng.advance(self.skip);
        Ok(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_defaults() {
        let config = GeneratorConfig::from_json("{}").unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert!(config.build().is_ok());
    }

    #[test]
    fn test_skip_applied_after_seeding() {
        let config = GeneratorConfig {
            seed: Some(SeedConfig {
                seed1: 1,
                seed2: 2,
                seq1: 3,
                seq2: 4,
            }),
            skip: 5,
        };
        let mut expected = Generator64::with_seeds(1, 2, 3, 4);
        for _ in 0..5 {
            expected.next();
        }
        assert_eq!(config.build().unwrap(), expected);
    }

    #[test]
    fn test_malformed_config_rejected() {
        let err = GeneratorConfig::from_json(r#"{"seed": {"seed1": 1}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
