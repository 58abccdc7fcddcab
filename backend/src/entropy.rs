//! Entropy sources for seeding
//!
//! Two sources are provided:
//!
//! - [`OsEntropy`]: the operating system's generator via `getrandom`. This is
//!   the process-wide default used by the thread-local shared generator.
//! - [`DeviceRandom`]: reads a kernel random device directly, for callers who
//!   need to pick between `/dev/random` and `/dev/urandom`.
//!
//! Both implement [`FillSource`], so a seed costs one 32-byte read.

use std::fs::File;
use std::io::{self, Read};

use log::debug;
use thiserror::Error;

use crate::rng::FillSource;

/// Errors raised while acquiring entropy
#[derive(Debug, Error)]
pub enum EntropyError {
    #[error("Unable to open {path}: {source}")]
    Open {
        path: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("Unable to read {path}: {source}")]
    Read {
        path: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("OS entropy source unavailable: {0}")]
    Os(getrandom::Error),
}

/// Operating system entropy (`getrandom`)
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl FillSource for OsEntropy {
    type Error = EntropyError;

    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        getrandom::getrandom(dest).map_err(EntropyError::Os)
    }
}

/// Kernel random device to read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceSource {
    /// `/dev/random`: may block until the kernel pool is initialised
    Random,
    /// `/dev/urandom`: non-blocking
    Urandom,
}

impl DeviceSource {
    /// Filesystem path of the device
    pub fn path(self) -> &'static str {
        match self {
            DeviceSource::Random => "/dev/random",
            DeviceSource::Urandom => "/dev/urandom",
        }
    }
}

/// Reader over a kernel random device
///
/// The file handle is closed when the value is dropped.
///
/// # Example
/// ```no_run
/// use pcg_core_rs::{DeviceRandom, DeviceSource, Generator64};
///
/// let mut device = DeviceRandom::open(DeviceSource::Urandom)?;
/// let mut rng = Generator64::new();
/// rng.seed_from_fill(&mut device)?;
/// # Ok::<(), pcg_core_rs::EntropyError>(())
/// ```
#[derive(Debug)]
pub struct DeviceRandom {
    source: DeviceSource,
    file: File,
}

impl DeviceRandom {
    /// Open `source` for reading
    ///
    /// # Errors
    /// Returns [`EntropyError::Open`] if the device cannot be opened.
    pub fn open(source: DeviceSource) -> Result<Self, EntropyError> {
        let path = source.path();
        let file = File::open(path).map_err(|source| EntropyError::Open { path, source })?;
        debug!("Opened entropy device {}", path);
        Ok(Self { source, file })
    }

    /// Which device this reader is attached to
    pub fn source(&self) -> DeviceSource {
        self.source
    }

    /// Read one 64-bit value, little-endian
    pub fn try_next_u64(&mut self) -> Result<u64, EntropyError> {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf)?;
        Ok(u64::from_le_bytes(buf))
    }
}

impl FillSource for DeviceRandom {
    type Error = EntropyError;

    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.file.read_exact(dest).map_err(|source| EntropyError::Read {
            path: self.source.path(),
            source,
        })
    }
}
