//! Seeding capabilities
//!
//! A generator can be seeded from anything that either hands out 64-bit
//! values one at a time ([`DrawSource`]) or fills a byte buffer in one call
//! ([`FillSource`]). Both paths consume the same four words in the same order.

/// Sequential-draw capability: one `u64` per call
pub trait DrawSource {
    /// Produce the next 64-bit value
    fn next_u64(&mut self) -> u64;
}

/// Bulk-fill capability: fill a caller buffer in one call
///
/// Sources that cannot fail use [`std::convert::Infallible`] as their error.
pub trait FillSource {
    /// Error raised when the source cannot supply bytes
    type Error;

    /// Fill `dest` completely with random bytes
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Self::Error>;
}

impl<S: DrawSource + ?Sized> DrawSource for &mut S {
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }
}

impl<S: FillSource + ?Sized> FillSource for &mut S {
    type Error = S::Error;

    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Self::Error> {
        (**self).fill_bytes(dest)
    }
}

/// Fill `dest` from successive draws, little-endian, truncating the last word
pub(crate) fn fill_from_draws<S: DrawSource + ?Sized>(source: &mut S, dest: &mut [u8]) {
    for chunk in dest.chunks_mut(8) {
        let bytes = source.next_u64().to_le_bytes();
        chunk.copy_from_slice(&bytes[..chunk.len()]);
    }
}
