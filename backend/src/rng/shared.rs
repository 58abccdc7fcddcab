//! Per-thread shared generator
//!
//! Each thread lazily gets its own [`Generator64`], seeded exactly once from
//! [`OsEntropy`] on first access. Instances are never shared across threads,
//! so the generator itself needs no locking.
//!
//! Prefer an explicitly seeded `Generator64` wherever results must be
//! reproducible; this instance is for callers that just want good numbers.

use std::cell::RefCell;
use std::fmt::Display;

use log::{debug, error};

use super::generator::Generator64;
use super::source::FillSource;
use crate::entropy::OsEntropy;

thread_local! {
    static SHARED: RefCell<Option<Generator64>> = const { RefCell::new(None) };
}

fn seed_shared_instance() -> Generator64 {
    seed_or_abort(&mut OsEntropy)
}

/// Seed a fresh generator from `source`; failure is fatal
fn seed_or_abort<S>(source: &mut S) -> Generator64
where
    S: FillSource + ?Sized,
    S::Error: Display,
{
    let mut rng = Generator64::new();
    if let Err(e) = rng.seed_from_fill(source) {
        error!("Failed to seed thread-local generator: {}", e);
        panic!("cannot seed thread-local generator: {e}");
    }
    debug!(
        "Seeded thread-local generator for {:?}",
        std::thread::current().id()
    );
    rng
}

/// Run `f` against this thread's shared generator, seeding it on first use
///
/// # Panics
/// Panics if OS entropy is unavailable on first use, or if called
/// re-entrantly from inside `f`.
///
/// # Example
/// ```
/// use pcg_core_rs::with_shared;
///
/// let (a, b) = with_shared(|rng| (rng.next(), rng.next()));
/// # let _ = (a, b);
/// ```
pub fn with_shared<F, R>(f: F) -> R
where
    F: FnOnce(&mut Generator64) -> R,
{
    SHARED.with(|slot| {
        let mut slot = slot.borrow_mut();
        let rng = slot.get_or_insert_with(seed_shared_instance);
        f(rng)
    })
}

/// Draw one value from this thread's shared generator
pub fn shared_next() -> u64 {
    with_shared(|rng| rng.next())
}

/// Jump this thread's shared generator by `steps` draws
pub fn shared_advance(steps: i64) {
    with_shared(|rng| rng.advance(steps))
}

/// Whether this thread's shared generator has been seeded yet
///
/// Does not trigger seeding. Safe to call from inside [`with_shared`], where
/// it reports `true`.
pub fn is_shared_seeded() -> bool {
    // A live mutable borrow means with_shared is running, so the slot is filled
    SHARED.with(|slot| slot.try_borrow().map_or(true, |rng| rng.is_some()))
}
