//! The process-wide random source.
//!
//! [`Card::random`](crate::Card::random) and [`Deck::shuffle`](crate::Deck::shuffle)
//! draw from a single [`ChaCha8Rng`] shared by the whole process. It is
//! created lazily on first use: from OS entropy when the `std` feature is
//! enabled, from a fixed seed otherwise. Call [`seed`] to make a run
//! reproducible.
//!
//! Without `std` there is no entropy source, so every run deals the same
//! sequence of shuffles and random cards until [`seed`] is called.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Used when no entropy source is available and `seed` was never called.
const FALLBACK_SEED: u64 = 1;

#[cfg(feature = "std")]
static SOURCE: std::sync::Mutex<Option<ChaCha8Rng>> = std::sync::Mutex::new(None);

#[cfg(all(not(feature = "std"), feature = "alloc"))]
static SOURCE: spin::Mutex<Option<ChaCha8Rng>> = spin::Mutex::new(None);

// Poisoning is ignored: the generator state is valid after any panic.
#[cfg(feature = "std")]
fn lock_source() -> std::sync::MutexGuard<'static, Option<ChaCha8Rng>> {
    SOURCE
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn lock_source() -> spin::MutexGuard<'static, Option<ChaCha8Rng>> {
    SOURCE.lock()
}

#[cfg(feature = "std")]
fn initial_source() -> ChaCha8Rng {
    ChaCha8Rng::try_from_os_rng().unwrap_or_else(|_| ChaCha8Rng::seed_from_u64(FALLBACK_SEED))
}

#[cfg(not(feature = "std"))]
fn initial_source() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(FALLBACK_SEED)
}

/// Reseeds the process-wide random source.
///
/// ```
/// use decksim::{Deck, rng};
///
/// rng::seed(7);
/// let mut first = Deck::new();
/// first.shuffle();
///
/// rng::seed(7);
/// let mut second = Deck::new();
/// second.shuffle();
///
/// assert_eq!(first.cards(), second.cards());
/// ```
pub fn seed(seed: u64) {
    *lock_source() = Some(ChaCha8Rng::seed_from_u64(seed));
}

/// Runs `f` with exclusive access to the process-wide source.
pub(crate) fn with_source<T>(f: impl FnOnce(&mut ChaCha8Rng) -> T) -> T {
    let mut source = lock_source();
    let rng = source.get_or_insert_with(initial_source);
    f(rng)
}
