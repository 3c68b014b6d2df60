//! Random UUID generation.
//!
//! A [`UuidGenerator`] owns a seeded RNG behind a mutex, so any number of
//! threads can share one generator without outside locking. The
//! process-wide instance behind [`make_uuid`] is seeded from OS entropy on
//! first use and lives for the rest of the process.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{LazyLock, Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::debug;
use uuid::Builder;

use crate::Uint128;

/// Process-wide generator used by [`make_uuid`].
static GENERATOR: LazyLock<UuidGenerator> = LazyLock::new(|| {
    debug!("seeding process-wide UUID generator from OS entropy");
    UuidGenerator::from_os_rng()
});

/// Thread-safe source of random, UUID-marked identifiers.
#[derive(Debug)]
pub struct UuidGenerator {
    rng: Mutex<StdRng>,
    generated: AtomicU64,
}

impl UuidGenerator {
    /// Creates a generator seeded from the operating system's entropy.
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Creates a generator with a fixed seed.
    ///
    /// Two generators built from the same seed yield the same sequence,
    /// which makes tests and simulations reproducible.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
            generated: AtomicU64::new(0),
        }
    }

    /// Generates a new identifier marked as a version 4 UUID.
    ///
    /// The result always satisfies [`Uint128::is_uuid`] and is never the
    /// null identifier.
    pub fn generate(&self) -> Uint128 {
        let mut bytes = [0u8; 16];
        {
            // RNG state stays valid across a poisoning panic
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            rng.fill_bytes(&mut bytes);
        }
        self.generated.fetch_add(1, Ordering::Relaxed);

        Uint128::from(Builder::from_random_bytes(bytes).into_uuid())
    }

    /// Returns how many identifiers this generator has issued.
    pub fn generated(&self) -> u64 {
        self.generated.load(Ordering::Relaxed)
    }
}

impl Default for UuidGenerator {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

/// Generates a random UUID from the process-wide generator.
///
/// Safe to call concurrently from any number of threads.
#[must_use]
pub fn make_uuid() -> Uint128 {
    GENERATOR.generate()
}

impl Uint128 {
    /// Generates a random UUID.
    ///
    /// Same as [`make_uuid`].
    #[must_use]
    pub fn new_uuid() -> Self {
        make_uuid()
    }
}
