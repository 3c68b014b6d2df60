//! Hashing identifiers as map keys.
//!
//! An identifier hashes as a single folded word, `high ^ low`. [`FoldHasher`]
//! passes that word through unchanged, which suits random UUIDs whose bits
//! are already uniformly distributed.

use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasherDefault, Hash, Hasher};

use crate::Uint128;

/// Hasher that returns the folded identifier word as the hash.
///
/// Writes other than a single `u64` are mixed in eight bytes at a time, so
/// the hasher stays usable for composite keys.
#[derive(Debug, Default, Clone, Copy)]
pub struct FoldHasher {
    state: u64,
}

impl Hasher for FoldHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for chunk in bytes.chunks(8) {
            let mut word = [0u8; 8];
            word[..chunk.len()].copy_from_slice(chunk);
            self.write_u64(u64::from_le_bytes(word));
        }
    }

    fn write_u64(&mut self, n: u64) {
        self.state = self.state.rotate_left(5) ^ n;
    }
}

/// `BuildHasher` for [`FoldHasher`].
pub type BuildFoldHasher = BuildHasherDefault<FoldHasher>;

/// Hash map keyed by identifiers.
pub type Uint128Map<V> = HashMap<Uint128, V, BuildFoldHasher>;

/// Hash set of identifiers.
pub type Uint128Set = HashSet<Uint128, BuildFoldHasher>;

impl Uint128 {
    /// Folds both words into one, `high ^ low`.
    #[must_use]
    pub const fn fold(&self) -> u64 {
        self.high() ^ self.low()
    }
}

impl Hash for Uint128 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.fold());
    }
}
