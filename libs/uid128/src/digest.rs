//! Content-hash (name-based) identifiers.

use crate::Uint128;

/// Hashes arbitrary bytes into an identifier.
///
/// The MD5 digest is read big-endian: bytes `0..8` become the high word and
/// bytes `8..16` the low word. Equal inputs always give equal identifiers.
/// The result is not marked as a UUID.
#[must_use]
pub fn make_uint128(data: impl AsRef<[u8]>) -> Uint128 {
    let digest = md5::compute(data.as_ref());
    Uint128::from(u128::from_be_bytes(digest.0))
}

impl Uint128 {
    /// Creates the content-hash identifier of `data`.
    ///
    /// Same as [`make_uint128`].
    #[must_use]
    pub fn from_content(data: impl AsRef<[u8]>) -> Self {
        make_uint128(data)
    }
}
