//! The 128-bit identifier value type.
//!
//! A [`Uint128`] is a `(high, low)` pair of 64-bit words representing
//! `high * 2^64 + low`. Fields are declared high-word first so the derived
//! ordering is lexicographic with the high word dominating.

use std::ops::{Add, AddAssign, Sub, SubAssign};

use uuid::{Uuid, Variant, Version};

/// A 128-bit unsigned integer used as an identifier.
///
/// # Reserved UUID bits
///
/// Values produced by [`make_uuid`](crate::make_uuid) follow the RFC-4122
/// version 4 layout when the value is read as 16 big-endian bytes
/// (`high` first):
///
/// ```text
/// high: bits 12..=15  version  = 0b0100
/// low:  bits 62..=63  variant  = 0b10
/// ```
///
/// [`Uint128::is_uuid`] checks exactly these bits. The version nibble is
/// non-zero, so a UUID is never the null identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Uint128 {
    high: u64,
    low: u64,
}

impl Uint128 {
    /// The null identifier `(0, 0)`.
    pub const ZERO: Self = Self::new(0, 0);

    /// Mask of the version nibble inside the high word.
    pub const VERSION_MASK: u64 = 0xF000;

    /// Version 4 pattern inside the high word.
    pub const VERSION_RANDOM: u64 = 0x4000;

    /// Mask of the variant bits inside the low word.
    pub const VARIANT_MASK: u64 = 0xC000_0000_0000_0000;

    /// RFC-4122 variant pattern inside the low word.
    pub const VARIANT_RFC4122: u64 = 0x8000_0000_0000_0000;

    /// Creates an identifier from its two words.
    #[must_use]
    pub const fn new(high: u64, low: u64) -> Self {
        Self { high, low }
    }

    /// Creates an identifier from a high word and a signed 32-bit low word.
    ///
    /// The low word is sign-extended: `from_mixed(7, -1)` has
    /// `low() == u64::MAX`.
    #[must_use]
    pub const fn from_mixed(high: u64, low: i32) -> Self {
        Self::new(high, low as i64 as u64)
    }

    /// Returns the high-order word.
    #[must_use]
    pub const fn high(&self) -> u64 {
        self.high
    }

    /// Returns the low-order word.
    #[must_use]
    pub const fn low(&self) -> u64 {
        self.low
    }

    /// Returns true for the null identifier.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.high == 0 && self.low == 0
    }

    /// Returns true if the reserved version and variant bits mark this value
    /// as a random UUID.
    #[must_use]
    pub fn is_uuid(&self) -> bool {
        let uuid = Uuid::from(*self);
        uuid.get_version() == Some(Version::Random) && uuid.get_variant() == Variant::RFC4122
    }

    /// Increments in place, carrying into the high word, and returns the
    /// new value.
    pub fn increment(&mut self) -> Self {
        *self += 1;
        *self
    }

    /// Decrements in place, borrowing from the high word, and returns the
    /// new value.
    pub fn decrement(&mut self) -> Self {
        *self -= 1;
        *self
    }

    /// Increments in place and returns the previous value.
    pub fn fetch_increment(&mut self) -> Self {
        let previous = *self;
        *self += 1;
        previous
    }

    /// Decrements in place and returns the previous value.
    pub fn fetch_decrement(&mut self) -> Self {
        let previous = *self;
        *self -= 1;
        previous
    }
}

// =============================================================================
// Arithmetic
// =============================================================================

impl Add<u64> for Uint128 {
    type Output = Self;

    fn add(self, rhs: u64) -> Self {
        let (low, carry) = self.low.overflowing_add(rhs);
        Self::new(self.high.wrapping_add(u64::from(carry)), low)
    }
}

impl Sub<u64> for Uint128 {
    type Output = Self;

    fn sub(self, rhs: u64) -> Self {
        let (low, borrow) = self.low.overflowing_sub(rhs);
        Self::new(self.high.wrapping_sub(u64::from(borrow)), low)
    }
}

impl AddAssign<u64> for Uint128 {
    fn add_assign(&mut self, rhs: u64) {
        *self = *self + rhs;
    }
}

impl SubAssign<u64> for Uint128 {
    fn sub_assign(&mut self, rhs: u64) {
        *self = *self - rhs;
    }
}

// =============================================================================
// Conversions
// =============================================================================

macro_rules! from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Uint128 {
                fn from(value: $ty) -> Self {
                    Self::new(0, u64::from(value))
                }
            }
        )*
    };
}

macro_rules! from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Uint128 {
                /// Sign-extends the value into the low word.
                fn from(value: $ty) -> Self {
                    Self::new(0, i64::from(value) as u64)
                }
            }
        )*
    };
}

from_unsigned!(u8, u16, u32, u64);
from_signed!(i8, i16, i32, i64);

impl From<(u64, u64)> for Uint128 {
    fn from((high, low): (u64, u64)) -> Self {
        Self::new(high, low)
    }
}

impl From<(u64, i32)> for Uint128 {
    fn from((high, low): (u64, i32)) -> Self {
        Self::from_mixed(high, low)
    }
}

impl From<u128> for Uint128 {
    fn from(value: u128) -> Self {
        Self::new((value >> 64) as u64, value as u64)
    }
}

impl From<Uint128> for u128 {
    fn from(id: Uint128) -> Self {
        (u128::from(id.high) << 64) | u128::from(id.low)
    }
}

impl From<Uuid> for Uint128 {
    fn from(uuid: Uuid) -> Self {
        let (high, low) = uuid.as_u64_pair();
        Self::new(high, low)
    }
}

impl From<Uint128> for Uuid {
    fn from(id: Uint128) -> Self {
        Uuid::from_u64_pair(id.high, id.low)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_is_zero() {
        let id = Uint128::default();
        assert_eq!(id, Uint128::ZERO);
        assert!(id.is_zero());
        assert!(!id.is_uuid());
    }

    #[test]
    fn test_accessors() {
        let id = Uint128::new(2314, 1212);
        assert_eq!(id.high(), 2314);
        assert_eq!(id.low(), 1212);

        let copy = id;
        assert_eq!(copy, id);
    }

    #[test]
    fn test_from_mixed_sign_extends() {
        let id = Uint128::from_mixed(0xABCD, -1);
        assert_eq!(id.high(), 0xABCD);
        assert_eq!(id.low(), u64::MAX);

        let id = Uint128::from_mixed(0xABCD, i32::MIN);
        assert_eq!(id.low(), 0xFFFF_FFFF_8000_0000);

        let id = Uint128::from_mixed(3, 42);
        assert_eq!(id.low(), 42);

        assert_eq!(Uint128::from((3u64, -2i32)), Uint128::new(3, u64::MAX - 1));
    }

    #[test]
    fn test_from_narrow_integers() {
        assert_eq!(Uint128::from(-1i32), Uint128::new(0, u64::MAX));
        assert_eq!(Uint128::from(-1i8), Uint128::new(0, u64::MAX));
        assert_eq!(Uint128::from(u32::MAX), Uint128::new(0, 0xFFFF_FFFF));
        assert_eq!(Uint128::from(0xFFu8), Uint128::new(0, 0xFF));
        assert_eq!(Uint128::from(7u64), Uint128::new(0, 7));
    }

    #[test]
    fn test_increment_carry() {
        let mut id = Uint128::new(0, 0);
        assert_eq!(id.increment(), Uint128::new(0, 1));
        assert_eq!(id.decrement(), Uint128::new(0, 0));

        let mut id = Uint128::new(0, u64::MAX);
        id.increment();
        assert_eq!(id, Uint128::new(1, 0));
        id.decrement();
        assert_eq!(id, Uint128::new(0, u64::MAX));
    }

    #[test]
    fn test_add_sub_match_increment() {
        let start = Uint128::new(0, u64::MAX);
        let mut inc = start;
        inc.increment();
        assert_eq!(start + 1, inc);
        assert_eq!(inc - 1, start);

        let zero = Uint128::ZERO;
        assert_eq!(zero + 1, Uint128::new(0, 1));
        assert_eq!((zero + 1) - 1, zero);
    }

    #[test]
    fn test_fetch_returns_previous() {
        let mut id = Uint128::new(5, u64::MAX);
        let previous = id.fetch_increment();
        assert_eq!(previous, Uint128::new(5, u64::MAX));
        assert_eq!(id, Uint128::new(6, 0));

        let previous = id.fetch_decrement();
        assert_eq!(previous, Uint128::new(6, 0));
        assert_eq!(id, Uint128::new(5, u64::MAX));
    }

    #[test]
    fn test_wraparound_is_defined() {
        let max = Uint128::new(u64::MAX, u64::MAX);
        assert_eq!(max + 1, Uint128::ZERO);
        assert_eq!(Uint128::ZERO - 1, max);

        let mut id = Uint128::new(0, 10);
        id -= 11;
        assert_eq!(id, max);
        id += 2;
        assert_eq!(id, Uint128::new(0, 1));
    }

    #[test]
    fn test_ordering() {
        let a = Uint128::new(0, 0);
        let b = Uint128::new(0, 1);
        let c = Uint128::new(1, 0);
        assert!(a < b);
        assert!(b < c);
        assert!(a < c);
        assert!(Uint128::new(1, 0) > Uint128::new(0, u64::MAX));
    }

    #[test]
    fn test_u128_conversion() {
        let id = Uint128::new(0xD41D8CD98F00B204, 0xE9800998ECF8427E);
        let wide = u128::from(id);
        assert_eq!(wide, 0xD41D8CD98F00B204_E9800998ECF8427E);
        assert_eq!(Uint128::from(wide), id);
    }

    #[test]
    fn test_uuid_conversion_is_big_endian() {
        let id = Uint128::new(0x0011223344556677, 0x8899AABBCCDDEEFF);
        let uuid = Uuid::from(id);
        assert_eq!(uuid.to_string(), "00112233-4455-6677-8899-aabbccddeeff");
        assert_eq!(Uint128::from(uuid), id);
    }

    #[test]
    fn test_is_uuid_checks_reserved_bits() {
        let marked = Uint128::new(0x1234_5678_9ABC_4DEF, 0x8123_4567_89AB_CDEF);
        assert!(marked.is_uuid());

        // Wrong version nibble.
        assert!(!Uint128::new(0x1234_5678_9ABC_3DEF, 0x8123_4567_89AB_CDEF).is_uuid());
        // Wrong variant.
        assert!(!Uint128::new(0x1234_5678_9ABC_4DEF, 0xC123_4567_89AB_CDEF).is_uuid());

        assert_eq!(marked.high() & Uint128::VERSION_MASK, Uint128::VERSION_RANDOM);
        assert_eq!(marked.low() & Uint128::VARIANT_MASK, Uint128::VARIANT_RFC4122);
    }

    proptest! {
        #[test]
        fn prop_add_matches_u128(high: u64, low: u64, rhs: u64) {
            let id = Uint128::new(high, low);
            let expected = u128::from(id).wrapping_add(u128::from(rhs));
            prop_assert_eq!(u128::from(id + rhs), expected);
        }

        #[test]
        fn prop_sub_matches_u128(high: u64, low: u64, rhs: u64) {
            let id = Uint128::new(high, low);
            let expected = u128::from(id).wrapping_sub(u128::from(rhs));
            prop_assert_eq!(u128::from(id - rhs), expected);
        }

        #[test]
        fn prop_ordering_matches_u128(a: u128, b: u128) {
            prop_assert_eq!(Uint128::from(a).cmp(&Uint128::from(b)), a.cmp(&b));
        }

        #[test]
        fn prop_increment_then_decrement(high: u64, low: u64) {
            let start = Uint128::new(high, low);
            let mut id = start;
            id.increment();
            prop_assert_eq!(id, start + 1);
            id.decrement();
            prop_assert_eq!(id, start);
        }
    }
}
