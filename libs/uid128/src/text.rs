//! Canonical text form and parsing.
//!
//! Identifiers render as `0x{high:x}:0x{low:x}`. Parsing comes in two
//! flavours:
//!
//! - [`Uint128::parse`] is total. Hex text is decoded, and anything else is
//!   hashed into an identifier with [`make_uint128`]. It never fails.
//! - [`Uint128::parse_canonical`] accepts only the canonical grammar and
//!   reports an [`IdError`] otherwise.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::{make_uint128, IdError, Uint128};

/// Escaped colon accepted as a separator by the total parser.
const ESCAPED_COLON: &str = "\\058";

/// Longest hex token that fits in a 64-bit word.
const MAX_TOKEN_DIGITS: usize = 16;

impl Uint128 {
    /// Parses an identifier from text. Parsing never fails.
    ///
    /// Accepted numeric forms:
    ///
    /// - `""` is the null identifier
    /// - `0x<hex>` sets the low word, the high word is 0
    /// - `0x<hex><sep>0x<hex>` sets both words, where `<sep>` is any single
    ///   character that is not a hex digit (`:` by convention, NUL works
    ///   too) or the escaped colon `\058`
    ///
    /// Each token holds 1 to 16 hex digits and the prefix may be `0x` or
    /// `0X`. Any other input is treated as opaque content and hashed, so
    /// `Uint128::parse(s) == make_uint128(s)` for non-numeric `s`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        if s.is_empty() {
            return Self::ZERO;
        }

        match scan(s, Separator::Lenient) {
            Ok(id) => id,
            Err(err) => {
                trace!(error = %err, len = s.len(), "identifier text is not hex, hashing content");
                make_uint128(s)
            }
        }
    }

    /// Parses an identifier strictly in canonical form.
    ///
    /// Accepts `0x<hex>` or `0x<hex>:0x<hex>` and nothing else.
    pub fn parse_canonical(s: &str) -> Result<Self, IdError> {
        if s.is_empty() {
            return Err(IdError::Empty);
        }
        scan(s, Separator::Colon)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Separator {
    /// Only `:` separates the words.
    Colon,
    /// Any single non-hex character, or the escaped colon.
    Lenient,
}

fn scan(s: &str, separator: Separator) -> Result<Uint128, IdError> {
    let (first, end) = read_token(s, 0)?;
    let rest = &s[end..];

    let Some(sep) = rest.chars().next() else {
        return Ok(Uint128::new(0, first));
    };

    let next = match separator {
        Separator::Colon if sep == ':' => end + 1,
        Separator::Colon => return Err(IdError::InvalidSeparator { offset: end }),
        Separator::Lenient if rest.starts_with(ESCAPED_COLON) => end + ESCAPED_COLON.len(),
        Separator::Lenient => end + sep.len_utf8(),
    };

    let (second, end) = read_token(s, next)?;
    if end != s.len() {
        return Err(IdError::TrailingInput { offset: end });
    }

    Ok(Uint128::new(first, second))
}

/// Reads a `0x<hex>` token starting at `offset`.
///
/// Returns the value and the offset just past its last digit.
fn read_token(s: &str, offset: usize) -> Result<(u64, usize), IdError> {
    let rest = &s[offset..];
    if !(rest.starts_with("0x") || rest.starts_with("0X")) {
        return Err(IdError::MissingPrefix { offset });
    }

    let start = offset + 2;
    let digits = s[start..]
        .bytes()
        .take_while(u8::is_ascii_hexdigit)
        .count();

    if digits == 0 {
        return Err(IdError::InvalidHex { offset });
    }
    if digits > MAX_TOKEN_DIGITS {
        return Err(IdError::TokenTooLong { offset, digits });
    }

    let end = start + digits;
    let value =
        u64::from_str_radix(&s[start..end], 16).map_err(|_| IdError::InvalidHex { offset })?;

    Ok((value, end))
}

impl fmt::Display for Uint128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}:0x{:x}", self.high(), self.low())
    }
}

impl FromStr for Uint128 {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Uint128 {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for Uint128 {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl serde::Serialize for Uint128 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Uint128 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}
