//! Error types for strict identifier parsing.
//!
//! The total parser never surfaces these; they explain why
//! [`Uint128::parse`](crate::Uint128::parse) fell back to hashing and are
//! returned directly by [`Uint128::parse_canonical`](crate::Uint128::parse_canonical).

use thiserror::Error;

/// Errors that can occur when parsing an identifier in canonical form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The input string is empty.
    #[error("identifier cannot be empty")]
    Empty,

    /// A token does not start with the `0x` prefix.
    #[error("identifier token at offset {offset} missing '0x' prefix")]
    MissingPrefix { offset: usize },

    /// A `0x` prefix is not followed by any hex digit.
    #[error("identifier token at offset {offset} has no hex digits")]
    InvalidHex { offset: usize },

    /// A token has more hex digits than fit in 64 bits.
    #[error("identifier token at offset {offset} has {digits} hex digits, at most 16 allowed")]
    TokenTooLong { offset: usize, digits: usize },

    /// The two tokens are not separated the way the format requires.
    #[error("invalid separator at offset {offset}")]
    InvalidSeparator { offset: usize },

    /// Bytes remain after the last token.
    #[error("unexpected trailing input at offset {offset}")]
    TrailingInput { offset: usize },
}

impl IdError {
    /// Returns true if this error indicates the input was empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, IdError::Empty)
    }

    /// Returns true if this error concerns the digits of a hex token.
    pub fn is_hex_error(&self) -> bool {
        matches!(
            self,
            IdError::MissingPrefix { .. } | IdError::InvalidHex { .. } | IdError::TokenTooLong { .. }
        )
    }
}
