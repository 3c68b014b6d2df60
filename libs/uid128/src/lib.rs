//! # uid128
//!
//! A 128-bit unsigned integer value type that doubles as a universally
//! unique identifier.
//!
//! ## Design Principles
//!
//! - Identifiers are plain `Copy` values: a `(high, low)` pair of 64-bit words
//! - Text parsing is total: anything that is not hexadecimal is hashed
//! - Random UUIDs are structurally marked, so they never look like other values
//! - The only shared state is the process-wide random generator
//!
//! ## Text Format
//!
//! The canonical form is `0x{high}:0x{low}` in lowercase hex without padding:
//!
//! - `0xd41d8cd98f00b204:0xe9800998ecf8427e`
//! - `0x0:0x1`
//!
//! ## Construction
//!
//! ```
//! use uid128::{make_uint128, make_uuid, Uint128};
//!
//! let id = Uint128::new(1, 2);
//! let parsed = Uint128::parse("0x1:0x2");
//! assert_eq!(id, parsed);
//!
//! // Non-hex text is hashed, never rejected.
//! let named = Uint128::parse("render-node");
//! assert_eq!(named, make_uint128("render-node"));
//!
//! let uuid = make_uuid();
//! assert!(uuid.is_uuid());
//! assert_ne!(uuid, Uint128::default());
//! ```

mod digest;
mod error;
mod generator;
mod hash;
mod text;
mod value;

pub use digest::make_uint128;
pub use error::IdError;
pub use generator::{make_uuid, UuidGenerator};
pub use hash::{BuildFoldHasher, FoldHasher, Uint128Map, Uint128Set};
pub use value::Uint128;

/// Re-export uuid for consumers that need RFC-4122 formatting
pub use uuid::Uuid;
