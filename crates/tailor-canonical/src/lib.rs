//! Canonicalization and primitive validation for tailor compile requests.
//!
//! This crate holds every piece that participates in deterministic hashing
//! or field-level validation: regex-backed string newtypes, field paths for
//! error reporting, the RFC 8785 canonicalizer, and the hex digest type.
//!
#![deny(missing_docs)]

/// Canonicalization helpers for deterministic hashing.
pub mod canonicalizer;
/// Lowercase-hex SHA-256 digest type.
pub mod digest;
/// Primitive string validators (dates, URLs, timestamps).
pub mod identifiers;
/// Field paths and atomic validation errors.
pub mod validation;

pub use canonicalizer::{CanonicalizationError, Canonicalizer};
pub use digest::Digest;
pub use identifiers::{IsoDate, Timestamp, UrlString};
pub use validation::{FieldPath, PrimitiveError};
