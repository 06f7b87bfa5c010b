//! Typed schemas for the tailor compile pipeline.
//!
//! Incoming documents are untyped JSON; every type here exposes a single
//! validating constructor (`parse`) that either yields a fully-typed value
//! or an aggregated [`ValidationError`] keyed by field path. There is no
//! partially-valid result: downstream components only ever see values that
//! passed the whole schema.
//!
#![deny(missing_docs)]

/// Aggregated validation errors keyed by field path.
pub mod error;
/// Shared field-extraction helpers for schema parsing.
mod fields;
/// Normalized job-description document schema.
pub mod jd;
/// Compile-request schema (résumé + JD reference + preferences).
pub mod request;
/// Résumé document schema.
pub mod resume;

pub use error::ValidationError;
pub use jd::{JdSource, NormalizedJd, SourceType};
pub use request::{CompilePrefs, CompileRequest, JdReference, ScoringModel, Template};
pub use resume::{Basics, Bullet, Claim, ClaimType, Education, Experience, Link, Project, Resume};
