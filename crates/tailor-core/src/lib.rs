//! Compile-request acceptance and job descriptor lifecycle.
//!
//! This crate is the boundary between untyped inbound requests and the
//! external collaborators that do the actual compilation work. It provides:
//! - Input-hash computation over canonical request bytes
//! - The job descriptor record and its status state machine
//! - The single inbound operation, [`accept_compile_request`]
//!
//! Core invariants:
//! - Validation and hashing are pure: no I/O, no shared state, safe to call
//!   concurrently without locking
//! - A fresh `jobId` is generated per accepted request; it is never derived
//!   from content and never reused
//! - The input hash is advisory dedup metadata, never the job identifier
//! - Once a descriptor is emitted, this crate never mutates it again; later
//!   transitions belong to the dispatch collaborator
//!
#![deny(missing_docs)]

/// Boundary operation accepting raw compile requests.
pub mod accept;
/// Error types for core operations.
pub mod errors;
/// Input-hash computation over canonical bytes.
pub mod input_hash;
/// Job descriptor record and status state machine.
pub mod job;

pub use accept::{accept_compile_request, AcceptResponse};
pub use errors::CoreError;
pub use input_hash::{compute_input_hash, InputHashError};
pub use job::{create_job, Artifact, ArtifactKind, JobDescriptor, JobError, JobStatus};
