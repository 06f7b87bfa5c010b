use serde::Serialize;
use serde_json::Value;
use tailor_schemas::{CompileRequest, ValidationError};

use crate::errors::CoreError;
use crate::input_hash::compute_input_hash;
use crate::job::{create_job, JobDescriptor};

/// The single inbound operation: validate a raw request, hash it, and emit
/// the initial job descriptor.
///
/// Pure apart from `jobId`/timestamp generation: no I/O, no shared state.
/// On rejection the error carries every failing field path at once. The
/// returned descriptor is handed to the dispatch collaborator; this crate
/// has no further involvement once it is emitted.
pub fn accept_compile_request(raw: &Value) -> Result<JobDescriptor, CoreError> {
    let request = CompileRequest::parse(raw)?;
    let input_hash = compute_input_hash(&request)?;
    Ok(create_job(input_hash))
}

/// Wire envelope for the accept operation: `{ok: true, job}` on success,
/// `{ok: false, error}` on rejection. Transport collaborators serialize
/// this directly.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AcceptResponse {
    /// Request accepted; a job was created.
    Accepted {
        /// Always `true`.
        ok: bool,
        /// The initial job descriptor.
        job: JobDescriptor,
    },
    /// Request rejected by validation.
    Rejected {
        /// Always `false`.
        ok: bool,
        /// Aggregated field-path-keyed messages.
        error: ValidationError,
    },
}

impl AcceptResponse {
    /// Wraps an accepted job.
    pub fn accepted(job: JobDescriptor) -> Self {
        AcceptResponse::Accepted { ok: true, job }
    }

    /// Wraps a validation rejection.
    pub fn rejected(error: ValidationError) -> Self {
        AcceptResponse::Rejected { ok: false, error }
    }
}
