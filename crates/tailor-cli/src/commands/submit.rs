//! Submit command implementation.

use tailor_core::{accept_compile_request, AcceptResponse, CoreError};

use super::read_json_file;
use crate::output;

pub fn run(input: String, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    let value = read_json_file(&input)?;

    let response = match accept_compile_request(&value) {
        Ok(job) => AcceptResponse::accepted(job),
        Err(CoreError::Validation(err)) => AcceptResponse::rejected(err),
        Err(other) => return Err(other.to_string().into()),
    };

    let value = serde_json::to_value(&response)?;
    if compact {
        println!("{}", serde_json::to_string(&value)?);
    } else {
        println!("{}", output::format_json(&value));
    }

    // Queue handoff happens out-of-process; a rejection still exits non-zero.
    match response {
        AcceptResponse::Accepted { .. } => Ok(()),
        AcceptResponse::Rejected { error, .. } => Err(error.to_string().into()),
    }
}
