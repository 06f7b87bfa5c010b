use serde_json::Value;
use sha2::{Digest as Sha2Digest, Sha256};
use tailor_canonical::{Canonicalizer, Digest};
use tailor_schemas::CompileRequest;

/// Domain separator for input-hash computation.
const INPUT_HASH_DOMAIN_SEPARATOR: &[u8] = b"tailor:compile-request:v1\0";

/// Computes the input hash for a validated compile request.
///
/// Formula: `sha256(domain_separator || canonical_bytes(request))`,
/// lowercase hex. The request is serialized with defaults applied and
/// canonicalized per RFC 8785, so structurally equal requests always yield
/// the same digest regardless of incidental member order. Requests that
/// differ only in `prefs` hash differently; dedup granularity beyond that
/// is the caller's concern.
pub fn compute_input_hash(request: &CompileRequest) -> Result<Digest, InputHashError> {
    let value: Value =
        serde_json::to_value(request).map_err(|e| InputHashError::Serialization(e.to_string()))?;

    let canonicalizer = Canonicalizer::new();
    let bytes = canonicalizer.canonicalize(&value)?;

    let mut hasher = Sha256::new();
    hasher.update(INPUT_HASH_DOMAIN_SEPARATOR);
    hasher.update(&bytes);
    Ok(Digest::from_bytes(hasher.finalize().into()))
}

/// Error during input-hash computation.
#[derive(thiserror::Error, Debug)]
pub enum InputHashError {
    /// Serialization failed.
    #[error("serialization failed: {0}")]
    Serialization(String),
    /// Canonicalization failed.
    #[error("canonicalization failed: {0}")]
    Canonicalization(#[from] tailor_canonical::CanonicalizationError),
}
