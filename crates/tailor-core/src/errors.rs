use thiserror::Error;

/// Core error types.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The request failed schema validation.
    #[error(transparent)]
    Validation(#[from] tailor_schemas::ValidationError),
    /// Input-hash computation failed.
    #[error("input hash computation failed: {0}")]
    InputHash(#[from] crate::input_hash::InputHashError),
    /// A descriptor violates the lifecycle shape invariants.
    #[error("invalid job descriptor: {0}")]
    InvalidDescriptor(String),
}
