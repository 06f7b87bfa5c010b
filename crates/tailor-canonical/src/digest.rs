use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest as Sha2Digest, Sha256};

use crate::validation::PrimitiveError;

/// SHA-256 digest encoded as lowercase hex.
///
/// On the wire this is a bare 64-character string (the `inputHash` field of
/// a job descriptor). It is advisory caching/dedup metadata for external
/// collaborators and must never stand in for a job identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Digest(String);

impl Digest {
    /// Encodes raw SHA-256 output as a digest.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Digest(hex::encode(bytes))
    }

    /// Hashes arbitrary bytes into a digest.
    pub fn of(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        Self::from_bytes(hasher.finalize().into())
    }

    /// Parses a validated digest from its hex form.
    pub fn parse(value: impl Into<String>) -> Result<Self, PrimitiveError> {
        let s = value.into();
        let re = Regex::new(r"^[0-9a-f]{64}$").expect("invalid regex");
        if !re.is_match(&s) {
            return Err(PrimitiveError::PatternMismatch {
                field: "digest",
                value: s,
            });
        }
        Ok(Digest(s))
    }
}

impl AsRef<str> for Digest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
