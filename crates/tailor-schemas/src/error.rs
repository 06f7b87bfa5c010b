use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tailor_canonical::FieldPath;
use thiserror::Error;

/// The full set of schema violations found in one validation pass.
///
/// Every failing field is reported, keyed by its path, so a caller can
/// render a complete error report in a single round trip. Validation is
/// binary: any issue at all means the input is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("validation failed: {} issue(s) in {} field(s)",
    .issues.values().map(Vec::len).sum::<usize>(), .issues.len())]
pub struct ValidationError {
    /// Field path → human-readable messages for that field.
    pub issues: BTreeMap<String, Vec<String>>,
}

/// Collector that accumulates issues across an entire parse pass.
#[derive(Debug, Default)]
pub(crate) struct Issues {
    map: BTreeMap<String, Vec<String>>,
}

impl Issues {
    pub(crate) fn push(&mut self, path: &FieldPath, message: impl Into<String>) {
        self.map
            .entry(path.to_string())
            .or_default()
            .push(message.into());
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub(crate) fn into_error(self) -> ValidationError {
        ValidationError { issues: self.map }
    }
}
