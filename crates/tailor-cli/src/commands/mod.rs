//! Command implementations.

pub mod canonicalize;
pub mod hash;
pub mod submit;
pub mod validate;

use serde_json::Value;

/// Reads and parses a JSON file, with readable failure messages.
pub fn read_json_file(path: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read file {}: {}", path, e))?;
    let value: Value =
        serde_json::from_str(&raw).map_err(|e| format!("Invalid JSON in {}: {}", path, e))?;
    Ok(value)
}
