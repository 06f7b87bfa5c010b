use serde::{Deserialize, Serialize};
use serde_json::Value;
use tailor_canonical::{FieldPath, Timestamp};

use crate::error::{Issues, ValidationError};
use crate::fields::{as_object, closed_enum, optional_str, required_str};

/// Current normalized job-description schema version.
const JD_VERSION: u64 = 1;

/// Minimum length for usable job-description text. Anything shorter would
/// produce meaningless downstream scoring.
pub const JD_TEXT_MIN_CHARS: usize = 20;

/// Where a job description came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// Fetched from a URL by an external collaborator.
    Url,
    /// Supplied inline as text.
    Text,
}

impl SourceType {
    const ALLOWED: &'static [&'static str] = &["url", "text"];

    fn from_wire(s: &str) -> Option<Self> {
        match s {
            "url" => Some(Self::Url),
            "text" => Some(Self::Text),
            _ => None,
        }
    }
}

/// Provenance of a normalized job description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JdSource {
    /// How the text was obtained.
    pub source_type: SourceType,
    /// The URL, or `"inline"` for pasted text.
    pub source_value: String,
    /// When the text was fetched, if it was fetched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<Timestamp>,
}

impl JdSource {
    fn parse_at(value: &Value, path: &FieldPath, issues: &mut Issues) -> Option<Self> {
        let map = as_object(value, path, issues)?;
        let source_type = match map.get("sourceType") {
            None | Some(Value::Null) => {
                issues.push(&path.field("sourceType"), "required");
                None
            }
            Some(raw) => closed_enum(raw, SourceType::ALLOWED, &path.field("sourceType"), issues)
                .and_then(|s| SourceType::from_wire(&s)),
        };
        let source_value = required_str(map, "sourceValue", 1, path, issues);
        let fetched_at = optional_str(map, "fetchedAt", 1, path, issues).and_then(|raw| {
            match Timestamp::parse(raw) {
                Ok(ts) => Some(ts),
                Err(_) => {
                    issues.push(&path.field("fetchedAt"), "must be a UTC RFC3339 timestamp");
                    None
                }
            }
        });
        Some(JdSource {
            source_type: source_type?,
            source_value: source_value?,
            fetched_at,
        })
    }
}

/// A normalized job-description document.
///
/// `text` is always pre-normalized plain text; raw HTML or document blobs
/// never pass this boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedJd {
    /// Schema version (literal `1`).
    pub version: u32,
    /// Provenance of the text.
    pub source: JdSource,
    /// Optional job title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Optional company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Optional location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Cleaned job-description text (at least 20 characters).
    pub text: String,
}

impl NormalizedJd {
    /// Validates an untyped document into a typed normalized JD.
    pub fn parse(value: &Value) -> Result<Self, ValidationError> {
        let mut issues = Issues::default();
        let parsed = Self::parse_at(value, &FieldPath::root(), &mut issues);
        match parsed {
            Some(jd) if issues.is_empty() => Ok(jd),
            _ => Err(issues.into_error()),
        }
    }

    fn parse_at(value: &Value, path: &FieldPath, issues: &mut Issues) -> Option<Self> {
        let map = as_object(value, path, issues)?;
        let version = crate::fields::version_literal(map, JD_VERSION, path, issues);
        let source = match map.get("source") {
            None | Some(Value::Null) => {
                issues.push(&path.field("source"), "required");
                None
            }
            Some(raw) => JdSource::parse_at(raw, &path.field("source"), issues),
        };
        let title = optional_str(map, "title", 1, path, issues);
        let company = optional_str(map, "company", 1, path, issues);
        let location = optional_str(map, "location", 1, path, issues);
        let text = required_str(map, "text", JD_TEXT_MIN_CHARS, path, issues);
        Some(NormalizedJd {
            version: version?,
            source: source?,
            title,
            company,
            location,
            text: text?,
        })
    }
}
