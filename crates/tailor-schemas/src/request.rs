use serde::{Deserialize, Serialize};
use serde_json::Value;
use tailor_canonical::{FieldPath, UrlString};

use crate::error::{Issues, ValidationError};
use crate::fields::{as_object, closed_enum, optional_str, required_str};
use crate::jd::JD_TEXT_MIN_CHARS;
use crate::resume::{parse_url, Resume};

/// Reference to the job description a request targets.
///
/// Discriminated on `type`: either a URL to be fetched later by an external
/// collaborator, or inline text supplied directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum JdReference {
    /// Job description at a URL; nothing beyond URL syntax is checked here.
    Url {
        /// Absolute URL of the posting.
        url: UrlString,
    },
    /// Inline job-description text (at least 20 characters).
    Text {
        /// The pasted text.
        text: String,
    },
}

impl JdReference {
    fn parse_at(value: &Value, path: &FieldPath, issues: &mut Issues) -> Option<Self> {
        let map = as_object(value, path, issues)?;
        let kind = match map.get("type") {
            None | Some(Value::Null) => {
                issues.push(&path.field("type"), "required");
                return None;
            }
            Some(raw) => closed_enum(raw, &["url", "text"], &path.field("type"), issues)?,
        };
        match kind.as_str() {
            "url" => {
                let url = parse_url(map, "url", path, issues)?;
                Some(JdReference::Url { url })
            }
            _ => {
                let text = required_str(map, "text", JD_TEXT_MIN_CHARS, path, issues)?;
                Some(JdReference::Text { text })
            }
        }
    }
}

/// Closed set of scoring models. Honest naming: an alignment score, not a
/// universal ATS score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScoringModel {
    /// Keyword-alignment scoring, first revision.
    #[default]
    #[serde(rename = "keyword_alignment_v1")]
    KeywordAlignmentV1,
}

impl ScoringModel {
    const ALLOWED: &'static [&'static str] = &["keyword_alignment_v1"];
}

/// Closed set of output templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Template {
    /// Single-page layout, first revision.
    #[default]
    #[serde(rename = "one_page_v1")]
    OnePageV1,
}

impl Template {
    const ALLOWED: &'static [&'static str] = &["one_page_v1"];
}

/// Compile preferences.
///
/// Enum fields are closed sets: an unknown `scoringModel` or `template` is
/// rejected outright rather than silently mapped to a default, so a request
/// can never be mislabeled as asking for behavior that was not reviewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CompilePrefs {
    /// Optional role to tailor toward.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_role: Option<String>,
    /// Scoring model to apply.
    pub scoring_model: ScoringModel,
    /// Output template.
    pub template: Template,
}

impl CompilePrefs {
    fn parse_at(value: &Value, path: &FieldPath, issues: &mut Issues) -> Option<Self> {
        let map = as_object(value, path, issues)?;
        let target_role = optional_str(map, "targetRole", 1, path, issues);
        let scoring_model = match map.get("scoringModel") {
            None | Some(Value::Null) => Some(ScoringModel::default()),
            Some(raw) => {
                closed_enum(raw, ScoringModel::ALLOWED, &path.field("scoringModel"), issues)
                    .map(|_| ScoringModel::KeywordAlignmentV1)
            }
        };
        let template = match map.get("template") {
            None | Some(Value::Null) => Some(Template::default()),
            Some(raw) => closed_enum(raw, Template::ALLOWED, &path.field("template"), issues)
                .map(|_| Template::OnePageV1),
        };
        Some(CompilePrefs {
            target_role,
            scoring_model: scoring_model?,
            template: template?,
        })
    }
}

/// The validated input bundle submitted for compilation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileRequest {
    /// The structured résumé.
    pub resume: Resume,
    /// The job-description reference.
    pub jd: JdReference,
    /// Compile preferences (defaults applied when absent).
    pub prefs: CompilePrefs,
}

impl CompileRequest {
    /// Validates an untyped request into a typed compile request.
    ///
    /// Every schema violation across the whole request is collected; there
    /// is no partial acceptance. When `prefs` is absent the full default
    /// preference object is substituted atomically.
    pub fn parse(value: &Value) -> Result<Self, ValidationError> {
        let mut issues = Issues::default();
        let path = FieldPath::root();
        let parsed = (|| {
            let map = as_object(value, &path, &mut issues)?;
            let resume = match map.get("resume") {
                None | Some(Value::Null) => {
                    issues.push(&path.field("resume"), "required");
                    None
                }
                Some(raw) => Resume::parse_at(raw, &path.field("resume"), &mut issues),
            };
            let jd = match map.get("jd") {
                None | Some(Value::Null) => {
                    issues.push(&path.field("jd"), "required");
                    None
                }
                Some(raw) => JdReference::parse_at(raw, &path.field("jd"), &mut issues),
            };
            let prefs = match map.get("prefs") {
                None | Some(Value::Null) => Some(CompilePrefs::default()),
                Some(raw) => CompilePrefs::parse_at(raw, &path.field("prefs"), &mut issues),
            };
            Some(CompileRequest {
                resume: resume?,
                jd: jd?,
                prefs: prefs?,
            })
        })();
        match parsed {
            Some(request) if issues.is_empty() => Ok(request),
            _ => Err(issues.into_error()),
        }
    }
}
