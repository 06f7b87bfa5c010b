use serde::{Deserialize, Serialize};
use serde_json::Value;
use tailor_canonical::{FieldPath, IsoDate, UrlString};

use crate::error::{Issues, ValidationError};
use crate::fields::{
    as_object, closed_enum, non_empty_string, optional_str, parse_list, required_str,
    version_literal,
};

/// Current résumé document schema version.
const RESUME_VERSION: u64 = 1;

/// Simple email shape check: one `@`, something on each side, a dot in the domain.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// A labeled URL attached to a résumé or project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Display label (non-empty).
    pub label: String,
    /// Absolute URL.
    pub url: UrlString,
}

impl Link {
    fn parse_at(value: &Value, path: &FieldPath, issues: &mut Issues) -> Option<Self> {
        let map = as_object(value, path, issues)?;
        let label = required_str(map, "label", 1, path, issues);
        let url = parse_url(map, "url", path, issues);
        Some(Link {
            label: label?,
            url: url?,
        })
    }
}

/// Typed evidence tag attached to a bullet; consumed by later validation
/// stages to reject unsupported claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Claim category (closed set).
    #[serde(rename = "type")]
    pub kind: ClaimType,
    /// Evidence value (non-empty).
    pub value: String,
}

/// Closed set of claim categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimType {
    /// A quantified metric ("35% latency reduction").
    Metric,
    /// A technology or tool.
    Tech,
    /// Team or system scope.
    Scope,
    /// A delivered outcome.
    Outcome,
}

impl ClaimType {
    const ALLOWED: &'static [&'static str] = &["metric", "tech", "scope", "outcome"];

    fn from_wire(s: &str) -> Option<Self> {
        match s {
            "metric" => Some(Self::Metric),
            "tech" => Some(Self::Tech),
            "scope" => Some(Self::Scope),
            "outcome" => Some(Self::Outcome),
            _ => None,
        }
    }
}

impl Claim {
    fn parse_at(value: &Value, path: &FieldPath, issues: &mut Issues) -> Option<Self> {
        let map = as_object(value, path, issues)?;
        let kind = match map.get("type") {
            None | Some(Value::Null) => {
                issues.push(&path.field("type"), "required");
                None
            }
            Some(raw) => closed_enum(raw, ClaimType::ALLOWED, &path.field("type"), issues)
                .and_then(|s| ClaimType::from_wire(&s)),
        };
        let value = required_str(map, "value", 1, path, issues);
        Some(Claim {
            kind: kind?,
            value: value?,
        })
    }
}

/// A single résumé bullet.
///
/// The `id` is the stable handle used to track rewrites across pipeline
/// stages: unique within its parent's bullet list and never regenerated
/// once assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bullet {
    /// Stable bullet identifier.
    pub id: String,
    /// Bullet text (at least 3 characters).
    pub text: String,
    /// Evidence tags; empty until later stages populate them.
    pub claims: Vec<Claim>,
}

impl Bullet {
    pub(crate) fn parse_at(value: &Value, path: &FieldPath, issues: &mut Issues) -> Option<Self> {
        let map = as_object(value, path, issues)?;
        let id = required_str(map, "id", 1, path, issues);
        let text = required_str(map, "text", 3, path, issues);
        let claims = parse_list(map, "claims", 0, "claims", path, issues, Claim::parse_at);
        Some(Bullet {
            id: id?,
            text: text?,
            claims: claims?,
        })
    }
}

/// An employment entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    /// Stable entry identifier.
    pub id: String,
    /// Employer name.
    pub company: String,
    /// Role title.
    pub role: String,
    /// Optional work location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Start date (`YYYY-MM-DD`).
    pub start_date: IsoDate,
    /// End date; absent means the position is current, not unknown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<IsoDate>,
    /// Accomplishment bullets (at least one).
    pub bullets: Vec<Bullet>,
}

impl Experience {
    fn parse_at(value: &Value, path: &FieldPath, issues: &mut Issues) -> Option<Self> {
        let map = as_object(value, path, issues)?;
        let id = required_str(map, "id", 1, path, issues);
        let company = required_str(map, "company", 1, path, issues);
        let role = required_str(map, "role", 1, path, issues);
        let location = optional_str(map, "location", 1, path, issues);
        let start_date = parse_required_date(map, "startDate", path, issues);
        let end_date = parse_optional_date(map, "endDate", path, issues);
        let bullets = parse_list(map, "bullets", 1, "bullet", path, issues, Bullet::parse_at);
        if let Some(list) = &bullets {
            check_bullet_ids(list, &path.field("bullets"), issues);
        }
        Some(Experience {
            id: id?,
            company: company?,
            role: role?,
            location,
            start_date: start_date?,
            end_date,
            bullets: bullets?,
        })
    }
}

/// A project entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable entry identifier.
    pub id: String,
    /// Project name.
    pub name: String,
    /// Technologies used.
    pub tech: Vec<String>,
    /// Accomplishment bullets (at least one).
    pub bullets: Vec<Bullet>,
    /// Labeled project links.
    pub links: Vec<Link>,
}

impl Project {
    fn parse_at(value: &Value, path: &FieldPath, issues: &mut Issues) -> Option<Self> {
        let map = as_object(value, path, issues)?;
        let id = required_str(map, "id", 1, path, issues);
        let name = required_str(map, "name", 1, path, issues);
        let tech = parse_list(map, "tech", 0, "entries", path, issues, non_empty_string);
        let bullets = parse_list(map, "bullets", 1, "bullet", path, issues, Bullet::parse_at);
        if let Some(list) = &bullets {
            check_bullet_ids(list, &path.field("bullets"), issues);
        }
        let links = parse_list(map, "links", 0, "links", path, issues, Link::parse_at);
        Some(Project {
            id: id?,
            name: name?,
            tech: tech?,
            bullets: bullets?,
            links: links?,
        })
    }
}

/// An education entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    /// Institution name.
    pub school: String,
    /// Degree or program.
    pub degree: String,
    /// Optional start date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<IsoDate>,
    /// Optional end date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<IsoDate>,
}

impl Education {
    fn parse_at(value: &Value, path: &FieldPath, issues: &mut Issues) -> Option<Self> {
        let map = as_object(value, path, issues)?;
        let school = required_str(map, "school", 1, path, issues);
        let degree = required_str(map, "degree", 1, path, issues);
        let start_date = parse_optional_date(map, "startDate", path, issues);
        let end_date = parse_optional_date(map, "endDate", path, issues);
        Some(Education {
            school: school?,
            degree: degree?,
            start_date,
            end_date,
        })
    }
}

/// Contact details and identity block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Basics {
    /// Candidate's full name.
    pub full_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone (at least 6 characters).
    pub phone: String,
    /// Current location.
    pub location: String,
    /// Labeled links (portfolio, GitHub, ...).
    pub links: Vec<Link>,
}

impl Basics {
    fn parse_at(value: &Value, path: &FieldPath, issues: &mut Issues) -> Option<Self> {
        let map = as_object(value, path, issues)?;
        let full_name = required_str(map, "fullName", 1, path, issues);
        let email = required_str(map, "email", 1, path, issues).and_then(|s| {
            let re = regex::Regex::new(EMAIL_PATTERN).expect("invalid regex");
            if re.is_match(&s) {
                Some(s)
            } else {
                issues.push(&path.field("email"), "must be a valid email address");
                None
            }
        });
        let phone = required_str(map, "phone", 6, path, issues);
        let location = required_str(map, "location", 1, path, issues);
        let links = parse_list(map, "links", 0, "links", path, issues, Link::parse_at);
        Some(Basics {
            full_name: full_name?,
            email: email?,
            phone: phone?,
            location: location?,
            links: links?,
        })
    }
}

/// A versioned, structured résumé document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resume {
    /// Schema version (literal `1`).
    pub version: u32,
    /// Contact details and identity.
    pub basics: Basics,
    /// Optional one-line headline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    /// Optional summary paragraph.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Ordered list of skills (non-empty strings).
    pub skills: Vec<String>,
    /// Employment entries.
    pub experience: Vec<Experience>,
    /// Project entries.
    pub projects: Vec<Project>,
    /// Education entries.
    pub education: Vec<Education>,
}

impl Resume {
    /// Validates an untyped document into a typed résumé, reporting every
    /// schema violation keyed by field path.
    pub fn parse(value: &Value) -> Result<Self, ValidationError> {
        let mut issues = Issues::default();
        let parsed = Self::parse_at(value, &FieldPath::root(), &mut issues);
        match parsed {
            Some(resume) if issues.is_empty() => Ok(resume),
            _ => Err(issues.into_error()),
        }
    }

    pub(crate) fn parse_at(value: &Value, path: &FieldPath, issues: &mut Issues) -> Option<Self> {
        let map = as_object(value, path, issues)?;
        let version = version_literal(map, RESUME_VERSION, path, issues);
        let basics = match map.get("basics") {
            None | Some(Value::Null) => {
                issues.push(&path.field("basics"), "required");
                None
            }
            Some(raw) => Basics::parse_at(raw, &path.field("basics"), issues),
        };
        let headline = optional_str(map, "headline", 1, path, issues);
        let summary = optional_str(map, "summary", 1, path, issues);
        let skills = parse_list(map, "skills", 0, "skills", path, issues, non_empty_string);
        let experience = parse_list(
            map,
            "experience",
            0,
            "entries",
            path,
            issues,
            Experience::parse_at,
        );
        let projects = parse_list(map, "projects", 0, "entries", path, issues, Project::parse_at);
        let education = parse_list(
            map,
            "education",
            0,
            "entries",
            path,
            issues,
            Education::parse_at,
        );
        Some(Resume {
            version: version?,
            basics: basics?,
            headline,
            summary,
            skills: skills?,
            experience: experience?,
            projects: projects?,
            education: education?,
        })
    }
}

pub(crate) fn parse_url(
    map: &serde_json::Map<String, Value>,
    key: &'static str,
    path: &FieldPath,
    issues: &mut Issues,
) -> Option<UrlString> {
    let raw = required_str(map, key, 1, path, issues)?;
    match UrlString::parse(raw) {
        Ok(url) => Some(url),
        Err(_) => {
            issues.push(&path.field(key), "must be an absolute URL");
            None
        }
    }
}

fn parse_required_date(
    map: &serde_json::Map<String, Value>,
    key: &'static str,
    path: &FieldPath,
    issues: &mut Issues,
) -> Option<IsoDate> {
    let raw = required_str(map, key, 1, path, issues)?;
    parse_date_value(raw, &path.field(key), issues)
}

fn parse_optional_date(
    map: &serde_json::Map<String, Value>,
    key: &'static str,
    path: &FieldPath,
    issues: &mut Issues,
) -> Option<IsoDate> {
    let raw = optional_str(map, key, 1, path, issues)?;
    parse_date_value(raw, &path.field(key), issues)
}

/// Bullet ids track rewrites across pipeline stages, so they must be
/// unique within their parent's list.
fn check_bullet_ids(bullets: &[Bullet], path: &FieldPath, issues: &mut Issues) {
    let mut seen = std::collections::BTreeSet::new();
    for (idx, bullet) in bullets.iter().enumerate() {
        if !seen.insert(bullet.id.as_str()) {
            issues.push(
                &path.index(idx).field("id"),
                format!("duplicate bullet id '{}'", bullet.id),
            );
        }
    }
}

fn parse_date_value(raw: String, path: &FieldPath, issues: &mut Issues) -> Option<IsoDate> {
    match IsoDate::parse(raw) {
        Ok(date) => Some(date),
        Err(_) => {
            issues.push(path, "must match YYYY-MM-DD");
            None
        }
    }
}
