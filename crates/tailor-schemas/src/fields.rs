//! Helpers for pulling typed fields out of untyped JSON while collecting
//! every failure into the shared [`Issues`] accumulator. A helper that
//! records an issue returns `None`; callers keep validating sibling fields
//! and only combine results at the end of the pass.

use serde_json::{Map, Value};
use tailor_canonical::FieldPath;

use crate::error::Issues;

pub(crate) fn as_object<'a>(
    value: &'a Value,
    path: &FieldPath,
    issues: &mut Issues,
) -> Option<&'a Map<String, Value>> {
    match value {
        Value::Object(map) => Some(map),
        _ => {
            issues.push(path, "expected an object");
            None
        }
    }
}

/// Required string with a minimum character count.
pub(crate) fn required_str(
    map: &Map<String, Value>,
    key: &'static str,
    min: usize,
    path: &FieldPath,
    issues: &mut Issues,
) -> Option<String> {
    let child = path.field(key);
    match map.get(key) {
        None | Some(Value::Null) => {
            issues.push(&child, "required");
            None
        }
        Some(value) => str_with_min(value, min, &child, issues),
    }
}

/// Optional string; absence is not an issue, a present-but-invalid value is.
pub(crate) fn optional_str(
    map: &Map<String, Value>,
    key: &'static str,
    min: usize,
    path: &FieldPath,
    issues: &mut Issues,
) -> Option<String> {
    match map.get(key) {
        None | Some(Value::Null) => None,
        Some(value) => str_with_min(value, min, &path.field(key), issues),
    }
}

pub(crate) fn str_with_min(
    value: &Value,
    min: usize,
    path: &FieldPath,
    issues: &mut Issues,
) -> Option<String> {
    match value {
        Value::String(s) => {
            if s.chars().count() < min {
                issues.push(
                    path,
                    format!(
                        "must be at least {} character{}",
                        min,
                        if min == 1 { "" } else { "s" }
                    ),
                );
                None
            } else {
                Some(s.clone())
            }
        }
        _ => {
            issues.push(path, "expected a string");
            None
        }
    }
}

/// Parses a list field element-by-element.
///
/// An absent field counts as an empty list (collection defaults are not
/// errors); `min` then enforces non-emptiness where the schema demands it.
/// Every element is validated even after one fails, so the report covers
/// the whole list.
pub(crate) fn parse_list<T>(
    map: &Map<String, Value>,
    key: &'static str,
    min: usize,
    noun: &str,
    path: &FieldPath,
    issues: &mut Issues,
    parse: impl Fn(&Value, &FieldPath, &mut Issues) -> Option<T>,
) -> Option<Vec<T>> {
    let child = path.field(key);
    let items: Vec<&Value> = match map.get(key) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().collect(),
        Some(_) => {
            issues.push(&child, "expected an array");
            return None;
        }
    };
    if items.len() < min {
        issues.push(
            &child,
            format!("must contain at least {} {}", min, noun),
        );
        return None;
    }
    let mut out = Vec::with_capacity(items.len());
    let mut ok = true;
    for (idx, item) in items.into_iter().enumerate() {
        match parse(item, &child.index(idx), issues) {
            Some(value) => out.push(value),
            None => ok = false,
        }
    }
    ok.then_some(out)
}

/// Element parser for lists of non-empty strings (skills, tech).
pub(crate) fn non_empty_string(
    value: &Value,
    path: &FieldPath,
    issues: &mut Issues,
) -> Option<String> {
    str_with_min(value, 1, path, issues)
}

/// Matches a string field against a closed set of allowed values.
///
/// Unknown values are always an issue, never coerced to a default; a
/// closed enum growing silently would mislabel behavior downstream.
pub(crate) fn closed_enum(
    value: &Value,
    allowed: &[&str],
    path: &FieldPath,
    issues: &mut Issues,
) -> Option<String> {
    match value {
        Value::String(s) if allowed.contains(&s.as_str()) => Some(s.clone()),
        _ => {
            issues.push(path, format!("must be one of: {}", allowed.join(", ")));
            None
        }
    }
}

/// Literal schema-version field (`version: 1`).
pub(crate) fn version_literal(
    map: &Map<String, Value>,
    expected: u64,
    path: &FieldPath,
    issues: &mut Issues,
) -> Option<u32> {
    let child = path.field("version");
    match map.get("version") {
        Some(Value::Number(n)) if n.as_u64() == Some(expected) => Some(expected as u32),
        None | Some(Value::Null) => {
            issues.push(&child, "required");
            None
        }
        Some(_) => {
            issues.push(&child, format!("must be the literal {}", expected));
            None
        }
    }
}
