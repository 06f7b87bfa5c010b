//! Output formatting utilities.

use serde_json::Value;
use tailor_schemas::ValidationError;

/// Formats a value as pretty-printed JSON.
pub fn format_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Prints the aggregated issue report as a two-column table.
pub fn print_issue_table(error: &ValidationError) {
    println!("{:<48} {}", "FIELD", "ISSUE");
    println!("{}", "-".repeat(80));
    for (path, messages) in &error.issues {
        for message in messages {
            println!("{:<48} {}", truncate(path, 48), message);
        }
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len.saturating_sub(3)])
    }
}
