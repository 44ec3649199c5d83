//! JSON output formatting.

/// Format a value as indented JSON.
pub fn format_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}
