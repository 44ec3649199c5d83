//! Output formatting functions.

pub mod json;
pub mod pretty;

use crate::cli::OutputFormat;

/// Format a value for output, using `pretty` for the human-readable form.
pub fn format_output<T: serde::Serialize>(
    value: &T,
    format: OutputFormat,
    pretty: impl FnOnce(&T) -> String,
) -> String {
    match format {
        OutputFormat::Json => json::format_json(value),
        OutputFormat::Pretty => pretty(value),
    }
}
