//! Text helpers for rendering entry fields.

use chrono::NaiveDate;

const MAX_TEXT_CHARS: usize = 200;

/// Strip angle brackets, trim, and cap at 200 characters.
pub fn sanitize_text(text: &str) -> String {
    text.chars()
        .filter(|c| *c != '<' && *c != '>')
        .collect::<String>()
        .trim()
        .chars()
        .take(MAX_TEXT_CHARS)
        .collect()
}

/// Render a size in megabytes: whole KB below 1 MB, one decimal MB otherwise.
pub fn format_file_size(size_mb: Option<f64>) -> String {
    match size_mb {
        Some(mb) if mb < 1.0 => format!("{:.0} KB", mb * 1024.0),
        Some(mb) => format!("{:.1} MB", mb),
        None => "Unknown".to_string(),
    }
}

/// Shorten "November 25, 2023" or "2023-11-25" to "Nov 25, 2023".
/// Anything else is returned unchanged.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    ["%B %d, %Y", "%b %d, %Y", "%Y-%m-%d"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}
