//! Display formatting for sizes and timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::NaiveDateTime;

use crate::net::types::parse_timestamp;

/// Human-readable file size, in the B / KB / MB buckets the file table
/// shows.
pub fn format_file_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

/// "Mar 1, 2025, 10:00 AM" — the timestamp form used across lists.
pub fn format_date_time(dt: NaiveDateTime) -> String {
    dt.format("%b %-d, %Y, %-I:%M %p").to_string()
}

/// Render a wire timestamp for display, falling back to the raw string
/// when the backend sends an unexpected form.
pub fn format_timestamp(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(|| raw.to_owned(), format_date_time)
}
