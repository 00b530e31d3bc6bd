//! File naming for exported package lists

use chrono::{DateTime, Utc};

/// Timestamp layout used in exported file names (e.g., `2024-01-01T00-00-00Z`)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H-%M-%SZ";

/// Format a UTC instant for use in a file name
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Build the export base name, without extension
///
/// `packages-list-at-{timestamp}` or, when a package id filter was applied,
/// `packages-list-for-{id}-at-{timestamp}`.
pub fn file_base_name(package_id: Option<&str>, at: DateTime<Utc>) -> String {
    match package_id {
        Some(id) => format!("packages-list-for-{}-at-{}", id, format_timestamp(at)),
        None => format!("packages-list-at-{}", format_timestamp(at)),
    }
}
