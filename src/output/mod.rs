//! Output of package query results
//!
//! This module provides:
//! - File naming for exported package lists
//! - Text (CRLF-joined) and CSV (comma-joined) export

mod export;
mod naming;

pub use export::{export, format_entries, ExportPaths, CSV_SEPARATOR, TEXT_SEPARATOR};
pub use naming::{file_base_name, format_timestamp, TIMESTAMP_FORMAT};
