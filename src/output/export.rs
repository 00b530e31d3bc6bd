//! Text and CSV export of package lists

use crate::domain::PackageDescriptor;
use crate::error::ExportError;
use std::fs;
use std::path::{Path, PathBuf};

/// Separator between entries in the text file
pub const TEXT_SEPARATOR: &str = "\r\n";

/// Separator between entries in the CSV file
pub const CSV_SEPARATOR: &str = ",";

/// Paths of the files written by [`export`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    /// The newline-delimited text file
    pub text: PathBuf,
    /// The comma-delimited CSV file
    pub csv: PathBuf,
}

/// Format each descriptor as `"{id} {version}"`
pub fn format_entries(packages: &[PackageDescriptor]) -> Vec<String> {
    packages.iter().map(|p| p.to_string()).collect()
}

/// Write `{base_name}.txt` and `{base_name}.csv` into `output_dir`
///
/// Existing files at either path are overwritten. No header, quoting or
/// trailing separator is written.
pub fn export(
    packages: &[PackageDescriptor],
    output_dir: &Path,
    base_name: &str,
) -> Result<ExportPaths, ExportError> {
    if !output_dir.is_dir() {
        return Err(ExportError::DirectoryNotFound {
            path: output_dir.to_path_buf(),
        });
    }

    let entries = format_entries(packages);
    let paths = ExportPaths {
        text: output_dir.join(format!("{}.txt", base_name)),
        csv: output_dir.join(format!("{}.csv", base_name)),
    };

    fs::write(&paths.text, entries.join(TEXT_SEPARATOR))
        .map_err(|e| ExportError::write(&paths.text, e))?;
    fs::write(&paths.csv, entries.join(CSV_SEPARATOR))
        .map_err(|e| ExportError::write(&paths.csv, e))?;

    tracing::debug!(
        text = %paths.text.display(),
        csv = %paths.csv.display(),
        count = entries.len(),
        "exported package list"
    );
    Ok(paths)
}
