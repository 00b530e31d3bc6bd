//! Deletion batch read from a package list file

use crate::error::BatchError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Ordered package ids to delete
///
/// Tokens are kept exactly as splitting on `,` yields them: no trimming,
/// no deduplication, empty tokens included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionBatch {
    package_ids: Vec<String>,
}

impl DeletionBatch {
    /// Build a batch from already-split package ids
    pub fn new(package_ids: Vec<String>) -> Self {
        Self { package_ids }
    }

    /// Parse batch content held in memory
    pub fn parse(content: &str) -> Self {
        let mut batch = Self::default();
        for line in content.lines() {
            batch.push_line(line);
        }
        batch
    }

    /// Read a batch file line by line
    ///
    /// The first read error aborts the whole batch.
    pub fn read(path: &Path) -> Result<Self, BatchError> {
        let file = File::open(path).map_err(|e| BatchError::read(path, e))?;
        let reader = BufReader::new(file);

        let mut batch = Self::default();
        for line in reader.lines() {
            let line = line.map_err(|e| BatchError::read(path, e))?;
            batch.push_line(&line);
        }

        tracing::debug!(
            path = %path.display(),
            count = batch.len(),
            "read deletion batch"
        );
        Ok(batch)
    }

    fn push_line(&mut self, line: &str) {
        self.package_ids
            .extend(line.split(',').map(|token| token.to_string()));
    }

    /// Package ids in file order
    pub fn package_ids(&self) -> &[String] {
        &self.package_ids
    }

    /// Number of package ids in the batch
    pub fn len(&self) -> usize {
        self.package_ids.len()
    }

    /// Returns true if the batch holds no package ids
    pub fn is_empty(&self) -> bool {
        self.package_ids.is_empty()
    }
}
