//! Package descriptor returned by a feed query

use std::fmt;

/// A package identifier and version as reported by the feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDescriptor {
    /// Package identifier (e.g., "Newtonsoft.Json")
    pub id: String,
    /// Version string as published (e.g., "13.0.1" or "2.0.0-beta1")
    pub version: String,
}

impl PackageDescriptor {
    /// Creates a new package descriptor
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for PackageDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.version)
    }
}
