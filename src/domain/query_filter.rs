//! Query filter for feed package listings
//!
//! A filter either names a single package id or is empty, meaning the whole
//! feed is listed. The remaining options are fixed: every version, including
//! pre-release and delisted ones, from `0.0.0` upwards.

use super::PackageDescriptor;
use semver::{BuildMetadata, Prerelease, Version};

/// Filter applied when querying a feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryFilter {
    /// Package id to match; `None` lists every package
    package_id: Option<String>,
    /// Include pre-release versions
    pub include_prerelease: bool,
    /// Include delisted (unlisted) versions
    pub include_delisted: bool,
    /// Return every version rather than only the latest
    pub all_versions: bool,
    /// Lowest version returned
    pub min_version: Version,
    /// Whether `min_version` itself is returned
    pub min_inclusive: bool,
}

impl QueryFilter {
    /// Create a filter from raw user input; blank input means "no filter"
    pub fn new(package_id: &str) -> Self {
        let trimmed = package_id.trim();
        Self {
            package_id: (!trimmed.is_empty()).then(|| trimmed.to_string()),
            include_prerelease: true,
            include_delisted: true,
            all_versions: true,
            min_version: Version::new(0, 0, 0),
            min_inclusive: true,
        }
    }

    /// Create a filter that lists every package on the feed
    pub fn unfiltered() -> Self {
        Self::new("")
    }

    /// The package id being filtered on, if any
    pub fn package_id(&self) -> Option<&str> {
        self.package_id.as_deref()
    }

    /// Returns true if a package id filter is applied
    pub fn is_filtered(&self) -> bool {
        self.package_id.is_some()
    }

    /// Human-readable labels for the fixed query options
    pub fn option_labels(&self) -> Vec<String> {
        let mut labels = Vec::new();
        if self.all_versions {
            labels.push("all versions".to_string());
        }
        if self.include_delisted {
            labels.push("include delisted".to_string());
        }
        if self.include_prerelease {
            labels.push("include pre-release".to_string());
        }
        let bound = if self.min_inclusive { ">=" } else { ">" };
        labels.push(format!("version {} {}", bound, self.min_version));
        labels
    }

    /// Check whether a package returned by the feed satisfies this filter
    pub fn matches(&self, package: &PackageDescriptor) -> bool {
        if let Some(id) = &self.package_id {
            if !package.id.eq_ignore_ascii_case(id) {
                return false;
            }
        }

        // Versions the semver model cannot represent are kept: the feed
        // already returned them for this id.
        let Some(version) = parse_nuget_version(&package.version) else {
            return true;
        };

        if !self.include_prerelease && !version.pre.is_empty() {
            return false;
        }

        if self.min_inclusive {
            version >= self.min_version
        } else {
            version > self.min_version
        }
    }
}

impl Default for QueryFilter {
    fn default() -> Self {
        Self::unfiltered()
    }
}

/// Parse a NuGet version string into a semver version
///
/// NuGet accepts one to four numeric parts ("1", "1.0", "1.0.0", "1.0.0.0");
/// missing parts are zero and the fourth (revision) part is dropped.
pub fn parse_nuget_version(raw: &str) -> Option<Version> {
    let raw = raw.trim();
    let (without_build, build) = match raw.split_once('+') {
        Some((head, build)) => (head, Some(build)),
        None => (raw, None),
    };
    let (numeric, pre) = match without_build.split_once('-') {
        Some((head, pre)) => (head, Some(pre)),
        None => (without_build, None),
    };

    let parts: Vec<&str> = numeric.split('.').collect();
    if parts.is_empty() || parts.len() > 4 {
        return None;
    }

    let mut numbers = [0u64; 3];
    for (slot, part) in numbers.iter_mut().zip(parts.iter()) {
        *slot = part.parse().ok()?;
    }
    if let Some(revision) = parts.get(3) {
        revision.parse::<u64>().ok()?;
    }

    let mut version = Version::new(numbers[0], numbers[1], numbers[2]);
    if let Some(pre) = pre {
        version.pre = Prerelease::new(pre).ok()?;
    }
    if let Some(build) = build {
        version.build = BuildMetadata::new(build).ok()?;
    }
    Some(version)
}
