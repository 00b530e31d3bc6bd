//! Input validators used by the prompt loop
//!
//! Each validator receives already-trimmed input.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use url::Url;

/// Longest package id NuGet accepts
pub const MAX_PACKAGE_ID_LENGTH: usize = 100;

static PACKAGE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.\-]+$").unwrap());

/// Non-empty after trimming
pub fn is_present(input: &str) -> bool {
    !input.trim().is_empty()
}

/// Present and names an existing regular file
pub fn is_existing_file(input: &str) -> bool {
    is_present(input) && Path::new(input).is_file()
}

/// Present and parses as an absolute http(s) URL with a host
pub fn is_absolute_url(input: &str) -> bool {
    parse_feed_url(input).is_some()
}

/// Empty (no filter) or a well-formed package id
pub fn is_package_id_filter(input: &str) -> bool {
    input.is_empty() || is_package_id(input)
}

/// A well-formed package id
pub fn is_package_id(input: &str) -> bool {
    input.len() <= MAX_PACKAGE_ID_LENGTH && PACKAGE_ID_RE.is_match(input)
}

/// Parse a feed URL, accepting only absolute http(s) URLs with a host
pub fn parse_feed_url(input: &str) -> Option<Url> {
    if !is_present(input) {
        return None;
    }
    let url = Url::parse(input.trim()).ok()?;
    let supported_scheme = matches!(url.scheme(), "http" | "https");
    (supported_scheme && url.host_str().is_some_and(|h| !h.is_empty())).then_some(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_present() {
        assert!(is_present("x"));
        assert!(!is_present(""));
        assert!(!is_present("   "));
    }

    #[test]
    fn test_is_existing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file = temp_dir.path().join("packages.csv");
        std::fs::write(&file, "pkg1").unwrap();

        assert!(is_existing_file(file.to_str().unwrap()));
        assert!(!is_existing_file(temp_dir.path().to_str().unwrap()));
        assert!(!is_existing_file(
            temp_dir.path().join("missing.csv").to_str().unwrap()
        ));
        assert!(!is_existing_file(""));
    }

    #[test]
    fn test_is_absolute_url() {
        assert!(is_absolute_url("http://example.com/nuget"));
        assert!(is_absolute_url("https://nuget.example.com/api/v2/"));
        assert!(is_absolute_url("http://localhost:8080"));
    }

    #[test]
    fn test_is_absolute_url_rejects_relative_and_other_schemes() {
        assert!(!is_absolute_url(""));
        assert!(!is_absolute_url("example.com/nuget"));
        assert!(!is_absolute_url("/nuget"));
        assert!(!is_absolute_url("ftp://example.com/nuget"));
        assert!(!is_absolute_url("file:///tmp/feed"));
        assert!(!is_absolute_url("not a url"));
    }

    #[test]
    fn test_parse_feed_url_normalizes() {
        let url = parse_feed_url("HTTP://Example.COM/nuget").unwrap();
        assert_eq!(url.as_str(), "http://example.com/nuget");
    }

    #[test]
    fn test_is_package_id_filter() {
        assert!(is_package_id_filter(""));
        assert!(is_package_id_filter("Foo.Bar"));
        assert!(is_package_id_filter("foo-bar_baz.1"));
        assert!(!is_package_id_filter("Foo Bar"));
        assert!(!is_package_id_filter("Foo,Bar"));
        assert!(!is_package_id_filter(&"a".repeat(MAX_PACKAGE_ID_LENGTH + 1)));
    }
}
