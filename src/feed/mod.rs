//! Package feed access
//!
//! This module provides:
//! - HTTP client shared foundation
//! - Feed reachability probe
//! - NuGet v2 OData feed adapter
//! - The package query engine applying a [`QueryFilter`]

mod client;
mod odata;
mod probe;

pub use client::{HttpClient, DEFAULT_USER_AGENT};
pub use odata::ODataFeedClient;
pub use probe::{probe, ProbeOutcome};

use crate::domain::{PackageDescriptor, QueryFilter};
use crate::error::FeedError;
use async_trait::async_trait;
use url::Url;

/// Trait for package feed adapters
#[async_trait]
pub trait FeedClient: Send + Sync {
    /// Check whether the feed URL answers
    async fn probe(&self, feed_url: &Url) -> ProbeOutcome;

    /// Fetch every package on the feed, in feed order
    async fn list_packages(&self, feed_url: &Url) -> Result<Vec<PackageDescriptor>, FeedError>;

    /// Fetch every version of one package id, including pre-release and delisted
    async fn find_packages_by_id(
        &self,
        feed_url: &Url,
        package_id: &str,
    ) -> Result<Vec<PackageDescriptor>, FeedError>;
}

/// Query a feed with a filter
///
/// With a package id the feed's versions of that id are narrowed to exact
/// id matches at or above the filter's minimum version. Without one the full
/// package set is returned. Feed order is kept and an empty result is `Ok`.
pub async fn query<C: FeedClient + ?Sized>(
    client: &C,
    feed_url: &Url,
    filter: &QueryFilter,
) -> Result<Vec<PackageDescriptor>, FeedError> {
    let packages: Vec<PackageDescriptor> = match filter.package_id() {
        Some(package_id) => client
            .find_packages_by_id(feed_url, package_id)
            .await?
            .into_iter()
            .filter(|package| filter.matches(package))
            .collect(),
        None => client.list_packages(feed_url).await?,
    };

    tracing::debug!(
        feed = %feed_url,
        filter = filter.package_id().unwrap_or(""),
        count = packages.len(),
        "query complete"
    );
    Ok(packages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mock feed returning canned packages and recording calls
    struct MockFeed {
        packages: Vec<PackageDescriptor>,
        calls: Mutex<Vec<String>>,
    }

    impl MockFeed {
        fn new(packages: Vec<PackageDescriptor>) -> Self {
            Self {
                packages,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl FeedClient for MockFeed {
        async fn probe(&self, _feed_url: &Url) -> ProbeOutcome {
            ProbeOutcome::Reachable
        }

        async fn list_packages(
            &self,
            _feed_url: &Url,
        ) -> Result<Vec<PackageDescriptor>, FeedError> {
            self.calls.lock().unwrap().push("list".to_string());
            Ok(self.packages.clone())
        }

        async fn find_packages_by_id(
            &self,
            _feed_url: &Url,
            package_id: &str,
        ) -> Result<Vec<PackageDescriptor>, FeedError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("find:{}", package_id));
            // Like a loose server-side search: prefix matches come back too
            Ok(self
                .packages
                .iter()
                .filter(|p| p.id.starts_with(package_id))
                .cloned()
                .collect())
        }
    }

    fn feed_url() -> Url {
        Url::parse("http://example.com/nuget").unwrap()
    }

    fn sample_packages() -> Vec<PackageDescriptor> {
        vec![
            PackageDescriptor::new("Zeta", "1.0.0"),
            PackageDescriptor::new("Foo.Bar", "2.0.0"),
            PackageDescriptor::new("Foo.Bar.Extensions", "1.0.0"),
            PackageDescriptor::new("Foo.Bar", "1.0.0-beta"),
            PackageDescriptor::new("Alpha", "0.1.0"),
        ]
    }

    #[tokio::test]
    async fn test_query_unfiltered_returns_full_set_in_feed_order() {
        let feed = MockFeed::new(sample_packages());
        let packages = query(&feed, &feed_url(), &QueryFilter::new(""))
            .await
            .unwrap();
        assert_eq!(packages, sample_packages());
        assert_eq!(feed.calls(), vec!["list"]);
    }

    #[tokio::test]
    async fn test_query_filtered_returns_exact_id_all_versions() {
        let feed = MockFeed::new(sample_packages());
        let packages = query(&feed, &feed_url(), &QueryFilter::new("Foo.Bar"))
            .await
            .unwrap();
        assert_eq!(
            packages,
            vec![
                PackageDescriptor::new("Foo.Bar", "2.0.0"),
                PackageDescriptor::new("Foo.Bar", "1.0.0-beta"),
            ]
        );
        assert_eq!(feed.calls(), vec!["find:Foo.Bar"]);
    }

    #[tokio::test]
    async fn test_query_empty_result_is_ok() {
        let feed = MockFeed::new(sample_packages());
        let packages = query(&feed, &feed_url(), &QueryFilter::new("Missing"))
            .await
            .unwrap();
        assert!(packages.is_empty());
    }
}
