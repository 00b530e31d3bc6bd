//! NuGet v2 OData feed adapter
//!
//! Queries a NuGet Server style feed through its OData endpoints:
//! - `{feed}/Packages()` for the full package set
//! - `{feed}/FindPackagesById()?id='{id}'` for every version of one id
//!
//! Responses are requested as JSON. Server-driven paging is followed until
//! the feed stops returning a next link; a link back to a page already
//! fetched is rejected.

use super::{probe, FeedClient, HttpClient, ProbeOutcome};
use crate::domain::PackageDescriptor;
use crate::error::FeedError;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashSet;
use url::Url;

/// OData feed adapter
pub struct ODataFeedClient {
    client: HttpClient,
}

/// OData JSON document, verbose (`d`) or light (`value`) shape
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ODataDocument {
    Verbose {
        d: VerboseBody,
    },
    Light {
        value: Vec<ODataPackage>,
        #[serde(rename = "odata.nextLink", alias = "@odata.nextLink")]
        next_link: Option<String>,
    },
}

/// Body of a verbose OData document
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum VerboseBody {
    Paged {
        results: Vec<ODataPackage>,
        #[serde(rename = "__next")]
        next: Option<String>,
    },
    Bare(Vec<ODataPackage>),
}

/// Package entry in an OData response
#[derive(Debug, Deserialize)]
struct ODataPackage {
    #[serde(rename = "Id")]
    id: String,
    #[serde(rename = "Version")]
    version: String,
}

impl ODataDocument {
    /// Split a page into its packages and the next link, if any
    fn into_page(self) -> (Vec<ODataPackage>, Option<String>) {
        match self {
            ODataDocument::Verbose {
                d: VerboseBody::Paged { results, next },
            } => (results, next),
            ODataDocument::Verbose {
                d: VerboseBody::Bare(results),
            } => (results, None),
            ODataDocument::Light { value, next_link } => (value, next_link),
        }
    }
}

impl ODataFeedClient {
    /// Create a new OData feed adapter
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Build the URL for an OData function on the feed
    fn endpoint(feed_url: &Url, function: &str) -> Result<Url, FeedError> {
        let mut base = feed_url.clone();
        base.set_query(None);
        base.set_fragment(None);
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(function)
            .map_err(|e| FeedError::invalid_url(feed_url.as_str(), e.to_string()))
    }

    /// Build the URL listing every package
    fn packages_url(feed_url: &Url) -> Result<Url, FeedError> {
        Self::endpoint(feed_url, "Packages()")
    }

    /// Build the URL listing every version of one package id
    fn find_by_id_url(feed_url: &Url, package_id: &str) -> Result<Url, FeedError> {
        let mut url = Self::endpoint(feed_url, "FindPackagesById()")?;
        url.query_pairs_mut()
            .append_pair("id", &format!("'{}'", package_id.replace('\'', "''")));
        Ok(url)
    }

    /// Fetch every page starting at `first`, preserving feed order
    async fn fetch_all(&self, first: Url) -> Result<Vec<PackageDescriptor>, FeedError> {
        let mut packages = Vec::new();
        let mut visited = HashSet::new();
        let mut next = Some(first);
        let mut page = 0usize;

        while let Some(url) = next.take() {
            visited.insert(url.clone());
            let document: ODataDocument = self.client.get_json(&url).await?;
            let (entries, next_link) = document.into_page();
            page += 1;
            tracing::debug!(url = %url, page, entries = entries.len(), "fetched feed page");

            packages.extend(
                entries
                    .into_iter()
                    .map(|entry| PackageDescriptor::new(entry.id, entry.version)),
            );

            if let Some(link) = next_link {
                let next_url = url
                    .join(&link)
                    .map_err(|e| FeedError::invalid_response(url.as_str(), e.to_string()))?;
                if visited.contains(&next_url) {
                    return Err(FeedError::invalid_response(
                        url.as_str(),
                        format!("next link {} points at a page already fetched", next_url),
                    ));
                }
                next = Some(next_url);
            }
        }

        Ok(packages)
    }
}

#[async_trait]
impl FeedClient for ODataFeedClient {
    async fn probe(&self, feed_url: &Url) -> ProbeOutcome {
        probe(&self.client, feed_url).await
    }

    async fn list_packages(&self, feed_url: &Url) -> Result<Vec<PackageDescriptor>, FeedError> {
        self.fetch_all(Self::packages_url(feed_url)?).await
    }

    async fn find_packages_by_id(
        &self,
        feed_url: &Url,
        package_id: &str,
    ) -> Result<Vec<PackageDescriptor>, FeedError> {
        self.fetch_all(Self::find_by_id_url(feed_url, package_id)?)
            .await
    }
}
