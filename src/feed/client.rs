//! HTTP client shared foundation
//!
//! This module provides a shared HTTP client with:
//! - Configurable timeout (none by default) and User-Agent
//! - A probe client that never follows redirects
//! - JSON GET with status and payload error mapping
//!
//! Requests are never retried.

use crate::error::FeedError;
use reqwest::header::ACCEPT;
use reqwest::redirect::Policy;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

/// Default User-Agent header
pub const DEFAULT_USER_AGENT: &str = concat!("nuget-feed-tools/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper for feed requests
#[derive(Clone)]
pub struct HttpClient {
    /// Client used for feed queries
    client: Client,
    /// Client used for reachability probes; redirects are not followed
    probe_client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, FeedError> {
        Self::with_config(None, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Option<Duration>, user_agent: &str) -> Result<Self, FeedError> {
        let build = |redirect: Policy| {
            let mut builder = Client::builder().user_agent(user_agent).redirect(redirect);
            if let Some(timeout) = timeout {
                builder = builder.timeout(timeout);
            }
            builder.build().map_err(|e| FeedError::ClientBuild {
                message: e.to_string(),
            })
        };

        Ok(Self {
            client: build(Policy::default())?,
            probe_client: build(Policy::none())?,
        })
    }

    /// Send a HEAD request without following redirects
    pub async fn head(&self, url: &Url) -> Result<StatusCode, reqwest::Error> {
        tracing::debug!(url = %url, "HEAD");
        let response = self.probe_client.head(url.as_str()).send().await?;
        tracing::debug!(url = %url, status = response.status().as_u16(), "HEAD response");
        Ok(response.status())
    }

    /// Perform a GET request and parse the JSON response
    pub async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &Url) -> Result<T, FeedError> {
        tracing::debug!(url = %url, "GET");
        let response = self
            .client
            .get(url.as_str())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FeedError::transport(url.as_str(), &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::status(url.as_str(), status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FeedError::transport(url.as_str(), &e))?;

        serde_json::from_str(&body).map_err(|e| {
            FeedError::invalid_response(url.as_str(), format!("failed to parse JSON: {}", e))
        })
    }
}
