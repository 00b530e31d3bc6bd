//! Feed reachability probe

use super::HttpClient;
use crate::error::transport_kind;
use reqwest::StatusCode;
use url::Url;

/// Result of probing a feed URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The server answered with anything other than 404
    Reachable,
    /// The server answered 404
    Unreachable,
    /// The request failed before a response was received
    ProbeError { kind: String, message: String },
}

impl ProbeOutcome {
    /// Classify an HTTP status
    pub fn from_status(status: StatusCode) -> Self {
        if status == StatusCode::NOT_FOUND {
            ProbeOutcome::Unreachable
        } else {
            ProbeOutcome::Reachable
        }
    }

    /// Build a probe error from a transport failure
    pub fn from_error(error: &reqwest::Error) -> Self {
        ProbeOutcome::ProbeError {
            kind: transport_kind(error).to_string(),
            message: error.to_string(),
        }
    }

    /// Returns true if the feed answered
    pub fn is_reachable(&self) -> bool {
        matches!(self, ProbeOutcome::Reachable)
    }
}

/// Send a HEAD request to the feed URL and classify the result
pub async fn probe(client: &HttpClient, feed_url: &Url) -> ProbeOutcome {
    match client.head(feed_url).await {
        Ok(status) => ProbeOutcome::from_status(status),
        Err(e) => {
            tracing::debug!(url = %feed_url, error = %e, "probe failed");
            ProbeOutcome::from_error(&e)
        }
    }
}
