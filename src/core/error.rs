// src/core/error.rs

use std::time::Duration;
use thiserror::Error;

/// Every way a fetch can fail to produce a usable HTTP response.
///
/// This is the only error the engine knows about. It never escapes
/// `auditor::audit`, which folds it into `AuditResult::error`.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request timed out after {} seconds", .0.as_secs())]
    Timeout(Duration),

    #[error("connection failed: {0}")]
    Connect(#[source] reqwest::Error),

    #[error("too many redirects: {0}")]
    Redirect(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("could not read response body: {0}")]
    Body(#[source] reqwest::Error),
}

impl FetchError {
    /// Sorts a `reqwest` send error into the matching variant.
    pub fn from_send(error: reqwest::Error, timeout: Duration) -> Self {
        if error.is_timeout() {
            FetchError::Timeout(timeout)
        } else if error.is_connect() {
            FetchError::Connect(error)
        } else if error.is_redirect() {
            FetchError::Redirect(error)
        } else {
            FetchError::Request(error)
        }
    }
}
