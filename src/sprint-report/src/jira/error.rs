//! Jira client error types.

use thiserror::Error;

/// Errors that can occur while talking to the Jira REST API.
#[derive(Debug, Error)]
pub enum JiraError {
    /// The configured server is not a usable base URL.
    #[error("Invalid Jira server URL '{server}': {source}")]
    InvalidServer {
        server: String,
        #[source]
        source: url::ParseError,
    },

    /// Transport-level failure (connection, TLS, timeout).
    #[error("Jira request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Jira answered with a non-success status code.
    #[error("Jira API error ({status}): {message}")]
    Status { status: u16, message: String },

    /// Jira served a smaller page than requested.
    #[error("Jira clamped the page size from {requested} to {applied}")]
    PageClamped { requested: usize, applied: usize },

    /// Response body could not be decoded.
    #[error("Failed to parse Jira search response: {0}")]
    Decode(#[from] serde_json::Error),
}
