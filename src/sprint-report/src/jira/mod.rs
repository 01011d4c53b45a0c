//! Jira search port and its live REST adapter.
//!
//! Collection code only depends on [`IssueSearch`], so tests can substitute an
//! in-memory implementation for the real service.

mod error;
mod model;

pub use error::JiraError;
pub use model::{
    IssueFields, JiraIssue, NamedField, ParentFields, ParentIssue, SearchResponse, SEARCH_FIELDS,
};

use crate::config::JiraCredentials;
use futures::future::BoxFuture;
use model::ErrorResponse;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Path of the issue search endpoint, relative to the server URL.
///
/// This is the offset-paginated endpoint of Jira Server and Data Center.
/// Jira Cloud has retired it in favour of token-based pagination.
const SEARCH_PATH: &str = "rest/api/2/search";

/// Paginated issue search against an issue tracker.
pub trait IssueSearch: Send + Sync {
    /// Base URL of the server, without a trailing slash. Used to build links.
    fn server(&self) -> &str;

    /// Runs `jql` and returns up to `max_results` issues starting at `start_at`.
    ///
    /// An empty page means there are no more results.
    fn search_issues<'a>(
        &'a self,
        jql: &'a str,
        start_at: usize,
        max_results: usize,
    ) -> BoxFuture<'a, Result<Vec<JiraIssue>, JiraError>>;
}

/// Live Jira client using basic authentication with an API token.
#[derive(Clone)]
pub struct JiraClient {
    http: Client,
    server: String,
    search_url: Url,
    login: String,
    token: String,
}

impl JiraClient {
    /// Creates a client for the given credentials.
    ///
    /// # Errors
    ///
    /// Returns [`JiraError::InvalidServer`] if the server is not an absolute
    /// URL, or [`JiraError::Http`] if the HTTP client cannot be built.
    pub fn new(credentials: &JiraCredentials, timeout: Duration) -> Result<Self, JiraError> {
        let search_url = search_url(&credentials.server)?;
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            server: credentials.server.trim_end_matches('/').to_string(),
            search_url,
            login: credentials.login.clone(),
            token: credentials.token.clone(),
        })
    }
}

impl IssueSearch for JiraClient {
    fn server(&self) -> &str {
        &self.server
    }

    fn search_issues<'a>(
        &'a self,
        jql: &'a str,
        start_at: usize,
        max_results: usize,
    ) -> BoxFuture<'a, Result<Vec<JiraIssue>, JiraError>> {
        Box::pin(async move {
            debug!(start_at, max_results, "Querying Jira search endpoint");

            let response = self
                .http
                .get(self.search_url.clone())
                .basic_auth(&self.login, Some(&self.token))
                .query(&[("jql", jql), ("fields", SEARCH_FIELDS)])
                .query(&[("startAt", start_at), ("maxResults", max_results)])
                .send()
                .await?;

            let status = response.status();
            let body = response.text().await?;

            if !status.is_success() {
                return Err(JiraError::Status {
                    status: status.as_u16(),
                    message: error_message(&body, status.canonical_reason()),
                });
            }

            let page: SearchResponse = serde_json::from_str(&body)?;
            page_issues(page, max_results)
        })
    }
}

/// Takes the issues out of a page, rejecting pages Jira shrank.
///
/// Offsets advance by the requested size, so a clamped page would silently
/// skip issues.
fn page_issues(page: SearchResponse, requested: usize) -> Result<Vec<JiraIssue>, JiraError> {
    debug!(
        start_at = page.start_at,
        max_results = page.max_results,
        total = ?page.total,
        returned = page.issues.len(),
        "Received Jira search page"
    );

    if page.max_results != 0 && page.max_results < requested {
        return Err(JiraError::PageClamped {
            requested,
            applied: page.max_results,
        });
    }

    Ok(page.issues)
}

/// Resolves the search endpoint for a server, keeping any context path.
fn search_url(server: &str) -> Result<Url, JiraError> {
    let invalid = |source| JiraError::InvalidServer {
        server: server.to_string(),
        source,
    };

    let mut base = Url::parse(server.trim()).map_err(invalid)?;
    if base.cannot_be_a_base() {
        return Err(invalid(url::ParseError::RelativeUrlWithCannotBeABaseBase));
    }
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join(SEARCH_PATH).map_err(invalid)
}

/// Extracts a readable message from a Jira error body.
fn error_message(body: &str, reason: Option<&str>) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorResponse>(body) {
        if !parsed.error_messages.is_empty() {
            return parsed.error_messages.join("; ");
        }
    }

    let body = body.trim();
    if body.is_empty() {
        reason.unwrap_or("no response body").to_string()
    } else {
        body.to_string()
    }
}
