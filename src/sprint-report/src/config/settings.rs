//! Report settings from the `[report]` section.

use crate::bug_id::DEFAULT_BUG_MARKER;
use crate::config::ConfigError;
use serde::Deserialize;
use std::time::Duration;

/// Issues requested per search call.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Largest page Jira serves per search call; larger requests are clamped.
pub const MAX_PAGE_SIZE: usize = 100;

/// Non-empty pages accepted before collection gives up.
pub const DEFAULT_MAX_PAGES: usize = 200;

/// HTTP request timeout.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Link target for an embedded bug identifier.
pub const DEFAULT_BUG_URL_FORMAT: &str = "https://pad.lv/{{id}}";

/// Link target for a Jira issue.
pub const DEFAULT_BROWSE_URL_FORMAT: &str = "{{server}}/browse/{{key}}";

/// Tunables for collection and rendering. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ReportSettings {
    /// Issues requested per search call.
    pub page_size: usize,

    /// Non-empty pages accepted before collection fails.
    pub max_pages: usize,

    /// HTTP request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Marker preceding embedded bug identifiers in titles.
    pub bug_marker: String,

    /// Handlebars format for bug links; receives `id`.
    pub bug_url_format: String,

    /// Handlebars format for issue links; receives `server` and `key`.
    pub browse_url_format: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            bug_marker: DEFAULT_BUG_MARKER.to_string(),
            bug_url_format: DEFAULT_BUG_URL_FORMAT.to_string(),
            browse_url_format: DEFAULT_BROWSE_URL_FORMAT.to_string(),
        }
    }
}

impl ReportSettings {
    /// Returns the HTTP request timeout.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Checks that the numeric limits and the marker are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] naming the offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |key: &str, message: &str| ConfigError::ValidationError {
            key: key.to_string(),
            message: message.to_string(),
        };

        if self.page_size == 0 {
            return Err(invalid("page-size", "must be at least 1"));
        }
        if self.page_size > MAX_PAGE_SIZE {
            return Err(invalid(
                "page-size",
                &format!("must be at most {MAX_PAGE_SIZE}"),
            ));
        }
        if self.max_pages == 0 {
            return Err(invalid("max-pages", "must be at least 1"));
        }
        if self.request_timeout_secs == 0 {
            return Err(invalid("request-timeout-secs", "must be at least 1"));
        }
        if self.bug_marker.is_empty() {
            return Err(invalid("bug-marker", "must not be empty"));
        }
        Ok(())
    }
}
