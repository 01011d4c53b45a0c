//! Issue collection error types.

use crate::jira::JiraError;
use thiserror::Error;

/// Errors that can occur while collecting sprint issues.
#[derive(Debug, Error)]
pub enum CollectError {
    /// A search query failed.
    #[error("Failed to query sprint issues: {0}")]
    Query(#[from] JiraError),

    /// The next page offset does not fit in `usize`.
    #[error("Page offset overflows after {pages} pages of {page_size} issues")]
    OffsetOverflow { pages: usize, page_size: usize },

    /// The service kept returning results past the page limit.
    #[error("Search still returned results after {pages} pages; refusing to continue")]
    PageLimitExceeded { pages: usize },
}
