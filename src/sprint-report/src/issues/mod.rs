//! Sprint issue collection.
//!
//! This module pages through the issues of a sprint and accumulates them into
//! an [`IssueCollection`], in the order the service returns them.

mod collection;
mod error;
mod record;
mod status;

pub use collection::IssueCollection;
pub use error::CollectError;
pub use record::{IssueRecord, ParentRef, BUG_TYPE, CARRY_OVER_LABEL};
pub use status::IssueStatus;

use crate::config::{ReportSettings, DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE};
use crate::jira::IssueSearch;
use tracing::{debug, info, info_span, Instrument};

/// Page size and runaway guard for a collection pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    /// Issues requested per query.
    pub page_size: usize,

    /// Non-empty pages accepted before the pass fails.
    pub max_pages: usize,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

impl From<&ReportSettings> for PageLimits {
    fn from(settings: &ReportSettings) -> Self {
        Self {
            page_size: settings.page_size,
            max_pages: settings.max_pages,
        }
    }
}

/// Collects every issue of `sprint` in `project`.
///
/// Queries are ordered by parent so that issues sharing a parent arrive
/// together. Pages are fetched sequentially at offsets `0, page_size,
/// 2 * page_size, ...` until a page comes back empty.
///
/// An empty `project` short-circuits to an empty collection without querying.
///
/// # Errors
///
/// Returns [`CollectError::Query`] as soon as any query fails,
/// [`CollectError::PageLimitExceeded`] if more than `max_pages` non-empty
/// pages are returned, and [`CollectError::OffsetOverflow`] if the next offset
/// cannot be represented. No partial collection is returned in any case.
pub async fn collect_sprint_issues(
    client: &dyn IssueSearch,
    project: &str,
    sprint: &str,
    limits: PageLimits,
) -> Result<IssueCollection, CollectError> {
    if project.trim().is_empty() {
        debug!("No project given, skipping collection");
        return Ok(IssueCollection::new());
    }

    let span = info_span!("collect", project = %project, sprint = %sprint);

    async {
        let jql = build_sprint_query(project, sprint);
        debug!(jql = %jql, "Collecting sprint issues");

        let page_size = limits.page_size.max(1);
        let mut issues = IssueCollection::new();
        let mut page_index: usize = 0;

        loop {
            let start_at = page_index
                .checked_mul(page_size)
                .ok_or(CollectError::OffsetOverflow {
                    pages: page_index,
                    page_size,
                })?;
            let page = client.search_issues(&jql, start_at, page_size).await?;

            if page.is_empty() {
                break;
            }
            if page_index >= limits.max_pages {
                return Err(CollectError::PageLimitExceeded {
                    pages: limits.max_pages,
                });
            }

            debug!(start_at, count = page.len(), "Fetched page");
            page_index += 1;

            for issue in page {
                issues.insert(IssueRecord::from(issue));
            }
        }

        info!(count = issues.len(), pages = page_index, "Collected sprint issues");
        Ok(issues)
    }
    .instrument(span)
    .await
}

/// Builds the JQL selecting a sprint's issues, ordered by parent.
///
/// Format: `project = "{project}" AND sprint = "{sprint}" ORDER BY parent ASC`
#[must_use]
pub fn build_sprint_query(project: &str, sprint: &str) -> String {
    format!(
        "project = \"{}\" AND sprint = \"{}\" ORDER BY parent ASC",
        escape_jql(project),
        escape_jql(sprint)
    )
}

/// Escapes a value for use inside a double-quoted JQL string.
fn escape_jql(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
