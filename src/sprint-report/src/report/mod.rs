//! Markdown report rendering.
//!
//! The report lists every issue of a sprint under a header for its parent:
//!
//! ```text
//! # Sprint 42 report
//!
//! ### [Epic title](https://jira.example.com/browse/PE-1)
//!  - :white_check_mark: [Finished task](https://jira.example.com/browse/PE-2)
//!  - :warning: :beetle: [[LP#123](https://pad.lv/123) crash](https://jira.example.com/browse/PE-3)
//!    - In Progress
//! ```

mod icons;

pub use icons::{
    issue_icons, status_icon, BUG_ICON, CARRY_OVER_ICON, DONE_ICON, OPEN_ICON, REJECTED_ICON,
};

use crate::bug_id::find_bug_references;
use crate::config::ReportSettings;
use crate::issues::{IssueCollection, IssueRecord, ParentRef};
use crate::templates::{markdown_link, LinkFormatter, TemplateError};
use std::collections::HashMap;
use tracing::debug;

/// Header used for issues that have no parent.
pub const NO_PARENT_HEADER: &str = "### No parent";

/// Issues sharing one parent, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentGroup<'a> {
    /// The shared parent, or `None` for parentless issues.
    pub parent: Option<&'a ParentRef>,

    /// Member issues.
    pub issues: Vec<&'a IssueRecord>,
}

/// Groups issues by parent key.
///
/// Groups appear in the order their parent is first seen and issues keep
/// their relative order. Input already ordered by parent passes through
/// unchanged.
#[must_use]
pub fn group_by_parent(issues: &IssueCollection) -> Vec<ParentGroup<'_>> {
    let mut groups: Vec<ParentGroup<'_>> = Vec::new();
    let mut positions: HashMap<Option<&str>, usize> = HashMap::new();

    for issue in issues {
        let parent_key = issue.parent_key();
        match positions.get(&parent_key) {
            Some(&position) => {
                if position + 1 != groups.len() {
                    debug!(
                        key = %issue.key,
                        parent = parent_key.unwrap_or("-"),
                        "Issue is not adjacent to its parent group, regrouping"
                    );
                }
                groups[position].issues.push(issue);
            }
            None => {
                positions.insert(parent_key, groups.len());
                groups.push(ParentGroup {
                    parent: issue.parent.as_ref(),
                    issues: vec![issue],
                });
            }
        }
    }

    groups
}

/// Renders sprint issues as a markdown report.
pub struct ReportRenderer {
    links: LinkFormatter,
    bug_marker: String,
}

impl ReportRenderer {
    /// Creates a renderer from a link formatter and the bug marker to link.
    #[must_use]
    pub fn new(links: LinkFormatter, bug_marker: impl Into<String>) -> Self {
        Self {
            links,
            bug_marker: bug_marker.into(),
        }
    }

    /// Creates a renderer for `server` using the configured link formats.
    ///
    /// # Errors
    ///
    /// Returns an error if a link format is not a valid template.
    pub fn from_settings(server: &str, settings: &ReportSettings) -> Result<Self, TemplateError> {
        let links = LinkFormatter::new(
            server,
            &settings.browse_url_format,
            &settings.bug_url_format,
        )?;
        Ok(Self::new(links, settings.bug_marker.clone()))
    }

    /// Renders the report, one `\n`-terminated line per entry.
    ///
    /// An empty collection renders as an empty string.
    ///
    /// # Errors
    ///
    /// Returns an error if a link template fails to render.
    pub fn render(&self, issues: &IssueCollection, sprint: &str) -> Result<String, TemplateError> {
        let lines = self.render_lines(issues, sprint)?;
        Ok(lines.iter().map(|line| format!("{line}\n")).collect())
    }

    /// Renders the report as individual lines.
    ///
    /// # Errors
    ///
    /// Returns an error if a link template fails to render.
    pub fn render_lines(
        &self,
        issues: &IssueCollection,
        sprint: &str,
    ) -> Result<Vec<String>, TemplateError> {
        if issues.is_empty() {
            return Ok(Vec::new());
        }

        let mut lines = vec![format!("# {sprint} report")];

        for group in group_by_parent(issues) {
            lines.push(String::new());
            lines.push(self.parent_header(group.parent)?);

            for issue in group.issues {
                self.push_issue(&mut lines, issue)?;
            }
        }

        Ok(lines)
    }

    /// Rewrites every bug reference in `text` as a link to the bug tracker.
    ///
    /// A marker without digits still becomes a link, pointing at the bug URL
    /// rendered with an empty identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the bug link template fails to render.
    pub fn insert_bug_links(&self, text: &str) -> Result<String, TemplateError> {
        let mut linked = String::with_capacity(text.len());
        let mut rest = 0;

        for reference in find_bug_references(text, &self.bug_marker) {
            linked.push_str(&text[rest..reference.start]);
            linked.push_str(&markdown_link(
                &text[reference.start..reference.end],
                &self.links.bug_url(reference.id)?,
            ));
            rest = reference.end;
        }

        linked.push_str(&text[rest..]);
        Ok(linked)
    }

    fn parent_header(&self, parent: Option<&ParentRef>) -> Result<String, TemplateError> {
        match parent {
            Some(parent) => Ok(format!(
                "### {}",
                self.issue_link(&parent.key, &parent.summary)?
            )),
            None => Ok(NO_PARENT_HEADER.to_string()),
        }
    }

    fn push_issue(&self, lines: &mut Vec<String>, issue: &IssueRecord) -> Result<(), TemplateError> {
        lines.push(format!(
            " - {} {}",
            issue_icons(issue),
            self.issue_link(&issue.key, &issue.summary)?
        ));

        if issue.status.is_open() {
            lines.push(format!("   - {}", issue.status));
        }
        Ok(())
    }

    fn issue_link(&self, key: &str, summary: &str) -> Result<String, TemplateError> {
        Ok(markdown_link(
            &self.insert_bug_links(summary)?,
            &self.links.issue_url(key)?,
        ))
    }
}
