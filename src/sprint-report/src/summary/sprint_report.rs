//! Outcome of a report run.

/// The rendered report of a sprint together with its issue count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SprintReport {
    /// Sprint the report covers.
    pub sprint: String,

    /// Number of issues found.
    pub issue_count: usize,

    /// Rendered markdown; empty when no issues were found.
    pub body: String,
}

impl SprintReport {
    /// Returns the line announcing how many issues were found.
    ///
    /// Format: "Found {n} issue(s) in JIRA"
    #[must_use]
    pub fn count_line(&self) -> String {
        let noun = if self.issue_count == 1 { "issue" } else { "issues" };
        format!("Found {} {noun} in JIRA", self.issue_count)
    }

    /// Returns true if any issues were found.
    #[must_use]
    pub fn has_issues(&self) -> bool {
        self.issue_count > 0
    }
}
