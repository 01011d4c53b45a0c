//! Collected issue records.

use super::IssueStatus;
use crate::jira::JiraIssue;

/// Issue type name that earns the bug icon.
pub const BUG_TYPE: &str = "Bug";

/// Label marking work carried over from a previous sprint.
pub const CARRY_OVER_LABEL: &str = "Carry-over";

/// Parent issue reference. Key and summary always travel together.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParentRef {
    /// Parent key.
    pub key: String,

    /// Parent title.
    pub summary: String,
}

/// One issue found in the sprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRecord {
    /// Issue key (e.g. "PE-123").
    pub key: String,

    /// Workflow status.
    pub status: IssueStatus,

    /// Issue type name (e.g. "Bug", "Task").
    pub issue_type: String,

    /// Issue title.
    pub summary: String,

    /// Labels attached to the issue.
    pub labels: Vec<String>,

    /// Parent issue, if any.
    pub parent: Option<ParentRef>,
}

impl IssueRecord {
    /// Returns true if the issue type is a bug.
    #[must_use]
    pub fn is_bug(&self) -> bool {
        self.issue_type == BUG_TYPE
    }

    /// Returns true if the issue carries the carry-over label.
    #[must_use]
    pub fn is_carry_over(&self) -> bool {
        self.labels.iter().any(|label| label == CARRY_OVER_LABEL)
    }

    /// Returns the parent key, if any.
    #[must_use]
    pub fn parent_key(&self) -> Option<&str> {
        self.parent.as_ref().map(|parent| parent.key.as_str())
    }
}

impl From<JiraIssue> for IssueRecord {
    fn from(issue: JiraIssue) -> Self {
        let fields = issue.fields;
        Self {
            key: issue.key,
            status: IssueStatus::from_name(&fields.status.name),
            issue_type: fields.issue_type.name,
            summary: fields.summary,
            labels: fields.labels,
            parent: fields.parent.map(|parent| ParentRef {
                key: parent.key,
                summary: parent.fields.summary,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::jira_issue;

    #[test]
    fn converts_issue_with_parent() {
        let record = IssueRecord::from(jira_issue(
            "PE-7",
            "In Review",
            "Bug",
            "LP#42 crash",
            &["Carry-over"],
            Some(("PE-1", "Epic")),
        ));

        assert_eq!(record.key, "PE-7");
        assert_eq!(record.status, IssueStatus::Other("In Review".to_string()));
        assert!(record.is_bug());
        assert!(record.is_carry_over());
        assert_eq!(
            record.parent,
            Some(ParentRef {
                key: "PE-1".to_string(),
                summary: "Epic".to_string()
            })
        );
        assert_eq!(record.parent_key(), Some("PE-1"));
    }

    #[test]
    fn converts_issue_without_parent() {
        let record = IssueRecord::from(jira_issue("PE-8", "Done", "Task", "Docs", &[], None));

        assert_eq!(record.status, IssueStatus::Done);
        assert!(!record.is_bug());
        assert!(!record.is_carry_over());
        assert!(record.parent.is_none());
        assert_eq!(record.parent_key(), None);
    }
}
