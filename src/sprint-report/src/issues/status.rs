//! Issue status categories.

use std::fmt;

/// Workflow status of an issue, reduced to what the report distinguishes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IssueStatus {
    /// Work completed.
    Done,

    /// Work dropped.
    Rejected,

    /// Any other status, e.g. "In Progress", "In Review", "Untriaged".
    Other(String),
}

impl IssueStatus {
    /// Maps a Jira status name. Matching is exact and case-sensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Done" => Self::Done,
            "Rejected" => Self::Rejected,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the status name as Jira reports it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Done => "Done",
            Self::Rejected => "Rejected",
            Self::Other(name) => name,
        }
    }

    /// Returns true for statuses that still need attention.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Other(_))
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
