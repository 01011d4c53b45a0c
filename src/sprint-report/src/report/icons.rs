//! Status and annotation icons.

use crate::issues::{IssueRecord, IssueStatus};

/// Shown for finished issues.
pub const DONE_ICON: &str = ":white_check_mark:";

/// Shown for rejected issues.
pub const REJECTED_ICON: &str = ":negative_squared_cross_mark:";

/// Shown for any status still in flight.
pub const OPEN_ICON: &str = ":warning:";

/// Appended for bugs.
pub const BUG_ICON: &str = ":beetle:";

/// Appended for work carried over from a previous sprint.
pub const CARRY_OVER_ICON: &str = ":arrow_right_hook:";

/// Returns the icon for a status.
#[must_use]
pub fn status_icon(status: &IssueStatus) -> &'static str {
    match status {
        IssueStatus::Done => DONE_ICON,
        IssueStatus::Rejected => REJECTED_ICON,
        IssueStatus::Other(_) => OPEN_ICON,
    }
}

/// Returns the space-separated icons for an issue: status, then bug, then carry-over.
#[must_use]
pub fn issue_icons(issue: &IssueRecord) -> String {
    let mut icons = vec![status_icon(&issue.status)];
    if issue.is_bug() {
        icons.push(BUG_ICON);
    }
    if issue.is_carry_over() {
        icons.push(CARRY_OVER_ICON);
    }
    icons.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::record;

    #[test]
    fn done_task_has_only_checkmark() {
        assert_eq!(issue_icons(&record("PE-1", "Done", "Task", None)), DONE_ICON);
    }

    #[test]
    fn rejected_bug() {
        assert_eq!(
            issue_icons(&record("PE-1", "Rejected", "Bug", None)),
            ":negative_squared_cross_mark: :beetle:"
        );
    }

    #[test]
    fn open_carried_over_bug_has_all_icons() {
        let mut issue = record("PE-1", "In Review", "Bug", None);
        issue.labels = vec!["backend".to_string(), "Carry-over".to_string()];

        assert_eq!(issue_icons(&issue), ":warning: :beetle: :arrow_right_hook:");
    }

    #[test]
    fn unknown_status_warns() {
        assert_eq!(
            status_icon(&IssueStatus::from_name("Untriaged")),
            OPEN_ICON
        );
    }
}
