//! Shared fixtures for unit tests.

use crate::issues::{IssueRecord, IssueStatus, ParentRef};
use crate::jira::{IssueFields, IssueSearch, JiraError, JiraIssue, NamedField, ParentFields, ParentIssue};
use futures::future::BoxFuture;
use std::sync::Mutex;

pub(crate) const SERVER: &str = "https://jira.example.com";

/// Builds a wire-level issue.
pub(crate) fn jira_issue(
    key: &str,
    status: &str,
    issue_type: &str,
    summary: &str,
    labels: &[&str],
    parent: Option<(&str, &str)>,
) -> JiraIssue {
    JiraIssue {
        key: key.to_string(),
        fields: IssueFields {
            summary: summary.to_string(),
            status: NamedField {
                name: status.to_string(),
            },
            issue_type: NamedField {
                name: issue_type.to_string(),
            },
            labels: labels.iter().map(|label| label.to_string()).collect(),
            parent: parent.map(|(key, summary)| ParentIssue {
                key: key.to_string(),
                fields: ParentFields {
                    summary: summary.to_string(),
                },
            }),
        },
    }
}

/// Builds a collected record with a generated summary and no labels.
pub(crate) fn record(
    key: &str,
    status: &str,
    issue_type: &str,
    parent: Option<(&str, &str)>,
) -> IssueRecord {
    IssueRecord {
        key: key.to_string(),
        status: IssueStatus::from_name(status),
        issue_type: issue_type.to_string(),
        summary: format!("Summary of {key}"),
        labels: Vec::new(),
        parent: parent.map(|(key, summary)| ParentRef {
            key: key.to_string(),
            summary: summary.to_string(),
        }),
    }
}

/// Builds a page of `count` distinct parentless issues.
pub(crate) fn page(prefix: &str, count: usize) -> Vec<JiraIssue> {
    (0..count)
        .map(|n| jira_issue(&format!("{prefix}-{n}"), "Done", "Task", "Item", &[], None))
        .collect()
}

/// A recorded call to [`MockSearch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchCall {
    pub(crate) jql: String,
    pub(crate) start_at: usize,
    pub(crate) max_results: usize,
}

/// In-memory search serving canned pages in call order.
pub(crate) struct MockSearch {
    pages: Vec<Vec<JiraIssue>>,
    fail_at: Option<usize>,
    endless: bool,
    calls: Mutex<Vec<SearchCall>>,
}

impl MockSearch {
    /// Serves `pages` in order, then empty pages.
    pub(crate) fn new(pages: Vec<Vec<JiraIssue>>) -> Self {
        Self {
            pages,
            fail_at: None,
            endless: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Serves `pages` but fails on the call with index `call`.
    pub(crate) fn failing_at(pages: Vec<Vec<JiraIssue>>, call: usize) -> Self {
        Self {
            fail_at: Some(call),
            ..Self::new(pages)
        }
    }

    /// Serves the same non-empty page forever.
    pub(crate) fn endless(page: Vec<JiraIssue>) -> Self {
        Self {
            endless: true,
            ..Self::new(vec![page])
        }
    }

    /// Calls received so far.
    pub(crate) fn calls(&self) -> Vec<SearchCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl IssueSearch for MockSearch {
    fn server(&self) -> &str {
        SERVER
    }

    fn search_issues<'a>(
        &'a self,
        jql: &'a str,
        start_at: usize,
        max_results: usize,
    ) -> BoxFuture<'a, Result<Vec<JiraIssue>, JiraError>> {
        let mut calls = self.calls.lock().unwrap();
        let index = calls.len();
        calls.push(SearchCall {
            jql: jql.to_string(),
            start_at,
            max_results,
        });
        drop(calls);

        let result = if self.fail_at == Some(index) {
            Err(JiraError::Status {
                status: 401,
                message: "Unauthorized".to_string(),
            })
        } else if self.endless {
            Ok(self.pages[0].clone())
        } else {
            Ok(self.pages.get(index).cloned().unwrap_or_default())
        };

        Box::pin(async move { result })
    }
}
