//! Wire types for the Jira search endpoint.
//!
//! Only the fields the report needs are modelled; everything else in the
//! response is ignored.

use serde::Deserialize;

/// Fields requested from the search endpoint.
pub const SEARCH_FIELDS: &str = "summary,status,issuetype,labels,parent";

/// One page of search results.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Offset of the first returned issue.
    #[serde(default)]
    pub start_at: usize,

    /// Page size Jira actually applied.
    #[serde(default)]
    pub max_results: usize,

    /// Total matches reported by Jira (may be absent on newer endpoints).
    pub total: Option<usize>,

    /// Issues on this page.
    #[serde(default)]
    pub issues: Vec<JiraIssue>,
}

/// An issue as returned by Jira.
#[derive(Debug, Clone, Deserialize)]
pub struct JiraIssue {
    /// Issue key (e.g. "PROJ-123").
    pub key: String,

    /// Requested fields.
    pub fields: IssueFields,
}

/// Requested fields of an issue.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueFields {
    /// Issue title.
    #[serde(default)]
    pub summary: String,

    /// Workflow status.
    pub status: NamedField,

    /// Issue type.
    #[serde(rename = "issuetype")]
    pub issue_type: NamedField,

    /// Labels attached to the issue.
    #[serde(default)]
    pub labels: Vec<String>,

    /// Parent issue, absent for top-level issues.
    #[serde(default)]
    pub parent: Option<ParentIssue>,
}

/// Any Jira field object carrying a display `name`.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedField {
    /// Display name (e.g. "In Progress", "Bug").
    pub name: String,
}

/// Parent reference nested inside an issue.
#[derive(Debug, Clone, Deserialize)]
pub struct ParentIssue {
    /// Parent key.
    pub key: String,

    /// Parent fields; Jira only embeds a handful.
    #[serde(default)]
    pub fields: ParentFields,
}

/// Fields embedded in a parent reference.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParentFields {
    /// Parent title.
    #[serde(default)]
    pub summary: String,
}

/// Error body returned by Jira on failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub(crate) error_messages: Vec<String>,
}
