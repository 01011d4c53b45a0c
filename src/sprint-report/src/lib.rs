#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod bug_id;
pub mod config;
pub mod issues;
pub mod jira;
pub mod report;
pub mod runner;
pub mod summary;
pub mod templates;

#[cfg(test)]
mod testing;

pub use bug_id::{extract_bug_id, find_bug_references, BugReference, DEFAULT_BUG_MARKER};
pub use config::{
    load_config, ConfigError, ConfigFile, CredentialOverrides, JiraCredentials, JiraSection,
    ReportSettings,
};
pub use issues::{
    build_sprint_query, collect_sprint_issues, CollectError, IssueCollection, IssueRecord,
    IssueStatus, PageLimits, ParentRef,
};
pub use jira::{IssueSearch, JiraClient, JiraError, JiraIssue, SearchResponse};
pub use report::{group_by_parent, ParentGroup, ReportRenderer};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use summary::SprintReport;
pub use templates::{markdown_link, LinkFormatter, TemplateError};
