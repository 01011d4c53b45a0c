//! Orchestrates sprint issue collection and report rendering.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::config::JiraCredentials;
use crate::issues::{collect_sprint_issues, PageLimits};
use crate::jira::{IssueSearch, JiraClient};
use crate::report::ReportRenderer;
use crate::summary::SprintReport;
use tracing::{info, warn};

/// Produces the report of one sprint.
pub struct Runner {
    config: RunnerConfig,
    client: Box<dyn IssueSearch>,
    renderer: ReportRenderer,
}

impl Runner {
    /// Builds a runner talking to Jira with the given credentials.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::ClientInit`] if the Jira client cannot be built,
    /// or [`RunnerError::Template`] if a configured link format is invalid.
    pub fn connect(config: RunnerConfig, credentials: &JiraCredentials) -> Result<Self, RunnerError> {
        let client = JiraClient::new(credentials, config.settings().request_timeout())
            .map_err(RunnerError::ClientInit)?;
        info!(server = %client.server(), login = %credentials.login, "Connected Jira client");
        Self::with_client(config, Box::new(client))
    }

    /// Builds a runner on top of any [`IssueSearch`] implementation.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Config`] if the report settings are out of range,
    /// or [`RunnerError::Template`] if a configured link format is invalid.
    pub fn with_client(
        config: RunnerConfig,
        client: Box<dyn IssueSearch>,
    ) -> Result<Self, RunnerError> {
        config.settings().validate()?;
        let renderer = ReportRenderer::from_settings(client.server(), config.settings())?;
        Ok(Self {
            config,
            client,
            renderer,
        })
    }

    /// Collects the sprint's issues and renders the report.
    ///
    /// Nothing is rendered if collection fails.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Collect`] if any query fails, or
    /// [`RunnerError::Template`] if a link fails to render.
    pub async fn run(&self) -> Result<SprintReport, RunnerError> {
        let project = self.config.project();
        let sprint = self.config.sprint();

        let issues = collect_sprint_issues(
            self.client.as_ref(),
            project,
            sprint,
            PageLimits::from(self.config.settings()),
        )
        .await?;

        let report = SprintReport {
            sprint: sprint.to_string(),
            issue_count: issues.len(),
            body: self.renderer.render(&issues, sprint)?,
        };

        if report.has_issues() {
            info!(count = report.issue_count, "Found issues");
        } else {
            warn!(project = %project, sprint = %sprint, "No issues found");
        }

        Ok(report)
    }
}
