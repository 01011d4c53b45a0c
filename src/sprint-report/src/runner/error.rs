//! Runner error types.

use crate::config::ConfigError;
use crate::issues::CollectError;
use crate::jira::JiraError;
use crate::templates::TemplateError;

/// Errors that can occur while producing a sprint report.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration and credential loading errors.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Jira client initialization errors.
    #[error(transparent)]
    ClientInit(JiraError),

    /// Issue collection errors.
    #[error(transparent)]
    Collect(#[from] CollectError),

    /// Link template errors.
    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl RunnerError {
    /// Returns true if the failure happened before any query was issued.
    #[must_use]
    pub fn is_init_failure(&self) -> bool {
        matches!(self, Self::Config(_) | Self::ClientInit(_))
    }

    /// Returns true if the Jira client could not be set up, either because a
    /// credential is missing or because the client itself failed to build.
    #[must_use]
    pub fn is_client_init_failure(&self) -> bool {
        matches!(
            self,
            Self::ClientInit(_) | Self::Config(ConfigError::MissingCredential { .. })
        )
    }
}
