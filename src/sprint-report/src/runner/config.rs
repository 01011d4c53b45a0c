//! Runner configuration.

use crate::config::ReportSettings;

/// What to report on and how.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Jira project key.
    project: String,
    /// Sprint name.
    sprint: String,
    /// Collection and rendering settings.
    settings: ReportSettings,
}

impl RunnerConfig {
    /// Creates a configuration with default settings.
    pub fn new(project: impl Into<String>, sprint: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            sprint: sprint.into(),
            settings: ReportSettings::default(),
        }
    }

    /// Sets custom report settings.
    pub fn with_settings(mut self, settings: ReportSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Returns the project key.
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Returns the sprint name.
    pub fn sprint(&self) -> &str {
        &self.sprint
    }

    /// Returns the report settings.
    pub fn settings(&self) -> &ReportSettings {
        &self.settings
    }
}
