//! Configuration loading.
//!
//! This module handles parsing the optional `config.toml` file holding Jira
//! credentials and report settings:
//!
//! ```toml
//! [jira]
//! server = "https://jira.example.com"
//! login = "me@example.com"
//! token = "api-token"
//!
//! [report]
//! page-size = 50
//! bug-url-format = "https://pad.lv/{{id}}"
//! ```

mod credentials;
mod error;
mod settings;

pub use credentials::{
    CredentialOverrides, JiraCredentials, JiraSection, LOGIN_ENV, SERVER_ENV, TOKEN_ENV,
};
pub use error::ConfigError;
pub use settings::{
    ReportSettings, DEFAULT_BROWSE_URL_FORMAT, DEFAULT_BUG_URL_FORMAT, DEFAULT_MAX_PAGES,
    DEFAULT_PAGE_SIZE, DEFAULT_REQUEST_TIMEOUT_SECS, MAX_PAGE_SIZE,
};

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Top-level structure of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Jira credentials; each may also come from the CLI or environment.
    pub jira: JiraSection,

    /// Collection and rendering settings.
    pub report: ReportSettings,
}

/// Loads the config file at `path`, or defaults when no path is given.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file is missing, unreadable, malformed, or
/// contains invalid report settings.
pub fn load_config(path: Option<&Path>) -> Result<ConfigFile, ConfigError> {
    let Some(path) = path else {
        debug!("No config file given, using defaults");
        return Ok(ConfigFile::default());
    };

    info!(path = %path.display(), "Loading config file");

    if !path.exists() {
        return Err(ConfigError::MissingFile {
            path: path.display().to_string(),
        });
    }

    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
        path: path.display().to_string(),
        source,
    })?;
    let config: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::TomlError {
        path: path.display().to_string(),
        source,
    })?;

    config.report.validate()?;
    Ok(config)
}
