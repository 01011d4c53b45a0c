//! Jira credential resolution.

use crate::config::ConfigError;
use serde::Deserialize;
use std::fmt;

/// Environment variable holding the Jira server URL.
pub const SERVER_ENV: &str = "JIRA_SERVER";

/// Environment variable holding the Jira login (usually an e-mail address).
pub const LOGIN_ENV: &str = "JIRA_LOGIN";

/// Environment variable holding the Jira API token.
pub const TOKEN_ENV: &str = "JIRA_TOKEN";

/// The `[jira]` section of the config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct JiraSection {
    /// Server base URL.
    pub server: Option<String>,

    /// Account login.
    pub login: Option<String>,

    /// API token.
    pub token: Option<String>,
}

/// Credentials given explicitly, typically on the command line.
#[derive(Debug, Clone, Default)]
pub struct CredentialOverrides {
    /// Server base URL.
    pub server: Option<String>,

    /// Account login.
    pub login: Option<String>,

    /// API token.
    pub token: Option<String>,
}

/// Fully resolved credentials for the Jira client.
#[derive(Clone, PartialEq, Eq)]
pub struct JiraCredentials {
    /// Server base URL.
    pub server: String,

    /// Account login.
    pub login: String,

    /// API token.
    pub token: String,
}

impl fmt::Debug for JiraCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JiraCredentials")
            .field("server", &self.server)
            .field("login", &self.login)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl JiraCredentials {
    /// Resolves each credential from, in order: `overrides`, the environment,
    /// then the config file section.
    ///
    /// Blank values are treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] for the first field that no
    /// source provides.
    pub fn resolve(
        overrides: CredentialOverrides,
        file: &JiraSection,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            server: resolve_field("server", SERVER_ENV, overrides.server, file.server.as_deref())?,
            login: resolve_field("login", LOGIN_ENV, overrides.login, file.login.as_deref())?,
            token: resolve_field("token", TOKEN_ENV, overrides.token, file.token.as_deref())?,
        })
    }
}

fn resolve_field(
    field: &'static str,
    env_var: &'static str,
    explicit: Option<String>,
    file: Option<&str>,
) -> Result<String, ConfigError> {
    explicit
        .and_then(non_blank)
        .or_else(|| std::env::var(env_var).ok().and_then(non_blank))
        .or_else(|| file.map(str::to_owned).and_then(non_blank))
        .ok_or(ConfigError::MissingCredential { field, env_var })
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_section() -> JiraSection {
        JiraSection {
            server: Some("https://file.example.com".to_string()),
            login: Some("file@example.com".to_string()),
            token: Some("file-token".to_string()),
        }
    }

    fn without_env<R>(f: impl FnOnce() -> R) -> R {
        temp_env::with_vars_unset([SERVER_ENV, LOGIN_ENV, TOKEN_ENV], f)
    }

    #[test]
    fn falls_back_to_config_file() {
        let creds = without_env(|| {
            JiraCredentials::resolve(CredentialOverrides::default(), &file_section())
        })
        .unwrap();

        assert_eq!(creds.server, "https://file.example.com");
        assert_eq!(creds.login, "file@example.com");
        assert_eq!(creds.token, "file-token");
    }

    #[test]
    fn environment_beats_config_file() {
        let creds = temp_env::with_vars(
            [
                (SERVER_ENV, Some("https://env.example.com")),
                (LOGIN_ENV, None),
                (TOKEN_ENV, Some("env-token")),
            ],
            || JiraCredentials::resolve(CredentialOverrides::default(), &file_section()),
        )
        .unwrap();

        assert_eq!(creds.server, "https://env.example.com");
        assert_eq!(creds.login, "file@example.com");
        assert_eq!(creds.token, "env-token");
    }

    #[test]
    fn overrides_beat_environment() {
        let overrides = CredentialOverrides {
            server: Some("https://cli.example.com".to_string()),
            ..Default::default()
        };
        let creds = temp_env::with_var(SERVER_ENV, Some("https://env.example.com"), || {
            JiraCredentials::resolve(overrides, &file_section())
        })
        .unwrap();

        assert_eq!(creds.server, "https://cli.example.com");
    }

    #[test]
    fn blank_values_are_ignored() {
        let overrides = CredentialOverrides {
            login: Some("   ".to_string()),
            ..Default::default()
        };
        let creds = without_env(|| JiraCredentials::resolve(overrides, &file_section())).unwrap();

        assert_eq!(creds.login, "file@example.com");
    }

    #[test]
    fn missing_credential_is_reported() {
        let section = JiraSection {
            token: None,
            ..file_section()
        };
        let result =
            without_env(|| JiraCredentials::resolve(CredentialOverrides::default(), &section));

        assert!(matches!(
            result,
            Err(ConfigError::MissingCredential {
                field: "token",
                env_var: TOKEN_ENV
            })
        ));
    }

    #[test]
    fn debug_output_hides_token() {
        let creds = JiraCredentials {
            server: "https://example.com".to_string(),
            login: "me".to_string(),
            token: "super-secret".to_string(),
        };

        let debug = format!("{creds:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
