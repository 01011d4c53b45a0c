//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading configuration or credentials.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse config file '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// A credential was not provided by any source.
    #[error("Missing Jira {field}; pass --{field}, set {env_var} or add it to the [jira] section")]
    MissingCredential {
        field: &'static str,
        env_var: &'static str,
    },

    /// A setting has an unusable value.
    #[error("Invalid value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    /// Missing required file.
    #[error("Missing required file: {path}")]
    MissingFile { path: String },
}
