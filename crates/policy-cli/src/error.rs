//! CLI error types

use policy_gateway::StorageError;
use policy_wizard::WizardError;
use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Answers file could not be read or parsed
    #[error("Invalid answers file {path}: {message}")]
    Answers { path: String, message: String },

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Wizard refused an operation
    #[error("{0}")]
    Wizard(#[from] WizardError),

    /// Builder could not be opened
    #[error("Unable to load policy builder: {0}")]
    Unavailable(String),

    /// A step is missing required answers
    #[error("{step} is incomplete: missing {missing}")]
    Incomplete { step: String, missing: String },

    /// Interactive prompt failed
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
