use thiserror::Error;

/// Unified error type for semver-gen operations
///
/// Only the collaborators (repository access, configuration loading) produce
/// errors. Version derivation itself never fails.
#[derive(Error, Debug)]
pub enum SemverGenError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Invalid configuration file: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in semver-gen
pub type Result<T> = std::result::Result<T, SemverGenError>;

impl SemverGenError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        SemverGenError::Config(msg.into())
    }

    /// Create a repository error with context
    pub fn repository(msg: impl Into<String>) -> Self {
        SemverGenError::Repository(msg.into())
    }
}
