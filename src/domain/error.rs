use std::io;

use thiserror::Error;

/// Library-wide error type for nahual operations.
///
/// Every variant is a setup failure: it is raised before the runner takes
/// control, and the CLI reports it as `Error: <message>` with exit code 1.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A path could not be resolved to an absolute location.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// JSON encoding or decoding failure.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The runner program could not be started.
    #[error("Failed to start runner '{program}': {error}")]
    RunnerSpawn { program: String, error: String },

    /// The runner reported a completion value that could not be read.
    #[error("Invalid completion signal: {0}")]
    Completion(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers matching on categories.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::InvalidPath(_)
            | AppError::Configuration(_)
            | AppError::TomlParse(_)
            | AppError::Serialization(_)
            | AppError::Completion(_) => io::ErrorKind::InvalidInput,
            AppError::RunnerSpawn { .. } => io::ErrorKind::NotFound,
        }
    }
}
