use std::io;

use thiserror::Error;

/// Library-wide error type for dealersite operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Required identity fields are missing from the configuration.
    #[error("Missing required configuration fields: {}", .0.join(", "))]
    MissingRequiredFields(Vec<String>),

    /// Requested palette is not in the registry.
    #[error("Unknown palette '{name}'. Available: {available}")]
    UnknownPalette { name: String, available: String },

    /// Configuration file does not exist at the given path.
    #[error("Configuration file not found: {0}")]
    ConfigFileNotFound(String),

    /// Template directory does not exist.
    #[error("Template directory not found: {0}")]
    TemplateNotFound(String),

    /// Destination directory already exists.
    #[error("Destination directory '{0}' already exists")]
    DestinationExists(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Fragment template rendering failed.
    #[error("Template rendering failed: {0}")]
    RenderError(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::MissingRequiredFields(_)
            | AppError::UnknownPalette { .. }
            | AppError::ParseError { .. }
            | AppError::RenderError(_) => io::ErrorKind::InvalidInput,
            AppError::ConfigFileNotFound(_) | AppError::TemplateNotFound(_) => {
                io::ErrorKind::NotFound
            }
            AppError::DestinationExists(_) => io::ErrorKind::AlreadyExists,
        }
    }
}
