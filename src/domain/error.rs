use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for artvar operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// An artifact could not be resolved, read, or decoded.
    #[error("Failed to access artifact '{}': {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Underlying I/O failure outside of artifact access.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Host manifest file does not exist.
    #[error("Manifest not found: {0}")]
    ManifestMissing(String),

    /// Host manifest content is structurally valid TOML but semantically wrong.
    #[error("Invalid manifest: {0}")]
    Validation(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// JSON rendering error.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::FileAccess { path: path.into(), source }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::FileAccess { source, .. } => source.kind(),
            AppError::Io(err) => err.kind(),
            AppError::ManifestMissing(_) => io::ErrorKind::NotFound,
            AppError::Validation(_) | AppError::TomlParse(_) => io::ErrorKind::InvalidInput,
            AppError::Serialization(_) => io::ErrorKind::Other,
        }
    }
}
