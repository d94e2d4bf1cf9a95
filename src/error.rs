//! Error types for manifest generation.
//!
//! Every error is fatal to the run: the first failure anywhere in the
//! walk/hash phase aborts before any output is written. The only
//! exception is the opt-in tolerant mode, which records per-file
//! digest failures instead of propagating them.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Manifest generation errors
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The configured root does not exist. Entries that vanish
    /// mid-walk are per-file I/O errors, not this.
    #[error("Path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("I/O error on {}: {}", .path.display(), .source)]
    Io { path: PathBuf, source: io::Error },

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ManifestError {
    /// Classify an I/O failure against the error taxonomy, keeping the
    /// offending path in the diagnostic. A missing path stays an I/O
    /// error here: PathNotFound is reserved for root validation.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::PermissionDenied => ManifestError::PermissionDenied(path.to_path_buf()),
            _ => ManifestError::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}

impl From<config::ConfigError> for ManifestError {
    fn from(err: config::ConfigError) -> Self {
        ManifestError::Config(err.to_string())
    }
}
