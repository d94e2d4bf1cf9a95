//! Manifest data model
//!
//! The manifest is created empty, populated by exactly one append per
//! discovered file, and immutable once written. The only persistence
//! is the emitted JSON document.

pub mod builder;
pub mod writer;

use serde::{Deserialize, Serialize};

/// One regular file in the manifest.
///
/// Field declaration order fixes the JSON key order: path, hash, size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Root-relative path, forward-slash-separated on every host
    pub path: String,
    /// Lowercase hex SHA-256 digest of the file content
    pub hash: String,
    /// Byte count, equal to the bytes read while hashing
    pub size: u64,
}

/// A file recorded instead of hashed in tolerant mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    /// Root-relative path of the file that could not be hashed
    pub path: String,
    /// Diagnostic describing the failure
    pub error: String,
}

/// The serialized document describing a directory tree's files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Optional version tag consumers may use to track content releases
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Per-file records, sorted by path
    pub files: Vec<FileRecord>,

    /// Files skipped in tolerant mode; absent in the default mode
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<SkippedFile>,
}
