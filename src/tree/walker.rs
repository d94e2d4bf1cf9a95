//! Filesystem walker for enumerating regular files under a root

use crate::error::ManifestError;
use std::io;
use std::path::PathBuf;
use walkdir::{DirEntry, WalkDir};

/// A regular file discovered during the walk
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Absolute (root-joined) path of the file
    pub path: PathBuf,
    /// Size reported by directory metadata at walk time
    pub size: u64,
}

/// Filesystem walker configuration
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links, treating their targets as
    /// regular files. Symlink cycles under the root are not detected
    /// and can prevent termination.
    pub follow_symlinks: bool,
    /// Entry names to exclude from the walk (e.g. ".git")
    pub exclude_patterns: Vec<String>,
    /// Maximum depth to traverse (None = unlimited)
    pub max_depth: Option<usize>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: true,
            exclude_patterns: Vec::new(),
            max_depth: None,
        }
    }
}

/// A per-entry failure recorded during a tolerant walk
#[derive(Debug)]
pub struct WalkFailure {
    /// Path the failure was reported against
    pub path: PathBuf,
    /// The classified error
    pub error: ManifestError,
}

/// Outcome of a tolerant walk: collected files plus per-entry failures
#[derive(Debug, Default)]
pub struct WalkOutcome {
    pub files: Vec<FileEntry>,
    pub failures: Vec<WalkFailure>,
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Walk the filesystem and collect every regular file, aborting on
    /// the first failure.
    ///
    /// Directories are descended into; sockets, devices and other
    /// non-regular entries are skipped. Entries are returned sorted by
    /// path so identical trees always enumerate identically.
    pub fn walk(&self) -> Result<Vec<FileEntry>, ManifestError> {
        let outcome = self.walk_inner(false)?;
        Ok(outcome.files)
    }

    /// Walk like [`Walker::walk`], but record per-entry failures
    /// (unreadable subdirectories, dangling symlinks, entries that
    /// vanished mid-walk) instead of aborting. Root validation
    /// failures stay fatal.
    pub fn walk_tolerant(&self) -> Result<WalkOutcome, ManifestError> {
        self.walk_inner(true)
    }

    fn walk_inner(&self, tolerant: bool) -> Result<WalkOutcome, ManifestError> {
        self.validate_root()?;

        let mut outcome = WalkOutcome::default();

        let walker = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().unwrap_or(&self.root).to_path_buf();
                    let error = walk_error(path.clone(), e);
                    if tolerant {
                        outcome.failures.push(WalkFailure { path, error });
                        continue;
                    }
                    return Err(error);
                }
            };

            if self.is_excluded(&entry) {
                continue;
            }

            if !entry.file_type().is_file() {
                continue;
            }

            let metadata = match entry.metadata() {
                Ok(metadata) => metadata,
                Err(e) => {
                    let path = entry.path().to_path_buf();
                    let error = walk_error(path.clone(), e);
                    if tolerant {
                        outcome.failures.push(WalkFailure { path, error });
                        continue;
                    }
                    return Err(error);
                }
            };

            outcome.files.push(FileEntry {
                path: entry.path().to_path_buf(),
                size: metadata.len(),
            });
        }

        outcome.files.sort_by(|a, b| a.path.cmp(&b.path));

        Ok(outcome)
    }

    /// The root must exist and be a readable directory; anything else
    /// is fatal before the walk starts. This is the only place a
    /// missing path maps to PathNotFound; mid-walk disappearances are
    /// per-file I/O errors.
    fn validate_root(&self) -> Result<(), ManifestError> {
        let metadata = std::fs::metadata(&self.root).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ManifestError::PathNotFound(self.root.clone()),
            _ => ManifestError::from_io(&self.root, e),
        })?;

        if !metadata.is_dir() {
            return Err(ManifestError::NotADirectory(self.root.clone()));
        }

        Ok(())
    }

    /// Check whether any path component matches an exclude pattern
    fn is_excluded(&self, entry: &DirEntry) -> bool {
        if self.config.exclude_patterns.is_empty() {
            return false;
        }

        for component in entry.path().components() {
            if let std::path::Component::Normal(name) = component {
                let name = name.to_string_lossy();
                if self
                    .config
                    .exclude_patterns
                    .iter()
                    .any(|pattern| name == pattern.as_str())
                {
                    return true;
                }
            }
        }

        false
    }
}

/// Map a mid-walk walkdir failure onto the error taxonomy, keeping the
/// path the failure was reported against.
fn walk_error(path: PathBuf, e: walkdir::Error) -> ManifestError {
    match e.io_error().map(io::Error::kind) {
        Some(io::ErrorKind::PermissionDenied) => ManifestError::PermissionDenied(path),
        _ => ManifestError::Io {
            path,
            source: e.into(),
        },
    }
}
