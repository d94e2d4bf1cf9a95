//! Manifest builder: walks the tree, hashes each file, and aggregates
//! the per-file records

use crate::error::ManifestError;
use crate::manifest::{FileRecord, Manifest, SkippedFile};
use crate::tree::digest;
use crate::tree::path::to_manifest_path;
use crate::tree::walker::{Walker, WalkerConfig};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Manifest builder for a single directory tree
pub struct ManifestBuilder {
    root: PathBuf,
    walker_config: Option<WalkerConfig>,
    version: Option<String>,
    skip_errors: bool,
}

impl ManifestBuilder {
    /// Create a new builder for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            walker_config: None,
            version: None,
            skip_errors: false,
        }
    }

    /// Set walker config (symlink handling, excludes, depth). When set,
    /// the walker uses this config instead of the default.
    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = Some(config);
        self
    }

    /// Embed a version tag in the manifest
    pub fn with_version(mut self, version: String) -> Self {
        self.version = Some(version);
        self
    }

    /// Tolerant mode: record entries that cannot be walked or hashed
    /// instead of aborting the run. Root validation and the output
    /// write stay fatal.
    pub fn skip_errors(mut self, skip: bool) -> Self {
        self.skip_errors = skip;
        self
    }

    /// Walk the tree and hash every regular file into a manifest.
    ///
    /// Records are sorted by manifest path so identical trees always
    /// serialize identically. The first walk or digest failure aborts
    /// the run unless tolerant mode is on.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn build(&self) -> Result<Manifest, ManifestError> {
        let start = Instant::now();
        info!("Starting manifest build");

        let walker = match &self.walker_config {
            Some(config) => Walker::with_config(self.root.clone(), config.clone()),
            None => Walker::new(self.root.clone()),
        };
        let (entries, walk_failures) = if self.skip_errors {
            let outcome = walker.walk_tolerant()?;
            (outcome.files, outcome.failures)
        } else {
            (walker.walk()?, Vec::new())
        };
        debug!(file_count = entries.len(), "Walked filesystem");

        let mut files = Vec::with_capacity(entries.len());
        let mut errors: Vec<SkippedFile> = walk_failures
            .into_iter()
            .map(|failure| {
                warn!(
                    path = %failure.path.display(),
                    error = %failure.error,
                    "Skipping unwalkable entry"
                );
                SkippedFile {
                    path: to_manifest_path(&self.root, &failure.path)
                        .unwrap_or_else(|_| failure.path.to_string_lossy().replace('\\', "/")),
                    error: failure.error.to_string(),
                }
            })
            .collect();

        for entry in entries {
            let manifest_path = to_manifest_path(&self.root, &entry.path)?;

            match digest::digest_file(&entry.path) {
                Ok(d) => {
                    if d.size != entry.size {
                        warn!(
                            path = %manifest_path,
                            walked = entry.size,
                            hashed = d.size,
                            "File size changed between walk and hash"
                        );
                    }
                    debug!(path = %manifest_path, size = d.size, "Hashed file");
                    files.push(FileRecord {
                        path: manifest_path,
                        hash: d.hash,
                        size: d.size,
                    });
                }
                Err(e) if self.skip_errors => {
                    warn!(path = %manifest_path, error = %e, "Skipping unreadable file");
                    errors.push(SkippedFile {
                        path: manifest_path,
                        error: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        // The walker sorts by absolute path; sort again by manifest
        // path so the serialized order never depends on walker internals.
        files.sort_by(|a, b| a.path.cmp(&b.path));
        errors.sort_by(|a, b| a.path.cmp(&b.path));

        info!(
            file_count = files.len(),
            skipped = errors.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Manifest build complete"
        );

        Ok(Manifest {
            version: self.version.clone(),
            files,
            errors,
        })
    }
}
