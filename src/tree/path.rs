//! Manifest path representation: relativization and separator
//! normalization.

use crate::error::ManifestError;
use std::path::Path;

/// Convert an absolute file path into its manifest form: relative to
/// `root`, with every backslash replaced by `/`.
///
/// Normalization happens exactly once, after relativization, so the
/// stored paths are portable across path-separator conventions.
pub fn to_manifest_path(root: &Path, path: &Path) -> Result<String, ManifestError> {
    let relative = path.strip_prefix(root).map_err(|_| {
        ManifestError::InvalidPath(format!(
            "{} is not under root {}",
            path.display(),
            root.display()
        ))
    })?;

    Ok(relative.to_string_lossy().replace('\\', "/"))
}
