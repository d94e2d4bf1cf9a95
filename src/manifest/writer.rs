//! Manifest serialization to pretty-printed JSON

use crate::error::ManifestError;
use crate::manifest::Manifest;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::Path;
use tracing::info;

/// Render the manifest as a pretty-printed, 4-space-indented JSON
/// document with a trailing newline.
pub fn render(manifest: &Manifest) -> Result<String, ManifestError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    manifest.serialize(&mut serializer)?;
    buf.push(b'\n');

    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Serialize the manifest to `output`, overwriting any existing file
/// at that path.
pub fn write_manifest(manifest: &Manifest, output: &Path) -> Result<(), ManifestError> {
    let document = render(manifest)?;
    std::fs::write(output, document).map_err(|e| ManifestError::from_io(output, e))?;

    info!(
        path = %output.display(),
        file_count = manifest.files.len(),
        "Wrote manifest"
    );

    Ok(())
}
