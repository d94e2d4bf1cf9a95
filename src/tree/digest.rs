//! Streaming SHA-256 digests for file content

use crate::error::ManifestError;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read buffer size. Not part of the observable contract: SHA-256 is
/// chunk-boundary-invariant, so any chunking produces the digest of
/// the whole content.
const CHUNK_SIZE: usize = 4096;

/// Content digest and byte size of a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDigest {
    /// Lowercase hex SHA-256 of the file content (64 characters)
    pub hash: String,
    /// Number of bytes read while hashing
    pub size: u64,
}

/// Hash a file's content in fixed-size chunks.
///
/// The file handle is scoped to this function and closed on every exit
/// path, including read errors.
pub fn digest_file(path: &Path) -> Result<FileDigest, ManifestError> {
    let mut file = File::open(path).map_err(|e| ManifestError::from_io(path, e))?;
    digest_reader(path, &mut file)
}

fn digest_reader<R: Read>(path: &Path, reader: &mut R) -> Result<FileDigest, ManifestError> {
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; CHUNK_SIZE];
    let mut size: u64 = 0;

    loop {
        let read = reader
            .read(&mut buffer)
            .map_err(|e| ManifestError::from_io(path, e))?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
        size += read as u64;
    }

    Ok(FileDigest {
        hash: hex::encode(hasher.finalize()),
        size,
    })
}
