//! Filesystem enumeration and per-file content digests.
//!
//! The walker produces the set of regular files under a root; the
//! digest module turns each file into a (hash, size) pair; the path
//! module fixes the portable manifest representation of a path.

pub mod digest;
pub mod path;
pub mod walker;
