//! Treesum: directory tree manifests with content hashes
//!
//! Walks a directory tree, hashes every regular file with SHA-256, and
//! writes a portable JSON manifest of paths, digests, and sizes. One
//! linear pipeline: enumerate, hash, serialize.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod tree;
