//! CLI definitions: clap types only, no behavior.

use clap::Parser;
use std::path::PathBuf;

/// treesum - directory tree manifests with content hashes
#[derive(Debug, Parser)]
#[command(name = "treesum")]
#[command(about = "Walks a directory tree and writes a JSON manifest of SHA-256 hashes and sizes")]
pub struct Cli {
    /// Root directory to walk (defaults to ".", or TREESUM_ROOT, or the config file)
    pub root: Option<PathBuf>,

    /// Output manifest path (defaults to "manifest.json")
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Embed a version tag in the manifest
    #[arg(long, value_name = "VERSION")]
    pub set_version: Option<String>,

    /// Record unreadable files in the manifest instead of aborting
    #[arg(long)]
    pub skip_errors: bool,

    /// Exclude entries with this name from the walk (repeatable)
    #[arg(long, value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Maximum directory depth to descend
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Configuration file path (default: treesum.toml in the current directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Silence all logging
    #[arg(long)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}
