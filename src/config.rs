//! Configuration System
//!
//! Resolves the effective settings for one run. Precedence, highest
//! to lowest: CLI flags, TREESUM_* environment variables, an optional
//! treesum.toml config file, built-in defaults.

use crate::cli::Cli;
use crate::error::ManifestError;
use crate::logging::LoggingConfig;
use crate::tree::walker::WalkerConfig;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Effective settings for a single run
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Root directory the walk starts from
    pub root: PathBuf,

    /// Output document path
    pub output: PathBuf,

    /// Optional manifest version tag
    #[serde(default)]
    pub version: Option<String>,

    /// Record unreadable files instead of aborting
    #[serde(default)]
    pub skip_errors: bool,

    /// Entry names excluded from the walk
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Maximum walk depth (unlimited when unset)
    #[serde(default)]
    pub max_depth: Option<usize>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Settings {
    /// Load settings, applying CLI overrides last.
    pub fn load(cli: &Cli) -> Result<Self, ManifestError> {
        let mut builder = Config::builder()
            .set_default("root", ".")?
            .set_default("output", "manifest.json")?;

        let config_path = cli
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from("treesum.toml"));
        if config_path.exists() {
            builder = builder.add_source(File::from(config_path));
        } else if cli.config.is_some() {
            return Err(ManifestError::Config(format!(
                "Config file not found: {}",
                config_path.display()
            )));
        }

        builder = builder.add_source(Environment::with_prefix("TREESUM").try_parsing(true));

        let mut settings: Settings = builder.build()?.try_deserialize()?;

        if let Some(root) = &cli.root {
            settings.root = root.clone();
        }
        if let Some(output) = &cli.output {
            settings.output = output.clone();
        }
        if let Some(version) = &cli.set_version {
            settings.version = Some(version.clone());
        }
        if cli.skip_errors {
            settings.skip_errors = true;
        }
        if !cli.exclude.is_empty() {
            settings.exclude = cli.exclude.clone();
        }
        if let Some(depth) = cli.max_depth {
            settings.max_depth = Some(depth);
        }

        Ok(settings)
    }

    /// Walker configuration derived from these settings
    pub fn walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            exclude_patterns: self.exclude.clone(),
            max_depth: self.max_depth,
            ..WalkerConfig::default()
        }
    }
}
