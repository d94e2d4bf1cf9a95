//! Treesum CLI Binary
//!
//! One-shot manifest generation: resolve settings, walk and hash the
//! tree, write the document, report the count.

use clap::Parser;
use std::process;
use tracing::{error, info};
use treesum::cli::Cli;
use treesum::config::Settings;
use treesum::error::ManifestError;
use treesum::logging::{init_logging, LoggingConfig};
use treesum::manifest::builder::ManifestBuilder;
use treesum::manifest::writer;

fn main() {
    let cli = Cli::parse();

    let settings = match Settings::load(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let logging_config = build_logging_config(&cli, &settings);
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!(root = %settings.root.display(), "treesum starting");

    match run(&settings) {
        Ok(count) => {
            println!("Manifest written with {} files.", count);
        }
        Err(e) => {
            error!("Manifest generation failed: {}", e);
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

/// Walk, hash, and write. No output file is produced unless the whole
/// walk/hash phase succeeded.
fn run(settings: &Settings) -> Result<usize, ManifestError> {
    let mut builder = ManifestBuilder::new(settings.root.clone())
        .with_walker_config(settings.walker_config())
        .skip_errors(settings.skip_errors);
    if let Some(version) = &settings.version {
        builder = builder.with_version(version.clone());
    }

    let manifest = builder.build()?;
    writer::write_manifest(&manifest, &settings.output)?;

    Ok(manifest.files.len())
}

/// Apply CLI logging overrides on top of the configured defaults.
fn build_logging_config(cli: &Cli, settings: &Settings) -> LoggingConfig {
    let mut config = settings.logging.clone();

    if cli.quiet {
        config.level = "off".to_string();
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }

    config
}
