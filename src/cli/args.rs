//! Command-line argument definitions for the additive processor
//!
//! Defines the CLI interface using the clap derive API. Running with no
//! subcommand is equivalent to `build` with every artifact enabled plus a
//! short preview of richly populated records.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the additive dataset processor
///
/// Converts plain-text E-number additive documents into a normalized JSON
/// dataset with derived compact and lookup-index artifacts.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "additive-processor",
    version,
    about = "Convert plain-text E-number additive documents into a normalized JSON dataset",
    long_about = "Parses the fixed set of additive source text files into a canonical JSON \
                  dataset, plus a minified copy and a code-to-position lookup index. Can also \
                  reconstruct a consolidated human-readable text file from an existing dataset."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse source text files and write the dataset artifacts
    Build(BuildArgs),
    /// Generate a consolidated text file from an existing dataset
    Export(ExportArgs),
}

/// Arguments for the build command
#[derive(Debug, Clone, Parser)]
pub struct BuildArgs {
    /// Directory containing the additive source text files
    ///
    /// Defaults to assets/additives. Artifacts are written into the same
    /// directory unless --json overrides the canonical path.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "DIR",
        help = "Directory containing the additive source text files"
    )]
    pub input: Option<PathBuf>,

    /// Output path for the canonical JSON artifact
    ///
    /// The compact and index artifacts are written next to it.
    #[arg(
        long = "json",
        value_name = "PATH",
        help = "Output path for the canonical JSON artifact"
    )]
    pub json: Option<PathBuf>,

    /// Do not write the minified JSON artifact
    #[arg(long = "no-minify", help = "Do not write the minified JSON artifact")]
    pub no_minify: bool,

    /// Do not write the index JSON artifact
    #[arg(long = "no-index", help = "Do not write the index JSON artifact")]
    pub no_index: bool,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

/// Arguments for the export command
#[derive(Debug, Clone, Parser)]
pub struct ExportArgs {
    /// Path of the canonical JSON artifact to read
    ///
    /// Defaults to the canonical artifact path under assets/additives.
    /// The export fails if this file does not exist.
    #[arg(
        long = "json",
        value_name = "PATH",
        help = "Path of the canonical JSON artifact to read"
    )]
    pub json: Option<PathBuf>,

    /// Output path for the consolidated text file
    #[arg(value_name = "OUT_TXT", help = "Output path for the consolidated text file")]
    pub output: PathBuf,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

impl BuildArgs {
    /// Build arguments for the default (no subcommand) mode: every
    /// artifact enabled, default paths
    pub fn default_mode() -> Self {
        Self {
            input: None,
            json: None,
            no_minify: false,
            no_index: false,
            logging: LoggingArgs::default(),
        }
    }
}

/// Shared log-level flags
#[derive(Debug, Clone, Default, Parser)]
pub struct LoggingArgs {
    /// Enable verbose (debug) logging
    #[arg(short = 'v', long = "verbose", help = "Enable verbose logging")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose", help = "Only log warnings and errors")]
    pub quiet: bool,
}

impl LoggingArgs {
    /// Resolve the tracing level for this run
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

impl Args {
    /// Logging flags for whichever command was selected
    pub fn logging(&self) -> LoggingArgs {
        match &self.command {
            Some(Commands::Build(build)) => build.logging.clone(),
            Some(Commands::Export(export)) => export.logging.clone(),
            None => LoggingArgs::default(),
        }
    }
}
