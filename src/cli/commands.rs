//! Command implementations for the additive processor CLI
//!
//! Orchestrates the build and export workflows: logging setup, parsing
//! with progress reporting, dataset assembly, artifact writing, and the
//! colored run summary.

use crate::app::services::artifact_writer::{
    write_artifacts, ArtifactJob, CanonicalSink, CompactSink, IndexSink, WriteReport,
};
use crate::app::services::dataset_builder::{build_dataset, BuildStats};
use crate::app::services::parser::{ParserRules, SourceParser};
use crate::app::services::text_exporter;
use crate::cli::args::{Args, BuildArgs, Commands, ExportArgs, LoggingArgs};
use crate::config::Config;
use crate::constants::{PREVIEW_JSON_CHARS, PREVIEW_RECORD_COUNT};
use crate::{Additive, Error, Result};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;
use tracing::{debug, info};

/// Run the selected command.
///
/// No subcommand means the default mode: a full build with every artifact
/// enabled plus a preview of richly populated records.
pub async fn run(args: Args) -> Result<()> {
    setup_logging(&args.logging())?;
    debug!("Command line arguments: {:?}", args);

    match args.command {
        Some(Commands::Build(build_args)) => run_build(build_args, false).await,
        Some(Commands::Export(export_args)) => run_export(export_args).await,
        None => run_build(BuildArgs::default_mode(), true).await,
    }
}

/// Parse sources, assemble the dataset, and write the requested artifacts
async fn run_build(args: BuildArgs, preview: bool) -> Result<()> {
    let start_time = Instant::now();

    let config = Config::with_overrides(
        args.input.as_deref(),
        args.json.as_deref(),
        !args.no_minify,
        !args.no_index,
    );
    config.validate()?;

    info!("Building additive dataset from {}", config.assets_dir.display());

    let rules = ParserRules::new()?;
    let parser = SourceParser::new(&rules, config.max_input_file_bytes);
    let source_paths = config.source_paths();

    let progress_bar = make_progress_bar(source_paths.len() as u64);
    let outcome = parser
        .parse_sources(&source_paths, progress_bar.as_ref())
        .await?;
    if let Some(pb) = &progress_bar {
        pb.finish_and_clear();
    }

    let (records, stats) = build_dataset(outcome);

    let mut jobs = vec![ArtifactJob::new(CanonicalSink, config.canonical_path.clone())];
    if config.write_compact {
        jobs.push(ArtifactJob::new(CompactSink, config.compact_path.clone()));
    }
    if config.write_index {
        jobs.push(ArtifactJob::new(IndexSink, config.index_path.clone()));
    }

    let report = write_artifacts(&records, jobs).await;
    print_build_summary(&stats, &report, start_time.elapsed());

    if preview {
        print_preview(&records)?;
    }

    // Every sink was attempted; the run still fails if any artifact did
    match report.failures.into_iter().next() {
        None => Ok(()),
        Some(first_failure) => Err(first_failure),
    }
}

/// Reconstruct the consolidated text document from an existing dataset
async fn run_export(args: ExportArgs) -> Result<()> {
    let config = Config::default();
    let json_path = args.json.unwrap_or(config.canonical_path);

    let count = text_exporter::export_text(&json_path, &args.output).await?;
    println!(
        "{} {} records -> {}",
        "Exported".green().bold(),
        count,
        args.output.display()
    );
    Ok(())
}

/// Set up structured logging
fn setup_logging(args: &LoggingArgs) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("additive_processor={}", args.log_level())));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", args.log_level());
    Ok(())
}

fn make_progress_bar(len: u64) -> Option<ProgressBar> {
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .ok()?;
    let pb = ProgressBar::new(len);
    pb.set_style(style.progress_chars("#>-"));
    Some(pb)
}

fn print_build_summary(
    stats: &BuildStats,
    report: &WriteReport,
    elapsed: std::time::Duration,
) {
    println!();
    println!("{}", "Build complete".green().bold());
    println!("  {}", stats.summary());
    for artifact in &report.written {
        println!(
            "  {} {} -> {} ({} bytes)",
            "wrote".cyan(),
            artifact.name,
            artifact.path.display(),
            artifact.bytes
        );
    }
    for failure in &report.failures {
        println!("  {} {}", "failed".red().bold(), failure);
    }
    if !stats.missing_expected.is_empty() {
        println!(
            "  {} expected codes missing: {:?}",
            "warning".yellow().bold(),
            stats.missing_expected
        );
    }
    println!("  finished in {:.2?}", elapsed);
}

/// Print up to five records that carry a description, truncated to a
/// fixed number of JSON characters each
fn print_preview(records: &[Additive]) -> Result<()> {
    let rich: Vec<&Additive> = records
        .iter()
        .filter(|a| !a.description.is_empty())
        .take(PREVIEW_RECORD_COUNT)
        .collect();
    if rich.is_empty() {
        return Ok(());
    }

    println!("{}", "Preview:".bold());
    for record in rich {
        let json =
            serde_json::to_string(record).map_err(|e| Error::json("preview", e))?;
        let truncated: String = json.chars().take(PREVIEW_JSON_CHARS).collect();
        println!("  {}", truncated);
    }
    Ok(())
}
