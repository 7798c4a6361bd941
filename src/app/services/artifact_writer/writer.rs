//! Whole-file artifact writing
//!
//! Every job is attempted regardless of earlier failures; a partial
//! artifact set is an accepted incomplete-run outcome. Each file is
//! written in one operation to minimize partial-write exposure.

use super::sink::ArtifactSink;
use crate::app::models::Additive;
use crate::Error;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// One artifact to produce: an encoding strategy plus its output path
pub struct ArtifactJob {
    pub sink: Box<dyn ArtifactSink + Send + Sync>,
    pub path: PathBuf,
}

impl ArtifactJob {
    pub fn new(sink: impl ArtifactSink + Send + Sync + 'static, path: PathBuf) -> Self {
        Self {
            sink: Box::new(sink),
            path,
        }
    }
}

/// A successfully written artifact
#[derive(Debug, Clone)]
pub struct WrittenArtifact {
    pub name: &'static str,
    pub path: PathBuf,
    pub bytes: u64,
}

/// Outcome of an artifact-writing pass
#[derive(Debug, Default)]
pub struct WriteReport {
    pub written: Vec<WrittenArtifact>,
    pub failures: Vec<Error>,
}

impl WriteReport {
    /// Whether every requested artifact was written
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Write every requested artifact, collecting per-artifact failures
pub async fn write_artifacts(records: &[Additive], jobs: Vec<ArtifactJob>) -> WriteReport {
    let mut report = WriteReport::default();

    for job in jobs {
        match write_one(records, &job).await {
            Ok(written) => {
                info!(
                    "Wrote {} artifact -> {} ({} bytes)",
                    written.name,
                    written.path.display(),
                    written.bytes
                );
                report.written.push(written);
            }
            Err(e) => {
                error!("{}", e);
                report.failures.push(e);
            }
        }
    }

    report
}

async fn write_one(
    records: &[Additive],
    job: &ArtifactJob,
) -> crate::Result<WrittenArtifact> {
    let bytes = job.sink.encode(records)?;

    if let Some(parent) = job.path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                artifact_error(job.sink.name(), &job.path, &e)
            })?;
        }
    }

    tokio::fs::write(&job.path, &bytes)
        .await
        .map_err(|e| artifact_error(job.sink.name(), &job.path, &e))?;

    Ok(WrittenArtifact {
        name: job.sink.name(),
        path: job.path.clone(),
        bytes: bytes.len() as u64,
    })
}

fn artifact_error(artifact: &str, path: &Path, source: &std::io::Error) -> Error {
    Error::artifact_write(artifact, path.display().to_string(), source.to_string())
}
