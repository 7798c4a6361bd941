//! Artifact encoding strategies

use crate::app::models::{Additive, DatasetIndex};
use crate::{Error, Result};

/// One encoding strategy over the finalized, ordered record sequence
pub trait ArtifactSink {
    /// Short artifact name used in logs and error reports
    fn name(&self) -> &'static str;

    /// Encode the record sequence into the artifact's byte representation
    fn encode(&self, records: &[Additive]) -> Result<Vec<u8>>;
}

/// Pretty-printed JSON of the full field set, the primary dataset artifact
#[derive(Debug, Default)]
pub struct CanonicalSink;

impl ArtifactSink for CanonicalSink {
    fn name(&self) -> &'static str {
        "canonical"
    }

    fn encode(&self, records: &[Additive]) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(records).map_err(|e| Error::json("canonical artifact", e))
    }
}

/// Minified JSON with the same field set and ordering as the canonical form
#[derive(Debug, Default)]
pub struct CompactSink;

impl ArtifactSink for CompactSink {
    fn name(&self) -> &'static str {
        "compact"
    }

    fn encode(&self, records: &[Additive]) -> Result<Vec<u8>> {
        serde_json::to_vec(records).map_err(|e| Error::json("compact artifact", e))
    }
}

/// Code-to-position lookup index, rebuilt from the record set every run
#[derive(Debug, Default)]
pub struct IndexSink;

impl ArtifactSink for IndexSink {
    fn name(&self) -> &'static str {
        "index"
    }

    fn encode(&self, records: &[Additive]) -> Result<Vec<u8>> {
        let index = DatasetIndex::from_records(records);
        serde_json::to_vec_pretty(&index).map_err(|e| Error::json("index artifact", e))
    }
}
