//! Artifact serialization over the finalized record sequence
//!
//! Three independent encoders share one input contract through the
//! [`ArtifactSink`] trait:
//! - canonical: pretty-printed JSON, the primary dataset
//! - compact: minified JSON with identical logical content
//! - index: `{count, codes, byCode}` lookup structure
//!
//! Each artifact is written wholesale. A failed artifact does not roll
//! back the others; every sink is attempted and failures are collected
//! for the caller to report.

pub mod sink;
pub mod writer;

pub use sink::{ArtifactSink, CanonicalSink, CompactSink, IndexSink};
pub use writer::{write_artifacts, ArtifactJob, WriteReport, WrittenArtifact};
