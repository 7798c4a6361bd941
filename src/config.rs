//! Configuration for dataset build runs.
//!
//! Resolves the source file set and artifact output paths, with optional
//! overrides supplied by the CLI layer.

use crate::constants::{
    CANONICAL_FILENAME, COMPACT_FILENAME, DEFAULT_ASSETS_DIR, INDEX_FILENAME, MAX_INPUT_FILE_BYTES,
    SOURCE_FILE_NAMES,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Build configuration: where sources live, where artifacts go, and which
/// optional artifacts to emit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory containing the source text files
    pub assets_dir: PathBuf,

    /// Source file names resolved against `assets_dir`, in processing order
    pub source_files: Vec<String>,

    /// Output path for the canonical (pretty-printed) dataset artifact
    pub canonical_path: PathBuf,

    /// Output path for the compact (minified) dataset artifact
    pub compact_path: PathBuf,

    /// Output path for the lookup index artifact
    pub index_path: PathBuf,

    /// Whether to emit the compact artifact
    pub write_compact: bool,

    /// Whether to emit the index artifact
    pub write_index: bool,

    /// Input files larger than this are skipped with a warning
    pub max_input_file_bytes: u64,
}

impl Default for Config {
    fn default() -> Self {
        let assets_dir = PathBuf::from(DEFAULT_ASSETS_DIR);
        Self {
            canonical_path: assets_dir.join(CANONICAL_FILENAME),
            compact_path: assets_dir.join(COMPACT_FILENAME),
            index_path: assets_dir.join(INDEX_FILENAME),
            source_files: SOURCE_FILE_NAMES.iter().map(|s| s.to_string()).collect(),
            write_compact: true,
            write_index: true,
            max_input_file_bytes: MAX_INPUT_FILE_BYTES,
            assets_dir,
        }
    }
}

impl Config {
    /// Build a configuration from optional CLI overrides.
    ///
    /// `input` replaces the assets directory; `json` replaces the canonical
    /// output path, with the compact and index artifacts relocated next to it.
    pub fn with_overrides(
        input: Option<&Path>,
        json: Option<&Path>,
        write_compact: bool,
        write_index: bool,
    ) -> Self {
        let mut config = Config::default();

        if let Some(dir) = input {
            config.assets_dir = dir.to_path_buf();
            config.canonical_path = dir.join(CANONICAL_FILENAME);
            config.compact_path = dir.join(COMPACT_FILENAME);
            config.index_path = dir.join(INDEX_FILENAME);
        }

        if let Some(path) = json {
            config.canonical_path = path.to_path_buf();
            let artifact_dir = path.parent().unwrap_or_else(|| Path::new("."));
            config.compact_path = artifact_dir.join(COMPACT_FILENAME);
            config.index_path = artifact_dir.join(INDEX_FILENAME);
        }

        config.write_compact = write_compact;
        config.write_index = write_index;

        debug!("Resolved configuration: {:?}", config);
        config
    }

    /// Absolute processing-order paths of the source files
    pub fn source_paths(&self) -> Vec<PathBuf> {
        self.source_files
            .iter()
            .map(|name| self.assets_dir.join(name))
            .collect()
    }

    /// Validate the configuration before a run
    pub fn validate(&self) -> Result<()> {
        if self.source_files.is_empty() {
            return Err(Error::configuration("No source files configured"));
        }
        if self.max_input_file_bytes == 0 {
            return Err(Error::configuration(
                "Maximum input file size must be non-zero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.source_paths().len(), SOURCE_FILE_NAMES.len());
        assert!(config.write_compact);
        assert!(config.write_index);
    }

    #[test]
    fn test_input_override_relocates_sources_and_artifacts() {
        let config =
            Config::with_overrides(Some(Path::new("/data/additives")), None, true, true);
        assert_eq!(config.assets_dir, PathBuf::from("/data/additives"));
        assert_eq!(
            config.canonical_path,
            PathBuf::from("/data/additives").join(CANONICAL_FILENAME)
        );
        assert!(config.source_paths()[0].starts_with("/data/additives"));
    }

    #[test]
    fn test_json_override_relocates_derived_artifacts() {
        let config = Config::with_overrides(
            None,
            Some(Path::new("/out/db.json")),
            false,
            true,
        );
        assert_eq!(config.canonical_path, PathBuf::from("/out/db.json"));
        assert_eq!(config.compact_path, PathBuf::from("/out").join(COMPACT_FILENAME));
        assert_eq!(config.index_path, PathBuf::from("/out").join(INDEX_FILENAME));
        assert!(!config.write_compact);
    }

    #[test]
    fn test_empty_source_list_is_rejected() {
        let config = Config {
            source_files: Vec::new(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
