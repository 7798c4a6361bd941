//! Additive Processor Library
//!
//! A Rust library for converting loosely structured plain-text E-number
//! additive documents into a normalized, queryable JSON dataset.
//!
//! This library provides tools for:
//! - Classifying and parsing the line-oriented additive text grammar
//! - Assembling records across continuation lines with per-file state
//! - Deduplicating records across source files by structural richness
//! - Grading health-risk text into severity tiers
//! - Writing canonical, compact, and lookup-index artifacts
//! - Reconstructing a human-readable text export from the canonical data

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod artifact_writer;
        pub mod dataset_builder;
        pub mod parser;
        pub mod text_exporter;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Additive, DatasetIndex, RiskLevel};
pub use config::Config;

/// Result type alias for the additive processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for additive dataset processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization or deserialization error
    #[error("JSON error in '{context}': {message}")]
    Json {
        context: String,
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Required file does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Writing a derived artifact failed
    #[error("Failed to write {artifact} artifact to '{path}': {message}")]
    ArtifactWrite {
        artifact: String,
        path: String,
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a JSON error with context
    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            message: source.to_string(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an artifact write error
    pub fn artifact_write(
        artifact: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::ArtifactWrite {
            artifact: artifact.into(),
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<regex::Error> for Error {
    fn from(error: regex::Error) -> Self {
        Self::Configuration {
            message: format!("Invalid parser rule pattern: {}", error),
        }
    }
}
