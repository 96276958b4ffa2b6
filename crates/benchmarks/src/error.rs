//! Error types for report generation.
//!
//! Only filesystem access and JSON (de)serialization can fail; metric
//! generation and analysis are infallible.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while persisting or loading a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The output directory could not be created.
    #[error("Failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        /// Directory that was being created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A report file could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// File that was being written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A saved analysis file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The report could not be serialized to JSON.
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A saved analysis file is not a valid report.
    #[error("Invalid analysis file {}: {source}", .path.display())]
    Deserialize {
        /// File that was being parsed.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
