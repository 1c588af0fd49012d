//! Errors raised at the edges of the todo store.
//!
//! Store operations themselves are total; only configuration and seeding can
//! fail.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading configuration or seed data
#[derive(Error, Debug)]
pub enum TodoError {
    /// An environment variable held a value that could not be used
    #[error("Invalid value {value:?} for {var}: {reason}")]
    InvalidConfig {
        /// Variable name
        var: &'static str,
        /// Offending value
        value: String,
        /// What was expected
        reason: String,
    },

    /// The seed file could not be read
    #[error("Failed to read seed file {path}: {source}")]
    SeedIo {
        /// Seed file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The seed file is not a JSON array of todos
    #[error("Malformed seed file {path}: {source}")]
    SeedFormat {
        /// Seed file path
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },
}
