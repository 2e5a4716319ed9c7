//! Error types for the reconciler.
//!
//! The reconciliation functions themselves cannot fail; errors only arise
//! at the edges where manifests and provider bodies are read.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for reconciler operations
#[derive(Error, Debug)]
pub enum Error {
    /// Input document could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for reconciler operations
pub type Result<T> = std::result::Result<T, Error>;
