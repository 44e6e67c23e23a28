//! Error types shared by the generators.
//!
//! Scanning never fails (missing roots and unreadable entries degrade to
//! warnings), so the only errors here come from producing the artifacts.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience type for functions that write site artifacts.
pub type Result<T> = std::result::Result<T, SiteError>;

/// Things that can go wrong when writing a manifest or page.
#[derive(Error, Debug)]
pub enum SiteError {
    /// Couldn't write (or create the parent of) an output file.
    #[error("failed to write '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest value couldn't be serialized.
    #[error("failed to serialize manifest: {0}")]
    Json(#[from] serde_json::Error),
}

impl SiteError {
    /// Creates an IO error with the path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
