//! Error types for schema file resolution and loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors during schema resolution.
///
/// A schema file that simply does not exist is *not* an error; that case is
/// reported as [`crate::Resolution::NotFound`] so callers can decide whether
/// a missing schema is fatal. These variants cover genuinely exceptional
/// conditions only.
#[derive(Debug, Error)]
pub enum ResolveError {
    // Identifier errors
    #[error("empty object identifier")]
    MalformedIdentifier,

    // Probe errors (existence check failed for a reason other than ENOENT)
    #[error("cannot probe {path}: {source}")]
    ProbeFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors from loading a selected file
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Parse errors
    #[error("invalid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },
}

impl ResolveError {
    /// True when the error came from the filesystem rather than from the
    /// input itself. Callers typically fail the whole build on IO errors and
    /// report input errors per object.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            ResolveError::ProbeFailed { .. }
                | ResolveError::FileNotFound { .. }
                | ResolveError::ReadError { .. }
        )
    }
}
