//! Reading the bytes of a selected schema file.
//!
//! Resolution only probes for existence; once a candidate matches, the
//! caller (or these helpers on its behalf) reads and parses the content.
//! Whether the JSON is treated as a schema or as plain data is decided by
//! the matched candidate's [`crate::FileKind`], not here.

use std::path::Path;

use serde_json::Value;

use crate::error::ResolveError;

/// Read and parse a schema file.
///
/// # Errors
///
/// Returns `ResolveError::FileNotFound` if the file doesn't exist,
/// `ResolveError::ReadError` on I/O failure, or `ResolveError::InvalidJson`
/// if the content isn't valid JSON.
pub fn load_schema(path: &Path) -> Result<Value, ResolveError> {
    if !path.exists() {
        return Err(ResolveError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| ResolveError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ResolveError::InvalidJson { source })
}

/// Parse a schema from a JSON string, for callers that manage their own I/O.
///
/// # Errors
///
/// Returns `ResolveError::InvalidJson` if the string isn't valid JSON.
pub fn load_schema_str(content: &str) -> Result<Value, ResolveError> {
    serde_json::from_str(content).map_err(|source| ResolveError::InvalidJson { source })
}
