//! Error types for scopeconv.
//!
//! Every fallible operation in the library returns [`Result`]; the core never
//! exits the process or writes to the terminal on its own. Handlers map these
//! errors to exit codes.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScopeError {
    /// Parsing and merging produced zero entries. Whether this is fatal is the
    /// caller's decision; the conversion handler treats it as one.
    #[error("no scope entries found in input")]
    EmptyDocument,

    /// Scanner-context rendering was requested for a document without a name.
    #[error("scanner context output requires a non-empty scope name (use --name)")]
    MissingName,

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to parse config {path}: {message}")]
    ConfigParse { path: String, message: String },
}

impl ScopeError {
    /// Create a read error for a path-like value.
    pub fn read_error(path: impl std::fmt::Display, source: std::io::Error) -> Self {
        Self::Read {
            path: path.to_string(),
            source,
        }
    }

    /// Create a write error for a path-like value.
    pub fn write_error(path: impl std::fmt::Display, source: std::io::Error) -> Self {
        Self::Write {
            path: path.to_string(),
            source,
        }
    }
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScopeError>;
