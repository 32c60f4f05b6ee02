//! Scope sources: where tagged text comes from.
//!
//! A source hands the core one complete tagged-text payload or one typed
//! failure, never partial output. Sources are independent of each other, so
//! a failing file does not stop the remaining files from being read.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::{Result, ScopeError};

/// A producer of canonical tagged scope text.
pub trait ScopeSource {
    /// Where the text comes from, for log and error messages.
    fn origin(&self) -> String;

    /// Produce the tagged text.
    fn produce(&self) -> Result<String>;
}

/// A scope definition read from a local file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScopeSource for FileSource {
    fn origin(&self) -> String {
        self.path.display().to_string()
    }

    fn produce(&self) -> Result<String> {
        trace!(path = %self.path.display(), "Reading scope file");
        fs::read_to_string(&self.path).map_err(|e| ScopeError::read_error(self.path.display(), e))
    }
}
