pub mod burp;
pub mod pattern;
pub mod raw;
pub mod zap;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::render::{burp::BurpRenderer, raw::RawRenderer, zap::ZapRenderer};
use crate::scope::{Markers, ScopeDocument};

/// Serializes a scope document into one tool's native persisted format.
///
/// Renderers are pure: no I/O, no shared state, the same document always
/// yields the same bytes.
pub trait Renderer {
    fn render(&self, doc: &ScopeDocument) -> Result<String>;
}

/// Selects the renderer matching the requested output format.
pub struct DocumentRenderer {
    format: OutputFormat,
    markers: Markers,
}

impl DocumentRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            markers: Markers::default(),
        }
    }

    /// Use custom section markers for raw output.
    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    /// Render the document to a string in the selected format.
    pub fn render(&self, doc: &ScopeDocument) -> Result<String> {
        match self.format {
            OutputFormat::Burp => BurpRenderer::new().render(doc),
            OutputFormat::Zap => ZapRenderer::new().render(doc),
            OutputFormat::Raw => RawRenderer::new(self.markers.clone()).render(doc),
        }
    }

    /// Conventional file extension for the selected format.
    pub fn extension(&self) -> &'static str {
        match self.format {
            OutputFormat::Burp => "json",
            OutputFormat::Zap => "context",
            OutputFormat::Raw => "txt",
        }
    }
}

impl Default for DocumentRenderer {
    fn default() -> Self {
        Self::new(OutputFormat::Raw)
    }
}
