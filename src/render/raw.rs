//! Raw rendering: re-emits the canonical tagged text.
//!
//! Output lines use each entry's normalized pattern rather than its original
//! text, so parsing the output again yields an identical document. This is
//! the round-trip anchor for the whole pipeline.

use crate::error::Result;
use crate::render::Renderer;
use crate::scope::{Markers, ScopeDocument};

pub struct RawRenderer {
    markers: Markers,
}

impl RawRenderer {
    pub fn new(markers: Markers) -> Self {
        Self { markers }
    }
}

impl Default for RawRenderer {
    fn default() -> Self {
        Self::new(Markers::default())
    }
}

impl Renderer for RawRenderer {
    fn render(&self, doc: &ScopeDocument) -> Result<String> {
        let mut out = String::new();
        out.push_str(&self.markers.include);
        out.push('\n');
        for entry in doc.included() {
            out.push_str(&entry.pattern);
            out.push('\n');
        }
        if doc.excluded().next().is_some() {
            out.push_str(&self.markers.exclude);
            out.push('\n');
            for entry in doc.excluded() {
                out.push_str(&entry.pattern);
                out.push('\n');
            }
        }
        Ok(out)
    }
}
