//! Tagged-text parsing: the canonical intermediate format between scope
//! sources and the conversion core.
//!
//! The format is line-oriented. A line equal to the include marker switches
//! following lines to the include section, the exclude marker switches to the
//! exclude section, and everything else is a target line handed to the
//! classifier.

use crate::scope::{ScopeDocument, classify};

/// The pair of sentinel lines separating the include and exclude sections.
///
/// The parser has no hardcoded tokens of its own; callers pass whichever pair
/// their input uses. [`Markers::default`] gives the conventional pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub include: String,
    pub exclude: String,
}

impl Markers {
    pub const DEFAULT_INCLUDE: &'static str = "!INCLUDE";
    pub const DEFAULT_EXCLUDE: &'static str = "!EXCLUDE";

    pub fn new(include: impl Into<String>, exclude: impl Into<String>) -> Self {
        Self {
            include: include.into(),
            exclude: exclude.into(),
        }
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INCLUDE, Self::DEFAULT_EXCLUDE)
    }
}

/// Parse one tagged-text input into a scope document.
///
/// Lines before the first marker are treated as included, which tolerates
/// single-section files with no markers at all. Blank lines are skipped. An
/// input with no entries yields an empty document, not an error; whether an
/// empty result is fatal is decided by the caller.
pub fn parse(text: &str, markers: &Markers) -> ScopeDocument {
    let mut doc = ScopeDocument::new();
    let mut included = true;
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == markers.include {
            included = true;
            continue;
        }
        if line == markers.exclude {
            included = false;
            continue;
        }
        if let Some(entry) = classify(line, included) {
            doc.insert(entry);
        }
    }
    doc
}
