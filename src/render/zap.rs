//! Scanner-context rendering: the XML context definition imported by a
//! dynamic scanner.

use crate::error::{Result, ScopeError};
use crate::render::{Renderer, pattern};
use crate::scope::ScopeDocument;

pub struct ZapRenderer;

impl ZapRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ZapRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for ZapRenderer {
    /// The context format requires a non-empty name; rendering a document
    /// without one fails with [`ScopeError::MissingName`].
    fn render(&self, doc: &ScopeDocument) -> Result<String> {
        let name = doc
            .name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .ok_or(ScopeError::MissingName)?;

        let mut xml = String::new();
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n");
        xml.push_str("<configuration>\n");
        xml.push_str("    <context>\n");
        xml.push_str(&format!("        <name>{}</name>\n", xml_escape(name)));
        xml.push_str("        <desc/>\n");
        xml.push_str("        <inscope>true</inscope>\n");
        for entry in doc.included() {
            xml.push_str(&format!(
                "        <incregexes>{}</incregexes>\n",
                xml_escape(&pattern::url_regex(entry))
            ));
        }
        for entry in doc.excluded() {
            xml.push_str(&format!(
                "        <excregexes>{}</excregexes>\n",
                xml_escape(&pattern::url_regex(entry))
            ));
        }
        xml.push_str("    </context>\n");
        xml.push_str("</configuration>\n");
        Ok(xml)
    }
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
