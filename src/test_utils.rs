#[cfg(test)]
pub mod fixtures {
    use crate::scope::{Markers, ScopeDocument, parse};

    /// Parse tagged text with the default markers.
    pub fn document(text: &str) -> ScopeDocument {
        parse(text, &Markers::default())
    }

    /// Parse tagged text and attach a context name.
    pub fn named_document(name: &str, text: &str) -> ScopeDocument {
        let mut doc = document(text);
        doc.name = Some(name.to_string());
        doc
    }
}
