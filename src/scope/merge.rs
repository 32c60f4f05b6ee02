//! Combining scope documents from independent sources into one.
//!
//! Sources arrive in no particular order (several files, several program
//! pages), so merging is commutative up to the exclude-wins tie-break: the
//! resulting `(pattern, included)` set does not depend on input order.

use tracing::warn;

use crate::scope::{InsertOutcome, ScopeDocument};

/// The result of merging: the combined document plus every pattern that
/// arrived with conflicting dispositions and was kept as excluded.
#[derive(Debug, Clone, Default)]
pub struct Merged {
    pub document: ScopeDocument,
    pub conflicts: Vec<String>,
}

/// Merge documents into one, deduplicating by normalized pattern.
///
/// A pattern listed as both include and exclude survives as excluded, since
/// explicit exclusion carves liability-sensitive targets out of a broader
/// include. The merged name is the first non-empty name among the inputs.
/// Inputs are never mutated.
pub fn merge(docs: &[ScopeDocument]) -> Merged {
    let mut document = ScopeDocument::new();
    let mut conflicts: Vec<String> = Vec::new();
    for doc in docs {
        if document.name.is_none()
            && let Some(name) = &doc.name
            && !name.is_empty()
        {
            document.name = Some(name.clone());
        }
        for entry in doc.entries() {
            if document.insert(entry.clone()) == InsertOutcome::Conflict {
                warn!(
                    pattern = %entry.pattern,
                    "Pattern listed as both include and exclude, keeping the exclusion"
                );
                if !conflicts.contains(&entry.pattern) {
                    conflicts.push(entry.pattern.clone());
                }
            }
        }
    }
    Merged {
        document,
        conflicts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope::{Markers, parse};

    fn doc(text: &str) -> ScopeDocument {
        parse(text, &Markers::default())
    }

    fn dispositions(doc: &ScopeDocument) -> Vec<(String, bool)> {
        let mut pairs: Vec<(String, bool)> = doc
            .entries()
            .iter()
            .map(|e| (e.pattern.clone(), e.included))
            .collect();
        pairs.sort();
        pairs
    }

    #[test]
    fn test_merge_with_empty_document() {
        let merged = merge(&[doc("!INCLUDE\nfoo.com"), doc("")]);
        assert_eq!(merged.document.len(), 1);
        assert_eq!(merged.document.entries()[0].pattern, "foo.com");
        assert!(merged.document.entries()[0].included);
        assert!(merged.conflicts.is_empty());
    }

    #[test]
    fn test_merge_no_documents() {
        let merged = merge(&[]);
        assert!(merged.document.is_empty());
        assert!(merged.document.name.is_none());
    }

    #[test]
    fn test_merge_is_commutative() {
        let a = doc("!INCLUDE\na.com\nb.com\n!EXCLUDE\nc.com");
        let b = doc("!INCLUDE\nc.com\nd.com");
        let ab = merge(&[a.clone(), b.clone()]);
        let ba = merge(&[b, a]);
        assert_eq!(dispositions(&ab.document), dispositions(&ba.document));
    }

    #[test]
    fn test_merge_exclude_wins_across_documents() {
        let a = doc("!INCLUDE\nexample.com");
        let b = doc("!EXCLUDE\nexample.com");
        let merged = merge(&[a, b]);
        assert_eq!(merged.document.len(), 1);
        assert!(!merged.document.entries()[0].included);
        assert_eq!(merged.conflicts, vec!["example.com".to_string()]);
    }

    #[test]
    fn test_merge_exclude_wins_regardless_of_order() {
        let a = doc("!INCLUDE\nexample.com");
        let b = doc("!EXCLUDE\nexample.com");
        let merged = merge(&[b, a]);
        assert!(!merged.document.entries()[0].included);
    }

    #[test]
    fn test_merge_conflicts_reported_once_per_pattern() {
        let merged = merge(&[
            doc("!INCLUDE\nexample.com"),
            doc("!EXCLUDE\nexample.com"),
            doc("!INCLUDE\nexample.com"),
        ]);
        assert_eq!(merged.conflicts.len(), 1);
        assert!(!merged.document.entries()[0].included);
    }

    #[test]
    fn test_merge_takes_first_non_empty_name() {
        let unnamed = doc("a.com");
        let mut first = doc("b.com");
        first.name = Some(String::new());
        let mut second = doc("c.com");
        second.name = Some("Acme".to_string());
        let mut third = doc("d.com");
        third.name = Some("Other".to_string());
        let merged = merge(&[unnamed, first, second, third]);
        assert_eq!(merged.document.name.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_merge_deduplicates_identical_entries() {
        let merged = merge(&[doc("a.com\nb.com"), doc("b.com\nc.com")]);
        assert_eq!(merged.document.len(), 3);
        assert!(merged.conflicts.is_empty());
    }

    #[test]
    fn test_merge_does_not_mutate_inputs() {
        let a = doc("!INCLUDE\nexample.com");
        let b = doc("!EXCLUDE\nexample.com");
        let before = dispositions(&a);
        let _ = merge(&[a.clone(), b]);
        assert_eq!(dispositions(&a), before);
    }
}
