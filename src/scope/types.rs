//! Core scope data model: classified entries and the documents holding them.

/// The kind of target a scope entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// A plain domain name, e.g. `example.com`.
    ExactHost,
    /// A hostname containing a wildcard token, e.g. `*.example.com`.
    WildcardHost,
    /// A URL: anything with a scheme, or a host followed by a path/query.
    UrlWithPath,
    /// A single IPv4 literal.
    Ipv4,
    /// A single IPv6 literal.
    Ipv6,
    /// A CIDR block, e.g. `10.0.0.0/24`.
    Cidr,
    /// An address range, e.g. `10.0.0.1-10.0.0.50`.
    IpRange,
    /// Anything else: passed through untouched as a literal/regex pattern.
    OpaquePattern,
}

impl TargetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::ExactHost => "host",
            TargetKind::WildcardHost => "wildcard",
            TargetKind::UrlWithPath => "url",
            TargetKind::Ipv4 => "ipv4",
            TargetKind::Ipv6 => "ipv6",
            TargetKind::Cidr => "cidr",
            TargetKind::IpRange => "ip-range",
            TargetKind::OpaquePattern => "pattern",
        }
    }
}

impl std::fmt::Display for TargetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One classified scope line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeEntry {
    /// The original text exactly as supplied.
    pub raw: String,
    /// Classification result.
    pub kind: TargetKind,
    /// Canonical, tool-agnostic form of the target. Renderers derive their
    /// format-specific regexes from this, never from `raw`.
    pub pattern: String,
    /// True for the include section, false for exclude.
    pub included: bool,
}

/// Outcome of inserting an entry into a [`ScopeDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The entry was appended.
    Added,
    /// Same pattern, same disposition: the entry was dropped.
    Duplicate,
    /// Same pattern, opposing dispositions: the surviving entry is excluded
    /// (explicit exclusion is authoritative).
    Conflict,
}

/// An ordered, deduplicated set of scope entries.
///
/// The document maintains one invariant: each normalized pattern appears at
/// most once, and when a pattern is supplied as both include and exclude, the
/// excluded disposition survives. [`ScopeDocument::insert`] applies the rule
/// incrementally so the invariant holds at every point, not only after a
/// merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeDocument {
    /// Human-assigned label; required only by the scanner-context renderer.
    pub name: Option<String>,
    entries: Vec<ScopeEntry>,
}

impl ScopeDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            entries: Vec::new(),
        }
    }

    /// Insert an entry, enforcing the uniqueness/exclude-wins invariant.
    ///
    /// A conflicting insert flips the existing entry to excluded in place, so
    /// input order is preserved regardless of which disposition arrived first.
    pub fn insert(&mut self, entry: ScopeEntry) -> InsertOutcome {
        if let Some(existing) = self.entries.iter_mut().find(|e| e.pattern == entry.pattern) {
            if existing.included == entry.included {
                return InsertOutcome::Duplicate;
            }
            existing.included = false;
            return InsertOutcome::Conflict;
        }
        self.entries.push(entry);
        InsertOutcome::Added
    }

    pub fn entries(&self) -> &[ScopeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries belonging to the include section, in document order.
    pub fn included(&self) -> impl Iterator<Item = &ScopeEntry> {
        self.entries.iter().filter(|e| e.included)
    }

    /// Entries belonging to the exclude section, in document order.
    pub fn excluded(&self) -> impl Iterator<Item = &ScopeEntry> {
        self.entries.iter().filter(|e| !e.included)
    }
}
