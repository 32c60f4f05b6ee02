//! Deriving match regexes from normalized patterns.
//!
//! Each output format wants the same information sliced differently: the
//! proxy scope matches host, port, and file with separate regexes, while the
//! scanner context matches one regex against the whole URL. Both are
//! assembled here from the same split of the normalized pattern, so the two
//! formats can never drift apart on what a pattern means.
//!
//! CIDR blocks and address ranges become regexes over their literal text
//! only. Numeric membership (expanding `10.0.0.0/24` into its addresses) is
//! left to the consuming tool; a tool that cannot do its own range matching
//! will treat such entries as plain literals.

use crate::scope::classifier::split_host_port;
use crate::scope::{ScopeEntry, TargetKind};

/// The pieces of a normalized pattern relevant to regex assembly.
struct Parts<'a> {
    scheme: Option<&'a str>,
    host: &'a str,
    port: Option<&'a str>,
    path: Option<&'a str>,
}

impl<'a> Parts<'a> {
    /// Split the normalized pattern. `None` for opaque entries, which have
    /// no recognizable structure and pass through verbatim.
    fn of(entry: &'a ScopeEntry) -> Option<Self> {
        match entry.kind {
            TargetKind::OpaquePattern => None,
            TargetKind::UrlWithPath => {
                let (scheme, rest) = match entry.pattern.split_once("://") {
                    Some((scheme, rest)) => (Some(scheme), rest),
                    None => (None, entry.pattern.as_str()),
                };
                let (host_port, path) = match rest.find(['/', '?']) {
                    Some(idx) => (&rest[..idx], Some(&rest[idx..])),
                    None => (rest, None),
                };
                let (host, port) = split_host_port(host_port);
                Some(Self {
                    scheme,
                    host,
                    port,
                    path,
                })
            }
            _ => Some(Self {
                scheme: None,
                host: &entry.pattern,
                port: None,
                path: None,
            }),
        }
    }
}

/// Regex matching the host portion, anchored at both ends. Opaque patterns
/// are returned as-is.
pub fn host_regex(entry: &ScopeEntry) -> String {
    match Parts::of(entry) {
        Some(parts) => format!("^{}$", escape_keeping_wildcards(parts.host)),
        None => entry.pattern.clone(),
    }
}

/// Regex for the path-and-query portion, or `None` to match any path.
pub fn path_regex(entry: &ScopeEntry) -> Option<String> {
    let path = Parts::of(entry)?.path?;
    let fragment = escape_keeping_wildcards(path);
    if path.ends_with('*') {
        Some(format!("^{fragment}"))
    } else {
        Some(format!("^{fragment}.*"))
    }
}

/// Regex for an explicit port, or `None` to match any port.
pub fn port_regex(entry: &ScopeEntry) -> Option<String> {
    Parts::of(entry)?.port.map(|p| format!("^{p}$"))
}

/// The scheme captured during classification, if any.
pub fn protocol(entry: &ScopeEntry) -> Option<String> {
    Parts::of(entry)?.scheme.map(str::to_string)
}

/// One regex matching a full URL, for scanner contexts.
///
/// Hosts without a captured scheme, port, or path match any of each. CIDR
/// and range entries match their literal text only, and opaque patterns pass
/// through verbatim.
pub fn url_regex(entry: &ScopeEntry) -> String {
    if matches!(entry.kind, TargetKind::Cidr | TargetKind::IpRange) {
        return format!("^{}$", regex::escape(&entry.pattern));
    }
    let Some(parts) = Parts::of(entry) else {
        return entry.pattern.clone();
    };
    let scheme = match parts.scheme {
        Some(s) => regex::escape(s),
        None => "https?".to_string(),
    };
    // v6 hosts appear bracketed inside URLs
    let host = if entry.kind == TargetKind::Ipv6 {
        format!(r"\[?{}\]?", regex::escape(parts.host))
    } else {
        // a host wildcard must stop at the authority boundary, or
        // `*.example.com` would match a foreign host whose path or query
        // mentions `.example.com`
        escape_with_wildcard(parts.host, "[^/?#]*")
    };
    let port = match parts.port {
        Some(p) => format!(":{p}"),
        None => r"(?::\d+)?".to_string(),
    };
    let path = match parts.path {
        Some(p) if p.ends_with('*') => escape_keeping_wildcards(p),
        Some(p) => format!("{}.*", escape_keeping_wildcards(p)),
        None => "(?:[/?].*)?".to_string(),
    };
    format!("^{scheme}://{host}{port}{path}$")
}

/// Escape regex metacharacters, turning each `*` wildcard token into `.*`.
fn escape_keeping_wildcards(text: &str) -> String {
    escape_with_wildcard(text, ".*")
}

fn escape_with_wildcard(text: &str, wildcard: &str) -> String {
    text.split('*')
        .map(|piece| regex::escape(piece))
        .collect::<Vec<_>>()
        .join(wildcard)
}
