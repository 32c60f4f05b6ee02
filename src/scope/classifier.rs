//! Target classification: turns one scope line into a typed, normalized entry.
//!
//! Scraped scope data is noisy free text, so classification is a total
//! function: every non-empty line maps to exactly one [`TargetKind`], with
//! [`TargetKind::OpaquePattern`] as the fallback. Ambiguity between kinds is
//! resolved once here, by a fixed decision order, rather than by downstream
//! text rewriting.

use std::net::{IpAddr, Ipv4Addr};

use tracing::debug;

use crate::scope::{ScopeEntry, TargetKind};

/// Classify a single scope line into an entry with the given disposition.
///
/// Returns `None` only when the line is empty after scrubbing; such lines
/// carry no scope information and are dropped silently.
pub fn classify(raw: &str, included: bool) -> Option<ScopeEntry> {
    let cleaned = scrub(raw);
    if cleaned.is_empty() {
        return None;
    }

    // First match wins. The categories overlap in appearance (a CIDR contains
    // a slash like a URL path, a range contains a dash like a hostname), so
    // the order is part of the contract.
    let (kind, pattern) = if let Some(pattern) = as_cidr(&cleaned) {
        (TargetKind::Cidr, pattern)
    } else if let Some(pattern) = as_ip_range(&cleaned) {
        (TargetKind::IpRange, pattern)
    } else if let Some((kind, pattern)) = as_ip(&cleaned) {
        (kind, pattern)
    } else if let Some(pattern) = as_url(&cleaned) {
        (TargetKind::UrlWithPath, pattern)
    } else if let Some(pattern) = as_wildcard_host(&cleaned) {
        (TargetKind::WildcardHost, pattern)
    } else if let Some(pattern) = as_exact_host(&cleaned) {
        (TargetKind::ExactHost, pattern)
    } else {
        debug!(line = %cleaned, "No structured kind matched, keeping as opaque pattern");
        (TargetKind::OpaquePattern, cleaned)
    };

    Some(ScopeEntry {
        raw: raw.to_string(),
        kind,
        pattern,
        included,
    })
}

/// Strip whitespace and markup residue left over from upstream scraping.
///
/// Scraped program pages leave literal `<`/`>` escape sequences and
/// stray angle brackets around targets.
fn scrub(raw: &str) -> String {
    raw.replace("\\u003c", "")
        .replace("\\u003e", "")
        .replace(['<', '>'], "")
        .trim()
        .to_string()
}

/// `<addr>/<prefix>` with a prefix length valid for the address family.
fn as_cidr(text: &str) -> Option<String> {
    let (addr, prefix) = text.split_once('/')?;
    let addr: IpAddr = addr.trim().parse().ok()?;
    let prefix: u8 = prefix.trim().parse().ok()?;
    let max = if addr.is_ipv4() { 32 } else { 128 };
    (prefix <= max).then(|| format!("{addr}/{prefix}"))
}

/// `<addr>-<addr>` over one family, or the v4 trailing-octet shorthand
/// `10.0.0.1-50`, which normalizes to the full `10.0.0.1-10.0.0.50` form.
fn as_ip_range(text: &str) -> Option<String> {
    let (start, end) = text.split_once('-')?;
    let start: IpAddr = start.trim().parse().ok()?;
    let end = end.trim();
    if let Ok(end_addr) = end.parse::<IpAddr>() {
        return (start.is_ipv4() == end_addr.is_ipv4())
            .then(|| format!("{start}-{end_addr}"));
    }
    if let (IpAddr::V4(v4), Ok(last)) = (start, end.parse::<u8>()) {
        let o = v4.octets();
        return Some(format!("{v4}-{}", Ipv4Addr::new(o[0], o[1], o[2], last)));
    }
    None
}

/// A bare address literal. Parsing through [`IpAddr`] canonicalizes the text
/// (compressed lowercase form for v6).
fn as_ip(text: &str) -> Option<(TargetKind, String)> {
    match text.parse::<IpAddr>().ok()? {
        IpAddr::V4(v4) => Some((TargetKind::Ipv4, v4.to_string())),
        IpAddr::V6(v6) => Some((TargetKind::Ipv6, v6.to_string())),
    }
}

/// Anything with an `http(s)` scheme, a path or query after the host, or an
/// explicit port. The scheme and host are lowercased; the path is kept as
/// supplied since paths are case-sensitive. A bare trailing slash is dropped.
fn as_url(text: &str) -> Option<String> {
    let (scheme, rest) = match text.split_once("://") {
        Some((scheme, rest)) => {
            let scheme = scheme.to_lowercase();
            if scheme != "http" && scheme != "https" {
                return None;
            }
            (Some(scheme), rest)
        }
        None => (None, text),
    };

    let split_at = rest.find(['/', '?']);
    let (host_port, path) = match split_at {
        Some(idx) => (&rest[..idx], &rest[idx..]),
        None => (rest, ""),
    };
    // a bare trailing slash is not enough signal on its own; the line falls
    // through to host classification instead
    if scheme.is_none() && (path.is_empty() || path == "/") && !has_explicit_port(host_port) {
        return None;
    }
    if !is_host_port(host_port) {
        return None;
    }

    let mut pattern = String::new();
    if let Some(scheme) = &scheme {
        pattern.push_str(scheme);
        pattern.push_str("://");
    }
    pattern.push_str(&host_port.to_lowercase());
    if path != "/" {
        pattern.push_str(path);
    }
    Some(pattern)
}

/// A hostname containing at least one `*` token, either as a whole label
/// (`*.example.com`) or embedded in one (`dev-*.example.com`). Runs of
/// wildcards collapse to a single token, so `*.*.example.com` and
/// `**.example.com` both normalize to `*.example.com`.
fn as_wildcard_host(text: &str) -> Option<String> {
    if !text.contains('*') {
        return None;
    }
    let host = collapse_wildcards(&host_text(text));
    host.split('.')
        .all(|label| is_wildcard_label(label) || is_label(label))
        .then_some(host)
}

/// A plain domain name. At least one dot is required, which keeps bare words
/// from scraped prose out of the host bucket and in the opaque fallback.
fn as_exact_host(text: &str) -> Option<String> {
    let host = host_text(text);
    (host.contains('.') && host.split('.').all(is_label)).then_some(host)
}

/// Lowercase and drop the trailing dot or bare slash commonly pasted along
/// with a hostname.
fn host_text(text: &str) -> String {
    text.strip_suffix('/')
        .unwrap_or(text)
        .trim_end_matches('.')
        .to_lowercase()
}

fn collapse_wildcards(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut prev_star = false;
    for c in text.chars() {
        if c == '*' && prev_star {
            continue;
        }
        prev_star = c == '*';
        collapsed.push(c);
    }
    while collapsed.contains("*.*.") {
        collapsed = collapsed.replace("*.*.", "*.");
    }
    collapsed
}

fn is_label(label: &str) -> bool {
    !label.is_empty()
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// A label carrying a `*` token, with any literal characters drawn from the
/// plain label charset. The edge-hyphen rule does not apply here since the
/// wildcard stands in for the rest of the label.
fn is_wildcard_label(label: &str) -> bool {
    label.contains('*')
        && label
            .chars()
            .all(|c| c == '*' || c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Host part of a URL: a domain (wildcards allowed), an address literal, or a
/// bracketed v6 literal, with an optional `:port` suffix.
fn is_host_port(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    let (host, port) = split_host_port(text);
    if let Some(port) = port
        && port.parse::<u16>().is_err()
    {
        return false;
    }
    if let Some(inner) = host.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
        return inner.parse::<IpAddr>().is_ok();
    }
    host.parse::<IpAddr>().is_ok()
        || host
            .split('.')
            .all(|label| is_wildcard_label(label) || is_label(label))
}

fn has_explicit_port(text: &str) -> bool {
    split_host_port(text).1.is_some()
}

/// Split a trailing `:port` off a host. A bare v6 literal contains colons of
/// its own, so the suffix only counts as a port when it is all digits.
pub(crate) fn split_host_port(text: &str) -> (&str, Option<&str>) {
    if let Some((host, port)) = text.rsplit_once(':')
        && !port.is_empty()
        && port.chars().all(|c| c.is_ascii_digit())
        && !host.is_empty()
        && (!host.contains(':') || host.ends_with(']'))
    {
        return (host, Some(port));
    }
    (text, None)
}
