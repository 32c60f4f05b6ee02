//! Proxy-scope rendering: the advanced-mode target scope JSON loaded by an
//! intercepting proxy via its project options.

use serde::Serialize;

use crate::error::Result;
use crate::render::{Renderer, pattern};
use crate::scope::{ScopeDocument, ScopeEntry};

pub struct BurpRenderer;

impl BurpRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BurpRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for BurpRenderer {
    fn render(&self, doc: &ScopeDocument) -> Result<String> {
        let config = BurpConfig::from_document(doc);
        Ok(serde_json::to_string_pretty(&config)?)
    }
}

#[derive(Debug, Serialize)]
pub struct BurpConfig {
    pub target: BurpTarget,
}

#[derive(Debug, Serialize)]
pub struct BurpTarget {
    pub scope: BurpScope,
}

#[derive(Debug, Serialize)]
pub struct BurpScope {
    pub advanced_mode: bool,
    pub exclude: Vec<BurpRule>,
    pub include: Vec<BurpRule>,
}

/// One advanced-scope match rule. An omitted field matches anything.
#[derive(Debug, Serialize)]
pub struct BurpRule {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub host: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}

impl BurpConfig {
    pub fn from_document(doc: &ScopeDocument) -> Self {
        let rule = |entry: &ScopeEntry| BurpRule {
            enabled: true,
            file: pattern::path_regex(entry),
            host: pattern::host_regex(entry),
            port: pattern::port_regex(entry),
            protocol: pattern::protocol(entry),
        };
        Self {
            target: BurpTarget {
                scope: BurpScope {
                    advanced_mode: true,
                    exclude: doc.excluded().map(rule).collect(),
                    include: doc.included().map(rule).collect(),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::document;

    #[test]
    fn test_burp_structure() {
        let doc = document("!INCLUDE\nexample.com\n!EXCLUDE\nadmin.example.com");
        let output = BurpRenderer::new().render(&doc).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let scope = &parsed["target"]["scope"];
        assert_eq!(scope["advanced_mode"], true);
        assert_eq!(scope["include"].as_array().unwrap().len(), 1);
        assert_eq!(scope["exclude"].as_array().unwrap().len(), 1);
        assert_eq!(scope["include"][0]["enabled"], true);
        assert_eq!(scope["include"][0]["host"], r"^example\.com$");
        assert_eq!(scope["exclude"][0]["host"], r"^admin\.example\.com$");
    }

    #[test]
    fn test_burp_url_rule_carries_all_fields() {
        let doc = document("https://api.example.com:8443/v1/users");
        let output = BurpRenderer::new().render(&doc).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let rule = &parsed["target"]["scope"]["include"][0];
        assert_eq!(rule["host"], r"^api\.example\.com$");
        assert_eq!(rule["port"], "^8443$");
        assert_eq!(rule["protocol"], "https");
        assert_eq!(rule["file"], r"^/v1/users.*");
    }

    #[test]
    fn test_burp_host_only_rule_omits_optional_fields() {
        let doc = document("example.com");
        let output = BurpRenderer::new().render(&doc).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let rule = &parsed["target"]["scope"]["include"][0];
        assert!(rule.get("file").is_none());
        assert!(rule.get("port").is_none());
        assert!(rule.get("protocol").is_none());
    }

    #[test]
    fn test_burp_wildcard_host() {
        let doc = document("*.example.com");
        let output = BurpRenderer::new().render(&doc).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            parsed["target"]["scope"]["include"][0]["host"],
            r"^.*\.example\.com$"
        );
    }

    #[test]
    fn test_burp_cidr_rendered_as_literal() {
        let doc = document("10.0.0.0/24");
        let output = BurpRenderer::new().render(&doc).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            parsed["target"]["scope"]["include"][0]["host"],
            r"^10\.0\.0\.0/24$"
        );
    }

    #[test]
    fn test_burp_empty_document_renders_empty_arrays() {
        let doc = document("");
        let output = BurpRenderer::new().render(&doc).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(parsed["target"]["scope"]["include"]
            .as_array()
            .unwrap()
            .is_empty());
        assert!(parsed["target"]["scope"]["exclude"]
            .as_array()
            .unwrap()
            .is_empty());
    }
}
