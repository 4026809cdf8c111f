//! Upstream source descriptors.

use serde::Deserialize;
use std::fmt;

use crate::converter::{ProviderParser, QuantumultXParser, RuleParser, SuffixListParser};
use crate::{Result, RuleSet};

/// Line convention spoken by a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceFormat {
    /// Plain list of `DOMAIN-SUFFIX,<domain>` lines
    SuffixList,
    /// Clash rule-provider YAML with a `payload` list
    ClashProvider,
    /// Quantumult X `host,` / `host-suffix,` list
    QuantumultX,
}

impl SourceFormat {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::SuffixList => "suffix-list",
            SourceFormat::ClashProvider => "clash-provider",
            SourceFormat::QuantumultX => "quantumult-x",
        }
    }

    /// Parse a source body with the parser for this format.
    pub fn parse(&self, content: &str) -> Result<RuleSet> {
        match self {
            SourceFormat::SuffixList => SuffixListParser.parse(content),
            SourceFormat::ClashProvider => ProviderParser.parse(content),
            SourceFormat::QuantumultX => QuantumultXParser.parse(content),
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One upstream rule list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Source {
    /// Short name used in logs
    pub name: String,
    /// Remote URL
    pub url: String,
    /// Line convention of the body
    pub format: SourceFormat,
}

impl Source {
    /// Create a new source.
    pub fn new(name: impl Into<String>, url: impl Into<String>, format: SourceFormat) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            format,
        }
    }
}

const ACL4SSR_LIST_URL: &str =
    "https://raw.githubusercontent.com/ACL4SSR/ACL4SSR/master/Clash/Ruleset/Binance.list";
const ACL4SSR_YAML_URL: &str =
    "https://raw.githubusercontent.com/ACL4SSR/ACL4SSR/master/Clash/Providers/Ruleset/Binance.yaml";
const STRICKLAND_LIST_URL: &str =
    "https://raw.githubusercontent.com/StricklandF/Filter/main/Binance.list";

/// The four upstream Binance lists, in fetch order.
///
/// The StricklandF list is read twice, once for its `DOMAIN-SUFFIX` lines and
/// once for its Quantumult X lines.
pub fn default_sources() -> Vec<Source> {
    vec![
        Source::new("acl4ssr-list", ACL4SSR_LIST_URL, SourceFormat::SuffixList),
        Source::new("acl4ssr-yaml", ACL4SSR_YAML_URL, SourceFormat::ClashProvider),
        Source::new("strickland-list", STRICKLAND_LIST_URL, SourceFormat::SuffixList),
        Source::new("strickland-quanx", STRICKLAND_LIST_URL, SourceFormat::QuantumultX),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sources() {
        let sources = default_sources();
        assert_eq!(sources.len(), 4);
        assert_eq!(sources[1].format, SourceFormat::ClashProvider);
        assert_eq!(sources[2].url, sources[3].url);
        assert_eq!(sources[3].format, SourceFormat::QuantumultX);
    }

    #[test]
    fn test_format_dispatch() {
        let body = "DOMAIN-SUFFIX,binance.com\nhost-suffix,bnbstatic.com\n";
        assert!(SourceFormat::SuffixList.parse(body).unwrap().contains("binance.com"));
        assert!(SourceFormat::QuantumultX.parse(body).unwrap().contains("bnbstatic.com"));
        assert!(SourceFormat::ClashProvider.parse("payload: []").unwrap().is_empty());
    }

    #[test]
    fn test_format_serde_names() {
        let format: SourceFormat = serde_yaml::from_str("quantumult-x").unwrap();
        assert_eq!(format, SourceFormat::QuantumultX);
        assert_eq!(SourceFormat::ClashProvider.to_string(), "clash-provider");
    }
}
