//! Clash rule-provider YAML parser.

use serde::Deserialize;

use super::suffix::parse_suffix_line;
use super::RuleParser;
use crate::{Result, RuleSet};

/// Rule provider payload structure.
#[derive(Debug, Deserialize)]
struct ProviderPayload {
    #[serde(default)]
    payload: Vec<serde_yaml::Value>,
}

/// Parser for Clash rule-provider documents (`payload:` list of classical rules).
///
/// A malformed document is reported as [`Error::Yaml`](crate::Error::Yaml);
/// the caller decides whether that aborts anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProviderParser;

impl RuleParser for ProviderParser {
    fn parse(&self, content: &str) -> Result<RuleSet> {
        let document: ProviderPayload = serde_yaml::from_str(content)?;

        let mut rules = RuleSet::new();
        for entry in &document.payload {
            match entry.as_str() {
                Some(rule) => {
                    if let Some(domain) = parse_suffix_line(rule) {
                        rules.insert(domain);
                    }
                }
                None => log::debug!("Skipping non-string payload entry: {:?}", entry),
            }
        }

        Ok(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_parse_provider() {
        let yaml = r#"
payload:
  - DOMAIN-SUFFIX,binance.com
  - DOMAIN-SUFFIX,bnbstatic.com
  - DOMAIN,accounts.binance.com
  - DOMAIN-KEYWORD,binance
"#;

        let rules = ProviderParser.parse(yaml).unwrap();
        assert_eq!(rules.len(), 2);
        assert!(rules.contains("binance.com"));
        assert!(rules.contains("bnbstatic.com"));
    }

    #[test]
    fn test_missing_payload_yields_nothing() {
        let yaml = "name: Binance\nbehavior: classical\n";
        let rules = ProviderParser.parse(yaml).unwrap();
        assert!(rules.is_empty());
    }

    #[test]
    fn test_non_string_entries_skipped() {
        let yaml = r#"
payload:
  - 42
  - DOMAIN-SUFFIX,binance.com
  - { nested: true }
"#;

        let rules = ProviderParser.parse(yaml).unwrap();
        assert_eq!(rules.len(), 1);
        assert!(rules.contains("binance.com"));
    }

    #[test]
    fn test_malformed_document() {
        let yaml = "payload: [DOMAIN-SUFFIX,binance.com\n  - : :";
        let err = ProviderParser.parse(yaml).unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
    }

    #[test]
    fn test_payload_wrong_shape() {
        let yaml = "payload: DOMAIN-SUFFIX,binance.com\n";
        assert!(ProviderParser.parse(yaml).is_err());
    }
}
