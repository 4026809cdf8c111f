//! Surge/Clash classical list parser (`DOMAIN-SUFFIX,<domain>` lines).

use super::RuleParser;
use crate::{Result, RuleSet};

const SUFFIX_PREFIX: &str = "DOMAIN-SUFFIX,";

/// Extract the domain from a `DOMAIN-SUFFIX,<domain>[,<policy>]` entry.
///
/// The prefix must start at column 0. Returns `None` for any other rule
/// type or an empty domain field.
pub fn parse_suffix_line(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(SUFFIX_PREFIX)?;
    let domain = rest.split(',').next().unwrap_or_default().trim();
    if domain.is_empty() {
        None
    } else {
        Some(domain)
    }
}

/// Parser for plain rule lists with one rule per line.
///
/// Only `DOMAIN-SUFFIX` lines contribute; comments, `DOMAIN`,
/// `DOMAIN-KEYWORD`, `IP-CIDR` and friends are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixListParser;

impl RuleParser for SuffixListParser {
    fn parse(&self, content: &str) -> Result<RuleSet> {
        Ok(content.lines().filter_map(parse_suffix_line).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_suffix_line() {
        assert_eq!(parse_suffix_line("DOMAIN-SUFFIX,binance.com"), Some("binance.com"));
        assert_eq!(
            parse_suffix_line("DOMAIN-SUFFIX,binance.com,Proxy"),
            Some("binance.com")
        );
        assert_eq!(parse_suffix_line("DOMAIN-SUFFIX,bnbstatic.com  "), Some("bnbstatic.com"));
        assert_eq!(parse_suffix_line("  DOMAIN-SUFFIX,bnbstatic.com"), None);
        assert_eq!(parse_suffix_line("DOMAIN,binance.com"), None);
        assert_eq!(parse_suffix_line("DOMAIN-KEYWORD,binance"), None);
        assert_eq!(parse_suffix_line("# DOMAIN-SUFFIX,binance.com"), None);
        assert_eq!(parse_suffix_line("DOMAIN-SUFFIX,"), None);
        assert_eq!(parse_suffix_line("domain-suffix,binance.com"), None);
    }

    #[test]
    fn test_parse_list() {
        let text = r#"
# NAME: Binance
# TOTAL: 4
DOMAIN-SUFFIX,binance.com
DOMAIN-SUFFIX,binance.cloud
DOMAIN,api.binance.com
DOMAIN-KEYWORD,binance
IP-CIDR,1.2.3.0/24,no-resolve
DOMAIN-SUFFIX,binance.com
"#;

        let rules = SuffixListParser.parse(text).unwrap();
        assert_eq!(rules.len(), 2);
        assert!(rules.contains("binance.com"));
        assert!(rules.contains("binance.cloud"));
        assert!(!rules.contains("api.binance.com"));
    }

    #[test]
    fn test_parse_empty_body() {
        assert!(SuffixListParser.parse("").unwrap().is_empty());
    }
}
