//! Quantumult X filter list parser (`host,` / `host-suffix,` lines).

use super::RuleParser;
use crate::{Result, RuleSet};

/// Parser for Quantumult X style filter lists.
///
/// `host-suffix,<domain>` is taken as-is. `host,<domain>` adds the full
/// hostname unless the hostname minus its leftmost label has already been
/// collected from an earlier line of the same list. The check only sees
/// rules accumulated so far, so the result depends on line order.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuantumultXParser;

impl RuleParser for QuantumultXParser {
    fn parse(&self, content: &str) -> Result<RuleSet> {
        let mut rules = RuleSet::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(rest) = line.strip_prefix("host-suffix,") {
                rules.insert(second_field(rest));
            } else if let Some(rest) = line.strip_prefix("host,") {
                let host = second_field(rest);
                if !rules.contains(strip_leftmost_label(host)) {
                    rules.insert(host);
                }
            }
        }

        Ok(rules)
    }
}

/// Domain field of `<domain>[,<policy>...]`.
fn second_field(rest: &str) -> &str {
    rest.split(',').next().unwrap_or_default().trim()
}

/// Drop the first label: `a.example.com` -> `example.com`.
///
/// Hosts without a non-empty leading label followed by a dot are returned
/// unchanged.
fn strip_leftmost_label(host: &str) -> &str {
    match host.find('.') {
        Some(pos) if pos > 0 => &host[pos + 1..],
        _ => host,
    }
}
