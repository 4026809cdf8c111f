//! Domain-suffix rule set and subdomain redundancy elimination.
//!
//! A [`RuleSet`] is an unordered collection of domain suffixes such as
//! `binance.com`. Uniqueness is by exact string match. Every source parser
//! produces one, the generator merges them, and [`RuleSet::remove_redundant`]
//! reduces the union to the minimal sorted list that is rendered.

use ahash::AHashSet;

/// Unordered set of domain-suffix rules.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: AHashSet<String>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rule.
    ///
    /// Surrounding whitespace is trimmed; empty rules are ignored.
    /// Returns `true` if the rule was not present before.
    pub fn insert(&mut self, rule: &str) -> bool {
        let rule = rule.trim();
        if rule.is_empty() {
            return false;
        }
        self.rules.insert(rule.to_string())
    }

    /// Check whether a rule is present (exact match).
    pub fn contains(&self, rule: &str) -> bool {
        self.rules.contains(rule)
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over the rules in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(String::as_str)
    }

    /// Move every rule of `other` into this set.
    pub fn merge(&mut self, other: RuleSet) {
        self.rules.extend(other.rules);
    }

    /// Check whether a strict parent domain of `rule` is in the set.
    ///
    /// `a.b.example.com` probes `b.example.com`, `example.com` and `com`.
    pub fn has_parent(&self, rule: &str) -> bool {
        let mut current = rule;
        while let Some(pos) = current.find('.') {
            current = &current[pos + 1..];
            if !current.is_empty() && self.rules.contains(current) {
                return true;
            }
        }
        false
    }

    /// Drop every rule covered by a parent rule and return the survivors
    /// sorted lexicographically.
    ///
    /// Membership is always checked against the full set, so the result
    /// does not depend on iteration order.
    pub fn remove_redundant(&self) -> Vec<String> {
        let mut kept: Vec<String> = self
            .rules
            .iter()
            .filter(|rule| !self.has_parent(rule))
            .cloned()
            .collect();
        kept.sort_unstable();

        let removed = self.rules.len() - kept.len();
        if removed > 0 {
            log::debug!("Removed {} rules covered by a parent domain", removed);
        }

        kept
    }
}

impl<S: AsRef<str>> FromIterator<S> for RuleSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = RuleSet::new();
        set.extend(iter);
        set
    }
}

impl<S: AsRef<str>> Extend<S> for RuleSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for rule in iter {
            self.insert(rule.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_trims_and_skips_empty() {
        let mut set = RuleSet::new();
        assert!(set.insert("  binance.com "));
        assert!(!set.insert("binance.com"));
        assert!(!set.insert(""));
        assert!(!set.insert("   "));
        assert_eq!(set.len(), 1);
        assert!(set.contains("binance.com"));
    }

    #[test]
    fn test_parent_removes_subdomain() {
        let set: RuleSet = ["a.b.com", "b.com"].into_iter().collect();
        assert_eq!(set.remove_redundant(), vec!["b.com"]);
    }

    #[test]
    fn test_deep_subdomain_removed_by_grandparent() {
        let set: RuleSet = ["x.y.z.binance.com", "binance.com", "z.binance.com"]
            .into_iter()
            .collect();
        assert_eq!(set.remove_redundant(), vec!["binance.com"]);
    }

    #[test]
    fn test_binance_scenario_sorted() {
        let set: RuleSet = ["y.com", "x.binance.com", "binance.com"].into_iter().collect();
        assert_eq!(set.remove_redundant(), vec!["binance.com", "y.com"]);
    }

    #[test]
    fn test_label_boundary_respected() {
        // notbinance.com is not a subdomain of binance.com
        let set: RuleSet = ["binance.com", "notbinance.com"].into_iter().collect();
        assert_eq!(set.remove_redundant(), vec!["binance.com", "notbinance.com"]);
    }

    #[test]
    fn test_tld_rule_covers_everything_under_it() {
        let set: RuleSet = ["com", "binance.com", "binance.org"].into_iter().collect();
        assert_eq!(set.remove_redundant(), vec!["binance.org", "com"]);
    }

    #[test]
    fn test_idempotent() {
        let set: RuleSet = [
            "binance.com",
            "accounts.binance.com",
            "bnbstatic.com",
            "static.bnbstatic.com",
            "binance.cloud",
            "a.b.c.d",
            "c.d",
        ]
        .into_iter()
        .collect();

        let once = set.remove_redundant();
        let twice: Vec<String> = once.iter().collect::<RuleSet>().remove_redundant();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_no_retained_rule_is_suffix_of_another() {
        let set: RuleSet = [
            "binance.com",
            "www.binance.com",
            "binance.us",
            "api.binance.us",
            "bnb.io",
            "x.bnb.io",
            "io",
        ]
        .into_iter()
        .collect();

        let kept = set.remove_redundant();
        for a in &kept {
            for b in &kept {
                if a != b {
                    assert!(!a.ends_with(&format!(".{}", b)), "{} covered by {}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_sorted_plain_lexicographic() {
        let set: RuleSet = ["b.com", "a.org", "Z.net", "a.com"].into_iter().collect();
        assert_eq!(set.remove_redundant(), vec!["Z.net", "a.com", "a.org", "b.com"]);
    }

    #[test]
    fn test_merge_collapses_duplicates() {
        let mut a: RuleSet = ["binance.com", "bnbstatic.com"].into_iter().collect();
        let b: RuleSet = ["binance.com", "binance.cloud"].into_iter().collect();
        a.merge(b);
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn test_empty_set() {
        assert!(RuleSet::new().remove_redundant().is_empty());
    }
}
