//! Source format parsers.
//!
//! Each upstream source speaks one of three line conventions. A parser turns
//! the raw body of a source into a [`RuleSet`](crate::RuleSet).

mod clash;
mod quanx;
mod suffix;

pub use clash::ProviderParser;
pub use quanx::QuantumultXParser;
pub use suffix::{parse_suffix_line, SuffixListParser};

use crate::{Result, RuleSet};

/// Extracts domain-suffix rules from the body of one source.
pub trait RuleParser {
    /// Parse a full source body.
    fn parse(&self, content: &str) -> Result<RuleSet>;
}
