//! pinche-rules - merge upstream Binance rule lists into one Surge rule file.
//!
//! The crate fetches several public rule lists, extracts their domain-suffix
//! rules, removes duplicates and subdomains already covered by a parent
//! domain, and renders a `DOMAIN-SUFFIX` rule file with a metadata header.
//!
//! # Quick Start
//!
//! ```ignore
//! use pinche_rules::{Generator, GeneratorConfig, HttpFetcher};
//!
//! let config = GeneratorConfig::default();
//! let fetcher = HttpFetcher::new()?;
//! let report = Generator::new(config, fetcher).run()?;
//! println!("{} rules written to {:?}", report.total, report.output);
//! ```
//!
//! # Source Formats
//!
//! - **suffix-list**: plain `DOMAIN-SUFFIX,<domain>` lines
//! - **clash-provider**: Clash rule-provider YAML with a `payload` list
//! - **quantumult-x**: `host,<domain>` and `host-suffix,<domain>` lines
//!
//! # Failure Policy
//!
//! A source that cannot be fetched or parsed contributes no rules and is
//! reported in the [`GenerationReport`]; the run carries on with the rest.
//! Only configuration and output write failures are returned as errors.

mod error;

pub mod config;
pub mod converter;
pub mod fetch;
pub mod generator;
pub mod render;
pub mod ruleset;
pub mod source;

// Re-export core types
pub use error::{Error, Result};
pub use ruleset::RuleSet;

pub use config::{GeneratorConfig, RuleFileMeta};
pub use fetch::{Fetcher, HttpFetcher};
pub use generator::{GenerationReport, Generator, RuleFileBuild, SourceOutcome, SourceReport};
pub use source::{default_sources, Source, SourceFormat};
