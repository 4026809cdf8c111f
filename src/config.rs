//! Generator configuration.
//!
//! Every field has a built-in default that reproduces the fixed Binance job,
//! so a config file only needs the keys it wants to change:
//!
//! ```yaml
//! output: out/Binance.list
//! timeout_secs: 30
//! meta:
//!   name: Binance
//! sources:
//!   - name: mirror
//!     url: https://example.com/Binance.list
//!     format: suffix-list
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::fetch::DEFAULT_TIMEOUT_SECS;
use crate::source::{default_sources, Source};
use crate::{Error, Result};

/// Default output path, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "surge/Binance/Binance.list";

/// Header metadata written at the top of the rule file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RuleFileMeta {
    pub name: String,
    pub author: String,
    pub repo: String,
}

impl Default for RuleFileMeta {
    fn default() -> Self {
        Self {
            name: "Binance".to_string(),
            author: "pinche-team".to_string(),
            repo: "https://github.com/pinche-team/rules".to_string(),
        }
    }
}

/// Configuration for one generator run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Path of the rendered rule file
    pub output: PathBuf,
    /// Header metadata
    pub meta: RuleFileMeta,
    /// Upstream sources, fetched in order
    pub sources: Vec<Source>,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
    /// Leave an existing output file untouched when no rules survive
    pub keep_existing_on_empty: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            meta: RuleFileMeta::default(),
            sources: default_sources(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            keep_existing_on_empty: false,
        }
    }
}

impl GeneratorConfig {
    /// Parse a configuration from YAML, filling missing keys with defaults.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Reject configurations that cannot produce a rule file.
    pub fn validate(&self) -> Result<()> {
        if self.output.as_os_str().is_empty() {
            return Err(Error::Config("output path is empty".to_string()));
        }
        if self.sources.is_empty() {
            return Err(Error::Config("no sources configured".to_string()));
        }
        if let Some(source) = self.sources.iter().find(|s| s.url.trim().is_empty()) {
            return Err(Error::Config(format!("source {} has no url", source.name)));
        }
        Ok(())
    }
}
