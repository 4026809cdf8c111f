//! Fetch → parse → deduplicate → render pipeline.

use chrono::{Local, NaiveDateTime};
use std::path::{Path, PathBuf};

use crate::config::GeneratorConfig;
use crate::fetch::Fetcher;
use crate::render::{render_rule_file, write_rule_file};
use crate::source::Source;
use crate::{Result, RuleSet};

/// What one source contributed to a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOutcome {
    /// Fetched and parsed with at least one rule
    Loaded { rules: usize },
    /// Fetched and parsed, but yielded no rules
    Empty,
    /// Fetch or parse failed; contributed no rules
    Failed { error: String },
}

/// Per-source entry of a [`GenerationReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReport {
    pub name: String,
    pub outcome: SourceOutcome,
}

/// Rendered rule file plus the bookkeeping that produced it.
#[derive(Debug, Clone)]
pub struct RuleFileBuild {
    /// Full rule file text
    pub content: String,
    /// Surviving rules, sorted
    pub rules: Vec<String>,
    /// Size of the merged set before redundancy elimination
    pub merged: usize,
    /// Per-source outcomes in fetch order
    pub sources: Vec<SourceReport>,
}

/// Summary of a completed run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub sources: Vec<SourceReport>,
    pub merged: usize,
    pub total: usize,
    pub output: PathBuf,
    /// `false` when an existing file was kept because no rules survived
    pub written: bool,
}

impl GenerationReport {
    /// Number of sources that failed.
    pub fn failed_sources(&self) -> usize {
        self.sources
            .iter()
            .filter(|s| matches!(s.outcome, SourceOutcome::Failed { .. }))
            .count()
    }
}

/// Runs the rule generation pipeline against a [`Fetcher`].
pub struct Generator<F: Fetcher> {
    config: GeneratorConfig,
    fetcher: F,
}

impl<F: Fetcher> Generator<F> {
    /// Create a generator.
    pub fn new(config: GeneratorConfig, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    /// Get the configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Fetch and parse one source.
    fn load_source(&self, source: &Source) -> Result<RuleSet> {
        log::info!("Fetching {} ({}): {}", source.name, source.format, source.url);
        let body = self.fetcher.fetch(&source.url)?;
        source.format.parse(&body)
    }

    /// Fetch every source and merge their rules.
    ///
    /// A failing source is logged and recorded; it never aborts the others.
    pub fn collect(&self) -> (RuleSet, Vec<SourceReport>) {
        let mut all_rules = RuleSet::new();
        let mut reports = Vec::with_capacity(self.config.sources.len());

        for source in &self.config.sources {
            let outcome = match self.load_source(source) {
                Ok(rules) if rules.is_empty() => {
                    log::warn!("{}: no rules found", source.name);
                    SourceOutcome::Empty
                }
                Ok(rules) => {
                    log::info!("{}: {} rules", source.name, rules.len());
                    let count = rules.len();
                    all_rules.merge(rules);
                    SourceOutcome::Loaded { rules: count }
                }
                Err(e) => {
                    log::warn!("{}: skipped: {}", source.name, e);
                    SourceOutcome::Failed {
                        error: e.to_string(),
                    }
                }
            };
            reports.push(SourceReport {
                name: source.name.clone(),
                outcome,
            });
        }

        log_summary(&reports);
        (all_rules, reports)
    }

    /// Collect, deduplicate and render with the given timestamp.
    pub fn build_at(&self, updated: NaiveDateTime) -> RuleFileBuild {
        let (all_rules, sources) = self.collect();
        let rules = all_rules.remove_redundant();
        log::info!(
            "Merged {} unique rules, {} after removing covered subdomains",
            all_rules.len(),
            rules.len()
        );

        let content = render_rule_file(&rules, &self.config.meta, updated);
        RuleFileBuild {
            content,
            rules,
            merged: all_rules.len(),
            sources,
        }
    }

    /// Collect, deduplicate and render with the current local time.
    pub fn build(&self) -> RuleFileBuild {
        self.build_at(Local::now().naive_local())
    }

    /// Run the pipeline and write the output file, stamped with `updated`.
    pub fn run_at(&self, updated: NaiveDateTime) -> Result<GenerationReport> {
        let build = self.build_at(updated);
        let output = self.config.output.clone();

        let written = if should_keep_existing(&self.config, &build, &output) {
            log::warn!("No rules survived; keeping existing {:?}", output);
            false
        } else {
            write_rule_file(&output, &build.content)?;
            log::info!("Wrote {} rules to {:?}", build.rules.len(), output);
            true
        };

        Ok(GenerationReport {
            sources: build.sources,
            merged: build.merged,
            total: build.rules.len(),
            output,
            written,
        })
    }

    /// Run the pipeline and write the output file.
    pub fn run(&self) -> Result<GenerationReport> {
        self.run_at(Local::now().naive_local())
    }
}

fn should_keep_existing(config: &GeneratorConfig, build: &RuleFileBuild, output: &Path) -> bool {
    config.keep_existing_on_empty && build.rules.is_empty() && output.exists()
}

fn log_summary(reports: &[SourceReport]) {
    let total = reports.len();
    if total == 0 {
        log::warn!("No sources configured");
        return;
    }

    let failed = reports
        .iter()
        .filter(|r| matches!(r.outcome, SourceOutcome::Failed { .. }))
        .count();
    let empty = reports
        .iter()
        .filter(|r| r.outcome == SourceOutcome::Empty)
        .count();

    if failed == total {
        log::error!("All {} sources failed", total);
    } else if failed + empty == total {
        log::warn!(
            "No source returned rules ({} failed, {} empty of {})",
            failed,
            empty,
            total
        );
    } else if failed > 0 {
        log::warn!("{} of {} sources failed", failed, total);
    } else {
        log::info!("All {} sources fetched", total);
    }
}
