//! pinche-rules-gen: build the merged Binance Surge rule list.

use clap::Parser;
use pinche_rules::{Generator, GeneratorConfig, HttpFetcher};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "pinche-rules-gen")]
#[command(author = "pinche-team")]
#[command(version)]
#[command(about = "Merge upstream Binance rule lists into a Surge rule file", long_about = None)]
struct Cli {
    /// YAML config file overriding the built-in sources and header
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output rule file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the rendered file instead of writing it
    #[arg(long)]
    dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run(cli) {
        log::error!("Error generating rules: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => {
            log::debug!("Loading config: {:?}", path);
            GeneratorConfig::load(path)?
        }
        None => GeneratorConfig::default(),
    };
    if let Some(output) = cli.output {
        config.output = output;
    }
    config.validate()?;

    let fetcher = HttpFetcher::with_timeout(Duration::from_secs(config.timeout_secs))?;
    let generator = Generator::new(config, fetcher);

    if cli.dry_run {
        let build = generator.build();
        print!("{}", build.content);
        return Ok(());
    }

    let report = generator.run()?;
    if report.written {
        println!(
            "Successfully generated {:?} ({} rules, {} of {} sources failed)",
            report.output,
            report.total,
            report.failed_sources(),
            report.sources.len()
        );
    } else {
        println!("No rules generated; kept existing {:?}", report.output);
    }
    Ok(())
}
