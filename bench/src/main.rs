use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dashsearch_core::harness::{run_scenario, Scenario, ScenarioReport};
use dashsearch_core::{HarnessConfig, Match, StrategyKind};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "dashbench")]
#[command(about = "Compare regex, full-text index and SQL title search over dashboard JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the benchmark suite over synthetic corpora
    Run {
        /// JSON file with harness settings; flags below override it
        #[arg(long)]
        config: Option<PathBuf>,
        /// Corpus sizes, comma separated
        #[arg(long, value_delimiter = ',')]
        sizes: Option<Vec<usize>>,
        /// Measured iterations per scenario
        #[arg(long)]
        iterations: Option<usize>,
        /// Search term
        #[arg(long)]
        term: Option<String>,
        /// Pending inserts before the index builder commits (0 = only at the end)
        #[arg(long)]
        batch_size: Option<usize>,
        /// Cap on full-text hits
        #[arg(long)]
        top_n: Option<usize>,
        /// Restrict to one strategy: regex, index or sql
        #[arg(long)]
        only: Option<StrategyKind>,
        /// Print the report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Search an existing directory of dashboards once
    Search {
        /// Root directory of dashboard JSON files
        #[arg(long)]
        dir: PathBuf,
        /// Search term
        #[arg(long)]
        term: String,
        /// regex, index or sql
        #[arg(long, default_value = "index")]
        strategy: StrategyKind,
    },
}

#[derive(Serialize)]
struct Report<'a> {
    generated_at: String,
    term: &'a str,
    scenarios: Vec<ScenarioReport>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, sizes, iterations, term, batch_size, top_n, only, json } => {
            let mut cfg = match config {
                Some(path) => load_config(&path)?,
                None => HarnessConfig::default(),
            };
            if let Some(v) = sizes {
                cfg.sizes = v;
            }
            if let Some(v) = iterations {
                cfg.iterations = v;
            }
            if let Some(v) = term {
                cfg.term = v;
            }
            if let Some(v) = batch_size {
                cfg.index.max_batch_size = v;
            }
            if let Some(v) = top_n {
                cfg.index.top_n = v;
            }
            run_suite(&cfg, only, json)
        }
        Commands::Search { dir, term, strategy } => search_once(&dir, &term, strategy),
    }
}

fn load_config(path: &Path) -> Result<HarnessConfig> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let cfg = serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    Ok(cfg)
}

fn run_suite(cfg: &HarnessConfig, only: Option<StrategyKind>, json: bool) -> Result<()> {
    let scenarios: Vec<Scenario> = Scenario::suite(&cfg.sizes, &cfg.term, cfg.iterations)
        .into_iter()
        .filter(|s| only.map_or(true, |k| s.strategy == k))
        .collect();
    tracing::info!(scenarios = scenarios.len(), term = %cfg.term, "starting suite");

    let mut reports = Vec::with_capacity(scenarios.len());
    for scenario in &scenarios {
        let report = run_scenario(scenario, &cfg.index)
            .with_context(|| format!("scenario '{}'", scenario.name()))?;
        if !json {
            print_row(&report);
        }
        reports.push(report);
    }

    if json {
        let report = Report {
            generated_at: time::OffsetDateTime::now_utc()
                .format(&time::format_description::well_known::Rfc3339)
                .context("formatting report timestamp")?,
            term: &cfg.term,
            scenarios: reports,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}

fn print_row(r: &ScenarioReport) {
    let hits = r.matches.map(|m| m.to_string()).unwrap_or_else(|| "-".into());
    println!(
        "{:<20} {:>6} iters {:>12.6}s/iter  setup {:>9.3}s  hits {}",
        r.name, r.iterations, r.per_iter_s, r.setup_s, hits
    );
}

fn search_once(dir: &Path, term: &str, kind: StrategyKind) -> Result<()> {
    let cfg = HarnessConfig::default();
    let mut strategy = kind
        .open(dir, &cfg.index)
        .with_context(|| format!("preparing {kind} over {}", dir.display()))?;
    let result = strategy.search(term);
    strategy.close();
    let matches: Vec<Match> = result?;
    for m in &matches {
        println!("{}\t{}", m.count, m.path);
    }
    tracing::info!(hits = matches.len(), strategy = %kind, "search complete");
    Ok(())
}
