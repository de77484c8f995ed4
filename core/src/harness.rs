//! Benchmark driver. One-time setup (corpus generation, and the initial build
//! for query scenarios) is timed apart from the measured loop.

use crate::config::IndexConfig;
use crate::error::{Result, SearchError};
use crate::fixture;
use crate::strategy::{SearchStrategy, StrategyKind};
use serde::Serialize;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    Search,
    Build,
}

#[derive(Debug, Clone)]
pub struct Scenario {
    pub strategy: StrategyKind,
    pub measure: Measure,
    pub documents: usize,
    pub iterations: usize,
    pub term: String,
}

impl Scenario {
    pub fn search(strategy: StrategyKind, documents: usize, term: &str, iterations: usize) -> Self {
        Self { strategy, measure: Measure::Search, documents, iterations, term: term.to_string() }
    }

    pub fn build(strategy: StrategyKind, documents: usize, iterations: usize) -> Self {
        Self { strategy, measure: Measure::Build, documents, iterations, term: String::new() }
    }

    pub fn name(&self) -> String {
        let verb = match self.measure {
            Measure::Search => "search",
            Measure::Build => "build",
        };
        format!("{} {} {}", self.strategy, verb, self.documents)
    }

    /// Search every strategy at every size, then build every index-backed
    /// strategy at every size.
    pub fn suite(sizes: &[usize], term: &str, iterations: usize) -> Vec<Scenario> {
        let mut out = Vec::new();
        for kind in StrategyKind::ALL {
            for &n in sizes {
                out.push(Scenario::search(kind, n, term, iterations));
            }
        }
        for kind in StrategyKind::ALL.into_iter().filter(|k| k.has_build_phase()) {
            for &n in sizes {
                out.push(Scenario::build(kind, n, iterations));
            }
        }
        out
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub name: String,
    pub strategy: StrategyKind,
    pub measure: Measure,
    pub documents: usize,
    pub iterations: usize,
    pub setup_s: f64,
    pub total_s: f64,
    pub per_iter_s: f64,
    /// Hits from the last search; `None` for build scenarios.
    pub matches: Option<usize>,
}

pub fn run_scenario(scenario: &Scenario, config: &IndexConfig) -> Result<ScenarioReport> {
    if scenario.measure == Measure::Build && !scenario.strategy.has_build_phase() {
        return Err(SearchError::Unsupported(format!("{} has no build phase", scenario.strategy)));
    }

    let setup_started = Instant::now();
    let corpus = fixture::generate_corpus(scenario.documents)?;

    let (setup, total, matches) = match scenario.measure {
        Measure::Search => {
            let mut strategy = scenario.strategy.open(corpus.path(), config)?;
            let setup = setup_started.elapsed();
            let timed = time_searches(strategy.as_ref(), &scenario.term, scenario.iterations);
            strategy.close();
            let (total, hits) = timed?;
            (setup, total, Some(hits))
        }
        Measure::Build => {
            let setup = setup_started.elapsed();
            let started = Instant::now();
            for _ in 0..scenario.iterations {
                let mut built = scenario.strategy.open(corpus.path(), config)?;
                built.close();
            }
            (setup, started.elapsed(), None)
        }
    };

    let report = ScenarioReport {
        name: scenario.name(),
        strategy: scenario.strategy,
        measure: scenario.measure,
        documents: scenario.documents,
        iterations: scenario.iterations,
        setup_s: setup.as_secs_f64(),
        total_s: total.as_secs_f64(),
        per_iter_s: per_iteration(total, scenario.iterations),
        matches,
    };
    tracing::info!(
        scenario = %report.name,
        per_iter_s = report.per_iter_s,
        setup_s = report.setup_s,
        "scenario finished"
    );
    Ok(report)
}

fn time_searches(strategy: &dyn SearchStrategy, term: &str, iterations: usize) -> Result<(Duration, usize)> {
    let mut hits = 0;
    let started = Instant::now();
    for _ in 0..iterations {
        hits = strategy.search(term)?.len();
    }
    Ok((started.elapsed(), hits))
}

fn per_iteration(total: Duration, iterations: usize) -> f64 {
    if iterations == 0 {
        0.0
    } else {
        total.as_secs_f64() / iterations as f64
    }
}
