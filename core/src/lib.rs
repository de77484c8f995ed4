//! Three ways to find dashboards by title, behind one contract, plus the
//! harness that times them against each other.

pub mod batch;
pub mod config;
pub mod corpus;
pub mod error;
pub mod fixture;
pub mod harness;
pub mod index;
pub mod regex_scan;
pub mod relational;
pub mod strategy;
pub mod title;
pub mod tokenizer;

pub use config::{HarnessConfig, IndexConfig};
pub use error::{Result, SearchError};
pub use harness::{run_scenario, Measure, Scenario, ScenarioReport};
pub use index::{BuildStats, InvertedIndex};
pub use regex_scan::RegexScan;
pub use relational::RelationalStore;
pub use strategy::{Match, SearchStrategy, StrategyKind};
