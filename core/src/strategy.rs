//! The common contract every search strategy answers to.

use crate::config::IndexConfig;
use crate::error::Result;
use crate::index::InvertedIndex;
use crate::regex_scan::RegexScan;
use crate::relational::RelationalStore;
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// One search hit.
///
/// `count` is the number of pattern occurrences in the raw file for
/// [`RegexScan`]; the index-backed strategies report presence only and
/// always set it to 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub path: String,
    pub count: usize,
}

impl Match {
    pub(crate) fn present(path: impl Into<String>) -> Self {
        Self { path: path.into(), count: 1 }
    }
}

pub trait SearchStrategy {
    fn kind(&self) -> StrategyKind;

    fn search(&self, term: &str) -> Result<Vec<Match>>;

    /// Release engine resources. Safe to call more than once.
    fn close(&mut self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    RegexScan,
    InvertedIndex,
    RelationalStore,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] =
        [StrategyKind::RegexScan, StrategyKind::InvertedIndex, StrategyKind::RelationalStore];

    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::RegexScan => "regex",
            StrategyKind::InvertedIndex => "index",
            StrategyKind::RelationalStore => "sql",
        }
    }

    pub fn has_build_phase(self) -> bool {
        !matches!(self, StrategyKind::RegexScan)
    }

    /// Make a strategy ready to query the corpus under `root`, running its
    /// build phase if it has one.
    pub fn open(self, root: &Path, config: &IndexConfig) -> Result<Box<dyn SearchStrategy>> {
        Ok(match self {
            StrategyKind::RegexScan => Box::new(RegexScan::new(root)),
            StrategyKind::InvertedIndex => Box::new(InvertedIndex::build(root, config)?),
            StrategyKind::RelationalStore => Box::new(RelationalStore::build(root)?),
        })
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        StrategyKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| format!("unknown strategy '{s}' (expected regex, index or sql)"))
    }
}
