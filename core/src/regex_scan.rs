//! Brute-force scan of raw file bytes. No build phase, no state between calls.

use crate::corpus;
use crate::error::Result;
use crate::strategy::{Match, SearchStrategy, StrategyKind};
use regex::bytes::{Regex, RegexBuilder};
use std::path::{Path, PathBuf};

pub struct RegexScan {
    root: PathBuf,
}

impl RegexScan {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }
}

/// The term is spliced into a capture group unescaped, so regex syntax in it
/// is live.
pub fn compile(term: &str) -> Result<Regex> {
    Ok(RegexBuilder::new(&format!("({term})")).case_insensitive(true).build()?)
}

impl SearchStrategy for RegexScan {
    fn kind(&self) -> StrategyKind {
        StrategyKind::RegexScan
    }

    fn search(&self, term: &str) -> Result<Vec<Match>> {
        let re = compile(term)?;
        let mut matches = Vec::new();
        for doc in corpus::walk(&self.root) {
            let doc = doc?;
            let count = re.find_iter(&doc.bytes).count();
            if count > 0 {
                matches.push(Match { path: doc.key(), count });
            }
        }
        tracing::debug!(term, hits = matches.len(), "regex scan");
        Ok(matches)
    }
}
