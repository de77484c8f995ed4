//! Error taxonomy shared by every strategy.
//!
//! I/O errors during traversal are skipped by the corpus walker and never
//! reach this type; everything that does reach it is fatal to the call.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dashboard {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid search pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("index error: {0}")]
    Index(#[from] tantivy::TantivyError),

    #[error("query error: {0}")]
    Query(String),

    #[error("sql error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("search handle already closed")]
    Closed,

    #[error("unsupported: {0}")]
    Unsupported(String),
}

impl SearchError {
    /// True for failures raised by one of the search engines rather than by
    /// reading or parsing the corpus.
    pub fn is_engine(&self) -> bool {
        matches!(
            self,
            SearchError::Regex(_) | SearchError::Index(_) | SearchError::Query(_) | SearchError::Sql(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
