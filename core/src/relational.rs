//! Naive relational baseline: one in-memory SQLite table, one insert per row.

use crate::corpus;
use crate::error::{Result, SearchError};
use crate::strategy::{Match, SearchStrategy, StrategyKind};
use crate::title::extract_title;
use rusqlite::{params, Connection};
use std::path::Path;
use std::time::Instant;

const CREATE_TABLE: &str = "CREATE TABLE dashboards (name TEXT NOT NULL, path TEXT NOT NULL)";
const INSERT_ROW: &str = "INSERT INTO dashboards (name, path) VALUES (?1, ?2)";
const SELECT_LIKE: &str = "SELECT name, path FROM dashboards WHERE name LIKE ?1";

/// Owns a private in-memory database; nothing is shared between stores.
pub struct RelationalStore {
    conn: Option<Connection>,
}

impl RelationalStore {
    pub fn build<P: AsRef<Path>>(root: P) -> Result<Self> {
        let started = Instant::now();
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(CREATE_TABLE)?;

        let mut rows = 0usize;
        for doc in corpus::walk(root) {
            let doc = doc?;
            let title = extract_title(&doc.path, &doc.bytes)?;
            conn.execute(INSERT_ROW, params![title, doc.key()])?;
            rows += 1;
        }
        tracing::info!(rows, took_s = started.elapsed().as_secs_f64(), "dashboards table built");
        Ok(Self { conn: Some(conn) })
    }

    pub fn row_count(&self) -> Result<usize> {
        let conn = self.conn.as_ref().ok_or(SearchError::Closed)?;
        let n: i64 = conn.query_row("SELECT COUNT(*) FROM dashboards", [], |row| row.get(0))?;
        Ok(n as usize)
    }

    pub fn is_closed(&self) -> bool {
        self.conn.is_none()
    }
}

impl SearchStrategy for RelationalStore {
    fn kind(&self) -> StrategyKind {
        StrategyKind::RelationalStore
    }

    /// LIKE narrows the rows; each survivor is re-checked with a plain
    /// case-sensitive substring test, since LIKE folds ASCII case and treats
    /// `%` and `_` in the term as wildcards.
    fn search(&self, term: &str) -> Result<Vec<Match>> {
        let conn = self.conn.as_ref().ok_or(SearchError::Closed)?;
        let mut stmt = conn.prepare(SELECT_LIKE)?;
        let rows = stmt.query_map(params![format!("%{term}%")], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut matches = Vec::new();
        for row in rows {
            let (name, path) = row?;
            if name.contains(term) {
                matches.push(Match::present(path));
            }
        }
        tracing::debug!(term, hits = matches.len(), "sql search");
        Ok(matches)
    }

    fn close(&mut self) {
        if let Some(conn) = self.conn.take() {
            if let Err((_, e)) = conn.close() {
                tracing::warn!(error = %e, "closing dashboards database");
            }
        }
    }
}
