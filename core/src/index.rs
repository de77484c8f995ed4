//! In-memory inverted index over dashboard titles, backed by tantivy.
//!
//! Build walks the corpus once and commits through a bounded [`Batch`]. Each
//! batched entry is applied as an upsert (delete by path, then add), so a
//! path is queryable exactly once however many times it is inserted. That
//! upsert inside the batch flush is the only commit path.

use crate::batch::{Batch, FlushTrigger};
use crate::config::IndexConfig;
use crate::corpus;
use crate::error::{Result, SearchError};
use crate::strategy::{Match, SearchStrategy, StrategyKind};
use crate::title::extract_title;
use crate::tokenizer::{contains_pattern, title_analyzer, wildcard_to_regex, TITLE_TOKENIZER};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;
use tantivy::collector::TopDocs;
use tantivy::query::RegexQuery;
use tantivy::schema::{Field, IndexRecordOption, Schema, TextFieldIndexing, TextOptions, Value, STORED, STRING};
use tantivy::{Index, IndexReader, IndexWriter, ReloadPolicy, TantivyDocument, Term};

/// Counters recorded while building, mostly for checking batch boundaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BuildStats {
    pub documents: usize,
    pub threshold_flushes: usize,
    pub final_flushes: usize,
}

#[derive(Debug, Clone, Copy)]
struct Fields {
    path: Field,
    title: Field,
}

fn title_schema() -> (Schema, Fields) {
    let mut builder = Schema::builder();
    let path = builder.add_text_field("path", STRING | STORED);
    let title_indexing = TextFieldIndexing::default()
        .set_tokenizer(TITLE_TOKENIZER)
        .set_index_option(IndexRecordOption::Basic);
    let title = builder.add_text_field(
        "title",
        TextOptions::default().set_indexing_options(title_indexing).set_stored(),
    );
    (builder.build(), Fields { path, title })
}

struct Entry {
    path: String,
    title: String,
}

struct BatchWriter {
    writer: IndexWriter,
    fields: Fields,
    batch: Batch<Entry>,
    stats: BuildStats,
}

impl BatchWriter {
    fn new(writer: IndexWriter, fields: Fields, max_batch_size: usize) -> Self {
        Self { writer, fields, batch: Batch::new(max_batch_size), stats: BuildStats::default() }
    }

    fn insert(&mut self, entry: Entry) -> Result<()> {
        self.stats.documents += 1;
        match self.batch.push(entry) {
            Some(trigger) => self.flush(trigger),
            None => Ok(()),
        }
    }

    fn flush(&mut self, trigger: FlushTrigger) -> Result<()> {
        let pending = self.batch.take();
        let n = pending.len();
        for entry in pending {
            self.writer.delete_term(Term::from_field_text(self.fields.path, &entry.path));
            let mut doc = TantivyDocument::default();
            doc.add_text(self.fields.path, &entry.path);
            doc.add_text(self.fields.title, &entry.title);
            self.writer.add_document(doc)?;
        }
        self.writer.commit()?;
        match trigger {
            FlushTrigger::Threshold => self.stats.threshold_flushes += 1,
            FlushTrigger::Final => self.stats.final_flushes += 1,
        }
        tracing::debug!(pending = n, ?trigger, "flushed batch");
        Ok(())
    }

    /// Forced final flush; runs even when nothing is pending.
    fn finish(mut self) -> Result<BuildStats> {
        self.flush(FlushTrigger::Final)?;
        Ok(self.stats)
    }
}

/// Read-only query handle over a committed title index.
pub struct InvertedIndex {
    reader: Option<IndexReader>,
    fields: Fields,
    top_n: usize,
    stats: BuildStats,
}

impl InvertedIndex {
    pub fn build<P: AsRef<Path>>(root: P, config: &IndexConfig) -> Result<Self> {
        let started = Instant::now();
        let (schema, fields) = title_schema();
        let index = Index::create_in_ram(schema);
        index.tokenizers().register(TITLE_TOKENIZER, title_analyzer());
        let writer: IndexWriter = index.writer_with_num_threads(1, config.writer_memory_bytes)?;

        let mut builder = BatchWriter::new(writer, fields, config.max_batch_size);
        for doc in corpus::walk(root) {
            let doc = doc?;
            let title = extract_title(&doc.path, &doc.bytes)?;
            builder.insert(Entry { path: doc.key(), title })?;
        }
        let stats = builder.finish()?;

        let reader: IndexReader = index.reader_builder().reload_policy(ReloadPolicy::Manual).try_into()?;
        tracing::info!(
            documents = stats.documents,
            threshold_flushes = stats.threshold_flushes,
            took_s = started.elapsed().as_secs_f64(),
            "title index built"
        );
        Ok(Self { reader: Some(reader), fields, top_n: config.top_n, stats })
    }

    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    /// Documents visible to queries.
    pub fn num_docs(&self) -> Result<u64> {
        let reader = self.reader.as_ref().ok_or(SearchError::Closed)?;
        Ok(reader.searcher().num_docs())
    }

    pub fn is_closed(&self) -> bool {
        self.reader.is_none()
    }
}

impl SearchStrategy for InvertedIndex {
    fn kind(&self) -> StrategyKind {
        StrategyKind::InvertedIndex
    }

    fn search(&self, term: &str) -> Result<Vec<Match>> {
        let reader = self.reader.as_ref().ok_or(SearchError::Closed)?;
        if self.top_n == 0 {
            return Ok(Vec::new());
        }
        let pattern = wildcard_to_regex(&contains_pattern(term));
        let query = RegexQuery::from_pattern(&pattern, self.fields.title)
            .map_err(|e| SearchError::Query(e.to_string()))?;

        let searcher = reader.searcher();
        let top_docs = searcher.search(&query, &TopDocs::with_limit(self.top_n))?;
        let mut matches = Vec::with_capacity(top_docs.len());
        for (_score, address) in top_docs {
            let doc: TantivyDocument = searcher.doc(address)?;
            if let Some(path) = doc.get_first(self.fields.path).and_then(|v| v.as_str()) {
                matches.push(Match::present(path));
            }
        }
        tracing::debug!(term, hits = matches.len(), "index search");
        Ok(matches)
    }

    fn close(&mut self) {
        self.reader.take();
    }
}
