use serde::Deserialize;

/// Default number of pending inserts before the index builder commits.
pub const DEFAULT_MAX_BATCH_SIZE: usize = 500;
/// Default cap on hits returned by a full-text query.
pub const DEFAULT_TOP_N: usize = 100;
const DEFAULT_WRITER_MEMORY_BYTES: usize = 50_000_000;

/// Knobs for the index-backed strategies.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Pending inserts that trigger a commit. `0` disables the threshold so
    /// only the final flush commits.
    pub max_batch_size: usize,
    pub top_n: usize,
    /// Heap handed to the tantivy writer. Must stay above tantivy's
    /// per-thread minimum (15 MB).
    pub writer_memory_bytes: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
            top_n: DEFAULT_TOP_N,
            writer_memory_bytes: DEFAULT_WRITER_MEMORY_BYTES,
        }
    }
}

/// Inputs for a full harness run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    pub sizes: Vec<usize>,
    pub iterations: usize,
    pub term: String,
    pub index: IndexConfig,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            sizes: vec![100, 1_000, 10_000],
            iterations: 10,
            term: "99".to_string(),
            index: IndexConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let cfg: HarnessConfig = serde_json::from_str(r#"{"sizes":[10],"index":{"top_n":5}}"#).unwrap();
        assert_eq!(cfg.sizes, vec![10]);
        assert_eq!(cfg.term, "99");
        assert_eq!(cfg.index.top_n, 5);
        assert_eq!(cfg.index.max_batch_size, DEFAULT_MAX_BATCH_SIZE);
    }
}
