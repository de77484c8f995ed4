//! Directory walker yielding raw dashboard bytes.

use crate::error::{Result, SearchError};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One file as read from disk, before any parsing.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

impl RawDocument {
    /// The path as the string key used in match records.
    pub fn key(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

/// Lazily walk every non-directory entry under `root`.
///
/// Entries the walker cannot stat, and directories, are skipped. Anything
/// else is read, symlinks included; an entry that is listed but then fails
/// to read (a dangling link, say) is yielded as an error.
pub fn walk<P: AsRef<Path>>(root: P) -> impl Iterator<Item = Result<RawDocument>> {
    WalkDir::new(root.as_ref())
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(err) => {
                tracing::trace!(error = %err, "skipping unreadable entry");
                None
            }
        })
        .filter(|e| !e.file_type().is_dir())
        .map(|e| {
            let path = e.into_path();
            match fs::read(&path) {
                Ok(bytes) => Ok(RawDocument { path, bytes }),
                Err(source) => Err(SearchError::Io { path, source }),
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_nested_files_and_skips_dirs() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("top.json"), b"{}").unwrap();
        fs::write(dir.path().join("a/b/deep.json"), b"{\"title\":\"x\"}").unwrap();

        let mut names: Vec<String> = walk(dir.path())
            .map(|d| d.unwrap().path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["deep.json", "top.json"]);
    }

    #[test]
    fn missing_root_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("nope");
        assert_eq!(walk(&gone).count(), 0);
    }
}
