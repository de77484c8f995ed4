use crate::error::{Result, SearchError};
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
struct Dashboard {
    #[serde(default)]
    title: String,
}

/// Pull the `title` field out of a dashboard document.
///
/// A missing title reads as empty. Anything that is not a JSON object, or a
/// title that is not a string, is a parse error.
pub fn extract_title(path: &Path, bytes: &[u8]) -> Result<String> {
    serde_json::from_slice::<Dashboard>(bytes)
        .map(|d| d.title)
        .map_err(|source| SearchError::Parse { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title(bytes: &[u8]) -> Result<String> {
        extract_title(Path::new("d.json"), bytes)
    }

    #[test]
    fn reads_title_and_ignores_other_fields() {
        let t = title(br#"{"panels":[{"title":"inner"}],"title":"CPU \"hot\""}"#).unwrap();
        assert_eq!(t, "CPU \"hot\"");
    }

    #[test]
    fn missing_title_is_empty() {
        assert_eq!(title(br#"{"uid":"abc"}"#).unwrap(), "");
    }

    #[test]
    fn rejects_non_objects_and_bad_types() {
        assert!(matches!(title(b"[1,2]"), Err(SearchError::Parse { .. })));
        assert!(matches!(title(br#"{"title":7}"#), Err(SearchError::Parse { .. })));
        assert!(matches!(title(b"{not json"), Err(SearchError::Parse { .. })));
    }
}
