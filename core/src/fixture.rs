//! Synthetic dashboard corpora for tests and benchmarks.

use crate::error::{Result, SearchError};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A Grafana-style dashboard document. Apart from `title`, the body has no
/// digit run that a numeric title search (`"99"`, `"100"`) would hit.
pub fn dashboard(title: &str) -> Value {
    json!({
        "annotations": {"list": [{
            "builtIn": 1,
            "datasource": {"type": "datasource", "uid": "grafana"},
            "enable": true,
            "hide": true,
            "iconColor": "rgba(0, 211, 255, 1)",
            "name": "Annotations & Alerts",
            "type": "dashboard"
        }]},
        "editable": true,
        "fiscalYearStartMonth": 0,
        "graphTooltip": 0,
        "id": 25,
        "links": [],
        "liveNow": false,
        "panels": [
            {
                "datasource": {"type": "grafana-iot-twinmaker-datasource", "uid": "ecqJU43nk"},
                "gridPos": {"h": 7, "w": 11, "x": 0, "y": 0},
                "id": 2,
                "options": {"showHeader": true},
                "pluginVersion": "9.1.0-pre",
                "targets": [{"queryType": "GetAlarms", "refId": "A"}],
                "title": "Alarm List",
                "type": "table"
            },
            {
                "datasource": {"type": "grafana-iot-twinmaker-datasource", "uid": "ecqJU43nk"},
                "gridPos": {"h": 7, "w": 13, "x": 11, "y": 0},
                "id": 4,
                "options": {"mergeValues": true, "rowHeight": 0.8},
                "targets": [{"queryType": "EntityHistory", "refId": "A"}],
                "title": "Selected Alarm History",
                "type": "state-timeline"
            }
        ],
        "schemaVersion": 37,
        "style": "dark",
        "tags": [],
        "time": {"from": "now-6h", "to": "now"},
        "timezone": "",
        "title": title,
        "uid": "alarm",
        "version": 3,
        "weekStart": ""
    })
}

/// Write one dashboard file named `file_name` under `dir`.
pub fn write_dashboard(dir: &Path, file_name: &str, title: &str) -> Result<PathBuf> {
    write_json(dir, file_name, &dashboard(title))
}

pub fn write_json(dir: &Path, file_name: &str, value: &Value) -> Result<PathBuf> {
    let path = dir.join(file_name);
    let bytes = serde_json::to_vec(value)
        .map_err(|source| SearchError::Parse { path: path.clone(), source })?;
    fs::write(&path, bytes).map_err(|source| SearchError::Io { path: path.clone(), source })?;
    Ok(path)
}

/// `count` dashboards `0.json`..`{count-1}.json`, titled by their index, in a
/// fresh temp directory that is removed when the handle drops.
pub fn generate_corpus(count: usize) -> Result<TempDir> {
    let dir = tempfile::Builder::new()
        .prefix("search-test-")
        .tempdir()
        .map_err(|source| SearchError::Io { path: std::env::temp_dir(), source })?;
    for i in 0..count {
        write_dashboard(dir.path(), &format!("{i}.json"), &i.to_string())?;
    }
    tracing::debug!(count, dir = %dir.path().display(), "generated corpus");
    Ok(dir)
}
