//! One-shot JSON export of people and meetings.
//!
//! There is no import path; the document is written to the configured export
//! directory as `perfect-context-data.json`.

use crate::store::{Meeting, Person, StoreState};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const EXPORT_VERSION: &str = "1.0";
pub const EXPORT_FILENAME: &str = "perfect-context-data.json";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize export: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write export to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument<'a> {
    pub people: &'a [Person],
    pub meetings: &'a [Meeting],
    pub export_date: String,
    pub version: &'static str,
}

impl<'a> ExportDocument<'a> {
    pub fn build(state: &'a StoreState, now: DateTime<Utc>) -> Self {
        Self {
            people: &state.people,
            meetings: &state.meetings,
            export_date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            version: EXPORT_VERSION,
        }
    }

    /// Pretty-printed with two-space indentation.
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Write the export for `state` into `dir`, creating it if needed.
pub fn write_to_dir(dir: &Path, state: &StoreState) -> Result<PathBuf, ExportError> {
    let json = ExportDocument::build(state, Utc::now()).to_json()?;
    std::fs::create_dir_all(dir).map_err(|source| ExportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(EXPORT_FILENAME);
    std::fs::write(&path, json).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;
    tracing::info!(path = %path.display(), "exported data");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn seed_export_shape() {
        let state = seed::initial_state();
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let json = ExportDocument::build(&state, now).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["people"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["meetings"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["version"], "1.0");
        assert_eq!(value["exportDate"], "2024-03-01T12:30:00.000Z");
        assert_eq!(value["meetings"][0]["actionItems"][0]["assignedTo"], "me");
    }

    #[test]
    fn export_leaves_out_ui_state() {
        let mut state = seed::initial_state();
        state.search_query = "secret".into();
        let json = ExportDocument::build(&state, Utc::now()).to_json().unwrap();
        assert!(!json.contains("secret"));
        assert!(!json.contains("consentSettings"));
    }

    #[test]
    fn writes_file_into_new_dir() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested");
        let path = write_to_dir(&target, &seed::initial_state()).unwrap();
        assert_eq!(path, target.join(EXPORT_FILENAME));
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("{\n  \"people\": ["));
    }
}
