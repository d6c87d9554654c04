//! Append-only JSON Lines store. One [`IdeaRecord`] per line.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use ideascore_core::{IdeaRecord, NewIdea};
use tracing::{debug, info};
use uuid::Uuid;

use crate::StoreError;

/// File-backed idea store.
///
/// The file is created on first insert; a missing file reads as empty.
/// Blank lines are skipped, a malformed line is an error naming its line
/// number.
pub struct IdeaStore {
    path: PathBuf,
}

impl IdeaStore {
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist a new idea, assigning its id and timestamps.
    pub fn insert(&self, idea: NewIdea) -> Result<IdeaRecord, StoreError> {
        let record = IdeaRecord::new(idea, Utc::now());
        let mut line = serde_json::to_string(&record)?;
        line.push('\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        file.flush()?;

        info!(
            id = %record.id,
            source = %record.idea.analysis_source,
            path = %self.path.display(),
            "saved idea"
        );
        Ok(record)
    }

    /// All stored ideas, oldest first.
    pub fn list(&self) -> Result<Vec<IdeaRecord>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record: IdeaRecord = serde_json::from_str(&line).map_err(|source| {
                StoreError::Json {
                    line: idx + 1,
                    source,
                }
            })?;
            records.push(record);
        }
        records.sort_by_key(|r| r.created_at);
        debug!(count = records.len(), "loaded ideas");
        Ok(records)
    }

    pub fn get(&self, id: Uuid) -> Result<IdeaRecord, StoreError> {
        self.list()?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ideascore_core::{AnalysisResult, Answers, LeanCanvas, ScoreVector, Source};

    fn idea(title: &str, score: f64) -> NewIdea {
        let analysis = AnalysisResult {
            scores: ScoreVector::from_fn(|_| score),
            lean_canvas: LeanCanvas {
                problem: format!("{title} problem"),
                ..Default::default()
            },
            source: Source::Heuristic,
        };
        NewIdea::from_analysis(
            Some("Ada".to_string()),
            Some(title.to_string()),
            Answers::default(),
            analysis,
        )
    }

    #[test]
    fn missing_file_lists_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = IdeaStore::open(dir.path().join("ideas.jsonl"));
        assert!(store.list().unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn insert_assigns_id_and_timestamps() {
        let dir = tempfile::tempdir().unwrap();
        let store = IdeaStore::open(dir.path().join("ideas.jsonl"));

        let record = store.insert(idea("Invoicer", 55.0)).unwrap();
        assert_eq!(record.created_at, record.updated_at);
        assert_eq!(record.idea.idea_title.as_deref(), Some("Invoicer"));
        assert_eq!(record.idea.analysis_source, Source::Heuristic);

        let listed = store.list().unwrap();
        assert_eq!(listed, vec![record]);
    }

    #[test]
    fn list_is_oldest_first() {
        let dir = tempfile::tempdir().unwrap();
        let store = IdeaStore::open(dir.path().join("nested").join("ideas.jsonl"));

        let first = store.insert(idea("First", 30.0)).unwrap();
        let second = store.insert(idea("Second", 60.0)).unwrap();

        let ids: Vec<_> = store.list().unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[test]
    fn get_finds_by_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = IdeaStore::open(dir.path().join("ideas.jsonl"));
        store.insert(idea("One", 10.0)).unwrap();
        let two = store.insert(idea("Two", 20.0)).unwrap();

        let found = store.get(two.id).unwrap();
        assert_eq!(found.title(), "Two");
        assert_eq!(found.idea.lean_canvas.problem, "Two problem");
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = IdeaStore::open(dir.path().join("ideas.jsonl"));
        store.insert(idea("One", 10.0)).unwrap();

        let missing = Uuid::new_v4();
        match store.get(missing) {
            Err(StoreError::NotFound(id)) => assert_eq!(id, missing),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn malformed_line_reports_line_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ideas.jsonl");
        let store = IdeaStore::open(&path);
        store.insert(idea("One", 10.0)).unwrap();

        let mut file = OpenOptions::new().append(true).open(&path).unwrap();
        writeln!(file).unwrap();
        writeln!(file, "{{not json").unwrap();

        match store.list() {
            Err(StoreError::Json { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected Json error, got {other:?}"),
        }
    }

    #[test]
    fn records_are_camel_case_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ideas.jsonl");
        let store = IdeaStore::open(&path);
        store.insert(idea("One", 10.0)).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
        for key in ["id", "founderName", "ideaTitle", "answers", "scores", "leanCanvas", "analysisSource", "createdAt", "updatedAt"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert_eq!(value["analysisSource"], "heuristic");
    }
}
