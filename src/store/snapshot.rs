//! JSON snapshot persistence.
//!
//! One file per logical table, holding the entire serialized collection.
//! Every mutating store operation rewrites the file wholesale; startup
//! reads it wholesale. Writes go through a temp file and a rename so a
//! crash mid-write leaves the previous snapshot intact.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::store::record::Task;

/// Error type for store operations. Lookups that find nothing are not
/// errors; only snapshot I/O and (de)serialization can fail.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("snapshot io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Handle to one table's snapshot file.
#[derive(Debug, Clone)]
pub struct Snapshot {
    path: PathBuf,
}

impl Snapshot {
    /// Snapshot file for `table` under `data_dir` (`<data_dir>/<table>.json`).
    pub fn for_table(data_dir: &Path, table: &str) -> Self {
        Self {
            path: data_dir.join(format!("{table}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot. `Ok(None)` when no snapshot exists yet.
    pub fn load(&self) -> Result<Option<Vec<Task>>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&self.path)?;
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    /// Overwrite the snapshot with the full collection.
    pub fn write(&self, records: &[Task]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_vec_pretty(records)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, payload)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_returns_none_without_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = Snapshot::for_table(dir.path(), "tasks");
        assert!(snapshot.load().unwrap().is_none());
    }

    #[test]
    fn write_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = Snapshot::for_table(dir.path(), "tasks");

        let records = vec![
            Task::new("Groceries", "Milk and eggs"),
            Task::new("Laundry", "Whites only"),
        ];
        snapshot.write(&records).unwrap();

        let loaded = snapshot.load().unwrap().unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn write_overwrites_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = Snapshot::for_table(dir.path(), "tasks");

        snapshot.write(&[Task::new("First", "Version one")]).unwrap();
        let replacement = vec![Task::new("Second", "Version two")];
        snapshot.write(&replacement).unwrap();

        let loaded = snapshot.load().unwrap().unwrap();
        assert_eq!(loaded, replacement);
        assert!(!snapshot.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn write_creates_missing_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("state");
        let snapshot = Snapshot::for_table(&nested, "tasks");

        snapshot.write(&[Task::new("A", "B")]).unwrap();
        assert!(nested.join("tasks.json").exists());
    }
}
