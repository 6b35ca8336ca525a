//! In-memory task table with optional snapshot persistence.
//!
//! # Responsibilities
//! - Hold the task collection in insertion order
//! - Serialize all access behind one mutex
//! - Apply the merge semantics of partial updates
//! - Rewrite the snapshot on every mutation (when persistence is on)
//!
//! # Design Decisions
//! - Unknown ids make `update`/`delete` silent no-ops; callers that need
//!   an existence check do it with `get` first
//! - The store never checks id uniqueness; ids are generated UUIDs
//! - Snapshot writes happen under the lock so no torn state is observable

use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use uuid::Uuid;

use crate::store::record::{Task, TaskChanges, TaskFilter};
use crate::store::snapshot::{Snapshot, StoreError};

const TABLE_NAME: &str = "tasks";

/// The task record store.
pub struct TaskStore {
    records: Mutex<Vec<Task>>,
    snapshot: Option<Snapshot>,
}

impl TaskStore {
    /// Open a persistent store rooted at `data_dir`, loading an existing
    /// snapshot before serving begins.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let snapshot = Snapshot::for_table(data_dir.as_ref(), TABLE_NAME);
        let records = snapshot.load()?.unwrap_or_default();
        Ok(Self {
            records: Mutex::new(records),
            snapshot: Some(snapshot),
        })
    }

    /// Open a store that keeps records for the process lifetime only.
    pub fn in_memory() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            snapshot: None,
        }
    }

    /// Append a record to the collection.
    pub fn insert(&self, task: Task) -> Result<(), StoreError> {
        let mut records = self.lock();
        records.push(task);
        self.persist(&records)
    }

    /// All records in insertion order, or the matching subset when a
    /// filter is given. An empty result is a valid outcome.
    pub fn select(&self, filter: Option<&TaskFilter>) -> Vec<Task> {
        let records = self.lock();
        match filter {
            None => records.clone(),
            Some(filter) => records.iter().filter(|t| filter.matches(t)).cloned().collect(),
        }
    }

    /// The record with the given id, if any.
    pub fn get(&self, id: &Uuid) -> Option<Task> {
        self.lock().iter().find(|t| t.id == *id).cloned()
    }

    /// Merge `changes` into the record with the given id and refresh its
    /// `updated_at`. No-op if the id is unknown.
    pub fn update(&self, id: &Uuid, changes: TaskChanges) -> Result<(), StoreError> {
        let mut records = self.lock();
        let Some(task) = records.iter_mut().find(|t| t.id == *id) else {
            return Ok(());
        };
        task.apply(changes);
        self.persist(&records)
    }

    /// Remove the record with the given id. No-op if the id is unknown.
    pub fn delete(&self, id: &Uuid) -> Result<(), StoreError> {
        let mut records = self.lock();
        let before = records.len();
        records.retain(|t| t.id != *id);
        if records.len() == before {
            return Ok(());
        }
        self.persist(&records)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn persist(&self, records: &[Task]) -> Result<(), StoreError> {
        match &self.snapshot {
            Some(snapshot) => snapshot.write(records),
            None => Ok(()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Task>> {
        // A panicked request cannot leave the collection half-mutated,
        // so a poisoned lock is still safe to reuse.
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
