//! Task record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single task record.
///
/// Timestamps serialize as RFC 3339 strings; `completed_at` stays null
/// until the task is completed and never reverts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a new record with a generated id and identical
    /// `created_at`/`updated_at`.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            completed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge field-level changes into this record and refresh `updated_at`.
    /// `None` fields are left unchanged; `id` and `created_at` are immutable.
    pub fn apply(&mut self, changes: TaskChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(completed_at) = changes.completed_at {
            self.completed_at = Some(completed_at);
        }
        self.updated_at = Utc::now();
    }
}

/// Field-level changes for [`Task::apply`].
#[derive(Debug, Clone, Default)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Substring filter for `select`.
///
/// A record matches when its title or description contains the search
/// term as a case-sensitive substring.
#[derive(Debug, Clone)]
pub struct TaskFilter {
    pub search: String,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        task.title.contains(&self.search) || task.description.contains(&self.search)
    }
}
