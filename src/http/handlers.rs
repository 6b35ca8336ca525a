//! Endpoint handlers for the task API.
//!
//! # Responsibilities
//! - Validate request input (presence checks only)
//! - Query and mutate the record store through [`AppState`]
//! - Translate empty lookups into 404 responses
//!
//! # Design Decisions
//! - Existence checks precede body validation: PUT with an unknown id
//!   and a missing title answers 404, not 422
//! - Path ids are opaque strings; one that does not parse as a UUID can
//!   never name a stored record and takes the 404 path
//! - Completion transitions `completed_at` from null exactly once; a
//!   repeat request succeeds without touching the record

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::store::{Task, TaskChanges, TaskFilter};

/// Request body for POST and PUT.
///
/// Fields are optional so an absent field reaches the presence check
/// here instead of failing in the JSON extractor.
#[derive(Debug, Deserialize)]
pub struct TaskBody {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl TaskBody {
    fn require_fields(self) -> Result<(String, String), ApiError> {
        match (self.title, self.description) {
            (Some(title), Some(description)) if !title.is_empty() && !description.is_empty() => {
                Ok((title, description))
            }
            _ => Err(ApiError::MissingFields),
        }
    }
}

/// Query parameters for GET /tasks.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
}

/// POST /tasks
pub async fn create_task(
    State(state): State<AppState>,
    Json(body): Json<TaskBody>,
) -> Result<StatusCode, ApiError> {
    let (title, description) = body.require_fields()?;
    let task = Task::new(title, description);
    tracing::debug!(task_id = %task.id, "Creating task");
    state.store.insert(task)?;
    Ok(StatusCode::CREATED)
}

/// GET /tasks?search=<term>
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<Vec<Task>> {
    let filter = params.search.map(|search| TaskFilter { search });
    Json(state.store.select(filter.as_ref()))
}

/// PUT /tasks/{id}
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<TaskBody>,
) -> Result<StatusCode, ApiError> {
    let task = find_task(&state, &id)?;
    let (title, description) = body.require_fields()?;

    state.store.update(
        &task.id,
        TaskChanges {
            title: Some(title),
            description: Some(description),
            ..TaskChanges::default()
        },
    )?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /tasks/{id}
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let task = find_task(&state, &id)?;
    state.store.delete(&task.id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /tasks/{id}/complete
pub async fn complete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let task = find_task(&state, &id)?;

    if task.completed_at.is_none() {
        state.store.update(
            &task.id,
            TaskChanges {
                completed_at: Some(Utc::now()),
                ..TaskChanges::default()
            },
        )?;
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Resolve a path id to a stored task, or 404.
fn find_task(state: &AppState, raw_id: &str) -> Result<Task, ApiError> {
    let id = Uuid::parse_str(raw_id).map_err(|_| ApiError::TaskNotFound)?;
    state.store.get(&id).ok_or(ApiError::TaskNotFound)
}
