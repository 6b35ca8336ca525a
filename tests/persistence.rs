//! Snapshot persistence across a server restart.

use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::{json, Value};
use task_api::store::TaskStore;

mod common;

#[tokio::test]
async fn tasks_survive_a_restart() {
    let data_dir = tempfile::tempdir().unwrap();
    let client = reqwest::Client::new();

    // First process: create two tasks against a persistent store.
    let store = Arc::new(TaskStore::open(data_dir.path()).unwrap());
    let server = common::spawn_server(store).await;

    for (title, description) in [("Pack bags", "Two suitcases"), ("Book taxi", "For 6am")] {
        let res = client
            .post(server.url("/tasks"))
            .json(&json!({ "title": title, "description": description }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let res = client.get(server.url("/tasks")).send().await.unwrap();
    let before: Vec<Value> = res.json().await.unwrap();
    assert_eq!(before.len(), 2);
    server.stop();

    assert!(data_dir.path().join("tasks.json").exists());

    // Second process: the snapshot is loaded before serving begins.
    let store = Arc::new(TaskStore::open(data_dir.path()).unwrap());
    let server = common::spawn_server(store).await;

    let res = client.get(server.url("/tasks")).send().await.unwrap();
    let after: Vec<Value> = res.json().await.unwrap();
    assert_eq!(after, before, "records, ids, and timestamps are identical");

    server.stop();
}

#[tokio::test]
async fn deletes_are_persisted() {
    let data_dir = tempfile::tempdir().unwrap();
    let client = reqwest::Client::new();

    let store = Arc::new(TaskStore::open(data_dir.path()).unwrap());
    let server = common::spawn_server(store).await;

    let res = client
        .post(server.url("/tasks"))
        .json(&json!({ "title": "Transient", "description": "Deleted before restart" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client.get(server.url("/tasks")).send().await.unwrap();
    let tasks: Vec<Value> = res.json().await.unwrap();
    let id = tasks[0]["id"].as_str().unwrap().to_string();

    let res = client
        .delete(server.url(&format!("/tasks/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    server.stop();

    let reopened = TaskStore::open(data_dir.path()).unwrap();
    assert!(reopened.is_empty());
}
