//! Tests for the persisted record format and its migration rules.

use super::support::{base_time, task_with};
use crate::task::{
    adapters::{
        memory::InMemoryTaskStore,
        record::{TaskRecord, decode_tasks, encode_tasks},
    },
    domain::{Priority, ProjectId, ReminderId},
    ports::{TaskStore, TaskStoreError},
};
use chrono::Duration;
use rstest::rstest;
use serde_json::{Value, json};

const LEGACY_ID: &str = "6f1b3c2e-8a4d-4e5f-9a7b-1c2d3e4f5a6b";

fn legacy_record(extra: &Value) -> String {
    let mut record = json!({
        "id": LEGACY_ID,
        "title": "Legacy task",
        "completed": false,
        "createdAt": "2026-03-01T08:00:00Z",
    });
    if let (Some(target), Some(fields)) = (record.as_object_mut(), extra.as_object()) {
        target.extend(fields.clone());
    }
    Value::Array(vec![record]).to_string()
}

#[rstest]
fn legacy_record_without_priority_or_project_gets_defaults() {
    let tasks = decode_tasks(&legacy_record(&json!({}))).expect("decodes");

    let task = tasks.first().expect("one task");
    assert_eq!(task.id().to_string(), LEGACY_ID);
    assert_eq!(task.priority(), Priority::Low);
    assert_eq!(task.project(), ProjectId::Inbox);
    assert!(task.due_at().is_none());
    assert!(task.reminder_id().is_none());
}

#[rstest]
#[case(json!({ "priority": 9 }), Priority::Low, ProjectId::Inbox)]
#[case(json!({ "projectId": "garden" }), Priority::Low, ProjectId::Inbox)]
#[case(json!({ "priority": 2, "projectId": "work" }), Priority::High, ProjectId::Work)]
#[case(json!({ "priority": null, "projectId": null }), Priority::Low, ProjectId::Inbox)]
#[case(json!({ "priority": -1 }), Priority::Low, ProjectId::Inbox)]
#[case(json!({ "priority": "urgent" }), Priority::Low, ProjectId::Inbox)]
fn stored_priority_and_project_are_resolved(
    #[case] extra: Value,
    #[case] priority: Priority,
    #[case] project: ProjectId,
) {
    let tasks = decode_tasks(&legacy_record(&extra)).expect("decodes");

    let task = tasks.first().expect("one task");
    assert_eq!(task.priority(), priority);
    assert_eq!(task.project(), project);
}

#[rstest]
fn records_with_blank_titles_are_dropped() {
    let raw = json!([
        {
            "id": LEGACY_ID,
            "title": "   ",
            "completed": false,
            "createdAt": "2026-03-01T08:00:00Z",
        },
        {
            "id": "0b9e8d7c-6a5b-4c3d-8e2f-1a0b9c8d7e6f",
            "title": "Kept",
            "completed": true,
            "createdAt": "2026-03-02T08:00:00Z",
            "dueDate": "2026-03-03T08:00:00Z",
            "notificationId": "n-42",
        },
    ])
    .to_string();

    let tasks = decode_tasks(&raw).expect("decodes");

    assert_eq!(tasks.len(), 1);
    let kept = tasks.first().expect("one task");
    assert_eq!(kept.title().as_str(), "Kept");
    assert!(kept.is_completed());
    assert_eq!(kept.reminder_id(), Some(&ReminderId::new("n-42")));
}

#[rstest]
fn unreadable_entries_are_dropped_and_lenient_priorities_migrate() {
    let raw = json!([
        {
            "id": LEGACY_ID,
            "title": "Good",
            "completed": false,
            "createdAt": "2026-03-01T08:00:00Z",
            "priority": 1,
        },
        {
            "id": "1700000000000",
            "title": "Millisecond id",
            "createdAt": "2026-03-01T08:00:00Z",
        },
        {
            "id": "0b9e8d7c-6a5b-4c3d-8e2f-1a0b9c8d7e6f",
            "title": "Huge priority",
            "createdAt": "2026-03-01T08:00:00Z",
            "priority": 300,
        },
        {
            "id": "2c3d4e5f-6a7b-4c8d-9e0f-1a2b3c4d5e6f",
            "title": "Textual priority",
            "createdAt": "2026-03-01T08:00:00Z",
            "priority": " 2 ",
        },
        "not a record",
    ])
    .to_string();

    let tasks = decode_tasks(&raw).expect("array decodes");

    let resolved: Vec<(&str, Priority)> = tasks
        .iter()
        .map(|task| (task.title().as_str(), task.priority()))
        .collect();
    assert_eq!(
        resolved,
        vec![
            ("Good", Priority::Urgent),
            ("Huge priority", Priority::Low),
            ("Textual priority", Priority::High),
        ]
    );
}

#[rstest]
fn malformed_text_is_an_encoding_error() {
    let result = decode_tasks("{not json");
    assert!(matches!(result, Err(TaskStoreError::Encoding(_))));
}

#[rstest]
fn encoded_records_use_camel_case_fields() {
    let task = task_with("Encode me", |data| {
        data.due_at = Some(base_time() + Duration::hours(2));
        data.priority = Priority::Medium;
        data.project = ProjectId::Shopping;
        data.reminder_id = Some(ReminderId::new("n-7"));
    });

    let raw = encode_tasks(std::slice::from_ref(&task)).expect("encodes");
    let value: Value = serde_json::from_str(&raw).expect("valid json");
    let record = value
        .as_array()
        .and_then(|records| records.first())
        .expect("one record");

    assert_eq!(record["title"], "Encode me");
    assert_eq!(record["priority"], 3);
    assert_eq!(record["projectId"], "shopping");
    assert_eq!(record["notificationId"], "n-7");
    assert!(record.get("createdAt").is_some());
    assert!(record.get("dueDate").is_some());
    assert!(record.get("description").is_none());
}

#[rstest]
fn record_conversion_round_trips_task() {
    let task = task_with("Round trip", |data| {
        data.description = Some("Details".to_owned());
        data.due_at = Some(base_time() + Duration::days(1));
        data.priority = Priority::Urgent;
        data.project = ProjectId::Work;
    });

    let restored = TaskRecord::from(&task).into_task().expect("valid record");
    assert_eq!(restored, task);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn in_memory_store_round_trips_list() {
    let store = InMemoryTaskStore::new("tasks");
    assert!(store.load().await.expect("load succeeds").is_none());

    let tasks = vec![
        task_with("First", |data| data.completed = true),
        task_with("Second", |data| data.priority = Priority::High),
    ];
    store.save(&tasks).await.expect("save succeeds");

    let loaded = store.load().await.expect("load succeeds");
    assert_eq!(loaded, Some(tasks));
    assert_eq!(store.save_count(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn in_memory_store_migrates_seeded_legacy_text() {
    let store = InMemoryTaskStore::with_raw("tasks", legacy_record(&json!({})));

    let loaded = store
        .load()
        .await
        .expect("load succeeds")
        .expect("list present");

    assert_eq!(loaded.len(), 1);
    assert!(loaded.iter().all(|task| task.project() == ProjectId::Inbox));
}
