//! Parsing of full listing payloads as served by the dashboard API.

use pretty_assertions::assert_eq;
use site_core::entities::Task;
use site_core::enums::{Column, Priority, TaskStatus};
use site_core::pagination::TaskPage;

const LISTING: &str = r#"{
    "tasks": [
        {
            "id": "665f1c",
            "title": "Inspect formwork",
            "description": "Level 3 east wing",
            "priority": "MEDIUM",
            "dueDate": "2026-10-20",
            "taskCode": "TSK-0101",
            "status": "TODO",
            "project": { "id": "p1", "name": "North Tower" },
            "assignee": { "id": "u1", "fullName": "Ines Varga" },
            "isUserInProject": true
        },
        {
            "id": "665f1d",
            "title": "Order rebar",
            "priority": "HIGH",
            "dueDate": "2026-10-18",
            "taskCode": "TSK-0102",
            "status": "TODO",
            "project": { "id": "p1", "name": "North Tower" },
            "assignee": { "id": "u2", "fullName": "Sam Achebe" },
            "isUserInProject": false
        }
    ],
    "pagination": { "page": 1, "limit": 10, "total": 2, "totalPages": 1, "hasNextPage": false }
}"#;

#[test]
fn listing_payload_parses() {
    let page: TaskPage = serde_json::from_str(LISTING).unwrap();
    assert_eq!(page.tasks.len(), 2);
    assert_eq!(page.pagination.total, 2);

    let first = &page.tasks[0];
    assert_eq!(first.priority, Priority::Medium);
    assert_eq!(first.status.column(), Column::Todo);
    assert!(!page.tasks[1].is_user_in_project);
}

#[test]
fn task_survives_serde_roundtrip() {
    let page: TaskPage = serde_json::from_str(LISTING).unwrap();
    let original = page.tasks[0].clone();

    let json = serde_json::to_string(&original).unwrap();
    assert!(json.contains(r#""taskCode":"TSK-0101""#));
    let recovered: Task = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, original);
}

#[test]
fn status_change_keeps_identity() {
    let page: TaskPage = serde_json::from_str(LISTING).unwrap();
    let mut task = page.tasks[0].clone();
    task.status = Column::Done.status();
    assert_eq!(task.status, TaskStatus::Done);
    assert_eq!(task.id, "665f1c");
}
