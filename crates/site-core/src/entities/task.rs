use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{Priority, TaskStatus};

/// Project a task belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectRef {
    pub id: String,
    pub name: String,
}

/// User a task is assigned to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AssigneeRef {
    pub id: String,
    pub full_name: String,
}

/// A unit of work shown as a card on the board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub priority: Priority,
    pub due_date: NaiveDate,
    pub task_code: String,
    pub status: TaskStatus,
    pub project: ProjectRef,
    pub assignee: AssigneeRef,
    /// False when the assignee has since left the project.
    #[serde(default = "default_in_project")]
    pub is_user_in_project: bool,
}

const fn default_in_project() -> bool {
    true
}
