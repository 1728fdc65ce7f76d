//! Status, priority, and board column enums.
//!
//! `TaskStatus` and `Column` are in one-to-one correspondence: every task
//! lives in the column matching its status. The mapping is exposed in both
//! directions so callers never compare strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// TaskStatus
// ---------------------------------------------------------------------------

/// Status of a task on the board.
///
/// ```text
/// TODO ⇄ IN_PROGRESS ⇄ DONE   (and TODO ⇄ DONE)
/// ```
///
/// Any status may move to any other; there are no blocked transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Column that holds tasks with this status.
    #[must_use]
    pub const fn column(self) -> Column {
        match self {
            Self::Todo => Column::Todo,
            Self::InProgress => Column::InProgress,
            Self::Done => Column::Done,
        }
    }

    /// Wire representation sent in status-update requests.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::InProgress => "IN_PROGRESS",
            Self::Done => "DONE",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Column
// ---------------------------------------------------------------------------

/// One of the three fixed board columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Column {
    Todo,
    InProgress,
    Done,
}

impl Column {
    /// All columns in display order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Status a task takes on when dropped into this column.
    #[must_use]
    pub const fn status(self) -> TaskStatus {
        match self {
            Self::Todo => TaskStatus::Todo,
            Self::InProgress => TaskStatus::InProgress,
            Self::Done => TaskStatus::Done,
        }
    }

    /// Position of this column in [`Column::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Todo => 0,
            Self::InProgress => 1,
            Self::Done => 2,
        }
    }

    /// Path segment of the per-column listing endpoint (`/tasks/{segment}`).
    #[must_use]
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }

    /// Heading shown above the column.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Todo => "To-Do",
            Self::InProgress => "In-Progress",
            Self::Done => "Done",
        }
    }

    /// Board key used by the dashboard (`todo`, `inProgress`, `done`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "inProgress",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Column {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" | "TODO" => Ok(Self::Todo),
            "inProgress" | "in-progress" | "in_progress" | "IN_PROGRESS" => Ok(Self::InProgress),
            "done" | "DONE" => Ok(Self::Done),
            other => Err(CoreError::Validation(format!("unknown column '{other}'"))),
        }
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "HIGH" => Ok(Self::High),
            "MEDIUM" => Ok(Self::Medium),
            "LOW" => Ok(Self::Low),
            _ => Err(CoreError::Validation(format!("unknown priority '{s}'"))),
        }
    }
}

// ---------------------------------------------------------------------------
// NotificationFilter
// ---------------------------------------------------------------------------

/// Filter applied to the notification list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationFilter {
    All,
    Unread,
    Read,
}

impl NotificationFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::Unread, Self::Read];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Unread => "unread",
            Self::Read => "read",
        }
    }
}

impl fmt::Display for NotificationFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Column::Todo, TaskStatus::Todo)]
    #[case(Column::InProgress, TaskStatus::InProgress)]
    #[case(Column::Done, TaskStatus::Done)]
    fn column_status_mapping_is_bijective(#[case] column: Column, #[case] status: TaskStatus) {
        assert_eq!(column.status(), status);
        assert_eq!(status.column(), column);
    }

    #[test]
    fn column_indices_follow_display_order() {
        for (i, column) in Column::ALL.iter().enumerate() {
            assert_eq!(column.index(), i);
        }
    }

    #[test]
    fn status_serializes_upper_snake() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, r#""IN_PROGRESS""#);
    }

    #[test]
    fn column_serializes_camel_case() {
        let json = serde_json::to_string(&Column::InProgress).unwrap();
        assert_eq!(json, r#""inProgress""#);
    }

    #[rstest]
    #[case("todo", Column::Todo)]
    #[case("in-progress", Column::InProgress)]
    #[case("inProgress", Column::InProgress)]
    #[case("DONE", Column::Done)]
    fn column_parses_aliases(#[case] input: &str, #[case] expected: Column) {
        assert_eq!(input.parse::<Column>().unwrap(), expected);
    }

    #[test]
    fn unknown_column_is_validation_error() {
        let err = "backlog".parse::<Column>().unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn priority_parse_is_case_insensitive() {
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        assert!("urgent".parse::<Priority>().is_err());
    }
}
