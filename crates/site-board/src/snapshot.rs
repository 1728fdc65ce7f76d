//! Read-only view of the board handed to renderers.

use serde::Serialize;
use site_core::entities::Task;
use site_core::enums::Column;
use site_core::filter::TaskFilter;
use site_core::pagination::PageCursor;

/// What the board area should render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum BoardView {
    Columns,
    /// Task data is not readable by the current user.
    AccessDenied { message: String },
}

/// One column as rendered: its tasks, pagination, and last fetch error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnState {
    pub column: Column,
    pub tasks: Vec<Task>,
    pub cursor: PageCursor,
    /// Set when the latest fetch for this column failed.
    pub error: Option<String>,
}

/// Point-in-time copy of the whole board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    pub view: BoardView,
    pub filter: TaskFilter,
    pub columns: [ColumnState; 3],
}

impl BoardSnapshot {
    #[must_use]
    pub fn column(&self, column: Column) -> &ColumnState {
        &self.columns[column.index()]
    }

    /// Task ids of `column`, in display order.
    #[must_use]
    pub fn ids(&self, column: Column) -> Vec<&str> {
        self.column(column).tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[must_use]
    pub fn find(&self, task_id: &str) -> Option<(Column, &Task)> {
        self.columns.iter().find_map(|c| {
            c.tasks
                .iter()
                .find(|t| t.id == task_id)
                .map(|t| (c.column, t))
        })
    }
}
