//! The three ordered task lists and the splice operations over them.
//!
//! Everything here is synchronous and side-effect free; `BoardStore` wraps
//! these operations with locking, networking, and rollback.

use serde::Serialize;
use site_core::entities::Task;
use site_core::enums::Column;

/// Ordered tasks for each column, indexed by [`Column::index`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColumnLists {
    lists: [Vec<Task>; 3],
}

impl ColumnLists {
    #[must_use]
    pub fn get(&self, column: Column) -> &[Task] {
        &self.lists[column.index()]
    }

    fn get_mut(&mut self, column: Column) -> &mut Vec<Task> {
        &mut self.lists[column.index()]
    }

    /// Column and index currently holding `task_id`.
    #[must_use]
    pub fn locate(&self, task_id: &str) -> Option<(Column, usize)> {
        Column::ALL.into_iter().find_map(|column| {
            self.get(column)
                .iter()
                .position(|t| t.id == task_id)
                .map(|index| (column, index))
        })
    }

    /// Index of `task_id` within `column`.
    #[must_use]
    pub fn position_in(&self, column: Column, task_id: &str) -> Option<usize> {
        self.get(column).iter().position(|t| t.id == task_id)
    }

    /// Move a task within one column. `to` is clamped to the list end.
    pub fn reorder(&mut self, column: Column, from: usize, to: usize) {
        let list = self.get_mut(column);
        if from >= list.len() {
            return;
        }
        let task = list.remove(from);
        let to = to.min(list.len());
        list.insert(to, task);
    }

    /// Move a task across columns, stamping it with the target column's status.
    ///
    /// Returns the moved task as it was before the move.
    pub fn transfer(&mut self, from: Column, index: usize, to: Column, target: usize) -> Option<Task> {
        let source = self.get_mut(from);
        if index >= source.len() {
            return None;
        }
        let original = source.remove(index);
        let mut moved = original.clone();
        moved.status = to.status();

        let dest = self.get_mut(to);
        let target = target.min(dest.len());
        dest.insert(target, moved);
        Some(original)
    }

    /// Remove `task_id` from whichever column holds it.
    pub fn remove(&mut self, task_id: &str) -> Option<(Column, Task)> {
        let (column, index) = self.locate(task_id)?;
        Some((column, self.get_mut(column).remove(index)))
    }

    /// Put `task` back into `column` at `index` (clamped), dropping any other copy first.
    pub fn restore(&mut self, column: Column, index: usize, task: Task) {
        self.remove(&task.id);
        let list = self.get_mut(column);
        let index = index.min(list.len());
        list.insert(index, task);
    }

    /// Replace a column's contents with a fresh first page.
    ///
    /// Tasks from the page are removed from the other columns so each id
    /// stays in exactly one list.
    pub fn replace(&mut self, column: Column, tasks: Vec<Task>) {
        let tasks = normalize(column, tasks);
        self.evict_from_others(column, &tasks);
        *self.get_mut(column) = tasks;
    }

    /// Append a later page, skipping tasks already present in this column.
    ///
    /// Returns how many tasks were added.
    pub fn append(&mut self, column: Column, tasks: Vec<Task>) -> usize {
        let tasks: Vec<Task> = normalize(column, tasks)
            .into_iter()
            .filter(|t| self.position_in(column, &t.id).is_none())
            .collect();
        self.evict_from_others(column, &tasks);
        let added = tasks.len();
        self.get_mut(column).extend(tasks);
        added
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.iter().all(Vec::is_empty)
    }

    fn evict_from_others(&mut self, column: Column, incoming: &[Task]) {
        for other in Column::ALL.into_iter().filter(|c| *c != column) {
            self.get_mut(other)
                .retain(|t| !incoming.iter().any(|n| n.id == t.id));
        }
    }
}

fn normalize(column: Column, tasks: Vec<Task>) -> Vec<Task> {
    tasks
        .into_iter()
        .map(|mut task| {
            if task.status != column.status() {
                tracing::warn!(
                    task_id = %task.id,
                    status = %task.status,
                    %column,
                    "server listed task under a column that does not match its status",
                );
                task.status = column.status();
            }
            task
        })
        .collect()
}
