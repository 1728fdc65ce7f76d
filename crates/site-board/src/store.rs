//! The board store: single owner of the three columns.
//!
//! All mutations go through [`BoardStore`] methods. The lock is never held
//! across an `.await`; asynchronous operations take what they need, release
//! the lock, call the backend, then re-lock to reconcile.
//!
//! Cross-column moves are optimistic. Before the move the three lists are
//! copied; if the server rejects the status change and nothing else has
//! touched the board since, that copy is restored verbatim. If other
//! mutations landed in between, only the moved task is put back so their
//! effects survive.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use parking_lot::Mutex;
use site_api::ApiError;
use site_core::entities::{Project, Task};
use site_core::enums::Column;
use site_core::filter::TaskFilter;
use site_core::pagination::{PageCursor, TaskPage};

use crate::backend::TaskBackend;
use crate::columns::ColumnLists;
use crate::error::BoardError;
use crate::notify::{Notifier, Toast};
use crate::snapshot::{BoardSnapshot, BoardView, ColumnState};

/// Result of a successful [`BoardStore::move_task`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Same-column drop; local only.
    Reordered,
    /// Cross-column drop confirmed by the server.
    Moved,
}

struct BoardState {
    lists: ColumnLists,
    cursors: [PageCursor; 3],
    errors: [Option<String>; 3],
    filter: TaskFilter,
    view: BoardView,
    /// Bumped on every change to `lists`.
    revision: u64,
    /// Bumped per column on every fetch issued and on filter changes.
    generations: [u64; 3],
    /// Ids deleted on the server while a move was in flight; a late
    /// rollback must not resurrect them. Emptied once no move is pending.
    deleted: HashSet<String>,
    /// Task id to target column for every cross-column move awaiting the server.
    pending: HashMap<String, Column>,
}

impl BoardState {
    fn new(page_size: u32) -> Self {
        Self {
            lists: ColumnLists::default(),
            cursors: [PageCursor::first(page_size); 3],
            errors: [None, None, None],
            filter: TaskFilter::default(),
            view: BoardView::Columns,
            revision: 0,
            generations: [0; 3],
            deleted: HashSet::new(),
            pending: HashMap::new(),
        }
    }

    const fn touch(&mut self) {
        self.revision += 1;
    }

    /// A listing of `column` may place `task_id` unless that task is being
    /// moved somewhere else.
    fn accepts(&self, column: Column, task_id: &str) -> bool {
        self.pending.get(task_id).is_none_or(|to| *to == column)
    }

    /// Install a fresh first page of `column`.
    ///
    /// Tasks whose move into this column is still unconfirmed stay where
    /// they are, even if the page predates the move.
    fn replace_column(&mut self, column: Column, tasks: Vec<Task>) {
        let incoming: Vec<Task> = tasks
            .into_iter()
            .filter(|t| self.accepts(column, &t.id))
            .collect();
        let kept: Vec<(usize, Task)> = self
            .lists
            .get(column)
            .iter()
            .enumerate()
            .filter(|(_, t)| {
                self.pending.get(&t.id) == Some(&column) && !incoming.iter().any(|n| n.id == t.id)
            })
            .map(|(index, t)| (index, t.clone()))
            .collect();

        for task in &incoming {
            self.deleted.remove(&task.id);
        }
        self.lists.replace(column, incoming);
        for (index, task) in kept {
            self.lists.restore(column, index, task);
        }
    }

    fn finish_move(&mut self, task_id: &str) {
        self.pending.remove(task_id);
        if self.pending.is_empty() {
            self.deleted.clear();
        }
    }
}

/// Everything needed to undo one optimistic move.
struct PendingMove {
    before: ColumnLists,
    original: Task,
    from: Column,
    index: usize,
    applied_at: u64,
}

struct Inner<B, N> {
    backend: B,
    notifier: N,
    state: Mutex<BoardState>,
}

/// Shared handle to the task board. Clones refer to the same board.
pub struct BoardStore<B, N> {
    inner: Arc<Inner<B, N>>,
}

impl<B, N> Clone for BoardStore<B, N> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<B: TaskBackend, N: Notifier> BoardStore<B, N> {
    /// Empty board requesting `page_size` tasks per column page.
    #[must_use]
    pub fn new(backend: B, notifier: N, page_size: u32) -> Self {
        Self {
            inner: Arc::new(Inner {
                backend,
                notifier,
                state: Mutex::new(BoardState::new(page_size.max(1))),
            }),
        }
    }

    /// Copy of the board for rendering.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        let state = self.inner.state.lock();
        BoardSnapshot {
            view: state.view.clone(),
            filter: state.filter.clone(),
            columns: Column::ALL.map(|column| ColumnState {
                column,
                tasks: state.lists.get(column).to_vec(),
                cursor: state.cursors[column.index()],
                error: state.errors[column.index()].clone(),
            }),
        }
    }

    /// Copy of just the three task lists.
    #[must_use]
    pub fn lists(&self) -> ColumnLists {
        self.inner.state.lock().lists.clone()
    }

    // ── Loading ────────────────────────────────────────────────────

    /// Fetch `page` of `column` under the active filter.
    ///
    /// Page 1 replaces the column; later pages append tasks not yet shown.
    /// A listing never pulls back a task whose move is awaiting the server.
    ///
    /// # Errors
    ///
    /// - [`BoardError::Stale`] if another fetch for this column or a filter
    ///   change was issued before this one resolved. The response is dropped.
    /// - [`BoardError::ReadPermissionDenied`] if task data is not readable;
    ///   the board view switches to access-denied.
    /// - [`BoardError::FetchFailed`] for any other failure; only this
    ///   column's error is set. A failed first page also empties the column.
    pub async fn load_column(&self, column: Column, page: u32) -> Result<TaskPage, BoardError> {
        let page = page.max(1);
        let i = column.index();
        let (generation, filter, limit) = {
            let mut state = self.inner.state.lock();
            state.generations[i] += 1;
            (
                state.generations[i],
                state.filter.clone(),
                state.cursors[i].page_size,
            )
        };

        tracing::debug!(%column, page, limit, "loading column page");
        let result = self
            .inner
            .backend
            .list_tasks(column, page, limit, &filter)
            .await;

        let mut state = self.inner.state.lock();
        if state.generations[i] != generation || state.filter != filter {
            tracing::debug!(%column, page, "discarding superseded column response");
            return Err(BoardError::Stale { column, page });
        }

        match result {
            Ok(task_page) => {
                if page == 1 {
                    state.replace_column(column, task_page.tasks.clone());
                } else {
                    let tasks = task_page
                        .tasks
                        .iter()
                        .filter(|t| state.accepts(column, &t.id))
                        .cloned()
                        .collect();
                    let added = state.lists.append(column, tasks);
                    tracing::debug!(%column, page, added, "appended column page");
                }
                state.cursors[i].apply(&task_page.pagination);
                state.errors[i] = None;
                state.touch();
                Ok(task_page)
            }
            Err(ApiError::ReadPermissionDenied { message }) => {
                tracing::warn!(%column, %message, "task read access denied");
                state.view = BoardView::AccessDenied {
                    message: message.clone(),
                };
                Err(BoardError::ReadPermissionDenied { message })
            }
            Err(source) => {
                tracing::warn!(%column, page, error = %source, "column fetch failed");
                state.errors[i] = Some(source.to_string());
                if page == 1 {
                    // Whatever the column held belongs to an earlier filter or load.
                    state.replace_column(column, Vec::new());
                    state.touch();
                }
                Err(BoardError::FetchFailed { column, source })
            }
        }
    }

    /// Load the page after the column's current one, if the server reported more.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load_column`].
    pub async fn load_next_page(&self, column: Column) -> Result<Option<TaskPage>, BoardError> {
        let next = {
            let state = self.inner.state.lock();
            let cursor = state.cursors[column.index()];
            cursor.has_next_page.then_some(cursor.page + 1)
        };
        match next {
            Some(page) => self.load_column(column, page).await.map(Some),
            None => Ok(None),
        }
    }

    /// Replace the shared filter and reset every column to page 1.
    ///
    /// In-flight fetches issued under the previous filter become stale.
    /// Call [`Self::refresh`] afterwards, or use [`Self::apply_filters`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Core`] if the filter's date range is inverted.
    pub fn set_filters(&self, filter: TaskFilter) -> Result<(), BoardError> {
        filter.validate()?;
        let mut state = self.inner.state.lock();
        for column in Column::ALL {
            let i = column.index();
            let page_size = state.cursors[i].page_size;
            state.cursors[i] = PageCursor::first(page_size);
            state.generations[i] += 1;
            state.errors[i] = None;
        }
        state.filter = filter;
        state.view = BoardView::Columns;
        Ok(())
    }

    /// [`Self::set_filters`] followed by [`Self::refresh`].
    ///
    /// # Errors
    ///
    /// Same as those two operations.
    pub async fn apply_filters(&self, filter: TaskFilter) -> Result<(), BoardError> {
        self.set_filters(filter)?;
        self.refresh().await
    }

    /// Load page 1 of all three columns concurrently.
    ///
    /// Per-column failures are recorded on the column and do not fail the
    /// refresh.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ReadPermissionDenied`] if any column reported it.
    pub async fn refresh(&self) -> Result<(), BoardError> {
        let (todo, in_progress, done) = tokio::join!(
            self.load_column(Column::Todo, 1),
            self.load_column(Column::InProgress, 1),
            self.load_column(Column::Done, 1),
        );

        let mut denied = None;
        for result in [todo, in_progress, done] {
            match result {
                Ok(_) | Err(BoardError::FetchFailed { .. } | BoardError::Stale { .. }) => {}
                Err(BoardError::ReadPermissionDenied { message }) => denied = Some(message),
                Err(other) => tracing::warn!(error = %other, "unexpected refresh error"),
            }
        }
        denied.map_or(Ok(()), |message| {
            Err(BoardError::ReadPermissionDenied { message })
        })
    }

    /// Project list for the filter dropdown.
    ///
    /// # Errors
    ///
    /// Returns the backend's [`ApiError`].
    pub async fn projects(&self) -> Result<Vec<Project>, ApiError> {
        self.inner.backend.list_projects().await
    }

    // ── Mutations ──────────────────────────────────────────────────

    /// Apply a drag-and-drop of `task_id` from `from` to `to` at `target_index`.
    ///
    /// Same-column drops reorder locally with no request and no toast.
    /// Cross-column drops update the board immediately, then ask the server
    /// to change the status; a rejection rolls the board back. Either
    /// outcome of a cross-column drop raises exactly one toast.
    ///
    /// # Errors
    ///
    /// - [`BoardError::TaskNotFound`] if `task_id` is not in `from`.
    /// - [`BoardError::StatusUpdateFailed`] if the server rejected the move.
    pub async fn move_task(
        &self,
        task_id: &str,
        from: Column,
        to: Column,
        target_index: usize,
    ) -> Result<MoveOutcome, BoardError> {
        if from == to {
            self.reorder(task_id, from, target_index)?;
            return Ok(MoveOutcome::Reordered);
        }

        let pending = self.apply_optimistic(task_id, from, to, target_index)?;
        let code = pending.original.task_code.clone();
        let status = to.status();

        match self.inner.backend.update_status(task_id, status).await {
            Ok(()) => {
                self.inner.state.lock().finish_move(task_id);
                tracing::info!(task_id, %from, %to, "task status updated");
                self.inner.notifier.notify(Toast::success(format!(
                    "Task {code} moved to {}",
                    to.label()
                )));
                Ok(MoveOutcome::Moved)
            }
            Err(source) => {
                tracing::warn!(task_id, %from, %to, error = %source, "status update rejected; rolling back");
                self.rollback(pending);
                self.inner.notifier.notify(Toast::failure(format!(
                    "Could not move task {code} to {}: {source}",
                    to.label()
                )));
                Err(BoardError::StatusUpdateFailed {
                    task_id: task_id.to_string(),
                    source,
                })
            }
        }
    }

    /// Delete a task on the server, then drop it from the board.
    ///
    /// Not optimistic: nothing changes locally unless the server confirms.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::DeleteFailed`] if the server rejected the delete.
    pub async fn delete_task(&self, task_id: &str) -> Result<(), BoardError> {
        let label = {
            let state = self.inner.state.lock();
            state
                .lists
                .locate(task_id)
                .map(|(column, index)| state.lists.get(column)[index].task_code.clone())
                .unwrap_or_else(|| task_id.to_string())
        };

        match self.inner.backend.delete_task(task_id).await {
            Ok(()) => {
                {
                    let mut state = self.inner.state.lock();
                    if !state.pending.is_empty() {
                        state.deleted.insert(task_id.to_string());
                    }
                    if state.lists.remove(task_id).is_some() {
                        state.touch();
                    }
                }
                tracing::info!(task_id, "task deleted");
                self.inner
                    .notifier
                    .notify(Toast::success(format!("Task {label} deleted")));
                Ok(())
            }
            Err(source) => {
                tracing::warn!(task_id, error = %source, "task delete rejected");
                self.inner
                    .notifier
                    .notify(Toast::failure(format!("Could not delete task {label}: {source}")));
                Err(BoardError::DeleteFailed {
                    task_id: task_id.to_string(),
                    source,
                })
            }
        }
    }

    fn reorder(&self, task_id: &str, column: Column, target_index: usize) -> Result<(), BoardError> {
        let mut state = self.inner.state.lock();
        let index = state
            .lists
            .position_in(column, task_id)
            .ok_or_else(|| BoardError::TaskNotFound {
                task_id: task_id.to_string(),
                column,
            })?;
        if index != target_index {
            state.lists.reorder(column, index, target_index);
            state.touch();
        }
        Ok(())
    }

    fn apply_optimistic(
        &self,
        task_id: &str,
        from: Column,
        to: Column,
        target_index: usize,
    ) -> Result<PendingMove, BoardError> {
        let mut state = self.inner.state.lock();
        let not_found = || BoardError::TaskNotFound {
            task_id: task_id.to_string(),
            column: from,
        };
        let index = state.lists.position_in(from, task_id).ok_or_else(not_found)?;

        let before = state.lists.clone();
        let original = state
            .lists
            .transfer(from, index, to, target_index)
            .ok_or_else(not_found)?;
        if !original.is_user_in_project {
            tracing::warn!(
                task_id,
                assignee = %original.assignee.full_name,
                "moving task whose assignee is no longer on the project",
            );
        }
        state.touch();
        state.pending.insert(task_id.to_string(), to);

        Ok(PendingMove {
            before,
            original,
            from,
            index,
            applied_at: state.revision,
        })
    }

    fn rollback(&self, pending: PendingMove) {
        let mut state = self.inner.state.lock();
        let deleted = state.deleted.contains(&pending.original.id);
        state.finish_move(&pending.original.id);
        if state.revision == pending.applied_at {
            state.lists = pending.before;
        } else if deleted {
            tracing::debug!(task_id = %pending.original.id, "skipping rollback of deleted task");
            return;
        } else {
            tracing::debug!(
                task_id = %pending.original.id,
                "board changed during move; restoring only the moved task",
            );
            state
                .lists
                .restore(pending.from, pending.index, pending.original);
        }
        state.touch();
    }
}
