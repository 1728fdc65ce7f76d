//! Shared fixtures: a backend whose replies the test hands out one by one.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use parking_lot::Mutex;
use site_api::ApiError;
use site_board::{BoardStore, Notifier, TaskBackend, Toast, ToastLevel};
use site_core::entities::{AssigneeRef, Project, ProjectRef, Task};
use site_core::enums::{Column, Priority, TaskStatus};
use site_core::filter::TaskFilter;
use site_core::pagination::{Pagination, TaskPage};
use tokio::sync::{mpsc, oneshot};

pub type Reply<T> = oneshot::Sender<Result<T, ApiError>>;

/// A backend request waiting for the test to answer it.
pub enum Call {
    List {
        column: Column,
        page: u32,
        filter: TaskFilter,
        reply: Reply<TaskPage>,
    },
    Status {
        task_id: String,
        status: TaskStatus,
        reply: Reply<()>,
    },
    Delete {
        task_id: String,
        reply: Reply<()>,
    },
}

pub struct GatedBackend {
    calls: mpsc::UnboundedSender<Call>,
}

impl GatedBackend {
    async fn call<T>(&self, build: impl FnOnce(Reply<T>) -> Call) -> Result<T, ApiError> {
        let (tx, rx) = oneshot::channel();
        self.calls
            .send(build(tx))
            .expect("test controller dropped");
        rx.await.unwrap_or_else(|_| Err(server_error("reply dropped")))
    }
}

impl TaskBackend for GatedBackend {
    async fn list_tasks(
        &self,
        column: Column,
        page: u32,
        _limit: u32,
        filter: &TaskFilter,
    ) -> Result<TaskPage, ApiError> {
        let filter = filter.clone();
        self.call(|reply| Call::List {
            column,
            page,
            filter,
            reply,
        })
        .await
    }

    async fn update_status(&self, task_id: &str, status: TaskStatus) -> Result<(), ApiError> {
        let task_id = task_id.to_string();
        self.call(|reply| Call::Status {
            task_id,
            status,
            reply,
        })
        .await
    }

    async fn delete_task(&self, task_id: &str) -> Result<(), ApiError> {
        let task_id = task_id.to_string();
        self.call(|reply| Call::Delete { task_id, reply }).await
    }

    async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        Ok(vec![Project {
            id: "p1".into(),
            name: "North Tower".into(),
        }])
    }
}

/// Receives the calls made by a [`GatedBackend`].
pub struct Controller {
    calls: mpsc::UnboundedReceiver<Call>,
}

impl Controller {
    pub async fn next(&mut self) -> Call {
        tokio::time::timeout(Duration::from_secs(2), self.calls.recv())
            .await
            .expect("timed out waiting for a backend call")
            .expect("backend dropped")
    }

    /// A call already issued, without waiting.
    pub fn pending(&mut self) -> Option<Call> {
        self.calls.try_recv().ok()
    }

    pub async fn expect_list(&mut self) -> (Column, u32, TaskFilter, Reply<TaskPage>) {
        match self.next().await {
            Call::List {
                column,
                page,
                filter,
                reply,
            } => (column, page, filter, reply),
            _ => panic!("expected a list call"),
        }
    }

    pub async fn expect_status(&mut self) -> (String, TaskStatus, Reply<()>) {
        match self.next().await {
            Call::Status {
                task_id,
                status,
                reply,
            } => (task_id, status, reply),
            _ => panic!("expected a status call"),
        }
    }

    pub async fn expect_delete(&mut self) -> (String, Reply<()>) {
        match self.next().await {
            Call::Delete { task_id, reply } => (task_id, reply),
            _ => panic!("expected a delete call"),
        }
    }
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().clone()
    }

    pub fn levels(&self) -> Vec<ToastLevel> {
        self.toasts.lock().iter().map(|t| t.level).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.lock().push(toast);
    }
}

pub type Board = BoardStore<GatedBackend, RecordingNotifier>;

pub fn board() -> (Board, Controller, RecordingNotifier) {
    let (tx, rx) = mpsc::unbounded_channel();
    let notifier = RecordingNotifier::default();
    let store = BoardStore::new(GatedBackend { calls: tx }, notifier.clone(), 10);
    (store, Controller { calls: rx }, notifier)
}

/// A board whose columns were loaded from `todo`, `in_progress`, and `done`.
pub async fn seeded(
    todo: Vec<Task>,
    in_progress: Vec<Task>,
    done: Vec<Task>,
) -> (Board, Controller, RecordingNotifier) {
    let (store, mut ctl, notifier) = board();
    let mut by_column = [todo, in_progress, done];

    let refresh = tokio::spawn({
        let store = store.clone();
        async move { store.refresh().await }
    });
    for _ in 0..3 {
        let (column, page, _, reply) = ctl.expect_list().await;
        let tasks = std::mem::take(&mut by_column[column.index()]);
        reply
            .send(Ok(page_of(tasks, page, false)))
            .expect("board awaiting reply");
    }
    refresh.await.expect("refresh task").expect("refresh");
    (store, ctl, notifier)
}

pub fn task(id: &str, status: TaskStatus) -> Task {
    Task {
        id: id.to_string(),
        title: format!("Task {id}"),
        description: None,
        priority: Priority::Medium,
        due_date: NaiveDate::from_ymd_opt(2026, 12, 1).expect("valid date"),
        task_code: format!("TSK-{id}"),
        status,
        project: ProjectRef {
            id: "p1".into(),
            name: "North Tower".into(),
        },
        assignee: AssigneeRef {
            id: "u1".into(),
            full_name: "Ines Varga".into(),
        },
        is_user_in_project: true,
    }
}

pub fn tasks(ids: &[&str], status: TaskStatus) -> Vec<Task> {
    ids.iter().map(|id| task(id, status)).collect()
}

pub fn page_of(tasks: Vec<Task>, page: u32, has_next_page: bool) -> TaskPage {
    let count = tasks.len() as u64;
    TaskPage {
        tasks,
        pagination: Pagination {
            page,
            limit: 10,
            total: count,
            total_pages: if has_next_page { page + 1 } else { page },
            has_next_page,
        },
    }
}

pub fn server_error(message: &str) -> ApiError {
    ApiError::Api {
        status: 500,
        message: message.to_string(),
    }
}
