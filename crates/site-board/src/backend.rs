//! Remote operations the board depends on.

use std::future::Future;

use site_api::{ApiClient, ApiError};
use site_core::entities::Project;
use site_core::enums::{Column, TaskStatus};
use site_core::filter::TaskFilter;
use site_core::pagination::TaskPage;

/// The subset of the dashboard API the board drives.
///
/// [`ApiClient`] is the production implementation; tests substitute a
/// backend whose replies they control.
pub trait TaskBackend: Send + Sync + 'static {
    fn list_tasks(
        &self,
        column: Column,
        page: u32,
        limit: u32,
        filter: &TaskFilter,
    ) -> impl Future<Output = Result<TaskPage, ApiError>> + Send;

    fn update_status(
        &self,
        task_id: &str,
        status: TaskStatus,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn delete_task(&self, task_id: &str) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn list_projects(&self) -> impl Future<Output = Result<Vec<Project>, ApiError>> + Send;
}

impl TaskBackend for ApiClient {
    async fn list_tasks(
        &self,
        column: Column,
        page: u32,
        limit: u32,
        filter: &TaskFilter,
    ) -> Result<TaskPage, ApiError> {
        Self::list_tasks(self, column, page, limit, filter).await
    }

    async fn update_status(&self, task_id: &str, status: TaskStatus) -> Result<(), ApiError> {
        self.update_task_status(task_id, status).await
    }

    async fn delete_task(&self, task_id: &str) -> Result<(), ApiError> {
        Self::delete_task(self, task_id).await
    }

    async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        Self::list_projects(self).await
    }
}
