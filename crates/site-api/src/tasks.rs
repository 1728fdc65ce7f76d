//! Task listing, status update, and deletion endpoints.

use reqwest::Method;
use serde::Serialize;
use site_core::enums::{Column, TaskStatus};
use site_core::filter::TaskFilter;
use site_core::pagination::TaskPage;

use crate::{ApiClient, error::ApiError, http::check_response};

#[derive(Serialize)]
struct StatusBody {
    status: TaskStatus,
}

impl ApiClient {
    /// Fetch one page of a column under `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ReadPermissionDenied`] when the caller may not read
    /// tasks, or another [`ApiError`] on transport, status, or parse failure.
    pub async fn list_tasks(
        &self,
        column: Column,
        page: u32,
        limit: u32,
        filter: &TaskFilter,
    ) -> Result<TaskPage, ApiError> {
        let mut query = vec![("page", page.to_string()), ("limit", limit.to_string())];
        query.extend(filter.query_pairs());

        let path = format!("/tasks/{}", column.path_segment());
        let resp = check_response(self.request(Method::GET, &path).query(&query).send().await?)
            .await?;
        resp.json::<TaskPage>()
            .await
            .map_err(|e| ApiError::Parse(format!("task page for {column}: {e}")))
    }

    /// Persist a status transition.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the server rejects the update or is unreachable.
    pub async fn update_task_status(&self, task_id: &str, status: TaskStatus) -> Result<(), ApiError> {
        let path = format!("/tasks/{}/status", urlencoding::encode(task_id));
        check_response(
            self.request(Method::PATCH, &path)
                .json(&StatusBody { status })
                .send()
                .await?,
        )
        .await?;
        Ok(())
    }

    /// Delete a task.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the server rejects the deletion or is unreachable.
    pub async fn delete_task(&self, task_id: &str) -> Result<(), ApiError> {
        let path = format!("/tasks/{}", urlencoding::encode(task_id));
        check_response(self.request(Method::DELETE, &path).send().await?).await?;
        Ok(())
    }
}
