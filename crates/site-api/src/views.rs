//! Views refreshed when a push event arrives.
//!
//! Bodies other than the unread count are passed through as JSON; nothing
//! in siteline interprets them beyond caching the latest value.

use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;
use site_core::enums::NotificationFilter;
use site_core::query::QueryKey;

use crate::{ApiClient, error::ApiError, http::check_response};

#[derive(Deserialize)]
struct UnreadCount {
    count: u64,
}

impl ApiClient {
    /// Number of unread notifications for the caller.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn unread_notification_count(&self) -> Result<u64, ApiError> {
        let resp = check_response(
            self.request(Method::GET, "/notifications/unread-count")
                .send()
                .await?,
        )
        .await?;
        let body = resp
            .json::<UnreadCount>()
            .await
            .map_err(|e| ApiError::Parse(format!("unread count: {e}")))?;
        Ok(body.count)
    }

    /// Notification list under `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn list_notifications(&self, filter: NotificationFilter) -> Result<Value, ApiError> {
        self.get_json("/notifications", &[("filter", filter.as_str())]).await
    }

    /// Drawing/document listing.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn list_drawings(&self) -> Result<Value, ApiError> {
        self.get_json("/drawings", &[]).await
    }

    /// Submittal listing.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn list_submittals(&self) -> Result<Value, ApiError> {
        self.get_json("/submittals", &[]).await
    }

    /// Fetch whatever backs `key`, as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] from the underlying endpoint.
    pub async fn fetch_view(&self, key: QueryKey) -> Result<Value, ApiError> {
        match key {
            QueryKey::NotificationCount => self.unread_notification_count().await.map(Value::from),
            QueryKey::Notifications(filter) => self.list_notifications(filter).await,
            QueryKey::Drawings => self.list_drawings().await,
            QueryKey::Submittals => self.list_submittals().await,
        }
    }

    async fn get_json(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, ApiError> {
        let resp =
            check_response(self.request(Method::GET, path).query(query).send().await?).await?;
        resp.json::<Value>()
            .await
            .map_err(|e| ApiError::Parse(format!("{path}: {e}")))
    }
}
