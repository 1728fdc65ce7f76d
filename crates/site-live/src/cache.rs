//! Cache of dashboard views, keyed by [`QueryKey`].
//!
//! A view is "mounted" while something is displaying it. Mounted views are
//! refetched on a push event; an unmounted view that holds data is marked
//! stale instead and refetched by [`QueryCache::mount_and_refresh`].

use std::collections::HashMap;
use std::future::Future;

use parking_lot::Mutex;
use serde_json::Value;
use site_api::{ApiClient, ApiError};
use site_core::query::QueryKey;

use crate::error::LiveError;

/// Something that can re-run the query behind a view.
pub trait Refetcher: Send + Sync + 'static {
    fn is_mounted(&self, key: QueryKey) -> bool;

    /// Record that the data behind `key` changed while nobody was showing it.
    fn mark_stale(&self, key: QueryKey);

    fn refetch(&self, key: QueryKey) -> impl Future<Output = Result<(), LiveError>> + Send;
}

/// Where [`QueryCache`] gets view data from.
pub trait ViewSource: Send + Sync + 'static {
    fn fetch(&self, key: QueryKey) -> impl Future<Output = Result<Value, ApiError>> + Send;
}

impl ViewSource for ApiClient {
    async fn fetch(&self, key: QueryKey) -> Result<Value, ApiError> {
        self.fetch_view(key).await
    }
}

#[derive(Debug, Default)]
struct Entry {
    mounts: usize,
    value: Option<Value>,
    fetches: u64,
    stale: bool,
}

/// Mounted-view registry with the latest value of each view.
pub struct QueryCache<S = ApiClient> {
    source: S,
    entries: Mutex<HashMap<QueryKey, Entry>>,
}

impl<S: ViewSource> QueryCache<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Register one more viewer of `key`.
    pub fn mount(&self, key: QueryKey) {
        self.entries.lock().entry(key).or_default().mounts += 1;
    }

    /// Drop one viewer of `key`. Unbalanced calls are ignored.
    pub fn unmount(&self, key: QueryKey) {
        if let Some(entry) = self.entries.lock().get_mut(&key) {
            entry.mounts = entry.mounts.saturating_sub(1);
        }
    }

    /// Mount `key` and fetch it if it has no value yet or went stale.
    ///
    /// # Errors
    ///
    /// Returns [`LiveError::Refetch`] if the fetch fails. The view stays mounted.
    pub async fn mount_and_refresh(&self, key: QueryKey) -> Result<(), LiveError> {
        let needs_fetch = {
            let mut entries = self.entries.lock();
            let entry = entries.entry(key).or_default();
            entry.mounts += 1;
            entry.stale || entry.value.is_none()
        };
        if needs_fetch {
            self.refetch(key).await?;
        }
        Ok(())
    }

    /// True when the cached value of `key` predates a push event.
    #[must_use]
    pub fn is_stale(&self, key: QueryKey) -> bool {
        self.entries.lock().get(&key).is_some_and(|e| e.stale)
    }

    /// Last fetched value of `key`, if any. Check [`Self::is_stale`] before trusting it.
    #[must_use]
    pub fn value(&self, key: QueryKey) -> Option<Value> {
        self.entries.lock().get(&key).and_then(|e| e.value.clone())
    }

    /// How many successful fetches `key` has had.
    #[must_use]
    pub fn fetch_count(&self, key: QueryKey) -> u64 {
        self.entries.lock().get(&key).map_or(0, |e| e.fetches)
    }

    /// Keys currently mounted, in no particular order.
    #[must_use]
    pub fn mounted(&self) -> Vec<QueryKey> {
        self.entries
            .lock()
            .iter()
            .filter(|(_, e)| e.mounts > 0)
            .map(|(k, _)| *k)
            .collect()
    }
}

impl<S: ViewSource> Refetcher for QueryCache<S> {
    fn is_mounted(&self, key: QueryKey) -> bool {
        self.entries.lock().get(&key).is_some_and(|e| e.mounts > 0)
    }

    fn mark_stale(&self, key: QueryKey) {
        if let Some(entry) = self.entries.lock().get_mut(&key) {
            entry.stale = entry.value.is_some();
        }
    }

    async fn refetch(&self, key: QueryKey) -> Result<(), LiveError> {
        tracing::debug!(%key, "refetching view");
        let value = self
            .source
            .fetch(key)
            .await
            .map_err(|source| LiveError::Refetch { key, source })?;

        let mut entries = self.entries.lock();
        let entry = entries.entry(key).or_default();
        entry.value = Some(value);
        entry.fetches += 1;
        entry.stale = false;
        Ok(())
    }
}
