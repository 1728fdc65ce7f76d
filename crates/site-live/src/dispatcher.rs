//! Connection lifecycle and push fan-out.

use std::sync::{Arc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

use futures::StreamExt;
use futures::future::join_all;
use parking_lot::Mutex;
use site_core::entities::PushEvent;
use site_core::query::QueryKey;
use tokio::task::JoinHandle;

use crate::alerts::{Alerts, SoundUnlock};
use crate::cache::Refetcher;
use crate::error::LiveError;
use crate::transport::{PushStream, PushTransport};
use crate::{ConnectionId, Identity};

struct Connection {
    id: ConnectionId,
    identity: Identity,
    pump: JoinHandle<()>,
}

struct Inner<T, R, A> {
    transport: T,
    refetcher: R,
    alerts: A,
    sound: SoundUnlock,
    connection: Mutex<Option<Connection>>,
    next_id: AtomicU64,
}

impl<T, R, A> Drop for Inner<T, R, A> {
    fn drop(&mut self) {
        if let Some(connection) = self.connection.get_mut().take() {
            connection.pump.abort();
            tracing::debug!(id = %connection.id, "push channel dropped with its dispatcher");
        }
    }
}

/// Keeps one push channel open per session and turns each event into
/// refetches of the mounted views, a toast, and a sound.
///
/// Cheap to clone; clones share the connection. The channel closes when
/// the last clone is dropped.
pub struct LiveDispatcher<T, R, A> {
    inner: Arc<Inner<T, R, A>>,
}

impl<T, R, A> Clone for LiveDispatcher<T, R, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: PushTransport, R: Refetcher, A: Alerts> LiveDispatcher<T, R, A> {
    #[must_use]
    pub fn new(transport: T, refetcher: R, alerts: A) -> Self {
        Self {
            inner: Arc::new(Inner {
                transport,
                refetcher,
                alerts,
                sound: SoundUnlock::new(),
                connection: Mutex::new(None),
                next_id: AtomicU64::new(1),
            }),
        }
    }

    #[must_use]
    pub fn refetcher(&self) -> &R {
        &self.inner.refetcher
    }

    /// Open the channel for `identity`.
    ///
    /// Calling again with the same identity while the channel is open
    /// returns the existing connection. A different identity closes the
    /// current channel first. Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// - [`LiveError::IdentityIncomplete`] if the user id or role is empty.
    /// - [`LiveError::Connect`] if the transport cannot open a channel.
    pub fn connect(&self, identity: Identity) -> Result<ConnectionId, LiveError> {
        if !identity.is_complete() {
            return Err(LiveError::IdentityIncomplete);
        }

        let mut slot = self.inner.connection.lock();
        if let Some(current) = slot.as_ref() {
            if current.identity == identity {
                tracing::debug!(id = %current.id, "push channel already open");
                return Ok(current.id);
            }
        }
        if let Some(previous) = slot.take() {
            tracing::info!(id = %previous.id, user_id = %previous.identity.user_id, "closing push channel for previous identity");
            previous.pump.abort();
        }

        let stream = self.inner.transport.open(&identity)?;
        let id = ConnectionId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        let pump = tokio::spawn(pump(Arc::downgrade(&self.inner), id, stream));
        tracing::info!(%id, user_id = %identity.user_id, role = %identity.role, "push channel connected");
        *slot = Some(Connection {
            id,
            identity,
            pump,
        });
        Ok(id)
    }

    /// Close the channel, if open. A later [`Self::connect`] opens a new one.
    pub fn disconnect(&self) {
        if let Some(connection) = self.inner.connection.lock().take() {
            connection.pump.abort();
            tracing::info!(id = %connection.id, "push channel disconnected");
        }
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.inner.connection.lock().is_some()
    }

    /// Id of the open connection, if any.
    #[must_use]
    pub fn connection_id(&self) -> Option<ConnectionId> {
        self.inner.connection.lock().as_ref().map(|c| c.id)
    }

    /// Forward a user interaction so the notification sound can be primed.
    pub fn on_user_gesture(&self) -> bool {
        self.inner.sound.on_user_gesture(&self.inner.alerts)
    }

    /// Handle one push event.
    ///
    /// Every mounted view in [`QueryKey::PUSH_FANOUT`] is refetched
    /// concurrently; a failed refetch is logged and does not affect the
    /// others. Unmounted views are marked stale. The toast and sound fire
    /// once per event.
    pub async fn on_push(&self, event: &PushEvent) {
        let refetcher = &self.inner.refetcher;
        let (mounted, unmounted): (Vec<QueryKey>, Vec<QueryKey>) = QueryKey::PUSH_FANOUT
            .into_iter()
            .partition(|key| refetcher.is_mounted(*key));
        for key in unmounted {
            refetcher.mark_stale(key);
        }
        let refetches = mounted.into_iter().map(|key| async move {
            if let Err(e) = refetcher.refetch(key).await {
                tracing::warn!(%key, error = %e, "refetch after push failed");
            }
        });

        self.inner.alerts.toast(&event.message);
        self.inner.alerts.play_sound();
        join_all(refetches).await;
    }
}

/// Drains one channel. Holds only a weak handle so an abandoned dispatcher
/// is freed and its channel closed.
async fn pump<T: PushTransport, R: Refetcher, A: Alerts>(
    inner: Weak<Inner<T, R, A>>,
    id: ConnectionId,
    mut stream: PushStream,
) {
    while let Some(item) = stream.next().await {
        let Some(inner) = inner.upgrade() else {
            return;
        };
        match item {
            Ok(event) => {
                tracing::debug!(%id, message = %event.message, "push event");
                LiveDispatcher { inner }.on_push(&event).await;
            }
            Err(e) => {
                tracing::warn!(%id, error = %e, "push channel failed");
                break;
            }
        }
    }

    let Some(inner) = inner.upgrade() else {
        return;
    };
    let mut slot = inner.connection.lock();
    if slot.as_ref().is_some_and(|c| c.id == id) {
        *slot = None;
        tracing::info!(%id, "push channel closed by server");
    }
}
