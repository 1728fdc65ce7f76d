//! Connection lifecycle and push fan-out against an in-memory channel.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use futures::StreamExt;
use futures::channel::mpsc::{UnboundedSender, unbounded};
use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use serde_json::Value;
use site_api::ApiError;
use site_core::entities::PushEvent;
use site_core::enums::NotificationFilter;
use site_core::query::QueryKey;
use site_live::{
    Alerts, Identity, LiveDispatcher, LiveError, PushStream, PushTransport, QueryCache,
    ViewSource,
};

type Sender = UnboundedSender<Result<PushEvent, LiveError>>;

/// Transport whose channels the test feeds by hand.
#[derive(Clone, Default)]
struct ChannelTransport {
    opened: Arc<Mutex<Vec<(Identity, Sender)>>>,
}

impl ChannelTransport {
    fn open_count(&self) -> usize {
        self.opened.lock().len()
    }

    fn sender(&self, n: usize) -> Sender {
        self.opened.lock()[n].1.clone()
    }
}

impl PushTransport for ChannelTransport {
    fn open(&self, identity: &Identity) -> Result<PushStream, LiveError> {
        let (tx, rx) = unbounded();
        self.opened.lock().push((identity.clone(), tx));
        Ok(rx.boxed())
    }
}

#[derive(Clone, Default)]
struct RecordingAlerts {
    toasts: Arc<Mutex<Vec<String>>>,
    sounds: Arc<AtomicUsize>,
    primed: Arc<AtomicUsize>,
}

impl Alerts for RecordingAlerts {
    fn toast(&self, message: &str) {
        self.toasts.lock().push(message.to_string());
    }

    fn play_sound(&self) {
        self.sounds.fetch_add(1, Ordering::SeqCst);
    }

    fn prime_sound(&self) {
        self.primed.fetch_add(1, Ordering::SeqCst);
    }
}

/// Answers every view immediately, except drawings, which always fail.
struct StubViews;

impl ViewSource for StubViews {
    async fn fetch(&self, key: QueryKey) -> Result<Value, ApiError> {
        match key {
            QueryKey::Drawings => Err(ApiError::Api {
                status: 500,
                message: "drawings unavailable".into(),
            }),
            QueryKey::NotificationCount => Ok(Value::from(1)),
            other => Ok(Value::from(other.to_string())),
        }
    }
}

type Dispatcher = LiveDispatcher<ChannelTransport, QueryCache<StubViews>, RecordingAlerts>;

fn dispatcher() -> (Dispatcher, ChannelTransport, RecordingAlerts) {
    let transport = ChannelTransport::default();
    let alerts = RecordingAlerts::default();
    let live = LiveDispatcher::new(transport.clone(), QueryCache::new(StubViews), alerts.clone());
    (live, transport, alerts)
}

fn admin() -> Identity {
    Identity::new("u1", "admin")
}

async fn eventually(what: &str, condition: impl Fn() -> bool) {
    let wait = async {
        while !condition() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    };
    tokio::time::timeout(Duration::from_secs(2), wait)
        .await
        .unwrap_or_else(|_| panic!("timed out waiting for {what}"));
}

// ── Connection lifecycle ───────────────────────────────────────────

#[tokio::test]
async fn connect_is_idempotent_for_same_identity() {
    let (live, transport, _alerts) = dispatcher();

    let first = live.connect(admin()).unwrap();
    let second = live.connect(admin()).unwrap();

    assert_eq!(first, second);
    assert_eq!(transport.open_count(), 1);
    assert_eq!(live.connection_id(), Some(first));
}

#[tokio::test]
async fn incomplete_identity_does_not_connect() {
    let (live, transport, _alerts) = dispatcher();

    let err = live.connect(Identity::new("u1", "")).unwrap_err();

    assert!(matches!(err, LiveError::IdentityIncomplete));
    assert_eq!(transport.open_count(), 0);
    assert!(!live.is_connected());
}

#[tokio::test]
async fn new_identity_replaces_open_channel() {
    let (live, transport, _alerts) = dispatcher();

    let first = live.connect(admin()).unwrap();
    let second = live.connect(Identity::new("u2", "viewer")).unwrap();

    assert_ne!(first, second);
    assert_eq!(transport.open_count(), 2);
    let old = transport.sender(0);
    eventually("old channel to close", || old.is_closed()).await;
    assert!(!transport.sender(1).is_closed());
}

#[tokio::test]
async fn disconnect_closes_channel_and_allows_reconnect() {
    let (live, transport, alerts) = dispatcher();

    let first = live.connect(admin()).unwrap();
    live.disconnect();
    assert!(!live.is_connected());

    let old = transport.sender(0);
    eventually("channel to close", || old.is_closed()).await;
    assert!(old.unbounded_send(Ok(PushEvent::new("late"))).is_err());
    assert!(alerts.toasts.lock().is_empty());

    let second = live.connect(admin()).unwrap();
    assert_ne!(first, second);
    assert_eq!(transport.open_count(), 2);
}

#[tokio::test]
async fn server_close_is_not_retried() {
    let (live, transport, _alerts) = dispatcher();
    live.connect(admin()).unwrap();

    transport.opened.lock().clear();
    eventually("dispatcher to notice the close", || !live.is_connected()).await;
    assert_eq!(transport.open_count(), 0);

    live.connect(admin()).unwrap();
    assert_eq!(transport.open_count(), 1);
}

#[tokio::test]
async fn channel_error_marks_connection_closed() {
    let (live, transport, alerts) = dispatcher();
    live.connect(admin()).unwrap();

    transport
        .sender(0)
        .unbounded_send(Err(LiveError::Stream("reset by peer".into())))
        .unwrap();

    eventually("dispatcher to notice the error", || !live.is_connected()).await;
    assert!(alerts.toasts.lock().is_empty());
}

// ── Push fan-out ───────────────────────────────────────────────────

#[tokio::test]
async fn push_refetches_mounted_views_and_alerts_once() {
    let (live, transport, alerts) = dispatcher();
    let unread = QueryKey::Notifications(NotificationFilter::Unread);
    let cache = live.refetcher();
    cache.mount(QueryKey::NotificationCount);
    cache.mount(unread);
    cache.mount(QueryKey::Drawings);

    live.connect(admin()).unwrap();
    transport
        .sender(0)
        .unbounded_send(Ok(PushEvent::new("Submittal S-12 approved")))
        .unwrap();

    eventually("mounted views to refetch", || {
        cache.fetch_count(QueryKey::NotificationCount) == 1 && cache.fetch_count(unread) == 1
    })
    .await;

    assert_eq!(*alerts.toasts.lock(), vec!["Submittal S-12 approved".to_string()]);
    assert_eq!(alerts.sounds.load(Ordering::SeqCst), 1);
    assert_eq!(cache.value(QueryKey::NotificationCount), Some(Value::from(1)));
    assert_eq!(cache.fetch_count(QueryKey::Drawings), 0);
    assert_eq!(cache.fetch_count(QueryKey::Submittals), 0);
    assert_eq!(
        cache.fetch_count(QueryKey::Notifications(NotificationFilter::All)),
        0
    );
}

#[tokio::test]
async fn each_event_alerts_once() {
    let (live, _transport, alerts) = dispatcher();

    live.on_push(&PushEvent::new("one")).await;
    live.on_push(&PushEvent::new("two")).await;

    assert_eq!(*alerts.toasts.lock(), vec!["one".to_string(), "two".to_string()]);
    assert_eq!(alerts.sounds.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn unmounted_views_are_not_refetched() {
    let (live, _transport, _alerts) = dispatcher();
    let cache = live.refetcher();
    cache.mount(QueryKey::Submittals);
    cache.unmount(QueryKey::Submittals);

    live.on_push(&PushEvent::new("ping")).await;

    for key in QueryKey::PUSH_FANOUT {
        assert_eq!(cache.fetch_count(key), 0, "{key} should not refetch");
    }
}

#[tokio::test]
async fn unmounted_view_goes_stale_and_refreshes_on_remount() {
    let (live, _transport, _alerts) = dispatcher();
    let read = QueryKey::Notifications(NotificationFilter::Read);
    let cache = live.refetcher();
    cache.mount_and_refresh(read).await.unwrap();
    cache.unmount(read);

    live.on_push(&PushEvent::new("RFI 7 answered")).await;

    assert!(cache.is_stale(read));
    assert_eq!(cache.fetch_count(read), 1);
    assert!(!cache.is_stale(QueryKey::Submittals), "never fetched, nothing to refresh");

    cache.mount_and_refresh(read).await.unwrap();
    assert!(!cache.is_stale(read));
    assert_eq!(cache.fetch_count(read), 2);
}

#[tokio::test]
async fn dropping_last_handle_closes_channel() {
    let (live, transport, _alerts) = dispatcher();
    let spare = live.clone();
    live.connect(admin()).unwrap();

    drop(live);
    let sender = transport.sender(0);
    assert!(!sender.is_closed(), "a clone still holds the connection");

    drop(spare);
    eventually("channel to close", || sender.is_closed()).await;
}

#[tokio::test]
async fn first_gesture_primes_sound() {
    let (live, _transport, alerts) = dispatcher();

    assert!(live.on_user_gesture());
    assert!(!live.on_user_gesture());
    assert_eq!(alerts.primed.load(Ordering::SeqCst), 1);
}
