//! The push channel.

use futures::stream::{self, BoxStream, StreamExt};
use reqwest_eventsource::{Event, EventSource};
use site_config::SitelineConfig;
use site_core::entities::PushEvent;

use crate::error::LiveError;
use crate::Identity;

/// Stream of events delivered on one open channel. It ends when the
/// channel closes and yields at most one error, as its last item.
pub type PushStream = BoxStream<'static, Result<PushEvent, LiveError>>;

/// Opens push channels for an identity.
pub trait PushTransport: Send + Sync + 'static {
    /// Open a channel for `identity`. Dropping the stream closes it.
    ///
    /// # Errors
    ///
    /// Returns [`LiveError::Connect`] if the channel request cannot be built.
    fn open(&self, identity: &Identity) -> Result<PushStream, LiveError>;
}

/// Event name carrying dashboard updates.
pub const PUSH_EVENT: &str = "push";

/// Push channel over Server-Sent Events.
///
/// Connects to `GET {endpoint}?userId=..&role=..` and forwards only
/// events named [`PUSH_EVENT`]. Events whose payload does not parse are
/// skipped.
#[derive(Debug, Clone)]
pub struct SseTransport {
    http: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl SseTransport {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            token: None,
        }
    }

    /// Transport for the configured push endpoint, sending the API token.
    #[must_use]
    pub fn from_config(config: &SitelineConfig) -> Self {
        let transport = Self::new(config.push.endpoint(config.api.base()));
        if config.api.token.is_empty() {
            transport
        } else {
            transport.with_token(config.api.token.clone())
        }
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PushTransport for SseTransport {
    fn open(&self, identity: &Identity) -> Result<PushStream, LiveError> {
        let mut request = self.http.get(&self.endpoint).query(&[
            ("userId", identity.user_id.as_str()),
            ("role", identity.role.as_str()),
        ]);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let source = EventSource::new(request).map_err(|e| LiveError::Connect(e.to_string()))?;
        tracing::debug!(endpoint = %self.endpoint, user_id = %identity.user_id, "opening push channel");
        Ok(push_events(source))
    }
}

/// Adapt an [`EventSource`] into a [`PushStream`].
///
/// The first transport error ends the stream; the source is closed rather
/// than left to retry.
fn push_events(source: EventSource) -> PushStream {
    stream::unfold(Some(source), |state| async move {
        let mut source = state?;
        loop {
            match source.next().await {
                Some(Ok(Event::Open)) => tracing::debug!("push channel open"),
                Some(Ok(Event::Message(message))) => {
                    if message.event != PUSH_EVENT {
                        tracing::trace!(event = %message.event, "ignoring channel event");
                        continue;
                    }
                    match serde_json::from_str::<PushEvent>(&message.data) {
                        Ok(event) => return Some((Ok(event), Some(source))),
                        Err(e) => tracing::warn!(error = %e, "malformed push event"),
                    }
                }
                Some(Err(reqwest_eventsource::Error::StreamEnded)) | None => {
                    source.close();
                    return None;
                }
                Some(Err(e)) => {
                    source.close();
                    return Some((Err(LiveError::Stream(e.to_string())), None));
                }
            }
        }
    })
    .boxed()
}
