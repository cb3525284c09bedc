//! Realtime event subscription registry.
//!
//! Attaches typed callbacks to named channels on a single persistent
//! websocket connection. A caller supplies only the callbacks it wants at
//! construction; unset channels never fire. Connect and disconnect are
//! explicit, idempotent operations -- there is no buffering, no replay,
//! and no automatic reconnect. Frames in flight during a disconnect are
//! dropped silently.
//!
//! # Example
//!
//! ```rust,ignore
//! use pressa_api::{EventCallbacks, MachineClient};
//!
//! let client = MachineClient::local();
//! let callbacks = EventCallbacks::new()
//!     .on_status(|status| println!("{}: {:.1} bar", status.name, status.sensors.p));
//!
//! let mut stream = client.events(callbacks)?;
//! stream.connect().await?;
//! // ... later
//! stream.disconnect();
//! ```

use std::sync::Arc;

use futures_util::{Stream, StreamExt};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tokio_tungstenite::tungstenite::Message;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::client::MachineClient;
use crate::error::Error;
use crate::models::machine::MachineInfo;
use crate::models::notification::Notification;
use crate::models::profile::ProfileUpdate;
use crate::models::telemetry::{Actuators, Communication, StatusData, Temperatures};

// ── Channel names ────────────────────────────────────────────────────

/// Realtime channel names, exactly as they appear on the wire.
pub mod channel {
    pub const STATUS: &str = "status";
    pub const SENSORS: &str = "sensors";
    pub const COMMUNICATION: &str = "communication";
    pub const ACTUATORS: &str = "actuators";
    pub const INFO: &str = "info";
    pub const PROFILE: &str = "profile";
    pub const NOTIFICATION: &str = "notification";
}

// ── Callback registry ────────────────────────────────────────────────

type Callback<T> = Box<dyn Fn(T) + Send + Sync>;

/// Per-channel callbacks, fixed at construction.
///
/// Each setter consumes and returns the registry, so a caller chains
/// exactly the channels it cares about. Reconnecting re-attaches this
/// same set -- callbacks cannot be added or removed after construction.
#[derive(Default)]
pub struct EventCallbacks {
    on_status: Option<Callback<StatusData>>,
    on_temperatures: Option<Callback<Temperatures>>,
    on_communication: Option<Callback<Communication>>,
    on_actuators: Option<Callback<Actuators>>,
    on_machine_info: Option<Callback<MachineInfo>>,
    on_profile_update: Option<Callback<ProfileUpdate>>,
    on_notification: Option<Callback<Notification>>,
}

impl EventCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Machine state ticks (`status` channel).
    pub fn on_status(mut self, f: impl Fn(StatusData) + Send + Sync + 'static) -> Self {
        self.on_status = Some(Box::new(f));
        self
    }

    /// Thermal probe readings (`sensors` channel).
    pub fn on_temperatures(mut self, f: impl Fn(Temperatures) + Send + Sync + 'static) -> Self {
        self.on_temperatures = Some(Box::new(f));
        self
    }

    /// Controller-bus counters (`communication` channel).
    pub fn on_communication(mut self, f: impl Fn(Communication) + Send + Sync + 'static) -> Self {
        self.on_communication = Some(Box::new(f));
        self
    }

    /// Motor and heater state (`actuators` channel).
    pub fn on_actuators(mut self, f: impl Fn(Actuators) + Send + Sync + 'static) -> Self {
        self.on_actuators = Some(Box::new(f));
        self
    }

    /// Device info announcements (`info` channel).
    pub fn on_machine_info(mut self, f: impl Fn(MachineInfo) + Send + Sync + 'static) -> Self {
        self.on_machine_info = Some(Box::new(f));
        self
    }

    /// Profile change announcements (`profile` channel).
    pub fn on_profile_update(mut self, f: impl Fn(ProfileUpdate) + Send + Sync + 'static) -> Self {
        self.on_profile_update = Some(Box::new(f));
        self
    }

    /// New device notifications (`notification` channel).
    pub fn on_notification(mut self, f: impl Fn(Notification) + Send + Sync + 'static) -> Self {
        self.on_notification = Some(Box::new(f));
        self
    }
}

// ── Frame dispatch ───────────────────────────────────────────────────

/// Envelope carried by every websocket text frame:
/// `{ "event": "<channel>", "data": <payload> }`.
#[derive(Debug, Deserialize)]
struct EventFrame {
    event: String,
    data: serde_json::Value,
}

/// Parse one text frame and invoke the matching callback, if set.
///
/// Malformed frames and unknown channels are logged and skipped; the
/// read loop never stops over a bad payload.
fn dispatch_frame(text: &str, callbacks: &EventCallbacks) {
    let frame: EventFrame = match serde_json::from_str(text) {
        Ok(frame) => frame,
        Err(e) => {
            tracing::debug!(error = %e, "failed to parse event frame");
            return;
        }
    };

    match frame.event.as_str() {
        channel::STATUS => invoke(&frame.event, frame.data, callbacks.on_status.as_ref()),
        channel::SENSORS => invoke(&frame.event, frame.data, callbacks.on_temperatures.as_ref()),
        channel::COMMUNICATION => {
            invoke(&frame.event, frame.data, callbacks.on_communication.as_ref());
        }
        channel::ACTUATORS => invoke(&frame.event, frame.data, callbacks.on_actuators.as_ref()),
        channel::INFO => invoke(&frame.event, frame.data, callbacks.on_machine_info.as_ref()),
        channel::PROFILE => invoke(&frame.event, frame.data, callbacks.on_profile_update.as_ref()),
        channel::NOTIFICATION => {
            invoke(&frame.event, frame.data, callbacks.on_notification.as_ref());
        }
        other => tracing::trace!(channel = other, "ignoring frame on unknown channel"),
    }
}

fn invoke<T: DeserializeOwned>(
    chan: &str,
    data: serde_json::Value,
    callback: Option<&Callback<T>>,
) {
    // Unset channels never fire; payloads aren't even deserialized.
    let Some(callback) = callback else {
        return;
    };

    match serde_json::from_value(data) {
        Ok(payload) => callback(payload),
        Err(e) => tracing::debug!(channel = chan, error = %e, "undecodable event payload"),
    }
}

// ── EventStream ──────────────────────────────────────────────────────

/// Handle to the machine's realtime event stream.
///
/// One logical connection per value. Constructed from a
/// [`MachineClient`] via [`MachineClient::events`]; the callbacks live
/// for the lifetime of the stream and are re-attached as-is on every
/// [`connect`](Self::connect).
pub struct EventStream {
    url: Url,
    callbacks: Arc<EventCallbacks>,
    cancel: Option<CancellationToken>,
}

impl MachineClient {
    /// Build an event stream for this machine with the given registry.
    pub fn events(&self, callbacks: EventCallbacks) -> Result<EventStream, Error> {
        EventStream::new(self.base_url(), callbacks)
    }
}

impl EventStream {
    /// Build a stream from the machine base URL (`http` → `ws`).
    pub fn new(base_url: &Url, callbacks: EventCallbacks) -> Result<Self, Error> {
        Ok(Self {
            url: ws_url(base_url)?,
            callbacks: Arc::new(callbacks),
            cancel: None,
        })
    }

    /// The websocket URL this stream connects to.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Whether a connection is currently held.
    pub fn is_connected(&self) -> bool {
        self.cancel.is_some()
    }

    /// Establish the websocket connection and start dispatching frames.
    ///
    /// Idempotent: connecting while connected is a no-op. The read loop
    /// runs on a background task until [`disconnect`](Self::disconnect)
    /// or a server-initiated close; either way, reconnection only ever
    /// happens through an explicit `connect`.
    pub async fn connect(&mut self) -> Result<(), Error> {
        if self.cancel.is_some() {
            return Ok(());
        }

        tracing::info!(url = %self.url, "connecting event stream");

        let (ws_stream, _response) = tokio_tungstenite::connect_async(self.url.as_str())
            .await
            .map_err(|e| Error::EventStream(format!("connect to {}: {e}", self.url)))?;

        let cancel = CancellationToken::new();
        let task_cancel = cancel.clone();
        let callbacks = Arc::clone(&self.callbacks);

        tokio::spawn(async move {
            read_loop(ws_stream, &callbacks, &task_cancel).await;
        });

        self.cancel = Some(cancel);
        Ok(())
    }

    /// Tear down the connection and clear the handle.
    ///
    /// Idempotent: disconnecting while not connected is a no-op. Frames
    /// in flight are dropped with no error raised.
    pub fn disconnect(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            tracing::info!("disconnecting event stream");
            cancel.cancel();
        }
    }
}

impl Drop for EventStream {
    fn drop(&mut self) {
        self.disconnect();
    }
}

/// Derive the websocket URL from the machine base URL.
fn ws_url(base_url: &Url) -> Result<Url, Error> {
    let mut url = base_url
        .join("ws")
        .map_err(|e| Error::EventStream(format!("invalid event stream URL: {e}")))?;

    let scheme = match url.scheme() {
        "https" | "wss" => "wss",
        _ => "ws",
    };
    url.set_scheme(scheme)
        .map_err(|()| Error::EventStream(format!("cannot derive ws scheme for {base_url}")))?;

    Ok(url)
}

// ── Read loop ────────────────────────────────────────────────────────

async fn read_loop<S>(ws_stream: S, callbacks: &EventCallbacks, cancel: &CancellationToken)
where
    S: Stream<Item = Result<Message, tokio_tungstenite::tungstenite::Error>> + Unpin,
{
    let mut read = ws_stream;

    loop {
        tokio::select! {
            biased;
            () = cancel.cancelled() => return,
            frame = read.next() => {
                match frame {
                    Some(Ok(Message::Text(text))) => {
                        dispatch_frame(text.as_str(), callbacks);
                    }
                    Some(Ok(Message::Ping(_))) => {
                        // tungstenite answers pongs on its own
                        tracing::trace!("event stream ping");
                    }
                    Some(Ok(Message::Close(_))) => {
                        tracing::info!("event stream closed by machine");
                        return;
                    }
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "event stream error");
                        return;
                    }
                    None => {
                        tracing::info!("event stream ended");
                        return;
                    }
                    _ => {
                        // Binary, Pong, Frame -- ignore
                    }
                }
            }
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────
