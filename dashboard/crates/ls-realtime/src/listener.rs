//! Realtime event listener.
//!
//! One actor task owns the connection state machine:
//!
//! ```text
//! Disconnected → Connecting → Connected → Disconnected → (reconnect delay) → Connecting ...
//! ```
//!
//! Connection tasks and the reconnect timer only post signals back to the
//! actor. Every connection attempt gets a new generation number and signals
//! from older generations are dropped, so a superseded socket can never
//! change state or schedule a second reconnect.

use crate::{
    ConnectionState, EventTransport, InboundMessage, ListenerEvent, ReconnectTimer,
    TransportEvent,
};

use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use log::{debug, info, warn};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

#[derive(Debug)]
pub(crate) enum Signal {
    Opened { generation: u64 },
    Message { generation: u64, text: String },
    Error { generation: u64, message: String },
    Closed { generation: u64 },
    ReconnectDue { generation: u64 },
}

/// Handle to the running listener.
///
/// Dropping the handle tears the listener down like [`dispose`](Self::dispose)
/// without waiting for it.
pub struct RealtimeListener {
    state_rx: watch::Receiver<ConnectionState>,
    task: Option<JoinHandle<()>>,
}

impl RealtimeListener {
    /// Start connecting to `url` immediately.
    ///
    /// Activities, snapshots and state changes are sent to `events`.
    pub fn start(
        transport: Arc<dyn EventTransport>,
        url: impl Into<String>,
        reconnect_delay: Duration,
        events: mpsc::Sender<ListenerEvent>,
    ) -> Self {
        Self::spawn(transport, url.into(), reconnect_delay, events).0
    }

    /// Start the actor and also hand back its signal inbox.
    pub(crate) fn spawn(
        transport: Arc<dyn EventTransport>,
        url: String,
        reconnect_delay: Duration,
        events: mpsc::Sender<ListenerEvent>,
    ) -> (Self, mpsc::UnboundedSender<Signal>) {
        let (state_tx, state_rx) = watch::channel(ConnectionState::Disconnected);
        let (signals_tx, signals_rx) = mpsc::unbounded_channel();

        let actor = ListenerActor {
            transport,
            url,
            events,
            signals_tx: signals_tx.clone(),
            state_tx,
            reconnect: ReconnectTimer::new(reconnect_delay),
            generation: 0,
            connection: None,
        };

        let task = tokio::spawn(actor.run(signals_rx));

        let listener = Self {
            state_rx,
            task: Some(task),
        };
        (listener, signals_tx)
    }

    pub fn state(&self) -> ConnectionState {
        *self.state_rx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<ConnectionState> {
        self.state_rx.clone()
    }

    pub fn is_running(&self) -> bool {
        self.task
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    /// Close the connection and cancel any pending reconnect.
    ///
    /// Nothing is sent to the event channel once this returns. Idempotent.
    pub async fn dispose(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            let _ = task.await;
            info!("Realtime listener disposed");
        }
    }
}

impl Drop for RealtimeListener {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

struct ListenerActor {
    transport: Arc<dyn EventTransport>,
    url: String,
    events: mpsc::Sender<ListenerEvent>,
    signals_tx: mpsc::UnboundedSender<Signal>,
    state_tx: watch::Sender<ConnectionState>,
    reconnect: ReconnectTimer,
    generation: u64,
    connection: Option<JoinHandle<()>>,
}

impl ListenerActor {
    async fn run(mut self, mut signals_rx: mpsc::UnboundedReceiver<Signal>) {
        self.connect().await;

        // The actor holds a sender itself, so this only ends on abort.
        while let Some(signal) = signals_rx.recv().await {
            match signal {
                Signal::Opened { generation } if generation == self.generation => {
                    self.on_open().await;
                }
                Signal::Message { generation, text } if generation == self.generation => {
                    self.on_message(&text).await;
                }
                Signal::Error {
                    generation,
                    message,
                } if generation == self.generation => {
                    warn!("Realtime connection error: {message}");
                }
                Signal::Closed { generation } if generation == self.generation => {
                    self.on_close().await;
                }
                Signal::ReconnectDue { generation }
                    if generation == self.generation && self.is_disconnected() =>
                {
                    self.connect().await;
                }
                stale => debug!("Ignoring stale signal {stale:?}"),
            }
        }
    }

    async fn connect(&mut self) {
        if let Some(previous) = self.connection.take() {
            previous.abort();
        }

        self.generation += 1;
        let generation = self.generation;
        self.set_state(ConnectionState::Connecting).await;
        info!("Connecting to {} (attempt #{generation})", self.url);

        let transport = Arc::clone(&self.transport);
        let url = self.url.clone();
        let signals = self.signals_tx.clone();

        self.connection = Some(tokio::spawn(async move {
            match transport.connect(&url).await {
                Ok(mut stream) => {
                    let _ = signals.send(Signal::Opened { generation });
                    while let Some(event) = stream.next().await {
                        let signal = match event {
                            TransportEvent::Text(text) => Signal::Message { generation, text },
                            TransportEvent::Error(message) => Signal::Error {
                                generation,
                                message,
                            },
                        };
                        if signals.send(signal).is_err() {
                            return;
                        }
                    }
                }
                Err(e) => {
                    let _ = signals.send(Signal::Error {
                        generation,
                        message: e.to_string(),
                    });
                }
            }
            let _ = signals.send(Signal::Closed { generation });
        }));
    }

    async fn on_open(&mut self) {
        self.reconnect.cancel();
        self.set_state(ConnectionState::Connected).await;
        info!("Realtime connection established");
    }

    async fn on_message(&mut self, text: &str) {
        match InboundMessage::parse(text) {
            Ok(InboundMessage::Activity(envelope)) => {
                debug!("Activity received: {}", envelope.kind);
                self.forward(ListenerEvent::Activity(envelope)).await;
            }
            Ok(InboundMessage::InitialData(data)) => {
                self.forward(ListenerEvent::Snapshot(data)).await;
            }
            Ok(InboundMessage::Ignored(kind)) => debug!("Ignoring '{kind}' frame"),
            Err(e) => warn!("Dropping unparseable frame: {e}"),
        }
    }

    async fn on_close(&mut self) {
        self.connection = None;
        self.set_state(ConnectionState::Disconnected).await;

        let generation = self.generation;
        let signals = self.signals_tx.clone();
        self.reconnect.schedule(move || {
            let _ = signals.send(Signal::ReconnectDue { generation });
        });

        info!(
            "Realtime connection closed, reconnecting in {}ms",
            self.reconnect.delay().as_millis()
        );
    }

    fn is_disconnected(&self) -> bool {
        *self.state_tx.borrow() == ConnectionState::Disconnected
    }

    async fn set_state(&mut self, state: ConnectionState) {
        let previous = self.state_tx.send_replace(state);
        if previous != state {
            self.forward(ListenerEvent::StateChanged(state)).await;
        }
    }

    async fn forward(&self, event: ListenerEvent) {
        if self.events.send(event).await.is_err() {
            debug!("Event receiver dropped; discarding event");
        }
    }
}

impl Drop for ListenerActor {
    fn drop(&mut self) {
        if let Some(connection) = self.connection.take() {
            connection.abort();
        }
        self.reconnect.cancel();
        self.state_tx.send_replace(ConnectionState::Disconnected);
    }
}
