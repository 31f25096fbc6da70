
use crate::{DashboardShell, ShellOptions, SystemColorScheme};

use ls_realtime::{
    EventTransport, RealtimeError, Result as RealtimeResult, TransportEvent, TransportStream,
};
use ls_store::PreferenceStore;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use futures::channel::mpsc::{UnboundedSender, unbounded};

pub(crate) const AUTO_SAVE_INTERVAL: Duration = Duration::from_secs(30);

/// Hands out queued connections; refuses once the queue is empty.
#[derive(Default)]
pub(crate) struct QueuedTransport {
    accepted: Mutex<VecDeque<TransportStream>>,
}

impl QueuedTransport {
    pub(crate) fn accept(&self) -> UnboundedSender<TransportEvent> {
        let (tx, rx) = unbounded();
        self.accepted.lock().unwrap().push_back(rx.boxed());
        tx
    }
}

#[async_trait]
impl EventTransport for QueuedTransport {
    async fn connect(&self, url: &str) -> RealtimeResult<TransportStream> {
        self.accepted
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| RealtimeError::connect(url, "connection refused"))
    }
}

pub(crate) fn options() -> ShellOptions {
    ShellOptions {
        websocket_url: String::from("ws://localhost:8000/ws/dashboard"),
        reconnect_delay: Duration::from_secs(3),
        auto_save_interval: AUTO_SAVE_INTERVAL,
        event_buffer_size: 16,
    }
}

pub(crate) fn shell_with(
    store: PreferenceStore,
    transport: Arc<QueuedTransport>,
) -> (DashboardShell, SystemColorScheme) {
    let scheme = SystemColorScheme::default();
    let shell = DashboardShell::new(options(), store, transport, scheme.subscribe());
    (shell, scheme)
}
