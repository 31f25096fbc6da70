
use crate::{EventTransport, RealtimeError, Result as RealtimeResult, TransportEvent, TransportStream};

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use futures::StreamExt;
use futures::channel::mpsc::{UnboundedSender, unbounded};

/// Transport whose connections are handed out from a script.
///
/// Each scripted `accept()` yields a sender feeding that connection; dropping
/// it closes the connection. With the script exhausted, connects are refused.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    accepted: Mutex<VecDeque<TransportStream>>,
    connects: AtomicUsize,
}

impl ScriptedTransport {
    pub(crate) fn accept(&self) -> UnboundedSender<TransportEvent> {
        let (tx, rx) = unbounded();
        self.accepted.lock().unwrap().push_back(rx.boxed());
        tx
    }

    pub(crate) fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EventTransport for ScriptedTransport {
    async fn connect(&self, url: &str) -> RealtimeResult<TransportStream> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        self.accepted
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| RealtimeError::connect(url, "connection refused"))
    }
}

pub(crate) fn activity_frame(kind: &str, details: serde_json::Value) -> TransportEvent {
    TransportEvent::Text(
        serde_json::json!({
            "type": "activity",
            "data": { "type": kind, "user_name": "Dr. Sara Khan", "details": details }
        })
        .to_string(),
    )
}
