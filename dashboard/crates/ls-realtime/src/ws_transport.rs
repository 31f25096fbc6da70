use crate::error::{RealtimeError, Result as RealtimeResult};
use crate::transport::{EventTransport, TransportEvent, TransportStream};

use async_trait::async_trait;
use futures::StreamExt;
use log::debug;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

/// WebSocket client transport.
///
/// Only text frames are surfaced. A read error is reported once and ends the
/// stream.
#[derive(Debug, Clone, Default)]
pub struct WebSocketTransport;

impl WebSocketTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventTransport for WebSocketTransport {
    async fn connect(&self, url: &str) -> RealtimeResult<TransportStream> {
        let (socket, response) = connect_async(url)
            .await
            .map_err(|e| RealtimeError::connect(url, e.to_string()))?;

        debug!("WebSocket handshake with {url} completed ({})", response.status());

        let stream = futures::stream::unfold(Some(socket), |state| async move {
            let mut socket = state?;
            loop {
                match socket.next().await {
                    Some(Ok(Message::Text(text))) => {
                        return Some((TransportEvent::Text(text.as_str().to_owned()), Some(socket)));
                    }
                    Some(Ok(Message::Close(frame))) => {
                        debug!("Server closed the stream: {frame:?}");
                        return None;
                    }
                    Some(Ok(_)) => continue,
                    Some(Err(e)) => return Some((TransportEvent::Error(e.to_string()), None)),
                    None => return None,
                }
            }
        });

        Ok(stream.boxed())
    }
}
