use crate::error::Result as RealtimeResult;

use async_trait::async_trait;
use futures::stream::BoxStream;

/// Something read from an open connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    Text(String),
    Error(String),
}

/// Inbound events of one connection; the stream ending means closed.
pub type TransportStream = BoxStream<'static, TransportEvent>;

/// Opens connections to the event source.
#[async_trait]
pub trait EventTransport: Send + Sync + 'static {
    async fn connect(&self, url: &str) -> RealtimeResult<TransportStream>;
}
