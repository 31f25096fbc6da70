pub mod connection_state;
pub mod error;
pub mod listener;
pub mod listener_event;
pub mod reconnect_timer;
pub mod transport;
pub mod wire_message;
pub mod ws_transport;

#[cfg(test)]
mod tests;

pub use connection_state::ConnectionState;
pub use error::{RealtimeError, Result};
pub use listener::RealtimeListener;
pub use listener_event::ListenerEvent;
pub use reconnect_timer::ReconnectTimer;
pub use transport::{EventTransport, TransportEvent, TransportStream};
pub use wire_message::InboundMessage;
pub use ws_transport::WebSocketTransport;
