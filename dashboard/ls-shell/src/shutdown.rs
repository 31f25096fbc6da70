//! Stop signal for [`DashboardShell::run`](crate::DashboardShell::run).
//!
//! Backed by a `watch` flag rather than a broadcast, so a guard created after
//! the signal fired still sees it.

use std::sync::Arc;

use log::info;
use tokio::sync::watch;

/// Fires once; clones share the same flag.
#[derive(Debug, Clone)]
pub struct ShutdownSignal {
    stopped: Arc<watch::Sender<bool>>,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        let (stopped, _) = watch::channel(false);
        Self {
            stopped: Arc::new(stopped),
        }
    }

    /// Called from the Ctrl-C handler. Repeat calls are no-ops.
    pub fn trigger(&self) {
        if !self.stopped.send_replace(true) {
            info!("Shutdown signal received, stopping the shell");
        }
    }

    pub fn guard(&self) -> ShutdownGuard {
        ShutdownGuard {
            stopped: self.stopped.subscribe(),
        }
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving side handed to the event loop.
#[derive(Debug)]
pub struct ShutdownGuard {
    stopped: watch::Receiver<bool>,
}

impl ShutdownGuard {
    /// Resolves once the signal fires, or at once if every signal is gone.
    pub async fn wait(&mut self) {
        let _ = self.stopped.wait_for(|stopped| *stopped).await;
    }
}
