use std::time::Duration;

use tokio::task::JoinHandle;

/// One-shot, cancellable delay before the next connection attempt.
///
/// At most one attempt is ever pending: scheduling aborts the previous one.
#[derive(Debug)]
pub struct ReconnectTimer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl ReconnectTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run `on_elapsed` once the delay has passed, unless cancelled first.
    pub fn schedule<F>(&mut self, on_elapsed: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();

        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            on_elapsed();
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|pending| !pending.is_finished())
    }
}

impl Drop for ReconnectTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
