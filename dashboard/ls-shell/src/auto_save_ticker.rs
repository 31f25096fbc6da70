use crate::ShellEvent;

use std::time::Duration;

use log::{debug, info};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Fixed-interval timer that posts [`ShellEvent::AutoSaveTick`].
///
/// The first tick fires one full interval after [`start`](Self::start).
pub struct AutoSaveTicker {
    interval: Duration,
    events: mpsc::Sender<ShellEvent>,
    task: Option<JoinHandle<()>>,
}

impl AutoSaveTicker {
    pub fn new(interval: Duration, events: mpsc::Sender<ShellEvent>) -> Self {
        Self {
            interval,
            events,
            task: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start ticking, replacing any running timer.
    pub fn start(&mut self) {
        self.stop();

        let period = self.interval;
        let events = self.events.clone();
        self.task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if events.send(ShellEvent::AutoSaveTick).await.is_err() {
                    debug!("Shell event receiver dropped; auto-save ticker exiting");
                    return;
                }
            }
        }));

        info!("Auto-save started (every {}ms)", period.as_millis());
    }

    /// Stop ticking. No-op when idle.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            info!("Auto-save stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.task
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }
}

impl Drop for AutoSaveTicker {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
