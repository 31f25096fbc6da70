//! Light/dark visual mode.
//!
//! The applier owns the single dark-mode flag. In `auto` it follows the OS
//! colour-scheme signal through one spawned task, which is aborted as soon
//! as another theme is applied or the applier is disposed.

use crate::ColorScheme;

use ls_core::Theme;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::debug;
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub struct ThemeApplier {
    dark_tx: Arc<watch::Sender<bool>>,
    os_scheme: watch::Receiver<ColorScheme>,
    applied: Option<Theme>,
    follower: Option<Follower>,
}

struct Follower {
    active: Arc<AtomicBool>,
    task: JoinHandle<()>,
}

impl ThemeApplier {
    pub fn new(os_scheme: watch::Receiver<ColorScheme>) -> Self {
        let (dark_tx, _) = watch::channel(false);
        Self {
            dark_tx: Arc::new(dark_tx),
            os_scheme,
            applied: None,
            follower: None,
        }
    }

    /// Set the visual mode for `theme`. Re-applying the current theme is a
    /// no-op.
    pub fn apply(&mut self, theme: Theme) {
        if self.applied == Some(theme) {
            return;
        }
        self.stop_following();
        self.applied = Some(theme);

        match theme {
            Theme::Dark => self.set_dark(true),
            Theme::Light => self.set_dark(false),
            Theme::Auto => {
                let mut os_scheme = self.os_scheme.clone();
                let scheme = *os_scheme.borrow_and_update();
                self.set_dark(scheme.is_dark());

                let dark_tx = Arc::clone(&self.dark_tx);
                let active = Arc::new(AtomicBool::new(true));
                let still_active = Arc::clone(&active);
                let task = tokio::spawn(async move {
                    while os_scheme.changed().await.is_ok() {
                        let scheme = *os_scheme.borrow_and_update();
                        debug!("OS colour scheme changed to {scheme:?}");
                        // Checked under the flag's lock so a write never
                        // lands after the applier switched themes.
                        dark_tx.send_if_modified(|dark| {
                            if !still_active.load(Ordering::SeqCst) || *dark == scheme.is_dark() {
                                return false;
                            }
                            *dark = scheme.is_dark();
                            true
                        });
                    }
                });
                self.follower = Some(Follower { active, task });
            }
        }

        debug!("Theme applied: {theme}");
    }

    pub fn is_dark(&self) -> bool {
        *self.dark_tx.borrow()
    }

    /// Observe the dark-mode flag.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.dark_tx.subscribe()
    }

    pub fn applied(&self) -> Option<Theme> {
        self.applied
    }

    pub fn is_following_os(&self) -> bool {
        self.follower
            .as_ref()
            .is_some_and(|follower| !follower.task.is_finished())
    }

    /// Stop following the OS signal. The flag keeps its last value.
    pub fn dispose(&mut self) {
        self.stop_following();
        self.applied = None;
    }

    fn set_dark(&self, dark: bool) {
        self.dark_tx.send_if_modified(|current| {
            let changed = *current != dark;
            *current = dark;
            changed
        });
    }

    fn stop_following(&mut self) {
        if let Some(follower) = self.follower.take() {
            follower.active.store(false, Ordering::SeqCst);
            follower.task.abort();
        }
    }
}

impl Drop for ThemeApplier {
    fn drop(&mut self) {
        self.stop_following();
    }
}
