//! The dashboard shell: one context object owning all mutable UI state.
//!
//! Producers (realtime listener, auto-save ticker, host commands) only send
//! [`ShellEvent`]s. The shell handles them one at a time, each to completion.

use crate::{
    AutoSaveTicker, ColorScheme, Result as ShellResult, ShellCommand, ShellEvent, ShutdownGuard,
    ThemeApplier,
};

use ls_config::Config;
use ls_core::{
    ActiveView, ActivityEnvelope, ActivityKind, AutoSaveSnapshot, NotificationList,
    PreferenceChange, Preferences, Session, build_notification,
};
use ls_realtime::{ConnectionState, EventTransport, ListenerEvent, RealtimeListener};
use ls_store::PreferenceStore;

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local, Utc};
use log::{debug, info, warn};
use serde_json::Value;
use tokio::sync::{mpsc, watch};

const AUTO_SAVE_ACTOR: &str = "System";
const SAVED_AT_FORMAT: &str = "%H:%M:%S";
const COMMAND_BUFFER_SIZE: usize = 64;

/// Runtime settings taken from [`Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellOptions {
    pub websocket_url: String,
    pub reconnect_delay: Duration,
    pub auto_save_interval: Duration,
    pub event_buffer_size: usize,
}

impl ShellOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            websocket_url: config.server.websocket_url(),
            reconnect_delay: config.realtime.reconnect_delay(),
            auto_save_interval: config.auto_save.interval(),
            event_buffer_size: config.realtime.event_buffer_size,
        }
    }
}

pub struct DashboardShell {
    options: ShellOptions,
    store: PreferenceStore,
    transport: Arc<dyn EventTransport>,

    prefs: Preferences,
    session: Option<Session>,
    active_view: ActiveView,
    notifications: NotificationList,
    connection: ConnectionState,
    dashboard_snapshot: Option<Value>,

    theme: ThemeApplier,
    ticker: AutoSaveTicker,
    listener: Option<RealtimeListener>,

    events_tx: mpsc::Sender<ShellEvent>,
    events_rx: mpsc::Receiver<ShellEvent>,
    listener_rx: Option<mpsc::Receiver<ListenerEvent>>,

    initialized: bool,
    disposed: bool,
}

impl DashboardShell {
    pub fn new(
        options: ShellOptions,
        store: PreferenceStore,
        transport: Arc<dyn EventTransport>,
        os_scheme: watch::Receiver<ColorScheme>,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::channel(COMMAND_BUFFER_SIZE);
        let ticker = AutoSaveTicker::new(options.auto_save_interval, events_tx.clone());

        Self {
            options,
            store,
            transport,
            prefs: Preferences::default(),
            session: None,
            active_view: ActiveView::default(),
            notifications: NotificationList::new(),
            connection: ConnectionState::Disconnected,
            dashboard_snapshot: None,
            theme: ThemeApplier::new(os_scheme),
            ticker,
            listener: None,
            events_tx,
            events_rx,
            listener_rx: None,
            initialized: false,
            disposed: false,
        }
    }

    /// Restore persisted state, apply the theme, open the realtime stream
    /// and start auto-save when enabled. Calling it again is a no-op.
    pub fn init(&mut self) -> ShellResult<()> {
        if self.initialized || self.disposed {
            return Ok(());
        }

        self.prefs = self.store.get_all();
        self.session = match self.store.load_session() {
            Ok(session) => session,
            Err(e) => {
                warn!("Failed to restore session: {e}");
                None
            }
        };
        if let Some(session) = &self.session {
            self.active_view = session.landing_view();
        }

        self.theme.apply(self.prefs.theme);

        let (listener_tx, listener_rx) = mpsc::channel(self.options.event_buffer_size.max(1));
        self.listener = Some(RealtimeListener::start(
            Arc::clone(&self.transport),
            self.options.websocket_url.clone(),
            self.options.reconnect_delay,
            listener_tx,
        ));
        self.listener_rx = Some(listener_rx);

        self.sync_auto_save(false);
        self.initialized = true;

        info!(
            "Dashboard shell initialized (view={}, theme={}, auto_save={})",
            self.active_view, self.prefs.theme, self.prefs.auto_save_enabled
        );
        Ok(())
    }

    /// Stop the ticker, the listener and the theme follower. Nothing is
    /// handled afterwards. Idempotent.
    pub async fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;

        self.ticker.stop();
        if let Some(mut listener) = self.listener.take() {
            listener.dispose().await;
        }
        self.listener_rx = None;
        self.theme.dispose();
        self.connection = ConnectionState::Disconnected;

        info!("Dashboard shell disposed");
    }

    /// Handle events until shutdown, then dispose.
    pub async fn run(&mut self, mut shutdown: ShutdownGuard) {
        loop {
            let event = tokio::select! {
                _ = shutdown.wait() => None,
                event = self.next_event() => event,
            };
            let Some(event) = event else {
                break;
            };
            self.dispatch(event);
        }

        self.dispose().await;
    }

    /// Next event from the listener, the ticker or the host.
    pub async fn next_event(&mut self) -> Option<ShellEvent> {
        let listener_rx = self.listener_rx.as_mut();
        tokio::select! {
            Some(event) = self.events_rx.recv() => Some(event),
            Some(event) = async move {
                match listener_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => Some(ShellEvent::Listener(event)),
            else => None,
        }
    }

    /// Handle one event, logging a failure instead of propagating it.
    pub fn dispatch(&mut self, event: ShellEvent) {
        if let Err(e) = self.handle(event) {
            warn!("Shell event failed: {e}");
        }
    }

    pub fn handle(&mut self, event: ShellEvent) -> ShellResult<()> {
        if self.disposed {
            debug!("Shell disposed; ignoring {event:?}");
            return Ok(());
        }

        let now = Utc::now();
        match event {
            ShellEvent::Listener(ListenerEvent::Activity(envelope)) => {
                self.push_activity(envelope, now);
            }
            ShellEvent::Listener(ListenerEvent::Snapshot(data)) => {
                debug!("Dashboard snapshot received");
                self.dashboard_snapshot = Some(data);
            }
            ShellEvent::Listener(ListenerEvent::StateChanged(state)) => {
                info!("Realtime connection {state}");
                self.connection = state;
            }
            ShellEvent::AutoSaveTick => self.on_auto_save_tick(now)?,
            ShellEvent::Command(command) => self.on_command(command)?,
        }

        Ok(())
    }

    /// Sender for host commands.
    pub fn events(&self) -> mpsc::Sender<ShellEvent> {
        self.events_tx.clone()
    }

    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    pub fn notifications(&self) -> &NotificationList {
        &self.notifications
    }

    /// Notifications with relative times recomputed for display.
    pub fn refresh_notifications(&mut self) -> &NotificationList {
        self.notifications.refresh_relative_times(Utc::now());
        &self.notifications
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn dark_mode(&self) -> watch::Receiver<bool> {
        self.theme.subscribe()
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.connection
    }

    pub fn dashboard_snapshot(&self) -> Option<&Value> {
        self.dashboard_snapshot.as_ref()
    }

    pub fn active_view(&self) -> ActiveView {
        self.active_view
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn store(&self) -> &PreferenceStore {
        &self.store
    }

    pub fn is_auto_saving(&self) -> bool {
        self.ticker.is_running()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn push_activity(&mut self, envelope: ActivityEnvelope, now: DateTime<Utc>) {
        let notification = build_notification(envelope, now);
        debug!("Notification #{}: {}", notification.id, notification.title);
        self.notifications.push(notification);
    }

    fn on_auto_save_tick(&mut self, now: DateTime<Utc>) -> ShellResult<()> {
        // A tick queued before auto-save was switched off
        if !self.prefs.auto_save_enabled {
            return Ok(());
        }

        let snapshot = AutoSaveSnapshot::capture(self.active_view, now);
        self.store.save_snapshot(&snapshot)?;
        debug!("Auto-saved view '{}'", self.active_view);

        if self.prefs.notifications_enabled {
            let saved_at = now
                .with_timezone(&Local)
                .format(SAVED_AT_FORMAT)
                .to_string();
            let envelope = ActivityEnvelope::new(ActivityKind::AutoSave)
                .with_actor(AUTO_SAVE_ACTOR)
                .with_detail("savedAt", saved_at)
                .occurred_at(now);
            self.push_activity(envelope, now);
        }

        Ok(())
    }

    fn on_command(&mut self, command: ShellCommand) -> ShellResult<()> {
        match command {
            ShellCommand::SetPreference(PreferenceChange::TwoFactor(true))
                if !self.prefs.two_factor_enabled =>
            {
                warn!("Two-factor auth is only enabled after a confirmed server setup");
            }
            ShellCommand::SetPreference(change) => {
                let auto_save_toggled = matches!(change, PreferenceChange::AutoSave(_));
                self.prefs = self.store.update(change)?;
                self.theme.apply(self.prefs.theme);
                if auto_save_toggled {
                    self.sync_auto_save(true);
                }
            }
            ShellCommand::SaveSettings(mut prefs) => {
                if prefs.two_factor_enabled && !self.prefs.two_factor_enabled {
                    warn!("Ignoring unconfirmed two-factor flag in saved settings");
                    prefs.two_factor_enabled = false;
                }
                self.replace_preferences(prefs)?;
                info!("Settings saved");
            }
            ShellCommand::ResetSettings => {
                self.replace_preferences(Preferences::default())?;
                info!("Settings reset to defaults");
            }
            ShellCommand::TwoFactorConfirmed => {
                self.prefs = self.store.update(PreferenceChange::TwoFactor(true))?;
                info!("Two-factor auth enabled");
            }
            ShellCommand::Navigate(view) => {
                debug!("Navigated to {view}");
                self.active_view = view;
            }
            ShellCommand::MarkRead(id) => self.notifications.mark_read(id),
            ShellCommand::MarkAllRead => self.notifications.mark_all_read(),
            ShellCommand::ClearNotifications => self.notifications.clear(),
            ShellCommand::SignIn { session, token } => {
                self.store.save_session(&session)?;
                self.store.save_token(&token)?;
                self.active_view = session.landing_view();
                info!(
                    "Signed in as {} ({})",
                    session.display_name(),
                    session.role
                );
                self.session = Some(session);
            }
            ShellCommand::SignOut => {
                self.store.clear_session()?;
                self.session = None;
                self.active_view = ActiveView::default();
                info!("Signed out");
            }
        }

        Ok(())
    }

    /// Run the ticker exactly while auto-save is enabled. `restart` forces a
    /// fresh interval even if it is already running.
    fn replace_preferences(&mut self, prefs: Preferences) -> ShellResult<()> {
        self.store.save_all(&prefs)?;
        self.prefs = prefs;
        self.theme.apply(self.prefs.theme);
        self.sync_auto_save(true);
        Ok(())
    }

    fn sync_auto_save(&mut self, restart: bool) {
        if !self.prefs.auto_save_enabled {
            self.ticker.stop();
        } else if restart || !self.ticker.is_running() {
            self.ticker.start();
        }
    }
}
