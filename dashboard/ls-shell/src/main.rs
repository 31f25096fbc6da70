use ls_client::ApiClient;
use ls_realtime::WebSocketTransport;
use ls_shell::{
    ColorScheme, DashboardShell, ShellOptions, ShutdownSignal, SystemColorScheme, logger,
};
use ls_store::{LocalStore, PreferenceStore};

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = ls_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting livestocksync-shell v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let storage_path = config.storage_path()?;
    let local_store = LocalStore::open(&storage_path)?;
    if let Some(backup) = local_store.corrupted_backup() {
        warn!("Preference file was corrupt; backed up to {}", backup.display());
    }
    let store = PreferenceStore::new(local_store);
    info!("Preferences: {}", storage_path.display());

    // One-shot stats fetch; the dashboard stays usable without it
    let mut client = ApiClient::new(
        &config.server.api_base_url,
        config.server.request_timeout(),
    )?;
    if let Some(token) = store.token() {
        client = client.with_token(token);
    }
    match client.dashboard_stats().await {
        Ok(stats) => info!("Dashboard stats: {stats}"),
        Err(e) => warn!("Could not fetch dashboard stats: {e}"),
    }

    let system_scheme =
        SystemColorScheme::new(ColorScheme::from_prefers_dark(config.theme.os_prefers_dark));

    let mut shell = DashboardShell::new(
        ShellOptions::from_config(&config),
        store,
        Arc::new(WebSocketTransport::new()),
        system_scheme.subscribe(),
    );
    shell.init()?;

    let shutdown = ShutdownSignal::new();
    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), shutting down");
                shutdown_for_signal.trigger();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {e}");
            }
        }
    });

    shell.run(shutdown.guard()).await;
    info!("Shutdown complete");

    Ok(())
}
