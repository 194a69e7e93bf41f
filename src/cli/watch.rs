//! Watch command implementation

use crate::cli::WatchArgs;
use crate::config::MonitorConfig;
use crate::dashboard::DashboardController;
use crate::logging::{init_tracing, LogTarget};
use crate::poller::StatusPoller;
use crate::status::StatusClient;
use crate::tui::{self, App};
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Load the config file if present, then apply `SPMON_*` overrides
pub fn load_config(path: &Path) -> Result<MonitorConfig, Box<dyn std::error::Error>> {
    let config = if path.exists() {
        MonitorConfig::load(Some(path))?
    } else {
        tracing::debug!("Config file not found, using defaults");
        MonitorConfig::default()
    };

    Ok(config.with_env_overrides())
}

/// Load configuration with CLI overrides
pub fn load_config_with_overrides(
    args: &WatchArgs,
) -> Result<MonitorConfig, Box<dyn std::error::Error>> {
    let mut config = load_config(&args.config)?;

    // CLI overrides (highest priority)
    if let Some(ref url) = args.url {
        config.endpoint.url = url.clone();
    }
    if let Some(interval_ms) = args.interval_ms {
        config.poll.interval_ms = interval_ms;
    }
    if let Some(ref worker) = args.worker {
        config.display.default_worker = worker.clone();
    }
    if let Some(ref log_level) = args.log_level {
        config.logging.level = log_level.clone();
    }

    Ok(config)
}

/// Cancel the token on SIGTERM (Ctrl+C arrives as a key press in raw mode)
async fn shutdown_signal(cancel_token: CancellationToken) {
    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    _ = terminate.recv() => {
                        tracing::info!("Received SIGTERM, shutting down...");
                        cancel_token.cancel();
                    }
                    _ = cancel_token.cancelled() => {}
                }
            }
            Err(e) => tracing::warn!(error = %e, "Failed to install SIGTERM handler"),
        }
    }

    #[cfg(not(unix))]
    cancel_token.cancelled().await;
}

/// Main watch command handler
pub async fn run_watch(args: WatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load and merge configuration
    let config = load_config_with_overrides(&args)?;
    config.validate()?;

    // 2. Logs go to a file; the dashboard owns the terminal
    init_tracing(&config.logging, LogTarget::File)?;

    tracing::info!(url = %config.endpoint.url, "Starting spmon dashboard");
    tracing::debug!(?config, "Loaded configuration");

    // 3. Start the poller
    let client = Arc::new(StatusClient::new(config.endpoint.clone())?);
    let poller = StatusPoller::new(client, config.poll.clone());
    let (tx, rx) = poller.channel();
    let cancel_token = CancellationToken::new();
    let poller_handle = poller.start(tx, cancel_token.clone());
    tokio::spawn(shutdown_signal(cancel_token.clone()));

    // 4. Run the dashboard until quit
    let app = App::new(
        DashboardController::new(&config),
        config.display.piece_theme,
    );
    let result = tui::run(app, rx, cancel_token.clone()).await;

    // 5. Cleanup
    cancel_token.cancel();
    tracing::info!("Waiting for status poller to stop");
    poller_handle.await?;

    let app = result?;
    tracing::info!(
        worker_id = %app.controller.session().active_worker_id,
        "spmon dashboard stopped"
    );
    Ok(())
}
