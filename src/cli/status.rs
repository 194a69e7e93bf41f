//! Status command implementation

use crate::cli::output::{format_workers_json, format_workers_table, worker_views};
use crate::cli::watch::load_config;
use crate::cli::StatusArgs;
use crate::status::StatusClient;

/// Handle `spmon status`: fetch one snapshot and format it
pub async fn handle_status(args: &StatusArgs) -> Result<String, Box<dyn std::error::Error>> {
    let mut config = load_config(&args.config)?;
    if let Some(ref url) = args.url {
        config.endpoint.url = url.clone();
    }
    config.validate()?;

    let client = StatusClient::new(config.endpoint.clone())?;
    let snapshot = client
        .fetch()
        .await
        .map_err(|e| format!("{} ({})", e, client.url()))?;

    let workers = worker_views(&snapshot);
    if args.json {
        Ok(format_workers_json(snapshot.buffer_count, &workers)?)
    } else {
        Ok(format_workers_table(snapshot.buffer_count, &workers))
    }
}
