use anyhow::Result;
use clap::Parser;
use feed::Cli;
use log::{debug, error, warn};
use shared::utils::{logging, signal::cancel_on_shutdown_signal};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = logging::init(&cli.log_level);
    debug!("Log level: {log_level}");

    let cancellation_token = CancellationToken::new();
    let signal_handle = cancel_on_shutdown_signal(cancellation_token.clone())?;

    let result = cli.run(cancellation_token.clone()).await;
    if let Err(e) = &result {
        error!("Feed service stopped: {e:#}");
    }

    cancellation_token.cancel();
    if let Err(e) = signal_handle.await {
        warn!("Signal handler task failed: {e}");
    }
    result
}
