//! Epidemic dashboard.
//!
//! Runs the data pipeline on a background thread with its own async
//! runtime, and the TUI on the main thread. Quitting the TUI aborts every
//! in-flight fetch and feed.
//!
//! # Usage
//!
//! ```bash
//! cargo run --release
//! EPIDASH_API_BASE=http://localhost:8080/api cargo run
//! RUST_LOG=debug cargo run   # logs go to $TMPDIR/epidash.log
//! ```

mod config;

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use std::thread;

use anyhow::Context;
use crossbeam_channel::unbounded;
use ingest::HttpTransport;
use pipeline::Pipeline;
use tokio::sync::oneshot;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tui::{DashUpdate, TuiApp};

use config::DashboardConfig;

fn main() -> anyhow::Result<()> {
    let config = DashboardConfig::from_env();
    init_logging(&config.log_file);
    info!(api_base = %config.pipeline.api_base, "starting dashboard");

    let (tx, rx) = unbounded::<DashUpdate>();
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build async runtime")?;
    let pipeline = Pipeline::new(HttpTransport::new(), tx, config.pipeline.clone());

    let pipeline_handle = thread::Builder::new()
        .name("pipeline".into())
        .spawn(move || {
            runtime.block_on(async {
                tokio::select! {
                    _ = pipeline.run() => {}
                    _ = stop_rx => {}
                }
            });
            // Blocking HTTP calls may still be in flight; don't wait for them
            runtime.shutdown_background();
        })
        .context("failed to spawn pipeline thread")?;

    // Run TUI in main thread (required for terminal control)
    let result = TuiApp::new(rx)
        .frame_rate(config.frame_rate)
        .scrollback(config.scrollback)
        .run();

    let _ = stop_tx.send(());
    if pipeline_handle.join().is_err() {
        warn!("pipeline thread panicked");
    }

    result.context("terminal error")?;
    info!("dashboard closed");
    Ok(())
}

/// Log to a file, falling back to discarding logs if it cannot be opened.
fn init_logging(path: &Path) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false);

    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => builder.with_writer(Mutex::new(file)).init(),
        Err(_) => builder.with_writer(std::io::sink).init(),
    }
}
