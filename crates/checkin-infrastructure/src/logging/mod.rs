//! Logging setup.
//!
//! Code throughout the workspace logs through the `log` facade macros; this
//! module installs the process-wide `tracing` subscriber and bridges `log`
//! records into it. Output goes to stdout only: the binary runs under an
//! external scheduler that captures its output, so there is no file layer.

use std::sync::OnceLock;

use log::LevelFilter;
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static LOGGER_READY: OnceLock<()> = OnceLock::new();

/// Initialize process-wide logging.
///
/// Honors `RUST_LOG`, defaulting to `info`. Safe to call more than once;
/// only the first call has an effect.
pub fn init_logger() -> anyhow::Result<()> {
    if LOGGER_READY.get().is_some() {
        return Ok(());
    }

    // Forward `log` crate records to tracing
    LogTracer::builder()
        .with_max_level(LevelFilter::Trace)
        .init()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(false)
        .with_timer(fmt::time::ChronoLocal::new("%H:%M:%S".to_string()));

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .try_init()?;

    let _ = LOGGER_READY.set(());
    Ok(())
}
