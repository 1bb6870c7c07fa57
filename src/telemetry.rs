use crate::{
    config::TelemetryConfig,
    error::{Error, Result},
};
use std::fs::create_dir_all;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber writing to a log file under `config.log_dir`.
///
/// The filter comes from `RUST_LOG`, defaulting to `info`.
///
/// # Errors
///
/// - Returns `Error::Io` if the log directory cannot be created.
/// - Returns `Error::Other` if a global subscriber is already installed.
pub fn setup_logger(config: &TelemetryConfig) -> Result<()> {
    create_dir_all(&config.log_dir)?;

    let logfile = if cfg!(debug_assertions) {
        rolling::daily(&config.log_dir, &config.log_file)
    } else {
        rolling::never(&config.log_dir, &config.log_file)
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    #[cfg(feature = "bunyan")]
    {
        use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};

        let formatter = BunyanFormattingLayer::new(env!("CARGO_PKG_NAME").into(), logfile);
        tracing_subscriber::registry()
            .with(filter)
            .with(JsonStorageLayer)
            .with(formatter)
            .try_init()
            .map_err(|e| Error::other(e.to_string()))?;
    }

    #[cfg(not(feature = "bunyan"))]
    {
        let formatter = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(logfile);
        tracing_subscriber::registry()
            .with(filter)
            .with(formatter)
            .try_init()
            .map_err(|e| Error::other(e.to_string()))?;
    }

    Ok(())
}
