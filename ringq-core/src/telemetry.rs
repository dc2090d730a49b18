//! # Telemetry
//!
//! Installs the global `tracing` subscriber described by `LoggingConfig`.

use tracing_subscriber::fmt;

use crate::config::{LogFormat, LoggingConfig};
use crate::error::{Error, Result};

/// Install a fmt subscriber at the configured level and format.
///
/// Only one global subscriber can exist; a second call returns
/// `Error::Configuration`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let level: tracing::Level = config.level.into();
    let builder = fmt().with_max_level(level).with_target(false);

    let installed = match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|e| Error::Configuration {
        message: format!("installing tracing subscriber: {}", e),
    })
}
