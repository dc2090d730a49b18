//! # Configuration Management
//!
//! Handles configuration for queues and logging.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result, ResultExt};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub queue: QueueConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse a configuration document in JSON form.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(input)
            .map_err(Error::from)
            .with_context(|| "parsing ringq configuration".to_string())?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no queue could operate under
    pub fn validate(&self) -> Result<()> {
        self.queue.validate()
    }
}

/// Queue configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Node slots reserved up front (sentinel included)
    pub initial_capacity: usize,
    /// Upper bound on live elements; `None` means unbounded
    pub max_elements: Option<usize>,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 16,
            max_elements: None,
        }
    }
}

impl QueueConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_elements == Some(0) {
            return Err(Error::Configuration {
                message: "max_elements must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Text,
        }
    }
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Log formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogFormat {
    Text,
    Json,
}
