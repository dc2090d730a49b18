//! # ringq Core
//!
//! This crate provides the shared building blocks for ringq:
//! - Element store (owned text payloads)
//! - Error types
//! - Configuration
//! - Metrics and telemetry
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                   ringq-core                    │
//! ├─────────────────────────────────────────────────┤
//! │  • element   - Owned text payloads             │
//! │  • error     - Error handling                  │
//! │  • config    - Queue & logging configuration   │
//! │  • metrics   - Operation counters, timers      │
//! │  • telemetry - tracing subscriber setup        │
//! │  • utils     - NUL-terminated copy helpers     │
//! └─────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod element;
pub mod error;
pub mod metrics;
pub mod telemetry;
pub mod utils;

// Re-export commonly used types
pub use config::{Config, LoggingConfig, QueueConfig};
pub use element::Element;
pub use error::{Error, Result};
pub use metrics::{Metrics, MetricsSnapshot, Timer};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
