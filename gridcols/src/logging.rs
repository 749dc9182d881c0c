//! Logging set-up using `tracing` and `tracing-subscriber`.
//!
//! Events go to stderr so stdout carries only the JSON report. The
//! `GRIDCOLS_LOG` environment variable takes an `EnvFilter` directive and
//! overrides the `-v` level.
//!
//! # Log Levels
//!
//! - `warn`: unknown column types, state records naming unknown columns
//! - `info`: loaded files and command summaries
//! - `debug`: id collisions and definition changes

use std::io;

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::GridcolsError;

/// Environment variable holding a filter directive.
pub const LOG_ENV: &str = "GRIDCOLS_LOG";

/// Configuration for logging behaviour.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level used when `GRIDCOLS_LOG` is unset.
    pub level: Level,
    /// Whether to colour the output.
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            with_ansi: true,
        }
    }
}

impl LogConfig {
    /// Create a `LogConfig` from the `-v` count.
    ///
    /// - 0: warn
    /// - 1 (`-v`): info
    /// - 2 (`-vv`): debug
    /// - 3+: trace
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            ..Self::default()
        }
    }

    /// Enable or disable ANSI colours.
    #[must_use]
    pub const fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }
}

/// Build the filter, preferring `GRIDCOLS_LOG` over `level`.
#[must_use]
pub fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level.as_str()))
}

/// Install the global subscriber, writing to stderr.
///
/// # Errors
///
/// Returns [`GridcolsError::Logging`] if a global subscriber is already set.
pub fn init_logging(config: &LogConfig) -> Result<(), GridcolsError> {
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(config.with_ansi)
        .with_target(false)
        .without_time();
    tracing_subscriber::registry()
        .with(build_env_filter(config.level))
        .with(layer)
        .try_init()
        .map_err(|err| GridcolsError::Logging(err.to_string()))
}
