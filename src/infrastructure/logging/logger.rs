use anyhow::{Context, Result};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use super::writer::LogWriter;
use crate::domain::models::config::{Config, LogFormat, LogLevel};

/// Logger implementation using tracing
pub struct LoggerImpl {
    guard: Option<WorkerGuard>,
}

impl LoggerImpl {
    /// Install the global subscriber described by `config`
    ///
    /// The configured level is the default directive; `RUST_LOG`, when set,
    /// refines it per target.
    ///
    /// # Errors
    /// Returns an error if the log destination cannot be opened or a global
    /// subscriber is already installed
    pub fn init(config: &Config) -> Result<Self> {
        let env_filter = EnvFilter::builder()
            .with_default_directive(to_tracing_level(config.log_level()).into())
            .from_env_lossy();

        let writer = LogWriter::open(config.log_output())?;

        let layer: Box<dyn Layer<Registry> + Send + Sync> = match config.log_format() {
            LogFormat::Json => tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer.make_writer)
                .with_ansi(false)
                .with_current_span(true)
                .with_span_list(true)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .boxed(),
            LogFormat::Text => tracing_subscriber::fmt::layer()
                .with_writer(writer.make_writer)
                .with_ansi(writer.ansi)
                .with_target(true)
                .boxed(),
        };

        tracing_subscriber::registry()
            .with(layer.with_filter(env_filter))
            .try_init()
            .context("failed to install global tracing subscriber")?;

        tracing::info!(
            level = %config.log_level(),
            format = %config.log_format(),
            output = %config.log_output(),
            "logger initialized"
        );

        Ok(Self {
            guard: writer.guard,
        })
    }

    /// Whether records are written through a background file writer
    pub const fn is_buffered(&self) -> bool {
        self.guard.is_some()
    }
}

/// Map a configured level onto its tracing counterpart
pub const fn to_tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error => Level::ERROR,
    }
}

// Re-export tracing macros for convenience
pub use tracing::{debug, error, info, instrument, trace, warn};
