//! Static table of configuration fields.

use std::fmt;

/// One configurable value, bound to a single environment variable.
///
/// [`Field::ALL`] is the order in which the loader evaluates fields and,
/// therefore, the order of reported errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// `LOG_LEVEL`: debug, info, warn or error (case-insensitive)
    LogLevel,
    /// `LOG_FORMAT`: text or json (case-insensitive)
    LogFormat,
    /// `LOG_OUTPUT`: stdout, stderr or a custom destination
    LogOutput,
    /// `SERVER_ADDRESS`: `"<host>:port"`, e.g. `localhost:8080` or `:3000`
    ServerAddress,
    /// `SERVER_READ_TIMEOUT`: duration text
    ServerReadTimeout,
    /// `SERVER_READ_HEADER_TIMEOUT`: duration text
    ServerReadHeaderTimeout,
    /// `SERVER_WRITE_TIMEOUT`: duration text
    ServerWriteTimeout,
    /// `SERVER_IDLE_TIMEOUT`: duration text
    ServerIdleTimeout,
    /// `SERVER_SHUTDOWN_TIMEOUT`: duration text
    ServerShutdownTimeout,
}

impl Field {
    /// Every field, in evaluation order.
    pub const ALL: [Self; 9] = [
        Self::LogLevel,
        Self::LogFormat,
        Self::LogOutput,
        Self::ServerAddress,
        Self::ServerReadTimeout,
        Self::ServerReadHeaderTimeout,
        Self::ServerWriteTimeout,
        Self::ServerIdleTimeout,
        Self::ServerShutdownTimeout,
    ];

    /// Name of the environment variable that sets this field.
    pub const fn env_var(self) -> &'static str {
        match self {
            Self::LogLevel => "LOG_LEVEL",
            Self::LogFormat => "LOG_FORMAT",
            Self::LogOutput => "LOG_OUTPUT",
            Self::ServerAddress => "SERVER_ADDRESS",
            Self::ServerReadTimeout => "SERVER_READ_TIMEOUT",
            Self::ServerReadHeaderTimeout => "SERVER_READ_HEADER_TIMEOUT",
            Self::ServerWriteTimeout => "SERVER_WRITE_TIMEOUT",
            Self::ServerIdleTimeout => "SERVER_IDLE_TIMEOUT",
            Self::ServerShutdownTimeout => "SERVER_SHUTDOWN_TIMEOUT",
        }
    }

    /// Raw text substituted when the variable is unset.
    ///
    /// Goes through the same parser as a user supplied value, so each entry
    /// must be valid for its field.
    // Mirrors the typed `DEFAULT_*` constants in `domain::models::config`;
    // `parsers::tests::test_every_default_is_valid` keeps the two in step.
    pub const fn default_value(self) -> &'static str {
        match self {
            Self::LogLevel => "info",
            Self::LogFormat => "text",
            Self::LogOutput => "stdout",
            Self::ServerAddress => "localhost:8080",
            Self::ServerReadTimeout => "5s",
            Self::ServerReadHeaderTimeout => "2s",
            Self::ServerWriteTimeout => "10s",
            Self::ServerIdleTimeout => "1m",
            Self::ServerShutdownTimeout => "15s",
        }
    }

    /// Human-readable name used in error messages.
    pub const fn description(self) -> &'static str {
        match self {
            Self::LogLevel => "log level",
            Self::LogFormat => "log format",
            Self::LogOutput => "log output",
            Self::ServerAddress => "server address",
            Self::ServerReadTimeout => "server read timeout",
            Self::ServerReadHeaderTimeout => "server read header timeout",
            Self::ServerWriteTimeout => "server write timeout",
            Self::ServerIdleTimeout => "server idle timeout",
            Self::ServerShutdownTimeout => "server shutdown timeout",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.env_var())
    }
}
