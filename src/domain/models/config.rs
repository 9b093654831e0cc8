//! Typed configuration snapshot and its enumerated value types.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Default [`LogLevel`] when `LOG_LEVEL` is unset.
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

/// Default [`LogFormat`] when `LOG_FORMAT` is unset.
pub const DEFAULT_LOG_FORMAT: LogFormat = LogFormat::Text;

/// Default [`LogOutput`] when `LOG_OUTPUT` is unset.
pub const DEFAULT_LOG_OUTPUT: LogOutput = LogOutput::Stdout;

/// Default server address when `SERVER_ADDRESS` is unset.
pub const DEFAULT_SERVER_ADDRESS: &str = "localhost:8080";

/// Default server read timeout when `SERVER_READ_TIMEOUT` is unset.
pub const DEFAULT_SERVER_READ_TIMEOUT: Duration = Duration::from_secs(5);

/// Default server read header timeout when `SERVER_READ_HEADER_TIMEOUT` is unset.
pub const DEFAULT_SERVER_READ_HEADER_TIMEOUT: Duration = Duration::from_secs(2);

/// Default server write timeout when `SERVER_WRITE_TIMEOUT` is unset.
pub const DEFAULT_SERVER_WRITE_TIMEOUT: Duration = Duration::from_secs(10);

/// Default server idle timeout when `SERVER_IDLE_TIMEOUT` is unset.
pub const DEFAULT_SERVER_IDLE_TIMEOUT: Duration = Duration::from_secs(60);

/// Default server shutdown timeout when `SERVER_SHUTDOWN_TIMEOUT` is unset.
pub const DEFAULT_SERVER_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(15);

/// Lowest TCP port number.
///
/// Reference value only. `SERVER_ADDRESS` is not checked against it; the
/// network layer that binds the address owns that validation.
pub const TCP_PORT_MIN: u16 = 0;

/// Highest TCP port number. See [`TCP_PORT_MIN`].
pub const TCP_PORT_MAX: u16 = 65535;

/// Returned by the `FromStr` impls when a value is not a member of the set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized value {value:?}, expected one of: {expected}")]
pub struct UnknownVariant {
    /// The value as it was given, before normalization.
    pub value: String,
    /// Comma separated list of accepted values.
    pub expected: &'static str,
}

impl UnknownVariant {
    fn new(value: &str, expected: &'static str) -> Self {
        Self {
            value: value.to_string(),
            expected,
        }
    }
}

/// Trim surrounding whitespace and lower-case.
fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Severity threshold of log records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Detailed information, typically useful for development and debugging
    Debug,
    /// General information about the application's operation
    Info,
    /// Non-critical events or potentially harmful situations
    Warn,
    /// Critical events that require immediate attention
    Error,
}

impl LogLevel {
    /// Every level, most verbose first.
    pub const ALL: [Self; 4] = [Self::Debug, Self::Info, Self::Warn, Self::Error];

    /// Canonical lower-case name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = UnknownVariant;

    /// Case-insensitive, ignores surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(UnknownVariant::new(s, "debug, info, warn, error")),
        }
    }
}

/// Encoding of log records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogFormat {
    /// Human-readable text lines
    Text,
    /// One JSON object per record
    Json,
}

impl LogFormat {
    /// Every format.
    pub const ALL: [Self; 2] = [Self::Text, Self::Json];

    /// Canonical lower-case name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogFormat {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(UnknownVariant::new(s, "text, json")),
        }
    }
}

/// Destination of log records.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LogOutput {
    /// Standard output stream
    Stdout,
    /// Standard error stream
    Stderr,
    /// Any other non-empty value, kept verbatim.
    ///
    /// Interpreted as a file path by the logging setup, not validated here.
    File(String),
}

impl LogOutput {
    /// `"stdout"`, `"stderr"` or the custom destination as given.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
            Self::File(path) => path,
        }
    }
}

impl fmt::Display for LogOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogOutput {
    type Err = UnknownVariant;

    /// `stdout`/`stderr` match case-insensitively; anything else that is not
    /// blank becomes [`LogOutput::File`] with its case preserved.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "stdout" => Ok(Self::Stdout),
            "stderr" => Ok(Self::Stderr),
            "" => Err(UnknownVariant::new(s, "stdout, stderr, a file path")),
            _ => Ok(Self::File(trimmed.to_string())),
        }
    }
}

/// Immutable configuration snapshot, built once at startup.
///
/// Obtain one from [`ConfigLoader`](crate::infrastructure::config::ConfigLoader).
/// There are no setters; share it by reference or clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) log_level: LogLevel,
    pub(crate) log_format: LogFormat,
    pub(crate) log_output: LogOutput,
    pub(crate) server_address: String,
    pub(crate) server_read_timeout: Duration,
    pub(crate) server_read_header_timeout: Duration,
    pub(crate) server_write_timeout: Duration,
    pub(crate) server_idle_timeout: Duration,
    pub(crate) server_shutdown_timeout: Duration,
}

impl Config {
    /// Minimum severity of emitted log records.
    pub const fn log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Encoding of log records.
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Destination of log records.
    pub const fn log_output(&self) -> &LogOutput {
        &self.log_output
    }

    /// Address the server binds to, as given (`"<host>:port"`).
    pub fn server_address(&self) -> &str {
        &self.server_address
    }

    /// Maximum duration for reading an entire request.
    pub const fn server_read_timeout(&self) -> Duration {
        self.server_read_timeout
    }

    /// Maximum duration for reading request headers.
    pub const fn server_read_header_timeout(&self) -> Duration {
        self.server_read_header_timeout
    }

    /// Maximum duration before timing out writes of a response.
    pub const fn server_write_timeout(&self) -> Duration {
        self.server_write_timeout
    }

    /// Maximum time to wait for the next request on a keep-alive connection.
    pub const fn server_idle_timeout(&self) -> Duration {
        self.server_idle_timeout
    }

    /// Grace period for in-flight requests during shutdown.
    pub const fn server_shutdown_timeout(&self) -> Duration {
        self.server_shutdown_timeout
    }
}

impl Default for Config {
    /// The configuration an empty environment produces.
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
            log_format: DEFAULT_LOG_FORMAT,
            log_output: DEFAULT_LOG_OUTPUT,
            server_address: DEFAULT_SERVER_ADDRESS.to_string(),
            server_read_timeout: DEFAULT_SERVER_READ_TIMEOUT,
            server_read_header_timeout: DEFAULT_SERVER_READ_HEADER_TIMEOUT,
            server_write_timeout: DEFAULT_SERVER_WRITE_TIMEOUT,
            server_idle_timeout: DEFAULT_SERVER_IDLE_TIMEOUT,
            server_shutdown_timeout: DEFAULT_SERVER_SHUTDOWN_TIMEOUT,
        }
    }
}
