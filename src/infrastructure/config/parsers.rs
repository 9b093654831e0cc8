//! One parser per configuration field.
//!
//! Each takes the raw variable value (or the field's default text) and
//! returns the typed value, or a [`FieldError`] carrying the raw input.

use std::time::Duration;

use super::error::FieldError;
use super::field::Field;
use crate::domain::models::config::{LogFormat, LogLevel, LogOutput};

/// `LOG_LEVEL`
pub fn log_level(raw: &str) -> Result<LogLevel, FieldError> {
    raw.parse().map_err(|_| FieldError::new(Field::LogLevel, raw))
}

/// `LOG_FORMAT`
pub fn log_format(raw: &str) -> Result<LogFormat, FieldError> {
    raw.parse().map_err(|_| FieldError::new(Field::LogFormat, raw))
}

/// `LOG_OUTPUT`. Only a blank value is rejected.
pub fn log_output(raw: &str) -> Result<LogOutput, FieldError> {
    raw.parse().map_err(|_| FieldError::new(Field::LogOutput, raw))
}

/// `SERVER_ADDRESS`, passed through untouched.
///
/// Host and port are checked by whatever binds the address, not here.
#[allow(clippy::unnecessary_wraps)]
pub fn server_address(raw: &str) -> Result<String, FieldError> {
    Ok(raw.to_string())
}

/// Any of the `SERVER_*_TIMEOUT` fields.
///
/// Accepts human-readable durations such as `5s`, `1m`, `1m30s`, `250ms`,
/// `1.5s` or `2h`, and a bare `0`, with surrounding whitespace ignored.
pub fn duration(field: Field, raw: &str) -> Result<Duration, FieldError> {
    humantime::parse_duration(raw.trim()).map_err(|err| {
        tracing::trace!(variable = field.env_var(), error = %err, "duration rejected");
        FieldError::new(field, raw)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::config::{
        DEFAULT_LOG_FORMAT, DEFAULT_LOG_LEVEL, DEFAULT_LOG_OUTPUT, DEFAULT_SERVER_ADDRESS,
        DEFAULT_SERVER_IDLE_TIMEOUT, DEFAULT_SERVER_READ_HEADER_TIMEOUT,
        DEFAULT_SERVER_READ_TIMEOUT, DEFAULT_SERVER_SHUTDOWN_TIMEOUT,
        DEFAULT_SERVER_WRITE_TIMEOUT,
    };

    #[test]
    fn test_log_level() {
        assert_eq!(log_level("Debug"), Ok(LogLevel::Debug));
        assert_eq!(log_level(" WARN "), Ok(LogLevel::Warn));

        let err = log_level(" Verbose ").unwrap_err();
        assert_eq!(err.field(), Field::LogLevel);
        assert_eq!(err.value(), " Verbose ");
    }

    #[test]
    fn test_log_format() {
        assert_eq!(log_format("Json"), Ok(LogFormat::Json));
        assert_eq!(log_format("text\n"), Ok(LogFormat::Text));

        let err = log_format("XML").unwrap_err();
        assert_eq!(err.env_var(), "LOG_FORMAT");
        assert_eq!(err.value(), "XML");
    }

    #[test]
    fn test_log_output() {
        assert_eq!(log_output("STDOUT"), Ok(LogOutput::Stdout));
        assert_eq!(log_output("Stderr"), Ok(LogOutput::Stderr));
        assert_eq!(
            log_output("/var/log/app.log"),
            Ok(LogOutput::File("/var/log/app.log".to_string()))
        );

        let err = log_output(" \t").unwrap_err();
        assert_eq!(err.field(), Field::LogOutput);
        assert_eq!(err.value(), " \t");
    }

    #[test]
    fn test_server_address_is_opaque() {
        assert_eq!(server_address(":3000").as_deref(), Ok(":3000"));
        assert_eq!(
            server_address("not an address").as_deref(),
            Ok("not an address")
        );
        assert_eq!(server_address("").as_deref(), Ok(""));
        assert_eq!(server_address("host:99999").as_deref(), Ok("host:99999"));
    }

    #[test]
    fn test_duration() {
        let field = Field::ServerReadTimeout;
        assert_eq!(duration(field, "5s"), Ok(Duration::from_secs(5)));
        assert_eq!(duration(field, "1m"), Ok(Duration::from_secs(60)));
        assert_eq!(duration(field, "1m30s"), Ok(Duration::from_secs(90)));
        assert_eq!(duration(field, "250ms"), Ok(Duration::from_millis(250)));
        assert_eq!(duration(field, " 2h "), Ok(Duration::from_secs(7200)));
    }

    #[test]
    fn test_duration_fractions_and_zero() {
        let field = Field::ServerIdleTimeout;
        assert_eq!(duration(field, "1.5s"), Ok(Duration::from_millis(1500)));
        assert_eq!(duration(field, "0.5s"), Ok(Duration::from_millis(500)));
        assert_eq!(duration(field, "0"), Ok(Duration::ZERO));
    }

    #[test]
    fn test_duration_rejects_malformed_text() {
        for raw in ["bad", "", "5", "5 parsecs", "-1s"] {
            let err = duration(Field::ServerWriteTimeout, raw).unwrap_err();
            assert_eq!(err.field(), Field::ServerWriteTimeout);
            assert_eq!(err.value(), raw);
        }
    }

    #[test]
    fn test_every_default_is_valid() {
        assert_eq!(log_level(Field::LogLevel.default_value()), Ok(DEFAULT_LOG_LEVEL));
        assert_eq!(log_format(Field::LogFormat.default_value()), Ok(DEFAULT_LOG_FORMAT));
        assert_eq!(log_output(Field::LogOutput.default_value()), Ok(DEFAULT_LOG_OUTPUT));
        assert_eq!(
            server_address(Field::ServerAddress.default_value()).as_deref(),
            Ok(DEFAULT_SERVER_ADDRESS)
        );

        let timeouts = [
            (Field::ServerReadTimeout, DEFAULT_SERVER_READ_TIMEOUT),
            (Field::ServerReadHeaderTimeout, DEFAULT_SERVER_READ_HEADER_TIMEOUT),
            (Field::ServerWriteTimeout, DEFAULT_SERVER_WRITE_TIMEOUT),
            (Field::ServerIdleTimeout, DEFAULT_SERVER_IDLE_TIMEOUT),
            (Field::ServerShutdownTimeout, DEFAULT_SERVER_SHUTDOWN_TIMEOUT),
        ];
        for (field, expected) in timeouts {
            assert_eq!(duration(field, field.default_value()), Ok(expected), "{field}");
        }
    }
}
