use crate::domain::models::config::Config;
use crate::domain::ports::{EnvSource, ProcessEnv};

use super::error::{ConfigError, FieldError};
use super::field::Field;
use super::parsers;

/// Builds a [`Config`] from environment variables.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the process environment.
    ///
    /// Unset variables take their documented defaults. Every variable is
    /// checked even after a failure, so the error lists all invalid fields.
    pub fn load() -> Result<Config, ConfigError> {
        Self::load_from(&ProcessEnv)
    }

    /// Fields whose variable is unset in `env` and so take their default.
    ///
    /// The loader reports these at debug level as it goes, but a caller that
    /// installs logging only after loading can list them again here.
    pub fn defaulted_fields<E: EnvSource + ?Sized>(env: &E) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| matches!(env.get_var(field.env_var()), Ok(None)))
            .collect()
    }

    /// Load configuration from any [`EnvSource`].
    ///
    /// Same environment in, same outcome out: the call holds no state
    /// between invocations.
    pub fn load_from<E: EnvSource + ?Sized>(env: &E) -> Result<Config, ConfigError> {
        let mut pass = LoadPass::new(env);

        let log_level = pass.field(Field::LogLevel, parsers::log_level);
        let log_format = pass.field(Field::LogFormat, parsers::log_format);
        let log_output = pass.field(Field::LogOutput, parsers::log_output);
        let server_address = pass.field(Field::ServerAddress, parsers::server_address);
        let server_read_timeout = pass.timeout(Field::ServerReadTimeout);
        let server_read_header_timeout = pass.timeout(Field::ServerReadHeaderTimeout);
        let server_write_timeout = pass.timeout(Field::ServerWriteTimeout);
        let server_idle_timeout = pass.timeout(Field::ServerIdleTimeout);
        let server_shutdown_timeout = pass.timeout(Field::ServerShutdownTimeout);

        // A field is `None` exactly when its error was recorded.
        match (
            log_level,
            log_format,
            log_output,
            server_address,
            server_read_timeout,
            server_read_header_timeout,
            server_write_timeout,
            server_idle_timeout,
            server_shutdown_timeout,
        ) {
            (
                Some(log_level),
                Some(log_format),
                Some(log_output),
                Some(server_address),
                Some(server_read_timeout),
                Some(server_read_header_timeout),
                Some(server_write_timeout),
                Some(server_idle_timeout),
                Some(server_shutdown_timeout),
            ) => Ok(Config {
                log_level,
                log_format,
                log_output,
                server_address,
                server_read_timeout,
                server_read_header_timeout,
                server_write_timeout,
                server_idle_timeout,
                server_shutdown_timeout,
            }),
            _ => {
                let err = ConfigError::new(pass.errors);
                tracing::debug!(invalid = err.len(), "configuration rejected");
                Err(err)
            }
        }
    }
}

/// Accumulator for a single load call.
struct LoadPass<'a, E: ?Sized> {
    env: &'a E,
    errors: Vec<FieldError>,
}

impl<'a, E: EnvSource + ?Sized> LoadPass<'a, E> {
    fn new(env: &'a E) -> Self {
        Self {
            env,
            errors: Vec::new(),
        }
    }

    /// Raw value of `field`, falling back to its default text.
    ///
    /// A value that is not unicode is rejected with its lossy rendering.
    fn raw(&self, field: Field) -> Result<String, FieldError> {
        match self.env.get_var(field.env_var()) {
            Ok(Some(value)) => Ok(value),
            Ok(None) => {
                tracing::debug!(
                    variable = field.env_var(),
                    default = field.default_value(),
                    "variable unset, using default"
                );
                Ok(field.default_value().to_string())
            }
            Err(err) => Err(FieldError::new(field, err.lossy)),
        }
    }

    fn field<T>(
        &mut self,
        field: Field,
        parse: impl FnOnce(&str) -> Result<T, FieldError>,
    ) -> Option<T> {
        match self.raw(field).and_then(|raw| parse(&raw)) {
            Ok(value) => Some(value),
            Err(err) => {
                self.errors.push(err);
                None
            }
        }
    }

    fn timeout(&mut self, field: Field) -> Option<std::time::Duration> {
        self.field(field, |raw| parsers::duration(field, raw))
    }
}
