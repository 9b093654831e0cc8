//! envcfg - startup configuration from environment variables
//!
//! Reads a fixed set of environment variables once at process start,
//! validates and normalizes each into a typed value, and produces either an
//! immutable [`Config`] or a [`ConfigError`] listing every invalid variable.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): the `Config` model, its value types and the
//!   `EnvSource` port
//! - **Infrastructure Layer** (`infrastructure`): field parsers, the loader,
//!   and the tracing setup driven by a loaded `Config`
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use envcfg::{ConfigLoader, LogLevel};
//!
//! let env = HashMap::from([("LOG_LEVEL", " Debug ")]);
//! let config = ConfigLoader::load_from(&env).unwrap();
//! assert_eq!(config.log_level(), LogLevel::Debug);
//! assert_eq!(config.server_address(), "localhost:8080");
//! ```

pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::{Config, LogFormat, LogLevel, LogOutput};
pub use domain::ports::{EnvSource, NotUnicode, ProcessEnv};
pub use infrastructure::config::{ConfigError, ConfigLoader, Field, FieldError};
pub use infrastructure::logging::LoggerImpl;
