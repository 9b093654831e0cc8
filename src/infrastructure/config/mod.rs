//! Configuration loading from environment variables
//!
//! A single synchronous pass:
//! - Read each variable, substituting its default text when unset
//! - Parse and normalize it into a typed value
//! - Collect every invalid field instead of stopping at the first
//! - Return an immutable [`Config`](crate::domain::models::Config) or a [`ConfigError`]

pub mod error;
pub mod field;
pub mod loader;
pub mod parsers;

pub use error::{ConfigError, FieldError};
pub use field::Field;
pub use loader::ConfigLoader;
