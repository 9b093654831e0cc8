//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber, driven by the
//! loaded [`Config`](crate::domain::models::Config): level filter, text or
//! JSON encoding, and stdout, stderr or file destination.

pub mod logger;
pub mod writer;

pub use logger::{debug, error, info, instrument, to_tracing_level, trace, warn, LoggerImpl};
pub use writer::LogWriter;
