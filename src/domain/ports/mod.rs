//! Port trait definitions (Hexagonal Architecture)
//!
//! - EnvSource: lookup of configuration variables by name
//!
//! The loader depends on this trait rather than on `std::env`, so the same
//! load pass runs against the process environment or an in-memory map.

pub mod env_source;

pub use env_source::{EnvSource, NotUnicode, ProcessEnv};
