//! Infrastructure layer module
//!
//! This module contains the adapters around the domain model:
//! - Configuration loading from environment variables
//! - Logging infrastructure
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod logging;
