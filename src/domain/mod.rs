//! Domain layer
//!
//! The typed configuration model and the port through which it is sourced.
//! No I/O happens here.

pub mod models;
pub mod ports;
