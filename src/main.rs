//! envcfg entry point: load configuration, install logging, report.

use std::process::ExitCode;

use anyhow::Result;
use envcfg::{ConfigLoader, LoggerImpl, ProcessEnv};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => handle_error(&err),
    }
}

fn run() -> Result<()> {
    let config = ConfigLoader::load()?;
    let _logger = LoggerImpl::init(&config)?;

    // Loading happened before any subscriber existed.
    for field in ConfigLoader::defaulted_fields(&ProcessEnv) {
        tracing::debug!(
            variable = field.env_var(),
            default = field.default_value(),
            "variable unset, using default"
        );
    }

    tracing::info!(
        address = config.server_address(),
        read_timeout = %humantime::format_duration(config.server_read_timeout()),
        read_header_timeout = %humantime::format_duration(config.server_read_header_timeout()),
        write_timeout = %humantime::format_duration(config.server_write_timeout()),
        idle_timeout = %humantime::format_duration(config.server_idle_timeout()),
        shutdown_timeout = %humantime::format_duration(config.server_shutdown_timeout()),
        "configuration loaded"
    );

    Ok(())
}

/// Print the error chain to stderr and pick the exit code.
fn handle_error(err: &anyhow::Error) -> ExitCode {
    eprintln!("Error: {err:#}");
    ExitCode::FAILURE
}
