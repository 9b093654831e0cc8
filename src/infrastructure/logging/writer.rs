use std::fs::{self, OpenOptions};
use std::io::{self, IsTerminal};
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::domain::models::config::LogOutput;

/// Where formatted records go, plus whatever must outlive the subscriber.
pub struct LogWriter {
    /// Writer handed to the fmt layer
    pub make_writer: BoxMakeWriter,
    /// Flushes the background file writer when dropped
    pub guard: Option<WorkerGuard>,
    /// Colors only for terminals
    pub ansi: bool,
}

impl LogWriter {
    /// Resolve a [`LogOutput`] into a writer.
    ///
    /// `File` destinations are opened for appending, creating missing
    /// parent directories, and written from a background thread.
    pub fn open(output: &LogOutput) -> Result<Self> {
        match output {
            LogOutput::Stdout => Ok(Self {
                make_writer: BoxMakeWriter::new(io::stdout),
                guard: None,
                ansi: io::stdout().is_terminal(),
            }),
            LogOutput::Stderr => Ok(Self {
                make_writer: BoxMakeWriter::new(io::stderr),
                guard: None,
                ansi: io::stderr().is_terminal(),
            }),
            LogOutput::File(path) => {
                let file = open_append(Path::new(path))?;
                let (non_blocking, guard) = tracing_appender::non_blocking(file);
                Ok(Self {
                    make_writer: BoxMakeWriter::new(non_blocking),
                    guard: Some(guard),
                    ansi: false,
                })
            }
        }
    }
}

fn open_append(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}
