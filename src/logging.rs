//! `tracing` subscriber setup for the binary.

use std::fs::File;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(String),
    /// Used by the animated viewer when no log file is configured, so log lines
    /// never land on the alternate screen.
    Discard,
}

impl LogTarget {
    pub fn choose(log_path: Option<&str>, animate: bool) -> Self {
        match log_path {
            Some(path) => LogTarget::File(path.to_string()),
            None if animate => LogTarget::Discard,
            None => LogTarget::Stderr,
        }
    }
}

/// Install the global subscriber. Call once, before the first frame.
pub fn init(filter: &str, target: &LogTarget) -> Result<()> {
    let filter = EnvFilter::try_new(filter)
        .with_context(|| format!("invalid log filter {:?}", filter))?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = File::create(path).with_context(|| format!("create log file {}", path))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Discard => builder.with_writer(std::io::sink).try_init(),
    };
    installed.map_err(|err| anyhow!(err))
}
