//! Tracing setup. The terminal belongs to the UI, so logs go to a file.
//!
//! Filter priority, highest first: `CHECKIN_LOG`, `RUST_LOG`, then the level
//! implied by `-v` / `-q` (default `info`).

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_ENV: &str = "CHECKIN_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    /// `-v` wins over `-q` when both are given.
    #[must_use]
    pub const fn from_flags(verbose: bool, quiet: bool) -> Self {
        if verbose {
            Self::Verbose
        } else if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    #[must_use]
    pub const fn default_level(self) -> Level {
        match self {
            Self::Quiet => Level::WARN,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
        }
    }
}

#[must_use]
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("checkin.log")
}

pub fn build_env_filter(verbosity: Verbosity) -> EnvFilter {
    let from_env = |name: &str| {
        std::env::var(name)
            .ok()
            .and_then(|directives| EnvFilter::try_new(directives).ok())
    };
    from_env(LOG_ENV)
        .or_else(|| from_env("RUST_LOG"))
        .unwrap_or_else(|| EnvFilter::new(verbosity.default_level().as_str()))
}

/// Installs the global subscriber, appending to `log_file`. A second call is
/// a no-op.
pub fn init_subscriber(verbosity: Verbosity, log_file: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("opening log file {}", log_file.display()))?;

    let fmt_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    let _ = tracing_subscriber::registry()
        .with(build_env_filter(verbosity))
        .with(fmt_layer)
        .try_init();
    Ok(())
}
