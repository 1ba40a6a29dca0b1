//! CLI command definitions and handlers.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use compkit_core::CompkitConfig;

pub mod generate;
pub mod style;
pub mod types;

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The run completed but reported validation issues.
    IssuesFound,
}

/// Map a command result to the process exit code.
pub fn finish(result: Result<Outcome>) -> ExitCode {
    ExitCode::from(exit_status(&result))
}

fn exit_status(result: &Result<Outcome>) -> u8 {
    match result {
        Ok(Outcome::Success) => 0,
        Ok(Outcome::IssuesFound) => 1,
        Err(err) => {
            eprintln!("{} {:#}", "Error:".red().bold(), err);
            1
        }
    }
}

/// Print a clap error and exit 1; help and version output exit 0.
pub fn usage_exit(err: clap::Error) -> ExitCode {
    let _ = err.print();
    if err.use_stderr() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Load configuration from an explicit path or the working directory.
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<CompkitConfig> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let config = CompkitConfig::discover(explicit, &cwd).context("Failed to load configuration")?;
    Ok(config)
}

/// Resolve a `--flag` / `--no-flag` pair against configuration.
pub(crate) fn resolve_flag(on: bool, off: bool, configured: Option<bool>, default: bool) -> bool {
    if off {
        false
    } else if on {
        true
    } else {
        configured.unwrap_or(default)
    }
}

/// Pick the first available path, falling back to `default`.
pub(crate) fn resolve_path(
    cli: Option<PathBuf>,
    configured: Option<&PathBuf>,
    default: &str,
) -> PathBuf {
    cli.or_else(|| configured.cloned())
        .unwrap_or_else(|| PathBuf::from(default))
}
