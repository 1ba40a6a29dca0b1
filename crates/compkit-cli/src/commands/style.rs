//! `style-validator` command.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::time::Duration;

use compkit_core::CompkitConfig;
use compkit_style::{DEFAULT_WATCH_INTERVAL, FileReport, WatchOptions};

use super::{Outcome, load_config, resolve_path};
use crate::output;

/// Directory validated when none is given.
const DEFAULT_STYLE_DIR: &str = "components";

/// Validate CSS module files against naming and unit rules.
#[derive(Parser, Debug)]
#[command(name = "style-validator")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct StyleCli {
    /// Path to a compkit.toml configuration file
    #[arg(long, global = true, env = "COMPKIT_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print reports as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: StyleCommands,
}

#[derive(Subcommand, Debug)]
pub enum StyleCommands {
    /// Validate a single CSS module
    File {
        /// File to validate
        path: PathBuf,
    },

    /// Validate every *.module.css under a directory
    Dir {
        /// Directory to scan (defaults to "components")
        path: Option<PathBuf>,
    },

    /// Re-validate CSS modules whenever they change
    Watch {
        /// File or directory to watch (defaults to "components")
        path: Option<PathBuf>,
        /// Polling interval in milliseconds
        #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
        interval_ms: Option<u64>,
    },
}

impl StyleCli {
    pub async fn execute(self) -> Result<Outcome> {
        let config = load_config(self.config.as_deref())?;

        match self.command {
            StyleCommands::File { path } => cmd_file(path, self.json),
            StyleCommands::Dir { path } => cmd_dir(style_dir(path, &config), self.json),
            StyleCommands::Watch { path, interval_ms } => {
                let interval = interval_ms
                    .or(config.style.watch_interval_ms)
                    .map(Duration::from_millis)
                    .unwrap_or(DEFAULT_WATCH_INTERVAL);
                cmd_watch(style_dir(path, &config), interval).await
            }
        }
    }
}

fn style_dir(path: Option<PathBuf>, config: &CompkitConfig) -> PathBuf {
    resolve_path(path, config.style.directory.as_ref(), DEFAULT_STYLE_DIR)
}

fn cmd_file(path: PathBuf, json: bool) -> Result<Outcome> {
    let issues = compkit_style::validate_file(&path);
    let outcome = if issues.is_empty() {
        Outcome::Success
    } else {
        Outcome::IssuesFound
    };

    if json {
        let report = FileReport { path, issues };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output::print_file_issues(&path, &issues);
    }

    Ok(outcome)
}

fn cmd_dir(dir: PathBuf, json: bool) -> Result<Outcome> {
    let report = compkit_style::validate_directory(&dir)
        .with_context(|| format!("Failed to validate {}", dir.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output::print_directory_report(&report);
    }

    if report.has_issues() {
        Ok(Outcome::IssuesFound)
    } else {
        Ok(Outcome::Success)
    }
}

async fn cmd_watch(dir: PathBuf, interval: Duration) -> Result<Outcome> {
    println!(
        "{} Watching {} for changes (Ctrl-C to stop)",
        "→".dimmed(),
        dir.display().to_string().bold()
    );

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    compkit_style::watch(&dir, &WatchOptions { interval }, shutdown, |event| {
        output::print_watch_event(&event)
    })
    .await
    .with_context(|| format!("Failed to watch {}", dir.display()))?;

    println!("{}", "Stopped watching.".dimmed());
    Ok(Outcome::Success)
}
