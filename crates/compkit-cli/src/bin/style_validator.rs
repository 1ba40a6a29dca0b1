//! style-validator - check CSS modules against naming and unit rules.

use clap::Parser;
use std::process::ExitCode;

use compkit_cli::commands::{self, style::StyleCli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match StyleCli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return commands::usage_exit(err),
    };

    compkit_cli::logging::init_tracing(cli.verbose);
    commands::finish(cli.execute().await)
}
