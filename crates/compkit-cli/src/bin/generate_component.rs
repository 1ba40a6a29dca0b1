//! generate-component - scaffold a React component.

use clap::Parser;
use std::process::ExitCode;

use compkit_cli::commands::{self, generate::GenerateCli};

fn main() -> ExitCode {
    let cli = match GenerateCli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return commands::usage_exit(err),
    };

    compkit_cli::logging::init_tracing(cli.verbose);
    commands::finish(cli.execute())
}
