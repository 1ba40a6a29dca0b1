//! type-generator - emit TypeScript interfaces from JSON Schema or GraphQL.

use clap::Parser;
use std::process::ExitCode;

use compkit_cli::commands::{self, types::TypesCli};

fn main() -> ExitCode {
    let cli = match TypesCli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return commands::usage_exit(err),
    };

    compkit_cli::logging::init_tracing(cli.verbose);
    commands::finish(cli.execute())
}
