//! `type-generator` command.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use compkit_core::CompkitConfig;
use compkit_types::default_output_file;

use super::{Outcome, load_config};
use crate::output;

/// Generate TypeScript interfaces from a JSON Schema or GraphQL schema.
#[derive(Parser, Debug)]
#[command(name = "type-generator")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct TypesCli {
    /// Path to a compkit.toml configuration file
    #[arg(long, global = true, env = "COMPKIT_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: TypesCommands,
}

#[derive(Subcommand, Debug)]
pub enum TypesCommands {
    /// Generate from a JSON Schema document
    Json(SchemaArgs),

    /// Generate from a GraphQL schema
    Graphql(SchemaArgs),
}

#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Schema file to read
    pub schema: PathBuf,

    /// Name of the generated interface
    pub type_name: String,

    /// Output file (defaults to <typename>.ts)
    pub output: Option<PathBuf>,

    /// Print to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

impl TypesCli {
    pub fn execute(self) -> Result<Outcome> {
        let config = load_config(self.config.as_deref())?;

        let (args, text) = match self.command {
            TypesCommands::Json(args) => {
                let schema = read_schema(&args.schema)?;
                let text = compkit_types::from_json_schema_str(&schema, &args.type_name)
                    .with_context(|| format!("Invalid JSON schema in {}", args.schema.display()))?;
                (args, text)
            }
            TypesCommands::Graphql(args) => {
                let schema = read_schema(&args.schema)?;
                let text = compkit_types::from_graphql_schema(&schema, &args.type_name)
                    .with_context(|| {
                        format!("Failed to generate types from {}", args.schema.display())
                    })?;
                (args, text)
            }
        };

        if args.stdout {
            print!("{}", text);
            return Ok(Outcome::Success);
        }

        let path = output_path(&args, &config);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(&path, &text)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        tracing::info!(path = %path.display(), "wrote types");
        output::print_type_written(&args.type_name, &path);

        Ok(Outcome::Success)
    }
}

fn read_schema(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema file {}", path.display()))
}

/// Explicit output, else `<typename>.ts` inside the configured directory.
fn output_path(args: &SchemaArgs, config: &CompkitConfig) -> PathBuf {
    if let Some(ref output) = args.output {
        return output.clone();
    }

    let filename = default_output_file(&args.type_name);
    match config.types.output_dir {
        Some(ref dir) => dir.join(filename),
        None => PathBuf::from(filename),
    }
}
