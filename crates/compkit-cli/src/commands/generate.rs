//! `generate-component` command.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use compkit_core::CompkitConfig;
use compkit_scaffold::{DEFAULT_COMPONENTS_DIR, GenerationOptions, TemplateKind};

use super::{Outcome, load_config, resolve_flag, resolve_path};
use crate::output;

/// Scaffold a React component with a CSS module, barrel file and test stub.
#[derive(Parser, Debug)]
#[command(name = "generate-component")]
#[command(author, version, about, long_about = None)]
pub struct GenerateCli {
    /// Component name (PascalCase)
    pub name: String,

    /// Template type: simple, interactive, data or form
    #[arg(long = "type", value_name = "TYPE")]
    pub template: Option<String>,

    /// Generate a CSS module (default)
    #[arg(long, overrides_with = "no_styled")]
    pub styled: bool,

    /// Skip the CSS module
    #[arg(long, overrides_with = "styled")]
    pub no_styled: bool,

    /// Export the props type from index.ts (default)
    #[arg(long, overrides_with = "no_typed")]
    pub typed: bool,

    /// Export only the component from index.ts
    #[arg(long, overrides_with = "typed")]
    pub no_typed: bool,

    /// Base directory for component folders (defaults to "components")
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Preview without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Path to a compkit.toml configuration file
    #[arg(long, env = "COMPKIT_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl GenerateCli {
    /// Merge flags with configuration: flag, then file, then default.
    pub fn resolve(&self, config: &CompkitConfig) -> (GenerationOptions, PathBuf) {
        let scaffold = &config.scaffold;

        let template = self
            .template
            .as_deref()
            .or(scaffold.template.as_deref())
            .map(TemplateKind::from_name_or_default)
            .unwrap_or_default();

        let options = GenerationOptions {
            template,
            styled: resolve_flag(self.styled, self.no_styled, scaffold.styled, true),
            typed: resolve_flag(self.typed, self.no_typed, scaffold.typed, true),
        };

        let base_dir = resolve_path(
            self.dir.clone(),
            scaffold.components_dir.as_ref(),
            DEFAULT_COMPONENTS_DIR,
        );

        (options, base_dir)
    }

    pub fn execute(self) -> Result<Outcome> {
        let config = load_config(self.config.as_deref())?;
        let (options, base_dir) = self.resolve(&config);

        tracing::debug!(
            component = %self.name,
            template = %options.template,
            styled = options.styled,
            typed = options.typed,
            dir = %base_dir.display(),
            "generating component"
        );

        if self.dry_run {
            let files = compkit_scaffold::render(&self.name, &options)
                .with_context(|| format!("Failed to render component '{}'", self.name))?;
            output::print_dry_run(&base_dir.join(&self.name), &files);
            return Ok(Outcome::Success);
        }

        let written = compkit_scaffold::generate(&self.name, &options, &base_dir)
            .with_context(|| format!("Failed to generate component '{}'", self.name))?;
        output::print_generated(&self.name, &written);

        Ok(Outcome::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> GenerateCli {
        let argv = std::iter::once("generate-component").chain(args.iter().copied());
        GenerateCli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["Button"]);
        let (options, dir) = cli.resolve(&CompkitConfig::default());
        assert_eq!(options, GenerationOptions::default());
        assert_eq!(dir, PathBuf::from("components"));
    }

    #[test]
    fn test_missing_name_is_an_error() {
        let result = GenerateCli::try_parse_from(["generate-component"]);
        let err = result.unwrap_err();
        assert!(err.use_stderr());
    }

    #[test]
    fn test_type_and_negated_flags() {
        let cli = parse(&["Login", "--type=form", "--no-styled", "--no-typed"]);
        let (options, _) = cli.resolve(&CompkitConfig::default());
        assert_eq!(options.template, TemplateKind::Form);
        assert!(!options.styled);
        assert!(!options.typed);
    }

    #[test]
    fn test_last_flag_wins() {
        let cli = parse(&["Card", "--no-styled", "--styled"]);
        let (options, _) = cli.resolve(&CompkitConfig::default());
        assert!(options.styled);
    }

    #[test]
    fn test_unknown_type_falls_back() {
        let cli = parse(&["Card", "--type", "wizard"]);
        let (options, _) = cli.resolve(&CompkitConfig::default());
        assert_eq!(options.template, TemplateKind::Simple);
    }

    #[test]
    fn test_config_defaults_apply() {
        let config = CompkitConfig::from_toml_str(
            "[scaffold]\ncomponents_dir = \"src/ui\"\ntemplate = \"data\"\nstyled = false\n",
        )
        .unwrap();

        let (options, dir) = parse(&["Table"]).resolve(&config);
        assert_eq!(options.template, TemplateKind::Data);
        assert!(!options.styled);
        assert!(options.typed);
        assert_eq!(dir, PathBuf::from("src/ui"));

        let cli = parse(&["Table", "--styled", "--type=simple", "--dir", "lib"]);
        let (options, dir) = cli.resolve(&config);
        assert_eq!(options.template, TemplateKind::Simple);
        assert!(options.styled);
        assert_eq!(dir, PathBuf::from("lib"));
    }
}
