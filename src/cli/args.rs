//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::{
    completions::CompletionsArgs, import::ImportArgs, importers::ImportersArgs,
    template::TemplateArgs,
};

#[derive(Parser)]
#[command(name = "issue-import")]
#[command(author, version, about = "Issue Import")]
#[command(
    long_about = "Convert tabular feature-tracking exports into issue-tracker import payloads."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output (debug logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a source export into an import payload
    Import(ImportArgs),

    /// List available importers
    Importers(ImportersArgs),

    /// Print a CSV template for an importer
    Template(TemplateArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON payload (for the submission layer)
    #[default]
    Json,
    /// YAML payload (for reading)
    Yaml,
    /// Markdown preview table of the issues
    Table,
}

impl OutputFormat {
    /// Parse a format name from config, ignoring case
    pub fn from_config(s: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(s, true).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_output_format_from_config() {
        assert_eq!(OutputFormat::from_config("YAML"), Some(OutputFormat::Yaml));
        assert_eq!(OutputFormat::from_config("table"), Some(OutputFormat::Table));
        assert_eq!(OutputFormat::from_config("xml"), None);
    }
}
