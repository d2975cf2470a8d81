//! `issue-import import` command - Convert a source export into an import payload

use console::style;
use miette::{IntoDiagnostic, Result};
use std::fs;
use std::path::PathBuf;

use crate::cli::helpers::render_result;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Config;
use crate::importers::ImporterKind;

#[derive(clap::Args, Debug)]
pub struct ImportArgs {
    /// Source file to import
    pub file: PathBuf,

    /// Importer that understands the source format
    #[arg(long, short = 'i', value_enum, default_value_t = ImporterKind::GenericCsv)]
    pub importer: ImporterKind,

    /// Output format (default: config `default_format`, then json)
    #[arg(long, short = 'f', value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the payload to a file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Team the issues are destined for (default: the importer's own)
    #[arg(long)]
    pub team: Option<String>,
}

/// Resolve the output format from flag, then config, then json
fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.or_else(|| {
        config
            .default_format
            .as_deref()
            .and_then(OutputFormat::from_config)
    })
    .unwrap_or_default()
}

pub async fn run(args: ImportArgs, global: &GlobalOpts, config: &Config) -> Result<()> {
    let format = resolve_format(args.format, config);
    let importer = args.importer.build(&args.file);
    let team = args
        .team
        .clone()
        .unwrap_or_else(|| importer.default_team_name().to_string());

    if !global.quiet {
        eprintln!(
            "{} Importing {} with {} into team {}",
            style("→").blue(),
            style(args.file.display()).yellow(),
            style(importer.name()).cyan(),
            style(&team).cyan(),
        );
    }

    let result = importer.import().await?;
    let rendered = render_result(&result, format)?;

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{}\n", rendered)).into_diagnostic()?;
            if !global.quiet {
                eprintln!(
                    "{} Wrote {} issue(s) to {}",
                    style("✓").green(),
                    style(result.issues.len()).cyan(),
                    style(path.display()).yellow()
                );
            }
        }
        None => {
            println!("{}", rendered);
            if !global.quiet {
                eprintln!(
                    "{} {} issue(s) ready for {}",
                    style("✓").green(),
                    style(result.issues.len()).cyan(),
                    style(&team).cyan()
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_beats_config() {
        let config = Config {
            default_format: Some("yaml".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve_format(Some(OutputFormat::Table), &config), OutputFormat::Table);
        assert_eq!(resolve_format(None, &config), OutputFormat::Yaml);
    }

    #[test]
    fn test_unknown_config_format_falls_back_to_json() {
        let config = Config {
            default_format: Some("xml".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve_format(None, &config), OutputFormat::Json);
        assert_eq!(resolve_format(None, &Config::default()), OutputFormat::Json);
    }
}
