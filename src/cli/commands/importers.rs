//! `issue-import importers` command - List available importers

use console::style;
use miette::Result;

use crate::importers::ImporterKind;

#[derive(clap::Args, Debug)]
pub struct ImportersArgs {}

pub fn run(_args: ImportersArgs) -> Result<()> {
    for kind in ImporterKind::all() {
        println!(
            "{}\t{}\t(team: {})",
            style(kind.slug()).cyan(),
            kind.display_name(),
            style(kind.default_team_name()).dim()
        );
    }
    Ok(())
}
