//! `issue-import template` command - Print a CSV template for an importer

use console::style;
use miette::Result;

use crate::cli::helpers::escape_csv;
use crate::importers::ImporterKind;

#[derive(clap::Args, Debug)]
pub struct TemplateArgs {
    /// Importer to generate the template for
    #[arg(long, short = 'i', value_enum, default_value_t = ImporterKind::GenericCsv)]
    pub importer: ImporterKind,
}

/// Example row matching [`ImporterKind::headers`] column for column
fn example_row(kind: ImporterKind) -> Vec<&'static str> {
    match kind {
        ImporterKind::GenericCsv => vec![
            "Billing",
            "Invoices",
            "Export",
            "Download PDF",
            "M",
            "Eng in progress",
            "Works offline, no network needed",
            "alice",
            "bob",
            "Admin",
            "Pro",
            "invoicing",
            "export_v2",
        ],
    }
}

pub fn run(args: TemplateArgs) -> Result<()> {
    let headers = args.importer.headers();
    let example: Vec<String> = example_row(args.importer)
        .into_iter()
        .map(escape_csv)
        .collect();

    // Output to stdout (can be redirected to file)
    println!("{}", headers.join(","));
    println!("{}", example.join(","));

    // Print usage hint to stderr so it doesn't interfere with redirected output
    eprintln!();
    eprintln!(
        "{} Template generated. Redirect to file: issue-import template --importer {} > export.csv",
        style("→").blue(),
        args.importer.slug()
    );

    Ok(())
}
