//! Source importers and the registry the CLI picks from

pub mod generic_csv;

use std::path::PathBuf;

use crate::core::Importer;

pub use generic_csv::GenericCsvImporter;

/// Importers this build knows how to construct
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImporterKind {
    /// Feature-tracking spreadsheet exported as CSV
    #[default]
    GenericCsv,
}

impl ImporterKind {
    /// Get all available importers
    pub fn all() -> &'static [ImporterKind] {
        &[ImporterKind::GenericCsv]
    }

    /// Command-line name
    pub fn slug(&self) -> &'static str {
        match self {
            ImporterKind::GenericCsv => "generic-csv",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ImporterKind::GenericCsv => GenericCsvImporter::NAME,
        }
    }

    pub fn default_team_name(&self) -> &'static str {
        match self {
            ImporterKind::GenericCsv => GenericCsvImporter::DEFAULT_TEAM_NAME,
        }
    }

    /// Column names the importer expects, for template generation
    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            ImporterKind::GenericCsv => &generic_csv::HEADERS,
        }
    }

    /// Construct an importer reading from `path`
    pub fn build(&self, path: impl Into<PathBuf>) -> Box<dyn Importer> {
        match self {
            ImporterKind::GenericCsv => Box::new(GenericCsvImporter::new(path)),
        }
    }
}
