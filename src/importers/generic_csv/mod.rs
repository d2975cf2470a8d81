//! Importer for generic feature-tracking CSV exports
//!
//! Expects the thirteen columns listed in [`row::HEADERS`]. Each data row
//! becomes one issue titled `|Page -> Component -> Feature -> Action/Part`.

pub mod mapping;
pub mod row;
pub mod transform;

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::core::{ImportError, ImportResult, Importer};

pub use mapping::{map_estimate, map_status, RowStatus, TShirtSize};
pub use row::{SourceRow, HEADERS};
pub use transform::{
    build_description, build_title, transform_row, AUDIT_SHEET_URL, DEFAULT_PRIORITY,
};

/// Import issues from a generic CSV export
#[derive(Debug, Clone)]
pub struct GenericCsvImporter {
    file_path: PathBuf,
    audit_sheet_url: String,
}

impl GenericCsvImporter {
    pub const NAME: &'static str = "Generic CSV";
    pub const DEFAULT_TEAM_NAME: &'static str = "CSV";

    /// The path is not checked until [`Importer::import`] runs
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            audit_sheet_url: AUDIT_SHEET_URL.to_string(),
        }
    }

    /// Replace the audit sheet link written into every description
    pub fn with_audit_sheet_url(mut self, url: impl Into<String>) -> Self {
        self.audit_sheet_url = url.into();
        self
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

#[async_trait]
impl Importer for GenericCsvImporter {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn default_team_name(&self) -> &str {
        Self::DEFAULT_TEAM_NAME
    }

    async fn import(&self) -> Result<ImportResult, ImportError> {
        let rows = row::read_rows(&self.file_path).await?;

        let mut result = ImportResult::new();
        for parsed in &rows {
            match transform_row(&parsed.row, &self.audit_sheet_url) {
                Some(issue) => {
                    debug!(line = parsed.line, title = %issue.title, "transformed row");
                    result.issues.push(issue);
                }
                None => debug!(line = parsed.line, "row skipped"),
            }
        }

        info!(
            path = %self.file_path.display(),
            rows = rows.len(),
            issues = result.issues.len(),
            "generic CSV import complete"
        );
        Ok(result)
    }
}
