//! Errors raised while reading a source export

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an import run
///
/// None of these are recovered per row: a run either yields every issue or
/// fails with one of these and yields nothing.
#[derive(Debug, Error, Diagnostic)]
pub enum ImportError {
    #[error("cannot read {}: {source}", .path.display())]
    #[diagnostic(
        code(issue_import::file_access),
        help("check that the file exists and is readable")
    )]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read header row of {}: {source}", .path.display())]
    #[diagnostic(
        code(issue_import::header),
        help("the first line must hold the column names")
    )]
    Header {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("malformed row at line {line} of {}: {source}", .path.display())]
    #[diagnostic(
        code(issue_import::malformed_row),
        help("fix the quoting or encoding of this row and re-run the import")
    )]
    MalformedRow {
        path: PathBuf,
        line: u64,
        #[source]
        source: RowError,
    },
}

/// Why a single row could not be read
#[derive(Debug, Error)]
pub enum RowError {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("quoted field is never closed")]
    UnclosedQuote,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_access_message_names_path() {
        let err = ImportError::FileAccess {
            path: PathBuf::from("missing.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("missing.csv"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_unclosed_quote_message_names_line() {
        let err = ImportError::MalformedRow {
            path: PathBuf::from("export.csv"),
            line: 2,
            source: RowError::UnclosedQuote,
        };
        assert_eq!(
            err.to_string(),
            "malformed row at line 2 of export.csv: quoted field is never closed"
        );
    }
}
