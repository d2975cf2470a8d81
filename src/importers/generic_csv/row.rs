//! Typed rows of a feature-tracking CSV export

use csv::{ReaderBuilder, StringRecord};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

use crate::core::{ImportError, RowError};

/// Column names, in the order the template prints them
pub const HEADERS: [&str; 13] = [
    "Page",
    "Component",
    "Feature",
    "Action/Part",
    "Size",
    "Status",
    "Behavior/Notes",
    "Eng Owner",
    "Design Owner",
    "User permissions",
    "Plans",
    "Billing Feature",
    "Feature switches",
];

/// One data row, matched to columns by exact header text
///
/// Every column is optional in the file: a missing column or a short row
/// leaves the field empty. `size` and `status` keep the raw text; they are
/// resolved through the lookup tables in `mapping`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRow {
    pub page: String,
    pub component: String,
    pub feature: String,
    pub action_part: String,
    pub size: String,
    pub status: String,
    pub behavior_notes: String,
    pub eng_owner: String,
    pub design_owner: String,
    pub user_permissions: String,
    pub plans: String,
    pub billing_feature: String,
    pub feature_switches: String,
}

impl SourceRow {
    fn from_record(record: &StringRecord, header_map: &HashMap<String, usize>) -> Self {
        let field = |name: &str| get_field(record, header_map, name);
        Self {
            page: field("Page"),
            component: field("Component"),
            feature: field("Feature"),
            action_part: field("Action/Part"),
            size: field("Size"),
            status: field("Status"),
            behavior_notes: field("Behavior/Notes"),
            eng_owner: field("Eng Owner"),
            design_owner: field("Design Owner"),
            user_permissions: field("User permissions"),
            plans: field("Plans"),
            billing_feature: field("Billing Feature"),
            feature_switches: field("Feature switches"),
        }
    }
}

/// Build a map from header name to column index
fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, h)| (h.to_string(), i))
        .collect()
}

/// Get a field value from a CSV record, empty when the column is absent
fn get_field(record: &StringRecord, header_map: &HashMap<String, usize>, field: &str) -> String {
    header_map
        .get(field)
        .and_then(|&idx| record.get(idx))
        .unwrap_or_default()
        .to_string()
}

/// A parsed row with the file line it started on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRow {
    pub line: u64,
    pub row: SourceRow,
}

/// Read and parse a CSV file, suspending only for the file read
pub async fn read_rows(path: &Path) -> Result<Vec<ParsedRow>, ImportError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| ImportError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
    parse_rows(path, &bytes)
}

/// Parse CSV bytes into rows, in file order
///
/// `path` is only used for error reporting. Any row that cannot be read
/// fails the whole parse, including a quoted field left open at end of
/// input (the reader would otherwise fold every following line into it).
pub fn parse_rows(path: &Path, data: &[u8]) -> Result<Vec<ParsedRow>, ImportError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(data);

    let headers = rdr
        .headers()
        .map_err(|source| ImportError::Header {
            path: path.to_path_buf(),
            source,
        })?
        .clone();
    let header_map = build_header_map(&headers);
    debug!(columns = headers.len(), "read CSV header");

    let mut rows = Vec::new();
    // Byte offset and line where the most recent record (or the header) starts
    let mut last_start = headers
        .position()
        .map(|p| (p.byte(), p.line()))
        .unwrap_or((0, 1));
    for (row_idx, result) in rdr.records().enumerate() {
        let fallback_line = row_idx as u64 + 2; // +2 for 1-indexed and header row
        let record = result.map_err(|source| ImportError::MalformedRow {
            path: path.to_path_buf(),
            line: source
                .position()
                .map(|p| p.line())
                .unwrap_or(fallback_line),
            source: RowError::Csv(source),
        })?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(fallback_line);
        if let Some(pos) = record.position() {
            last_start = (pos.byte(), line);
        }
        rows.push(ParsedRow {
            line,
            row: SourceRow::from_record(&record, &header_map),
        });
    }

    // Only the final record can hold an open quote: it runs to end of input
    let (start, line) = last_start;
    let tail = data.get(start as usize..).unwrap_or_default();
    if has_unclosed_quote(tail.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(tail)) {
        return Err(ImportError::MalformedRow {
            path: path.to_path_buf(),
            line,
            source: RowError::UnclosedQuote,
        });
    }

    Ok(rows)
}

/// Walk one raw record and report whether it ends inside a quoted field
///
/// A quote only opens a field when it is the field's first byte; `""`
/// inside a quoted field is an escaped quote.
fn has_unclosed_quote(record: &[u8]) -> bool {
    let mut in_quotes = false;
    let mut field_start = true;
    let mut bytes = record.iter().peekable();

    while let Some(&b) = bytes.next() {
        if in_quotes {
            if b == b'"' {
                if bytes.peek() == Some(&&b'"') {
                    bytes.next();
                } else {
                    in_quotes = false;
                }
            }
            continue;
        }
        match b {
            b'"' if field_start => in_quotes = true,
            b',' => {
                field_start = true;
                continue;
            }
            b'\n' | b'\r' => return false,
            _ => {}
        }
        field_start = false;
    }

    in_quotes
}
