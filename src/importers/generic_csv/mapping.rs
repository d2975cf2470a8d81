//! Lookup tables for the two categorical columns (Size, Status)
//!
//! Column text is resolved to a variant through a literal table. Anything not
//! in a table is tolerated: an unknown size has no estimate and an unknown
//! status lands in the backlog.

use crate::core::TargetStatus;

/// T-shirt size from the `Size` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TShirtSize {
    Xs,
    S,
    M,
    L,
    Xl,
}

const SIZE_TABLE: [(&str, TShirtSize); 5] = [
    ("XS", TShirtSize::Xs),
    ("S", TShirtSize::S),
    ("M", TShirtSize::M),
    ("L", TShirtSize::L),
    ("XL", TShirtSize::Xl),
];

impl TShirtSize {
    /// Resolve column text; matching is exact and case-sensitive
    pub fn parse(s: &str) -> Option<Self> {
        SIZE_TABLE
            .iter()
            .find(|(key, _)| *key == s)
            .map(|(_, size)| *size)
    }

    /// Estimate in points. XL is deliberately unestimated.
    pub fn points(&self) -> Option<u32> {
        match self {
            TShirtSize::Xs => Some(1),
            TShirtSize::S => Some(3),
            TShirtSize::M => Some(5),
            TShirtSize::L => Some(8),
            TShirtSize::Xl => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TShirtSize::Xs => "XS",
            TShirtSize::S => "S",
            TShirtSize::M => "M",
            TShirtSize::L => "L",
            TShirtSize::Xl => "XL",
        }
    }
}

/// Progress state from the `Status` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowStatus {
    NotStarted,
    Done,
    EngInProgress,
    DesignQaInProgress,
    NeedsQa,
}

const STATUS_TABLE: [(&str, RowStatus); 5] = [
    ("Not started", RowStatus::NotStarted),
    ("Done", RowStatus::Done),
    ("Eng in progress", RowStatus::EngInProgress),
    ("Design QA in progress", RowStatus::DesignQaInProgress),
    ("Needs QA", RowStatus::NeedsQa),
];

impl RowStatus {
    /// Resolve column text; matching is exact and case-sensitive
    pub fn parse(s: &str) -> Option<Self> {
        STATUS_TABLE
            .iter()
            .find(|(key, _)| *key == s)
            .map(|(_, status)| *status)
    }

    pub fn target(&self) -> TargetStatus {
        match self {
            RowStatus::NotStarted => TargetStatus::Unstarted,
            RowStatus::Done => TargetStatus::Completed,
            RowStatus::EngInProgress => TargetStatus::Started,
            RowStatus::DesignQaInProgress => TargetStatus::Started,
            // Waiting on QA counts as finished engineering work
            RowStatus::NeedsQa => TargetStatus::Completed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RowStatus::NotStarted => "Not started",
            RowStatus::Done => "Done",
            RowStatus::EngInProgress => "Eng in progress",
            RowStatus::DesignQaInProgress => "Design QA in progress",
            RowStatus::NeedsQa => "Needs QA",
        }
    }
}

/// Estimate for a raw `Size` value, `None` for XL or unknown text
pub fn map_estimate(size: &str) -> Option<u32> {
    TShirtSize::parse(size).and_then(|s| s.points())
}

/// Target status for a raw `Status` value, `backlog` for unknown text
pub fn map_status(status: &str) -> TargetStatus {
    RowStatus::parse(status)
        .map(|s| s.target())
        .unwrap_or(TargetStatus::Backlog)
}
