//! Normalized issue records and the import result handed to the submitter

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Status vocabulary understood by the destination tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetStatus {
    Unstarted,
    Started,
    Completed,
    Backlog,
}

impl TargetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetStatus::Unstarted => "unstarted",
            TargetStatus::Started => "started",
            TargetStatus::Completed => "completed",
            TargetStatus::Backlog => "backlog",
        }
    }
}

impl fmt::Display for TargetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One unit of work ready for submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedIssue {
    pub title: String,

    /// Markdown body
    pub description: String,

    pub status: TargetStatus,

    pub priority: u8,

    /// Story points; absent when the source size carries no estimate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate: Option<u32>,

    /// Raw owner text from the source, not resolved against any directory
    #[serde(default)]
    pub assignee_id: String,
}

/// Label definition keyed by source label id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportLabel {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// User definition keyed by source user id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportUser {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Workflow state definition keyed by source status id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportStatus {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(rename = "type")]
    pub status_type: TargetStatus,
}

/// Everything one importer run produces
///
/// `labels`, `users` and `statuses` are always present, even when an
/// importer has nothing to put in them. Consumers rely on the keys existing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportResult {
    /// Issues in source row order
    pub issues: Vec<NormalizedIssue>,
    pub labels: BTreeMap<String, ImportLabel>,
    pub users: BTreeMap<String, ImportUser>,
    pub statuses: BTreeMap<String, ImportStatus>,
}

impl ImportResult {
    pub fn new() -> Self {
        Self::default()
    }
}
