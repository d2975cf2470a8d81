//! Core module - shared types for every importer

pub mod config;
pub mod error;
pub mod importer;
pub mod issue;

pub use config::Config;
pub use error::{ImportError, RowError};
pub use importer::Importer;
pub use issue::{
    ImportLabel, ImportResult, ImportStatus, ImportUser, NormalizedIssue, TargetStatus,
};
