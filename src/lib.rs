//! Issue Import: turn tabular exports into issue-tracker import payloads
//!
//! Each importer reads one source format and produces an
//! [`core::ImportResult`] for the submission layer.

pub mod cli;
pub mod core;
pub mod importers;
