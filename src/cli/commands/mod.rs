//! CLI command implementations

pub mod completions;
pub mod import;
pub mod importers;
pub mod template;
