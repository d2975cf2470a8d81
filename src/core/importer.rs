//! The capability every source importer provides

use async_trait::async_trait;

use crate::core::error::ImportError;
use crate::core::issue::ImportResult;

/// A pluggable source format
///
/// Implementations bind their input (file path, credentials, ...) at
/// construction and do all of their work in [`Importer::import`].
#[async_trait]
pub trait Importer: Send + Sync {
    /// Human-readable name shown when picking an importer
    fn name(&self) -> &str;

    /// Team the issues land in unless the caller picks another
    fn default_team_name(&self) -> &str;

    /// Read the whole source and return every issue in source order
    async fn import(&self) -> Result<ImportResult, ImportError>;
}
