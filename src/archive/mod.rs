mod zip;

use crate::runtime::Runtime;
use anyhow::{Result, anyhow};
use std::path::Path;

pub use zip::ZipExtractor;

/// Trait for format-specific archive extractors
#[cfg_attr(test, mockall::automock)]
pub trait ArchiveExtractor: Send + Sync {
    /// Check if this extractor can handle the given archive format
    fn can_handle(&self, archive_path: &Path) -> bool;

    /// Extract every entry of the archive under `extract_to`, keeping the
    /// archive's own directory structure. Returns the number of files written.
    fn extract<R: Runtime + 'static>(
        &self,
        runtime: &R,
        archive_path: &Path,
        extract_to: &Path,
    ) -> Result<usize>;
}

/// Extract `archive_path` if `extractor` recognises its format.
pub fn extract_with<R, E>(
    extractor: &E,
    runtime: &R,
    archive_path: &Path,
    extract_to: &Path,
) -> Result<usize>
where
    R: Runtime + 'static,
    E: ArchiveExtractor,
{
    if !extractor.can_handle(archive_path) {
        return Err(anyhow!(
            "Unsupported archive format: {}",
            archive_path.display()
        ));
    }
    extractor.extract(runtime, archive_path, extract_to)
}
