use anyhow::Result;
use log::debug;

use crate::config::AssetLayout;
use crate::error::FetchError;
use crate::github::{Release, ReleaseAsset};

/// Finds the release asset named by the layout template.
pub struct AssetResolver;

impl AssetResolver {
    /// Pick the asset whose name is exactly `layout.archive_name(tag)`.
    /// Matching is case-sensitive; near misses such as `-src` archives are ignored.
    pub fn resolve<'a>(release: &'a Release, layout: &AssetLayout) -> Result<&'a ReleaseAsset> {
        let expected = layout.archive_name(&release.tag);
        debug!(
            "Looking for asset {} among {} assets",
            expected,
            release.assets.len()
        );

        release
            .assets
            .iter()
            .find(|a| a.name == expected)
            .ok_or_else(|| {
                FetchError::NotFound(format!(
                    "asset {} in release {}",
                    expected, release.tag
                ))
                .into()
            })
    }
}
