//! The fetch pipeline: list, select, download, extract, normalize.

use anyhow::{Context, Result};
use log::info;
use std::path::{Path, PathBuf};

use crate::archive::{ArchiveExtractor, ZipExtractor, extract_with};
use crate::config::FetchConfig;
use crate::download::download_file;
use crate::github::{GitHub, ListReleases};
use crate::http::HttpClient;
use crate::normalize::{ensure_vacant, normalize_dir};
use crate::release::{AssetResolver, VersionSelector};
use crate::runtime::Runtime;

/// What a successful run left on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    pub tag: String,
    pub archive_path: PathBuf,
    pub install_dir: PathBuf,
}

pub struct Fetcher<R: Runtime, G: ListReleases, E: ArchiveExtractor> {
    pub runtime: R,
    pub github: G,
    pub http_client: HttpClient,
    pub extractor: E,
    pub config: FetchConfig,
}

impl<R: Runtime + 'static> Fetcher<R, GitHub, ZipExtractor> {
    /// Fetcher wired to the real GitHub client and zip extractor.
    pub fn from_config(runtime: R, config: FetchConfig) -> Result<Self> {
        let http_client = HttpClient::with_user_agent()?;
        let github = GitHub::new(http_client.clone(), &config);
        Ok(Self::new(runtime, github, http_client, ZipExtractor, config))
    }
}

impl<R: Runtime + 'static, G: ListReleases, E: ArchiveExtractor> Fetcher<R, G, E> {
    #[tracing::instrument(skip(runtime, github, http_client, extractor, config))]
    pub fn new(
        runtime: R,
        github: G,
        http_client: HttpClient,
        extractor: E,
        config: FetchConfig,
    ) -> Self {
        Self {
            runtime,
            github,
            http_client,
            extractor,
            config,
        }
    }

    /// Run the whole pipeline against `target_dir`. Each step runs once and
    /// the first failure aborts the run. An existing `<target>/hamlib` fails
    /// the run before any request is made.
    #[tracing::instrument(skip(self))]
    pub async fn fetch(&self, target_dir: &Path) -> Result<FetchOutcome> {
        ensure_vacant(&self.runtime, target_dir, &self.config.layout)?;

        let releases = self.github.list_releases().await?;

        let release = VersionSelector::select_release(&releases, &self.config.version_prefix)?;
        info!("Latest {}x release is {}", self.config.version_prefix, release.tag);

        let asset = AssetResolver::resolve(release, &self.config.layout)?;
        info!("Using asset {}", asset.name);

        self.runtime
            .create_dir_all(target_dir)
            .with_context(|| format!("Failed to create target directory {:?}", target_dir))?;

        let archive_path = target_dir.join(&asset.name);
        download_file(
            &self.runtime,
            &asset.download_url,
            &archive_path,
            &self.http_client,
        )
        .await?;

        extract_with(&self.extractor, &self.runtime, &archive_path, target_dir)
            .with_context(|| format!("Failed to unpack {}", asset.name))?;

        let install_dir =
            normalize_dir(&self.runtime, target_dir, &release.tag, &self.config.layout)?;

        Ok(FetchOutcome {
            tag: release.tag.clone(),
            archive_path,
            install_dir,
        })
    }
}
