use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info};

use super::types::Release;
use crate::config::{FetchConfig, GITHUB_ACCEPT, GITHUB_API_VERSION, GITHUB_API_VERSION_HEADER};
use crate::http::HttpClient;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListReleases: Send + Sync {
    /// Fetches every release record from the listing endpoint.
    async fn list_releases(&self) -> Result<Vec<Release>>;
    fn releases_url(&self) -> &str;
}

pub struct GitHub {
    http_client: HttpClient,
    releases_url: String,
}

impl GitHub {
    #[tracing::instrument(skip(http_client, config))]
    pub fn new(http_client: HttpClient, config: &FetchConfig) -> Self {
        Self {
            http_client,
            releases_url: config.releases_url(),
        }
    }
}

#[async_trait]
impl ListReleases for GitHub {
    /// A single request: the first page of the listing holds the recent
    /// releases, which is where the newest 4.x tag lives.
    #[tracing::instrument(skip(self))]
    async fn list_releases(&self) -> Result<Vec<Release>> {
        info!("Fetching release list from {}...", self.releases_url);

        let releases: Vec<Release> = self
            .http_client
            .get_json(
                &self.releases_url,
                &[
                    ("Accept", GITHUB_ACCEPT),
                    (GITHUB_API_VERSION_HEADER, GITHUB_API_VERSION),
                ],
            )
            .await?;

        debug!("Received {} releases", releases.len());
        Ok(releases)
    }

    fn releases_url(&self) -> &str {
        &self.releases_url
    }
}
