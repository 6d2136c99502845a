//! Fixed locations and naming rules for the Hamlib Windows build.

/// Default GitHub API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Repository whose releases are listed.
pub const REPO_OWNER: &str = "Hamlib";
pub const REPO_NAME: &str = "Hamlib";

/// Only releases of this major version are API compatible.
pub const VERSION_PREFIX: &str = "4.";

/// Headers the GitHub REST API expects.
pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";
pub const GITHUB_API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
pub const GITHUB_API_VERSION: &str = "2022-11-28";

/// Version reported on the command line and in the User-Agent.
pub const VERSION: &str = env!("HAMLIB_FETCH_VERSION");

/// Naming template shared by the release asset and its extracted directory.
///
/// A release tagged `4.5` ships `hamlib-w64-4.5.zip`, which unpacks to a
/// single `hamlib-w64-4.5/` directory that is renamed to `hamlib/`.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetLayout {
    pub root: String,
    pub extension: String,
    pub normalized_dir: String,
}

impl Default for AssetLayout {
    fn default() -> Self {
        Self {
            root: "hamlib-w64".to_string(),
            extension: "zip".to_string(),
            normalized_dir: "hamlib".to_string(),
        }
    }
}

impl AssetLayout {
    /// Name of the top-level directory inside the archive for `tag`.
    pub fn archive_root(&self, tag: &str) -> String {
        format!("{}-{}", self.root, tag)
    }

    /// File name of the release asset for `tag`.
    pub fn archive_name(&self, tag: &str) -> String {
        format!("{}.{}", self.archive_root(tag), self.extension)
    }
}

/// Settings for a single fetch run.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub api_url: String,
    pub owner: String,
    pub repo: String,
    pub version_prefix: String,
    pub layout: AssetLayout,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            owner: REPO_OWNER.to_string(),
            repo: REPO_NAME.to_string(),
            version_prefix: VERSION_PREFIX.to_string(),
            layout: AssetLayout::default(),
        }
    }
}

impl FetchConfig {
    /// Default configuration pointed at another API base (mirror or test server).
    pub fn with_api_url(api_url: Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = api_url {
            config.api_url = url.trim_end_matches('/').to_string();
        }
        config
    }

    /// Release-listing endpoint for the configured repository.
    pub fn releases_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/releases",
            self.api_url, self.owner, self.repo
        )
    }
}
