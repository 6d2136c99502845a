//! Version selection for the release listing.

use anyhow::Result;
use log::debug;

use crate::error::FetchError;
use crate::github::Release;

/// Version selector - stateless functions over tag strings.
pub struct VersionSelector;

impl VersionSelector {
    /// Return the greatest tag starting with `prefix`.
    ///
    /// Tags are compared as plain strings, byte by byte, so `4.9` wins over
    /// `4.10`. Fails with `NotFound` when no tag carries the prefix.
    pub fn select_latest<'a, I>(tags: I, prefix: &str) -> Result<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tags.into_iter()
            .filter(|tag| tag.starts_with(prefix))
            .max()
            .ok_or_else(|| {
                FetchError::NotFound(format!("no release tag starting with '{}'", prefix)).into()
            })
    }

    /// Select the release whose tag is the latest one matching `prefix`.
    ///
    /// When several records share that tag the first one in listing order is used.
    pub fn select_release<'a>(releases: &'a [Release], prefix: &str) -> Result<&'a Release> {
        let tag = Self::select_latest(releases.iter().map(|r| r.tag.as_str()), prefix)?;
        debug!("Selected tag {} out of {} releases", tag, releases.len());

        releases
            .iter()
            .find(|r| r.tag == tag)
            .ok_or_else(|| FetchError::NotFound(format!("release {}", tag)).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_release(tag: &str) -> Release {
        Release {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_select_latest_is_lexicographic() {
        let tags = ["4.9", "4.10", "3.9"];
        let selected = VersionSelector::select_latest(tags, "4.").unwrap();
        assert_eq!(selected, "4.9");
    }

    #[test]
    fn test_select_latest_ignores_other_majors() {
        let tags = ["3.9", "5.0", "4.3", "4.5", "40.1"];
        // "40.1" does not start with "4." and "5.0" is another major
        assert_eq!(VersionSelector::select_latest(tags, "4.").unwrap(), "4.5");
    }

    #[test]
    fn test_select_latest_with_patch_versions() {
        let tags = ["4.5", "4.5.5", "4.5.4"];
        assert_eq!(VersionSelector::select_latest(tags, "4.").unwrap(), "4.5.5");
    }

    #[test]
    fn test_select_latest_prefix_is_case_sensitive() {
        let tags = ["v4.6", "4.2"];
        assert_eq!(VersionSelector::select_latest(tags, "4.").unwrap(), "4.2");
    }

    #[test]
    fn test_select_latest_no_match() {
        let err = VersionSelector::select_latest(["3.9", "3.10"], "4.").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FetchError>(),
            Some(FetchError::NotFound(msg)) if msg.contains("4.")
        ));
    }

    #[test]
    fn test_select_latest_empty_input() {
        let tags: [&str; 0] = [];
        assert!(VersionSelector::select_latest(tags, "4.").is_err());
    }

    #[test]
    fn test_select_release() {
        let releases = vec![make_release("3.9"), make_release("4.3"), make_release("4.5")];
        let release = VersionSelector::select_release(&releases, "4.").unwrap();
        assert_eq!(release.tag, "4.5");
    }

    #[test]
    fn test_select_release_first_duplicate_wins() {
        let mut first = make_release("4.5");
        first.assets.push(crate::github::ReleaseAsset {
            name: "marker".to_string(),
            download_url: String::new(),
        });
        let releases = vec![make_release("4.1"), first, make_release("4.5")];

        let release = VersionSelector::select_release(&releases, "4.").unwrap();
        assert_eq!(release.assets.len(), 1);
    }

    #[test]
    fn test_select_release_no_releases() {
        let err = VersionSelector::select_release(&[], "4.").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FetchError>(),
            Some(FetchError::NotFound(_))
        ));
    }
}
