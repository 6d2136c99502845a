//! Renames the versioned directory produced by extraction to a fixed name.

use anyhow::Result;
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::config::AssetLayout;
use crate::error::FetchError;
use crate::runtime::Runtime;

/// Fail with `AlreadyExists` if `<target>/<normalized_dir>` is taken.
/// Returns the destination path otherwise.
pub fn ensure_vacant<R: Runtime>(
    runtime: &R,
    target_dir: &Path,
    layout: &AssetLayout,
) -> Result<PathBuf> {
    let dest = target_dir.join(&layout.normalized_dir);
    if runtime.exists(&dest) {
        return Err(FetchError::AlreadyExists(format!(
            "{} (remove it before fetching again)",
            dest.display()
        ))
        .into());
    }
    Ok(dest)
}

/// Rename `<target>/<archive_root(tag)>` to `<target>/<normalized_dir>`.
///
/// Never overwrites: an existing destination fails with `AlreadyExists`
/// before anything is touched.
#[tracing::instrument(skip(runtime, layout))]
pub fn normalize_dir<R: Runtime>(
    runtime: &R,
    target_dir: &Path,
    tag: &str,
    layout: &AssetLayout,
) -> Result<PathBuf> {
    let source = target_dir.join(layout.archive_root(tag));
    let dest = ensure_vacant(runtime, target_dir, layout)?;

    if !runtime.is_dir(&source) {
        if let Ok(entries) = runtime.read_dir(target_dir) {
            debug!("Contents of {:?}: {:?}", target_dir, entries);
        }
        return Err(FetchError::NotFound(format!(
            "extracted directory {}",
            source.display()
        ))
        .into());
    }

    runtime.rename(&source, &dest)?;
    info!("Renamed {:?} to {:?}", source, dest);
    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{MockRuntime, RealRuntime};
    use mockall::predicate::eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_normalize_renames_versioned_dir() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("hamlib-w64-4.5/bin")).unwrap();
        fs::write(dir.path().join("hamlib-w64-4.5/bin/rigctl.exe"), "MZ").unwrap();

        let dest = normalize_dir(&RealRuntime, dir.path(), "4.5", &AssetLayout::default()).unwrap();

        assert_eq!(dest, dir.path().join("hamlib"));
        assert!(dir.path().join("hamlib/bin/rigctl.exe").exists());
        assert!(!dir.path().join("hamlib-w64-4.5").exists());
    }

    #[test]
    fn test_normalize_missing_source() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("hamlib-w64-4.4")).unwrap();

        let err =
            normalize_dir(&RealRuntime, dir.path(), "4.5", &AssetLayout::default()).unwrap_err();

        match err.downcast_ref::<FetchError>() {
            Some(FetchError::NotFound(msg)) => assert!(msg.contains("hamlib-w64-4.5")),
            other => panic!("Expected NotFound, got {:?}", other),
        }
        assert!(dir.path().join("hamlib-w64-4.4").exists());
    }

    #[test]
    fn test_normalize_source_is_a_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("hamlib-w64-4.5"), "not a dir").unwrap();

        let err =
            normalize_dir(&RealRuntime, dir.path(), "4.5", &AssetLayout::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FetchError>(),
            Some(FetchError::NotFound(_))
        ));
    }

    #[test]
    fn test_normalize_destination_exists() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("hamlib-w64-4.5")).unwrap();
        fs::create_dir_all(dir.path().join("hamlib")).unwrap();
        fs::write(dir.path().join("hamlib/old.txt"), "previous run").unwrap();

        let err =
            normalize_dir(&RealRuntime, dir.path(), "4.5", &AssetLayout::default()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<FetchError>(),
            Some(FetchError::AlreadyExists(_))
        ));
        // Nothing was merged or moved
        assert!(dir.path().join("hamlib-w64-4.5").exists());
        assert_eq!(
            fs::read_to_string(dir.path().join("hamlib/old.txt")).unwrap(),
            "previous run"
        );
    }

    #[test]
    fn test_normalize_checks_destination_before_renaming() {
        let target = Path::new("/ci/deps");

        let mut runtime = MockRuntime::new();
        runtime
            .expect_exists()
            .with(eq(target.join("hamlib")))
            .returning(|_| true);
        runtime.expect_rename().never();

        let result = normalize_dir(&runtime, target, "4.5", &AssetLayout::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_normalize_uses_layout_names() {
        let target = Path::new("/ci/deps");
        let layout = AssetLayout {
            root: "hamlib-w32".to_string(),
            extension: "zip".to_string(),
            normalized_dir: "hamlib32".to_string(),
        };

        let mut runtime = MockRuntime::new();
        runtime
            .expect_exists()
            .with(eq(target.join("hamlib32")))
            .returning(|_| false);
        runtime
            .expect_is_dir()
            .with(eq(target.join("hamlib-w32-4.6")))
            .returning(|_| true);
        runtime
            .expect_rename()
            .with(eq(target.join("hamlib-w32-4.6")), eq(target.join("hamlib32")))
            .times(1)
            .returning(|_, _| Ok(()));

        let dest = normalize_dir(&runtime, target, "4.6", &layout).unwrap();
        assert_eq!(dest, target.join("hamlib32"));
    }

    #[test]
    fn test_ensure_vacant_free_and_taken() {
        let dir = tempdir().unwrap();
        let layout = AssetLayout::default();

        let dest = ensure_vacant(&RealRuntime, dir.path(), &layout).unwrap();
        assert_eq!(dest, dir.path().join("hamlib"));

        fs::create_dir_all(dir.path().join("hamlib")).unwrap();
        let err = ensure_vacant(&RealRuntime, dir.path(), &layout).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FetchError>(),
            Some(FetchError::AlreadyExists(_))
        ));
    }
}
