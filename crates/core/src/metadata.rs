// crates/core/src/metadata.rs
//! Process-wide package metadata.
//!
//! `VERSION` and `JAR` are compile-time constants. The package directory is
//! resolved on first access and the outcome, success or failure, is kept for the
//! rest of the process.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use geopyspark_shared_kernel::PathResult;
use serde::Serialize;

use crate::locator::PackageLocator;
use crate::version::{JAR, VERSION};

static PACKAGE_DIR: OnceLock<PathResult<PathBuf>> = OnceLock::new();

/// Package version, e.g. `0.4.7-openeo`.
#[must_use]
pub const fn get_version() -> &'static str {
    VERSION
}

/// Backend assembly file name: `geotrellis-backend-assembly-<VERSION>.jar`.
#[must_use]
pub const fn get_jar_name() -> &'static str {
    JAR
}

/// Absolute, symlink-resolved directory holding the metadata module.
///
/// # Errors
///
/// Returns [`PathResolutionError`](geopyspark_shared_kernel::PathResolutionError)
/// when the module cannot be mapped to the filesystem. Every later call returns
/// the same error.
pub fn get_package_dir() -> PathResult<&'static Path> {
    cached_dir(&PACKAGE_DIR, &PackageLocator::default())
}

/// First caller's outcome wins; `locator` is ignored once `cell` is filled.
fn cached_dir<'a>(
    cell: &'a OnceLock<PathResult<PathBuf>>,
    locator: &PackageLocator,
) -> PathResult<&'a Path> {
    cell.get_or_init(|| locator.resolve())
        .as_ref()
        .map(PathBuf::as_path)
        .map_err(Clone::clone)
}

/// Snapshot of the three metadata values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageMetadata {
    pub version: &'static str,
    pub jar: &'static str,
    pub package_dir: PathBuf,
}

impl PackageMetadata {
    /// Metadata backed by the process-wide package directory.
    ///
    /// # Errors
    ///
    /// Propagates the cached resolution failure of [`get_package_dir`].
    pub fn current() -> PathResult<Self> {
        Ok(Self::with_dir(get_package_dir()?.to_path_buf()))
    }

    /// Metadata with the package directory resolved by `locator`. Not cached.
    ///
    /// # Errors
    ///
    /// Returns the locator's resolution failure.
    pub fn resolve(locator: &PackageLocator) -> PathResult<Self> {
        locator.resolve().map(Self::with_dir)
    }

    fn with_dir(package_dir: PathBuf) -> Self {
        Self { version: VERSION, jar: JAR, package_dir }
    }

    /// `package_dir/subdir/jar`. Pure path arithmetic; existence is not checked.
    #[must_use]
    pub fn artifact_path(&self, subdir: impl AsRef<Path>) -> PathBuf {
        self.package_dir.join(subdir).join(self.jar)
    }
}
