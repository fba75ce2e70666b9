// crates/core/src/locator.rs
//! Strategies for resolving the package directory.

use std::fmt;
use std::path::{Path, PathBuf};

use geopyspark_shared_kernel::path::{canonical_dir, parent_dir};
use geopyspark_shared_kernel::{PathResolutionError, PathResult};

/// Source path of this module as handed to the compiler.
///
/// Cargo passes it relative to the workspace root for workspace members and
/// absolute for registry dependencies.
const MODULE_SOURCE: &str = file!();

/// Manifest directory of this crate at build time.
const MANIFEST_DIR: &str = env!("CARGO_MANIFEST_DIR");

/// How the package directory is located.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PackageLocator {
    /// Directory holding this module's own source file, `src/` of this crate.
    #[default]
    SourceFile,
    /// Directory holding the running executable.
    Executable,
    /// A directory chosen by the caller.
    Explicit(PathBuf),
}

impl PackageLocator {
    /// Resolve the package directory to a canonical absolute path.
    ///
    /// # Errors
    ///
    /// Returns [`PathResolutionError`] when the location cannot be mapped to an
    /// existing directory on the filesystem.
    pub fn resolve(&self) -> PathResult<PathBuf> {
        let resolved = match self {
            Self::SourceFile => {
                locate_source(Path::new(MANIFEST_DIR), Path::new(MODULE_SOURCE))
                    .and_then(|source| canonical_dir(parent_dir(&source)?))
            }
            Self::Executable => std::env::current_exe()
                .map_err(|e| PathResolutionError::Executable { kind: e.kind() })
                .and_then(|exe| canonical_dir(parent_dir(&exe)?)),
            Self::Explicit(dir) => canonical_dir(dir),
        };

        match &resolved {
            Ok(dir) => log::debug!("resolved package directory {} via {self}", dir.display()),
            Err(err) => log::warn!("package directory resolution via {self} failed: {err}"),
        }
        resolved
    }
}

impl fmt::Display for PackageLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceFile => f.write_str("source file"),
            Self::Executable => f.write_str("executable"),
            Self::Explicit(dir) => write!(f, "explicit path {}", dir.display()),
        }
    }
}

/// Find `source` on disk, anchoring a relative path at `manifest_dir` or one of its ancestors.
pub(crate) fn locate_source(manifest_dir: &Path, source: &Path) -> PathResult<PathBuf> {
    let unmapped = || PathResolutionError::SourceUnmapped {
        file: source.display().to_string(),
    };

    if source.as_os_str().is_empty() {
        return Err(unmapped());
    }

    if source.is_absolute() {
        return if source.is_file() { Ok(source.to_path_buf()) } else { Err(unmapped()) };
    }

    manifest_dir
        .ancestors()
        .map(|base| base.join(source))
        .find(|candidate| candidate.is_file())
        .ok_or_else(unmapped)
}
