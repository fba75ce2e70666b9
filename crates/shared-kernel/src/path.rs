// crates/shared-kernel/src/path.rs
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{PathResolutionError, PathResult};

/// Convert a potentially relative path into an absolute one without resolving symlinks.
pub fn logical_absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

/// Resolve `path` to an existing directory: absolute, normalized, symlinks followed.
///
/// # Errors
///
/// Returns [`PathResolutionError::Canonicalize`] when the path is empty or cannot be
/// canonicalized, and [`PathResolutionError::NotADirectory`] when it resolves to
/// anything other than a directory.
pub fn canonical_dir(path: &Path) -> PathResult<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(PathResolutionError::Canonicalize {
            path: PathBuf::new(),
            kind: io::ErrorKind::NotFound,
        });
    }

    let canonical = path.canonicalize().map_err(|e| PathResolutionError::Canonicalize {
        path: logical_absolute(path),
        kind: e.kind(),
    })?;

    if !canonical.is_dir() {
        return Err(PathResolutionError::NotADirectory { path: canonical });
    }

    Ok(canonical)
}

/// Parent directory of a file path; a bare file name has none.
pub fn parent_dir(path: &Path) -> PathResult<&Path> {
    path.parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .ok_or_else(|| PathResolutionError::NoParent { path: path.to_path_buf() })
}
