// crates/shared-kernel/src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum GeoPySparkError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<GeoPySparkError>,
    },

    #[error("Package directory unavailable: {0}")]
    PathResolution(#[from] PathResolutionError),

    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to serialize {format} output: {details}")]
    Serialization { format: String, details: String },
}

pub type Result<T> = std::result::Result<T, GeoPySparkError>;

/// The package directory could not be mapped onto the filesystem.
///
/// Raised only while resolving the package directory. The outcome depends on
/// load-time context alone, so callers treat it as fatal instead of retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathResolutionError {
    #[error("module source '{file}' is not mapped to a filesystem location")]
    SourceUnmapped { file: String },

    #[error("cannot locate the running executable: {kind}")]
    Executable { kind: io::ErrorKind },

    #[error("failed to canonicalize '{path}': {kind}")]
    Canonicalize { path: PathBuf, kind: io::ErrorKind },

    #[error("'{path}' is not a directory")]
    NotADirectory { path: PathBuf },

    #[error("'{path}' has no parent directory")]
    NoParent { path: PathBuf },
}

pub type PathResult<T> = std::result::Result<T, PathResolutionError>;

/// Version strings that do not follow `MAJOR.MINOR.PATCH[-suffix]`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("version string is empty")]
    Empty,

    #[error("'{version}' must have exactly three dot-separated parts, found {found}")]
    PartCount { version: String, found: usize },

    #[error("'{part}' in '{version}' is not an unsigned integer")]
    NonNumeric { version: String, part: String },

    #[error("'{version}' has an invalid suffix '{suffix}'")]
    InvalidSuffix { version: String, suffix: String },
}

pub type VersionResult<T> = std::result::Result<T, VersionError>;

#[cfg(feature = "json")]
impl From<serde_json::Error> for GeoPySparkError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<GeoPySparkError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| GeoPySparkError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| GeoPySparkError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
