// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ErrorContext, GeoPySparkError, PathResolutionError, PathResult, Result, VersionError,
    VersionResult,
};

pub mod error;
pub mod path;
