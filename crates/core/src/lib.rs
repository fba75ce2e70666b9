// crates/core/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod locator;
pub mod metadata;
pub mod version;

pub use geopyspark_shared_kernel::{PathResolutionError, VersionError};
pub use locator::PackageLocator;
pub use metadata::{PackageMetadata, get_jar_name, get_package_dir, get_version};
pub use version::{JAR, JAR_PREFIX, JAR_SUFFIX, VERSION, VersionParts, jar_name_for, version_parts};
