//! GeoPySpark package metadata.
//!
//! Exposes the package version, the file name of the GeoTrellis backend
//! assembly built for that version, and the directory the package lives in.
//! Launchers and installers combine the last two to find the jar:
//!
//! ```no_run
//! let dir = geopyspark::get_package_dir()?;
//! let jar = dir.join("jars").join(geopyspark::get_jar_name());
//! # Ok::<(), geopyspark::PathResolutionError>(())
//! ```
#![allow(clippy::multiple_crate_versions)]

pub use geopyspark_core::{
    JAR, JAR_PREFIX, JAR_SUFFIX, PackageLocator, PackageMetadata, VERSION, VersionParts,
    get_jar_name, get_package_dir, get_version, jar_name_for, version_parts,
};
pub use geopyspark_shared_kernel::{
    ErrorContext, GeoPySparkError, PathResolutionError, Result, VersionError,
};
