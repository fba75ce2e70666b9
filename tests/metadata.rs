//! Facade-level checks of the three package metadata values.

use geopyspark::{
    ErrorContext, GeoPySparkError, PackageLocator, PackageMetadata, get_jar_name,
    get_package_dir, get_version, jar_name_for,
};

#[test]
fn jar_name_is_prefix_version_suffix() {
    assert_eq!(
        get_jar_name(),
        format!("geotrellis-backend-assembly-{}.jar", get_version())
    );
}

#[test]
fn known_versions_produce_expected_jars() {
    assert_eq!(
        jar_name_for("0.4.7-openeo"),
        "geotrellis-backend-assembly-0.4.7-openeo.jar"
    );
    assert_eq!(jar_name_for("1.0.0"), "geotrellis-backend-assembly-1.0.0.jar");
}

#[test]
fn accessors_are_idempotent() {
    assert_eq!(get_version(), get_version());
    assert_eq!(get_jar_name(), get_jar_name());
    assert_eq!(get_package_dir().unwrap(), get_package_dir().unwrap());
    assert!(get_package_dir().unwrap().is_absolute());
}

#[test]
fn resolution_failure_carries_context() {
    let temp = tempfile::TempDir::new().unwrap();
    let missing = temp.path().join("site-packages").join("geopyspark");

    let err = PackageMetadata::resolve(&PackageLocator::Explicit(missing))
        .context("locating backend jar")
        .unwrap_err();

    assert!(matches!(err, GeoPySparkError::Context { .. }));
    assert!(err.to_string().starts_with("locating backend jar: Package directory unavailable"));
}
