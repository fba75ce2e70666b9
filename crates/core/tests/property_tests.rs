use geopyspark_core::{JAR_PREFIX, JAR_SUFFIX, VersionParts, jar_name_for};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_jar_name_wraps_version(
        major in 0u32..1000,
        minor in 0u32..1000,
        patch in 0u32..1000,
        suffix in proptest::option::of("[a-z0-9]{1,12}")
    ) {
        let version = match &suffix {
            Some(s) => format!("{major}.{minor}.{patch}-{s}"),
            None => format!("{major}.{minor}.{patch}"),
        };
        let jar = jar_name_for(&version);

        prop_assert!(jar.starts_with(JAR_PREFIX));
        prop_assert!(jar.ends_with(JAR_SUFFIX));
        prop_assert_eq!(&jar[JAR_PREFIX.len()..jar.len() - JAR_SUFFIX.len()], version.as_str());
    }

    #[test]
    fn test_version_display_roundtrip(
        major in 0u64..100_000,
        minor in 0u64..100_000,
        patch in 0u64..100_000,
        suffix in proptest::option::of("[A-Za-z0-9][A-Za-z0-9.-]{0,15}")
    ) {
        let parts = VersionParts { major, minor, patch, suffix };
        let reparsed = VersionParts::parse(&parts.to_string()).unwrap();
        prop_assert_eq!(reparsed, parts);
    }

    #[test]
    fn test_parse_never_panics(input in "\\PC{0,40}") {
        let _ = VersionParts::parse(&input);
    }
}
