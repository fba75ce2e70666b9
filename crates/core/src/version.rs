// crates/core/src/version.rs
//! Version identifier and backend jar naming.
//!
//! `VERSION` comes from the workspace manifest through `CARGO_PKG_VERSION`, so the
//! jar name below is rebuilt whenever the package version changes.

use std::fmt;
use std::str::FromStr;

use geopyspark_shared_kernel::{VersionError, VersionResult};

/// Package version derived from Cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// `concat!` only takes literals, so the jar name parts live in macros.
macro_rules! jar_prefix {
    () => {
        "geotrellis-backend-assembly-"
    };
}

macro_rules! jar_suffix {
    () => {
        ".jar"
    };
}

pub const JAR_PREFIX: &str = jar_prefix!();
pub const JAR_SUFFIX: &str = jar_suffix!();

/// File name of the GeoTrellis backend assembly matching [`VERSION`].
pub const JAR: &str = concat!(jar_prefix!(), env!("CARGO_PKG_VERSION"), jar_suffix!());

/// Backend jar file name for an arbitrary version string.
#[must_use]
pub fn jar_name_for(version: &str) -> String {
    format!("{JAR_PREFIX}{version}{JAR_SUFFIX}")
}

/// `MAJOR.MINOR.PATCH[-suffix]`, the package's versioning scheme.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionParts {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub suffix: Option<String>,
}

impl VersionParts {
    /// # Errors
    ///
    /// Returns a [`VersionError`] when `version` is empty, does not have exactly three
    /// numeric components, or carries an empty or malformed suffix.
    pub fn parse(version: &str) -> VersionResult<Self> {
        if version.is_empty() {
            return Err(VersionError::Empty);
        }

        let (numbers, suffix) = match version.split_once('-') {
            Some((numbers, suffix)) => (numbers, Some(suffix)),
            None => (version, None),
        };

        if let Some(suffix) = suffix {
            let valid = !suffix.is_empty()
                && suffix.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.');
            if !valid {
                return Err(VersionError::InvalidSuffix {
                    version: version.to_string(),
                    suffix: suffix.to_string(),
                });
            }
        }

        let parts: Vec<&str> = numbers.split('.').collect();
        let [major, minor, patch] = parts.as_slice() else {
            return Err(VersionError::PartCount {
                version: version.to_string(),
                found: parts.len(),
            });
        };

        Ok(Self {
            major: parse_number(version, major)?,
            minor: parse_number(version, minor)?,
            patch: parse_number(version, patch)?,
            suffix: suffix.map(str::to_string),
        })
    }
}

// `u64::from_str` accepts a leading '+', which the scheme does not.
fn parse_number(version: &str, part: &str) -> VersionResult<u64> {
    let non_numeric = || VersionError::NonNumeric {
        version: version.to_string(),
        part: part.to_string(),
    };

    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(non_numeric());
    }
    part.parse().map_err(|_| non_numeric())
}

impl FromStr for VersionParts {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for VersionParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(suffix) = &self.suffix {
            write!(f, "-{suffix}")?;
        }
        Ok(())
    }
}

/// Parsed form of [`VERSION`].
///
/// # Errors
///
/// Only fails if the workspace manifest carries a version outside the scheme.
pub fn version_parts() -> VersionResult<VersionParts> {
    VersionParts::parse(VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jar_embeds_version() {
        assert_eq!(JAR, jar_name_for(VERSION));
        assert!(JAR.starts_with(JAR_PREFIX));
        assert!(JAR.ends_with(JAR_SUFFIX));
    }

    #[test]
    fn jar_constant_is_prefix_version_suffix() {
        assert_eq!(JAR_PREFIX, "geotrellis-backend-assembly-");
        assert_eq!(JAR_SUFFIX, ".jar");
        assert_eq!(JAR, format!("{JAR_PREFIX}{VERSION}{JAR_SUFFIX}"));
    }

    #[test]
    fn jar_name_for_known_versions() {
        assert_eq!(
            jar_name_for("0.4.7-openeo"),
            "geotrellis-backend-assembly-0.4.7-openeo.jar"
        );
        assert_eq!(jar_name_for("1.0.0"), "geotrellis-backend-assembly-1.0.0.jar");
    }

    #[test]
    fn own_version_follows_scheme() {
        let parts = version_parts().unwrap();
        assert_eq!(parts.to_string(), VERSION);
    }

    #[test]
    fn parse_with_suffix() {
        let parts = VersionParts::parse("0.4.7-openeo").unwrap();
        assert_eq!((parts.major, parts.minor, parts.patch), (0, 4, 7));
        assert_eq!(parts.suffix.as_deref(), Some("openeo"));
    }

    #[test]
    fn parse_keeps_hyphens_inside_suffix() {
        let parts: VersionParts = "2.1.0-rc.1-openeo".parse().unwrap();
        assert_eq!(parts.suffix.as_deref(), Some("rc.1-openeo"));
    }

    #[test]
    fn parse_rejects_malformed() {
        assert_eq!(VersionParts::parse(""), Err(VersionError::Empty));
        assert!(matches!(
            VersionParts::parse("1.0"),
            Err(VersionError::PartCount { found: 2, .. })
        ));
        assert!(matches!(
            VersionParts::parse("1.0.0.0"),
            Err(VersionError::PartCount { found: 4, .. })
        ));
        assert!(matches!(
            VersionParts::parse("1.x.0"),
            Err(VersionError::NonNumeric { .. })
        ));
        assert!(matches!(
            VersionParts::parse("+1.0.0"),
            Err(VersionError::NonNumeric { .. })
        ));
        assert!(matches!(
            VersionParts::parse("1.0.0-"),
            Err(VersionError::InvalidSuffix { .. })
        ));
        assert!(matches!(
            VersionParts::parse("1.0.0-open eo"),
            Err(VersionError::InvalidSuffix { .. })
        ));
    }
}
