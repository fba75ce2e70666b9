// crates/cli/src/config.rs
use std::path::PathBuf;

use geopyspark_core::PackageLocator;

use crate::args::{Args, CliLocator};
use crate::options::{ReportField, ReportFormat};

/// Resolved settings for one report run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportConfig {
    pub format: ReportFormat,
    pub locator: PackageLocator,
    pub field: Option<ReportField>,
    pub subdir: Option<PathBuf>,
    pub verbose: bool,
}

impl From<Args> for ReportConfig {
    fn from(args: Args) -> Self {
        let locator = match (args.package_dir, args.locator) {
            (Some(dir), _) => PackageLocator::Explicit(dir),
            (None, CliLocator::Source) => PackageLocator::SourceFile,
            (None, CliLocator::Executable) => PackageLocator::Executable,
        };

        Self {
            format: args.format.into(),
            locator,
            field: args.field.map(ReportField::from),
            subdir: args.subdir,
            verbose: args.verbose,
        }
    }
}

impl ReportConfig {
    /// Log filter for `env_logger` when `RUST_LOG` is unset.
    #[must_use]
    pub const fn log_level(&self) -> log::LevelFilter {
        if self.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn }
    }
}
