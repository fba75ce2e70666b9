// crates/cli/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod config;
pub mod options;
pub mod presentation;

use std::io::Write;

use geopyspark_core::{PackageMetadata, get_jar_name, get_version};
use geopyspark_shared_kernel::Result;

use crate::config::ReportConfig;
use crate::options::ReportField;
use crate::presentation::Report;

pub use geopyspark_core::VERSION;

/// Resolve metadata per `config` and write the report to `out`.
///
/// Version and jar fields are printed without touching the filesystem.
///
/// # Errors
///
/// Returns the package directory resolution failure, or an output error.
pub fn run<W: Write>(config: &ReportConfig, out: &mut W) -> Result<()> {
    match config.field {
        Some(ReportField::Version) => return write_line(out, get_version()),
        Some(ReportField::Jar) => return write_line(out, get_jar_name()),
        _ => {}
    }

    let metadata = PackageMetadata::resolve(&config.locator)?;
    let jar_path = config.subdir.as_ref().map(|subdir| metadata.artifact_path(subdir));
    let report = Report { metadata, jar_path };

    match config.field {
        Some(field) => presentation::write_field(out, field, &report),
        None => presentation::write_report(out, &report, config.format),
    }
}

fn write_line<W: Write>(out: &mut W, value: &str) -> Result<()> {
    writeln!(out, "{value}")?;
    Ok(())
}
