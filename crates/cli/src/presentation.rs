// crates/cli/src/presentation.rs
use std::io::Write;
use std::path::PathBuf;

use geopyspark_core::PackageMetadata;
use geopyspark_shared_kernel::Result;
use serde::Serialize;

use crate::options::{ReportField, ReportFormat};

/// Everything the full report prints.
#[derive(Debug, Serialize)]
pub struct Report {
    #[serde(flatten)]
    pub metadata: PackageMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jar_path: Option<PathBuf>,
}

pub fn write_report<W: Write>(out: &mut W, report: &Report, format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Plain => write_plain(out, report),
        ReportFormat::Json => write_json(out, report),
    }
}

fn write_plain<W: Write>(out: &mut W, report: &Report) -> Result<()> {
    let metadata = &report.metadata;
    writeln!(out, "version: {}", metadata.version)?;
    writeln!(out, "jar: {}", metadata.jar)?;
    writeln!(out, "package_dir: {}", metadata.package_dir.display())?;
    if let Some(jar_path) = &report.jar_path {
        writeln!(out, "jar_path: {}", jar_path.display())?;
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W, report: &Report) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

/// Print one field's bare value.
pub fn write_field<W: Write>(out: &mut W, field: ReportField, report: &Report) -> Result<()> {
    let metadata = &report.metadata;
    match field {
        ReportField::Version => writeln!(out, "{}", metadata.version)?,
        ReportField::Jar => writeln!(out, "{}", metadata.jar)?,
        ReportField::PackageDir => writeln!(out, "{}", metadata.package_dir.display())?,
        ReportField::JarPath => {
            let jar_path = report
                .jar_path
                .clone()
                .unwrap_or_else(|| metadata.artifact_path(""));
            writeln!(out, "{}", jar_path.display())?;
        }
    }
    Ok(())
}
