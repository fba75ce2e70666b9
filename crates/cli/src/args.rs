// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueEnum, ValueHint};

use crate::options::{ReportField, ReportFormat};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "geopyspark-meta",
    version = crate::VERSION,
    about = "Report GeoPySpark package metadata: version, backend jar and package directory"
)]
pub struct Args {
    /// Report format
    #[arg(long, value_enum, default_value = "plain")]
    pub format: CliReportFormat,

    /// How the package directory is located
    #[arg(long, value_enum, default_value = "source", conflicts_with = "package_dir")]
    pub locator: CliLocator,

    /// Use this directory as the package directory
    #[arg(long, value_hint = ValueHint::DirPath)]
    pub package_dir: Option<PathBuf>,

    /// Print a single value without labels
    #[arg(long, value_enum, conflicts_with = "format")]
    pub field: Option<CliReportField>,

    /// Subdirectory of the package directory expected to hold the backend jar
    #[arg(long, value_hint = ValueHint::DirPath)]
    pub subdir: Option<PathBuf>,

    /// Log resolution details
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliReportFormat {
    Plain,
    Json,
}

impl From<CliReportFormat> for ReportFormat {
    fn from(value: CliReportFormat) -> Self {
        match value {
            CliReportFormat::Plain => ReportFormat::Plain,
            CliReportFormat::Json => ReportFormat::Json,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliLocator {
    Source,
    Executable,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum CliReportField {
    Version,
    Jar,
    PackageDir,
    JarPath,
}

impl From<CliReportField> for ReportField {
    fn from(value: CliReportField) -> Self {
        match value {
            CliReportField::Version => ReportField::Version,
            CliReportField::Jar => ReportField::Jar,
            CliReportField::PackageDir => ReportField::PackageDir,
            CliReportField::JarPath => ReportField::JarPath,
        }
    }
}
