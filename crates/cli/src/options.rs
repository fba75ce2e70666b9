// crates/cli/src/options.rs

/// Output format of the full report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Plain,
    Json,
}

/// A single metadata value printed bare.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportField {
    Version,
    Jar,
    PackageDir,
    JarPath,
}
