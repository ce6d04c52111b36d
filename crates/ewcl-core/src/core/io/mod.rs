//! Reading residue signals and exporting analysis results.
//!
//! Two formats are supported, each behind the [`SignalFormat`](traits::SignalFormat)
//! trait: CSV ([`csv`]) with one row per residue, and JSON ([`json`]) carrying the full
//! report. [`ExportFormat`] is the closed set of formats a caller can select at run
//! time, for example from a file extension or a command-line flag.

pub mod csv;
pub mod json;
pub mod traits;

use crate::core::models::report::{AnalysisReport, ComparisonReport};
use crate::core::models::signal::{SignalDocument, SignalError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use traits::SignalFormat;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid signal: {0}")]
    Signal(#[from] SignalError),
    #[error("Invalid CSV record on line {line}: {message}")]
    Record { line: u64, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// Infers the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        ext.parse().ok()
    }

    pub fn read_signal_from_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<SignalDocument, FormatError> {
        match self {
            ExportFormat::Csv => csv::CsvFormat::read_from_path(path),
            ExportFormat::Json => json::JsonFormat::read_from_path(path),
        }
    }

    pub fn write_report(
        &self,
        report: &AnalysisReport,
        writer: &mut impl Write,
    ) -> Result<(), FormatError> {
        match self {
            ExportFormat::Csv => csv::CsvFormat::write_report(report, writer),
            ExportFormat::Json => json::JsonFormat::write_report(report, writer),
        }
    }

    pub fn write_report_to_path<P: AsRef<Path>>(
        &self,
        report: &AnalysisReport,
        path: P,
    ) -> Result<(), FormatError> {
        match self {
            ExportFormat::Csv => csv::CsvFormat::write_report_to_path(report, path),
            ExportFormat::Json => json::JsonFormat::write_report_to_path(report, path),
        }
    }

    pub fn write_comparison(
        &self,
        report: &ComparisonReport,
        writer: &mut impl Write,
    ) -> Result<(), FormatError> {
        match self {
            ExportFormat::Csv => csv::CsvFormat::write_comparison(report, writer),
            ExportFormat::Json => json::JsonFormat::write_comparison(report, writer),
        }
    }

    pub fn write_comparison_to_path<P: AsRef<Path>>(
        &self,
        report: &ComparisonReport,
        path: P,
    ) -> Result<(), FormatError> {
        match self {
            ExportFormat::Csv => csv::CsvFormat::write_comparison_to_path(report, path),
            ExportFormat::Json => json::JsonFormat::write_comparison_to_path(report, path),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown format '{0}'. Expected 'csv' or 'json'.")]
pub struct ParseFormatError(pub String);

impl FromStr for ExportFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(ParseFormatError(s.to_string())),
        }
    }
}
