use super::FormatError;
use crate::core::models::report::{AnalysisReport, ComparisonReport};
use crate::core::models::signal::SignalDocument;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface shared by the signal file formats.
///
/// Implementors parse a residue signal (with whatever metadata the format carries)
/// and serialize analysis and comparison reports. The path-based helpers wrap the
/// reader/writer methods with buffered file handles.
pub trait SignalFormat {
    /// Reads a signal document from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is malformed or describes an invalid signal.
    fn read_from(reader: &mut impl BufRead) -> Result<SignalDocument, FormatError>;

    /// Writes an analysis report.
    fn write_report(report: &AnalysisReport, writer: &mut impl Write) -> Result<(), FormatError>;

    /// Writes a comparison report.
    fn write_comparison(
        report: &ComparisonReport,
        writer: &mut impl Write,
    ) -> Result<(), FormatError>;

    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<SignalDocument, FormatError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    fn write_report_to_path<P: AsRef<Path>>(
        report: &AnalysisReport,
        path: P,
    ) -> Result<(), FormatError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_report(report, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    fn write_comparison_to_path<P: AsRef<Path>>(
        report: &ComparisonReport,
        path: P,
    ) -> Result<(), FormatError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_comparison(report, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
