use super::FormatError;
use super::traits::SignalFormat;
use crate::core::models::report::{AnalysisReport, ComparisonReport};
use crate::core::models::signal::{ResidueIndex, ResidueSignal, SignalDocument, parse_residue_key};
use crate::engine::classifier::classify_signal;
use serde::Deserialize;
use std::io::{BufRead, Write};

pub const SIGNAL_HEADER: [&str; 3] = ["residue_number", "entropy_value", "state"];
pub const COMPARISON_HEADER: [&str; 4] = [
    "residue_number",
    "baseline_value",
    "variant_value",
    "delta",
];

/// Row shape accepted on read. The `state` column, when present, is derived data and
/// is ignored; the older `Residue,Entropy,Classification` header is also understood.
#[derive(Debug, Deserialize)]
struct SignalRow {
    #[serde(alias = "Residue")]
    residue_number: String,
    #[serde(alias = "Entropy")]
    entropy_value: f64,
}

/// Per-residue CSV: `residue_number,entropy_value,state`, ascending by residue, values
/// with four decimals, states assigned under the report's threshold policy.
pub struct CsvFormat;

impl SignalFormat for CsvFormat {
    fn read_from(reader: &mut impl BufRead) -> Result<SignalDocument, FormatError> {
        let mut csv_reader = ::csv::ReaderBuilder::new()
            .trim(::csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let mut pairs: Vec<(ResidueIndex, f64)> = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            let row: SignalRow = record.deserialize(Some(&headers))?;
            let residue = parse_residue_key(&row.residue_number).map_err(|e| {
                FormatError::Record {
                    line: record.position().map_or(0, ::csv::Position::line),
                    message: e.to_string(),
                }
            })?;
            pairs.push((residue, row.entropy_value));
        }

        Ok(SignalDocument::new(ResidueSignal::from_pairs(pairs)?))
    }

    fn write_report(report: &AnalysisReport, writer: &mut impl Write) -> Result<(), FormatError> {
        let mut csv_writer = ::csv::Writer::from_writer(writer);
        csv_writer.write_record(SIGNAL_HEADER)?;
        for row in classify_signal(&report.signal, &report.policy) {
            csv_writer.write_record([
                row.residue_index.to_string(),
                format!("{:.4}", row.value),
                row.state.to_string(),
            ])?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    fn write_comparison(
        report: &ComparisonReport,
        writer: &mut impl Write,
    ) -> Result<(), FormatError> {
        let mut csv_writer = ::csv::Writer::from_writer(writer);
        csv_writer.write_record(COMPARISON_HEADER)?;
        for record in &report.records {
            csv_writer.write_record([
                record.residue_index.to_string(),
                format!("{:.4}", record.baseline_value),
                format!("{:.4}", record.variant_value),
                format!("{:+.4}", record.delta),
            ])?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}
