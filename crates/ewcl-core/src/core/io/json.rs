use super::FormatError;
use super::traits::SignalFormat;
use crate::core::models::report::{AnalysisReport, ComparisonReport};
use crate::core::models::signal::{ResidueSignal, SignalDocument};
use serde_json::Value;
use std::io::{BufRead, Write};

/// Keys that mark a JSON object as an envelope around the signal rather than the
/// signal map itself.
const ENVELOPE_KEYS: [&str; 4] = ["entropy", "residueEntropy", "entropyMap", "signal"];

/// JSON signals and reports.
///
/// On read, three shapes are accepted: a bare `{"<residue>": value}` map, a list of
/// `{"residueIndex", "value"}` entries, or an envelope object carrying the signal under
/// `entropy` (also `signal`, as written by [`JsonFormat::write_report`]) together with
/// an optional `name` and `collapseScore`.
pub struct JsonFormat;

impl SignalFormat for JsonFormat {
    fn read_from(reader: &mut impl BufRead) -> Result<SignalDocument, FormatError> {
        let value: Value = serde_json::from_reader(reader)?;

        let is_envelope = value
            .as_object()
            .is_some_and(|obj| ENVELOPE_KEYS.iter().any(|key| obj.contains_key(*key)));

        if is_envelope {
            Ok(serde_json::from_value(normalize_envelope(value))?)
        } else {
            let signal: ResidueSignal = serde_json::from_value(value)?;
            Ok(SignalDocument::new(signal))
        }
    }

    fn write_report(report: &AnalysisReport, writer: &mut impl Write) -> Result<(), FormatError> {
        serde_json::to_writer_pretty(&mut *writer, report)?;
        writeln!(writer)?;
        Ok(())
    }

    fn write_comparison(
        report: &ComparisonReport,
        writer: &mut impl Write,
    ) -> Result<(), FormatError> {
        serde_json::to_writer_pretty(&mut *writer, report)?;
        writeln!(writer)?;
        Ok(())
    }
}

/// Moves an exported report's `signal` field to `entropy` so that reports can be fed
/// back in as input.
fn normalize_envelope(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        if !obj.contains_key("entropy") {
            if let Some(signal) = obj.remove("signal") {
                obj.insert("entropy".to_string(), signal);
            }
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::policy::ThresholdPolicy;
    use crate::engine::config::AnalysisConfig;
    use crate::engine::progress::ProgressReporter;
    use crate::workflows::analyze;
    use std::io::Cursor;

    fn read(text: &str) -> Result<SignalDocument, FormatError> {
        JsonFormat::read_from(&mut Cursor::new(text))
    }

    #[test]
    fn reads_bare_signal_map() {
        let doc = read(r#"{"2": 0.4, "1": 0.1, "10": 0.9}"#).unwrap();
        assert_eq!(doc.entropy.indices().collect::<Vec<_>>(), vec![1, 2, 10]);
        assert!(doc.name.is_none());
        assert!(doc.collapse_score.is_none());
    }

    #[test]
    fn reads_inference_envelope() {
        let doc = read(
            r#"{"name": "Tau Fragment (2FTL)", "entropyScore": 0.76, "entropy": {"1": 0.8, "2": 0.9}}"#,
        )
        .unwrap();
        assert_eq!(doc.name.as_deref(), Some("Tau Fragment (2FTL)"));
        assert_eq!(doc.collapse_score, Some(0.76));
        assert_eq!(doc.entropy.len(), 2);
    }

    #[test]
    fn reads_web_export_with_protein_name() {
        let doc = read(
            r#"{
              "proteinName": "Ubiquitin",
              "entropyScore": 0.27,
              "analysisDate": "2024-05-01T12:00:00.000Z",
              "residueEntropy": {"1": 0.1, "2": 0.35}
            }"#,
        )
        .unwrap();
        assert_eq!(doc.name.as_deref(), Some("Ubiquitin"));
        assert_eq!(doc.collapse_score, Some(0.27));
        assert_eq!(doc.entropy.get(2), Some(0.35));
    }

    #[test]
    fn rejects_malformed_signals() {
        assert!(matches!(read(r#"{"x": 0.1}"#), Err(FormatError::Json(_))));
        assert!(matches!(read(r#"{"1": "high"}"#), Err(FormatError::Json(_))));
        assert!(matches!(read("not json"), Err(FormatError::Json(_))));
    }

    #[test]
    fn exported_report_contains_contract_fields_and_reads_back() {
        let signal = ResidueSignal::from_pairs((1..=6).map(|i| (i, 0.05))).unwrap();
        let doc = SignalDocument {
            name: Some("Ubiquitin".to_string()),
            collapse_score: Some(0.27),
            entropy: signal.clone(),
        };
        let config = AnalysisConfig {
            policy: ThresholdPolicy::default(),
            ..AnalysisConfig::default()
        };
        let report = analyze::run(&doc, &config, &ProgressReporter::new());

        let mut buffer = Vec::new();
        JsonFormat::write_report(&report, &mut buffer).unwrap();
        let json: Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(json["name"], "Ubiquitin");
        assert_eq!(json["collapseScore"], 0.27);
        assert_eq!(json["signal"]["1"], 0.05);
        assert_eq!(json["statistics"]["count"], 6);
        assert_eq!(json["clusters"][0]["startIndex"], 1);
        assert_eq!(json["clusters"][0]["endIndex"], 6);
        assert_eq!(json["clusters"][0]["label"], "Stable");
        assert_eq!(json["policy"]["lowCut"], 0.3);
        assert!(json.get("comparisons").is_none());

        let parsed: AnalysisReport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, report);

        let reread = JsonFormat::read_from(&mut Cursor::new(buffer)).unwrap();
        assert_eq!(reread.entropy, signal);
        assert_eq!(reread.name.as_deref(), Some("Ubiquitin"));
        assert_eq!(reread.collapse_score, Some(0.27));
    }

    #[test]
    fn exported_means_read_back_bit_for_bit() {
        let signal = ResidueSignal::from_pairs([(1, 0.1), (2, 0.2), (3, 0.7), (4, 0.05), (5, 0.05)])
            .unwrap();
        let report = analyze::run(
            &SignalDocument::new(signal),
            &AnalysisConfig::default(),
            &ProgressReporter::new(),
        );

        let mut buffer = Vec::new();
        JsonFormat::write_report(&report, &mut buffer).unwrap();
        let parsed: AnalysisReport = serde_json::from_slice(&buffer).unwrap();

        let (original, reread) = (report.statistics.average(), parsed.statistics.average());
        assert_eq!(original.map(f64::to_bits), reread.map(f64::to_bits));
        assert_eq!(parsed.signal, report.signal);
    }
}
