//! # Workflows Module
//!
//! High-level entry points that run complete analyses over residue signals.
//!
//! ## Overview
//!
//! A workflow takes one request's inputs (signal documents and an
//! [`AnalysisConfig`](crate::engine::config::AnalysisConfig)), drives the `engine`
//! components in order, reports phase progress and returns a serializable report from
//! [`core::models::report`](crate::core::models::report). Nothing is cached between
//! calls.
//!
//! ## Architecture
//!
//! - **Analysis Workflow** ([`analyze`]) - Statistics, classification, region detection
//!   and summary text for one signal, with an optional comparison against a baseline.
//! - **Comparison Workflow** ([`compare`]) - Residue-aligned differences between a
//!   baseline and a variant signal, with aggregate counts.
//!
//! [`load_document`] is shared by both and resolves the input format from the file
//! extension.

pub mod analyze;
pub mod compare;

use crate::core::io::ExportFormat;
use crate::core::models::signal::SignalDocument;
use crate::engine::error::EngineError;
use std::path::Path;
use tracing::debug;

/// Reads a signal document from `path`, choosing CSV or JSON by extension.
pub fn load_document(path: &Path) -> Result<SignalDocument, EngineError> {
    let format = ExportFormat::from_path(path).ok_or_else(|| EngineError::UnknownFormat {
        path: path.to_path_buf(),
    })?;

    let document = format
        .read_signal_from_path(path)
        .map_err(|source| EngineError::SignalLoad {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(
        path = %path.display(),
        format = %format,
        residues = document.entropy.len(),
        "Loaded signal document."
    );
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn load_document_dispatches_on_extension() {
        let dir = tempdir().unwrap();
        let json_path = dir.path().join("tau.json");
        let csv_path = dir.path().join("tau.CSV");
        fs::write(&json_path, r#"{"name": "Tau", "entropy": {"1": 0.8}}"#).unwrap();
        fs::write(&csv_path, "residue_number,entropy_value\n1,0.8\n").unwrap();

        let from_json = load_document(&json_path).unwrap();
        let from_csv = load_document(&csv_path).unwrap();
        assert_eq!(from_json.name.as_deref(), Some("Tau"));
        assert_eq!(from_json.entropy, from_csv.entropy);
    }

    #[test]
    fn load_document_rejects_unknown_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tau.pdb");
        fs::write(&path, "ATOM").unwrap();
        assert!(matches!(
            load_document(&path),
            Err(EngineError::UnknownFormat { .. })
        ));
    }

    #[test]
    fn load_document_reports_path_on_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.json");
        match load_document(&path) {
            Err(EngineError::SignalLoad { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected SignalLoad error, got {:?}", other),
        }
    }
}
