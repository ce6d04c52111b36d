use super::load_document;
use crate::core::models::report::ComparisonReport;
use crate::core::models::signal::SignalDocument;
use crate::engine::comparison;
use crate::engine::config::AnalysisConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::ProgressReporter;
use std::path::Path;
use tracing::{info, instrument};

#[instrument(skip_all, name = "comparison_workflow")]
pub fn run(
    baseline: &SignalDocument,
    variant: &SignalDocument,
    config: &AnalysisConfig,
    reporter: &ProgressReporter,
) -> ComparisonReport {
    let threshold = config.comparison.significance_threshold;
    let missing = config.comparison.missing_residues;

    info!(
        baseline_residues = baseline.entropy.len(),
        variant_residues = variant.entropy.len(),
        threshold,
        missing = %missing,
        "Comparing signals."
    );

    let (records, summary) = reporter.phase("Signal Comparison", || {
        let records =
            comparison::compare(&baseline.entropy, &variant.entropy, threshold, missing);
        let compared = comparison::compared_count(&baseline.entropy, &variant.entropy, missing);
        let summary = comparison::summarize(&records, compared);
        (records, summary)
    });

    info!(
        compared = summary.compared,
        significant = summary.significant,
        increased = summary.increased,
        decreased = summary.decreased,
        "Comparison complete."
    );

    ComparisonReport {
        baseline_name: baseline.name.clone(),
        variant_name: variant.name.clone(),
        significance_threshold: threshold,
        missing_residues: missing,
        summary,
        records,
    }
}

pub fn run_from_paths(
    baseline: &Path,
    variant: &Path,
    config: &AnalysisConfig,
    reporter: &ProgressReporter,
) -> Result<ComparisonReport, EngineError> {
    let baseline = load_document(baseline)?;
    let variant = load_document(variant)?;
    Ok(run(&baseline, &variant, config, reporter))
}
