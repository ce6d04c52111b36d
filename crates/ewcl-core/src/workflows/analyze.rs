use super::load_document;
use crate::core::models::report::AnalysisReport;
use crate::core::models::signal::{ResidueSignal, SignalDocument};
use crate::engine::comparison;
use crate::engine::config::AnalysisConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::ProgressReporter;
use crate::engine::{regions, statistics, summary};
use std::path::Path;
use tracing::{debug, info, instrument};

#[instrument(skip_all, name = "analysis_workflow")]
pub fn run(
    document: &SignalDocument,
    config: &AnalysisConfig,
    reporter: &ProgressReporter,
) -> AnalysisReport {
    let signal = &document.entropy;
    info!(
        name = document.name.as_deref().unwrap_or("<unnamed>"),
        residues = signal.len(),
        "Starting signal analysis."
    );

    // === Phase 1: Statistics and state distribution ===
    let (stats, distribution) = reporter.phase("Statistics", || {
        let stats = statistics::compute(signal);
        let distribution = statistics::distribution(signal, &config.policy);
        debug!(
            ordered = distribution.ordered,
            transition = distribution.transition,
            disordered = distribution.disordered,
            "Residue states assigned."
        );
        (stats, distribution)
    });

    // === Phase 2: Region detection ===
    let clusters = reporter.phase("Region Detection", || {
        let clusters = regions::find_clusters(
            signal,
            &config.run_predicate(),
            config.regions.min_run_length,
        );
        debug!(
            clusters = clusters.len(),
            covered = regions::coverage(&clusters),
            "Regions detected."
        );
        clusters
    });

    // === Phase 3: Narrative summary ===
    let summary = reporter.phase("Summary", || {
        summary::generate(&stats, &clusters, document.collapse_score)
    });

    info!(clusters = clusters.len(), "Analysis complete.");
    AnalysisReport {
        name: document.name.clone(),
        collapse_score: document.collapse_score,
        policy: config.policy,
        signal: signal.clone(),
        statistics: stats,
        distribution,
        clusters,
        comparisons: None,
        summary,
    }
}

/// Runs [`run`] and attaches the residues that changed significantly relative to
/// `baseline`, using the config's comparison parameters.
pub fn run_against_baseline(
    document: &SignalDocument,
    baseline: &ResidueSignal,
    config: &AnalysisConfig,
    reporter: &ProgressReporter,
) -> AnalysisReport {
    let mut report = run(document, config, reporter);

    let records = reporter.phase("Baseline Comparison", || {
        comparison::compare(
            baseline,
            &report.signal,
            config.comparison.significance_threshold,
            config.comparison.missing_residues,
        )
    });
    info!(
        significant = records.len(),
        "Compared against baseline signal."
    );
    report.comparisons = Some(records);

    report
}

/// Loads a signal file and analyzes it. A document without a name takes the file
/// stem as its name.
pub fn run_from_path(
    path: &Path,
    config: &AnalysisConfig,
    reporter: &ProgressReporter,
) -> Result<AnalysisReport, EngineError> {
    let mut document = load_document(path)?;
    if document.name.is_none() {
        document.name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned());
    }
    Ok(run(&document, config, reporter))
}
