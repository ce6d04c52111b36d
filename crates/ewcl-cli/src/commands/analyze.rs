use crate::cli::AnalyzeArgs;
use crate::config::{AnalyzeAppConfig, build_analyze_config};
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use ewcl::core::io::ExportFormat;
use ewcl::core::models::policy::ResidueState;
use ewcl::core::models::report::AnalysisReport;
use ewcl::core::models::signal::SignalDocument;
use ewcl::core::models::statistics::StateDistribution;
use ewcl::engine::progress::ProgressReporter;
use ewcl::engine::summary::CollapseBand;
use ewcl::workflows::{self, analyze};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

struct Outcome {
    output_path: PathBuf,
    report: AnalysisReport,
}

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let app = build_analyze_config(&args)?;
    fs::create_dir_all(&app.output_dir)?;

    let baseline = app
        .baseline
        .as_deref()
        .map(workflows::load_document)
        .transpose()?;

    info!(
        inputs = app.inputs.len(),
        format = %app.format,
        "Analyzing signal files."
    );

    let handler = CliProgressHandler::new(app.inputs.len() as u64);
    let reporter = ProgressReporter::with_callback(handler.get_callback());

    let outcomes: Vec<Result<Outcome>> = app
        .inputs
        .par_iter()
        .map(|input| {
            let outcome = analyze_file(input, &app, baseline.as_ref(), &reporter);
            handler.file_finished(&input.display().to_string());
            outcome
        })
        .collect();

    handler.finish();

    let mut failures = 0;
    for (input, outcome) in app.inputs.iter().zip(outcomes) {
        match outcome {
            Ok(outcome) => print_outcome(&outcome),
            Err(e) => {
                failures += 1;
                error!("Failed to analyze {}: {}", input.display(), e);
                eprintln!("✗ {}: {}", input.display(), e);
            }
        }
    }

    if failures > 0 {
        return Err(CliError::Other(anyhow::anyhow!(
            "{} of {} input file(s) could not be analyzed",
            failures,
            app.inputs.len()
        )));
    }
    Ok(())
}

fn analyze_file(
    input: &Path,
    app: &AnalyzeAppConfig,
    baseline: Option<&SignalDocument>,
    reporter: &ProgressReporter,
) -> Result<Outcome> {
    let mut document = workflows::load_document(input)?;
    apply_document_overrides(&mut document, input, app);

    let report = match baseline {
        Some(baseline) => {
            analyze::run_against_baseline(&document, &baseline.entropy, &app.core_config, reporter)
        }
        None => analyze::run(&document, &app.core_config, reporter),
    };

    let output_path = output_path_for(&app.output_dir, input, app.format);
    app.format
        .write_report_to_path(&report, &output_path)
        .map_err(|source| CliError::Export {
            path: output_path.clone(),
            source,
        })?;
    info!("Wrote {}", output_path.display());

    Ok(Outcome {
        output_path,
        report,
    })
}

/// Command-line name and collapse score win over the document's own; an unnamed
/// document is named after its file stem.
fn apply_document_overrides(document: &mut SignalDocument, input: &Path, app: &AnalyzeAppConfig) {
    if let Some(name) = &app.name {
        document.name = Some(name.clone());
    } else if document.name.is_none() {
        document.name = input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned());
    }
    if let Some(score) = app.collapse_score {
        document.collapse_score = Some(score);
    }
}

/// `<dir>/<stem>_entropy.csv` or `<dir>/<stem>_analysis.json`.
fn output_path_for(output_dir: &Path, input: &Path, format: ExportFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "signal".to_string());
    let suffix = match format {
        ExportFormat::Csv => "entropy",
        ExportFormat::Json => "analysis",
    };
    output_dir.join(format!("{}_{}.{}", stem, suffix, format.extension()))
}

fn print_outcome(outcome: &Outcome) {
    let report = &outcome.report;
    println!(
        "\n{}",
        report.name.as_deref().unwrap_or("Unnamed structure")
    );
    match (
        report.statistics.average(),
        report.statistics.min(),
        report.statistics.max(),
    ) {
        (Some(average), Some(min), Some(max)) => println!(
            "  Residues: {}  Mean: {:.4}  Range: {:.4}\u{2013}{:.4}",
            report.statistics.count(),
            average,
            min,
            max
        ),
        _ => println!("  Residues: 0"),
    }
    if let Some(score) = report.collapse_score.filter(|s| s.is_finite()) {
        println!("  {}", collapse_line(score));
    }
    println!(
        "  {}  Regions: {}",
        state_breakdown(&report.distribution),
        report.clusters.len()
    );
    if let Some(records) = &report.comparisons {
        println!("  Significant changes vs. baseline: {}", records.len());
    }
    println!("  {}", report.summary);
    println!("✓ Written to: {}", outcome.output_path.display());
}

fn collapse_line(score: f64) -> String {
    format!(
        "Collapse score: {:.2} ({})",
        score,
        CollapseBand::from_score(score).label()
    )
}

fn state_breakdown(distribution: &StateDistribution) -> String {
    ResidueState::ALL
        .iter()
        .map(|&state| {
            format!(
                "{}: {} ({:.1}%)",
                state,
                distribution.count(state),
                distribution.fraction(state) * 100.0
            )
        })
        .collect::<Vec<_>>()
        .join("  ")
}
