use crate::cli::CompareArgs;
use crate::config::build_compare_config;
use crate::error::{CliError, Result};
use ewcl::core::io::ExportFormat;
use ewcl::core::models::comparison::ComparisonRecord;
use ewcl::core::models::report::ComparisonReport;
use ewcl::engine::comparison::top_changes;
use ewcl::engine::progress::ProgressReporter;
use ewcl::workflows;
use tracing::info;

pub fn run(args: CompareArgs) -> Result<()> {
    let app = build_compare_config(&args)?;

    info!(
        baseline = %app.baseline.display(),
        variant = %app.variant.display(),
        "Comparing signal files."
    );
    let report = workflows::compare::run_from_paths(
        &app.baseline,
        &app.variant,
        &app.core_config,
        &ProgressReporter::new(),
    )?;

    print_report(&report, app.top);

    if let Some(output) = &app.output {
        let format = ExportFormat::from_path(output).ok_or_else(|| {
            CliError::Argument(format!(
                "Cannot infer export format from '{}'",
                output.display()
            ))
        })?;
        format
            .write_comparison_to_path(&report, output)
            .map_err(|source| CliError::Export {
                path: output.clone(),
                source,
            })?;
        println!("✓ Comparison written to: {}", output.display());
    }
    Ok(())
}

fn print_report(report: &ComparisonReport, top: usize) {
    let summary = &report.summary;
    println!(
        "{} vs. {}",
        report.baseline_name.as_deref().unwrap_or("baseline"),
        report.variant_name.as_deref().unwrap_or("variant")
    );
    println!(
        "  Compared: {}  Significant (|Δ| > {}): {}  Increased: {}  Decreased: {}",
        summary.compared,
        report.significance_threshold,
        summary.significant,
        summary.increased,
        summary.decreased
    );

    let changes = top_changes(&report.records, top);
    if changes.is_empty() {
        println!("  No significant differences found.");
        return;
    }
    println!("  Largest changes:");
    for record in &changes {
        println!("{}", format_change(record));
    }
}

fn format_change(record: &ComparisonRecord) -> String {
    format!(
        "    Residue {:>5}: {:.4} → {:.4} ({:+.4})",
        record.residue_index, record.baseline_value, record.variant_value, record.delta
    )
}
