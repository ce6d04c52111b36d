use super::defaults::DefaultsConfig;
use super::file::{FileConfig, FileRegionPredicate};
use super::models::{AnalyzeAppConfig, CompareAppConfig};
use crate::cli::{AnalyzeArgs, CompareArgs, ConfigArgs};
use crate::error::{CliError, Result};
use crate::utils::parser::{self, ParseError};
use ewcl::core::io::ExportFormat;
use ewcl::core::models::comparison::MissingResiduePolicy;
use ewcl::engine::config::{AnalysisConfig, AnalysisConfigBuilder, RegionPredicate};
use ewcl::engine::error::EngineError;
use ewcl::engine::regions::BandPredicate;
use std::path::PathBuf;

/// Values given as dedicated command-line flags; these win over every other layer.
#[derive(Default)]
struct CoreOverrides {
    low_cut: Option<f64>,
    high_cut: Option<f64>,
    min_run_length: Option<usize>,
    significance_threshold: Option<f64>,
    missing_residues: Option<MissingResiduePolicy>,
}

pub fn build_analyze_config(args: &AnalyzeArgs) -> Result<AnalyzeAppConfig> {
    let defaults = DefaultsConfig::default();
    let mut file_config = load_file_config(&args.config)?;

    if let Some(score) = args.collapse_score {
        if !score.is_finite() {
            return Err(CliError::Argument(format!(
                "Collapse score must be a finite number (got {})",
                score
            )));
        }
    }

    let format = args
        .format
        .or(file_config.output.take().and_then(|o| o.format))
        .unwrap_or(defaults.export_format);

    let overrides = CoreOverrides {
        low_cut: args.low_cut,
        high_cut: args.high_cut,
        min_run_length: args.min_run_length,
        ..CoreOverrides::default()
    };
    let core_config = build_core_config(file_config, overrides, &defaults)?;

    Ok(AnalyzeAppConfig {
        inputs: args.inputs.clone(),
        output_dir: args
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(".")),
        format,
        name: args.name.clone(),
        collapse_score: args.collapse_score,
        baseline: args.baseline.clone(),
        core_config,
    })
}

pub fn build_compare_config(args: &CompareArgs) -> Result<CompareAppConfig> {
    let defaults = DefaultsConfig::default();
    let file_config = load_file_config(&args.config)?;

    if let Some(output) = &args.output {
        if ExportFormat::from_path(output).is_none() {
            return Err(CliError::Argument(format!(
                "Cannot infer export format from '{}'. Use a .json or .csv extension.",
                output.display()
            )));
        }
    }

    let overrides = CoreOverrides {
        significance_threshold: args.threshold,
        missing_residues: args.missing,
        ..CoreOverrides::default()
    };
    let core_config = build_core_config(file_config, overrides, &defaults)?;

    Ok(CompareAppConfig {
        baseline: args.baseline.clone(),
        variant: args.variant.clone(),
        output: args.output.clone(),
        top: args.top,
        core_config,
    })
}

fn load_file_config(args: &ConfigArgs) -> Result<FileConfig> {
    let file_config = match &args.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    apply_set_values(file_config, &args.set_values)
}

fn build_core_config(
    mut file_config: FileConfig,
    overrides: CoreOverrides,
    defaults: &DefaultsConfig,
) -> Result<AnalysisConfig> {
    let classification = file_config.classification.take().unwrap_or_default();
    let regions = file_config.regions.take().unwrap_or_default();
    let comparison = file_config.comparison.take().unwrap_or_default();

    let low_cut = overrides
        .low_cut
        .or(classification.low_cut)
        .unwrap_or(defaults.low_cut);
    let high_cut = overrides
        .high_cut
        .or(classification.high_cut)
        .unwrap_or(defaults.high_cut);

    let predicate = match regions.predicate.unwrap_or(FileRegionPredicate::Bands) {
        FileRegionPredicate::Bands => RegionPredicate::Bands(BandPredicate::new(
            regions.stable_below.unwrap_or(defaults.stable_below),
            regions.disordered_above.unwrap_or(defaults.disordered_above),
        )),
        FileRegionPredicate::ClassificationPolicy => RegionPredicate::ClassificationPolicy,
    };
    let min_run_length = overrides
        .min_run_length
        .or(regions.min_run_length)
        .unwrap_or(defaults.min_run_length);

    let significance_threshold = overrides
        .significance_threshold
        .or(comparison.significance_threshold)
        .unwrap_or(defaults.significance_threshold);
    let missing_residues = overrides
        .missing_residues
        .or(comparison.missing_residues)
        .unwrap_or(defaults.missing_residues);

    AnalysisConfigBuilder::new()
        .low_cut(low_cut)
        .high_cut(high_cut)
        .region_predicate(predicate)
        .min_run_length(min_run_length)
        .significance_threshold(significance_threshold)
        .missing_residues(missing_residues)
        .build()
        .map_err(|e| CliError::from(EngineError::Config(e)))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for assignment in set_values {
        let (key, value) = parser::parse_assignment(assignment).map_err(set_error)?;

        match key {
            "classification.low-cut" => {
                config
                    .classification
                    .get_or_insert_with(Default::default)
                    .low_cut = Some(parser::parse_value(key, value, "float").map_err(set_error)?);
            }
            "classification.high-cut" => {
                config
                    .classification
                    .get_or_insert_with(Default::default)
                    .high_cut = Some(parser::parse_value(key, value, "float").map_err(set_error)?);
            }
            "regions.predicate" => {
                let predicate = FileRegionPredicate::parse(value).ok_or_else(|| {
                    CliError::Config(format!(
                        "Invalid value for {}: '{}'. Expected 'bands' or 'classification-policy'.",
                        key, value
                    ))
                })?;
                config
                    .regions
                    .get_or_insert_with(Default::default)
                    .predicate = Some(predicate);
            }
            "regions.stable-below" => {
                config
                    .regions
                    .get_or_insert_with(Default::default)
                    .stable_below = Some(parser::parse_value(key, value, "float").map_err(set_error)?);
            }
            "regions.disordered-above" => {
                config
                    .regions
                    .get_or_insert_with(Default::default)
                    .disordered_above =
                    Some(parser::parse_value(key, value, "float").map_err(set_error)?);
            }
            "regions.min-run-length" => {
                config
                    .regions
                    .get_or_insert_with(Default::default)
                    .min_run_length =
                    Some(parser::parse_value(key, value, "integer").map_err(set_error)?);
            }
            "comparison.significance-threshold" => {
                config
                    .comparison
                    .get_or_insert_with(Default::default)
                    .significance_threshold =
                    Some(parser::parse_value(key, value, "float").map_err(set_error)?);
            }
            "comparison.missing-residues" => {
                config
                    .comparison
                    .get_or_insert_with(Default::default)
                    .missing_residues = Some(
                    value
                        .parse::<MissingResiduePolicy>()
                        .map_err(|e| CliError::Config(e.to_string()))?,
                );
            }
            "output.format" => {
                config.output.get_or_insert_with(Default::default).format = Some(
                    value
                        .parse::<ExportFormat>()
                        .map_err(|e| CliError::Config(e.to_string()))?,
                );
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

fn set_error(e: ParseError) -> CliError {
    CliError::Config(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn base_analyze_args() -> AnalyzeArgs {
        AnalyzeArgs {
            inputs: vec![PathBuf::from("tau.json")],
            output_dir: None,
            format: None,
            collapse_score: None,
            name: None,
            baseline: None,
            config: ConfigArgs::default(),
            low_cut: None,
            high_cut: None,
            min_run_length: None,
        }
    }

    fn base_compare_args() -> CompareArgs {
        CompareArgs {
            baseline: PathBuf::from("wt.json"),
            variant: PathBuf::from("mut.json"),
            threshold: None,
            missing: None,
            output: None,
            top: 10,
            config: ConfigArgs::default(),
        }
    }

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ewcl.toml");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn build_analyze_config_uses_defaults_without_file() {
        let app = build_analyze_config(&base_analyze_args()).expect("build ok");

        assert_eq!(app.core_config, AnalysisConfig::default());
        assert_eq!(app.format, ExportFormat::Json);
        assert_eq!(app.output_dir, PathBuf::from("."));
        assert!(app.baseline.is_none());
    }

    #[test]
    fn build_analyze_config_reads_file_and_merges() {
        let (_dir, path) = write_config(
            r#"
            [classification]
            low-cut = 0.25
            high-cut = 0.6

            [regions]
            stable-below = 0.15
            min-run-length = 8

            [output]
            format = "csv"
            "#,
        );
        let mut args = base_analyze_args();
        args.config.config = Some(path);

        let app = build_analyze_config(&args).expect("build ok");
        let cfg = app.core_config;

        assert_eq!(cfg.policy.low_cut(), 0.25);
        assert_eq!(cfg.policy.high_cut(), 0.6);
        assert_eq!(cfg.regions.min_run_length, 8);
        assert_eq!(
            cfg.regions.predicate,
            RegionPredicate::Bands(BandPredicate::new(
                0.15,
                BandPredicate::DEFAULT_DISORDERED_ABOVE
            ))
        );
        assert_eq!(app.format, ExportFormat::Csv);
    }

    #[test]
    fn cli_flags_override_file_and_set_values() {
        let (_dir, path) = write_config(
            r#"
            [classification]
            low-cut = 0.1
            [regions]
            min-run-length = 3
            "#,
        );
        let mut args = base_analyze_args();
        args.config.config = Some(path);
        args.config.set_values = vec!["classification.low-cut=0.2".to_string()];
        args.low_cut = Some(0.28);
        args.min_run_length = Some(6);
        args.format = Some(ExportFormat::Json);

        let app = build_analyze_config(&args).expect("build ok");

        assert_eq!(app.core_config.policy.low_cut(), 0.28);
        assert_eq!(app.core_config.regions.min_run_length, 6);
        assert_eq!(app.format, ExportFormat::Json);
    }

    #[test]
    fn set_values_override_file() {
        let (_dir, path) = write_config("[comparison]\nsignificance-threshold = 0.3\n");
        let mut args = base_compare_args();
        args.config.config = Some(path);
        args.config.set_values = vec![
            "comparison.significance-threshold=0.05".to_string(),
            "comparison.missing-residues=skip-incomparable".to_string(),
            "regions.predicate=classification-policy".to_string(),
            "classification.high-cut=0.55".to_string(),
        ];

        let app = build_compare_config(&args).expect("build ok");
        let cfg = app.core_config;

        assert!((cfg.comparison.significance_threshold - 0.05).abs() < 1e-12);
        assert_eq!(
            cfg.comparison.missing_residues,
            MissingResiduePolicy::SkipIncomparable
        );
        assert_eq!(cfg.regions.predicate, RegionPredicate::ClassificationPolicy);
        assert_eq!(cfg.policy.high_cut(), 0.55);
    }

    #[test]
    fn compare_flags_override_set_values() {
        let mut args = base_compare_args();
        args.config.set_values = vec!["comparison.significance-threshold=0.05".to_string()];
        args.threshold = Some(0.2);
        args.missing = Some(MissingResiduePolicy::SkipIncomparable);

        let app = build_compare_config(&args).expect("build ok");

        assert_eq!(app.core_config.comparison.significance_threshold, 0.2);
        assert_eq!(
            app.core_config.comparison.missing_residues,
            MissingResiduePolicy::SkipIncomparable
        );
        assert_eq!(app.top, 10);
    }

    #[test]
    fn unsupported_set_key_is_rejected() {
        let mut args = base_analyze_args();
        args.config.set_values = vec!["regions.max-run-length=3".to_string()];
        assert!(matches!(
            build_analyze_config(&args),
            Err(CliError::Config(msg)) if msg.contains("regions.max-run-length")
        ));
    }

    #[test]
    fn malformed_set_value_is_rejected() {
        let mut args = base_analyze_args();
        args.config.set_values = vec!["regions.min-run-length=many".to_string()];
        assert!(matches!(
            build_analyze_config(&args),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn inverted_policy_is_reported_as_engine_config_error() {
        let mut args = base_analyze_args();
        args.low_cut = Some(0.7);
        args.high_cut = Some(0.4);
        let err = build_analyze_config(&args).unwrap_err();
        assert!(matches!(err, CliError::EwclCore(EngineError::Config(_))));
        assert!(err.to_string().starts_with("Invalid analysis configuration:"));
    }

    #[test]
    fn non_finite_collapse_score_is_rejected() {
        let mut args = base_analyze_args();
        args.collapse_score = Some(f64::NAN);
        assert!(matches!(
            build_analyze_config(&args),
            Err(CliError::Argument(_))
        ));
    }

    #[test]
    fn compare_output_needs_known_extension() {
        let mut args = base_compare_args();
        args.output = Some(PathBuf::from("diff.txt"));
        assert!(matches!(
            build_compare_config(&args),
            Err(CliError::Argument(_))
        ));

        args.output = Some(PathBuf::from("diff.csv"));
        assert!(build_compare_config(&args).is_ok());
    }
}
