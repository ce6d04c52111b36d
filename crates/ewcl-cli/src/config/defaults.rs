use ewcl::core::io::ExportFormat;
use ewcl::core::models::comparison::MissingResiduePolicy;
use ewcl::core::models::policy::ThresholdPolicy;
use ewcl::engine::comparison::DEFAULT_SIGNIFICANCE_THRESHOLD;
use ewcl::engine::regions::{BandPredicate, DEFAULT_MIN_RUN_LENGTH};

pub struct DefaultsConfig {
    pub low_cut: f64,
    pub high_cut: f64,
    pub stable_below: f64,
    pub disordered_above: f64,
    pub min_run_length: usize,
    pub significance_threshold: f64,
    pub missing_residues: MissingResiduePolicy,
    pub export_format: ExportFormat,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            low_cut: ThresholdPolicy::DEFAULT_LOW_CUT,
            high_cut: ThresholdPolicy::DEFAULT_HIGH_CUT,
            stable_below: BandPredicate::DEFAULT_STABLE_BELOW,
            disordered_above: BandPredicate::DEFAULT_DISORDERED_ABOVE,
            min_run_length: DEFAULT_MIN_RUN_LENGTH,
            significance_threshold: DEFAULT_SIGNIFICANCE_THRESHOLD,
            missing_residues: MissingResiduePolicy::default(),
            export_format: ExportFormat::Json,
        }
    }
}
