use super::comparison::DEFAULT_SIGNIFICANCE_THRESHOLD;
use super::regions::{BandPredicate, DEFAULT_MIN_RUN_LENGTH, RunPredicate};
use crate::core::models::cluster::ClusterLabel;
use crate::core::models::comparison::MissingResiduePolicy;
use crate::core::models::policy::{PolicyError, ThresholdPolicy};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Which predicate delimits clusters during region detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RegionPredicate {
    /// Dedicated stable/disordered cut points, independent of the classification policy.
    Bands(BandPredicate),
    /// Reuse the classification policy: `Ordered` runs are stable, `Disordered` runs are
    /// disordered.
    ClassificationPolicy,
}

impl Default for RegionPredicate {
    fn default() -> Self {
        RegionPredicate::Bands(BandPredicate::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionConfig {
    pub predicate: RegionPredicate,
    pub min_run_length: usize,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            predicate: RegionPredicate::default(),
            min_run_length: DEFAULT_MIN_RUN_LENGTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonConfig {
    pub significance_threshold: f64,
    pub missing_residues: MissingResiduePolicy,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            significance_threshold: DEFAULT_SIGNIFICANCE_THRESHOLD,
            missing_residues: MissingResiduePolicy::default(),
        }
    }
}

/// Validated parameters for one analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnalysisConfig {
    pub policy: ThresholdPolicy,
    pub regions: RegionConfig,
    pub comparison: ComparisonConfig,
}

impl AnalysisConfig {
    /// The run predicate selected by `regions.predicate`, bound to this config's policy.
    pub fn run_predicate(&self) -> ConfiguredPredicate<'_> {
        ConfiguredPredicate {
            predicate: self.regions.predicate,
            policy: &self.policy,
        }
    }
}

/// Run predicate resolved from an [`AnalysisConfig`].
pub struct ConfiguredPredicate<'a> {
    predicate: RegionPredicate,
    policy: &'a ThresholdPolicy,
}

impl RunPredicate for ConfiguredPredicate<'_> {
    fn run_label(&self, value: f64) -> Option<ClusterLabel> {
        match &self.predicate {
            RegionPredicate::Bands(bands) => bands.run_label(value),
            RegionPredicate::ClassificationPolicy => self.policy.run_label(value),
        }
    }
}

#[derive(Default)]
pub struct AnalysisConfigBuilder {
    low_cut: Option<f64>,
    high_cut: Option<f64>,
    region_predicate: Option<RegionPredicate>,
    min_run_length: Option<usize>,
    significance_threshold: Option<f64>,
    missing_residues: Option<MissingResiduePolicy>,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn low_cut(mut self, value: f64) -> Self {
        self.low_cut = Some(value);
        self
    }
    pub fn high_cut(mut self, value: f64) -> Self {
        self.high_cut = Some(value);
        self
    }
    pub fn policy(mut self, policy: ThresholdPolicy) -> Self {
        self.low_cut = Some(policy.low_cut());
        self.high_cut = Some(policy.high_cut());
        self
    }
    pub fn region_predicate(mut self, predicate: RegionPredicate) -> Self {
        self.region_predicate = Some(predicate);
        self
    }
    pub fn min_run_length(mut self, length: usize) -> Self {
        self.min_run_length = Some(length);
        self
    }
    pub fn significance_threshold(mut self, threshold: f64) -> Self {
        self.significance_threshold = Some(threshold);
        self
    }
    pub fn missing_residues(mut self, policy: MissingResiduePolicy) -> Self {
        self.missing_residues = Some(policy);
        self
    }

    /// Fills unset parameters with their defaults and validates the result.
    pub fn build(self) -> Result<AnalysisConfig, ConfigError> {
        let policy = ThresholdPolicy::new(
            self.low_cut.unwrap_or(ThresholdPolicy::DEFAULT_LOW_CUT),
            self.high_cut.unwrap_or(ThresholdPolicy::DEFAULT_HIGH_CUT),
        )?;

        let predicate = self.region_predicate.unwrap_or_default();
        if let RegionPredicate::Bands(bands) = &predicate {
            validate_bands(bands)?;
        }

        let min_run_length = self.min_run_length.unwrap_or(DEFAULT_MIN_RUN_LENGTH);
        if min_run_length == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "min_run_length",
                reason: "must be at least 1".to_string(),
            });
        }

        let significance_threshold = self
            .significance_threshold
            .unwrap_or(DEFAULT_SIGNIFICANCE_THRESHOLD);
        if !significance_threshold.is_finite() || significance_threshold < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "significance_threshold",
                reason: format!("must be a non-negative number (got {})", significance_threshold),
            });
        }

        Ok(AnalysisConfig {
            policy,
            regions: RegionConfig {
                predicate,
                min_run_length,
            },
            comparison: ComparisonConfig {
                significance_threshold,
                missing_residues: self.missing_residues.unwrap_or_default(),
            },
        })
    }
}

fn validate_bands(bands: &BandPredicate) -> Result<(), ConfigError> {
    for (name, value) in [
        ("stable_below", bands.stable_below),
        ("disordered_above", bands.disordered_above),
    ] {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(ConfigError::InvalidParameter {
                name,
                reason: format!("must lie within [0, 1] (got {})", value),
            });
        }
    }
    if bands.stable_below > bands.disordered_above {
        return Err(ConfigError::InvalidParameter {
            name: "stable_below",
            reason: format!(
                "must not exceed disordered_above ({} > {})",
                bands.stable_below, bands.disordered_above
            ),
        });
    }
    Ok(())
}
