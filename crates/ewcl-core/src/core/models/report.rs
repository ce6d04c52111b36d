use super::cluster::Cluster;
use super::comparison::{ComparisonRecord, ComparisonSummary, MissingResiduePolicy};
use super::policy::ThresholdPolicy;
use super::signal::ResidueSignal;
use super::statistics::{SignalStatistics, StateDistribution};
use serde::{Deserialize, Serialize};

/// Everything derived from one analysis run over a single signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapse_score: Option<f64>,
    pub policy: ThresholdPolicy,
    pub signal: ResidueSignal,
    pub statistics: SignalStatistics,
    pub distribution: StateDistribution,
    pub clusters: Vec<Cluster>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparisons: Option<Vec<ComparisonRecord>>,
    pub summary: String,
}

/// Result of comparing a baseline signal against a variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_name: Option<String>,
    pub significance_threshold: f64,
    pub missing_residues: MissingResiduePolicy,
    pub summary: ComparisonSummary,
    pub records: Vec<ComparisonRecord>,
}
