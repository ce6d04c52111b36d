use super::signal::ResidueIndex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A residue whose entropy differs significantly between two signals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRecord {
    pub residue_index: ResidueIndex,
    pub baseline_value: f64,
    pub variant_value: f64,
    /// `variant_value - baseline_value`.
    pub delta: f64,
}

impl ComparisonRecord {
    pub fn is_increase(&self) -> bool {
        self.delta > 0.0
    }
}

/// How a residue present in only one of the two signals is compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingResiduePolicy {
    /// The absent value is taken as `0.0`.
    #[default]
    TreatAsZero,
    /// The residue is left out of the comparison entirely.
    SkipIncomparable,
}

impl MissingResiduePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissingResiduePolicy::TreatAsZero => "treat-as-zero",
            MissingResiduePolicy::SkipIncomparable => "skip-incomparable",
        }
    }
}

impl fmt::Display for MissingResiduePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error(
    "Unknown missing-residue policy '{0}'. Expected 'treat-as-zero' or 'skip-incomparable'."
)]
pub struct ParseMissingPolicyError(pub String);

impl FromStr for MissingResiduePolicy {
    type Err = ParseMissingPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "treat-as-zero" | "zero" => Ok(MissingResiduePolicy::TreatAsZero),
            "skip-incomparable" | "skip" => Ok(MissingResiduePolicy::SkipIncomparable),
            other => Err(ParseMissingPolicyError(other.to_string())),
        }
    }
}

/// Aggregate view of a comparison, for tables and reports.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    /// Residues that took part in the comparison.
    pub compared: usize,
    pub significant: usize,
    pub increased: usize,
    pub decreased: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub largest_increase: Option<ComparisonRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub largest_decrease: Option<ComparisonRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_policy_round_trips_through_strings() {
        for policy in [
            MissingResiduePolicy::TreatAsZero,
            MissingResiduePolicy::SkipIncomparable,
        ] {
            assert_eq!(policy.to_string().parse(), Ok(policy));
        }
        assert!("ignore".parse::<MissingResiduePolicy>().is_err());
    }

    #[test]
    fn missing_policy_defaults_to_treat_as_zero() {
        assert_eq!(
            MissingResiduePolicy::default(),
            MissingResiduePolicy::TreatAsZero
        );
    }
}
