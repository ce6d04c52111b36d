use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Structural state assigned to a single residue.
///
/// Variants are ordered from least to most disordered, so comparisons between states
/// follow the underlying entropy scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ResidueState {
    Ordered,
    Transition,
    Disordered,
}

impl ResidueState {
    pub const ALL: [ResidueState; 3] = [
        ResidueState::Ordered,
        ResidueState::Transition,
        ResidueState::Disordered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResidueState::Ordered => "Ordered",
            ResidueState::Transition => "Transition",
            ResidueState::Disordered => "Disordered",
        }
    }
}

impl fmt::Display for ResidueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown residue state '{0}'. Expected 'Ordered', 'Transition' or 'Disordered'.")]
pub struct ParseStateError(pub String);

impl FromStr for ResidueState {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ordered" => Ok(ResidueState::Ordered),
            "transition" => Ok(ResidueState::Transition),
            "disordered" => Ok(ResidueState::Disordered),
            _ => Err(ParseStateError(s.to_string())),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PolicyError {
    #[error("Cut point '{name}' must be a finite number within [0, 1] (got {value})")]
    OutOfRange { name: &'static str, value: f64 },
    #[error("Low cut ({low_cut}) must not exceed high cut ({high_cut})")]
    Inverted { low_cut: f64, high_cut: f64 },
}

/// The pair of cut points splitting the entropy scale into three bands.
///
/// - *Ordered*: `[0, low_cut)`
/// - *Transition*: `[low_cut, high_cut]` (both boundaries included)
/// - *Disordered*: `(high_cut, 1]`
///
/// A single policy value is passed explicitly to every classification call so that
/// tables, exports, region predicates and summaries always agree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPolicy", rename_all = "camelCase")]
pub struct ThresholdPolicy {
    low_cut: f64,
    high_cut: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPolicy {
    low_cut: f64,
    high_cut: f64,
}

impl TryFrom<RawPolicy> for ThresholdPolicy {
    type Error = PolicyError;

    fn try_from(raw: RawPolicy) -> Result<Self, Self::Error> {
        Self::new(raw.low_cut, raw.high_cut)
    }
}

impl ThresholdPolicy {
    pub const DEFAULT_LOW_CUT: f64 = 0.3;
    pub const DEFAULT_HIGH_CUT: f64 = 0.5;

    pub fn new(low_cut: f64, high_cut: f64) -> Result<Self, PolicyError> {
        check_cut("low_cut", low_cut)?;
        check_cut("high_cut", high_cut)?;
        if low_cut > high_cut {
            return Err(PolicyError::Inverted { low_cut, high_cut });
        }
        Ok(Self { low_cut, high_cut })
    }

    pub fn low_cut(&self) -> f64 {
        self.low_cut
    }

    pub fn high_cut(&self) -> f64 {
        self.high_cut
    }
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self {
            low_cut: Self::DEFAULT_LOW_CUT,
            high_cut: Self::DEFAULT_HIGH_CUT,
        }
    }
}

fn check_cut(name: &'static str, value: f64) -> Result<(), PolicyError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(PolicyError::OutOfRange { name, value })
    }
}
