use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Residue sequence number as reported by the producing model (1-based).
pub type ResidueIndex = u32;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SignalError {
    #[error("Invalid residue number '{0}': expected a positive integer")]
    InvalidResidueKey(String),
    #[error("Residue number 0 is not allowed; residue numbering starts at 1")]
    ZeroResidueIndex,
    #[error("Duplicate residue number {0}")]
    DuplicateResidue(ResidueIndex),
    #[error("Non-finite entropy value {value} for residue {residue}")]
    NonFiniteValue { residue: ResidueIndex, value: f64 },
}

/// A per-residue entropy signal.
///
/// Residues are always held and iterated in ascending residue-number order, no matter
/// the order in which they were supplied. Construction rejects zero or duplicate
/// residue numbers and non-finite values; finite values outside `[0, 1]` are kept
/// verbatim and handled by the classifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSignal", into = "BTreeMap<ResidueIndex, f64>")]
pub struct ResidueSignal {
    values: BTreeMap<ResidueIndex, f64>,
}

/// Wire shapes accepted for a signal: a map keyed by residue number, or a list of
/// explicit entries.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSignal {
    Map(BTreeMap<String, f64>),
    Entries(Vec<RawEntry>),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEntry {
    residue_index: ResidueIndex,
    value: f64,
}

impl TryFrom<RawSignal> for ResidueSignal {
    type Error = SignalError;

    fn try_from(raw: RawSignal) -> Result<Self, Self::Error> {
        match raw {
            RawSignal::Map(map) => Self::from_keyed(map),
            RawSignal::Entries(entries) => {
                Self::from_pairs(entries.into_iter().map(|e| (e.residue_index, e.value)))
            }
        }
    }
}

impl From<ResidueSignal> for BTreeMap<ResidueIndex, f64> {
    fn from(signal: ResidueSignal) -> Self {
        signal.values
    }
}

impl ResidueSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a signal from `(residue number, value)` pairs in any order.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, SignalError>
    where
        I: IntoIterator<Item = (ResidueIndex, f64)>,
    {
        let mut values = BTreeMap::new();
        for (residue, value) in pairs {
            if residue == 0 {
                return Err(SignalError::ZeroResidueIndex);
            }
            if !value.is_finite() {
                return Err(SignalError::NonFiniteValue { residue, value });
            }
            if values.insert(residue, value).is_some() {
                return Err(SignalError::DuplicateResidue(residue));
            }
        }
        Ok(Self { values })
    }

    /// Builds a signal from pairs whose residue numbers are decimal strings, the shape
    /// produced by JSON-speaking inference services.
    pub fn from_keyed<I, K>(entries: I) -> Result<Self, SignalError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut pairs = Vec::new();
        for (key, value) in entries {
            pairs.push((parse_residue_key(key.as_ref())?, value));
        }
        Self::from_pairs(pairs)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, residue: ResidueIndex) -> Option<f64> {
        self.values.get(&residue).copied()
    }

    pub fn contains(&self, residue: ResidueIndex) -> bool {
        self.values.contains_key(&residue)
    }

    /// Iterates `(residue number, value)` in ascending residue order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (ResidueIndex, f64)> + '_ {
        self.values.iter().map(|(&residue, &value)| (residue, value))
    }

    pub fn indices(&self) -> impl DoubleEndedIterator<Item = ResidueIndex> + '_ {
        self.values.keys().copied()
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = f64> + '_ {
        self.values.values().copied()
    }
}

pub(crate) fn parse_residue_key(key: &str) -> Result<ResidueIndex, SignalError> {
    let trimmed = key.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SignalError::InvalidResidueKey(key.to_string()));
    }
    trimmed
        .parse::<ResidueIndex>()
        .map_err(|_| SignalError::InvalidResidueKey(key.to_string()))
}

/// A signal as delivered by the inference collaborator, optionally carrying the
/// structure's name and its collapse score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalDocument {
    #[serde(default, alias = "proteinName", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        alias = "entropyScore",
        alias = "collapse_score",
        skip_serializing_if = "Option::is_none"
    )]
    pub collapse_score: Option<f64>,
    #[serde(alias = "residueEntropy", alias = "entropyMap")]
    pub entropy: ResidueSignal,
}

impl SignalDocument {
    pub fn new(entropy: ResidueSignal) -> Self {
        Self {
            name: None,
            collapse_score: None,
            entropy,
        }
    }
}
