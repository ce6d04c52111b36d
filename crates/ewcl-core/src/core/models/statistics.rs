use super::policy::ResidueState;
use serde::{Deserialize, Serialize};

/// Aggregate statistics over a signal.
///
/// `Empty` is the explicit "no data" result for a signal without residues; it is an
/// expected state, not a failure. It serializes as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SignalStatistics {
    Summary {
        count: usize,
        average: f64,
        min: f64,
        max: f64,
    },
    Empty,
}

impl SignalStatistics {
    pub fn is_empty(&self) -> bool {
        matches!(self, SignalStatistics::Empty)
    }

    pub fn count(&self) -> usize {
        match self {
            SignalStatistics::Summary { count, .. } => *count,
            SignalStatistics::Empty => 0,
        }
    }

    pub fn average(&self) -> Option<f64> {
        match self {
            SignalStatistics::Summary { average, .. } => Some(*average),
            SignalStatistics::Empty => None,
        }
    }

    pub fn min(&self) -> Option<f64> {
        match self {
            SignalStatistics::Summary { min, .. } => Some(*min),
            SignalStatistics::Empty => None,
        }
    }

    pub fn max(&self) -> Option<f64> {
        match self {
            SignalStatistics::Summary { max, .. } => Some(*max),
            SignalStatistics::Empty => None,
        }
    }
}

/// Number of residues falling in each structural state under one threshold policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateDistribution {
    pub ordered: usize,
    pub transition: usize,
    pub disordered: usize,
}

impl StateDistribution {
    pub fn total(&self) -> usize {
        self.ordered + self.transition + self.disordered
    }

    pub fn count(&self, state: ResidueState) -> usize {
        match state {
            ResidueState::Ordered => self.ordered,
            ResidueState::Transition => self.transition,
            ResidueState::Disordered => self.disordered,
        }
    }

    /// Share of residues in `state`, or `0.0` for an empty distribution.
    pub fn fraction(&self, state: ResidueState) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.count(state) as f64 / total as f64,
        }
    }

    pub(crate) fn record(&mut self, state: ResidueState) {
        match state {
            ResidueState::Ordered => self.ordered += 1,
            ResidueState::Transition => self.transition += 1,
            ResidueState::Disordered => self.disordered += 1,
        }
    }
}
