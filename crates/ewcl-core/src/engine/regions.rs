use super::classifier::classify;
use crate::core::models::cluster::{Cluster, ClusterLabel};
use crate::core::models::policy::{ResidueState, ThresholdPolicy};
use crate::core::models::signal::{ResidueIndex, ResidueSignal};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_RUN_LENGTH: usize = 5;

/// Decides which run, if any, a residue value belongs to.
///
/// `None` marks a gap band: it ends the active run and never starts a new one.
pub trait RunPredicate {
    fn run_label(&self, value: f64) -> Option<ClusterLabel>;
}

impl<F> RunPredicate for F
where
    F: Fn(f64) -> Option<ClusterLabel>,
{
    fn run_label(&self, value: f64) -> Option<ClusterLabel> {
        self(value)
    }
}

/// Runs follow the classifier: `Ordered` residues form `Stable` runs, `Disordered`
/// residues form `Disordered` runs and `Transition` is the gap band.
impl RunPredicate for ThresholdPolicy {
    fn run_label(&self, value: f64) -> Option<ClusterLabel> {
        match classify(value, self) {
            ResidueState::Ordered => Some(ClusterLabel::Stable),
            ResidueState::Disordered => Some(ClusterLabel::Disordered),
            ResidueState::Transition => None,
        }
    }
}

/// Two strict cut points: `value < stable_below` is `Stable`, `value > disordered_above`
/// is `Disordered`, anything in between is the gap band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandPredicate {
    pub stable_below: f64,
    pub disordered_above: f64,
}

impl BandPredicate {
    pub const DEFAULT_STABLE_BELOW: f64 = 0.2;
    pub const DEFAULT_DISORDERED_ABOVE: f64 = 0.7;

    pub fn new(stable_below: f64, disordered_above: f64) -> Self {
        Self {
            stable_below,
            disordered_above,
        }
    }
}

impl Default for BandPredicate {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STABLE_BELOW, Self::DEFAULT_DISORDERED_ABOVE)
    }
}

impl RunPredicate for BandPredicate {
    fn run_label(&self, value: f64) -> Option<ClusterLabel> {
        if value < self.stable_below {
            Some(ClusterLabel::Stable)
        } else if value > self.disordered_above {
            Some(ClusterLabel::Disordered)
        } else {
            None
        }
    }
}

struct PendingRun {
    label: ClusterLabel,
    start: ResidueIndex,
    last: ResidueIndex,
    sum: f64,
    count: usize,
}

impl PendingRun {
    fn start(label: ClusterLabel, residue: ResidueIndex, value: f64) -> Self {
        Self {
            label,
            start: residue,
            last: residue,
            sum: value,
            count: 1,
        }
    }

    fn accepts(&self, label: ClusterLabel, residue: ResidueIndex) -> bool {
        self.label == label && self.last.checked_add(1) == Some(residue)
    }

    fn extend(&mut self, residue: ResidueIndex, value: f64) {
        self.last = residue;
        self.sum += value;
        self.count += 1;
    }

    fn finish(self, min_run_length: usize) -> Option<Cluster> {
        (self.count >= min_run_length).then(|| Cluster {
            start_index: self.start,
            end_index: self.last,
            mean_value: self.sum / self.count as f64,
            label: self.label,
        })
    }
}

/// Finds maximal runs of consecutive residues that share a run label.
///
/// A residue extends the active run only when its label matches and its residue
/// number immediately follows the previous one; a missing residue therefore splits a
/// run even if the labels agree. Runs shorter than `min_run_length` are dropped
/// (`0` is treated as `1`). Clusters are returned in ascending `start_index` order and
/// never overlap.
pub fn find_clusters<P>(
    signal: &ResidueSignal,
    predicate: &P,
    min_run_length: usize,
) -> Vec<Cluster>
where
    P: RunPredicate + ?Sized,
{
    let min_run_length = min_run_length.max(1);
    let mut clusters = Vec::new();
    let mut pending: Option<PendingRun> = None;

    for (residue, value) in signal.iter() {
        let label = predicate.run_label(value);

        if let (Some(run), Some(label)) = (pending.as_mut(), label) {
            if run.accepts(label, residue) {
                run.extend(residue, value);
                continue;
            }
        }

        if let Some(cluster) = pending.take().and_then(|run| run.finish(min_run_length)) {
            clusters.push(cluster);
        }
        pending = label.map(|label| PendingRun::start(label, residue, value));
    }

    if let Some(cluster) = pending.and_then(|run| run.finish(min_run_length)) {
        clusters.push(cluster);
    }

    clusters
}

/// Re-sorts clusters longest first (ties by lower start) for display.
///
/// Detection order is always ascending by start; this ordering exists only for
/// presentation and never feeds back into detection.
pub fn sorted_by_length(clusters: &[Cluster]) -> Vec<Cluster> {
    let mut sorted = clusters.to_vec();
    sorted.sort_by(|a, b| {
        b.len()
            .cmp(&a.len())
            .then_with(|| a.start_index.cmp(&b.start_index))
    });
    sorted
}

/// Total number of residues covered by `clusters`.
pub fn coverage(clusters: &[Cluster]) -> usize {
    clusters.iter().map(Cluster::len).sum()
}
