use crate::core::models::policy::{ResidueState, ThresholdPolicy};
use crate::core::models::signal::{ResidueIndex, ResidueSignal};

/// Classifies one entropy value under `policy`.
///
/// `value < low_cut` is `Ordered`, `low_cut <= value <= high_cut` is `Transition` and
/// `value > high_cut` is `Disordered`. Values outside `[0, 1]` fall into the nearest
/// extreme band and NaN lands in `Transition`; classification never fails.
#[inline]
pub fn classify(value: f64, policy: &ThresholdPolicy) -> ResidueState {
    if value < policy.low_cut() {
        ResidueState::Ordered
    } else if value > policy.high_cut() {
        ResidueState::Disordered
    } else {
        ResidueState::Transition
    }
}

/// A residue together with its value and assigned state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifiedResidue {
    pub residue_index: ResidueIndex,
    pub value: f64,
    pub state: ResidueState,
}

/// Classifies every residue of `signal`, in ascending residue order.
pub fn classify_signal<'a>(
    signal: &'a ResidueSignal,
    policy: &'a ThresholdPolicy,
) -> impl Iterator<Item = ClassifiedResidue> + 'a {
    signal.iter().map(move |(residue_index, value)| ClassifiedResidue {
        residue_index,
        value,
        state: classify(value, policy),
    })
}
