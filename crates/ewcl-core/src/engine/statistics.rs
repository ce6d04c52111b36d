use super::classifier::classify;
use crate::core::models::policy::ThresholdPolicy;
use crate::core::models::signal::ResidueSignal;
use crate::core::models::statistics::{SignalStatistics, StateDistribution};

/// Computes count, mean, minimum and maximum in a single pass.
///
/// Returns [`SignalStatistics::Empty`] for a signal without residues. The mean is
/// bounded by the observed range so that `min <= average <= max` holds despite
/// floating-point rounding.
pub fn compute(signal: &ResidueSignal) -> SignalStatistics {
    let mut values = signal.values();
    let Some(first) = values.next() else {
        return SignalStatistics::Empty;
    };

    let (mut count, mut sum, mut min, mut max) = (1usize, first, first, first);
    for value in values {
        count += 1;
        sum += value;
        min = min.min(value);
        max = max.max(value);
    }

    SignalStatistics::Summary {
        count,
        average: (sum / count as f64).clamp(min, max),
        min,
        max,
    }
}

/// Counts residues per structural state under `policy`.
pub fn distribution(signal: &ResidueSignal, policy: &ThresholdPolicy) -> StateDistribution {
    let mut dist = StateDistribution::default();
    for value in signal.values() {
        dist.record(classify(value, policy));
    }
    dist
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::policy::ResidueState;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn compute_returns_empty_for_empty_signal() {
        assert_eq!(compute(&ResidueSignal::new()), SignalStatistics::Empty);
    }

    #[test]
    fn compute_single_residue_has_equal_bounds() {
        let signal = ResidueSignal::from_pairs([(4, 0.42)]).unwrap();
        assert_eq!(
            compute(&signal),
            SignalStatistics::Summary {
                count: 1,
                average: 0.42,
                min: 0.42,
                max: 0.42
            }
        );
    }

    #[test]
    fn compute_aggregates_all_values() {
        let signal =
            ResidueSignal::from_pairs([(1, 0.1), (2, 0.5), (3, 0.9), (7, 0.3)]).unwrap();
        let stats = compute(&signal);
        assert_eq!(stats.count(), 4);
        assert!(f64_approx_equal(stats.average().unwrap(), 0.45));
        assert_eq!(stats.min(), Some(0.1));
        assert_eq!(stats.max(), Some(0.9));
    }

    #[test]
    fn distribution_uses_policy_boundaries() {
        let signal =
            ResidueSignal::from_pairs([(1, 0.1), (2, 0.3), (3, 0.5), (4, 0.51), (5, 0.29)])
                .unwrap();
        let dist = distribution(&signal, &ThresholdPolicy::default());
        assert_eq!(dist.count(ResidueState::Ordered), 2);
        assert_eq!(dist.count(ResidueState::Transition), 2);
        assert_eq!(dist.count(ResidueState::Disordered), 1);
        assert_eq!(dist.total(), signal.len());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(128))]

            #[test]
            fn prop_average_lies_within_range(values in prop::collection::vec(0.0f64..=1.0, 0..64)) {
                let signal = ResidueSignal::from_pairs(
                    values.iter().enumerate().map(|(i, &v)| (i as u32 + 1, v)),
                ).unwrap();
                let stats = compute(&signal);

                prop_assert_eq!(stats.is_empty(), values.is_empty());
                if let SignalStatistics::Summary { count, average, min, max } = stats {
                    prop_assert_eq!(count, values.len());
                    prop_assert!(min <= average && average <= max);
                }
            }
        }
    }
}
