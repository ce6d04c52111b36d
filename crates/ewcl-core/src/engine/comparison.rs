use crate::core::models::comparison::{ComparisonRecord, ComparisonSummary, MissingResiduePolicy};
use crate::core::models::signal::{ResidueIndex, ResidueSignal};
use std::collections::BTreeSet;

pub const DEFAULT_SIGNIFICANCE_THRESHOLD: f64 = 0.1;

/// Walks the sorted union of residue numbers and yields the aligned
/// `(residue, baseline, variant)` triples that take part in the comparison.
fn aligned<'a>(
    baseline: &'a ResidueSignal,
    variant: &'a ResidueSignal,
    missing: MissingResiduePolicy,
) -> impl Iterator<Item = (ResidueIndex, f64, f64)> + 'a {
    let union: BTreeSet<ResidueIndex> = baseline.indices().chain(variant.indices()).collect();

    union.into_iter().filter_map(move |residue| {
        match (baseline.get(residue), variant.get(residue), missing) {
            (Some(b), Some(v), _) => Some((residue, b, v)),
            (b, v, MissingResiduePolicy::TreatAsZero) => {
                Some((residue, b.unwrap_or(0.0), v.unwrap_or(0.0)))
            }
            (_, _, MissingResiduePolicy::SkipIncomparable) => None,
        }
    })
}

/// Reports residues whose value changes by more than `threshold` between `baseline`
/// and `variant`, in ascending residue order.
///
/// Residues present in only one signal are handled according to `missing`.
pub fn compare(
    baseline: &ResidueSignal,
    variant: &ResidueSignal,
    threshold: f64,
    missing: MissingResiduePolicy,
) -> Vec<ComparisonRecord> {
    aligned(baseline, variant, missing)
        .filter_map(|(residue_index, baseline_value, variant_value)| {
            let delta = variant_value - baseline_value;
            (delta.abs() > threshold).then_some(ComparisonRecord {
                residue_index,
                baseline_value,
                variant_value,
                delta,
            })
        })
        .collect()
}

/// Number of residues that take part in a comparison under `missing`.
pub fn compared_count(
    baseline: &ResidueSignal,
    variant: &ResidueSignal,
    missing: MissingResiduePolicy,
) -> usize {
    aligned(baseline, variant, missing).count()
}

pub fn summarize(records: &[ComparisonRecord], compared: usize) -> ComparisonSummary {
    let mut summary = ComparisonSummary {
        compared,
        significant: records.len(),
        ..ComparisonSummary::default()
    };

    for record in records {
        if record.is_increase() {
            summary.increased += 1;
            if summary
                .largest_increase
                .is_none_or(|best| record.delta > best.delta)
            {
                summary.largest_increase = Some(*record);
            }
        } else {
            summary.decreased += 1;
            if summary
                .largest_decrease
                .is_none_or(|best| record.delta < best.delta)
            {
                summary.largest_decrease = Some(*record);
            }
        }
    }

    summary
}

/// The `n` records with the largest absolute change (ties by lower residue number).
pub fn top_changes(records: &[ComparisonRecord], n: usize) -> Vec<ComparisonRecord> {
    let mut ranked = records.to_vec();
    ranked.sort_by(|a, b| {
        b.delta
            .abs()
            .total_cmp(&a.delta.abs())
            .then_with(|| a.residue_index.cmp(&b.residue_index))
    });
    ranked.truncate(n);
    ranked
}
