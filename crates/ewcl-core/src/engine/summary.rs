use super::regions;
use crate::core::models::cluster::{Cluster, ClusterLabel};
use crate::core::models::statistics::SignalStatistics;

pub const NO_DATA_SUMMARY: &str = "No residue entropy data is available for this structure.";
pub const NO_REGIONS_SENTENCE: &str = "No extended stable or disordered regions were identified.";

/// How many regions the summary names at most.
const MAX_NAMED_REGIONS: usize = 2;

/// Narrative band for a structure-wide collapse score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollapseBand {
    /// `score < 0.3`
    Ordered,
    /// `0.3 <= score <= 0.5`
    MildlyDisordered,
    /// `score > 0.5`
    SignificantlyDisordered,
}

impl CollapseBand {
    pub fn from_score(score: f64) -> Self {
        if score < 0.3 {
            CollapseBand::Ordered
        } else if score <= 0.5 {
            CollapseBand::MildlyDisordered
        } else {
            CollapseBand::SignificantlyDisordered
        }
    }

    /// Short label for tables and badges.
    pub fn label(&self) -> &'static str {
        match self {
            CollapseBand::Ordered => "Ordered protein (stable structure)",
            CollapseBand::MildlyDisordered => "Partially disordered protein",
            CollapseBand::SignificantlyDisordered => "Highly disordered protein (unstable)",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            CollapseBand::Ordered => "a highly ordered, globular structure.",
            CollapseBand::MildlyDisordered => "mild disorder with partially structured regions.",
            CollapseBand::SignificantlyDisordered => {
                "significant disorder characteristic of intrinsically disordered proteins."
            }
        }
    }
}

/// Builds a short description of a signal from its statistics, its clusters and an
/// optional collapse score.
///
/// The output depends only on the arguments. An empty signal yields
/// [`NO_DATA_SUMMARY`]; a non-finite collapse score is ignored.
pub fn generate(
    stats: &SignalStatistics,
    clusters: &[Cluster],
    collapse_score: Option<f64>,
) -> String {
    if stats.is_empty() {
        return NO_DATA_SUMMARY.to_string();
    }

    let mut sentences = Vec::with_capacity(2);

    if let Some(score) = collapse_score.filter(|s| s.is_finite()) {
        sentences.push(format!(
            "This protein has a collapse score of {:.2}, indicating {}",
            score,
            CollapseBand::from_score(score).description()
        ));
    }

    sentences.push(region_sentence(clusters));
    sentences.join(" ")
}

fn region_sentence(clusters: &[Cluster]) -> String {
    let disordered = prominent_clusters(clusters, ClusterLabel::Disordered);
    if !disordered.is_empty() {
        let one = disordered.len() == 1;
        return format!(
            "Region{} {} show{} elevated entropy, suggesting possible intrinsic disorder domains.",
            if one { "" } else { "s" },
            format_regions(&disordered),
            if one { "s" } else { "" },
        );
    }

    let stable = prominent_clusters(clusters, ClusterLabel::Stable);
    if !stable.is_empty() {
        let one = stable.len() == 1;
        return format!(
            "Region{} {} exhibit{} very low entropy values, indicating stable structural elements.",
            if one { "" } else { "s" },
            format_regions(&stable),
            if one { "s" } else { "" },
        );
    }

    NO_REGIONS_SENTENCE.to_string()
}

/// The longest clusters carrying `label` (ties by lower start), re-ordered by start.
fn prominent_clusters(clusters: &[Cluster], label: ClusterLabel) -> Vec<Cluster> {
    let labelled: Vec<Cluster> = clusters.iter().filter(|c| c.label == label).copied().collect();
    let mut selected = regions::sorted_by_length(&labelled);
    selected.truncate(MAX_NAMED_REGIONS);
    selected.sort_by_key(|c| c.start_index);
    selected
}

/// Formats clusters as `"start–end"` ranges separated by `", "`.
pub fn format_regions(clusters: &[Cluster]) -> String {
    clusters
        .iter()
        .map(|c| format!("{}\u{2013}{}", c.start_index, c.end_index))
        .collect::<Vec<_>>()
        .join(", ")
}
