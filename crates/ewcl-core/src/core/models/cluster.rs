use super::signal::ResidueIndex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of labels a contiguous region can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClusterLabel {
    Stable,
    Disordered,
}

impl ClusterLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClusterLabel::Stable => "Stable",
            ClusterLabel::Disordered => "Disordered",
        }
    }
}

impl fmt::Display for ClusterLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A contiguous run of residues sharing the same run label.
///
/// Every residue number in `start_index..=end_index` is present in the source signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    pub start_index: ResidueIndex,
    pub end_index: ResidueIndex,
    pub mean_value: f64,
    pub label: ClusterLabel,
}

impl Cluster {
    /// Number of residues covered by the cluster.
    pub fn len(&self) -> usize {
        (self.end_index - self.start_index) as usize + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cluster(start: ResidueIndex, end: ResidueIndex) -> Cluster {
        Cluster {
            start_index: start,
            end_index: end,
            mean_value: 0.1,
            label: ClusterLabel::Stable,
        }
    }

    #[test]
    fn len_counts_both_ends() {
        assert_eq!(cluster(10, 14).len(), 5);
        assert_eq!(cluster(3, 3).len(), 1);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(cluster(1, 5)).unwrap();
        assert_eq!(json["startIndex"], 1);
        assert_eq!(json["endIndex"], 5);
        assert_eq!(json["label"], "Stable");
    }
}
