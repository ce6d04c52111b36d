use crate::error::{CliError, Result};
use ewcl::core::io::ExportFormat;
use ewcl::core::models::comparison::MissingResiduePolicy;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub classification: Option<FileClassificationConfig>,
    pub regions: Option<FileRegionConfig>,
    pub comparison: Option<FileComparisonConfig>,
    pub output: Option<FileOutputConfig>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileClassificationConfig {
    pub low_cut: Option<f64>,
    pub high_cut: Option<f64>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FileRegionPredicate {
    Bands,
    ClassificationPolicy,
}

impl FileRegionPredicate {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "bands" => Some(Self::Bands),
            "classification-policy" => Some(Self::ClassificationPolicy),
            _ => None,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileRegionConfig {
    pub predicate: Option<FileRegionPredicate>,
    pub stable_below: Option<f64>,
    pub disordered_above: Option<f64>,
    pub min_run_length: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileComparisonConfig {
    pub significance_threshold: Option<f64>,
    pub missing_residues: Option<MissingResiduePolicy>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileOutputConfig {
    pub format: Option<ExportFormat>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            CliError::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
