use ewcl::core::io::ExportFormat;
use ewcl::engine::config::AnalysisConfig;
use std::path::PathBuf;

#[derive(Debug)]
pub struct AnalyzeAppConfig {
    pub inputs: Vec<PathBuf>,
    pub output_dir: PathBuf,
    pub format: ExportFormat,
    pub name: Option<String>,
    pub collapse_score: Option<f64>,
    pub baseline: Option<PathBuf>,
    pub core_config: AnalysisConfig,
}

pub struct CompareAppConfig {
    pub baseline: PathBuf,
    pub variant: PathBuf,
    pub output: Option<PathBuf>,
    pub top: usize,
    pub core_config: AnalysisConfig,
}
