pub mod builder;
pub mod defaults;
pub mod file;
pub mod models;

pub use builder::{build_analyze_config, build_compare_config};
pub use models::AnalyzeAppConfig;
