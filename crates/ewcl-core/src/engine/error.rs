use super::config::ConfigError;
use crate::core::io::FormatError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid analysis configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to load signal from '{path}': {source}", path = path.display())]
    SignalLoad {
        path: PathBuf,
        #[source]
        source: FormatError,
    },

    #[error("Cannot determine signal format for '{path}' (expected a .json or .csv file)", path = path.display())]
    UnknownFormat { path: PathBuf },
}
