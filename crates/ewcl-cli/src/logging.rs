use crate::error::{CliError, Result};
use std::fs::File;
use std::path::PathBuf;
use tracing::Subscriber;
use tracing_subscriber::{
    Layer,
    filter::LevelFilter,
    fmt::{self},
    prelude::*,
    registry::LookupSpan,
};

fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::ERROR
    } else {
        match verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// Plain-text layer for `--log-file`: no colors, with thread ids and targets.
fn file_layer<S>(file: File) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_target(true)
}

pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(level_filter(verbosity, quiet))
        .with(stderr_layer);

    if let Some(path) = log_file {
        let file = File::create(&path).map_err(CliError::Io)?;

        subscriber.with(file_layer(file)).init();
    } else {
        subscriber.init();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ewcl::core::models::signal::{ResidueSignal, SignalDocument};
    use ewcl::engine::config::AnalysisConfig;
    use ewcl::engine::progress::ProgressReporter;
    use ewcl::workflows::analyze;
    use serial_test::serial;

    #[test]
    fn verbosity_maps_to_level_filter() {
        assert_eq!(level_filter(0, false), LevelFilter::WARN);
        assert_eq!(level_filter(1, false), LevelFilter::INFO);
        assert_eq!(level_filter(2, false), LevelFilter::DEBUG);
        assert_eq!(level_filter(7, false), LevelFilter::TRACE);
        assert_eq!(level_filter(3, true), LevelFilter::ERROR);
    }

    #[test]
    #[serial]
    fn file_layer_captures_analysis_workflow_events() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("ewcl.log");
        let subscriber = tracing_subscriber::registry()
            .with(LevelFilter::DEBUG)
            .with(file_layer(File::create(&log_path).unwrap()));

        let mut document =
            SignalDocument::new(ResidueSignal::from_pairs([(1, 0.1), (2, 0.9), (3, 0.4)]).unwrap());
        document.name = Some("Ubiquitin".to_string());
        tracing::subscriber::with_default(subscriber, || {
            analyze::run(&document, &AnalysisConfig::default(), &ProgressReporter::new());
        });

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("analysis_workflow"));
        assert!(content.contains("ewcl::workflows::analyze"));
        assert!(content.contains("Starting signal analysis."));
        assert!(content.contains("Ubiquitin"));
        assert!(content.contains("residues=3"));
        assert!(content.contains("DEBUG"));
        assert!(content.contains("ThreadId"));
        assert!(!content.contains("\u{1b}["));
    }

    #[test]
    fn file_layer_respects_level_filter() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("quiet.log");
        let subscriber = tracing_subscriber::registry()
            .with(level_filter(0, true))
            .with(file_layer(File::create(&log_path).unwrap()));

        tracing::subscriber::with_default(subscriber, || {
            analyze::run(
                &SignalDocument::default(),
                &AnalysisConfig::default(),
                &ProgressReporter::new(),
            );
        });

        assert!(std::fs::read_to_string(&log_path).unwrap().is_empty());
    }

    #[test]
    #[serial]
    fn invalid_log_file_path_propagates_error() {
        let invalid_path = PathBuf::from("/");

        if cfg!(unix) && invalid_path.is_dir() {
            let result = setup_logging(0, false, Some(invalid_path));
            assert!(matches!(result, Err(CliError::Io(_))));
        }
    }
}
