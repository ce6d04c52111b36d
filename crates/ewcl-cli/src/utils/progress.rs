use ewcl::engine::progress::{Progress, ProgressCallback};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};
use std::time::Duration;

const SPINNER_TICK_MS: u64 = 80;

/// Drives one file-count progress bar shared by every worker of a batch.
///
/// Workflow phase events only change the bar's message; [`file_finished`] advances it.
///
/// [`file_finished`]: CliProgressHandler::file_finished
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: ProgressBar,
}

impl CliProgressHandler {
    pub fn new(total_files: u64) -> Self {
        Self::with_draw_target(total_files, ProgressDrawTarget::stderr())
    }

    pub fn with_draw_target(total_files: u64, target: ProgressDrawTarget) -> Self {
        let pb = ProgressBar::with_draw_target(Some(total_files), target)
            .with_style(Self::bar_style())
            .with_message("Starting");
        pb.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        Self { pb }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb = self.pb.clone();

        Box::new(move |progress: Progress| match progress {
            Progress::PhaseStart { name } => pb.set_message(name),
            Progress::PhaseFinish => {}
            Progress::Message(msg) => pb.println(format!("  {}", msg)),
        })
    }

    pub fn file_finished(&self, label: &str) {
        self.pb.println(format!("✓ {}", label));
        self.pb.inc(1);
    }

    pub fn finish(&self) {
        self.pb.disable_steady_tick();
        self.pb.finish_with_message("Done");
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template(
            "{spinner:.green} {msg:<20} [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .with_key(
            "eta",
            |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                let _ = write!(w, "{:.1}s", state.eta().as_secs_f64());
            },
        )
        .progress_chars("##-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn hidden_handler(total: u64) -> CliProgressHandler {
        CliProgressHandler::with_draw_target(total, ProgressDrawTarget::hidden())
    }

    #[test]
    fn handler_starts_empty_with_known_length() {
        let handler = hidden_handler(3);
        assert_eq!(handler.pb.length(), Some(3));
        assert_eq!(handler.pb.position(), 0);
        assert!(!handler.pb.is_finished());
    }

    #[test]
    fn phase_events_update_message() {
        let handler = hidden_handler(1);
        let callback = handler.get_callback();

        callback(Progress::PhaseStart {
            name: "Region Detection",
        });
        assert_eq!(handler.pb.message(), "Region Detection");

        callback(Progress::PhaseFinish);
        callback(Progress::Message("ignored while hidden".to_string()));
        assert_eq!(handler.pb.message(), "Region Detection");
    }

    #[test]
    fn file_finished_advances_and_finish_completes() {
        let handler = hidden_handler(2);
        handler.file_finished("a.json");
        handler.file_finished("b.json");
        assert_eq!(handler.pb.position(), 2);

        handler.finish();
        assert!(handler.pb.is_finished());
        assert_eq!(handler.pb.message(), "Done");
    }

    #[test]
    fn callback_is_thread_safe() {
        let handler = hidden_handler(4);
        let workers: Vec<_> = (0..4)
            .map(|_| {
                let handler = handler.clone();
                let callback = handler.get_callback();
                thread::spawn(move || {
                    callback(Progress::PhaseStart { name: "Statistics" });
                    callback(Progress::PhaseFinish);
                    handler.file_finished("signal.json");
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        assert_eq!(handler.pb.position(), 4);
        assert_eq!(handler.pb.message(), "Statistics");
    }
}
