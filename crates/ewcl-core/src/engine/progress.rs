/// Events emitted by the workflows while they run.
#[derive(Debug, Clone)]
pub enum Progress {
    /// A named analysis phase ("Statistics", "Region Detection", ...) has begun.
    PhaseStart { name: &'static str },
    /// The most recently started phase has completed.
    PhaseFinish,
    /// Free-form note for the user.
    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards [`Progress`] events to an optional callback.
///
/// The reporter is `Sync`, so one instance can be shared by analyses running on
/// several threads.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }

    /// Runs `work` between a `PhaseStart { name }` and a `PhaseFinish` event.
    pub fn phase<T>(&self, name: &'static str, work: impl FnOnce() -> T) -> T {
        self.report(Progress::PhaseStart { name });
        let result = work();
        self.report(Progress::PhaseFinish);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn recording_reporter(seen: &Mutex<Vec<String>>) -> ProgressReporter<'_> {
        ProgressReporter::with_callback(Box::new(move |event| {
            seen.lock().unwrap().push(format!("{:?}", event));
        }))
    }

    #[test]
    fn reporter_without_callback_ignores_events() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::PhaseFinish);
        assert_eq!(reporter.phase("Statistics", || 7), 7);
    }

    #[test]
    fn reporter_forwards_events_to_callback() {
        let seen = Mutex::new(Vec::new());
        let reporter = recording_reporter(&seen);

        reporter.report(Progress::PhaseStart { name: "Statistics" });
        reporter.report(Progress::Message("halfway".to_string()));
        reporter.report(Progress::PhaseFinish);
        drop(reporter);

        let seen = seen.into_inner().unwrap();
        assert_eq!(seen.len(), 3);
        assert!(seen[0].contains("Statistics"));
        assert!(seen[1].contains("halfway"));
    }

    #[test]
    fn phase_brackets_work_with_start_and_finish() {
        let seen = Mutex::new(Vec::new());
        let reporter = recording_reporter(&seen);

        let clusters = reporter.phase("Region Detection", || vec![1, 2, 3]);
        drop(reporter);

        assert_eq!(clusters, vec![1, 2, 3]);
        let seen = seen.into_inner().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].starts_with("PhaseStart"));
        assert_eq!(seen[1], "PhaseFinish");
    }
}
