// src/sink/mod.rs
// =============================================================================
// The result sink: where every outcome ends up.
//
// For each outcome:
// - Match: tell the observer, then append "host:port" to the output file
// - NoMatch / Error: tell the observer, nothing is written
//
// A failed append is reported and logged, then dropped. It never reaches
// the worker that produced the outcome.
//
// Submodules:
// - output: The append-only output file
// - console: Observers (colored console, JSON Lines)
// =============================================================================

mod console;
mod output;

pub use console::{ConsoleObserver, JsonObserver, Observer};
pub use output::OutputLog;

use crate::scan::ProbeOutcome;
use std::sync::Arc;

/// Fan-in point for every outcome of a run.
pub struct ResultSink {
    /// Append-only file for matches
    log: OutputLog,
    /// Console (or JSON, or test) reporting
    observer: Arc<dyn Observer>,
}

impl ResultSink {
    pub fn new(log: OutputLog, observer: Arc<dyn Observer>) -> Self {
        Self { log, observer }
    }

    // Reports one outcome
    //
    // Safe to call from many workers at once: the observer is Sync and the
    // output log serializes its appends.
    pub async fn report(&self, outcome: ProbeOutcome) {
        // Every outcome is shown, whatever its verdict
        self.observer.on_outcome(&outcome);

        // Only matches are persisted
        if !outcome.verdict.is_match() {
            return;
        }

        // A failed write is reported here and goes no further: report()
        // returns () so the worker never sees it
        if let Err(e) = self.log.append(&outcome.record()).await {
            tracing::warn!(
                record = %e.record,
                path = %self.log.path().display(),
                "could not append match: {}",
                e.source
            );
            self.observer.on_write_error(&e);
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does report() take ProbeOutcome by value?
//    - Each outcome is reported exactly once
//    - Taking ownership means the caller can't reuse it afterwards
//
// 2. Why Arc<dyn Observer> instead of a generic type parameter?
//    - main() picks the observer at runtime (--json or not)
//    - A trait object lets one ResultSink type hold any of them
//
// 3. What does #[cfg(test)] pub(crate) mod testing mean?
//    - The module only exists when running tests
//    - pub(crate) lets tests in other modules (like scan/pool.rs) use it
// -----------------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod testing {
    use super::Observer;
    use crate::errors::OutputWriteError;
    use crate::scan::ProbeOutcome;
    use std::sync::Mutex;

    /// Keeps everything it is told, for assertions
    #[derive(Debug, Default)]
    pub struct RecordingObserver {
        pub outcomes: Mutex<Vec<ProbeOutcome>>,
        pub write_errors: Mutex<Vec<String>>,
    }

    impl Observer for RecordingObserver {
        fn on_outcome(&self, outcome: &ProbeOutcome) {
            self.outcomes.lock().unwrap().push(outcome.clone());
        }

        fn on_write_error(&self, error: &OutputWriteError) {
            self.write_errors.lock().unwrap().push(error.record.clone());
        }
    }
}
