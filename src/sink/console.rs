// src/sink/console.rs
// =============================================================================
// Observers: what the operator sees for each outcome.
//
// The result sink calls an Observer for every outcome and for every failed
// write to the output file. Printing lives here, apart from persistence, so
// the console format can be swapped (JSON) or captured (tests).
//
// Console format:
//   [+] host:port | cPanel GOOD          (green)
//   [~] host:port | BAD                  (red)
//   [!] host:port | ERROR: reason        (yellow, only with --show-errors)
//   [-] failed to save host:port: ...    (red)
//
// Rust concepts:
// - Trait objects: Arc<dyn Observer> can hold any observer type
// - colored: .green()/.red() wrap a string in ANSI color codes
// =============================================================================

use crate::errors::OutputWriteError;
use crate::probe::Verdict;
use crate::scan::ProbeOutcome;
use colored::Colorize;

/// Receives every outcome the sink reports.
///
/// Called concurrently from all workers.
pub trait Observer: Send + Sync {
    fn on_outcome(&self, outcome: &ProbeOutcome);
    fn on_write_error(&self, error: &OutputWriteError);
}

/// Prints one colored line per outcome to stdout
#[derive(Debug, Clone, Default)]
pub struct ConsoleObserver {
    show_errors: bool,
}

impl ConsoleObserver {
    pub fn new(show_errors: bool) -> Self {
        Self { show_errors }
    }

    // Builds the uncolored line for an outcome
    //
    // A probe error looks like a plain miss unless show_errors is set.
    fn render(&self, outcome: &ProbeOutcome) -> String {
        let target = outcome.record();
        match &outcome.verdict {
            Verdict::Match => format!("[+] {} | cPanel GOOD", target),
            Verdict::Error { reason } if self.show_errors => {
                format!("[!] {} | ERROR: {}", target, reason)
            }
            Verdict::NoMatch | Verdict::Error { .. } => format!("[~] {} | BAD", target),
        }
    }
}

impl Observer for ConsoleObserver {
    fn on_outcome(&self, outcome: &ProbeOutcome) {
        let line = self.render(outcome);
        let line = match &outcome.verdict {
            Verdict::Match => line.green(),
            Verdict::Error { .. } if self.show_errors => line.yellow(),
            Verdict::NoMatch | Verdict::Error { .. } => line.red(),
        };
        println!("{}", line);
    }

    fn on_write_error(&self, error: &OutputWriteError) {
        println!("{}", format!("[-] {}", error).red());
    }
}

/// Prints one JSON object per outcome (JSON Lines) to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonObserver;

impl Observer for JsonObserver {
    fn on_outcome(&self, outcome: &ProbeOutcome) {
        match serde_json::to_string(outcome) {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::error!(host = %outcome.host, "failed to serialize outcome: {}", e),
        }
    }

    // stdout stays pure JSON, so write failures go to stderr
    fn on_write_error(&self, error: &OutputWriteError) {
        eprintln!("{}", error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_outcome() -> ProbeOutcome {
        ProbeOutcome::new(
            "down.example.com",
            2083,
            Verdict::Error {
                reason: "network error: connection refused".to_string(),
            },
        )
    }

    #[test]
    fn test_render_match_and_miss() {
        let console = ConsoleObserver::new(false);

        let hit = ProbeOutcome::new("example.com", 2083, Verdict::Match);
        assert_eq!(console.render(&hit), "[+] example.com:2083 | cPanel GOOD");

        let miss = ProbeOutcome::new("example.com", 2083, Verdict::NoMatch);
        assert_eq!(console.render(&miss), "[~] example.com:2083 | BAD");
    }

    #[test]
    fn test_errors_look_like_misses_by_default() {
        let console = ConsoleObserver::new(false);
        assert_eq!(console.render(&error_outcome()), "[~] down.example.com:2083 | BAD");
    }

    #[test]
    fn test_show_errors_adds_reason() {
        let console = ConsoleObserver::new(true);
        assert_eq!(
            console.render(&error_outcome()),
            "[!] down.example.com:2083 | ERROR: network error: connection refused"
        );
    }
}
