// src/scan/outcome.rs
// =============================================================================
// The record of one probed candidate, and the totals for a whole run.
// =============================================================================

use crate::probe::Verdict;
use serde::Serialize;

/// What happened to one candidate.
///
/// Exactly one worker builds it, and the result sink consumes it once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeOutcome {
    pub host: String,
    pub port: u16,
    /// Merged into this struct's JSON: {"host": .., "port": .., "verdict": ..}
    #[serde(flatten)]
    pub verdict: Verdict,
}

impl ProbeOutcome {
    pub fn new(host: impl Into<String>, port: u16, verdict: Verdict) -> Self {
        Self {
            host: host.into(),
            port,
            verdict,
        }
    }

    /// The "host:port" line written to the output file
    pub fn record(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Verdict counts for a batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub matches: usize,
    pub misses: usize,
    pub errors: usize,
}

impl ScanSummary {
    pub fn count(&mut self, verdict: &Verdict) {
        match verdict {
            Verdict::Match => self.matches += 1,
            Verdict::NoMatch => self.misses += 1,
            Verdict::Error { .. } => self.errors += 1,
        }
    }

    pub fn merge(&mut self, other: ScanSummary) {
        self.matches += other.matches;
        self.misses += other.misses;
        self.errors += other.errors;
    }

    pub fn total(&self) -> usize {
        self.matches + self.misses + self.errors
    }
}
