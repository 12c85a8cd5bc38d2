// src/probe/classify.rs
// =============================================================================
// Turns a probe result into a verdict.
//
// Only one title counts as a match: exactly "cPanel". There is no fuzzy
// matching: "cpanel", "cPanel Login" and "" are all misses.
// =============================================================================

use crate::errors::ProbeError;
use serde::Serialize;

/// The title served by the cPanel login page
pub const EXPECTED_TITLE: &str = "cPanel";

/// The classification of one candidate
//
// #[serde(tag = "verdict")] serializes as {"verdict": "match"} or
// {"verdict": "error", "reason": "..."}
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    /// The title was exactly "cPanel"
    Match,
    /// The host answered with some other title (or none)
    NoMatch,
    /// The probe failed, so we could not tell
    Error { reason: String },
}

impl Verdict {
    pub fn is_match(&self) -> bool {
        matches!(self, Verdict::Match)
    }
}

pub fn classify(signal: &str) -> Verdict {
    if signal.trim() == EXPECTED_TITLE {
        Verdict::Match
    } else {
        Verdict::NoMatch
    }
}

/// Classifies a finished probe. A probe error is never a match.
pub fn verdict_for(result: &Result<String, ProbeError>) -> Verdict {
    match result {
        Ok(signal) => classify(signal),
        Err(e) => Verdict::Error {
            reason: e.to_string(),
        },
    }
}
