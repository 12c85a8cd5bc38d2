// src/config.rs
// =============================================================================
// Run-wide configuration.
//
// ScanConfig is built once from the command line and never changes during a
// run. The worker pool copies the port out of it; the sink is built from the
// output path and reporting flags.
//
// ScanMode decides between probing one domain and probing a list. It is
// resolved before any network activity, so usage errors abort early.
// =============================================================================

use crate::errors::UsageError;
use crate::input::Candidate;
use std::path::{Path, PathBuf};

pub const DEFAULT_PORT: u16 = 2083;
pub const DEFAULT_CONCURRENCY: usize = 10;
// Historical spelling (sic): existing setups append to this file
pub const DEFAULT_OUTPUT: &str = "cpnalvalid.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub port: u16,
    /// Number of workers in batch mode, never below 1
    pub concurrency: usize,
    /// Matches are appended here as host:port lines
    pub output_path: PathBuf,
    /// Report probe errors as their own line instead of as a plain miss
    pub show_errors: bool,
    /// Print outcomes as JSON Lines instead of colored text
    pub json: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            concurrency: DEFAULT_CONCURRENCY,
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            show_errors: false,
            json: false,
        }
    }
}

impl ScanConfig {
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the worker count. Zero is clamped to one worker.
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    #[must_use]
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    #[must_use]
    pub fn with_show_errors(mut self, show_errors: bool) -> Self {
        self.show_errors = show_errors;
        self
    }

    #[must_use]
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }
}

/// What the run probes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanMode {
    Single(Candidate),
    Batch(PathBuf),
}

impl ScanMode {
    // Picks the mode from the -d and -l flags
    //
    // -d wins when both are given. Neither is a usage error.
    // A blank -d ("" or only spaces) counts as not given.
    pub fn resolve(domain: Option<&str>, list: Option<&Path>) -> Result<Self, UsageError> {
        let domain = domain.filter(|d| !d.trim().is_empty());

        match (domain, list) {
            (Some(domain), _) => Candidate::from_single_domain(domain).map(ScanMode::Single),
            (None, Some(list)) => Ok(ScanMode::Batch(list.to_path_buf())),
            (None, None) => Err(UsageError::MissingTarget),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScanConfig::default();
        assert_eq!(config.port, 2083);
        assert_eq!(config.concurrency, 10);
        assert_eq!(config.output_path, PathBuf::from("cpnalvalid.txt"));
        assert!(!config.show_errors);
    }

    #[test]
    fn test_zero_concurrency_is_clamped() {
        let config = ScanConfig::default().with_concurrency(0);
        assert_eq!(config.concurrency, 1);
    }

    #[test]
    fn test_domain_takes_precedence_over_list() {
        let mode = ScanMode::resolve(Some("example.com"), Some(Path::new("hosts.txt"))).unwrap();
        assert_eq!(mode, ScanMode::Single(Candidate::from_single_domain("example.com").unwrap()));
    }

    #[test]
    fn test_list_mode() {
        let mode = ScanMode::resolve(None, Some(Path::new("hosts.txt"))).unwrap();
        assert_eq!(mode, ScanMode::Batch(PathBuf::from("hosts.txt")));
    }

    #[test]
    fn test_missing_target() {
        assert_eq!(ScanMode::resolve(None, None), Err(UsageError::MissingTarget));
    }

    #[test]
    fn test_blank_domain_falls_back_to_list() {
        let mode = ScanMode::resolve(Some(""), Some(Path::new("hosts.txt"))).unwrap();
        assert_eq!(mode, ScanMode::Batch(PathBuf::from("hosts.txt")));

        let mode = ScanMode::resolve(Some("   "), Some(Path::new("hosts.txt"))).unwrap();
        assert_eq!(mode, ScanMode::Batch(PathBuf::from("hosts.txt")));
    }

    #[test]
    fn test_blank_domain_alone_is_missing_target() {
        assert_eq!(ScanMode::resolve(Some(""), None), Err(UsageError::MissingTarget));
    }

    #[test]
    fn test_http_domain_is_rejected_even_with_list() {
        let result = ScanMode::resolve(Some("http://example.com"), Some(Path::new("hosts.txt")));
        assert!(matches!(result, Err(UsageError::PlainHttpScheme { .. })));
    }
}
