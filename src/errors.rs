// src/errors.rs
// =============================================================================
// Error types for the whole tool.
//
// There are two kinds of errors here:
// - Fatal errors (UsageError, FinderError) stop the run before any probing
//   starts. main() turns them into a message and a non-zero exit code.
// - Per-candidate errors (ProbeError, OutputWriteError) never leave the
//   worker that hit them. They become part of an outcome or a console line.
//
// Rust concepts:
// - thiserror: Derives std::error::Error and Display from attributes
// - #[from]: Generates a From impl so `?` can convert errors automatically
// - #[source]: Chains an underlying error without putting it in the message
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Mistakes in how the tool was invoked. Always fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("specify a single domain with -d or a domain list file with -l")]
    MissingTarget,

    #[error("the domain given with -d is empty")]
    EmptyDomain,

    #[error("the http:// protocol is not supported, use a bare domain instead (example: example.com), got '{domain}'")]
    PlainHttpScheme { domain: String },
}

/// Errors that abort the run.
#[derive(Debug, Error)]
pub enum FinderError {
    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error("failed to read the domain list {}: {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build the HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Why a single probe produced no signal.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Connection refused, DNS failure, timeout, protocol error...
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid probe target '{target}': {source}")]
    InvalidTarget {
        target: String,
        #[source]
        source: url::ParseError,
    },
}

/// A match could not be appended to the output file.
#[derive(Debug, Error)]
#[error("failed to save {record} to {}: {source}", .path.display())]
pub struct OutputWriteError {
    pub record: String,
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
