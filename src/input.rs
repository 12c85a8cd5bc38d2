// src/input.rs
// =============================================================================
// This module turns user input into candidates (hosts to probe).
//
// Two sources:
// - A single domain given with -d (strict: http:// is rejected)
// - A newline-delimited list file given with -l (lenient: bad entries are
//   passed through and simply fail their probe)
//
// In both cases an https:// prefix is stripped and whitespace is trimmed.
//
// Rust concepts:
// - Newtype pattern: Candidate wraps a String so a raw line can't be passed
//   where a normalized host is expected
// - Option<T> vs Result<T, E>: blank lines are skipped (None), a bad -d is
//   an error (Err)
// =============================================================================

use crate::errors::{FinderError, UsageError};
use std::fmt;
use std::path::Path;

const HTTPS_PREFIX: &str = "https://";
const HTTP_PREFIX: &str = "http://";

/// A host to probe, without protocol prefix and without surrounding whitespace.
///
/// The port is not part of the candidate: it is shared by the whole run.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate(String);

impl Candidate {
    /// Normalizes one line of a domain list.
    ///
    /// Returns None for blank lines. An `http://` entry is kept as-is:
    /// the list path does not reject it, unlike `from_single_domain`,
    /// and the probe against it fails on its own.
    pub fn from_list_line(line: &str) -> Option<Self> {
        let host = strip_https(line.trim());
        if host.is_empty() {
            return None;
        }
        Some(Self(host.to_string()))
    }

    /// Normalizes the domain passed with -d.
    ///
    /// Stricter than `from_list_line`: an `http://` domain is a usage error
    /// here, while the same line in a list file is passed through.
    ///
    /// Example:
    ///   "https://example.com" -> Ok("example.com")
    ///   "http://example.com"  -> Err(PlainHttpScheme)
    pub fn from_single_domain(domain: &str) -> Result<Self, UsageError> {
        let host = strip_https(domain.trim());

        if host.starts_with(HTTP_PREFIX) {
            return Err(UsageError::PlainHttpScheme {
                domain: domain.to_string(),
            });
        }
        if host.is_empty() {
            return Err(UsageError::EmptyDomain);
        }

        Ok(Self(host.to_string()))
    }

    pub fn host(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn strip_https(host: &str) -> &str {
    host.strip_prefix(HTTPS_PREFIX).unwrap_or(host)
}

// Reads a domain list file
//
// Parameters:
//   path: the file given with -l
//
// Returns: the candidates in file order, blank lines removed
//
// Any I/O error (missing file, permission denied) is fatal. Bytes that
// aren't valid UTF-8 are not: each line is decoded on its own, so a broken
// line becomes a candidate that fails its probe and the rest still run.
pub async fn read_candidate_list(path: &Path) -> Result<Vec<Candidate>, FinderError> {
    let content = tokio::fs::read(path)
        .await
        .map_err(|source| FinderError::InputRead {
            path: path.to_path_buf(),
            source,
        })?;

    // Split the raw bytes on '\n' and decode line by line
    // (invalid sequences become U+FFFD instead of failing the whole file)
    let candidates: Vec<Candidate> = content
        .split(|byte| *byte == b'\n')
        .filter_map(|line| Candidate::from_list_line(&String::from_utf8_lossy(line)))
        .collect();

    tracing::debug!(path = %path.display(), count = candidates.len(), "read domain list");

    Ok(candidates)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is a newtype?
//    - A tuple struct with one field: struct Candidate(String)
//    - It costs nothing at runtime but is a distinct type
//    - The only ways to build one are the constructors above, so every
//      Candidate has already been trimmed and stripped
//
// 2. What does strip_prefix return?
//    - Some(rest) if the string starts with the prefix, None otherwise
//    - .unwrap_or(host) falls back to the original string
//
// 3. Why filter_map?
//    - It maps each line to an Option and drops the None values
//    - One pass both normalizes lines and removes blank ones
//
// 4. What is String::from_utf8_lossy?
//    - Turns a byte slice into text, replacing invalid bytes with '\u{FFFD}'
//    - It returns a Cow<str>: borrowed when the bytes were already valid,
//      owned only when something had to be replaced
//    - A trailing '\r' (Windows line endings) is removed later by trim()
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_single_domain_strips_https() {
        let candidate = Candidate::from_single_domain("https://example.com").unwrap();
        assert_eq!(candidate.host(), "example.com");
    }

    #[test]
    fn test_single_domain_rejects_http() {
        let result = Candidate::from_single_domain("http://example.com");
        assert_eq!(
            result,
            Err(UsageError::PlainHttpScheme {
                domain: "http://example.com".to_string()
            })
        );
    }

    #[test]
    fn test_single_domain_rejects_blank() {
        assert_eq!(Candidate::from_single_domain("   "), Err(UsageError::EmptyDomain));
        assert_eq!(Candidate::from_single_domain("https://"), Err(UsageError::EmptyDomain));
    }

    #[test]
    fn test_list_line_keeps_http_prefix() {
        let candidate = Candidate::from_list_line("http://example.com").unwrap();
        assert_eq!(candidate.host(), "http://example.com");
    }

    #[test]
    fn test_list_line_trims_and_strips() {
        let candidate = Candidate::from_list_line("  https://example.com \t").unwrap();
        assert_eq!(candidate.host(), "example.com");
        assert_eq!(Candidate::from_list_line("   "), None);
    }

    #[tokio::test]
    async fn test_read_candidate_list_skips_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "example.com").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "   ").unwrap();
        writeln!(file, "https://panel.example.org").unwrap();
        writeln!(file, "  example.com  ").unwrap();

        let candidates = read_candidate_list(file.path()).await.unwrap();
        let hosts: Vec<&str> = candidates.iter().map(Candidate::host).collect();

        // Duplicates are kept: every line is probed
        assert_eq!(hosts, vec!["example.com", "panel.example.org", "example.com"]);
    }

    #[tokio::test]
    async fn test_read_candidate_list_tolerates_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"good.example.com\nbad\xff.example.com\r\nother.example.com\n")
            .unwrap();

        let candidates = read_candidate_list(file.path()).await.unwrap();
        let hosts: Vec<&str> = candidates.iter().map(Candidate::host).collect();

        // The broken line is kept (its probe will fail), both good hosts survive
        assert_eq!(
            hosts,
            vec!["good.example.com", "bad\u{FFFD}.example.com", "other.example.com"]
        );
    }

    #[tokio::test]
    async fn test_read_candidate_list_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_candidate_list(&dir.path().join("missing.txt")).await;
        assert!(matches!(result, Err(FinderError::InputRead { .. })));
    }
}
