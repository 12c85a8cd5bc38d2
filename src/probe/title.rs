// src/probe/title.rs
// =============================================================================
// Extracts the <title> text from a response body.
//
// This is a plain substring scan, not an HTML parser:
// - Markers are exact and case-sensitive: "<title>" and "</title>"
// - "<title lang=...>" or "<TITLE>" are not recognized
// - Broken or non-HTML bodies never cause an error, they just yield ""
// =============================================================================

const OPEN: &str = "<title>";
const CLOSE: &str = "</title>";

// Returns the trimmed text between the first "<title>" and the first
// "</title>" in the body
//
// Returns "" when a marker is missing or the first "</title>" comes
// before the first "<title>".
//
// Example:
//   "<html><head><title>cPanel</title></head></html>" -> "cPanel"
pub fn extract_title(body: &str) -> &str {
    let Some(start) = body.find(OPEN) else {
        return "";
    };
    let Some(end) = body.find(CLOSE) else {
        return "";
    };
    if end <= start {
        return "";
    }

    body.get(start + OPEN.len()..end).map(str::trim).unwrap_or("")
}
