//! Tweet content assembly.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Marker tag embedded in every generated tweet.
pub const SHARE_MARKER: &str = "SharePli";

/// Merge a campaign's tweet pattern with a share code into the final postable
/// text: the pattern, a blank line, then the marker tag embedding the code.
/// The pattern is taken verbatim — no validation, no escaping.
#[must_use]
pub fn build_content(pattern: &str, code: &str) -> String {
    format!("{pattern}\n\n#{SHARE_MARKER}: {code}")
}
