//! Utility functions shared by the renderers and normalizers.

use once_cell::sync::Lazy;
use regex::Regex;

static SPACES_AND_TABS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").unwrap());
static LINE_BREAKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r|\n").unwrap());

/// Collapse whitespace in a text node.
///
/// Runs of spaces and tabs become a single space, then every newline becomes
/// a space. Leading and trailing whitespace is left alone.
pub fn collapse_whitespace(text: &str) -> String {
    SPACES_AND_TABS.replace_all(text, " ").replace('\n', " ")
}

/// Split text into lines on `\r\n`, `\r` or `\n`.
///
/// Unlike [`str::lines`], a trailing line break yields a final empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    LINE_BREAKS.split(text).collect()
}

/// Check if a line contains only whitespace
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Heading level of an `h1`..`h6` tag name
pub fn heading_level(tag: &str) -> Option<usize> {
    let level: usize = tag.strip_prefix(['h', 'H'])?.parse().ok()?;
    (1..=6).contains(&level).then_some(level)
}
