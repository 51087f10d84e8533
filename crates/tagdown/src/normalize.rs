//! Post-render passes: leading-whitespace trimming and blank-line normalization.
//!
//! The renderer only sees one node at a time, so the spacing around block
//! separators is repaired here, after the whole document has been rendered.
//! Both normalizers are idempotent.

use crate::utilities::{is_blank, split_lines};

/// Markdown horizontal rule as produced by the `hr` rule
pub const HORIZONTAL_RULE: &str = "* * *";

/// Blank lines required before a horizontal rule
const BLANKS_BEFORE_RULE: usize = 2;

/// Line terminator used when joining BBCode output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `\r\n` on Windows, `\n` elsewhere
    #[default]
    Native,
    /// Always `\n`
    Lf,
    /// Always `\r\n`
    CrLf,
}

impl LineEnding {
    /// The terminator string
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Native if cfg!(windows) => "\r\n",
            LineEnding::Native | LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Strip leading whitespace from every `\n`-separated line.
///
/// Trailing whitespace is kept: two trailing spaces are a Markdown hard break.
pub fn trim_leading(text: &str) -> String {
    text.split('\n')
        .map(str::trim_start)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Normalize blank lines in rendered Markdown.
///
/// Leading and trailing blank lines are dropped. A horizontal rule gets
/// exactly two blank lines before it and one after it; a signature line gets
/// one blank line after it. No blank line is added at either document edge.
pub fn normalize_markdown(text: &str) -> String {
    let lines = split_lines(text);
    let kept = trim_blank_edges(&lines);
    let last = kept.len().saturating_sub(1);

    kept.iter()
        .enumerate()
        .fold(Vec::with_capacity(kept.len()), |mut out, (i, &line)| {
            push_markdown_line(&mut out, line, i == last);
            out
        })
        .join("\n")
}

/// Normalize blank lines in rendered BBCode.
///
/// Leading and trailing blank lines are dropped, interior lines are kept
/// verbatim and a single empty line is appended. Lines are joined with
/// `line_ending`.
pub fn normalize_bbcode(text: &str, line_ending: LineEnding) -> String {
    let lines = split_lines(text);
    let kept = trim_blank_edges(&lines);
    if kept.is_empty() {
        return String::new();
    }

    let mut out = kept.to_vec();
    out.push("");
    out.join(line_ending.as_str())
}

/// Template footer line (`..._Source ... Encode...`) that is followed by a
/// blank line.
pub fn is_signature_line(line: &str) -> bool {
    line.contains('_') && line.contains("Source") && line.contains("Encode")
}

fn is_horizontal_rule(line: &str) -> bool {
    line.trim() == HORIZONTAL_RULE
}

fn is_separator(line: &str) -> bool {
    is_horizontal_rule(line) || is_signature_line(line)
}

fn push_markdown_line<'a>(out: &mut Vec<&'a str>, line: &'a str, is_last: bool) {
    if is_horizontal_rule(line) {
        if !out.is_empty() {
            while out.last().is_some_and(|l| is_blank(l)) {
                out.pop();
            }
            out.extend(std::iter::repeat("").take(BLANKS_BEFORE_RULE));
        }
        out.push(line);
        if !is_last {
            out.push("");
        }
    } else if is_signature_line(line) {
        out.push(line);
        if !is_last {
            out.push("");
        }
    } else if is_blank(line) && in_separator_gap(out) {
        // The gap after a separator is already in place
    } else {
        out.push(line);
    }
}

/// Whether `out` ends with the blank line that follows a separator
fn in_separator_gap(out: &[&str]) -> bool {
    out.last().is_some_and(|l| is_blank(l))
        && out
            .iter()
            .rev()
            .find(|l| !is_blank(l))
            .is_some_and(|l| is_separator(l))
}

/// Drop leading and trailing blank lines; empty when every line is blank
fn trim_blank_edges<'s, 'a>(lines: &'s [&'a str]) -> &'s [&'a str] {
    let Some(start) = lines.iter().position(|l| !is_blank(l)) else {
        return &[];
    };
    let end = lines.iter().rposition(|l| !is_blank(l)).unwrap_or(start);
    &lines[start..=end]
}
