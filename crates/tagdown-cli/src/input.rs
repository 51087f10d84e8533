//! Input path handling and interactive choices.

use std::path::{Path, PathBuf};

use tagdown::ConversionMode;

use crate::error::CliError;

/// Extensions accepted as HTML input
const HTML_EXTENSIONS: &[&str] = &["html", "htm"];

/// Build the input path from positional arguments.
///
/// Drag-and-drop can split an unquoted path with spaces into several
/// arguments, so they are joined back with single spaces. Surrounding
/// quotes are stripped. Returns `None` when nothing usable remains.
pub fn path_from_args(args: &[String]) -> Option<PathBuf> {
    clean_path(&args.join(" "))
}

/// Clean a typed or pasted path: trim whitespace and surrounding quotes
pub fn clean_path(raw: &str) -> Option<PathBuf> {
    let cleaned = raw.trim().trim_matches('"');
    (!cleaned.is_empty()).then(|| PathBuf::from(cleaned))
}

/// Check that `path` is an existing `.html`/`.htm` file
pub fn validate_html_path(path: &Path) -> Result<(), CliError> {
    if !path.is_file() {
        return Err(CliError::NotFound(path.to_path_buf()));
    }

    let is_html = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| HTML_EXTENSIONS.contains(&ext.to_lowercase().as_str()));
    if !is_html {
        return Err(CliError::UnsupportedExtension(path.to_path_buf()));
    }
    Ok(())
}

/// Interpret the answer to the mode prompt.
///
/// An empty answer selects Markdown. `None` means the answer was not
/// understood.
pub fn mode_from_answer(answer: &str) -> Option<ConversionMode> {
    let answer = answer.trim();
    if answer.is_empty() {
        return Some(ConversionMode::Markdown);
    }
    answer.parse().ok()
}

/// Interpret a `(Y/n)` answer; empty means yes
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "" | "y" | "yes")
}

/// Default output location: next to the input, extension per dialect
pub fn default_output_path(input: &Path, mode: ConversionMode) -> PathBuf {
    input.with_extension(mode.output_extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_from_args_joins_split_path() {
        let args = vec!["\"/tmp/My".to_string(), "Page.html\"".to_string()];
        assert_eq!(
            path_from_args(&args),
            Some(PathBuf::from("/tmp/My Page.html"))
        );
        assert_eq!(path_from_args(&[]), None);
        assert_eq!(clean_path("  \"\"  "), None);
    }

    #[test]
    fn test_validate_html_path() {
        let dir = tempfile::tempdir().unwrap();
        let html = dir.path().join("page.HTM");
        let text = dir.path().join("notes.txt");
        std::fs::write(&html, "<p>x</p>").unwrap();
        std::fs::write(&text, "x").unwrap();

        assert!(validate_html_path(&html).is_ok());
        assert!(matches!(
            validate_html_path(&text),
            Err(CliError::UnsupportedExtension(_))
        ));
        assert!(matches!(
            validate_html_path(&dir.path().join("missing.html")),
            Err(CliError::NotFound(_))
        ));
    }

    #[test]
    fn test_mode_from_answer() {
        assert_eq!(mode_from_answer(""), Some(ConversionMode::Markdown));
        assert_eq!(mode_from_answer("1"), Some(ConversionMode::Markdown));
        assert_eq!(mode_from_answer(" 2 "), Some(ConversionMode::BBCode));
        assert_eq!(mode_from_answer("bbcode"), Some(ConversionMode::BBCode));
        assert_eq!(mode_from_answer("3"), None);
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes(""));
        assert!(is_yes(" Y "));
        assert!(is_yes("yes"));
        assert!(!is_yes("n"));
        assert!(!is_yes("nope"));
    }

    #[test]
    fn test_default_output_path() {
        let input = Path::new("/docs/page.html");
        assert_eq!(
            default_output_path(input, ConversionMode::Markdown),
            PathBuf::from("/docs/page.md")
        );
        assert_eq!(
            default_output_path(input, ConversionMode::BBCode),
            PathBuf::from("/docs/page.txt")
        );
    }
}
