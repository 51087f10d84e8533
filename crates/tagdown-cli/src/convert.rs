//! The conversion command: read HTML, convert, save, optionally copy.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use tagdown::{ConversionMode, ConversionOptions, ConversionService, LineEnding};

use crate::clipboard;
use crate::error::CliError;
use crate::input;
use crate::output::Output;

/// Line terminator choices for BBCode output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LineEndingArg {
    Native,
    Lf,
    Crlf,
}

impl From<LineEndingArg> for LineEnding {
    fn from(arg: LineEndingArg) -> Self {
        match arg {
            LineEndingArg::Native => LineEnding::Native,
            LineEndingArg::Lf => LineEnding::Lf,
            LineEndingArg::Crlf => LineEnding::CrLf,
        }
    }
}

/// Arguments for the conversion.
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// HTML file to convert (prompted for when omitted).
    path: Vec<String>,

    /// Output dialect: markdown (1) or bbcode (2). Prompted for when omitted.
    #[arg(short, long, env = "TAGDOWN_MODE")]
    mode: Option<ConversionMode>,

    /// Output file (default: next to the input, .md or .txt).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the result instead of writing a file.
    #[arg(long, conflicts_with = "output")]
    stdout: bool,

    /// Line terminator for BBCode output.
    #[arg(long, value_enum, default_value = "native", env = "TAGDOWN_LINE_ENDING")]
    line_ending: LineEndingArg,

    /// Copy the result to the clipboard without asking.
    #[arg(long)]
    clipboard: bool,

    /// Never copy the result to the clipboard.
    #[arg(long, conflicts_with = "clipboard")]
    no_clipboard: bool,
}

impl ConvertArgs {
    /// Execute the conversion.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is missing or not an HTML file, or if
    /// reading or writing fails. Clipboard failures are only reported.
    pub fn execute(self, output: &Output) -> Result<(), CliError> {
        self.run(output, &mut io::stdin().lock())
    }

    /// Run the conversion, reading prompt answers from `answers`.
    fn run(self, output: &Output, answers: &mut impl BufRead) -> Result<(), CliError> {
        let path = match input::path_from_args(&self.path) {
            Some(path) => path,
            None => {
                let prompt = "Drop an HTML file here or enter its path: ";
                let answer = output.ask(prompt, answers)?;
                input::clean_path(&answer).ok_or(CliError::MissingInput)?
            }
        };
        input::validate_html_path(&path)?;

        let mode = match self.mode {
            Some(mode) => mode,
            None => ask_mode(output, answers)?,
        };

        let html = std::fs::read_to_string(&path)?;
        let service = ConversionService::with_options(ConversionOptions {
            mode,
            line_ending: self.line_ending.into(),
        });
        let result = service.convert_html(&html);
        tracing::info!(input = %path.display(), %mode, "converted file");

        if self.stdout {
            println!("{result}");
        } else {
            let target = self
                .output
                .clone()
                .unwrap_or_else(|| input::default_output_path(&path, mode));
            save(&target, &result)?;
            output.success(&format!("Saved {mode} to {}", target.display()));
        }

        if self.should_copy(output, answers)? {
            match clipboard::copy(&result) {
                Ok(()) => output.success("Copied to clipboard"),
                Err(err) => {
                    tracing::warn!(error = %err, "clipboard copy failed");
                    output.warning(&format!("Could not copy to clipboard: {err}"));
                }
            }
        }

        Ok(())
    }

    fn should_copy(&self, output: &Output, answers: &mut impl BufRead) -> Result<bool, CliError> {
        if self.clipboard {
            return Ok(true);
        }
        if self.no_clipboard {
            return Ok(false);
        }
        let answer = output.ask("Copy to clipboard? (Y/n): ", answers)?;
        Ok(input::is_yes(&answer))
    }
}

fn ask_mode(output: &Output, answers: &mut impl BufRead) -> Result<ConversionMode, CliError> {
    output.info("Choose the output format:");
    output.info("  1. Markdown (default)");
    output.info("  2. BBCode");
    let answer = output.ask("Enter 1 or 2 (Enter for Markdown): ", answers)?;

    let mode = input::mode_from_answer(&answer).unwrap_or_else(|| {
        output.warning("Unrecognized choice, using Markdown");
        ConversionMode::Markdown
    });
    output.info(&format!("Selected {mode}"));
    Ok(mode)
}

fn save(target: &Path, text: &str) -> Result<(), CliError> {
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(target, text)?;
    tracing::debug!(path = %target.display(), bytes = text.len(), "wrote output");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: ConvertArgs,
    }

    fn parse(args: &[&str]) -> ConvertArgs {
        TestCli::parse_from(std::iter::once("tagdown").chain(args.iter().copied())).args
    }

    #[test]
    fn test_converts_to_markdown_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("page.html");
        std::fs::write(
            &input,
            "<h2>Title</h2><p> Body <b>bold</b></p><hr><p>End</p>",
        )
        .unwrap();

        let args = parse(&[
            input.to_str().unwrap(),
            "--mode",
            "markdown",
            "--no-clipboard",
        ]);
        args.execute(&Output::new()).unwrap();

        let written = std::fs::read_to_string(dir.path().join("page.md")).unwrap();
        assert_eq!(written, "## Title\nBody **bold**  \n\n\n* * *\n\nEnd  ");
    }

    #[test]
    fn test_converts_to_bbcode_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("page.htm");
        let target = dir.path().join("out").join("forum.txt");
        std::fs::write(
            &input,
            r#"<p><a href="/x">link</a><br><img src="a.png"></p>"#,
        )
        .unwrap();

        let args = parse(&[
            input.to_str().unwrap(),
            "-m",
            "2",
            "-o",
            target.to_str().unwrap(),
            "--line-ending",
            "lf",
            "--no-clipboard",
        ]);
        args.execute(&Output::new()).unwrap();

        let written = std::fs::read_to_string(&target).unwrap();
        assert_eq!(written, "[url=/x]link[/url]\n[img]a.png[/img]\n");
    }

    #[test]
    fn test_prompted_answers_drive_conversion() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("page.html");
        std::fs::write(&input, "<p><strong>bold</strong></p>").unwrap();

        let args = parse(&["--line-ending", "lf"]);
        let mut answers = Cursor::new(format!("\"{}\"\n2\nn\n", input.display()));
        args.run(&Output::new(), &mut answers).unwrap();

        let written = std::fs::read_to_string(dir.path().join("page.txt")).unwrap();
        assert_eq!(written, "[b]bold[/b]\n");
    }

    #[test]
    fn test_empty_path_answer_is_missing_input() {
        let args = parse(&[]);
        let result = args.run(&Output::new(), &mut Cursor::new("\n"));
        assert!(matches!(result, Err(CliError::MissingInput)));
    }

    #[test]
    fn test_ask_mode_answers() {
        let output = Output::new();
        let mode = |answer: &str| ask_mode(&output, &mut Cursor::new(answer)).unwrap();
        assert_eq!(mode("2\n"), ConversionMode::BBCode);
        assert_eq!(mode("1\n"), ConversionMode::Markdown);
        assert_eq!(mode("x\n"), ConversionMode::Markdown);
        assert_eq!(mode(""), ConversionMode::Markdown);
    }

    #[test]
    fn test_should_copy_answers() {
        let output = Output::new();
        let args = parse(&["a.html"]);
        let copy = |answer: &str| {
            let mut answers = Cursor::new(answer);
            args.should_copy(&output, &mut answers).unwrap()
        };
        assert!(copy("\n"));
        assert!(copy("Yes\n"));
        assert!(!copy("n\n"));
        assert!(!copy("no\n"));
    }

    #[test]
    fn test_clipboard_flags_skip_prompt() {
        let output = Output::new();
        let mut answers = Cursor::new("n\n");
        let args = parse(&["a.html", "--clipboard"]);
        assert!(args.should_copy(&output, &mut answers).unwrap());
        let args = parse(&["a.html", "--no-clipboard"]);
        assert!(!args.should_copy(&output, &mut Cursor::new("y\n")).unwrap());
        assert_eq!(answers.position(), 0);
    }

    #[test]
    fn test_rejects_non_html_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("notes.txt");
        std::fs::write(&input, "x").unwrap();

        let args = parse(&[input.to_str().unwrap(), "--mode", "md", "--no-clipboard"]);
        assert!(matches!(
            args.execute(&Output::new()),
            Err(CliError::UnsupportedExtension(_))
        ));
    }

    #[test]
    fn test_clipboard_flags_conflict() {
        let result = TestCli::try_parse_from(["tagdown", "a.html", "--clipboard", "--no-clipboard"]);
        assert!(result.is_err());
    }
}
