//! Colored terminal output and prompts.

use std::io::{self, BufRead};

use console::{Style, Term};

/// Terminal output formatter.
pub struct Output {
    term: Term,
    green: Style,
    yellow: Style,
    red: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
        }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    /// Print a success message (green).
    pub fn success(&self, msg: &str) {
        let _ = self.term.write_line(&self.green.apply_to(msg).to_string());
    }

    /// Print a warning message (yellow).
    pub fn warning(&self, msg: &str) {
        let _ = self.term.write_line(&self.yellow.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }

    /// Show `prompt` and read one line of the answer from `input`.
    ///
    /// The trailing line break is stripped; end of input yields `""`.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt cannot be written or `input` cannot
    /// be read.
    pub fn ask(&self, prompt: &str, input: &mut impl BufRead) -> io::Result<String> {
        self.term.write_str(prompt)?;
        self.term.flush()?;

        let mut answer = String::new();
        input.read_line(&mut answer)?;
        let len = answer.trim_end_matches(['\r', '\n']).len();
        answer.truncate(len);
        Ok(answer)
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}
