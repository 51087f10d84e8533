//! Host clipboard access through the platform's copy utility.

use std::io::Write;
use std::process::{Command, Stdio};

/// A copy utility reading the text from stdin
#[derive(Debug, Clone, Copy)]
pub struct ClipboardCommand {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

#[cfg(target_os = "windows")]
const COMMANDS: &[ClipboardCommand] = &[ClipboardCommand {
    program: "clip",
    args: &[],
}];

#[cfg(target_os = "macos")]
const COMMANDS: &[ClipboardCommand] = &[ClipboardCommand {
    program: "pbcopy",
    args: &[],
}];

#[cfg(target_os = "linux")]
const COMMANDS: &[ClipboardCommand] = &[
    ClipboardCommand {
        program: "xclip",
        args: &["-selection", "clipboard"],
    },
    ClipboardCommand {
        program: "xsel",
        args: &["--clipboard", "--input"],
    },
];

#[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
const COMMANDS: &[ClipboardCommand] = &[];

/// Clipboard failure. Never fatal to a conversion.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard is not supported on this platform")]
    Unsupported,

    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: &'static str,
        source: std::io::Error,
    },

    #[error("Failed to send text to {program}: {source}")]
    Write {
        program: &'static str,
        source: std::io::Error,
    },

    #[error("{program} exited with {status}")]
    Failed {
        program: &'static str,
        status: std::process::ExitStatus,
    },
}

/// Copy `text` to the clipboard, trying each platform utility in turn.
///
/// # Errors
///
/// Returns the last failure when no utility succeeded.
pub fn copy(text: &str) -> Result<(), ClipboardError> {
    let mut last_error = ClipboardError::Unsupported;
    for command in COMMANDS {
        match pipe_to(command, text) {
            Ok(()) => return Ok(()),
            Err(err) => {
                tracing::debug!(
                    program = command.program,
                    error = %err,
                    "clipboard utility failed"
                );
                last_error = err;
            }
        }
    }
    Err(last_error)
}

/// Run `command` with `text` on its stdin.
///
/// The child is always waited on. A non-zero exit status takes precedence
/// over a failed write, since a utility that exits early closes its stdin.
pub fn pipe_to(command: &ClipboardCommand, text: &str) -> Result<(), ClipboardError> {
    let spawn_error = |source: std::io::Error| ClipboardError::Spawn {
        program: command.program,
        source,
    };

    let mut child = Command::new(command.program)
        .args(command.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(spawn_error)?;

    // Dropping stdin closes the pipe so the utility sees end of input
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };

    let status = child.wait().map_err(spawn_error)?;
    if !status.success() {
        return Err(ClipboardError::Failed {
            program: command.program,
            status,
        });
    }
    written.map_err(|source| ClipboardError::Write {
        program: command.program,
        source,
    })
}
