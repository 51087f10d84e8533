//! CLI error types.

use std::path::PathBuf;

use tagdown::TagdownError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Tagdown(#[from] TagdownError),

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Not an HTML file (expected .html or .htm): {}", .0.display())]
    UnsupportedExtension(PathBuf),

    #[error("No input file given")]
    MissingInput,
}
