//! tagdown CLI - convert an HTML file to Markdown or BBCode.
//!
//! The result is written next to the input (or to `--output`) and can be
//! copied to the clipboard.

mod clipboard;
mod convert;
mod error;
mod input;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use convert::ConvertArgs;
use output::Output;

/// tagdown - HTML to Markdown and BBCode.
#[derive(Parser)]
#[command(name = "tagdown", version, about)]
struct Cli {
    #[command(flatten)]
    args: ConvertArgs,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let output = Output::new();
    if let Err(err) = cli.args.execute(&output) {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
