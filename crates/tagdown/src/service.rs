//! ConversionService - the main entry point for HTML to Markdown/BBCode conversion.

use std::fmt;
use std::str::FromStr;

use crate::node::Node;
use crate::normalize::{normalize_bbcode, normalize_markdown, trim_leading, LineEnding};
use crate::render::Renderer;
use crate::rules::{bbcode_rules, markdown_rules, Rule, Rules};
use crate::TagdownError;

/// Output dialect, selected once per conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversionMode {
    /// Markdown variant with `**bold**`, ATX headings and `* * *` rules
    #[default]
    Markdown,
    /// BBCode variant with `[b]`, `[url]` and `[img]` tags
    BBCode,
}

impl ConversionMode {
    /// The built-in rule table for this dialect
    pub fn rules(self) -> &'static Rules {
        match self {
            ConversionMode::Markdown => markdown_rules(),
            ConversionMode::BBCode => bbcode_rules(),
        }
    }

    /// File extension used when the output is written next to its input
    pub fn output_extension(self) -> &'static str {
        match self {
            ConversionMode::Markdown => "md",
            ConversionMode::BBCode => "txt",
        }
    }
}

impl fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionMode::Markdown => f.write_str("Markdown"),
            ConversionMode::BBCode => f.write_str("BBCode"),
        }
    }
}

impl FromStr for ConversionMode {
    type Err = TagdownError;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "markdown" | "md" | "1" => Ok(ConversionMode::Markdown),
            "bbcode" | "bb" | "2" => Ok(ConversionMode::BBCode),
            other => Err(TagdownError::UnknownMode(other.to_string())),
        }
    }
}

/// Options for ConversionService
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConversionOptions {
    /// Output dialect
    pub mode: ConversionMode,

    /// Line terminator for BBCode output (Markdown always uses `\n`)
    pub line_ending: LineEnding,
}

/// The main service for converting documents to Markdown or BBCode.
///
/// Conversion runs render, leading-whitespace trim and spacing
/// normalization, always in that order.
#[derive(Debug, Clone)]
pub struct ConversionService {
    options: ConversionOptions,
    rules: Rules,
}

impl ConversionService {
    /// Create a Markdown service with default options
    pub fn new() -> Self {
        Self::with_options(ConversionOptions::default())
    }

    /// Create a service with custom options
    pub fn with_options(options: ConversionOptions) -> Self {
        Self {
            options,
            rules: options.mode.rules().clone(),
        }
    }

    /// Create a Markdown service
    pub fn markdown() -> Self {
        Self::for_mode(ConversionMode::Markdown)
    }

    /// Create a BBCode service
    pub fn bbcode() -> Self {
        Self::for_mode(ConversionMode::BBCode)
    }

    /// Create a service for a mode with otherwise default options
    pub fn for_mode(mode: ConversionMode) -> Self {
        Self::with_options(ConversionOptions {
            mode,
            ..Default::default()
        })
    }

    /// Add a rule to this service's table, replacing any rule for the same tags
    pub fn add_rule(&mut self, rule: Rule) -> &mut Self {
        self.rules.add(rule);
        self
    }

    /// Render a node tree without any post-processing
    pub fn render(&self, node: &Node) -> String {
        Renderer::new(&self.rules).render(node)
    }

    /// Convert a node tree to the target dialect
    pub fn convert(&self, node: &Node) -> String {
        let rendered = self.render(node);
        let trimmed = trim_leading(&rendered);
        let output = match self.options.mode {
            ConversionMode::Markdown => normalize_markdown(&trimmed),
            ConversionMode::BBCode => normalize_bbcode(&trimmed, self.options.line_ending),
        };
        tracing::debug!(
            mode = %self.options.mode,
            rendered = rendered.len(),
            output = output.len(),
            "converted document"
        );
        output
    }

    /// Parse an HTML string and convert it
    #[cfg(feature = "html")]
    pub fn convert_html(&self, html: &str) -> String {
        self.convert(&crate::html::parse_html(html))
    }
}

impl Default for ConversionService {
    fn default() -> Self {
        Self::new()
    }
}
