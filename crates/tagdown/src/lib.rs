//! # tagdown
//!
//! Convert DOM nodes to Markdown or BBCode.
//!
//! The rule-table design follows [turndown](https://github.com/mixmark-io/turndown):
//! each dialect maps tag names to formatting functions, and a renderer walks
//! the tree applying them. A post-render pass then repairs blank lines around
//! block separators, which a node-local rule cannot get right.
//!
//! ## Pipeline
//!
//! ```text
//! HTML ──parse_html──▶ Node ──render──▶ trim_leading ──▶ normalize_{markdown,bbcode}
//! ```
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use tagdown::{ConversionService, Node};
//!
//! let h1 = Node::element("h1").with_child(Node::text("Hello World"));
//! let doc = Node::document().with_child(h1);
//!
//! let service = ConversionService::markdown();
//! assert_eq!(service.convert(&doc), "# Hello World");
//! ```
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use tagdown::ConversionService;
//!
//! let service = ConversionService::bbcode();
//! let bbcode = service.convert_html("<p><strong>Hello</strong> World</p>");
//! assert!(bbcode.starts_with("[b]Hello[/b] World"));
//! ```

#[cfg(feature = "html")]
pub mod html;
pub mod node;
pub mod normalize;
mod render;
mod rules;
mod service;
mod utilities;

#[cfg(feature = "html")]
pub use html::parse_html;
pub use node::{Node, NodeType};
pub use normalize::{normalize_bbcode, normalize_markdown, trim_leading, LineEnding};
pub use render::Renderer;
pub use rules::{bbcode_rules, markdown_rules, Filter, ReplacementFn, Rule, Rules};
pub use service::{ConversionMode, ConversionOptions, ConversionService};
pub use utilities::*;

/// Error type for tagdown operations
#[derive(Debug, thiserror::Error)]
pub enum TagdownError {
    #[error("Unknown conversion mode: {0}")]
    UnknownMode(String),
}

pub type Result<T> = std::result::Result<T, TagdownError>;
