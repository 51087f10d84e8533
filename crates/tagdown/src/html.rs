//! HTML parsing support.
//!
//! This module parses HTML strings with `scraper` and converts the result
//! to the [`Node`] structure used by the renderers.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;

/// Parse an HTML string into a Node tree.
///
/// Parsing is best-effort: malformed markup is repaired by html5ever and
/// never reported as an error. The returned node is always a document.
///
/// # Example
///
/// ```rust
/// use tagdown::{parse_html, ConversionService};
///
/// let node = parse_html("<h1>Hello <em>World</em></h1>");
///
/// let service = ConversionService::markdown();
/// assert_eq!(service.convert(&node), "# Hello *World*");
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_document(html);
    let mut root = Node::document();
    root.add_child(scraper_to_node(document.root_element()));
    tracing::trace!(bytes = html.len(), "parsed html document");
    root
}

/// Convert a scraper ElementRef to our Node structure
fn scraper_to_node(element: ElementRef) -> Node {
    let mut node = Node::element_with_attrs(element.value().name(), element.value().attrs());

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element));
                }
            }
            // Comments, doctypes and processing instructions render to nothing
            _ => {}
        }
    }

    node
}
