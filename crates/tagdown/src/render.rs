//! Recursive tree walk turning a [`Node`] into dialect text.

use crate::node::{Node, NodeType};
use crate::rules::Rules;
use crate::utilities::collapse_whitespace;

/// Renders node trees with one dialect's rule table.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'r> {
    rules: &'r Rules,
}

impl<'r> Renderer<'r> {
    /// Create a renderer over a rule table
    pub fn new(rules: &'r Rules) -> Self {
        Self { rules }
    }

    /// Render a node and its descendants.
    ///
    /// Children are rendered in document order and concatenated before the
    /// element's own rule sees them. Total over every node kind.
    pub fn render(&self, node: &Node) -> String {
        match node.node_type {
            NodeType::Document => self.render_children(node),
            NodeType::Text => collapse_whitespace(node.node_value.as_deref().unwrap_or_default()),
            NodeType::Element => {
                let content = self.render_children(node);
                self.rules.apply(node, content)
            }
        }
    }

    fn render_children(&self, node: &Node) -> String {
        node.children().map(|child| self.render(child)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{bbcode_rules, markdown_rules};

    fn markdown(node: &Node) -> String {
        Renderer::new(markdown_rules()).render(node)
    }

    fn bbcode(node: &Node) -> String {
        Renderer::new(bbcode_rules()).render(node)
    }

    #[test]
    fn test_text_is_collapsed_not_trimmed() {
        let text = Node::text("  Hello \t\t world\n again ");
        assert_eq!(markdown(&text), " Hello world  again ");
    }

    #[test]
    fn test_heading() {
        let h2 = Node::element("h2").with_child(Node::text("Title"));
        assert_eq!(markdown(&h2), "## Title\n");
    }

    #[test]
    fn test_nested_inline() {
        let strong = Node::element("strong").with_child(Node::text("World"));
        let p = Node::element("p")
            .with_child(Node::text(" Hello "))
            .with_child(strong);
        assert_eq!(markdown(&p), "Hello **World**  \n");
        assert_eq!(bbcode(&p), "\nHello [b]World[/b]\n");
    }

    #[test]
    fn test_document_concatenates_children() {
        let doc = Node::document()
            .with_child(Node::element("h1").with_child(Node::text("A")))
            .with_child(Node::element("hr"))
            .with_child(Node::element("p").with_child(Node::text("B")));
        assert_eq!(markdown(&doc), "# A\n\n* * *\nB  \n");
        assert_eq!(bbcode(&doc), "A\nB\n");
    }

    #[test]
    fn test_unknown_tags_pass_through() {
        let div = Node::element("div")
            .with_child(Node::element("span").with_child(Node::text("x")))
            .with_child(Node::element("custom-tag"));
        assert_eq!(markdown(&div), "x");
        assert_eq!(bbcode(&div), "x");
    }

    #[test]
    fn test_link_wrapping_image() {
        let img = Node::element_with_attrs("img", [("src", "pic.png"), ("alt", "pic")]);
        let a = Node::element_with_attrs("a", [("href", "https://x.com")]).with_child(img);
        assert_eq!(markdown(&a), "[![pic](pic.png)](https://x.com)");
        assert_eq!(bbcode(&a), "[url=https://x.com][img]pic.png[/img][/url]");
    }

    #[test]
    fn test_bbcode_emphasis_is_not_wrapped() {
        let em = Node::element("em").with_child(Node::text("x"));
        assert_eq!(bbcode(&em), "x");
        assert_eq!(markdown(&em), "*x*");
    }

    #[test]
    fn test_render_does_not_touch_tree() {
        let tree = Node::document().with_child(Node::element("p").with_child(Node::text(" a ")));
        let before = tree.clone();
        let _ = markdown(&tree);
        assert_eq!(tree, before);
    }
}
