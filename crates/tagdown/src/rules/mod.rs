//! Rule tables mapping tag names to dialect formatting functions.

mod bbcode;
mod markdown;
mod rule;

pub use bbcode::bbcode_rules;
pub use markdown::markdown_rules;
pub use rule::{Filter, ReplacementFn, Rule};

use indexmap::IndexMap;

/// Tag name → rule mapping for one dialect.
///
/// Each tag maps to exactly one rule. Tags without an entry pass their inner
/// content through unchanged.
#[derive(Debug, Clone, Default)]
pub struct Rules {
    by_tag: IndexMap<String, Rule>,
}

impl Rules {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a list of rules
    pub fn from_rules(rules: impl IntoIterator<Item = Rule>) -> Self {
        let mut table = Self::new();
        for rule in rules {
            table.add(rule);
        }
        table
    }

    /// Register a rule for every tag its filter names.
    ///
    /// A later rule for the same tag replaces the earlier one.
    pub fn add(&mut self, rule: Rule) {
        for tag in rule.filter.tag_names() {
            self.by_tag.insert(tag.clone(), rule.clone());
        }
    }

    /// Find the rule for a tag name
    pub fn for_tag(&self, tag: &str) -> Option<&Rule> {
        self.by_tag.get(tag.to_lowercase().as_str())
    }

    /// Tag names with a registered rule, in registration order
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.by_tag.keys().map(String::as_str)
    }

    /// Format an element: apply its rule, or pass `content` through
    pub fn apply(&self, node: &crate::Node, content: String) -> String {
        match self.for_tag(node.tag_name()) {
            Some(rule) => rule.replace(node, &content),
            None => content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Node;

    #[test]
    fn test_unknown_tag_passes_through() {
        let rules = markdown_rules();
        let span = Node::element("span");
        assert!(rules.for_tag("span").is_none());
        assert_eq!(rules.apply(&span, "inner".to_string()), "inner");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert!(markdown_rules().for_tag("STRONG").is_some());
        assert!(bbcode_rules().for_tag("Img").is_some());
    }

    #[test]
    fn test_later_rule_replaces_earlier() {
        let mut rules = Rules::from_rules([Rule::for_tag("u", |_, c| format!("_{c}_"))]);
        rules.add(Rule::for_tags(&["u", "ins"], |_, c| format!("[u]{c}[/u]")));

        let u = Node::element("u");
        assert_eq!(rules.apply(&u, "x".to_string()), "[u]x[/u]");
        assert_eq!(rules.tags().collect::<Vec<_>>(), ["u", "ins"]);
    }

    #[test]
    fn test_markdown_table_is_wider_than_bbcode() {
        let bbcode: Vec<&str> = bbcode_rules().tags().collect();
        for tag in ["b", "em", "i", "h1", "h6"] {
            assert!(markdown_rules().for_tag(tag).is_some(), "{tag}");
            assert!(!bbcode.contains(&tag), "{tag}");
        }
    }
}
