//! Rule and Filter types for dialect conversion.

use std::sync::Arc;

use crate::node::Node;

/// Type alias for replacement functions.
///
/// A replacement receives the element and its already rendered inner content.
pub type ReplacementFn = Arc<dyn Fn(&Node, &str) -> String + Send + Sync>;

/// A filter determines which elements a rule applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Match a single tag name
    TagName(String),
    /// Match any of multiple tag names
    TagNames(Vec<String>),
}

impl Filter {
    /// Create a filter for a single tag
    pub fn tag(name: &str) -> Self {
        Filter::TagName(name.to_lowercase())
    }

    /// Create a filter for multiple tags
    pub fn tags(names: &[&str]) -> Self {
        Filter::TagNames(names.iter().map(|s| s.to_lowercase()).collect())
    }

    /// Tag names covered by this filter
    pub fn tag_names(&self) -> &[String] {
        match self {
            Filter::TagName(t) => std::slice::from_ref(t),
            Filter::TagNames(tags) => tags,
        }
    }
}

/// A rule defines how to format a matched element in the target dialect
#[derive(Clone)]
pub struct Rule {
    /// Filter to determine which elements this rule applies to
    pub filter: Filter,
    /// Replacement function that generates the dialect text
    pub replacement: ReplacementFn,
}

impl Rule {
    /// Create a new rule
    pub fn new<F>(filter: Filter, replacement: F) -> Self
    where
        F: Fn(&Node, &str) -> String + Send + Sync + 'static,
    {
        Self {
            filter,
            replacement: Arc::new(replacement),
        }
    }

    /// Create a rule that matches a single tag
    pub fn for_tag<F>(tag: &str, replacement: F) -> Self
    where
        F: Fn(&Node, &str) -> String + Send + Sync + 'static,
    {
        Self::new(Filter::tag(tag), replacement)
    }

    /// Create a rule that matches multiple tags
    pub fn for_tags<F>(tags: &[&str], replacement: F) -> Self
    where
        F: Fn(&Node, &str) -> String + Send + Sync + 'static,
    {
        Self::new(Filter::tags(tags), replacement)
    }

    /// Apply this rule's replacement
    pub fn replace(&self, node: &Node, content: &str) -> String {
        (self.replacement)(node, content)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}
