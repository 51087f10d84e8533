//! BBCode rules.
//!
//! The BBCode table is deliberately narrower than the Markdown one: `b`,
//! `em`, `i` and headings fall through to their inner content.

use once_cell::sync::Lazy;

use super::{Rule, Rules};

static BBCODE_RULES: Lazy<Rules> = Lazy::new(|| {
    Rules::from_rules([
        Rule::for_tag("img", |node, _| {
            format!("[img]{}[/img]", node.attr_or_empty("src"))
        }),
        Rule::for_tag("a", |node, content| {
            format!("[url={}]{}[/url]", node.attr_or_empty("href"), content)
        }),
        Rule::for_tag("br", |_, _| "\n".to_string()),
        Rule::for_tag("strong", |_, content| format!("[b]{}[/b]", content)),
        Rule::for_tag("p", |_, content| format!("\n{}\n", content.trim())),
        Rule::for_tag("hr", |_, _| String::new()),
    ])
});

/// The BBCode rule table
pub fn bbcode_rules() -> &'static Rules {
    &BBCODE_RULES
}
