//! Markdown rules.

use once_cell::sync::Lazy;

use super::{Rule, Rules};
use crate::utilities::heading_level;

static MARKDOWN_RULES: Lazy<Rules> = Lazy::new(|| {
    Rules::from_rules([
        image_rule(),
        link_rule(),
        line_break_rule(),
        strong_rule(),
        emphasis_rule(),
        paragraph_rule(),
        horizontal_rule(),
        heading_rule(),
    ])
});

/// The Markdown rule table
pub fn markdown_rules() -> &'static Rules {
    &MARKDOWN_RULES
}

fn image_rule() -> Rule {
    Rule::for_tag("img", |node, _| {
        format!(
            "![{}]({})",
            node.attr_or_empty("alt"),
            node.attr_or_empty("src")
        )
    })
}

fn link_rule() -> Rule {
    Rule::for_tag("a", |node, content| {
        let href = node.attr_or_empty("href");
        if href.starts_with("http") {
            format!("[{}]({})", content, href)
        } else {
            // NOTE: content lands in the image-path slot here. Kept as-is,
            // see "Open questions" in DESIGN.md.
            format!("[![]({})]({})", content, href)
        }
    })
}

fn line_break_rule() -> Rule {
    Rule::for_tag("br", |_, _| "  \n".to_string())
}

fn strong_rule() -> Rule {
    Rule::for_tags(&["strong", "b"], |_, content| format!("**{}**", content))
}

fn emphasis_rule() -> Rule {
    Rule::for_tags(&["em", "i"], |_, content| format!("*{}*", content))
}

fn paragraph_rule() -> Rule {
    Rule::for_tag("p", |_, content| {
        let content = content.trim();
        if content.is_empty() {
            "\n".to_string()
        } else {
            format!("{}  \n", content)
        }
    })
}

fn horizontal_rule() -> Rule {
    Rule::for_tag("hr", |_, _| "\n* * *\n".to_string())
}

fn heading_rule() -> Rule {
    Rule::for_tags(&["h1", "h2", "h3", "h4", "h5", "h6"], |node, content| {
        let level = heading_level(node.tag_name()).unwrap_or(1);
        format!("{} {}\n", "#".repeat(level), content)
    })
}
