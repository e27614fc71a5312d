//! Documentation sanitizing and markup.
//!
//! Raw comment text is escaped first so that the markup introduced by the
//! later rewrites is never escaped itself.

use regex::{Captures, Regex};
use std::sync::OnceLock;

fn continuation_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n[ \t]*\*[ \t]*|\n[ \t]*").expect("valid regex"))
}

fn blank_line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n\n(@)?").expect("valid regex"))
}

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n@(\w+)").expect("valid regex"))
}

fn param_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n@param (\w+)").expect("valid regex"))
}

/// Escape the characters that are significant in HTML markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Turn raw comment text into a display-safe summary.
pub fn filter_documentation(doc: &str) -> String {
    let escaped = escape_html(doc);
    let collapsed = continuation_regex().replace_all(&escaped, "\n");

    // A blank line is a paragraph break unless a tag follows it
    let paragraphs = blank_line_regex().replace_all(&collapsed, |caps: &Captures| {
        if caps.get(1).is_some() {
            "\n\n@".to_string()
        } else {
            "<br/><br/>".to_string()
        }
    });

    // Separate the summary from the first tag
    let separated = tag_regex().replace(&paragraphs, "<br/>\n@${1}");
    let params = param_regex().replace_all(&separated, "<br/>\n<b>@param</b> <i>${1}</i>");
    tag_regex()
        .replace_all(&params, "<br/>\n<b>@${1}</b>")
        .into_owned()
}
