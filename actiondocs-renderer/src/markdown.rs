//! Markdown-to-inline-HTML conversion for table cells.

use pulldown_cmark::{html, CowStr, Event, Options, Parser};

/// Convert a CommonMark fragment to HTML with no newlines in the output.
///
/// Soft line breaks become spaces so wrapped YAML block scalars keep their
/// word boundaries once newlines are stripped.
pub fn inline_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::empty()).map(|event| match event {
        Event::SoftBreak => Event::Text(CowStr::Borrowed(" ")),
        other => other,
    });
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out.replace('\n', "")
}
