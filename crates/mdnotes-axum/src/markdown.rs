//! Markdown to HTML rendering.

use pulldown_cmark::{Options, Parser, html};

fn options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_TASKLISTS
}

/// Render Markdown source to an HTML fragment.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn render(source: &[u8]) -> String {
    let text = String::from_utf8_lossy(source);
    let parser = Parser::new_ext(&text, options());
    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_and_paragraphs() {
        let out = render(b"# Title\n\nSome *text*.");
        assert!(out.contains("<h1>Title</h1>"));
        assert!(out.contains("<em>text</em>"));
    }

    #[test]
    fn renders_tables_and_strikethrough() {
        let out = render(b"| a | b |\n|---|---|\n| 1 | 2 |\n\n~~old~~");
        assert!(out.contains("<table>"));
        assert!(out.contains("<del>old</del>"));
    }

    #[test]
    fn tolerates_invalid_utf8() {
        let out = render(b"caf\xff");
        assert!(out.starts_with("<p>caf"));
    }
}
