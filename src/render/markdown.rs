//! HTML writer for parsed markdown.

use crate::ast::{Block, Inline};
use crate::markup::{char_reference, sanitize, Markup};
use crate::parser::parse;

const HEADING_TAGS: [(&str, &str); 6] = [
    ("<h1>", "</h1>\n"),
    ("<h2>", "</h2>\n"),
    ("<h3>", "</h3>\n"),
    ("<h4>", "</h4>\n"),
    ("<h5>", "</h5>\n"),
    ("<h6>", "</h6>\n"),
];

/// Convert markdown to HTML.
///
/// The result is safe to embed without further escaping: all source text
/// is sanitized and inline HTML in the source comes out as text.
///
/// ```
/// use og_card::markdown_to_html;
///
/// let html = markdown_to_html("Hello **world**");
/// assert_eq!(html.as_str(), "<p>Hello <strong>world</strong></p>\n");
/// ```
pub fn markdown_to_html(input: &str) -> Markup {
    let mut out = Markup::default();
    for block in &parse(input) {
        write_block(&mut out, block);
    }
    out
}

fn write_block(out: &mut Markup, block: &Block) {
    match block {
        Block::Paragraph(inlines) => {
            out.push_static("<p>");
            write_inlines(out, inlines);
            out.push_static("</p>\n");
        }
        Block::Heading { level, content } => {
            let (open, close) = HEADING_TAGS[usize::from((*level).clamp(1, 6) - 1)];
            out.push_static(open);
            write_inlines(out, content);
            out.push_static(close);
        }
        Block::List {
            ordered,
            start,
            items,
        } => {
            if *ordered {
                match start {
                    Some(n) if *n != 1 => {
                        out.push(&Markup::trusted(format!("<ol start=\"{n}\">\n")));
                    }
                    _ => out.push_static("<ol>\n"),
                }
            } else {
                out.push_static("<ul>\n");
            }

            for item in items {
                out.push_static("<li>");
                write_inlines(out, item);
                out.push_static("</li>\n");
            }

            out.push_static(if *ordered { "</ol>\n" } else { "</ul>\n" });
        }
        Block::BlockQuote(blocks) => {
            out.push_static("<blockquote>\n");
            for block in blocks {
                write_block(out, block);
            }
            out.push_static("</blockquote>\n");
        }
        Block::ThematicBreak => out.push_static("<hr>\n"),
    }
}

fn write_inlines(out: &mut Markup, inlines: &[Inline]) {
    for inline in inlines {
        write_inline(out, inline);
    }
}

fn write_inline(out: &mut Markup, inline: &Inline) {
    match inline {
        Inline::Text(text) => out.push(&sanitize(text)),
        Inline::Emphasis(inner) => wrap(out, "<em>", inner, "</em>"),
        Inline::Strong(inner) => wrap(out, "<strong>", inner, "</strong>"),
        Inline::Strikethrough(inner) => wrap(out, "<del>", inner, "</del>"),
        Inline::Code(code) => {
            out.push_static("<code>");
            out.push(&sanitize(code));
            out.push_static("</code>");
        }
        Inline::Link { content, url } => {
            if is_safe_url(url) {
                out.push_static("<a href=\"");
                out.push(&sanitize(url));
                out.push_static("\">");
                write_inlines(out, content);
                out.push_static("</a>");
            } else {
                write_inlines(out, content);
            }
        }
        Inline::SoftBreak => out.push_static("\n"),
        Inline::HardBreak => out.push_static("<br>\n"),
    }
}

fn wrap(out: &mut Markup, open: &'static str, inner: &[Inline], close: &'static str) {
    out.push_static(open);
    write_inlines(out, inner);
    out.push_static(close);
}

/// Relative URLs and http, https and mailto links are allowed.
fn is_safe_url(url: &str) -> bool {
    // Character references and control characters can hide a scheme from the browser-decoded value.
    if url.chars().any(char::is_control)
        || url
            .match_indices('&')
            .any(|(i, _)| char_reference(&url[i..]).is_ok())
    {
        return false;
    }

    let scheme_end = url.find(|c: char| matches!(c, ':' | '/' | '?' | '#'));
    match scheme_end {
        Some(i) if url[i..].starts_with(':') => {
            let scheme = url[..i].to_ascii_lowercase();
            matches!(scheme.as_str(), "http" | "https" | "mailto")
        }
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::MAX_QUOTE_DEPTH;
    use pretty_assertions::assert_eq;

    fn html(input: &str) -> String {
        markdown_to_html(input).into_string()
    }

    #[test]
    fn test_bold() {
        assert_eq!(html("**bold**"), "<p><strong>bold</strong></p>\n");
    }

    #[test]
    fn test_inline_elements() {
        assert_eq!(
            html("*em* ~~del~~ `a<b`"),
            "<p><em>em</em> <del>del</del> <code>a&lt;b</code></p>\n"
        );
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(html("# One"), "<h1>One</h1>\n");
        assert_eq!(html("###### Six"), "<h6>Six</h6>\n");
    }

    #[test]
    fn test_lists() {
        assert_eq!(html("- a\n- b"), "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n");
        assert_eq!(html("1. a\n2. b"), "<ol>\n<li>a</li>\n<li>b</li>\n</ol>\n");
        assert_eq!(html("5. e"), "<ol start=\"5\">\n<li>e</li>\n</ol>\n");
    }

    #[test]
    fn test_block_quote_and_rule() {
        assert_eq!(
            html("> hi\n\n---"),
            "<blockquote>\n<p>hi</p>\n</blockquote>\n<hr>\n"
        );
    }

    #[test]
    fn test_deeply_nested_quotes() {
        let out = html(&">".repeat(3_000));
        assert_eq!(out.matches("<blockquote>").count(), MAX_QUOTE_DEPTH);
        assert!(out.contains("<p>&gt;&gt;&gt;"));
    }

    #[test]
    fn test_hard_break() {
        assert_eq!(html("a  \nb"), "<p>a<br>\nb</p>\n");
    }

    #[test]
    fn test_raw_html_escaped() {
        assert_eq!(
            html("<img src=x onerror=alert(1)>"),
            "<p>&lt;img src=x onerror=alert(1)&gt;</p>\n"
        );
    }

    #[test]
    fn test_links() {
        assert_eq!(
            html("[site](https://hackclub.com)"),
            "<p><a href=\"https:&#x2F;&#x2F;hackclub.com\">site</a></p>\n"
        );
        assert_eq!(html("[x](javascript:alert(1))"), "<p>x</p>\n");
        assert_eq!(
            html("[wiki](https://en.wikipedia.org/wiki/Rust_(language))"),
            "<p><a href=\"https:&#x2F;&#x2F;en.wikipedia.org&#x2F;wiki&#x2F;Rust_(language)\">wiki</a></p>\n"
        );
        assert_eq!(html("[rel](docs)"), "<p><a href=\"docs\">rel</a></p>\n");
    }

    #[test]
    fn test_safe_url() {
        assert!(is_safe_url("https://a.test"));
        assert!(is_safe_url("MAILTO:x@y.z"));
        assert!(is_safe_url("/path:with-colon"));
        assert!(is_safe_url("page?q=a:b"));
        assert!(!is_safe_url("javascript:alert(1)"));
        assert!(!is_safe_url("data:text/html,hi"));
        assert!(!is_safe_url("java&#x73;cript:alert(1)"));
        assert!(!is_safe_url("java\rscript:alert(1)"));
        assert!(is_safe_url("https://a.test/?a=1&b=2"));
    }
}
