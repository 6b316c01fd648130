//! Inline-level parsing for Markdown.

use crate::ast::Inline;
use crate::parser::lexer::{emphasis, inline_code, link, strikethrough, strong, Token};

/// Parse inline content from a string.
pub fn parse_inlines(input: &str) -> Vec<Inline> {
    let mut inlines = Vec::new();
    let mut remaining = input;

    while !remaining.is_empty() {
        if let Some((inline, rest)) = try_parse_inline(remaining) {
            push_inline(&mut inlines, inline);
            remaining = rest;
            continue;
        }

        let (text, rest) = consume_text(remaining);
        if text.is_empty() {
            // A marker that did not open an element is literal text
            let len = remaining.chars().next().map_or(1, char::len_utf8);
            push_inline(&mut inlines, Inline::Text(remaining[..len].to_string()));
            remaining = &remaining[len..];
        } else {
            push_inline(&mut inlines, Inline::Text(text.to_string()));
            remaining = rest;
        }
    }

    inlines
}

fn try_parse_inline(input: &str) -> Option<(Inline, &str)> {
    // Order matters - try more specific patterns first

    if let Some(rest) = input.strip_prefix('\\') {
        if let Some(rest) = rest.strip_prefix('\n') {
            return Some((Inline::HardBreak, rest.trim_start_matches(' ')));
        }
        let escaped = rest.chars().next().filter(char::is_ascii_punctuation)?;
        let len = escaped.len_utf8();
        return Some((Inline::Text(rest[..len].to_string()), &rest[len..]));
    }

    if let Some(rest) = input.strip_prefix('\n') {
        return Some((Inline::SoftBreak, rest.trim_start_matches(' ')));
    }

    if input.starts_with("**") || input.starts_with("__") {
        if let Ok((rest, Token::Strong(content))) = strong(input) {
            return Some((Inline::Strong(parse_inlines(content)), rest));
        }
    }

    if input.starts_with("~~") {
        if let Ok((rest, Token::Strikethrough(content))) = strikethrough(input) {
            return Some((Inline::Strikethrough(parse_inlines(content)), rest));
        }
    }

    if input.starts_with('*') || input.starts_with('_') {
        if let Ok((rest, Token::Emphasis(content))) = emphasis(input) {
            return Some((Inline::Emphasis(parse_inlines(content)), rest));
        }
    }

    if input.starts_with('`') {
        if let Ok((rest, Token::InlineCode(content))) = inline_code(input) {
            return Some((Inline::Code(content.to_string()), rest));
        }
    }

    if input.starts_with('[') {
        if let Ok((rest, Token::Link(text, url))) = link(input) {
            return Some((
                Inline::Link {
                    content: parse_inlines(text),
                    url: url.to_string(),
                },
                rest,
            ));
        }
    }

    None
}

/// Append an inline, merging adjacent text and turning a soft break after
/// two trailing spaces into a hard break.
fn push_inline(inlines: &mut Vec<Inline>, inline: Inline) {
    match inline {
        Inline::Text(text) => {
            if let Some(Inline::Text(prev)) = inlines.last_mut() {
                prev.push_str(&text);
            } else {
                inlines.push(Inline::Text(text));
            }
        }
        Inline::SoftBreak => {
            let mut hard = false;
            let mut emptied = false;
            if let Some(Inline::Text(prev)) = inlines.last_mut() {
                hard = prev.ends_with("  ");
                let kept = prev.trim_end_matches(' ').len();
                prev.truncate(kept);
                emptied = prev.is_empty();
            }
            if emptied {
                inlines.pop();
            }
            inlines.push(if hard { Inline::HardBreak } else { Inline::SoftBreak });
        }
        inline => inlines.push(inline),
    }
}

/// Consume plain text up to the next character that may start an element.
///
/// An underscore inside a word (`snake_case`) never opens emphasis.
fn consume_text(input: &str) -> (&str, &str) {
    let mut prev: Option<char> = None;

    for (i, c) in input.char_indices() {
        let special = match c {
            '*' | '~' | '`' | '[' | '\\' | '\n' => true,
            '_' => !prev.is_some_and(char::is_alphanumeric),
            _ => false,
        };
        if special {
            return (&input[..i], &input[i..]);
        }
        prev = Some(c);
    }

    (input, "")
}
