//! Block-level parsing for Markdown.

use crate::ast::Block;
use crate::parser::inline::parse_inlines;
use crate::parser::lexer::{
    block_quote_marker, heading, list_item_marker, thematic_break, ListMarker, Token,
};

/// Block quotes nested deeper than this are read as paragraph text.
pub const MAX_QUOTE_DEPTH: usize = 16;

/// Parse all blocks from content.
pub fn parse_blocks(input: &str) -> Vec<Block> {
    parse_blocks_at(input, 0)
}

fn parse_blocks_at(input: &str, depth: usize) -> Vec<Block> {
    let lines: Vec<&str> = input.lines().collect();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        // Skip blank lines
        if line.trim().is_empty() {
            i += 1;
            continue;
        }

        let (block, consumed) = if let Some(parsed) = try_parse_heading(line) {
            parsed
        } else if let Some(parsed) = try_parse_thematic_break(line) {
            parsed
        } else if let Some(parsed) = try_parse_block_quote(&lines[i..], depth) {
            parsed
        } else if let Some(parsed) = try_parse_list(&lines[i..]) {
            parsed
        } else {
            parse_paragraph(&lines[i..])
        };

        blocks.push(block);
        i += consumed;
    }

    blocks
}

fn try_parse_heading(line: &str) -> Option<(Block, usize)> {
    match heading(line.trim_start()) {
        Ok((_, Token::Heading(level, content))) => Some((
            Block::Heading {
                level,
                content: parse_inlines(content.trim()),
            },
            1,
        )),
        _ => None,
    }
}

fn try_parse_thematic_break(line: &str) -> Option<(Block, usize)> {
    thematic_break(line.trim_start())
        .ok()
        .map(|_| (Block::ThematicBreak, 1))
}

fn try_parse_block_quote(lines: &[&str], depth: usize) -> Option<(Block, usize)> {
    if depth >= MAX_QUOTE_DEPTH {
        return None;
    }

    let mut quoted = Vec::new();

    for line in lines {
        match block_quote_marker(line.trim_start()) {
            Ok((rest, Token::BlockQuoteMarker)) => quoted.push(rest),
            _ => break,
        }
    }

    if quoted.is_empty() {
        return None;
    }

    let consumed = quoted.len();
    let inner = parse_blocks_at(&quoted.join("\n"), depth + 1);
    Some((Block::BlockQuote(inner), consumed))
}

fn try_parse_list(lines: &[&str]) -> Option<(Block, usize)> {
    let Ok((_, Token::ListItemMarker(first))) = list_item_marker(lines[0].trim_start()) else {
        return None;
    };

    let ordered = matches!(first, ListMarker::Ordered(_));
    let start = match first {
        ListMarker::Ordered(n) => Some(n),
        ListMarker::Unordered => None,
    };

    let mut items: Vec<String> = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let trimmed = lines[i].trim_start();
        if trimmed.is_empty() {
            break;
        }

        match list_item_marker(trimmed) {
            Ok((rest, Token::ListItemMarker(marker))) => {
                if matches!(marker, ListMarker::Ordered(_)) != ordered {
                    break;
                }
                items.push(rest.to_string());
            }
            // Lazy continuation of the previous item
            _ => match items.last_mut() {
                Some(item) => {
                    item.push('\n');
                    item.push_str(trimmed);
                }
                None => break,
            },
        }
        i += 1;
    }

    let items = items.iter().map(|item| parse_inlines(item)).collect();
    Some((Block::List { ordered, start, items }, i))
}

fn parse_paragraph(lines: &[&str]) -> (Block, usize) {
    let mut para_lines = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        let trimmed = line.trim_start();

        // End paragraph on blank line
        if trimmed.is_empty() {
            break;
        }

        // End paragraph on block-level element
        if i > 0
            && (heading(trimmed).is_ok()
                || thematic_break(trimmed).is_ok()
                || block_quote_marker(trimmed).is_ok()
                || list_item_marker(trimmed).is_ok())
        {
            break;
        }

        para_lines.push(trimmed);
        i += 1;
    }

    let content = para_lines.join("\n");
    (Block::Paragraph(parse_inlines(content.trim_end())), i.max(1))
}
