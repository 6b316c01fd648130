//! Parser for the markdown subset allowed in card headings.
//!
//! Parsing never fails: anything that does not form a recognized element
//! is kept as literal text, and raw HTML is treated as text as well.

mod block;
mod inline;
mod lexer;

pub use block::{parse_blocks, MAX_QUOTE_DEPTH};
pub use inline::parse_inlines;

use crate::ast::Block;

/// Parse markdown source into blocks.
pub fn parse(input: &str) -> Vec<Block> {
    let blocks = parse_blocks(input);
    tracing::trace!(blocks = blocks.len(), "parsed markdown");
    blocks
}
