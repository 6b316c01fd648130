//! Syntax tree for the markdown subset accepted in card headings.

/// Block-level elements.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// A paragraph of inline content
    Paragraph(Vec<Inline>),

    /// A heading with level (1-6)
    Heading { level: u8, content: Vec<Inline> },

    /// An ordered or unordered list; each item is one line of inline content
    List {
        ordered: bool,
        start: Option<u32>,
        items: Vec<Vec<Inline>>,
    },

    /// A block quote
    BlockQuote(Vec<Block>),

    /// A thematic break (horizontal rule)
    ThematicBreak,
}

/// Inline-level elements.
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    /// Plain text, not yet escaped
    Text(String),

    /// Emphasized text (*text* or _text_)
    Emphasis(Vec<Inline>),

    /// Strong text (**text** or __text__)
    Strong(Vec<Inline>),

    /// Strikethrough text (~~text~~)
    Strikethrough(Vec<Inline>),

    /// Inline code (`code`)
    Code(String),

    /// A link
    Link { content: Vec<Inline>, url: String },

    /// Soft line break
    SoftBreak,

    /// Hard line break
    HardBreak,
}
