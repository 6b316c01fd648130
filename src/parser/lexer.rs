//! Token recognizers for the markdown subset.

use nom::{
    branch::alt,
    bytes::complete::{is_not, tag, take_until, take_while1},
    character::complete::{char, not_line_ending, space0, space1},
    combinator::{eof, map, not, opt, peek, recognize, verify},
    error::{Error, ErrorKind},
    multi::many0,
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};

/// A token from the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'a> {
    // Block-level tokens
    Heading(u8, &'a str), // Level, content
    ThematicBreak,
    BlockQuoteMarker,
    ListItemMarker(ListMarker),

    // Inline tokens
    Emphasis(&'a str),
    Strong(&'a str),
    Strikethrough(&'a str),
    InlineCode(&'a str),
    Link(&'a str, &'a str), // text, url
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListMarker {
    Unordered,
    Ordered(u32),
}

/// Parse a heading (ATX style: # Heading).
pub fn heading(input: &str) -> IResult<&str, Token> {
    let (input, hashes) = verify(take_while1(|c: char| c == '#'), |h: &str| h.len() <= 6)(input)?;
    let level = hashes.len() as u8;
    let (input, _) = alt((space1, eof))(input)?;
    let (input, content) = not_line_ending(input)?;
    // Trim a closing sequence of # and spaces
    let content = content.trim_end_matches(|c: char| c == '#' || c == ' ');
    Ok((input, Token::Heading(level, content)))
}

/// Parse a thematic break (---, ***, ___) spanning the whole line.
pub fn thematic_break(input: &str) -> IResult<&str, Token> {
    let (input, _) = alt((
        recognize(tuple((tag("---"), many0(char('-'))))),
        recognize(tuple((tag("***"), many0(char('*'))))),
        recognize(tuple((tag("___"), many0(char('_'))))),
    ))(input)?;
    let (input, _) = terminated(space0, eof)(input)?;
    Ok((input, Token::ThematicBreak))
}

/// Parse a block quote marker.
pub fn block_quote_marker(input: &str) -> IResult<&str, Token> {
    let (input, _) = char('>')(input)?;
    let (input, _) = opt(char(' '))(input)?;
    Ok((input, Token::BlockQuoteMarker))
}

/// Parse a list item marker.
pub fn list_item_marker(input: &str) -> IResult<&str, Token> {
    alt((
        map(
            tuple((alt((char('-'), char('*'), char('+'))), space1)),
            |_| Token::ListItemMarker(ListMarker::Unordered),
        ),
        map(
            tuple((
                take_while1(|c: char| c.is_ascii_digit()),
                alt((char('.'), char(')'))),
                space1,
            )),
            |(num, _, _): (&str, _, _)| {
                Token::ListItemMarker(ListMarker::Ordered(num.parse().unwrap_or(1)))
            },
        ),
    ))(input)
}

/// Parse inline code (`code`).
pub fn inline_code(input: &str) -> IResult<&str, Token> {
    map(
        delimited(char('`'), is_not("`"), char('`')),
        Token::InlineCode,
    )(input)
}

/// Parse emphasis (*text* or _text_).
pub fn emphasis(input: &str) -> IResult<&str, Token> {
    alt((
        delimited(
            pair(char('*'), peek(not(alt((char('*'), char(' ')))))),
            map(take_until("*"), Token::Emphasis),
            char('*'),
        ),
        delimited(
            pair(char('_'), peek(not(alt((char('_'), char(' ')))))),
            map(take_until("_"), Token::Emphasis),
            char('_'),
        ),
    ))(input)
}

/// Parse strong (**text** or __text__).
pub fn strong(input: &str) -> IResult<&str, Token> {
    alt((
        delimited(
            tag("**"),
            map(verify(take_until("**"), |s: &str| !s.is_empty()), Token::Strong),
            tag("**"),
        ),
        delimited(
            tag("__"),
            map(verify(take_until("__"), |s: &str| !s.is_empty()), Token::Strong),
            tag("__"),
        ),
    ))(input)
}

/// Parse strikethrough (~~text~~).
pub fn strikethrough(input: &str) -> IResult<&str, Token> {
    map(
        delimited(
            tag("~~"),
            verify(take_until("~~"), |s: &str| !s.is_empty()),
            tag("~~"),
        ),
        Token::Strikethrough,
    )(input)
}

/// Parse a link ([text](url)).
pub fn link(input: &str) -> IResult<&str, Token> {
    map(
        pair(
            delimited(char('['), is_not("]"), char(']')),
            delimited(
                char('('),
                preceded(space0, link_destination),
                preceded(space0, char(')')),
            ),
        ),
        |(text, url)| Token::Link(text, url),
    )(input)
}

/// Parse a link destination: no whitespace, parentheses balanced.
fn link_destination(input: &str) -> IResult<&str, &str> {
    let mut depth = 0usize;
    let mut end = input.len();

    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' if depth == 0 => {
                end = i;
                break;
            }
            ')' => depth -= 1,
            c if c.is_whitespace() => {
                end = i;
                break;
            }
            _ => {}
        }
    }

    if end == 0 || depth > 0 {
        return Err(nom::Err::Error(Error::new(input, ErrorKind::TakeWhile1)));
    }
    Ok((&input[end..], &input[..end]))
}
