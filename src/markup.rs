//! Safe HTML fragments and the sanitizer that produces them.
//!
//! A [`Markup`] value is text that may be interpolated into HTML, either in
//! element content or inside a quoted attribute value, without introducing
//! new elements or attributes. Outside this crate the only way to obtain one
//! is [`sanitize`] (or [`Markup::escape`]); the markdown converter and the
//! emoji renderer build theirs from sanitized pieces.

use std::fmt;

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while_m_n},
    character::complete::{char, satisfy},
    combinator::recognize,
    sequence::{pair, preceded, tuple},
    IResult,
};

/// A string that is safe to interpolate into HTML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Markup(String);

impl Markup {
    /// Escape untrusted text. Same as [`sanitize`].
    pub fn escape(raw: &str) -> Self {
        sanitize(raw)
    }

    /// Wrap markup produced by this crate from already-safe pieces.
    pub(crate) fn trusted(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Append another safe fragment.
    pub(crate) fn push(&mut self, other: &Markup) {
        self.0.push_str(&other.0);
    }

    /// Append a fixed string known at compile time to be safe.
    pub(crate) fn push_static(&mut self, html: &'static str) {
        self.0.push_str(html);
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Markup {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Markup> for String {
    fn from(markup: Markup) -> Self {
        markup.0
    }
}

/// Escape HTML-significant characters in `raw`.
///
/// `&`, `<`, `>`, `"`, `'` and `/` are replaced with character references.
/// An `&` that already starts a well-formed character reference is kept as
/// is, so sanitizing twice gives the same result as sanitizing once.
///
/// ```
/// use og_card::sanitize;
///
/// let once = sanitize("<b>Fish & Chips</b>");
/// assert_eq!(once.as_str(), "&lt;b&gt;Fish &amp; Chips&lt;&#x2F;b&gt;");
/// assert_eq!(sanitize(once.as_str()), once);
/// ```
pub fn sanitize(raw: &str) -> Markup {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(pos) = rest.find(is_significant) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if let Ok((after, reference)) = char_reference(tail) {
            out.push_str(reference);
            rest = after;
            continue;
        }

        // Every significant character is ASCII, so it is one byte wide.
        out.push_str(match tail.as_bytes()[0] {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            b'\'' => "&#39;",
            _ => "&#x2F;",
        });
        rest = &tail[1..];
    }

    out.push_str(rest);
    Markup(out)
}

fn is_significant(c: char) -> bool {
    matches!(c, '&' | '<' | '>' | '"' | '\'' | '/')
}

/// Recognize a character reference (`&amp;`, `&#39;`, `&#x2F;`) at the start of the input.
pub(crate) fn char_reference(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        char('&'),
        alt((
            preceded(
                alt((tag("#x"), tag("#X"))),
                take_while_m_n(1, 6, |c: char| c.is_ascii_hexdigit()),
            ),
            preceded(char('#'), take_while_m_n(1, 7, |c: char| c.is_ascii_digit())),
            recognize(pair(
                satisfy(|c| c.is_ascii_alphabetic()),
                take_while_m_n(0, 31, |c: char| c.is_ascii_alphanumeric()),
            )),
        )),
        char(';'),
    )))(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escapes_significant_characters() {
        assert_eq!(
            sanitize(r#"<img src="x" onerror='alert(1)'>"#).as_str(),
            "&lt;img src=&quot;x&quot; onerror=&#39;alert(1)&#39;&gt;"
        );
        assert_eq!(sanitize("a/b").as_str(), "a&#x2F;b");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(sanitize("Hello, world!").as_str(), "Hello, world!");
        assert_eq!(sanitize("").as_str(), "");
        assert_eq!(sanitize("héllo 🎉").as_str(), "héllo 🎉");
    }

    #[test]
    fn test_bare_ampersand() {
        assert_eq!(sanitize("Fish & Chips").as_str(), "Fish &amp; Chips");
        assert_eq!(sanitize("&").as_str(), "&amp;");
        assert_eq!(sanitize("&;").as_str(), "&amp;;");
        assert_eq!(sanitize("&#x;").as_str(), "&amp;#x;");
        assert_eq!(sanitize("&amp").as_str(), "&amp;amp");
    }

    #[test]
    fn test_existing_references_kept() {
        assert_eq!(sanitize("&amp;").as_str(), "&amp;");
        assert_eq!(sanitize("&#39;&#x2F;&#X2f;").as_str(), "&#39;&#x2F;&#X2f;");
        assert_eq!(sanitize("&nbsp;<").as_str(), "&nbsp;&lt;");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "<script>alert('x')</script>",
            "Fish & Chips",
            "https://example.com/a?b=1&c=2",
            "&&&;;<<>>\"'//",
            "already &lt;escaped&gt;",
            "&#x;&#;&a",
        ];
        for input in inputs {
            let once = sanitize(input);
            let twice = sanitize(once.as_str());
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_char_reference() {
        assert_eq!(char_reference("&amp; rest"), Ok((" rest", "&amp;")));
        assert_eq!(char_reference("&#123;"), Ok(("", "&#123;")));
        assert_eq!(char_reference("&#x1F600;"), Ok(("", "&#x1F600;")));
        assert!(char_reference("&1abc;").is_err());
        assert!(char_reference("& amp;").is_err());
    }
}
