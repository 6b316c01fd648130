//! Twemoji image replacement.

use super::EmojiRenderer;
use crate::markup::{sanitize, Markup};

const ZWJ: char = '\u{200D}';
const VS16: char = '\u{FE0F}';
const KEYCAP: char = '\u{20E3}';
const CANCEL_TAG: char = '\u{E007F}';

/// Replaces emoji with `<img class="emoji">` elements pointing at Twemoji SVGs.
#[derive(Debug, Clone)]
pub struct TwemojiRenderer {
    base_url: Markup,
}

impl TwemojiRenderer {
    /// `base_url` is the folder holding the SVGs, including the trailing slash.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: sanitize(base_url),
        }
    }

    fn push_image(&self, out: &mut String, emoji: &str) {
        out.push_str(r#"<img class="emoji" draggable="false" alt=""#);
        out.push_str(emoji);
        out.push_str(r#"" src=""#);
        out.push_str(self.base_url.as_str());
        out.push_str(&icon_name(emoji));
        out.push_str(r#".svg"/>"#);
    }
}

impl EmojiRenderer for TwemojiRenderer {
    fn emojify(&self, html: &Markup) -> Markup {
        let mut out = String::with_capacity(html.as_str().len());
        let mut rest = html.as_str();

        while let Some(c) = rest.chars().next() {
            if c == '<' {
                let end = rest.find('>').map_or(rest.len(), |i| i + 1);
                out.push_str(&rest[..end]);
                rest = &rest[end..];
            } else if let Some(len) = emoji_len(rest) {
                self.push_image(&mut out, &rest[..len]);
                rest = &rest[len..];
            } else {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }

        // Emoji carry no HTML-significant characters and tags were copied as is.
        Markup::trusted(out)
    }
}

/// Twemoji file name: lowercase hex code points joined by `-`.
///
/// U+FE0F is dropped unless the sequence contains a zero-width joiner.
fn icon_name(emoji: &str) -> String {
    let keep_vs16 = emoji.contains(ZWJ);
    emoji
        .chars()
        .filter(|&c| keep_vs16 || c != VS16)
        .map(|c| format!("{:x}", c as u32))
        .collect::<Vec<_>>()
        .join("-")
}

/// Byte length of the emoji sequence at the start of `input`, if any.
fn emoji_len(input: &str) -> Option<usize> {
    let mut cur = Cursor::new(input);
    let first = cur.peek()?;

    if matches!(first, '0'..='9' | '#' | '*') {
        cur.bump();
        cur.eat(|c| c == VS16);
        return cur.eat(|c| c == KEYCAP).then_some(cur.pos);
    }

    if is_regional_indicator(first) {
        cur.bump();
        return cur.eat(is_regional_indicator).then_some(cur.pos);
    }

    if !eat_element(&mut cur) {
        return None;
    }

    // Subdivision flags: black flag + tag characters + cancel tag
    if cur.eat(is_tag) {
        while cur.eat(is_tag) {}
        cur.eat(|c| c == CANCEL_TAG);
    }

    while cur.peek() == Some(ZWJ) {
        let mut ahead = cur.clone();
        ahead.bump();
        if !eat_element(&mut ahead) {
            break;
        }
        cur = ahead;
    }

    Some(cur.pos)
}

/// One pictograph with its optional variation selector and skin tone.
fn eat_element(cur: &mut Cursor<'_>) -> bool {
    let Some(c) = cur.peek() else {
        return false;
    };
    let selected = cur.peek_second() == Some(VS16);
    if !(has_emoji_presentation(c) || (has_text_presentation(c) && selected)) {
        return false;
    }

    cur.bump();
    cur.eat(|c| c == VS16);
    cur.eat(is_skin_tone);
    true
}

#[derive(Debug, Clone)]
struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.input[self.pos..].chars().nth(1)
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn eat(&mut self, pred: impl Fn(char) -> bool) -> bool {
        match self.peek() {
            Some(c) if pred(c) => {
                self.bump();
                true
            }
            _ => false,
        }
    }
}

fn is_regional_indicator(c: char) -> bool {
    matches!(c, '\u{1F1E6}'..='\u{1F1FF}')
}

fn is_skin_tone(c: char) -> bool {
    matches!(c, '\u{1F3FB}'..='\u{1F3FF}')
}

fn is_tag(c: char) -> bool {
    matches!(c, '\u{E0020}'..='\u{E007E}')
}

/// Characters shown as emoji without a variation selector.
fn has_emoji_presentation(c: char) -> bool {
    matches!(
        c,
        '\u{231A}'..='\u{231B}'
            | '\u{23E9}'..='\u{23EC}'
            | '\u{23F0}'
            | '\u{23F3}'
            | '\u{25FD}'..='\u{25FE}'
            | '\u{2614}'..='\u{2615}'
            | '\u{2648}'..='\u{2653}'
            | '\u{267F}'
            | '\u{2693}'
            | '\u{26A1}'
            | '\u{26AA}'..='\u{26AB}'
            | '\u{26BD}'..='\u{26BE}'
            | '\u{26C4}'..='\u{26C5}'
            | '\u{26CE}'
            | '\u{26D4}'
            | '\u{26EA}'
            | '\u{26F2}'..='\u{26F3}'
            | '\u{26F5}'
            | '\u{26FA}'
            | '\u{26FD}'
            | '\u{2705}'
            | '\u{270A}'..='\u{270B}'
            | '\u{2728}'
            | '\u{274C}'
            | '\u{274E}'
            | '\u{2753}'..='\u{2755}'
            | '\u{2757}'
            | '\u{2795}'..='\u{2797}'
            | '\u{27B0}'
            | '\u{27BF}'
            | '\u{2B1B}'..='\u{2B1C}'
            | '\u{2B50}'
            | '\u{2B55}'
            | '\u{1F004}'
            | '\u{1F0CF}'
            | '\u{1F18E}'
            | '\u{1F191}'..='\u{1F19A}'
            | '\u{1F201}'
            | '\u{1F21A}'
            | '\u{1F22F}'
            | '\u{1F232}'..='\u{1F236}'
            | '\u{1F238}'..='\u{1F23A}'
            | '\u{1F250}'..='\u{1F251}'
            | '\u{1F300}'..='\u{1F64F}'
            | '\u{1F680}'..='\u{1F6FF}'
            | '\u{1F7E0}'..='\u{1F7F0}'
            | '\u{1F900}'..='\u{1F9FF}'
            | '\u{1FA70}'..='\u{1FAFF}'
    )
}

/// Symbols that become emoji when followed by U+FE0F.
fn has_text_presentation(c: char) -> bool {
    matches!(
        c,
        '\u{00A9}'
            | '\u{00AE}'
            | '\u{203C}'
            | '\u{2049}'
            | '\u{2122}'
            | '\u{2139}'
            | '\u{2194}'..='\u{21AA}'
            | '\u{2328}'
            | '\u{23CF}'
            | '\u{23ED}'..='\u{23FA}'
            | '\u{24C2}'
            | '\u{25AA}'..='\u{25FE}'
            | '\u{2600}'..='\u{27BF}'
            | '\u{2934}'..='\u{2935}'
            | '\u{2B05}'..='\u{2B55}'
            | '\u{3030}'
            | '\u{303D}'
            | '\u{3297}'
            | '\u{3299}'
            | '\u{1F000}'..='\u{1FAFF}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BASE: &str = "https://cdn.example/svg/";

    fn emojify(html: &str) -> String {
        TwemojiRenderer::new(BASE)
            .emojify(&Markup::trusted(html))
            .into_string()
    }

    #[test]
    fn test_single_emoji() {
        assert_eq!(
            emojify("Party 🎉"),
            r#"Party <img class="emoji" draggable="false" alt="🎉" src="https:&#x2F;&#x2F;cdn.example&#x2F;svg&#x2F;1f389.svg"/>"#
        );
    }

    #[test]
    fn test_icon_names() {
        assert_eq!(icon_name("🎉"), "1f389");
        assert_eq!(icon_name("❤️"), "2764");
        assert_eq!(icon_name("👍🏽"), "1f44d-1f3fd");
        assert_eq!(icon_name("🇺🇸"), "1f1fa-1f1f8");
        assert_eq!(icon_name("1️⃣"), "31-20e3");
        assert_eq!(icon_name("❤️‍🔥"), "2764-fe0f-200d-1f525");
    }

    #[test]
    fn test_sequence_lengths() {
        assert_eq!(emoji_len("👨‍👩‍👧 family"), Some("👨‍👩‍👧".len()));
        assert_eq!(emoji_len("🇺🇸!"), Some("🇺🇸".len()));
        assert_eq!(emoji_len("1️⃣ one"), Some("1️⃣".len()));
        assert_eq!(emoji_len("👍🏽"), Some("👍🏽".len()));
        assert_eq!(emoji_len("🏴󠁧󠁢󠁳󠁣󠁴󠁿"), Some("🏴󠁧󠁢󠁳󠁣󠁴󠁿".len()));
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(emoji_len("1 one"), None);
        assert_eq!(emoji_len("#hash"), None);
        assert_eq!(emoji_len("★"), None);
        assert_eq!(emoji_len("©"), None);
        assert_eq!(emojify("x &amp; y © 2024"), "x &amp; y © 2024");
    }

    #[test]
    fn test_text_symbol_with_selector() {
        assert_eq!(emoji_len("❤️"), Some("❤️".len()));
        assert_eq!(emoji_len("❤"), None);
    }

    #[test]
    fn test_tags_are_not_rewritten() {
        let html = r#"<a href="https://x.test/🎉">go</a>"#;
        assert_eq!(emojify(html), html);
    }
}
