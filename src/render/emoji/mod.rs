//! Emoji rendering backends.

mod twemoji;

pub use self::twemoji::TwemojiRenderer;

use serde::Deserialize;

use crate::markup::Markup;

/// Emoji rendering backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmojiBackend {
    /// Replace emoji with Twemoji SVG images so they render the same in
    /// every headless browser.
    #[default]
    Twemoji,
    /// Leave emoji as text for the browser's own emoji font.
    Native,
}

/// Trait for emoji renderers.
pub trait EmojiRenderer {
    /// Replace emoji in the text content of `html`.
    ///
    /// Tags are copied unchanged; only text between them is rewritten.
    fn emojify(&self, html: &Markup) -> Markup;
}

/// Create an emoji renderer for the given backend.
pub fn create_renderer(backend: EmojiBackend, base_url: &str) -> Box<dyn EmojiRenderer> {
    match backend {
        EmojiBackend::Twemoji => Box::new(TwemojiRenderer::new(base_url)),
        EmojiBackend::Native => Box::new(NativeRenderer),
    }
}

/// Leaves emoji as they are.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeRenderer;

impl EmojiRenderer for NativeRenderer {
    fn emojify(&self, html: &Markup) -> Markup {
        html.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::sanitize;

    #[test]
    fn test_native_is_identity() {
        let html = sanitize("Ship it 🚀");
        let renderer = create_renderer(EmojiBackend::Native, "");
        assert_eq!(renderer.emojify(&html), html);
    }

    #[test]
    fn test_backend_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            emoji: EmojiBackend,
        }
        let w: Wrapper = toml::from_str(r#"emoji = "native""#).unwrap();
        assert_eq!(w.emoji, EmojiBackend::Native);
    }
}
