//! # og-card
//!
//! Renders the HTML page behind a social preview card: a brand bar, an
//! optional row of images, a large heading and an optional caption, on a
//! light or dark dotted background. A headless browser screenshots the page
//! to produce the final image.
//!
//! ## Quick Start
//!
//! ```rust
//! use og_card::{render, RenderRequest, Theme};
//!
//! let request = RenderRequest::new("**Hello** world 👋")
//!     .with_markdown(true)
//!     .with_theme(Theme::Dark)
//!     .with_font_size("80px")
//!     .with_images(["https://assets.hackclub.com/flag-orpheus-top.svg"])
//!     .with_caption("Every Friday");
//!
//! let html = render(&request);
//! assert!(html.contains("<strong>Hello</strong>"));
//! assert!(html.contains("background: #17171d;"));
//! ```
//!
//! ## Safety
//!
//! Every request field that reaches the page goes through [`sanitize`],
//! except markdown headings, which go through [`markdown_to_html`] instead.
//! The renderer only interpolates [`Markup`] values, and outside this crate
//! a `Markup` can only come from one of those two functions.
//!
//! ## Request Fields
//!
//! - `text`: the heading; markdown when `md` is true
//! - `theme`: `"dark"`, anything else is light
//! - `fontSize`: heading size such as `"96px"`; the caption is 0.375 of it
//! - `brand`: shown after the organisation name; empty or `"undefined"` hides it
//! - `images`: image URLs, joined with `+` signs
//! - `caption`: small text under the heading; empty or `"undefined"` hides it
//!
//! ## Markdown
//!
//! Headings, paragraphs, lists, block quotes and rules, with `**strong**`,
//! `*emphasis*`, `~~strikethrough~~`, `` `code` `` and `[links](https://…)`
//! inline. Raw HTML is shown as text.
//!
//! ## Configuration
//!
//! [`CardConfig`] holds the brand labels, the logo, the emoji backend and
//! the caption scale. It can be loaded from TOML with
//! [`CardConfig::from_toml_str`] or [`CardConfig::from_path`].
//!
//! ## Features
//!
//! - `wasm`: WebAssembly bindings (requires `wasm-bindgen`)

pub mod ast;
pub mod config;
pub mod error;
pub mod markup;
pub mod parser;
pub mod render;
pub mod request;

// WASM module (only with feature)
#[cfg(feature = "wasm")]
pub mod wasm;

// Convenience re-exports
pub use config::CardConfig;
pub use error::{ConfigError, Error, Result};
pub use markup::{sanitize, Markup};
pub use render::{markdown_to_html, render_card, EmojiBackend, EmojiRenderer};
pub use request::{is_present, FontSize, RenderRequest, Theme};

/// Render a request with the default configuration.
///
/// # Example
///
/// ```rust
/// use og_card::{render, RenderRequest};
///
/// let html = render(&RenderRequest::new("Hello"));
/// assert!(html.contains("<div class=\"heading\">Hello</div>"));
/// ```
pub fn render(request: &RenderRequest) -> String {
    render_card(request, &CardConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_pipeline() {
        let request: RenderRequest = toml::from_str(
            r#"
text = "Build a **game** 🎮"
theme = "dark"
md = true
fontSize = "80px"
brand = "Workshops"
images = ["https://assets.hackclub.com/icon-rounded.svg", "https://github.com/orpheus.png"]
caption = "undefined"
"#,
        )
        .unwrap();

        let html = render(&request);

        assert!(html.contains("background: #17171d;"));
        assert!(html.contains("font-size: 80px;"));
        assert!(html.contains(".caption {\n  font-size: 30px;"));
        assert!(html.contains("<span>Hack Club</span> Workshops"));
        assert_eq!(html.matches("<img class=\"img\"").count(), 2);
        assert_eq!(html.matches("<div class=\"plus\">+</div>").count(), 1);
        assert!(html.contains("<strong>game</strong>"));
        assert!(html.contains("alt=\"🎮\""));
        assert!(!html.contains("<div class=\"caption\">"));
    }

    #[test]
    fn test_markdown_versus_plain() {
        let md = render(&RenderRequest::new("**bold**").with_markdown(true));
        let plain = render(&RenderRequest::new("**bold**"));

        assert!(md.contains("<strong>bold</strong>"));
        assert!(!plain.contains("<strong>"));
        assert!(plain.contains("**bold**"));
    }

    #[test]
    fn test_markdown_cannot_inject_html() {
        let html = render(
            &RenderRequest::new("# Hi <script>alert(1)</script>\n\n[x](javascript:alert(1))")
                .with_markdown(true),
        );
        assert!(!html.contains("<script>"));
        assert!(!html.contains("javascript:"));
        assert!(html.contains("<h1>Hi &lt;script&gt;"));
    }

    #[test]
    fn test_sanitize_idempotent_on_rendered_fields() {
        let caption = "Tom & Jerry's <show>";
        let once = sanitize(caption);
        assert_eq!(sanitize(once.as_str()), once);

        // Already-escaped input renders the same as raw input.
        let config = CardConfig {
            emoji: EmojiBackend::Native,
            ..CardConfig::default()
        };
        let raw = render_card(&RenderRequest::new("x").with_caption(caption), &config);
        let escaped = render_card(
            &RenderRequest::new("x").with_caption(once.as_str()),
            &config,
        );
        assert_eq!(raw, escaped);
    }

    #[test]
    fn test_custom_config() {
        let config = CardConfig::from_toml_str(
            r#"
brand_label = "Orpheus"
default_brand = "Club"
emoji = "native"
"#,
        )
        .unwrap();

        let html = render_card(&RenderRequest::new("Hi 🦕").with_brand(" "), &config);
        assert!(html.contains("<span>Orpheus</span> Club"));
        assert!(html.contains("Hi 🦕"));
        assert!(!html.contains("class=\"emoji\""));
    }
}
