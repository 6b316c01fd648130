//! Rendering to HTML.

mod card;
pub mod emoji;
mod markdown;
mod style;

pub use card::render_card;
pub use emoji::{create_renderer, EmojiBackend, EmojiRenderer};
pub use markdown::markdown_to_html;
