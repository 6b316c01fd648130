//! HTML renderer for preview cards.

use crate::config::CardConfig;
use crate::markup::{sanitize, Markup};
use crate::render::emoji::{create_renderer, EmojiRenderer};
use crate::render::markdown::markdown_to_html;
use crate::render::style::stylesheet;
use crate::request::{is_present, FontSize, RenderRequest};

/// Render a request to a complete HTML document.
pub fn render_card(request: &RenderRequest, config: &CardConfig) -> String {
    let mut renderer = CardRenderer::new(request, config);
    renderer.render()
}

struct CardRenderer<'a> {
    request: &'a RenderRequest,
    config: &'a CardConfig,
    emoji: Box<dyn EmojiRenderer>,
    output: Markup,
}

impl<'a> CardRenderer<'a> {
    fn new(request: &'a RenderRequest, config: &'a CardConfig) -> Self {
        Self {
            request,
            config,
            emoji: create_renderer(config.emoji, &config.emoji_base_url),
            output: Markup::default(),
        }
    }

    fn render(&mut self) -> String {
        tracing::debug!(
            theme = ?self.request.theme,
            md = self.request.md,
            images = self.request.images.len(),
            "rendering card"
        );

        let font_size = self.font_size();
        let caption_size = font_size.scaled_px(self.config.caption_scale);

        self.output.push_static(
            "<!DOCTYPE html>\n<html>\n<meta charset=\"utf-8\">\n<title>Generated Image</title>\n",
        );
        self.output.push_static(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        self.output.push_static("<style>\n");
        self.output
            .push(&stylesheet(self.request.theme, &font_size, &caption_size));
        self.output.push_static("</style>\n<body>\n");

        self.render_brand();

        self.output.push_static("<div class=\"container\">\n");
        self.render_gallery();
        self.render_heading();
        self.render_caption();
        self.output.push_static("</div>\n");

        self.output.push_static("</body>\n</html>\n");

        std::mem::take(&mut self.output).into_string()
    }

    fn font_size(&self) -> FontSize {
        match FontSize::parse(&self.request.font_size) {
            Some(size) => size,
            None => {
                tracing::warn!(
                    font_size = %self.request.font_size,
                    fallback = %self.config.default_font_size,
                    "unparseable font size, using default"
                );
                self.config.default_font_size.clone()
            }
        }
    }

    fn render_brand(&mut self) {
        let brand = &self.request.brand;

        self.output.push_static("<div class=\"brand\">\n");
        self.output.push_static("<img class=\"logo\" src=\"");
        self.output.push(&sanitize(&self.config.logo_url));
        self.output.push_static("\">\n");

        if is_present(brand) {
            let shown = if brand.trim().is_empty() {
                &self.config.default_brand
            } else {
                brand
            };
            self.output.push_static("<span>");
            self.output.push(&sanitize(&self.config.brand_label));
            self.output.push_static("</span> ");
            self.output.push(&sanitize(shown));
        } else {
            self.output.push(&sanitize(&self.config.brand_label));
        }

        self.output.push_static("\n</div>\n");
    }

    fn render_gallery(&mut self) {
        let request = self.request;
        let Some((first, rest)) = request.images.split_first() else {
            self.output.push_static("<div class=\"spacer\"></div>\n");
            return;
        };

        self.output.push_static("<div class=\"img-wrapper\">\n");
        self.push_image(first);
        for image in rest {
            self.output.push_static("<div class=\"plus\">+</div>\n");
            self.push_image(image);
        }
        self.output.push_static("</div>\n");
    }

    fn push_image(&mut self, url: &str) {
        self.output.push_static("<img class=\"img\" src=\"");
        self.output.push(&sanitize(url));
        self.output.push_static("\" />\n");
    }

    fn render_heading(&mut self) {
        let text = &self.request.text;
        // Markdown output is already safe; sanitizing it again would escape its tags.
        let html = if self.request.md {
            markdown_to_html(text)
        } else {
            sanitize(text)
        };

        self.output.push_static("<div class=\"heading\">");
        self.output.push(&self.emoji.emojify(&html));
        self.output.push_static("</div>\n");
    }

    fn render_caption(&mut self) {
        let caption = &self.request.caption;
        if !is_present(caption) {
            return;
        }

        self.output.push_static("<div class=\"caption\">");
        self.output.push(&self.emoji.emojify(&sanitize(caption)));
        self.output.push_static("</div>\n");
    }
}
