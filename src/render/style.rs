//! The card stylesheet.
//!
//! Everything except the theme colours, the heading font size and the
//! caption size is fixed.

use crate::markup::Markup;
use crate::request::{FontSize, Theme};

const FONT_FACES: &str = r#"@font-face {
  font-family: 'Phantom Sans';
  src: url('https://hackclub.com/fonts/Phantom_Sans_0.6/Regular.woff')
      format('woff'),
    url('https://hackclub.com/fonts/Phantom_Sans_0.6/Regular.woff2')
      format('woff2');
  font-weight: normal;
  font-style: normal;
}
@font-face {
  font-family: 'Phantom Sans';
  src: url('https://hackclub.com/fonts/Phantom_Sans_0.6/Bold.woff')
      format('woff'),
    url('https://hackclub.com/fonts/Phantom_Sans_0.6/Bold.woff2')
      format('woff2');
  font-weight: bold;
  font-style: normal;
}
"#;

const LAYOUT_RULES: &str = r#"
code {
  font-family: Menlo, Monaco, Lucida Console, Liberation Mono, DejaVu Sans Mono, Bitstream Vera Sans Mono, Courier New, monospace, sans-serif;
  font-size: .875em;
  white-space: pre-wrap;
}

code:before, code:after {
  content: '`';
}

.img-wrapper {
  margin: 50px 0 50px;
  padding-top: 75px;
  display: flex;
  align-items: center;
  align-content: center;
  justify-content: center;
}

.img {
  width: 200px;
  height: 200px;
}
.img[src*="//dl.airtable.com/"],
.img[src*="//github.com/"] {
  border-radius: 75px;
  width: 150px;
  height: 150px;
}

.plus {
  color: #7a8c97;
  font-size: 75px;
  padding: 0 25px;
}

.container {
  margin: 100px 150px 150px;
}

.spacer {
  margin: 50px 0;
  width: 100%;
}

.brand {
  font-size: 105px;
  padding: 50px;
  text-align: center;
  font-weight: bold;
  position: absolute;
  top: 0;
  width: 100%;
  color: #ec3750;
  display: flex;
  justify-content: center;
  align-items: center;
}
.brand span {
  color: #7a8c97;
  font-weight: normal;
  margin-right: 0.2em;
}
.logo {
  width: 125px;
  margin: 0 50px;
}

.heading {
  background-image: linear-gradient(to bottom right, #ff8c37, #ec3750 66%);
  background-repeat: no-repeat;
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
  margin: 0 50px;
  padding-bottom: 25px;
  line-height: 0.875;
  font-weight: bold;
}

.heading * {
  margin: 0;
}
"#;

const EMOJI_RULES: &str = r#"
.emoji {
  height: 1em;
  width: 1em;
  margin: 0 .05em 0 .1em;
  vertical-align: -0.1em;
}
"#;

/// Build the stylesheet for one card.
pub(crate) fn stylesheet(theme: Theme, font_size: &FontSize, caption_size: &str) -> Markup {
    let background = theme.background();
    let radial = theme.grid_dot();

    let mut css = Markup::default();
    css.push_static(FONT_FACES);
    // Colours come from the closed theme palette and sizes from a parsed
    // FontSize, so none of these can carry markup.
    css.push(&Markup::trusted(format!(
        r#"
body {{
  background: {background};
  background-image: radial-gradient(circle at 25px 25px, {radial} 3%, transparent 0%),
    radial-gradient(circle at 75px 75px, {radial} 3%, transparent 0%);
  background-size: 100px 100px;
  height: 100vh;
  display: flex;
  text-align: center;
  align-items: center;
  justify-content: center;
  font-family: 'Phantom Sans', sans-serif;
  font-size: {font_size};
  font-style: normal;
}}
"#
    )));
    css.push_static(LAYOUT_RULES);
    css.push(&Markup::trusted(format!(
        r#"
.caption {{
  font-size: {caption_size};
  text-transform: uppercase;
  color: #7a8c97;
  letter-spacing: 0;
}}
"#
    )));
    css.push_static(EMOJI_RULES);
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    fn css(theme: Theme, size: &str) -> String {
        let size = FontSize::parse(size).unwrap();
        stylesheet(theme, &size, &size.scaled_px(0.375)).into_string()
    }

    #[test]
    fn test_light_theme() {
        let css = css(Theme::Light, "96px");
        assert!(css.contains("background: #ffffff;"));
        assert!(css.contains("#dde1e4 3%"));
        assert!(!css.contains("#17171d"));
    }

    #[test]
    fn test_dark_theme() {
        let css = css(Theme::Dark, "96px");
        assert!(css.contains("background: #17171d;"));
        assert!(css.contains("#273444 3%"));
        assert!(!css.contains("#ffffff"));
    }

    #[test]
    fn test_sizes() {
        let css = css(Theme::Light, "40px");
        assert!(css.contains("font-size: 40px;"));
        assert!(css.contains(".caption {\n  font-size: 15px;"));
    }

    #[test]
    fn test_font_faces() {
        let css = css(Theme::Light, "96px");
        assert_eq!(css.matches("@font-face").count(), 2);
        assert!(css.contains("Regular.woff2"));
        assert!(css.contains("Bold.woff2"));
    }
}
