//! The structured render request and its field types.

use std::fmt;

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, char, digit1, space0},
    combinator::{eof, opt, recognize},
    sequence::{delimited, pair, terminated},
    IResult,
};
use serde::Deserialize;

/// Font size used when a request does not carry one.
pub const DEFAULT_FONT_SIZE: &str = "96px";

/// Everything needed to render one card.
///
/// Field names follow the query parameters of the image service
/// (`fontSize` is camel-cased), so a request can be deserialized directly
/// from JSON, TOML or a decoded query map.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    /// Main heading content.
    pub text: String,
    #[serde(default)]
    pub theme: Theme,
    /// Treat `text` as markdown.
    #[serde(default)]
    pub md: bool,
    /// CSS font size of the heading, e.g. `"96px"`.
    #[serde(default = "default_font_size")]
    pub font_size: String,
    #[serde(default)]
    pub brand: String,
    /// Image URLs in display order.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub caption: String,
}

fn default_font_size() -> String {
    DEFAULT_FONT_SIZE.to_string()
}

impl RenderRequest {
    /// Create a request with the given heading text and defaults elsewhere.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            theme: Theme::default(),
            md: false,
            font_size: default_font_size(),
            brand: String::new(),
            images: Vec::new(),
            caption: String::new(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_markdown(mut self, md: bool) -> Self {
        self.md = md;
        self
    }

    pub fn with_font_size(mut self, font_size: impl Into<String>) -> Self {
        self.font_size = font_size.into();
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }
}

/// Whether an optional text field carries a value.
///
/// Query strings built by JavaScript clients send a missing value as the
/// literal text `undefined`, so that counts as absent too.
pub fn is_present(value: &str) -> bool {
    !value.is_empty() && value != "undefined"
}

/// Visual theme of the card.
///
/// Only `"dark"` selects the dark theme; every other name is light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Page background colour.
    pub fn background(self) -> &'static str {
        match self {
            Self::Light => "#ffffff",
            Self::Dark => "#17171d",
        }
    }

    /// Colour of the dots in the background grid.
    pub fn grid_dot(self) -> &'static str {
        match self {
            Self::Light => "#dde1e4",
            Self::Dark => "#273444",
        }
    }
}

impl From<String> for Theme {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

/// A parsed CSS font size: a non-negative number followed by a unit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct FontSize {
    value: f64,
    unit: String,
}

impl FontSize {
    /// Parse a font size such as `"40px"`, `"4.5rem"` or `"120%"`.
    ///
    /// Surrounding whitespace is ignored and a bare number is read as
    /// pixels. Anything else, including trailing CSS, yields `None`.
    pub fn parse(input: &str) -> Option<Self> {
        let (_, (number, unit)) = font_size(input).ok()?;
        let value: f64 = number.parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        Some(Self {
            value,
            unit: unit.unwrap_or("px").to_ascii_lowercase(),
        })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// The numeric part multiplied by `factor`, as a pixel length.
    ///
    /// The unit is discarded: `"40px"` and `"40rem"` both scale to `15px`
    /// with a factor of `0.375`.
    pub fn scaled_px(&self, factor: f64) -> String {
        format!("{}px", round3(self.value * factor))
    }
}

impl Default for FontSize {
    /// The size behind [`DEFAULT_FONT_SIZE`].
    fn default() -> Self {
        Self {
            value: 96.0,
            unit: "px".to_string(),
        }
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", round3(self.value), self.unit)
    }
}

impl TryFrom<String> for FontSize {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("not a CSS font size: {value:?}"))
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

fn font_size(input: &str) -> IResult<&str, (&str, Option<&str>)> {
    delimited(
        space0,
        pair(
            alt((
                recognize(pair(digit1, opt(pair(char('.'), digit1)))),
                recognize(pair(char('.'), digit1)),
            )),
            opt(alt((alpha1, tag("%")))),
        ),
        terminated(space0, eof),
    )(input)
}
