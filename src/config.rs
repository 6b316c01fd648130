//! Renderer configuration.

use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, Result};
use crate::render::EmojiBackend;
use crate::request::FontSize;

pub const DEFAULT_BRAND_LABEL: &str = "Hack Club";
pub const DEFAULT_BRAND: &str = "Workshops";
pub const DEFAULT_LOGO_URL: &str = "https://hackclub.com/icon/icon-masked.png";
pub const DEFAULT_EMOJI_BASE_URL: &str =
    "https://cdn.jsdelivr.net/gh/twitter/twemoji@14.0.2/assets/svg/";

/// Caption size relative to the heading font size.
pub const DEFAULT_CAPTION_SCALE: f64 = 0.375;

/// Configuration for card rendering.
///
/// Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```toml
/// brand_label = "Hack Club"
/// emoji = "native"
/// caption_scale = 0.4
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CardConfig {
    /// Organisation name shown in the brand bar.
    pub brand_label: String,
    /// Brand shown when a request passes a blank brand.
    pub default_brand: String,
    pub logo_url: String,
    pub emoji: EmojiBackend,
    /// Folder of Twemoji SVGs, with a trailing slash.
    pub emoji_base_url: String,
    pub caption_scale: f64,
    /// Used when a request's font size cannot be parsed.
    pub default_font_size: FontSize,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            brand_label: DEFAULT_BRAND_LABEL.to_string(),
            default_brand: DEFAULT_BRAND.to_string(),
            logo_url: DEFAULT_LOGO_URL.to_string(),
            emoji: EmojiBackend::default(),
            emoji_base_url: DEFAULT_EMOJI_BASE_URL.to_string(),
            caption_scale: DEFAULT_CAPTION_SCALE,
            default_font_size: FontSize::default(),
        }
    }
}

impl CardConfig {
    /// Parse and validate a TOML configuration.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(input).map_err(|e| ConfigError::Toml(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let input = std::fs::read_to_string(path)?;
        Self::from_toml_str(&input)
    }

    /// Check values that deserialize fine but cannot render.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.brand_label.trim().is_empty() {
            return Err(invalid("brand_label", "must not be blank"));
        }
        if self.default_brand.trim().is_empty() {
            return Err(invalid("default_brand", "must not be blank"));
        }
        if !self.caption_scale.is_finite() || self.caption_scale <= 0.0 {
            return Err(invalid(
                "caption_scale",
                format!("must be a positive number, got {}", self.caption_scale),
            ));
        }
        if self.emoji == EmojiBackend::Twemoji && self.emoji_base_url.is_empty() {
            return Err(invalid("emoji_base_url", "required for the twemoji backend"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, message: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(CardConfig::from_toml_str("").unwrap(), CardConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = CardConfig::from_toml_str(
            r#"
brand_label = "Orpheus"
emoji = "native"
caption_scale = 0.5
default_font_size = "64px"
"#,
        )
        .unwrap();

        assert_eq!(config.brand_label, "Orpheus");
        assert_eq!(config.emoji, EmojiBackend::Native);
        assert_eq!(config.caption_scale, 0.5);
        assert_eq!(config.default_font_size.to_string(), "64px");
        assert_eq!(config.default_brand, DEFAULT_BRAND);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = CardConfig::from_toml_str("colour = \"red\"").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Toml(_))));
    }

    #[test]
    fn test_bad_font_size_rejected() {
        let err = CardConfig::from_toml_str(r#"default_font_size = "huge""#).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Toml(_))));
    }

    #[test]
    fn test_invalid_values() {
        let err = CardConfig::from_toml_str("caption_scale = -1.0").unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::Invalid { field: "caption_scale", .. })
        ));

        let err = CardConfig::from_toml_str(r#"brand_label = "  ""#).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::Invalid { field: "brand_label", .. })
        ));

        let err = CardConfig::from_toml_str(r#"emoji_base_url = """#).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::Invalid { field: "emoji_base_url", .. })
        ));

        assert!(CardConfig::from_toml_str("emoji = \"native\"\nemoji_base_url = \"\"").is_ok());
    }

    #[test]
    fn test_missing_file() {
        let err = CardConfig::from_path("/nonexistent/og-card.toml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
