//! WebAssembly bindings for JavaScript/TypeScript.

#![cfg(feature = "wasm")]

use crate::config::CardConfig;
use crate::error::Error;
use crate::render::render_card;
use crate::request::RenderRequest;
use wasm_bindgen::prelude::*;

/// Render a card from a JSON request.
///
/// # Arguments
///
/// * `request_json` - The request as JSON, e.g. `{"text": "Hi", "theme": "dark"}`.
/// * `config_toml` - Optional renderer configuration as TOML.
///
/// # Returns
///
/// The HTML document.
#[wasm_bindgen(js_name = renderCard)]
pub fn render_card_js(request_json: &str, config_toml: Option<String>) -> Result<String, JsError> {
    let request: RenderRequest = serde_json::from_str(request_json)
        .map_err(|e| JsError::new(&Error::Request(e.to_string()).to_string()))?;

    let config = match config_toml {
        Some(toml) => CardConfig::from_toml_str(&toml).map_err(|e| JsError::new(&e.to_string()))?,
        None => CardConfig::default(),
    };

    Ok(render_card(&request, &config))
}

/// Get the library version.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// TypeScript type definitions for documentation
/// ```typescript
/// // og_card.d.ts
///
/// interface RenderRequest {
///     text: string;
///     theme?: string;
///     md?: boolean;
///     fontSize?: string;
///     brand?: string;
///     images?: string[];
///     caption?: string;
/// }
///
/// /**
///  * Render a preview card page.
///  * @param requestJson - JSON-encoded RenderRequest
///  * @param configToml - Optional TOML configuration
///  * @returns The HTML document
///  */
/// export function renderCard(requestJson: string, configToml?: string): string;
///
/// /**
///  * Get the library version.
///  * @returns Version string
///  */
/// export function getVersion(): string;
/// ```
const _: () = ();
