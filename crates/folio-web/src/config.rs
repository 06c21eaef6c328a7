//! Locating the page configuration
//!
//! Sources in priority order: the value passed to `boot_with_config`, then a
//! `<script type="application/json" id="page-config">` block, then defaults.

use folio_core::{ConfigError, PageConfig};
use wasm_bindgen::JsValue;
use web_sys::Document;

/// Id of the inline JSON config block
pub const CONFIG_ELEMENT_ID: &str = "page-config";

/// Config embedded in the page, if any
///
/// # Errors
///
/// Returns the parse or validation error of a present but bad block
pub fn config_from_document(document: &Document) -> Result<Option<PageConfig>, ConfigError> {
    let Some(text) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return Ok(None);
    };
    if text.trim().is_empty() {
        return Ok(None);
    }
    PageConfig::from_json(&text).map(Some)
}

/// Config handed over from JavaScript
///
/// # Errors
///
/// Returns `ConfigError::Parse` when the value does not deserialize, or the
/// validation error
pub fn config_from_js(value: JsValue) -> Result<PageConfig, ConfigError> {
    let config: PageConfig =
        serde_wasm_bindgen::from_value(value).map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Picks the first usable config source
///
/// A broken source falls back to defaults; its error is returned alongside
/// so it can be logged once logging is up.
pub fn resolve(document: Option<&Document>, js: Option<JsValue>) -> (PageConfig, Option<ConfigError>) {
    let loaded = match js.filter(|value| !value.is_undefined() && !value.is_null()) {
        Some(value) => config_from_js(value).map(Some),
        None => document.map_or(Ok(None), config_from_document),
    };

    match loaded {
        Ok(config) => (config.unwrap_or_default(), None),
        Err(e) => (PageConfig::default(), Some(e)),
    }
}
