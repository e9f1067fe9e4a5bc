//! Valentine Card core crate.
//!
//! A single proposal page driven from wasm: the host page assigns
//! `window.VALENTINE_CONFIG`, loads the module and calls `start_card()`.
//! Configuration is normalized once, then handed to the page components as a
//! shared read-only value.

use wasm_bindgen::prelude::*;

pub mod card;
pub mod config;
pub mod normalize;
pub mod rng;

pub use config::Configuration;
pub use normalize::{ConfigWarning, normalize};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Err only when a logger is already installed
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Info);
}

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

/// Build the page from `window.VALENTINE_CONFIG` (stock card when absent).
#[wasm_bindgen]
pub fn start_card() -> Result<(), JsValue> {
    let win = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    card::start(Configuration::from_window(&win))
}

/// Build the page from an explicitly passed settings object.
#[wasm_bindgen]
pub fn start_card_with(config: JsValue) -> Result<(), JsValue> {
    let config = Configuration::from_js(&config).unwrap_or_else(|err| {
        log::warn!("settings object unusable ({err:?}); using the default card");
        Configuration::default()
    });
    card::start(config)
}

/// Normalize a JSON settings document and return it re-serialized.
/// Warnings go to the console, as they do at startup.
#[wasm_bindgen]
pub fn normalize_config_json(json: &str) -> Result<String, JsValue> {
    let (normalized, warnings) = normalize_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    normalize::report(&warnings);
    Ok(normalized)
}

/// Host-side half of [`normalize_config_json`].
pub fn normalize_json(json: &str) -> Result<(String, Vec<ConfigWarning>), serde_json::Error> {
    let mut config = Configuration::from_json_str(json)?;
    let warnings = normalize(&mut config);
    Ok((config.to_json_string(), warnings))
}
