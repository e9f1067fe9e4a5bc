//! "Yes" was clicked: swap the question for the celebration panel and burst hearts.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use super::floating::{burst_plan, spawn};
use super::{by_id, set_hidden, set_text};
use crate::config::Configuration;
use crate::rng::RandomSource;

pub const BURST_SIZE: usize = 50;
pub const QUESTION_SELECTOR: &str = ".question-section";

/// Safe to call again; it re-fills the panel and bursts once more.
pub fn celebrate(doc: &Document, config: &Configuration, rng: &mut impl RandomSource) -> Result<(), JsValue> {
    let sections = doc.query_selector_all(QUESTION_SELECTOR)?;
    for i in 0..sections.length() {
        if let Some(el) = sections.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            set_hidden(&el, true);
        }
    }
    if let Some(panel) = by_id(doc, "celebration") {
        set_hidden(&panel, false);
    }

    let c = &config.celebration;
    set_text(doc, "celebrationTitle", &c.title);
    set_text(doc, "celebrationMessage", &c.message);
    set_text(doc, "celebrationEmojis", &c.emojis);

    let added = spawn(doc, &burst_plan(&config.floating_emojis.hearts, BURST_SIZE, rng))?;
    log::info!("celebrating {} ({added} hearts)", config.valentine_name);
    Ok(())
}
