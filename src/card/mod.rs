//! The proposal page.
//!
//! `start` normalizes the configuration, fills the page, scatters the floating
//! decorations, sets up music and the love meter, then wires the two proposal
//! buttons and the confirmation dialog. Event handlers share one `CardState`
//! kept in a thread-local cell; each handler borrows it for the duration of a
//! single event.
//!
//! Every element is optional. A page without a love meter, music controls or
//! even a dialog still gets whatever parts it does have.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, window};

pub mod audio;
pub mod binder;
pub mod celebrate;
pub mod dialog;
pub mod evasive;
pub mod floating;
pub mod love_meter;

use crate::config::Configuration;
use crate::normalize::{normalize, report};
use crate::rng::CardRng;
use dialog::{ConfirmDialog, DomDialogView};
use evasive::{EvasiveButton, Size};

pub const HIDDEN_CLASS: &str = "hidden";

/// Runtime page state shared by the event handlers.
struct CardState {
    config: Rc<Configuration>,
    dialog: ConfirmDialog<DomDialogView>,
    evasive: EvasiveButton,
    rng: CardRng,
}

thread_local! {
    static CARD_STATE: RefCell<Option<CardState>> = const { RefCell::new(None) };
}

fn with_card(f: impl FnOnce(&mut CardState)) {
    CARD_STATE.with(|cell| {
        if let Some(state) = cell.borrow_mut().as_mut() {
            f(state);
        }
    });
}

/// Run now if the DOM is parsed, otherwise once `DOMContentLoaded` fires.
pub fn start(config: Configuration) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if is_parsed(&doc.ready_state()) {
        return mount(config);
    }
    let mut pending = Some(config);
    on_event(doc.as_ref(), "DOMContentLoaded", move |_evt| {
        if let Some(config) = pending.take() {
            if let Err(err) = mount(config) {
                log::error!("card setup failed: {err:?}");
            }
        }
    })
}

/// `document.readyState` is `"loading"` until the parser finishes.
fn is_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}

fn mount(mut config: Configuration) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    report(&normalize(&mut config));
    let config = Rc::new(config);

    binder::bind(&doc, &config);

    let mut rng = CardRng::from_entropy();
    let scattered = floating::spawn(&doc, &floating::ambient_plan(&config.floating_emojis, &mut rng))?;
    log::debug!("{scattered} floating decorations");

    audio::setup(&doc, &config)?;
    love_meter::wire(&win, &doc, &config)?;

    CARD_STATE.with(|cell| {
        cell.replace(Some(CardState {
            config: Rc::clone(&config),
            dialog: ConfirmDialog::new(DomDialogView::from_document(&doc)),
            evasive: EvasiveButton::new(),
            rng,
        }))
    });

    wire_dialog(&doc)?;
    wire_proposal(&doc)?;
    log::info!("card ready for {}", config.valentine_name);
    Ok(())
}

fn wire_dialog(doc: &Document) -> Result<(), JsValue> {
    if let Some(yes) = by_id(doc, "confirmYes") {
        on_event(yes.as_ref(), "click", |_evt| with_card(|st| st.dialog.accept()))?;
    }
    if let Some(no) = by_id(doc, "confirmNo") {
        on_event(no.as_ref(), "click", |_evt| with_card(|st| st.dialog.press_secondary()))?;
    }
    Ok(())
}

/// "Yes" celebrates; "No" runs away and asks for confirmation.
fn wire_proposal(doc: &Document) -> Result<(), JsValue> {
    if let Some(yes) = by_id(doc, "yesBtn1") {
        on_event(yes.as_ref(), "click", |_evt| {
            let Some(doc) = window().and_then(|w| w.document()) else {
                return;
            };
            with_card(|st| {
                if let Err(err) = celebrate::celebrate(&doc, &st.config, &mut st.rng) {
                    log::error!("celebration failed: {err:?}");
                }
            });
        })?;
    }

    let Some(no) = by_id(doc, "noBtn1").and_then(|e| e.dyn_into::<HtmlElement>().ok()) else {
        return Ok(());
    };
    {
        let button = no.clone();
        on_event(no.as_ref(), "mouseenter", move |_evt| {
            let Some(win) = window() else {
                return;
            };
            let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let viewport = Size {
                width: dim(win.inner_width()),
                height: dim(win.inner_height()),
            };
            let size = Size {
                width: f64::from(button.offset_width()),
                height: f64::from(button.offset_height()),
            };
            with_card(|st| {
                if let Some(spot) = st.evasive.pointer_enter(viewport, size, &mut st.rng) {
                    let style = button.style();
                    style.set_property("position", "fixed").ok();
                    style.set_property("left", &format!("{:.1}px", spot.left)).ok();
                    style.set_property("top", &format!("{:.1}px", spot.top)).ok();
                }
            });
        })?;
    }
    on_event(no.as_ref(), "click", |evt: Event| {
        evt.stop_propagation();
        with_card(|st| st.evasive.activate(&mut st.dialog));
    })
}

// --- DOM helpers -------------------------------------------------------------

pub(crate) fn by_id(doc: &Document, id: &str) -> Option<Element> {
    doc.get_element_by_id(id)
}

/// Returns false when the element is not on the page.
pub(crate) fn set_text(doc: &Document, id: &str, text: &str) -> bool {
    match by_id(doc, id) {
        Some(el) => {
            el.set_text_content(Some(text));
            true
        }
        None => false,
    }
}

pub(crate) fn set_hidden(el: &Element, hidden: bool) {
    let classes = el.class_list();
    if hidden {
        classes.add_1(HIDDEN_CLASS).ok();
    } else {
        classes.remove_1(HIDDEN_CLASS).ok();
    }
}

/// Attach a listener for the lifetime of the page.
pub(crate) fn on_event(
    target: &EventTarget,
    name: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_loading_defers_mount() {
        assert!(!is_parsed("loading"));
        assert!(is_parsed("interactive"));
        assert!(is_parsed("complete"));
    }
}
