//! Background music: optional autoplay plus a play/pause toggle.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlAudioElement, HtmlElement};

use super::{by_id, on_event};
use crate::config::{Configuration, Music};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    Play,
    Pause,
}

impl ToggleAction {
    pub fn for_paused(paused: bool) -> Self {
        if paused { ToggleAction::Play } else { ToggleAction::Pause }
    }

    /// Label describing what the *next* click does after this action ran.
    pub fn label(self, music: &Music) -> &str {
        match self {
            ToggleAction::Play => &music.stop_text,
            ToggleAction::Pause => &music.start_text,
        }
    }
}

pub fn setup(doc: &Document, config: &Rc<Configuration>) -> Result<(), JsValue> {
    let music = &config.music;
    if !music.enabled {
        if let Some(controls) = by_id(doc, "musicControls").and_then(|e| e.dyn_into::<HtmlElement>().ok()) {
            controls.style().set_property("display", "none").ok();
        }
        return Ok(());
    }
    let Some(player) = by_id(doc, "bgMusic").and_then(|e| e.dyn_into::<HtmlAudioElement>().ok()) else {
        log::warn!("music enabled but #bgMusic is missing");
        return Ok(());
    };
    let toggle = by_id(doc, "musicToggle");

    match by_id(doc, "musicSource") {
        Some(source) => {
            source.set_attribute("src", &music.music_url)?;
        }
        None => player.set_src(&music.music_url),
    }
    player.set_volume(music.volume);
    player.load();

    if music.autoplay {
        play(&player, toggle.clone(), Rc::clone(config), "Autoplay prevented by browser");
    } else {
        set_label(toggle.as_ref(), &music.start_text);
    }

    if let Some(button) = &toggle {
        let player = player.clone();
        let label = toggle.clone();
        let config = Rc::clone(config);
        on_event(button.as_ref(), "click", move |_evt| {
            let action = ToggleAction::for_paused(player.paused());
            match action {
                ToggleAction::Play => play(&player, label.clone(), Rc::clone(&config), "Playback failed"),
                ToggleAction::Pause => {
                    player.pause().ok();
                    set_label(label.as_ref(), action.label(&config.music));
                }
            }
        })?;
    }
    Ok(())
}

/// Start playback and show the stop label; a rejected `play()` promise puts
/// the start label back instead of surfacing an error.
fn play(player: &HtmlAudioElement, toggle: Option<Element>, config: Rc<Configuration>, context: &'static str) {
    set_label(toggle.as_ref(), ToggleAction::Play.label(&config.music));
    let promise = match player.play() {
        Ok(p) => p,
        Err(err) => {
            log::info!("{context}: {err:?}");
            set_label(toggle.as_ref(), &config.music.start_text);
            return;
        }
    };
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = JsFuture::from(promise).await {
            log::info!("{context}: {err:?}");
            set_label(toggle.as_ref(), &config.music.start_text);
        }
    });
}

fn set_label(toggle: Option<&Element>, text: &str) {
    if let Some(el) = toggle {
        el.set_text_content(Some(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_follows_paused_flag() {
        assert_eq!(ToggleAction::for_paused(true), ToggleAction::Play);
        assert_eq!(ToggleAction::for_paused(false), ToggleAction::Pause);
    }

    #[test]
    fn test_label_reflects_resulting_state() {
        let music = Music::default();
        // now playing -> offer to stop
        assert_eq!(ToggleAction::Play.label(&music), music.stop_text);
        // now paused -> offer to start
        assert_eq!(ToggleAction::Pause.label(&music), music.start_text);
    }
}
