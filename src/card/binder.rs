//! Copy configuration text into the page and export colors/animation
//! parameters as CSS custom properties.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::set_text;
use crate::config::Configuration;

pub const TITLE_SUFFIX: &str = ", Will you be my Valentine..";
const YES_FALLBACK: &str = "Yes!";
const NO_FALLBACK: &str = "No";

pub fn title_line(name: &str) -> String {
    format!("{name}{TITLE_SUFFIX}")
}

/// `(element id, text)` pairs written at startup.
pub fn text_bindings(config: &Configuration) -> Vec<(&'static str, String)> {
    let first = &config.questions.first;
    let or = |s: &str, fallback: &str| if s.is_empty() { fallback.to_string() } else { s.to_string() };
    let mut out = vec![
        ("valentineTitle", title_line(&config.valentine_name)),
        ("question1Text", first.text.clone()),
        ("yesBtn1", or(&first.yes_btn, YES_FALLBACK)),
        ("noBtn1", or(&first.no_btn, NO_FALLBACK)),
    ];
    if let Some(second) = &config.questions.second {
        out.push(("question2Text", second.text.clone()));
        out.push(("startText", second.start_text.clone()));
    }
    out
}

/// Custom properties set on `<html>` so the stylesheet sees normalized values.
pub fn style_properties(config: &Configuration) -> Vec<(&'static str, String)> {
    let c = &config.colors;
    let a = &config.animations;
    vec![
        ("--background-start", c.background_start.clone()),
        ("--background-end", c.background_end.clone()),
        ("--button-background", c.button_background.clone()),
        ("--button-hover", c.button_hover.clone()),
        ("--text-color", c.text_color.clone()),
        ("--float-duration", a.float_duration.clone()),
        ("--float-distance", a.float_distance.clone()),
        ("--bounce-speed", a.bounce_speed.clone()),
        ("--heart-explosion-size", a.heart_explosion_size.to_string()),
    ]
}

pub fn bind(doc: &Document, config: &Configuration) {
    if !config.page_title.is_empty() {
        doc.set_title(&config.page_title);
    }
    let mut missing = 0;
    for (id, text) in text_bindings(config) {
        if !set_text(doc, id, &text) {
            missing += 1;
        }
    }
    if missing > 0 {
        log::debug!("{missing} text placeholder(s) not on this page");
    }
    if let Some(root) = doc.document_element().and_then(|e| e.dyn_into::<HtmlElement>().ok()) {
        let style = root.style();
        for (name, value) in style_properties(config) {
            style.set_property(name, &value).ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MeterQuestion;

    fn lookup<'a>(pairs: &'a [(&'static str, String)], id: &str) -> Option<&'a str> {
        pairs.iter().find(|(k, _)| *k == id).map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_title_uses_name() {
        assert_eq!(title_line("Sam"), "Sam, Will you be my Valentine..");
    }

    #[test]
    fn test_empty_button_labels_fall_back() {
        let mut cfg = Configuration::default();
        cfg.questions.first.yes_btn.clear();
        cfg.questions.first.no_btn.clear();
        let pairs = text_bindings(&cfg);
        assert_eq!(lookup(&pairs, "yesBtn1"), Some("Yes!"));
        assert_eq!(lookup(&pairs, "noBtn1"), Some("No"));
    }

    #[test]
    fn test_second_question_only_when_configured() {
        let mut cfg = Configuration::default();
        assert_eq!(lookup(&text_bindings(&cfg), "question2Text"), None);
        cfg.questions.second = Some(MeterQuestion { text: "How much?".into(), start_text: "Lots".into() });
        let pairs = text_bindings(&cfg);
        assert_eq!(lookup(&pairs, "question2Text"), Some("How much?"));
        assert_eq!(lookup(&pairs, "startText"), Some("Lots"));
    }

    #[test]
    fn test_style_properties_carry_normalized_values() {
        let cfg = Configuration::default();
        let props = style_properties(&cfg);
        assert_eq!(lookup(&props, "--text-color"), Some("#ff4757"));
        assert_eq!(lookup(&props, "--heart-explosion-size"), Some("1.5"));
    }
}
