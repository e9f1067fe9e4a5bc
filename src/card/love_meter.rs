//! "How much do you love me?" slider.
//!
//! Past 100 the slider grows beyond its track and a tiered message appears.
//! The slider's nominal ceiling is 10000, so the overflow fraction is
//! `(value - 100) / 9900`.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlInputElement, Window};

use super::{by_id, on_event, set_hidden};
use crate::config::{Configuration, LoveMessages};

pub const NOMINAL_MAX: i64 = 100;
pub const CEILING: i64 = 10_000;
pub const HIGH_ABOVE: i64 = 1_000;
pub const EXTREME_FROM: i64 = 5_000;
/// Share of the viewport width a fully maxed slider may grow by.
pub const OVERFLOW_WIDTH_SHARE: f64 = 0.8;
pub const SUPER_LOVE_CLASS: &str = "super-love";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoveTier {
    Normal,
    High,
    Extreme,
}

impl LoveTier {
    pub fn message(self, messages: &LoveMessages) -> &str {
        match self {
            LoveTier::Normal => &messages.normal,
            LoveTier::High => &messages.high,
            LoveTier::Extreme => &messages.extreme,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoveReading {
    pub value: i64,
    /// `None` while the value is within the nominal scale.
    pub tier: Option<LoveTier>,
}

impl LoveReading {
    pub fn for_value(value: i64) -> Self {
        let tier = if value <= NOMINAL_MAX {
            None
        } else if value >= EXTREME_FROM {
            Some(LoveTier::Extreme)
        } else if value > HIGH_ABOVE {
            Some(LoveTier::High)
        } else {
            Some(LoveTier::Normal)
        };
        Self { value, tier }
    }

    pub fn is_overflowing(&self) -> bool {
        self.tier.is_some()
    }

    pub fn overflow_fraction(&self) -> f64 {
        if !self.is_overflowing() {
            return 0.0;
        }
        (self.value - NOMINAL_MAX) as f64 / (CEILING - NOMINAL_MAX) as f64
    }

    pub fn extra_width_px(&self, viewport_width: f64) -> f64 {
        self.overflow_fraction() * viewport_width * OVERFLOW_WIDTH_SHARE
    }

    pub fn width_css(&self, viewport_width: f64) -> String {
        if self.is_overflowing() {
            format!("calc(100% + {}px)", self.extra_width_px(viewport_width))
        } else {
            "100%".to_string()
        }
    }
}

struct MeterElements {
    input: HtmlInputElement,
    value_label: Element,
    extra: Element,
}

impl MeterElements {
    fn find(doc: &Document) -> Option<Self> {
        Some(Self {
            input: by_id(doc, "loveMeter")?.dyn_into().ok()?,
            value_label: by_id(doc, "loveValue")?,
            extra: by_id(doc, "extraLove")?,
        })
    }

    fn show(&self, reading: &LoveReading, messages: &LoveMessages, viewport_width: f64) {
        self.value_label.set_text_content(Some(&reading.value.to_string()));
        let style = self.input.style();
        style.set_property("width", &reading.width_css(viewport_width)).ok();
        let classes = self.extra.class_list();
        match reading.tier {
            Some(tier) => {
                style.set_property("transition", "width 0.3s").ok();
                set_hidden(&self.extra, false);
                if tier == LoveTier::Extreme {
                    classes.add_1(SUPER_LOVE_CLASS).ok();
                } else {
                    classes.remove_1(SUPER_LOVE_CLASS).ok();
                }
                self.extra.set_text_content(Some(tier.message(messages)));
            }
            None => {
                set_hidden(&self.extra, true);
                classes.remove_1(SUPER_LOVE_CLASS).ok();
            }
        }
    }

    fn reset(&self, messages: &LoveMessages, viewport_width: f64) {
        self.input.set_value(&NOMINAL_MAX.to_string());
        self.show(&LoveReading::for_value(NOMINAL_MAX), messages, viewport_width);
    }
}

fn viewport_width(win: &Window) -> f64 {
    win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

/// Wire the slider if the page has one. Starts at 100 and resets to 100 on `load`.
pub fn wire(win: &Window, doc: &Document, config: &Rc<Configuration>) -> Result<(), JsValue> {
    let Some(meter) = MeterElements::find(doc) else {
        return Ok(());
    };
    let meter = Rc::new(meter);
    meter.reset(&config.love_messages, viewport_width(win));

    {
        let m = Rc::clone(&meter);
        let config = Rc::clone(config);
        let w = win.clone();
        on_event(meter.input.as_ref(), "input", move |_evt| {
            // parseInt semantics: ignore anything that is not a number
            let Ok(raw) = m.input.value().trim().parse::<f64>() else {
                return;
            };
            let reading = LoveReading::for_value(raw.trunc() as i64);
            m.show(&reading, &config.love_messages, viewport_width(&w));
        })?;
    }
    {
        let m = Rc::clone(&meter);
        let config = Rc::clone(config);
        let w = win.clone();
        on_event(win.as_ref(), "load", move |_evt| {
            m.reset(&config.love_messages, viewport_width(&w));
        })?;
    }
    Ok(())
}
