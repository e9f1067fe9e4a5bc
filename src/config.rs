//! Typed model of the page settings record (`window.VALENTINE_CONFIG`).
//!
//! Every struct is `#[serde(default)]` so a partial object from the host page
//! fills the gaps from the stock card below. The one exception is
//! `valentine_name`: it defaults to empty so the normalizer can flag it.

use serde::{Deserialize, Deserializer, Serialize};
use wasm_bindgen::prelude::*;

/// Global the host page assigns before loading the module.
pub const GLOBAL_CONFIG_KEY: &str = "VALENTINE_CONFIG";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Configuration {
    #[serde(default)]
    pub valentine_name: String,
    pub page_title: String,
    pub colors: Colors,
    pub animations: Animations,
    pub questions: Questions,
    pub floating_emojis: FloatingEmojis,
    pub celebration: Celebration,
    pub love_messages: LoveMessages,
    pub music: Music,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Colors {
    pub background_start: String,
    pub background_end: String,
    pub button_background: String,
    pub button_hover: String,
    pub text_color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Animations {
    /// CSS time string, e.g. `"15s"`. Bare numbers are accepted and read as seconds.
    #[serde(deserialize_with = "seconds_string")]
    pub float_duration: String,
    pub float_distance: String,
    pub bounce_speed: String,
    pub heart_explosion_size: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Questions {
    pub first: ProposalQuestion,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second: Option<MeterQuestion>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProposalQuestion {
    pub text: String,
    pub yes_btn: String,
    pub no_btn: String,
}

/// Labels for the optional love-meter question.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MeterQuestion {
    pub text: String,
    pub start_text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatingEmojis {
    pub hearts: Vec<String>,
    pub bears: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Celebration {
    pub title: String,
    pub message: String,
    pub emojis: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoveMessages {
    pub normal: String,
    pub high: String,
    pub extreme: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Music {
    pub enabled: bool,
    pub autoplay: bool,
    pub music_url: String,
    pub start_text: String,
    pub stop_text: String,
    pub volume: f64,
}

// --- Stock card --------------------------------------------------------------

impl Default for Configuration {
    fn default() -> Self {
        Self {
            valentine_name: "My Love".to_string(),
            page_title: "Will You Be My Valentine? 💝".to_string(),
            colors: Colors::default(),
            animations: Animations::default(),
            questions: Questions::default(),
            floating_emojis: FloatingEmojis::default(),
            celebration: Celebration::default(),
            love_messages: LoveMessages::default(),
            music: Music::default(),
        }
    }
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            background_start: "#ffafbd".to_string(),
            background_end: "#ffc3a0".to_string(),
            button_background: "#ff6b6b".to_string(),
            button_hover: "#ff8787".to_string(),
            text_color: "#ff4757".to_string(),
        }
    }
}

impl Default for Animations {
    fn default() -> Self {
        Self {
            float_duration: "15s".to_string(),
            float_distance: "50px".to_string(),
            bounce_speed: "0.5s".to_string(),
            heart_explosion_size: 1.5,
        }
    }
}

impl Default for Questions {
    fn default() -> Self {
        Self {
            first: ProposalQuestion::default(),
            second: None,
        }
    }
}

impl Default for ProposalQuestion {
    fn default() -> Self {
        Self {
            text: "Do you like me?".to_string(),
            yes_btn: "Yes!".to_string(),
            no_btn: "No".to_string(),
        }
    }
}

impl Default for FloatingEmojis {
    fn default() -> Self {
        let owned = |xs: &[&str]| -> Vec<String> { xs.iter().map(|s| s.to_string()).collect() };
        Self {
            hearts: owned(&["❤️", "💖", "💝", "💗", "💓"]),
            bears: owned(&["🧸", "🐻"]),
        }
    }
}

impl Default for Celebration {
    fn default() -> Self {
        Self {
            title: "Yay! I'm the luckiest person in the world! 🎉💝💖💝💓".to_string(),
            message: "Now come get your gift, a big warm hug and a huge kiss!".to_string(),
            emojis: "🎁💖🤗💝💋❤️💕".to_string(),
        }
    }
}

impl Default for LoveMessages {
    fn default() -> Self {
        Self {
            normal: "And beyond! 🥰".to_string(),
            high: "To infinity and beyond! 🚀💝".to_string(),
            extreme: "WOOOOW You love me that much?? 🥰🚀💝".to_string(),
        }
    }
}

impl Default for Music {
    fn default() -> Self {
        Self {
            enabled: false,
            autoplay: true,
            music_url: String::new(),
            start_text: "🎵 Play Music".to_string(),
            stop_text: "🔇 Stop Music".to_string(),
            volume: 0.5,
        }
    }
}

// --- Loading -----------------------------------------------------------------

impl Configuration {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_string(&self) -> String {
        // Plain strings/numbers/bools only; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Decode an arbitrary JS object by round-tripping it through `JSON.stringify`.
    pub fn from_js(value: &JsValue) -> Result<Self, JsValue> {
        if value.is_undefined() || value.is_null() {
            return Err(JsValue::from_str("configuration object is missing"));
        }
        let json: String = js_sys::JSON::stringify(value)?.into();
        Self::from_json_str(&json).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Read `window.VALENTINE_CONFIG`; falls back to the stock card when it is
    /// absent or cannot be decoded.
    pub fn from_window(win: &web_sys::Window) -> Self {
        let raw = js_sys::Reflect::get(win, &JsValue::from_str(GLOBAL_CONFIG_KEY))
            .unwrap_or(JsValue::UNDEFINED);
        Self::from_js(&raw).unwrap_or_else(|err| {
            log::warn!(
                "window.{GLOBAL_CONFIG_KEY} unusable ({}); using the default card",
                err.as_string().unwrap_or_default()
            );
            Self::default()
        })
    }
}

/// Accept `"12s"` or `12` for CSS time fields.
fn seconds_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(f64),
    }
    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => format!("{n}s"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_object_fills_from_defaults() {
        let cfg = Configuration::from_json_str(r##"{"valentineName":"Ana","colors":{"textColor":"#123"}}"##)
            .unwrap();
        assert_eq!(cfg.valentine_name, "Ana");
        assert_eq!(cfg.colors.text_color, "#123");
        assert_eq!(cfg.colors.background_start, "#ffafbd");
        assert_eq!(cfg.animations.heart_explosion_size, 1.5);
        assert!(!cfg.floating_emojis.hearts.is_empty());
    }

    #[test]
    fn test_missing_name_stays_empty() {
        let cfg = Configuration::from_json_str("{}").unwrap();
        assert!(cfg.valentine_name.is_empty());
        assert_eq!(cfg.page_title, Configuration::default().page_title);
    }

    #[test]
    fn test_numeric_float_duration_becomes_seconds() {
        let cfg = Configuration::from_json_str(r#"{"animations":{"floatDuration":12}}"#).unwrap();
        assert_eq!(cfg.animations.float_duration, "12s");
    }

    #[test]
    fn test_music_keys_are_camel_case() {
        let cfg = Configuration::from_json_str(
            r#"{"music":{"enabled":true,"musicUrl":"song.mp3","startText":"go","stopText":"halt","volume":0.2}}"#,
        )
        .unwrap();
        assert!(cfg.music.enabled);
        assert_eq!(cfg.music.music_url, "song.mp3");
        assert_eq!(cfg.music.start_text, "go");
        assert_eq!(cfg.music.stop_text, "halt");
        assert!((cfg.music.volume - 0.2).abs() < 1e-9);
        // unspecified keys keep their defaults
        assert!(cfg.music.autoplay);
    }

    #[test]
    fn test_second_question_is_optional() {
        let cfg = Configuration::from_json_str(
            r#"{"questions":{"second":{"text":"How much?","startText":"This much!"}}}"#,
        )
        .unwrap();
        let second = cfg.questions.second.as_ref().unwrap();
        assert_eq!(second.start_text, "This much!");
        assert_eq!(cfg.questions.first.yes_btn, "Yes!");
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        assert!(Configuration::from_json_str(r#"{"animations":{"heartExplosionSize":"big"}}"#).is_err());
    }
}
