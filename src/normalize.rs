//! Configuration repair pass.
//!
//! Runs once before anything reads the configuration. Every rule either leaves
//! a field alone or swaps in a fixed default and records a [`ConfigWarning`];
//! there is no failure path.

use std::fmt;

use crate::config::Configuration;

pub const FALLBACK_NAME: &str = "My Love";
pub const MIN_FLOAT_SECONDS: f64 = 5.0;
pub const MIN_FLOAT_DURATION: &str = "5s";
pub const EXPLOSION_SIZE_RANGE: std::ops::RangeInclusive<f64> = 1.0..=3.0;
pub const DEFAULT_EXPLOSION_SIZE: f64 = 1.5;
pub const DEFAULT_VOLUME: f64 = 0.5;

/// Per-key color defaults, in the JSON key spelling used by the host page.
pub const DEFAULT_COLORS: [(&str, &str); 5] = [
    ("backgroundStart", "#ffafbd"),
    ("backgroundEnd", "#ffc3a0"),
    ("buttonBackground", "#ff6b6b"),
    ("buttonHover", "#ff8787"),
    ("textColor", "#ff4757"),
];

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigWarning {
    MissingName,
    InvalidColor { key: &'static str, value: String },
    FloatDurationTooShort { value: String },
    FloatDurationNotANumber { value: String },
    ExplosionSizeOutOfRange { value: f64 },
    VolumeOutOfRange { value: f64 },
    MusicWithoutUrl,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::MissingName => write!(f, "Valentine's name is not set! Using default."),
            ConfigWarning::InvalidColor { key, .. } => write!(f, "Invalid color for {key}! Using default."),
            ConfigWarning::FloatDurationTooShort { .. } => {
                write!(f, "Float duration too short! Setting to 5s minimum.")
            }
            ConfigWarning::FloatDurationNotANumber { .. } => {
                write!(f, "Float duration is not a number! Setting to 5s minimum.")
            }
            ConfigWarning::ExplosionSizeOutOfRange { .. } => {
                write!(f, "Heart explosion size should be between 1 and 3! Using default.")
            }
            ConfigWarning::VolumeOutOfRange { .. } => {
                write!(f, "Music volume should be between 0 and 1! Using 0.5.")
            }
            ConfigWarning::MusicWithoutUrl => {
                write!(f, "Music is enabled but no musicUrl is set! Disabling music.")
            }
        }
    }
}

/// Repair `config` in place and return one warning per corrected field.
pub fn normalize(config: &mut Configuration) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.valentine_name.is_empty() {
        warnings.push(ConfigWarning::MissingName);
        config.valentine_name = FALLBACK_NAME.to_string();
    }

    let colors = &mut config.colors;
    let slots: [&mut String; 5] = [
        &mut colors.background_start,
        &mut colors.background_end,
        &mut colors.button_background,
        &mut colors.button_hover,
        &mut colors.text_color,
    ];
    for (slot, (key, default)) in slots.into_iter().zip(DEFAULT_COLORS) {
        if !is_hex_color(slot) {
            warnings.push(ConfigWarning::InvalidColor { key, value: slot.clone() });
            *slot = default.to_string();
        }
    }

    let anim = &mut config.animations;
    match leading_seconds(&anim.float_duration) {
        Some(secs) if secs >= MIN_FLOAT_SECONDS => {}
        Some(_) => {
            warnings.push(ConfigWarning::FloatDurationTooShort { value: anim.float_duration.clone() });
            anim.float_duration = MIN_FLOAT_DURATION.to_string();
        }
        None => {
            warnings.push(ConfigWarning::FloatDurationNotANumber { value: anim.float_duration.clone() });
            anim.float_duration = MIN_FLOAT_DURATION.to_string();
        }
    }

    // NaN fails `contains` too
    if !EXPLOSION_SIZE_RANGE.contains(&anim.heart_explosion_size) {
        warnings.push(ConfigWarning::ExplosionSizeOutOfRange { value: anim.heart_explosion_size });
        anim.heart_explosion_size = DEFAULT_EXPLOSION_SIZE;
    }

    let music = &mut config.music;
    if !(0.0..=1.0).contains(&music.volume) {
        warnings.push(ConfigWarning::VolumeOutOfRange { value: music.volume });
        music.volume = DEFAULT_VOLUME;
    }
    if music.enabled && music.music_url.trim().is_empty() {
        warnings.push(ConfigWarning::MusicWithoutUrl);
        music.enabled = false;
    }

    warnings
}

/// Send warnings to the diagnostic log. Nothing is shown to the visitor.
pub fn report(warnings: &[ConfigWarning]) {
    if warnings.is_empty() {
        return;
    }
    log::warn!("⚠️ Configuration Warnings:");
    for w in warnings {
        log::warn!("- {w}");
    }
}

/// `#` followed by exactly 3 or 6 hex digits.
pub fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// Longest numeric prefix of a CSS time string, read as seconds (`"7.5s"` -> 7.5).
pub fn leading_seconds(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let candidate: &str = {
        let end = s
            .char_indices()
            .find(|(_, c)| !(c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E')))
            .map(|(i, _)| i)
            .unwrap_or(s.len());
        &s[..end]
    };
    // "5e" or "1.2.3" are not numbers as a whole; back off until a prefix parses.
    (1..=candidate.len())
        .rev()
        .find_map(|n| candidate[..n].parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_shapes() {
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("#FFaa00"));
        assert!(!is_hex_color("fff"));
        assert!(!is_hex_color("#ffff"));
        assert!(!is_hex_color("#ggg"));
        assert!(!is_hex_color("#ff4757 "));
        assert!(!is_hex_color(""));
    }

    #[test]
    fn test_leading_seconds() {
        assert_eq!(leading_seconds("2s"), Some(2.0));
        assert_eq!(leading_seconds(" 7.5s"), Some(7.5));
        assert_eq!(leading_seconds("15"), Some(15.0));
        assert_eq!(leading_seconds("5e"), Some(5.0));
        assert_eq!(leading_seconds("1.2.3s"), Some(1.2));
        assert_eq!(leading_seconds("fast"), None);
        assert_eq!(leading_seconds(""), None);
    }

    #[test]
    fn test_valid_config_is_untouched() {
        let mut cfg = Configuration::default();
        let before = cfg.clone();
        assert!(normalize(&mut cfg).is_empty());
        assert_eq!(cfg, before);
    }

    #[test]
    fn test_empty_name_gets_fallback() {
        let mut cfg = Configuration { valentine_name: String::new(), ..Configuration::default() };
        let warnings = normalize(&mut cfg);
        assert_eq!(warnings, vec![ConfigWarning::MissingName]);
        assert_eq!(cfg.valentine_name, FALLBACK_NAME);
    }

    #[test]
    fn test_spaces_only_name_is_kept() {
        let mut cfg = Configuration { valentine_name: "   ".into(), ..Configuration::default() };
        assert!(normalize(&mut cfg).is_empty());
        assert_eq!(cfg.valentine_name, "   ");
    }

    #[test]
    fn test_warning_wording() {
        let mut cfg = Configuration::default();
        cfg.valentine_name.clear();
        cfg.colors.text_color = "red".into();
        cfg.animations.float_duration = "2s".into();
        cfg.animations.heart_explosion_size = 9.0;
        let lines: Vec<String> = normalize(&mut cfg).iter().map(|w| w.to_string()).collect();
        assert_eq!(
            lines,
            [
                "Valentine's name is not set! Using default.",
                "Invalid color for textColor! Using default.",
                "Float duration too short! Setting to 5s minimum.",
                "Heart explosion size should be between 1 and 3! Using default.",
            ]
        );
        assert_eq!(
            ConfigWarning::FloatDurationNotANumber { value: "fast".into() }.to_string(),
            "Float duration is not a number! Setting to 5s minimum."
        );
    }

    #[test]
    fn test_each_bad_color_uses_its_own_default() {
        let mut cfg = Configuration::default();
        cfg.colors.background_start = "pink".into();
        cfg.colors.button_hover = "#12345".into();
        let warnings = normalize(&mut cfg);
        assert_eq!(warnings.len(), 2);
        assert_eq!(cfg.colors.background_start, "#ffafbd");
        assert_eq!(cfg.colors.button_hover, "#ff8787");
        assert!(matches!(
            &warnings[0],
            ConfigWarning::InvalidColor { key: "backgroundStart", value } if value == "pink"
        ));
    }

    #[test]
    fn test_unparseable_duration_is_floored() {
        let mut cfg = Configuration::default();
        cfg.animations.float_duration = "slow".into();
        let warnings = normalize(&mut cfg);
        assert_eq!(cfg.animations.float_duration, MIN_FLOAT_DURATION);
        assert!(matches!(warnings[0], ConfigWarning::FloatDurationNotANumber { .. }));
    }

    #[test]
    fn test_nan_explosion_size_is_replaced() {
        let mut cfg = Configuration::default();
        cfg.animations.heart_explosion_size = f64::NAN;
        assert_eq!(normalize(&mut cfg).len(), 1);
        assert_eq!(cfg.animations.heart_explosion_size, DEFAULT_EXPLOSION_SIZE);
    }

    #[test]
    fn test_enabled_music_without_url_is_disabled() {
        let mut cfg = Configuration::default();
        cfg.music.enabled = true;
        cfg.music.volume = 4.0;
        let warnings = normalize(&mut cfg);
        assert_eq!(
            warnings,
            vec![ConfigWarning::VolumeOutOfRange { value: 4.0 }, ConfigWarning::MusicWithoutUrl]
        );
        assert!(!cfg.music.enabled);
        assert_eq!(cfg.music.volume, DEFAULT_VOLUME);
    }
}
