// Invariants of the stock card that ships as `Configuration::default()`.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

use valentine_card::Configuration;
use valentine_card::normalize::{DEFAULT_COLORS, is_hex_color, normalize};

#[test]
fn stock_card_needs_no_repairs() {
    let mut cfg = Configuration::default();
    let warnings = normalize(&mut cfg);
    assert!(warnings.is_empty(), "stock card produced warnings: {:?}", warnings);
}

#[test]
fn color_defaults_are_valid_and_distinct() {
    let mut seen = HashSet::new();
    for (key, hex) in DEFAULT_COLORS {
        assert!(is_hex_color(hex), "default for {} is not a hex color: {}", key, hex);
        assert!(seen.insert(key), "duplicate color key {}", key);
    }
    let c = Configuration::default().colors;
    let stock = [
        c.background_start,
        c.background_end,
        c.button_background,
        c.button_hover,
        c.text_color,
    ];
    for ((key, hex), value) in DEFAULT_COLORS.iter().zip(stock.iter()) {
        assert_eq!(*hex, value.as_str(), "stock {} differs from its repair default", key);
    }
}

#[test]
fn floating_emojis_are_nonempty_and_unique() {
    let emojis = Configuration::default().floating_emojis;
    assert!(!emojis.hearts.is_empty());
    assert!(!emojis.bears.is_empty());
    let mut seen = HashSet::new();
    for e in emojis.hearts.iter().chain(emojis.bears.iter()) {
        assert!(!e.trim().is_empty(), "blank emoji entry");
        assert!(seen.insert(e.as_str()), "duplicate emoji '{}'", e);
    }
}

#[test]
fn stock_card_survives_json_round_trip() {
    let cfg = Configuration::default();
    let back = Configuration::from_json_str(&cfg.to_json_string()).unwrap();
    assert_eq!(back, cfg);
}
