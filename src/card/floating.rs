//! Drifting hearts and bears in `.floating-elements`.
//!
//! Placement is planned up front (pure, seedable) and then appended to the
//! container. Nothing is ever removed.

use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::config::FloatingEmojis;
use crate::rng::RandomSource;

pub const CONTAINER_SELECTOR: &str = ".floating-elements";
pub const MAX_DELAY_S: f64 = 5.0;
pub const MIN_DURATION_S: f64 = 10.0;
pub const MAX_DURATION_S: f64 = 30.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecorationKind {
    Heart,
    Bear,
}

impl DecorationKind {
    pub fn class_name(self) -> &'static str {
        match self {
            DecorationKind::Heart => "heart",
            DecorationKind::Bear => "bear",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Decoration {
    pub kind: DecorationKind,
    pub glyph: String,
    /// Horizontal start in viewport-width units.
    pub left_vw: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

impl Decoration {
    pub fn scatter(kind: DecorationKind, glyph: &str, rng: &mut impl RandomSource) -> Self {
        Self {
            kind,
            glyph: glyph.to_string(),
            left_vw: rng.range(0.0, 100.0),
            delay_s: rng.range(0.0, MAX_DELAY_S),
            duration_s: rng.range(MIN_DURATION_S, MAX_DURATION_S),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "left:{:.3}vw; animation-delay:{:.3}s; animation-duration:{:.3}s;",
            self.left_vw, self.delay_s, self.duration_s
        )
    }
}

/// One decoration per configured heart, then one per bear.
pub fn ambient_plan(emojis: &FloatingEmojis, rng: &mut impl RandomSource) -> Vec<Decoration> {
    let hearts = emojis.hearts.iter().map(|g| (DecorationKind::Heart, g));
    let bears = emojis.bears.iter().map(|g| (DecorationKind::Bear, g));
    hearts
        .chain(bears)
        .map(|(kind, glyph)| Decoration::scatter(kind, glyph, rng))
        .collect()
}

/// `count` hearts picked uniformly (with replacement) from `hearts`.
pub fn burst_plan(hearts: &[String], count: usize, rng: &mut impl RandomSource) -> Vec<Decoration> {
    if hearts.is_empty() {
        return Vec::new();
    }
    (0..count)
        .map(|_| {
            let glyph = &hearts[rng.index(hearts.len())];
            Decoration::scatter(DecorationKind::Heart, glyph, rng)
        })
        .collect()
}

/// Append `decorations` to the container; returns how many were added
/// (0 when the page has no container).
pub fn spawn(doc: &Document, decorations: &[Decoration]) -> Result<usize, JsValue> {
    let Some(container) = doc.query_selector(CONTAINER_SELECTOR)? else {
        return Ok(0);
    };
    for d in decorations {
        let div = doc.create_element("div")?;
        div.set_class_name(d.kind.class_name());
        div.set_text_content(Some(&d.glyph));
        div.set_attribute("style", &d.style()).ok();
        container.append_child(&div)?;
    }
    Ok(decorations.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::CardRng;

    #[test]
    fn test_ambient_plan_covers_every_emoji_in_order() {
        let emojis = FloatingEmojis {
            hearts: vec!["a".into(), "b".into()],
            bears: vec!["c".into()],
        };
        let plan = ambient_plan(&emojis, &mut CardRng::with_seed(1));
        let kinds: Vec<_> = plan.iter().map(|d| (d.kind, d.glyph.as_str())).collect();
        assert_eq!(
            kinds,
            vec![
                (DecorationKind::Heart, "a"),
                (DecorationKind::Heart, "b"),
                (DecorationKind::Bear, "c"),
            ]
        );
    }

    #[test]
    fn test_scatter_ranges() {
        let mut rng = CardRng::with_seed(2024);
        for _ in 0..2_000 {
            let d = Decoration::scatter(DecorationKind::Bear, "x", &mut rng);
            assert!((0.0..100.0).contains(&d.left_vw));
            assert!((0.0..MAX_DELAY_S).contains(&d.delay_s));
            assert!((MIN_DURATION_S..MAX_DURATION_S).contains(&d.duration_s));
        }
    }

    #[test]
    fn test_burst_draws_only_hearts() {
        let hearts = vec!["💖".to_string(), "💗".to_string()];
        let plan = burst_plan(&hearts, 50, &mut CardRng::with_seed(9));
        assert_eq!(plan.len(), 50);
        assert!(plan.iter().all(|d| d.kind == DecorationKind::Heart && hearts.contains(&d.glyph)));
    }

    #[test]
    fn test_burst_with_no_hearts_is_empty() {
        assert!(burst_plan(&[], 50, &mut CardRng::with_seed(9)).is_empty());
    }

    #[test]
    fn test_style_string() {
        let d = Decoration {
            kind: DecorationKind::Heart,
            glyph: "x".into(),
            left_vw: 50.0,
            delay_s: 1.5,
            duration_s: 20.0,
        };
        assert_eq!(d.style(), "left:50.000vw; animation-delay:1.500s; animation-duration:20.000s;");
    }
}
