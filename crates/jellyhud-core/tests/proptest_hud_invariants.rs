//! Property-based invariants for the clamp, color and palette path.
//!
//! 1. Clamp output is always in 0..=100.
//! 2. Clamp is idempotent.
//! 3. Non-numeric text clamps to exactly 0.
//! 4. `mix` is exact at t = 0 and t = 1.
//! 5. `mix` channels stay between the two endpoints.
//! 6. Six-digit hex parses to the bytes it spells.
//! 7. Three-digit shorthand equals its doubled form.
//! 8. `parse_or` never fails.
//! 9. Bar colors hit palette anchors at 0% and 100%.

use jellyhud_core::{
    DEFAULT_COLOR, HudConfig, Palette, Percentage, RawValue, Rgb, StaticTheme, mix,
};
use proptest::prelude::*;

fn rgb_strategy() -> impl Strategy<Value = Rgb> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

fn raw_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<i64>().prop_map(|v| v.to_string()),
        any::<f64>().prop_map(|v| v.to_string()),
        "[ a-zA-Z%+.-]{0,12}",
        "[+-]?(inf|infinity|nan)".prop_map(|w| w.to_uppercase()),
        Just(String::new()),
    ]
}

proptest! {
    #[test]
    fn clamp_in_range(raw in raw_strategy()) {
        let pct = Percentage::clamp(raw.as_str());
        prop_assert!(pct.get() <= 100);
    }

    #[test]
    fn clamp_number_in_range(v in any::<f64>()) {
        prop_assert!(Percentage::clamp(v).get() <= 100);
    }

    #[test]
    fn clamp_idempotent(raw in raw_strategy()) {
        let once = Percentage::clamp(raw.as_str());
        prop_assert_eq!(Percentage::clamp(RawValue::from(once)), once);
        prop_assert_eq!(Percentage::clamp(once.get().to_string().as_str()), once);
    }

    #[test]
    fn clamp_letters_are_zero(raw in "[+-]?[a-zA-Z]{1,10}") {
        prop_assert_eq!(Percentage::clamp(raw.as_str()), Percentage::ZERO);
    }

    #[test]
    fn mix_endpoints_exact(a in rgb_strategy(), b in rgb_strategy()) {
        prop_assert_eq!(mix(a, b, 0.0), a);
        prop_assert_eq!(mix(a, b, 1.0), b);
    }

    #[test]
    fn mix_stays_between_endpoints(a in rgb_strategy(), b in rgb_strategy(), t in -1.0f64..2.0) {
        let m = mix(a, b, t);
        for (x, lo, hi) in [(m.r, a.r, b.r), (m.g, a.g, b.g), (m.b, a.b, b.b)] {
            prop_assert!(x >= lo.min(hi) && x <= lo.max(hi));
        }
    }

    #[test]
    fn hex_parses_its_bytes(c in rgb_strategy(), upper in any::<bool>(), hash in any::<bool>()) {
        let mut spec = format!("{:02x}{:02x}{:02x}", c.r, c.g, c.b);
        if upper {
            spec = spec.to_ascii_uppercase();
        }
        if hash {
            spec.insert(0, '#');
        }
        prop_assert_eq!(Rgb::parse(&spec), Ok(c));
    }

    #[test]
    fn shorthand_matches_doubled(r in 0u8..16, g in 0u8..16, b in 0u8..16) {
        let short = format!("#{r:x}{g:x}{b:x}");
        let long = format!("#{r:x}{r:x}{g:x}{g:x}{b:x}{b:x}");
        prop_assert_eq!(Rgb::parse(&short), Rgb::parse(&long));
    }

    #[test]
    fn parse_or_never_fails(spec in ".{0,16}", fallback in ".{0,16}") {
        let c = Rgb::parse_or(&spec, &fallback);
        if Rgb::parse(&spec).is_err() && Rgb::parse(&fallback).is_err() {
            prop_assert_eq!(c, DEFAULT_COLOR);
        }
    }

    #[test]
    fn palette_anchors(body in rgb_strategy(), tent in rgb_strategy()) {
        let theme = StaticTheme::new()
            .with("--body", &format!("#{:02x}{:02x}{:02x}", body.r, body.g, body.b))
            .with("--tent", &tent.to_css());
        let p = Palette::resolve(&theme, &HudConfig::default());
        prop_assert_eq!(p.body, body);
        prop_assert_eq!(p.tent, tent);
        prop_assert_eq!(p.color_for_temp(Percentage::ZERO), p.cool);
        prop_assert_eq!(p.color_for_temp(Percentage::FULL), p.hot);
        prop_assert_eq!(p.color_for_money(Percentage::ZERO), p.hot);
        prop_assert_eq!(p.color_for_money(Percentage::FULL), p.ok);
    }
}
