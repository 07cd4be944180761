#![forbid(unsafe_code)]

//! Bar colors derived from the host page's theme.
//!
//! The palette is resolved once from two theme colors ("body" and "tent") so
//! the overlay blends with the page. It does not follow later theme changes.

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::clamp::Percentage;
use crate::color::{Rgb, mix};
use crate::config::HudConfig;

/// Used for both theme colors when the page defines neither.
pub const THEME_FALLBACK_SPEC: &str = "#408cff";
pub const HOT: Rgb = Rgb::new(255, 60, 48);
/// `ok` color when the page has no body color.
pub const OK_FALLBACK: Rgb = Rgb::new(50, 220, 120);

/// Read-only access to named theme colors supplied by the host.
pub trait ThemeSource {
    /// Raw color spec for a custom property name such as `--body`.
    fn color_var(&self, name: &str) -> Option<String>;
}

/// Fixed theme values, keyed by property name.
#[derive(Debug, Clone, Default)]
pub struct StaticTheme {
    vars: HashMap<String, String>,
}

impl StaticTheme {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }
}

impl ThemeSource for StaticTheme {
    fn color_var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Derived bar colors. Immutable once resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub body: Rgb,
    pub tent: Rgb,
    pub cool: Rgb,
    pub hot: Rgb,
    pub ok: Rgb,
}

impl Palette {
    /// Resolve from the host theme. Blank values count as absent; each theme
    /// color defaults to the other, and both default to a built-in blue.
    #[instrument(skip_all, level = "debug")]
    pub fn resolve(theme: &dyn ThemeSource, config: &HudConfig) -> Self {
        let read = |name: &str| {
            theme
                .color_var(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let body_raw = read(&config.body_var);
        let tent_raw = read(&config.tent_var);

        let body_spec = body_raw
            .as_deref()
            .or(tent_raw.as_deref())
            .unwrap_or(THEME_FALLBACK_SPEC);
        let tent_spec = tent_raw
            .as_deref()
            .or(body_raw.as_deref())
            .unwrap_or(THEME_FALLBACK_SPEC);
        let body = Rgb::parse_or(body_spec, THEME_FALLBACK_SPEC);
        let tent = Rgb::parse_or(tent_spec, THEME_FALLBACK_SPEC);

        let palette = Self {
            body,
            tent,
            cool: mix(body, tent, config.cool_mix),
            hot: HOT,
            ok: if body_raw.is_some() { body } else { OK_FALLBACK },
        };
        debug!(
            body = %palette.body,
            tent = %palette.tent,
            cool = %palette.cool,
            ok = %palette.ok,
            "palette resolved"
        );
        palette
    }

    /// Cool at 0%, hot at 100%.
    #[must_use]
    pub fn color_for_temp(&self, pct: Percentage) -> Rgb {
        mix(self.cool, self.hot, pct.ratio())
    }

    /// Hot (bad) at 0%, ok (good) at 100%.
    #[must_use]
    pub fn color_for_money(&self, pct: Percentage) -> Rgb {
        mix(self.hot, self.ok, pct.ratio())
    }
}
