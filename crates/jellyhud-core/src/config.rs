#![forbid(unsafe_code)]

//! Overlay configuration.
//!
//! Every field has a default, so a host that configures nothing gets the
//! stock `JellyHUD` overlay. Values can come from JSON, from the process
//! environment (`JELLYHUD_<KEY>`), or from any key/value lookup the host
//! provides (the browser binding reads `window.JellyHUDConfig`).

use std::fmt;

use serde::Deserialize;

use crate::surface::Layout;

const COOL_MIX_RANGE: (f64, f64) = (0.0, 1.0);
const LABEL_FONT_RATIO_RANGE: (f64, f64) = (0.1, 1.5);
const TRACK_HEIGHT_RANGE: (u32, u32) = (4, 512);

#[derive(Debug)]
pub enum ConfigError {
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid HUD config JSON: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    /// Name of the global entry point object.
    pub global_name: String,
    /// Id of the overlay root element; other element ids derive from it.
    pub root_id: String,
    /// Theme custom property holding the "body" color.
    pub body_var: String,
    /// Theme custom property holding the "tent" color.
    pub tent_var: String,
    /// How far the cool color moves from body toward tent.
    pub cool_mix: f64,
    pub track_height_px: u32,
    /// Label font size as a fraction of the track height.
    pub label_font_ratio: f64,
    pub font_family: Option<String>,
    /// Optional display font; system fonts are used when it fails to load.
    pub font_url: Option<String>,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            global_name: "JellyHUD".to_string(),
            root_id: "jelly-hud".to_string(),
            body_var: "--body".to_string(),
            tent_var: "--tent".to_string(),
            cool_mix: 0.35,
            track_height_px: 28,
            label_font_ratio: 0.62,
            font_family: None,
            font_url: None,
        }
    }
}

impl HudConfig {
    /// Parse from JSON; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::Json)?;
        Ok(config.sanitized())
    }

    /// Build from a key lookup. Unparseable or blank values keep defaults.
    pub fn from_lookup<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| get(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();
        if let Some(v) = value("global_name") {
            config.global_name = v;
        }
        if let Some(v) = value("root_id") {
            config.root_id = v;
        }
        if let Some(v) = value("body_var") {
            config.body_var = v;
        }
        if let Some(v) = value("tent_var") {
            config.tent_var = v;
        }
        if let Some(v) = value("cool_mix").and_then(|v| v.parse().ok()) {
            config.cool_mix = v;
        }
        if let Some(v) = value("track_height_px").and_then(|v| v.parse().ok()) {
            config.track_height_px = v;
        }
        if let Some(v) = value("label_font_ratio").and_then(|v| v.parse().ok()) {
            config.label_font_ratio = v;
        }
        config.font_family = value("font_family");
        config.font_url = value("font_url");
        config.sanitized()
    }

    /// Build from `JELLYHUD_<KEY>` environment variables.
    pub fn from_env() -> Self {
        Self::from_env_with(|name| std::env::var(name).ok())
    }

    /// Like [`Self::from_env`], reading variables through `get_env`.
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup(|key| get_env(&env_key(key)))
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        Layout::new(&self.root_id, self.track_height_px, self.label_font_ratio)
    }

    fn sanitized(mut self) -> Self {
        self.cool_mix = clamp_finite(self.cool_mix, COOL_MIX_RANGE, 0.35);
        self.label_font_ratio = clamp_finite(self.label_font_ratio, LABEL_FONT_RATIO_RANGE, 0.62);
        self.track_height_px = self
            .track_height_px
            .clamp(TRACK_HEIGHT_RANGE.0, TRACK_HEIGHT_RANGE.1);
        if self.global_name.trim().is_empty() {
            self.global_name = Self::default().global_name;
        }
        if self.root_id.trim().is_empty() {
            self.root_id = Self::default().root_id;
        }
        self
    }
}

/// `cool_mix` -> `JELLYHUD_COOL_MIX`.
#[must_use]
pub fn env_key(key: &str) -> String {
    format!("JELLYHUD_{}", key.to_ascii_uppercase())
}

fn clamp_finite(value: f64, (lo, hi): (f64, f64), fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(lo, hi)
    } else {
        fallback
    }
}
