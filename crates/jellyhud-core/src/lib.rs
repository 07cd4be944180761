#![forbid(unsafe_code)]

//! Core of the JellyHUD overlay: everything that does not touch a browser.
//!
//! # Role in JellyHUD
//! `jellyhud-core` owns the value pipeline that turns raw inputs into what the
//! overlay shows. The browser binding (`jellyhud-web`) only supplies the three
//! capabilities the core asks for: a [`Surface`] to write into, a
//! [`ThemeSource`] to read theme colors from, and a [`LocationSource`] to read
//! URL parameters from.
//!
//! # Pipeline
//! ```text
//! LocationSource -> HudParams -> Percentage -> Palette -> Surface
//! ```
//! The mutation API ([`Hud`]) re-enters the same clamp/color/write path
//! without re-reading the URL.
//!
//! # Example
//! ```
//! use jellyhud_core::{HeadlessSurface, Hud, HudConfig, Meter, Palette, StaticLocation, StaticTheme};
//!
//! let config = HudConfig::default();
//! let palette = Palette::resolve(&StaticTheme::default(), &config);
//! let location = StaticLocation::from_href("?temp=40&w1=Go");
//! let mut hud = Hud::new(HeadlessSurface::new(), location, palette, config.layout());
//! hud.init();
//! assert_eq!(hud.surface().meter(Meter::Temp).map(|m| m.pct.get()), Some(40));
//! assert_eq!(hud.surface().slot_text(0), Some("Go"));
//! ```

pub mod clamp;
pub mod color;
pub mod config;
pub mod headless;
pub mod host;
pub mod hud;
#[cfg(feature = "tracing-json")]
pub mod logging;
pub mod palette;
pub mod params;
pub mod scale;
pub mod surface;

pub use clamp::{Percentage, RawValue};
pub use color::{ColorParseError, DEFAULT_COLOR, Rgb, mix};
pub use config::{ConfigError, HudConfig};
pub use headless::HeadlessSurface;
pub use hud::{Hud, InitOutcome};
pub use palette::{Palette, StaticTheme, ThemeSource};
pub use params::{HudParams, LocationSource, StaticLocation};
pub use surface::{Layout, Meter, SlotIndex, Surface, SurfaceError, WordSlot};
