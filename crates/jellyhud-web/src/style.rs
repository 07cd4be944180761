#![forbid(unsafe_code)]

//! CSS for the overlay.
//!
//! Everything is scoped under the root id so the host page's own styles are
//! untouched, and every element ignores pointer input.

use std::fmt::Write as _;

use jellyhud_core::{HudConfig, Layout};

/// Family name given to the optional display font.
pub const DISPLAY_FONT_FAMILY: &str = "JellyHUD Display";
const SYSTEM_FONTS: &str = "system-ui, -apple-system, \"Segoe UI\", Roboto, sans-serif";

pub const CLASS_METERS: &str = "jh-meters";
pub const CLASS_TRACK: &str = "jh-track";
pub const CLASS_FILL: &str = "jh-fill";
pub const CLASS_LABEL: &str = "jh-label";
pub const CLASS_WORDS: &str = "jh-words";
pub const CLASS_WORD: &str = "jh-word";
/// Marks a blank word slot; keeps its grid cell but draws nothing.
pub const CLASS_HIDDEN: &str = "jh-hidden";

/// Id of the `<style>` element for a layout.
#[must_use]
pub fn style_id(layout: &Layout) -> String {
    format!("{}-style", layout.root_id())
}

/// Font stack: configured family, then the display font, then system fonts.
#[must_use]
pub fn font_stack(config: &HudConfig) -> String {
    let mut stack = String::new();
    if let Some(family) = &config.font_family {
        let _ = write!(stack, "{}, ", css_string(family));
    }
    if config.font_url.is_some() {
        let _ = write!(stack, "{}, ", css_string(DISPLAY_FONT_FAMILY));
    }
    stack.push_str(SYSTEM_FONTS);
    stack
}

/// The full stylesheet for one overlay instance.
#[must_use]
pub fn stylesheet(layout: &Layout, config: &HudConfig) -> String {
    let root = format!("#{}", layout.root_id());
    let track = layout.track_height_px();
    let font = layout.label_font_px();
    let radius = track / 2;
    let mut css = String::new();

    if let Some(url) = &config.font_url {
        let _ = writeln!(
            css,
            "@font-face {{ font-family: {}; src: url({}); font-display: swap; }}",
            css_string(DISPLAY_FONT_FAMILY),
            css_string(url)
        );
    }
    let _ = writeln!(
        css,
        "{root} {{ position: fixed; inset: 0; z-index: 2147483647; pointer-events: none; \
         display: flex; flex-direction: column; justify-content: space-between; \
         box-sizing: border-box; padding: 12px; background: transparent; color: #fff; \
         font-family: {}; }}",
        font_stack(config)
    );
    let _ = writeln!(
        css,
        "{root}, {root} * {{ pointer-events: none; user-select: none; }}"
    );
    let _ = writeln!(
        css,
        "{root} .{CLASS_METERS} {{ display: flex; flex-direction: column; gap: 8px; }}"
    );
    let _ = writeln!(
        css,
        "{root} .{CLASS_TRACK} {{ position: relative; height: {track}px; border-radius: {radius}px; \
         background: rgba(0, 0, 0, 0.35); overflow: hidden; }}"
    );
    let _ = writeln!(
        css,
        "{root} .{CLASS_FILL} {{ position: absolute; left: 0; top: 0; bottom: 0; width: 0%; \
         transition: width 240ms ease, background-color 240ms ease; }}"
    );
    let _ = writeln!(
        css,
        "{root} .{CLASS_LABEL} {{ position: absolute; inset: 0; display: flex; align-items: center; \
         justify-content: center; font-size: {font}px; line-height: 1; \
         text-shadow: 0 1px 2px rgba(0, 0, 0, 0.6); }}"
    );
    let _ = writeln!(
        css,
        "{root} .{CLASS_WORDS} {{ display: grid; grid-template-columns: repeat(3, 1fr); gap: 8px; \
         font-size: {font}px; line-height: 1.2; text-align: center; \
         text-shadow: 0 1px 2px rgba(0, 0, 0, 0.6); }}"
    );
    let _ = writeln!(
        css,
        "{root} .{CLASS_WORD}.{CLASS_HIDDEN} {{ color: transparent; text-shadow: none; }}"
    );
    css
}

/// Double-quoted CSS string with quotes, backslashes and newlines escaped.
fn css_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' | '\r' => out.push_str("\\a "),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}
