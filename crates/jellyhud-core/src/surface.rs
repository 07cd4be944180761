#![forbid(unsafe_code)]

//! The fixed-layout rendering target the HUD writes into.
//!
//! The layout never changes shape: two bar meters on top and three word slots
//! in a three-column grid at the bottom. A [`Surface`] implementation only has
//! to create that layout once and then accept fill/text updates.

use std::fmt;

use crate::clamp::Percentage;
use crate::color::Rgb;

/// Number of word slots in the bottom row.
pub const SLOT_COUNT: usize = 3;

/// The two bar meters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meter {
    Temp,
    Money,
}

impl Meter {
    pub const ALL: [Self; 2] = [Self::Temp, Self::Money];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Temp => "temp",
            Self::Money => "money",
        }
    }

    /// Caption drawn centered over the track.
    #[must_use]
    pub const fn caption(self) -> &'static str {
        match self {
            Self::Temp => "TEMP",
            Self::Money => "MONEY",
        }
    }
}

/// Index of a word slot, always `< SLOT_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotIndex(usize);

impl SlotIndex {
    pub const ALL: [Self; SLOT_COUNT] = [Self(0), Self(1), Self(2)];

    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < SLOT_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// URL parameter name for this slot (`w1`..`w3`).
    #[must_use]
    pub const fn param_name(self) -> &'static str {
        match self.0 {
            0 => "w1",
            1 => "w2",
            _ => "w3",
        }
    }
}

/// Trimmed slot text. Blank text is hidden but keeps its grid cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WordSlot(String);

impl WordSlot {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self(text.trim().to_string())
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for WordSlot {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// Element ids and sizing for the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    root_id: String,
    track_height_px: u32,
    label_font_ratio: f64,
}

impl Layout {
    #[must_use]
    pub fn new(root_id: &str, track_height_px: u32, label_font_ratio: f64) -> Self {
        Self {
            root_id: root_id.to_string(),
            track_height_px: track_height_px.max(1),
            label_font_ratio,
        }
    }

    #[must_use]
    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    #[must_use]
    pub fn meter_id(&self, meter: Meter) -> String {
        format!("{}-{}", self.root_id, meter.as_str())
    }

    #[must_use]
    pub fn fill_id(&self, meter: Meter) -> String {
        format!("{}-{}-fill", self.root_id, meter.as_str())
    }

    #[must_use]
    pub fn label_id(&self, meter: Meter) -> String {
        format!("{}-{}-label", self.root_id, meter.as_str())
    }

    #[must_use]
    pub fn slot_id(&self, slot: SlotIndex) -> String {
        format!("{}-{}", self.root_id, slot.param_name())
    }

    #[must_use]
    pub fn track_height_px(&self) -> u32 {
        self.track_height_px
    }

    /// Font size shared by meter labels and word slots, so both read alike.
    #[must_use]
    pub fn label_font_px(&self) -> u32 {
        let px = (f64::from(self.track_height_px) * self.label_font_ratio).round();
        if px.is_finite() { px.max(1.0) as u32 } else { 1 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// The host has no document/window to attach to.
    NoHost(&'static str),
    /// The host refused an operation while building the layout.
    Host(String),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoHost(what) => write!(f, "no {what} available"),
            Self::Host(msg) => write!(f, "host error: {msg}"),
        }
    }
}

impl std::error::Error for SurfaceError {}

/// A rendering target for the overlay.
///
/// `set_meter` and `set_word_slot` must be silent no-ops when their target
/// element does not exist.
pub trait Surface {
    /// Whether the overlay root is already present.
    fn exists(&self) -> bool;

    /// Build the fixed layout. Only called when [`Surface::exists`] is false.
    fn create(&mut self, layout: &Layout) -> Result<(), SurfaceError>;

    fn set_meter(&mut self, meter: Meter, pct: Percentage, fill: Rgb);

    fn set_word_slot(&mut self, slot: SlotIndex, word: &WordSlot);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_index_bounds() {
        assert_eq!(SlotIndex::new(2).map(SlotIndex::get), Some(2));
        assert_eq!(SlotIndex::new(3), None);
        assert_eq!(SlotIndex::ALL.map(SlotIndex::param_name), ["w1", "w2", "w3"]);
    }

    #[test]
    fn word_slot_trims() {
        assert_eq!(WordSlot::new("  Hi \n").as_str(), "Hi");
        assert!(WordSlot::new(" \t ").is_blank());
        assert_eq!(WordSlot::empty(), WordSlot::new(""));
    }

    #[test]
    fn element_ids_derive_from_root() {
        let layout = Layout::new("hud", 28, 0.62);
        assert_eq!(layout.meter_id(Meter::Temp), "hud-temp");
        assert_eq!(layout.fill_id(Meter::Money), "hud-money-fill");
        assert_eq!(layout.label_id(Meter::Temp), "hud-temp-label");
        assert_eq!(layout.slot_id(SlotIndex::ALL[2]), "hud-w3");
    }

    #[test]
    fn label_font_follows_track_height() {
        assert_eq!(Layout::new("hud", 28, 0.62).label_font_px(), 17);
        assert_eq!(Layout::new("hud", 50, 0.5).label_font_px(), 25);
        assert_eq!(Layout::new("hud", 1, 0.1).label_font_px(), 1);
    }
}
