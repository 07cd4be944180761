#![forbid(unsafe_code)]

//! The mutation API: `set`, `set_temp`, `set_money`, `set_words`, `refresh`.
//!
//! Every operation is synchronous and fire-and-forget. Inputs go through the
//! clamp, colors come from the palette, and the surface is the only state.

use tracing::{debug, error, info};

use crate::clamp::{Percentage, RawValue};
use crate::palette::Palette;
use crate::params::{HudParams, LocationSource};
use crate::surface::{Layout, Meter, SlotIndex, Surface, WordSlot};

/// What `init` did. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    /// The surface was already there; creation was skipped.
    AlreadyPresent,
    /// Creation failed; the error was logged.
    Failed,
}

/// The overlay: a surface, where its inputs come from, and its colors.
#[derive(Debug)]
pub struct Hud<S, L> {
    surface: S,
    location: L,
    palette: Palette,
    layout: Layout,
}

impl<S: Surface, L: LocationSource> Hud<S, L> {
    #[must_use]
    pub fn new(surface: S, location: L, palette: Palette, layout: Layout) -> Self {
        Self {
            surface,
            location,
            palette,
            layout,
        }
    }

    /// Create the surface unless it exists, then apply the URL inputs.
    ///
    /// Safe to call repeatedly. Creation errors are logged, not returned.
    pub fn init(&mut self) -> InitOutcome {
        let outcome = if self.surface.exists() {
            debug!(root = self.layout.root_id(), "surface already present");
            InitOutcome::AlreadyPresent
        } else {
            match self.surface.create(&self.layout) {
                Ok(()) => {
                    info!(root = self.layout.root_id(), "surface created");
                    InitOutcome::Created
                }
                Err(err) => {
                    error!(root = self.layout.root_id(), %err, "surface creation failed");
                    return InitOutcome::Failed;
                }
            }
        };
        self.refresh();
        outcome
    }

    pub fn set<'a, 'b>(&mut self, temp: impl Into<RawValue<'a>>, money: impl Into<RawValue<'b>>) {
        self.set_temp(temp);
        self.set_money(money);
    }

    pub fn set_temp<'a>(&mut self, value: impl Into<RawValue<'a>>) {
        self.apply_meter(Meter::Temp, Percentage::clamp(value));
    }

    pub fn set_money<'a>(&mut self, value: impl Into<RawValue<'a>>) {
        self.apply_meter(Meter::Money, Percentage::clamp(value));
    }

    /// Update all three slots; entries past the end of `words` clear.
    pub fn set_words<I, T>(&mut self, words: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut words = words.into_iter();
        for slot in SlotIndex::ALL {
            let word = words
                .next()
                .map_or_else(WordSlot::empty, |w| WordSlot::new(w.as_ref()));
            self.apply_word(slot, &word);
        }
    }

    /// Re-read the location and re-apply all five values.
    pub fn refresh(&mut self) {
        let params = HudParams::from_location(&self.location);
        self.apply(&params);
    }

    pub fn apply(&mut self, params: &HudParams) {
        debug!(temp = %params.temp, money = %params.money, "applying params");
        self.apply_meter(Meter::Temp, params.temp);
        self.apply_meter(Meter::Money, params.money);
        for (slot, word) in SlotIndex::ALL.into_iter().zip(params.words.iter()) {
            self.apply_word(slot, word);
        }
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn location_mut(&mut self) -> &mut L {
        &mut self.location
    }

    fn apply_meter(&mut self, meter: Meter, pct: Percentage) {
        let fill = match meter {
            Meter::Temp => self.palette.color_for_temp(pct),
            Meter::Money => self.palette.color_for_money(pct),
        };
        debug!(meter = meter.as_str(), %pct, %fill, "set meter");
        self.surface.set_meter(meter, pct, fill);
    }

    fn apply_word(&mut self, slot: SlotIndex, word: &WordSlot) {
        debug!(slot = slot.param_name(), word = word.as_str(), "set word");
        self.surface.set_word_slot(slot, word);
    }
}
