#![forbid(unsafe_code)]

//! Headless surface for tests and native hosts.
//!
//! `HeadlessSurface` keeps the overlay state in memory so the full pipeline
//! can be exercised without a browser.
//!
//! ```
//! use jellyhud_core::{HeadlessSurface, Layout, Meter, Percentage, Rgb, Surface};
//!
//! let mut surface = HeadlessSurface::new();
//! surface.set_meter(Meter::Temp, Percentage::FULL, Rgb::new(255, 0, 0));
//! assert!(surface.meter(Meter::Temp).is_none()); // not created yet
//!
//! surface.create(&Layout::new("hud", 28, 0.62)).unwrap();
//! surface.set_meter(Meter::Temp, Percentage::FULL, Rgb::new(255, 0, 0));
//! assert_eq!(surface.meter(Meter::Temp).unwrap().width_css(), "100%");
//! ```

use crate::clamp::Percentage;
use crate::color::Rgb;
use crate::surface::{Layout, Meter, SLOT_COUNT, SlotIndex, Surface, SurfaceError, WordSlot};

/// Rendered state of one bar meter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeterState {
    pub pct: Percentage,
    pub fill: Rgb,
}

impl MeterState {
    #[must_use]
    pub fn width_css(&self) -> String {
        format!("{}%", self.pct.get())
    }
}

/// Rendered state of one word slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotState {
    pub text: String,
    pub visible: bool,
}

#[derive(Debug, Clone)]
struct Created {
    layout: Layout,
    meters: [MeterState; 2],
    slots: [SlotState; SLOT_COUNT],
}

/// In-memory [`Surface`].
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    created: Option<Created>,
    create_calls: usize,
    fail_create: Option<String>,
}

impl HeadlessSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface whose `create` always fails with `msg`.
    #[must_use]
    pub fn failing(msg: &str) -> Self {
        Self {
            fail_create: Some(msg.to_string()),
            ..Self::default()
        }
    }

    /// How many times the layout was actually built.
    #[must_use]
    pub fn create_calls(&self) -> usize {
        self.create_calls
    }

    #[must_use]
    pub fn layout(&self) -> Option<&Layout> {
        self.created.as_ref().map(|c| &c.layout)
    }

    #[must_use]
    pub fn meter(&self, meter: Meter) -> Option<&MeterState> {
        self.created.as_ref().map(|c| &c.meters[meter_slot(meter)])
    }

    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&SlotState> {
        let slot = SlotIndex::new(index)?;
        self.created.as_ref().map(|c| &c.slots[slot.get()])
    }

    /// Visible slot text; `None` when the slot is hidden or missing.
    #[must_use]
    pub fn slot_text(&self, index: usize) -> Option<&str> {
        self.slot(index)
            .filter(|s| s.visible)
            .map(|s| s.text.as_str())
    }
}

fn meter_slot(meter: Meter) -> usize {
    match meter {
        Meter::Temp => 0,
        Meter::Money => 1,
    }
}

impl Surface for HeadlessSurface {
    fn exists(&self) -> bool {
        self.created.is_some()
    }

    fn create(&mut self, layout: &Layout) -> Result<(), SurfaceError> {
        if let Some(msg) = &self.fail_create {
            return Err(SurfaceError::Host(msg.clone()));
        }
        self.create_calls += 1;
        let empty_meter = MeterState {
            pct: Percentage::ZERO,
            fill: Rgb::new(0, 0, 0),
        };
        self.created = Some(Created {
            layout: layout.clone(),
            meters: [empty_meter.clone(), empty_meter],
            slots: Default::default(),
        });
        Ok(())
    }

    fn set_meter(&mut self, meter: Meter, pct: Percentage, fill: Rgb) {
        let Some(created) = self.created.as_mut() else {
            return;
        };
        created.meters[meter_slot(meter)] = MeterState { pct, fill };
    }

    fn set_word_slot(&mut self, slot: SlotIndex, word: &WordSlot) {
        let Some(created) = self.created.as_mut() else {
            return;
        };
        created.slots[slot.get()] = SlotState {
            text: word.as_str().to_string(),
            visible: !word.is_blank(),
        };
    }
}
