#![forbid(unsafe_code)]

//! DOM implementations of the core's host capabilities.

use jellyhud_core::{
    Layout, LocationSource, Meter, Percentage, Rgb, SlotIndex, Surface, SurfaceError, ThemeSource,
    WordSlot,
};
use tracing::trace;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Location, Window};

use crate::style::{
    CLASS_FILL, CLASS_HIDDEN, CLASS_LABEL, CLASS_METERS, CLASS_TRACK, CLASS_WORD, CLASS_WORDS,
    style_id,
};

/// Non-breaking space keeps an empty slot one line tall.
const BLANK_SLOT_TEXT: &str = "\u{a0}";

fn host_err(err: JsValue) -> SurfaceError {
    SurfaceError::Host(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// Overlay elements under a fixed root in the page's `<body>`.
pub struct DomSurface {
    document: Document,
    layout: Layout,
    css: String,
}

impl DomSurface {
    pub fn new(document: Document, layout: Layout, css: String) -> Self {
        Self {
            document,
            layout,
            css,
        }
    }

    fn element(&self, tag: &str, id: Option<&str>, class: &str) -> Result<Element, SurfaceError> {
        let el = self.document.create_element(tag).map_err(host_err)?;
        if let Some(id) = id {
            el.set_id(id);
        }
        if !class.is_empty() {
            el.set_class_name(class);
        }
        Ok(el)
    }

    fn styled(&self, id: &str) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    fn install_stylesheet(&self, layout: &Layout) -> Result<(), SurfaceError> {
        let id = style_id(layout);
        if self.document.get_element_by_id(&id).is_some() {
            return Ok(());
        }
        let style = self.element("style", Some(&id), "")?;
        style.set_text_content(Some(&self.css));
        let parent: Element = match self.document.head() {
            Some(head) => head.into(),
            None => self
                .document
                .body()
                .ok_or(SurfaceError::NoHost("document body"))?
                .into(),
        };
        parent.append_child(&style).map_err(host_err)?;
        Ok(())
    }

    fn build_meter(&self, layout: &Layout, meter: Meter) -> Result<Element, SurfaceError> {
        let track = self.element(
            "div",
            Some(&layout.meter_id(meter)),
            &format!("{CLASS_TRACK} {CLASS_TRACK}-{}", meter.as_str()),
        )?;
        let fill = self.element("div", Some(&layout.fill_id(meter)), CLASS_FILL)?;
        let label = self.element("span", Some(&layout.label_id(meter)), CLASS_LABEL)?;
        label.set_text_content(Some(meter.caption()));
        track.append_child(&fill).map_err(host_err)?;
        track.append_child(&label).map_err(host_err)?;
        Ok(track)
    }
}

impl Surface for DomSurface {
    fn exists(&self) -> bool {
        self.document
            .get_element_by_id(self.layout.root_id())
            .is_some()
    }

    fn create(&mut self, layout: &Layout) -> Result<(), SurfaceError> {
        let body = self
            .document
            .body()
            .ok_or(SurfaceError::NoHost("document body"))?;
        self.install_stylesheet(layout)?;

        let root = self.element("div", Some(layout.root_id()), "")?;
        root.set_attribute("aria-hidden", "true").map_err(host_err)?;

        let meters = self.element("div", None, CLASS_METERS)?;
        for meter in Meter::ALL {
            meters
                .append_child(&self.build_meter(layout, meter)?)
                .map_err(host_err)?;
        }

        let words = self.element("div", None, CLASS_WORDS)?;
        for slot in SlotIndex::ALL {
            let word = self.element(
                "div",
                Some(&layout.slot_id(slot)),
                &format!("{CLASS_WORD} {CLASS_HIDDEN}"),
            )?;
            word.set_text_content(Some(BLANK_SLOT_TEXT));
            words.append_child(&word).map_err(host_err)?;
        }

        root.append_child(&meters).map_err(host_err)?;
        root.append_child(&words).map_err(host_err)?;
        body.append_child(&root).map_err(host_err)?;
        self.layout = layout.clone();
        Ok(())
    }

    fn set_meter(&mut self, meter: Meter, pct: Percentage, fill: Rgb) {
        let id = self.layout.fill_id(meter);
        let Some(el) = self.styled(&id) else {
            trace!(id = %id, "meter fill missing");
            return;
        };
        let style = el.style();
        if let Err(err) = style.set_property("width", &format!("{}%", pct.get())) {
            trace!(id = %id, ?err, "fill width rejected");
        }
        if let Err(err) = style.set_property("background-color", &fill.to_css()) {
            trace!(id = %id, ?err, "fill color rejected");
        }
        if let Some(track) = self.document.get_element_by_id(&self.layout.meter_id(meter)) {
            if let Err(err) = track.set_attribute("data-pct", &pct.get().to_string()) {
                trace!(meter = meter.as_str(), ?err, "data-pct rejected");
            }
        }
    }

    fn set_word_slot(&mut self, slot: SlotIndex, word: &WordSlot) {
        let id = self.layout.slot_id(slot);
        let Some(el) = self.document.get_element_by_id(&id) else {
            trace!(id = %id, "word slot missing");
            return;
        };
        let text = if word.is_blank() {
            BLANK_SLOT_TEXT
        } else {
            word.as_str()
        };
        el.set_text_content(Some(text));
        if let Err(err) = el
            .class_list()
            .toggle_with_force(CLASS_HIDDEN, word.is_blank())
        {
            trace!(id = %id, ?err, "hidden class toggle rejected");
        }
    }
}

/// Theme colors from the document element's computed style.
pub struct DomTheme {
    window: Window,
    document: Document,
}

impl DomTheme {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }
}

impl ThemeSource for DomTheme {
    fn color_var(&self, name: &str) -> Option<String> {
        let root = self.document.document_element()?;
        let computed = self.window.get_computed_style(&root).ok()??;
        computed.get_property_value(name).ok()
    }
}

/// The page's live `window.location`.
pub struct DomLocation {
    location: Location,
}

impl DomLocation {
    pub fn new(location: Location) -> Self {
        Self { location }
    }
}

impl LocationSource for DomLocation {
    fn query(&self) -> Option<String> {
        self.location.search().ok()
    }

    fn fragment(&self) -> Option<String> {
        self.location.hash().ok()
    }
}
