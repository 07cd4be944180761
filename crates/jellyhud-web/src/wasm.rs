#![forbid(unsafe_code)]

//! `wasm-bindgen` entry point and the `window.JellyHUD` global.
//!
//! Only compiled on `wasm32` targets.

use std::cell::{Cell, RefCell};

use js_sys::{Array, Object, Reflect};
use jellyhud_core::{Hud, HudConfig, InitOutcome, Palette, RawValue};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::dom::{DomLocation, DomSurface, DomTheme};
use crate::style::stylesheet;

/// Optional page-provided configuration object.
const CONFIG_GLOBAL: &str = "JellyHUDConfig";

type DomHud = Hud<DomSurface, DomLocation>;

thread_local! {
    static HUD: RefCell<Option<DomHud>> = const { RefCell::new(None) };
    static INSTALLED: Cell<bool> = const { Cell::new(false) };
}

fn console_error(msg: &str) {
    let global = js_sys::global();
    let Ok(console) = Reflect::get(&global, &"console".into()) else {
        return;
    };
    let Ok(error) = Reflect::get(&console, &"error".into()) else {
        return;
    };
    let Ok(error_fn) = error.dyn_into::<js_sys::Function>() else {
        return;
    };
    let _ = error_fn.call1(&console, &JsValue::from_str(msg));
}

fn install_panic_hook() {
    use std::sync::Once;

    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let msg = match info.location() {
                Some(loc) => format!("JellyHUD panic at {}:{}: {info}", loc.file(), loc.line()),
                None => format!("JellyHUD panic: {info}"),
            };
            console_error(&msg);
        }));
    });
}

#[wasm_bindgen(start)]
pub fn wasm_start() {
    install_panic_hook();
    install();
}

/// Install the overlay and its global entry point. At most once per page.
#[wasm_bindgen]
pub fn install() {
    if INSTALLED.with(|flag| flag.replace(true)) {
        return;
    }
    if let Err(err) = try_install() {
        console_error(&format!("JellyHUD init failed: {}", describe(&err)));
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

fn try_install() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let config = read_config(&window);

    // Another copy of the script already owns the global.
    if Reflect::has(&window, &JsValue::from_str(&config.global_name))? {
        return Ok(());
    }
    expose_api(&window, &config.global_name)?;

    if document.ready_state() == "loading" {
        let target = document.clone();
        let ready = Closure::once(move || {
            if let Err(err) = boot(&window, &document, &config) {
                console_error(&format!("JellyHUD init failed: {}", describe(&err)));
            }
        });
        target
            .add_event_listener_with_callback("DOMContentLoaded", ready.as_ref().unchecked_ref())?;
        ready.forget();
        Ok(())
    } else {
        boot(&window, &document, &config)
    }
}

fn boot(window: &Window, document: &Document, config: &HudConfig) -> Result<(), JsValue> {
    let layout = config.layout();
    let palette = Palette::resolve(&DomTheme::new(window.clone(), document.clone()), config);
    let surface = DomSurface::new(document.clone(), layout.clone(), stylesheet(&layout, config));
    let mut hud = Hud::new(surface, DomLocation::new(window.location()), palette, layout);
    let outcome = hud.init();
    HUD.with(|slot| *slot.borrow_mut() = Some(hud));
    if outcome == InitOutcome::Failed {
        return Err(JsValue::from_str("could not build the overlay surface"));
    }
    Ok(())
}

/// Run `f` against the installed HUD; a no-op before boot or on re-entry.
fn with_hud(f: impl FnOnce(&mut DomHud)) {
    HUD.with(|slot| {
        let Ok(mut guard) = slot.try_borrow_mut() else {
            return;
        };
        if let Some(hud) = guard.as_mut() {
            f(hud);
        }
    });
}

/// A JS argument, owned so it can be lent out as a [`RawValue`].
enum JsInput {
    Missing,
    Number(f64),
    Text(String),
}

impl JsInput {
    fn from_js(value: &JsValue) -> Self {
        if let Some(n) = value.as_f64() {
            Self::Number(n)
        } else if let Some(s) = value.as_string() {
            Self::Text(s)
        } else {
            Self::Missing
        }
    }

    fn raw(&self) -> RawValue<'_> {
        match self {
            Self::Missing => RawValue::Missing,
            Self::Number(n) => RawValue::Number(*n),
            Self::Text(s) => RawValue::Text(s),
        }
    }
}

fn js_text(value: &JsValue) -> String {
    match JsInput::from_js(value) {
        JsInput::Text(s) => s,
        JsInput::Number(n) => n.to_string(),
        JsInput::Missing => String::new(),
    }
}

fn expose_api(window: &Window, global_name: &str) -> Result<(), JsValue> {
    let api = Object::new();

    let set = Closure::<dyn Fn(JsValue, JsValue)>::new(|temp: JsValue, money: JsValue| {
        let (temp, money) = (JsInput::from_js(&temp), JsInput::from_js(&money));
        with_hud(|hud| hud.set(temp.raw(), money.raw()));
    });
    Reflect::set(&api, &"set".into(), set.as_ref())?;
    set.forget();

    let set_temp = Closure::<dyn Fn(JsValue)>::new(|value: JsValue| {
        let value = JsInput::from_js(&value);
        with_hud(|hud| hud.set_temp(value.raw()));
    });
    Reflect::set(&api, &"setTemp".into(), set_temp.as_ref())?;
    set_temp.forget();

    let set_money = Closure::<dyn Fn(JsValue)>::new(|value: JsValue| {
        let value = JsInput::from_js(&value);
        with_hud(|hud| hud.set_money(value.raw()));
    });
    Reflect::set(&api, &"setMoney".into(), set_money.as_ref())?;
    set_money.forget();

    let set_words = Closure::<dyn Fn(JsValue)>::new(|words: JsValue| {
        let words: Vec<String> = if Array::is_array(&words) {
            Array::from(&words).iter().map(|w| js_text(&w)).collect()
        } else {
            Vec::new()
        };
        with_hud(|hud| hud.set_words(&words));
    });
    Reflect::set(&api, &"setWords".into(), set_words.as_ref())?;
    set_words.forget();

    let refresh = Closure::<dyn Fn()>::new(|| with_hud(|hud| hud.refresh()));
    Reflect::set(&api, &"refresh".into(), refresh.as_ref())?;
    refresh.forget();

    Reflect::set(window, &JsValue::from_str(global_name), &api)?;
    Ok(())
}

/// `window.JellyHUDConfig`, accepting snake_case or camelCase keys.
fn read_config(window: &Window) -> HudConfig {
    let Ok(obj) = Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL)) else {
        return HudConfig::default();
    };
    if !obj.is_object() {
        return HudConfig::default();
    }
    HudConfig::from_lookup(|key| {
        [key.to_string(), camel_case(key)].iter().find_map(|k| {
            let value = Reflect::get(&obj, &JsValue::from_str(k)).ok()?;
            if value.is_undefined() || value.is_null() {
                None
            } else {
                Some(js_text(&value))
            }
        })
    })
}

fn camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper = false;
    for ch in key.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            out.push(ch.to_ascii_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}
