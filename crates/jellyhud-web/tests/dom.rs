#![cfg(target_arch = "wasm32")]
#![forbid(unsafe_code)]

//! Browser tests for the installed overlay.
//!
//! Run with: `wasm-pack test --headless --firefox crates/jellyhud-web`

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn api_fn(name: &str) -> Function {
    let window = web_sys::window().unwrap();
    let api = Reflect::get(&window, &JsValue::from_str("JellyHUD")).unwrap();
    Reflect::get(&api, &JsValue::from_str(name))
        .unwrap()
        .dyn_into::<Function>()
        .unwrap()
}

#[wasm_bindgen_test]
fn install_is_idempotent() {
    jellyhud_web::install();
    jellyhud_web::install();
    let roots = document().query_selector_all("#jelly-hud").unwrap();
    assert_eq!(roots.length(), 1);
    let styles = document().query_selector_all("#jelly-hud-style").unwrap();
    assert_eq!(styles.length(), 1);
}

#[wasm_bindgen_test]
fn set_words_updates_and_hides_slots() {
    jellyhud_web::install();
    let words = Array::of1(&JsValue::from_str("  A "));
    api_fn("setWords").call1(&JsValue::NULL, &words).unwrap();

    let w1 = document().get_element_by_id("jelly-hud-w1").unwrap();
    let w2 = document().get_element_by_id("jelly-hud-w2").unwrap();
    assert_eq!(w1.text_content().as_deref(), Some("A"));
    assert!(!w1.class_list().contains("jh-hidden"));
    assert!(w2.class_list().contains("jh-hidden"));
}

#[wasm_bindgen_test]
fn set_clamps_and_fills() {
    jellyhud_web::install();
    api_fn("set")
        .call2(&JsValue::NULL, &JsValue::from_f64(250.0), &JsValue::from_str("x"))
        .unwrap();

    let temp = document().get_element_by_id("jelly-hud-temp").unwrap();
    let money = document().get_element_by_id("jelly-hud-money").unwrap();
    assert_eq!(temp.get_attribute("data-pct").as_deref(), Some("100"));
    assert_eq!(money.get_attribute("data-pct").as_deref(), Some("0"));
}

#[wasm_bindgen_test]
fn overlay_ignores_pointer_input() {
    jellyhud_web::install();
    let window = web_sys::window().unwrap();
    let root = document().get_element_by_id("jelly-hud").unwrap();
    let style = window.get_computed_style(&root).unwrap().unwrap();
    assert_eq!(style.get_property_value("pointer-events").unwrap(), "none");
    assert_eq!(style.get_property_value("position").unwrap(), "fixed");
}

#[wasm_bindgen_test]
fn blank_word_hides_a_shown_slot_again() {
    jellyhud_web::install();
    let set_words = api_fn("setWords");
    set_words
        .call1(&JsValue::NULL, &Array::of3(&"a".into(), &"b".into(), &"c".into()))
        .unwrap();
    let w3 = document().get_element_by_id("jelly-hud-w3").unwrap();
    assert!(!w3.class_list().contains("jh-hidden"));

    set_words
        .call1(&JsValue::NULL, &Array::of3(&"a".into(), &"b".into(), &" ".into()))
        .unwrap();
    assert!(w3.class_list().contains("jh-hidden"));
    assert_eq!(w3.text_content().as_deref(), Some("\u{a0}"));
}
