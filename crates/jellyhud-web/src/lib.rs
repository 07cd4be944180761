#![forbid(unsafe_code)]

//! Browser binding for the JellyHUD overlay.
//!
//! Loading the wasm module installs the overlay once per page: it waits for
//! the document to be parsed, builds the DOM surface, applies the URL inputs
//! and exposes `window.JellyHUD` with `set`, `setTemp`, `setMoney`,
//! `setWords` and `refresh`.
//!
//! Stylesheet generation lives in [`style`] and is plain Rust so it can be
//! tested natively. The DOM glue only compiles on `wasm32`.

pub mod style;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::install;
