use wasm_bindgen::prelude::*;

pub mod actions;
mod autocomplete;
pub mod config;
pub mod dom;
pub mod error;
pub mod exports;
pub mod format;
mod forms;
mod menu;
pub mod notice;
mod page;
mod scroll;
mod theme;
pub mod timing;

pub use error::UiError;

#[wasm_bindgen(start)]
pub fn start() {
    // Under wasm-bindgen-test the runner owns the document.
    #[cfg(not(test))]
    page::boot();
}
