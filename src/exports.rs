//! Functions other page scripts call directly, under their JavaScript names.

use js_sys::Function;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use crate::error::js_err;
use crate::format;
use crate::notice;
use crate::timing;

fn forward(func: &Function, arg: &JsValue) {
    if let Err(err) = func.call1(&JsValue::UNDEFINED, arg) {
        gloo::console::error!("wrapped callback failed:", err);
    }
}

fn into_function(closure: Closure<dyn FnMut(JsValue)>) -> Function {
    closure.into_js_value().unchecked_into::<Function>()
}

#[wasm_bindgen(js_name = formatNumber)]
pub fn format_number(value: f64) -> String {
    format::format_number(value)
}

#[wasm_bindgen(js_name = formatPercentage)]
pub fn format_percentage(value: f64) -> String {
    format::format_percentage(value)
}

#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(epoch_seconds: f64) -> String {
    format::format_date(epoch_seconds)
}

#[wasm_bindgen(js_name = handleError)]
pub fn handle_error(error: JsValue, user_message: Option<String>) {
    let detail = js_err(error);
    notice::handle_error(&detail, user_message.as_deref());
}

#[wasm_bindgen(js_name = showSuccess)]
pub fn show_success(message: &str) {
    notice::show_success(message);
}

/// Trailing-edge debounce of a one-argument JavaScript function.
#[wasm_bindgen(js_name = debounce)]
pub fn debounce(func: Function, wait_ms: u32) -> Function {
    let debounced = timing::debounce(move |arg: JsValue| forward(&func, &arg), wait_ms);
    into_function(Closure::wrap(Box::new(move |arg: JsValue| debounced.call(arg))
        as Box<dyn FnMut(JsValue)>))
}

/// Leading-edge throttle of a one-argument JavaScript function.
#[wasm_bindgen(js_name = throttle)]
pub fn throttle(func: Function, limit_ms: u32) -> Function {
    let throttled = timing::throttle(move |arg: JsValue| forward(&func, &arg), limit_ms);
    into_function(Closure::wrap(Box::new(move |arg: JsValue| throttled.call(arg))
        as Box<dyn FnMut(JsValue)>))
}
