use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::UiError;

pub fn window() -> Result<Window, UiError> {
    web_sys::window().ok_or(UiError::NoWindow)
}

pub fn document() -> Result<Document, UiError> {
    window()?.document().ok_or(UiError::NoDocument)
}

pub fn by_id(id: &str) -> Option<Element> {
    document().ok()?.get_element_by_id(id)
}

pub fn html_by_id(id: &str) -> Option<HtmlElement> {
    by_id(id)?.dyn_into::<HtmlElement>().ok()
}

/// Elements matching `selector`, in document order. An invalid selector
/// yields an empty list.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Ok(document) = document() else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(selector) else {
        gloo::console::warn!("invalid selector", selector);
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|idx| nodes.get(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_all_html(selector: &str) -> Vec<HtmlElement> {
    query_all(selector)
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn set_class(element: &Element, class: &str, present: bool) {
    let list = element.class_list();
    let _ = if present {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
}

pub fn set_style(element: &HtmlElement, property: &str, value: Option<&str>) {
    let style = element.style();
    match value {
        Some(value) => {
            let _ = style.set_property(property, value);
        }
        None => {
            let _ = style.remove_property(property);
        }
    }
}

pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}
