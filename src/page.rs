use std::cell::RefCell;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use js_sys::{Array, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::PromiseRejectionEvent;

use crate::actions;
use crate::autocomplete::{self, AutocompleteBinding};
use crate::config::{self, PageConfig};
use crate::dom;
use crate::forms;
use crate::menu::{self, MenuBinding};
use crate::notice;
use crate::scroll::{self, BackToTopBinding, FadeInObserver};
use crate::theme::{self, ThemeBinding};

thread_local! {
    static PAGE: RefCell<Option<Page>> = RefCell::new(None);
}

/// Everything wired onto the page. Dropping it detaches every listener.
pub(crate) struct Page {
    _menu: Option<MenuBinding>,
    _autocomplete: Option<AutocompleteBinding>,
    _theme: ThemeBinding,
    _back_to_top: Option<BackToTopBinding>,
    _fade_in: Option<FadeInObserver>,
    _listeners: Vec<EventListener>,
}

impl Page {
    fn attach(config: &PageConfig) -> Self {
        notice::configure(config);

        let menu = menu::install(config);
        let mut listeners = scroll::install_smooth_anchors(config);
        let fade_in = scroll::install_fade_in(config);
        listeners.extend(forms::install_submit_loading(config));
        let autocomplete = autocomplete::install(config);
        listeners.extend(actions::install_copy(config));
        listeners.extend(actions::install_share(config));
        listeners.extend(install_rejection_logger());
        listeners.extend(install_load_timing());
        forms::improve_accessibility(config);
        let theme = theme::install(config);
        let back_to_top = scroll::install_back_to_top(config);

        Self {
            _menu: menu,
            _autocomplete: autocomplete,
            _theme: theme,
            _back_to_top: back_to_top,
            _fade_in: fade_in,
            _listeners: listeners,
        }
    }
}

fn install_rejection_logger() -> Option<EventListener> {
    let window = web_sys::window()?;
    Some(EventListener::new(&window, "unhandledrejection", |event| {
        let reason = event
            .dyn_ref::<PromiseRejectionEvent>()
            .map(|event| event.reason())
            .unwrap_or(JsValue::UNDEFINED);
        gloo::console::error!("unhandled promise rejection:", reason);
    }))
}

fn navigation_load_ms() -> Option<f64> {
    let performance = web_sys::window()?.performance()?;
    let entries: Array = performance.get_entries_by_type("navigation");
    let entry = entries.get(0);
    if entry.is_undefined() {
        return None;
    }
    let field = |name: &str| {
        Reflect::get(&entry, &JsValue::from_str(name))
            .ok()
            .and_then(|value| value.as_f64())
    };
    Some(field("loadEventEnd")? - field("loadEventStart")?)
}

fn install_load_timing() -> Option<EventListener> {
    let window = web_sys::window()?;
    window.performance()?;
    Some(EventListener::once(&window, "load", |_event| {
        // loadEventEnd is only filled in after the load handlers return.
        Timeout::new(0, || {
            if let Some(load_ms) = navigation_load_ms() {
                gloo::console::log!("page load time:", load_ms, "ms");
            }
        })
        .forget();
    }))
}

pub(crate) fn attach_now() {
    let config = config::load_page_config();
    let page = Page::attach(&config);
    PAGE.with(|slot| {
        *slot.borrow_mut() = Some(page);
    });
}

pub(crate) fn is_attached() -> bool {
    PAGE.with(|slot| slot.borrow().is_some())
}

/// Wires the page once the DOM is parsed.
pub(crate) fn boot() {
    if is_attached() {
        return;
    }
    let Ok(document) = dom::document() else {
        gloo::console::error!("no document, page behavior disabled");
        return;
    };
    let ready_state = Reflect::get(&document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|value| value.as_string());
    if ready_state.as_deref() != Some("loading") {
        attach_now();
        return;
    }
    EventListener::once(&document, "DOMContentLoaded", |_event| {
        if !is_attached() {
            attach_now();
        }
    })
    .forget();
}
