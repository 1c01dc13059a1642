use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions,
};

use stockpulse_core::scroll::{
    anchor_target, back_to_top_display, FADE_IN_CLASS, FADE_IN_ROOT_MARGIN, FADE_IN_THRESHOLD,
};

use crate::config::PageConfig;
use crate::dom;
use crate::error::{js_err, UiError};

pub(crate) struct BackToTopBinding {
    _listeners: Vec<EventListener>,
}

fn render_back_to_top(button: &HtmlElement) {
    dom::set_style(
        button,
        "display",
        Some(back_to_top_display(dom::scroll_offset())),
    );
}

pub(crate) fn install_back_to_top(config: &PageConfig) -> Option<BackToTopBinding> {
    let button = dom::html_by_id(&config.back_to_top_id)?;
    let window = web_sys::window()?;
    let click = EventListener::new_with_options(
        &button,
        "click",
        EventListenerOptions::enable_prevent_default(),
        |event: &Event| {
            event.prevent_default();
            gloo::console::log!("back to top clicked");
            let Some(window) = web_sys::window() else {
                return;
            };
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        },
    );
    let scroll_button = button.clone();
    let scroll = EventListener::new(&window, "scroll", move |_event| {
        render_back_to_top(&scroll_button);
    });
    Some(BackToTopBinding {
        _listeners: vec![click, scroll],
    })
}

/// Adds the fade-in class to cards once they scroll into view.
pub(crate) struct FadeInObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl FadeInObserver {
    pub(crate) fn new() -> Result<Self, UiError> {
        let callback = Closure::wrap(Box::new(
            |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    dom::set_class(&target, FADE_IN_CLASS, true);
                    observer.unobserve(&target);
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(FADE_IN_THRESHOLD));
        options.set_root_margin(FADE_IN_ROOT_MARGIN);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|err| UiError::js("intersection observer", err))?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub(crate) fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for FadeInObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub(crate) fn install_fade_in(config: &PageConfig) -> Option<FadeInObserver> {
    let observer = match FadeInObserver::new() {
        Ok(observer) => observer,
        Err(err) => {
            gloo::console::warn!("card fade-in disabled", err.to_string());
            return None;
        }
    };
    for card in dom::query_all(&config.card_selector) {
        observer.observe(&card);
    }
    Some(observer)
}

fn scroll_to_anchor(href: &str) {
    let Some(selector) = anchor_target(href) else {
        return;
    };
    let Ok(document) = dom::document() else {
        return;
    };
    let target = match document.query_selector(selector) {
        Ok(target) => target,
        Err(err) => {
            gloo::console::warn!("anchor not resolvable", selector, js_err(err));
            return;
        }
    };
    if let Some(target) = target {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

pub(crate) fn install_smooth_anchors(config: &PageConfig) -> Vec<EventListener> {
    dom::query_all(&config.anchor_selector)
        .into_iter()
        .map(|anchor| {
            let href_source = anchor.clone();
            EventListener::new_with_options(
                &anchor,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event: &Event| {
                    event.prevent_default();
                    if let Some(href) = href_source.get_attribute("href") {
                        scroll_to_anchor(&href);
                    }
                },
            )
        })
        .collect()
}
