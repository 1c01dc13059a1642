use std::cell::RefCell;
use std::fmt;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use stockpulse_core::notice::{
    error_message_or_default, CLOSE_BUTTON_CLASS, ERROR_HIDE_MS, HIDDEN_CLASS,
    SUCCESS_ALERT_CLASS, SUCCESS_ALERT_STYLE, SUCCESS_ICON_CLASS, SUCCESS_REMOVE_MS,
};
use stockpulse_core::timing::TicketCounter;

use crate::config::PageConfig;
use crate::dom;
use crate::error::UiError;

thread_local! {
    static ERROR_BANNER: RefCell<ErrorBanner> = RefCell::new(ErrorBanner::default());
}

#[derive(Default)]
struct ErrorBanner {
    message_id: Option<String>,
    text_id: Option<String>,
    tickets: TicketCounter,
}

impl ErrorBanner {
    fn message_id(&self) -> String {
        self.message_id
            .clone()
            .unwrap_or_else(|| PageConfig::default().error_message_id)
    }

    fn text_id(&self) -> String {
        self.text_id
            .clone()
            .unwrap_or_else(|| PageConfig::default().error_text_id)
    }
}

/// Points the error banner at the configured elements.
pub(crate) fn configure(config: &PageConfig) {
    ERROR_BANNER.with(|slot| {
        let mut banner = slot.borrow_mut();
        banner.message_id = Some(config.error_message_id.clone());
        banner.text_id = Some(config.error_text_id.clone());
    });
}

/// Logs `error` and shows `user_message` (or the generic message) in the
/// page's error banner for a few seconds. A newer error restarts the timer.
pub fn handle_error(error: &dyn fmt::Display, user_message: Option<&str>) {
    gloo::console::error!("error:", error.to_string());
    show_error_message(error_message_or_default(user_message));
}

pub(crate) fn handle_ui_error(error: &UiError, user_message: &str) {
    handle_error(error, Some(user_message));
}

fn show_error_message(message: &str) {
    let (message_id, text_id, ticket) = ERROR_BANNER.with(|slot| {
        let mut banner = slot.borrow_mut();
        let ticket = banner.tickets.issue();
        (banner.message_id(), banner.text_id(), ticket)
    });
    let Some(banner) = dom::by_id(&message_id) else {
        return;
    };
    if let Some(text) = dom::by_id(&text_id) {
        text.set_text_content(Some(message));
    }
    dom::set_class(&banner, HIDDEN_CLASS, false);
    Timeout::new(ERROR_HIDE_MS, move || {
        let current = ERROR_BANNER.with(|slot| slot.borrow().tickets.is_current(ticket));
        if current {
            dom::set_class(&banner, HIDDEN_CLASS, true);
        }
    })
    .forget();
}

fn build_success_alert(message: &str) -> Result<HtmlElement, UiError> {
    let document = dom::document()?;
    let create = |tag: &str| -> Result<Element, UiError> {
        document
            .create_element(tag)
            .map_err(|err| UiError::js("create element", err))
    };
    let alert: HtmlElement = create("div")?
        .dyn_into()
        .map_err(|_| UiError::Unsupported("html alert element"))?;
    alert.set_class_name(SUCCESS_ALERT_CLASS);
    for (property, value) in SUCCESS_ALERT_STYLE {
        dom::set_style(&alert, property, Some(value));
    }

    let icon = create("i")?;
    icon.set_class_name(SUCCESS_ICON_CLASS);
    let text = document.create_text_node(message);
    let close = create("button")?;
    let _ = close.set_attribute("type", "button");
    let _ = close.set_attribute("data-bs-dismiss", "alert");
    let _ = close.set_attribute("aria-label", "Close");
    close.set_class_name(CLOSE_BUTTON_CLASS);

    for child in [&icon as &web_sys::Node, &text, &close] {
        alert
            .append_child(child)
            .map_err(|err| UiError::js("append alert child", err))?;
    }

    let alert_for_close = alert.clone();
    EventListener::once(&close, "click", move |_event| {
        alert_for_close.remove();
    })
    .forget();
    Ok(alert)
}

/// Shows a transient success alert in the corner of the page. The message
/// is inserted as text.
pub fn show_success(message: &str) {
    let alert = match build_success_alert(message) {
        Ok(alert) => alert,
        Err(err) => {
            gloo::console::warn!("success alert not shown", err.to_string());
            return;
        }
    };
    let Some(body) = dom::document().ok().and_then(|document| document.body()) else {
        return;
    };
    if let Err(err) = body.append_child(&alert) {
        gloo::console::warn!("success alert not shown", crate::error::js_err(err));
        return;
    }
    Timeout::new(SUCCESS_REMOVE_MS, move || {
        if alert.parent_node().is_some() {
            alert.remove();
        }
    })
    .forget();
}
