use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Element, Navigator};

use stockpulse_core::actions::{
    is_share_cancellation, CopyOutcome, SharePayload, COPY_FEEDBACK_MS, IDLE_BUTTON_CLASS,
};
use stockpulse_core::timing::FeedbackSlot;

use crate::config::PageConfig;
use crate::dom;
use crate::error::UiError;
use crate::notice;

const COPY_TEXT_ATTR: &str = "data-copy-text";
const SHARE_TEXT_ATTR: &str = "data-share-text";

/// Something that can put text on the system clipboard.
#[allow(async_fn_in_trait)]
pub trait ClipboardWriter {
    async fn write_text(&self, text: &str) -> Result<(), UiError>;
}

fn navigator() -> Result<Navigator, UiError> {
    Ok(dom::window()?.navigator())
}

fn method(target: &JsValue, name: &str) -> Option<Function> {
    let value = Reflect::get(target, &JsValue::from_str(name)).ok()?;
    value.dyn_into::<Function>().ok()
}

async fn await_promise(value: JsValue, context: &'static str) -> Result<JsValue, UiError> {
    let promise = value
        .dyn_into::<Promise>()
        .map_err(|_| UiError::Unsupported(context))?;
    JsFuture::from(promise)
        .await
        .map_err(|err| UiError::js(context, err))
}

/// `navigator.clipboard`, looked up per call.
pub struct NavigatorClipboard;

impl ClipboardWriter for NavigatorClipboard {
    async fn write_text(&self, text: &str) -> Result<(), UiError> {
        let navigator = navigator()?;
        let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .map_err(|err| UiError::js("clipboard", err))?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(UiError::Unsupported("clipboard"));
        }
        let write = method(&clipboard, "writeText").ok_or(UiError::Unsupported("clipboard"))?;
        let promise = write
            .call1(&clipboard, &JsValue::from_str(text))
            .map_err(|err| UiError::js("clipboard write", err))?;
        await_promise(promise, "clipboard write").await?;
        Ok(())
    }
}

fn show_feedback(button: &Element, slot: &Rc<RefCell<FeedbackSlot>>, outcome: CopyOutcome) {
    let ticket = slot.borrow_mut().begin(button.inner_html());
    button.set_inner_html(outcome.label_html());
    for class in CopyOutcome::all_button_classes() {
        dom::set_class(button, class, false);
    }
    dom::set_class(button, outcome.button_class(), true);
    dom::set_class(button, IDLE_BUTTON_CLASS, false);

    let button = button.clone();
    let slot = slot.clone();
    Timeout::new(COPY_FEEDBACK_MS, move || {
        let Some(original) = slot.borrow_mut().finish(ticket) else {
            return;
        };
        button.set_inner_html(&original);
        for class in CopyOutcome::all_button_classes() {
            dom::set_class(&button, class, false);
        }
        dom::set_class(&button, IDLE_BUTTON_CLASS, true);
    })
    .forget();
}

/// Copies `text` and flips the button into its success or failure state
/// for a couple of seconds.
pub async fn copy_with_feedback<C: ClipboardWriter>(
    clipboard: &C,
    button: &Element,
    slot: &Rc<RefCell<FeedbackSlot>>,
    text: &str,
) -> CopyOutcome {
    let outcome = match clipboard.write_text(text).await {
        Ok(()) => CopyOutcome::Copied,
        Err(err) => {
            gloo::console::error!("failed to copy text:", err.to_string());
            CopyOutcome::Failed
        }
    };
    show_feedback(button, slot, outcome);
    outcome
}

pub(crate) fn install_copy(config: &PageConfig) -> Vec<EventListener> {
    dom::query_all(&config.copy_button_selector)
        .into_iter()
        .map(|button| {
            let slot = Rc::new(RefCell::new(FeedbackSlot::new()));
            let target = button.clone();
            EventListener::new(&button, "click", move |_event| {
                let Some(text) = target.get_attribute(COPY_TEXT_ATTR) else {
                    gloo::console::warn!("copy button without", COPY_TEXT_ATTR);
                    return;
                };
                let button = target.clone();
                let slot = slot.clone();
                spawn_local(async move {
                    copy_with_feedback(&NavigatorClipboard, &button, &slot, &text).await;
                });
            })
        })
        .collect()
}

/// Something that can hand a result to the platform share sheet.
#[allow(async_fn_in_trait)]
pub trait ShareTarget {
    async fn share(&self, payload: &SharePayload) -> Result<(), UiError>;
}

/// `navigator.share`, looked up per call.
pub struct NavigatorShare;

pub fn share_supported() -> bool {
    navigator()
        .ok()
        .and_then(|navigator| method(&navigator, "share"))
        .is_some()
}

impl ShareTarget for NavigatorShare {
    async fn share(&self, payload: &SharePayload) -> Result<(), UiError> {
        let navigator = navigator()?;
        let share = method(&navigator, "share").ok_or(UiError::Unsupported("share"))?;
        let data = Object::new();
        for (key, value) in [
            ("title", &payload.title),
            ("text", &payload.text),
            ("url", &payload.url),
        ] {
            Reflect::set(&data, &JsValue::from_str(key), &JsValue::from_str(value))
                .map_err(|err| UiError::js("share data", err))?;
        }
        let promise = share
            .call1(&navigator, &data)
            .map_err(|err| UiError::js("share", err))?;
        await_promise(promise, "share").await?;
        Ok(())
    }
}

/// Shares `payload`. A cancelled share sheet is only logged; any other
/// failure also raises the error banner.
pub async fn share_with_report<T: ShareTarget>(target: &T, payload: &SharePayload) {
    let Err(err) = target.share(payload).await else {
        return;
    };
    let cancelled = err.js_name().map(is_share_cancellation).unwrap_or(false);
    if cancelled {
        gloo::console::log!("share cancelled:", err.to_string());
        return;
    }
    notice::handle_ui_error(&err, "Sharing failed");
}

pub(crate) fn install_share(config: &PageConfig) -> Vec<EventListener> {
    if !share_supported() {
        return Vec::new();
    }
    dom::query_all(&config.share_button_selector)
        .into_iter()
        .map(|button| {
            let title = config.share_title.clone();
            let target = button.clone();
            EventListener::new(&button, "click", move |_event| {
                let text = target.get_attribute(SHARE_TEXT_ATTR).unwrap_or_default();
                let url = web_sys::window()
                    .and_then(|window| window.location().href().ok())
                    .unwrap_or_default();
                let payload = SharePayload::new(&title, &text, &url);
                spawn_local(async move {
                    share_with_report(&NavigatorShare, &payload).await;
                });
            })
        })
        .collect()
}
