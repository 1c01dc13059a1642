use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("window unavailable")]
    NoWindow,
    #[error("document unavailable")]
    NoDocument,
    #[error("{0} unsupported in this browser")]
    Unsupported(&'static str),
    #[error("{context}: {message}")]
    Js {
        context: &'static str,
        message: String,
        name: Option<String>,
    },
}

impl UiError {
    pub fn js(context: &'static str, error: JsValue) -> Self {
        let name = js_sys::Reflect::get(&error, &JsValue::from_str("name"))
            .ok()
            .and_then(|value| value.as_string());
        UiError::Js {
            context,
            message: js_err(error),
            name,
        }
    }

    /// DOMException name for platform failures (`AbortError`, ...).
    pub fn js_name(&self) -> Option<&str> {
        match self {
            UiError::Js { name, .. } => name.as_deref(),
            _ => None,
        }
    }
}

pub fn js_err(error: JsValue) -> String {
    if let Some(value) = error.as_string() {
        return value;
    }
    if let Some(error) = error.dyn_ref::<js_sys::Error>() {
        return String::from(error.to_string());
    }
    if let Ok(json) = js_sys::JSON::stringify(&error) {
        if let Some(value) = json.as_string() {
            return value;
        }
    }
    "js error".to_string()
}
