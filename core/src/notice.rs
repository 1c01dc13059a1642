pub const ERROR_HIDE_MS: u32 = 5000;
pub const SUCCESS_REMOVE_MS: u32 = 3000;

pub const DEFAULT_ERROR_MESSAGE: &str = "An unexpected error occurred";
pub const HIDDEN_CLASS: &str = "d-none";

pub const SUCCESS_ALERT_CLASS: &str =
    "alert alert-success alert-dismissible fade show position-fixed";
pub const SUCCESS_ICON_CLASS: &str = "fas fa-check-circle me-2";
pub const CLOSE_BUTTON_CLASS: &str = "btn-close";

/// Inline placement of the success alert, as `(property, value)` pairs.
pub const SUCCESS_ALERT_STYLE: [(&str, &str); 3] =
    [("top", "100px"), ("right", "20px"), ("z-index", "9999")];

pub fn error_message_or_default(message: Option<&str>) -> &str {
    match message.map(str::trim) {
        Some(message) if !message.is_empty() => message,
        _ => DEFAULT_ERROR_MESSAGE,
    }
}
