pub const COPY_FEEDBACK_MS: u32 = 2000;
pub const SHARE_TITLE: &str = "Stock Sentiment Analysis";

pub const IDLE_BUTTON_CLASS: &str = "btn-outline-primary";
const SUCCESS_BUTTON_CLASS: &str = "btn-success";
const FAILURE_BUTTON_CLASS: &str = "btn-danger";

const COPIED_LABEL_HTML: &str = r#"<i class="fas fa-check me-1"></i>Copied!"#;
const COPY_FAILED_LABEL_HTML: &str =
    r#"<i class="fas fa-exclamation-triangle me-1"></i>Copy failed"#;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
}

impl CopyOutcome {
    pub fn label_html(self) -> &'static str {
        match self {
            Self::Copied => COPIED_LABEL_HTML,
            Self::Failed => COPY_FAILED_LABEL_HTML,
        }
    }

    pub fn button_class(self) -> &'static str {
        match self {
            Self::Copied => SUCCESS_BUTTON_CLASS,
            Self::Failed => FAILURE_BUTTON_CLASS,
        }
    }

    /// Every class a feedback window may have added.
    pub fn all_button_classes() -> [&'static str; 2] {
        [SUCCESS_BUTTON_CLASS, FAILURE_BUTTON_CLASS]
    }
}

/// Arguments for the system share sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    pub fn new(title: &str, text: &str, url: &str) -> Self {
        Self {
            title: title.to_string(),
            text: text.to_string(),
            url: url.to_string(),
        }
    }
}

/// A share rejected because the user closed the sheet is not a failure.
pub fn is_share_cancellation(error_name: &str) -> bool {
    error_name == "AbortError"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcomes_pick_distinct_styles() {
        assert_eq!(CopyOutcome::Copied.button_class(), "btn-success");
        assert_eq!(CopyOutcome::Failed.button_class(), "btn-danger");
        assert!(CopyOutcome::Copied.label_html().ends_with("Copied!"));
    }

    #[test]
    fn abort_is_a_cancellation() {
        assert!(is_share_cancellation("AbortError"));
        assert!(!is_share_cancellation("NotAllowedError"));
    }
}
