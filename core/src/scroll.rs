pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;

pub const FADE_IN_CLASS: &str = "fade-in";
pub const FADE_IN_THRESHOLD: f64 = 0.1;
pub const FADE_IN_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub fn back_to_top_visible(scroll_offset: f64) -> bool {
    scroll_offset > BACK_TO_TOP_THRESHOLD_PX
}

pub fn back_to_top_display(scroll_offset: f64) -> &'static str {
    if back_to_top_visible(scroll_offset) {
        "block"
    } else {
        "none"
    }
}

/// Selector to scroll to for an in-page link, or `None` for a bare `#`.
pub fn anchor_target(href: &str) -> Option<&str> {
    let href = href.trim();
    if href.len() > 1 && href.starts_with('#') {
        Some(href)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_to_top_boundary_is_exclusive() {
        assert!(!back_to_top_visible(0.0));
        assert!(!back_to_top_visible(300.0));
        assert!(back_to_top_visible(300.5));
        assert!(back_to_top_visible(301.0));
        assert_eq!(back_to_top_display(301.0), "block");
        assert_eq!(back_to_top_display(300.0), "none");
    }

    #[test]
    fn anchors_need_a_fragment() {
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target(""), None);
        assert_eq!(anchor_target("#results"), Some("#results"));
        assert_eq!(anchor_target("/about#team"), None);
    }
}
