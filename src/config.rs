use serde::Deserialize;

use stockpulse_core::actions::SHARE_TITLE;

use crate::dom;

/// Id of the optional `<script type="application/json">` block carrying overrides.
pub const CONFIG_ELEMENT_ID: &str = "stockpulse-config";

/// The markup contract: where each component finds its elements.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub mobile_menu_button_id: String,
    pub sidebar_id: String,
    pub mobile_overlay_id: String,
    pub sidebar_link_selector: String,
    pub card_selector: String,
    pub search_input_id: String,
    pub autocomplete_dropdown_id: String,
    pub autocomplete_item_selector: String,
    pub copy_button_selector: String,
    pub share_button_selector: String,
    pub theme_toggle_id: String,
    pub theme_icon_id: String,
    pub back_to_top_id: String,
    pub error_message_id: String,
    pub error_text_id: String,
    pub submit_button_selector: String,
    pub anchor_selector: String,
    pub share_title: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            mobile_menu_button_id: "mobileMenuBtn".to_string(),
            sidebar_id: "sidebar".to_string(),
            mobile_overlay_id: "mobileOverlay".to_string(),
            sidebar_link_selector: ".sidebar-link".to_string(),
            card_selector: ".card".to_string(),
            search_input_id: "stockSearch".to_string(),
            autocomplete_dropdown_id: "autocompleteDropdown".to_string(),
            autocomplete_item_selector: ".autocomplete-item".to_string(),
            copy_button_selector: ".copy-result".to_string(),
            share_button_selector: ".share-result".to_string(),
            theme_toggle_id: "themeToggle".to_string(),
            theme_icon_id: "themeIcon".to_string(),
            back_to_top_id: "backToTop".to_string(),
            error_message_id: "errorMessage".to_string(),
            error_text_id: "errorText".to_string(),
            submit_button_selector: r#"button[type="submit"]"#.to_string(),
            anchor_selector: r##"a[href^="#"]"##.to_string(),
            share_title: SHARE_TITLE.to_string(),
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

pub fn load_page_config() -> PageConfig {
    let Some(element) = dom::by_id(CONFIG_ELEMENT_ID) else {
        return PageConfig::default();
    };
    let raw = element.text_content().unwrap_or_default();
    if raw.trim().is_empty() {
        return PageConfig::default();
    }
    match PageConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            gloo::console::warn!("page config ignored", err.to_string());
            PageConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn partial_json_keeps_defaults() {
        let config = PageConfig::from_json(r#"{"sidebarId":"nav","shareTitle":"Quotes"}"#)
            .expect("valid config");
        assert_eq!(config.sidebar_id, "nav");
        assert_eq!(config.share_title, "Quotes");
        assert_eq!(config.mobile_menu_button_id, "mobileMenuBtn");
        assert_eq!(config.anchor_selector, r##"a[href^="#"]"##);
    }

    #[wasm_bindgen_test]
    fn missing_element_yields_defaults() {
        assert_eq!(load_page_config(), PageConfig::default());
    }
}
