use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::HtmlButtonElement;

use crate::config::PageConfig;
use crate::dom;

const SUBMIT_LOADING_HTML: &str = concat!(
    r#"<span class="spinner-border spinner-border-sm me-2" role="status" aria-hidden="true">"#,
    "</span>Loading...",
);

const SEARCH_ARIA_LABEL: &str = "Search for stock symbol or company name";
const SEARCH_HELP_ID: &str = "search-help";
const DROPDOWN_ARIA_LABEL: &str = "Stock search suggestions";

/// Puts submit buttons into a spinner state once their form validates.
pub(crate) fn install_submit_loading(config: &PageConfig) -> Vec<EventListener> {
    dom::query_all(&config.submit_button_selector)
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlButtonElement>().ok())
        .map(|button| {
            let target = button.clone();
            EventListener::new(&button, "click", move |_event| {
                let Some(form) = target.form() else {
                    return;
                };
                if form.check_validity() {
                    target.set_inner_html(SUBMIT_LOADING_HTML);
                    target.set_disabled(true);
                }
            })
        })
        .collect()
}

pub(crate) fn improve_accessibility(config: &PageConfig) {
    if let Some(search) = dom::by_id(&config.search_input_id) {
        let _ = search.set_attribute("aria-label", SEARCH_ARIA_LABEL);
        let _ = search.set_attribute("aria-describedby", SEARCH_HELP_ID);
    }
    if let Some(dropdown) = dom::by_id(&config.autocomplete_dropdown_id) {
        let _ = dropdown.set_attribute("role", "listbox");
        let _ = dropdown.set_attribute("aria-label", DROPDOWN_ARIA_LABEL);
    }
    for item in dom::query_all(&config.autocomplete_item_selector) {
        let _ = item.set_attribute("role", "option");
        let _ = item.set_attribute("tabindex", "0");
    }
}
