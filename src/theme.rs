use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryListEvent, Storage};

use stockpulse_core::theme::{
    PreferenceStore, StoreError, Theme, ThemeManager, DARK_SCHEME_QUERY, DARK_THEME_CLASS,
};

use crate::config::PageConfig;
use crate::dom;
use crate::error::js_err;

/// `window.localStorage`, when the browser lets us have it.
pub(crate) struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    pub(crate) fn open() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            gloo::console::warn!("local storage unavailable, theme will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage.set_item(key, value).map_err(|err| StoreError::Write {
            key: key.to_string(),
            reason: js_err(err),
        })
    }
}

type SharedManager = Rc<RefCell<ThemeManager<LocalStorageStore>>>;

fn render(theme: Theme, icon_id: &str) {
    if let Some(body) = dom::document().ok().and_then(|document| document.body()) {
        dom::set_class(&body, DARK_THEME_CLASS, theme.is_dark());
    }
    if let Some(icon) = dom::by_id(icon_id) {
        icon.set_class_name(theme.icon_class());
    }
}

pub(crate) struct ThemeBinding {
    _listeners: Vec<EventListener>,
}

pub(crate) fn install(config: &PageConfig) -> ThemeBinding {
    let store = LocalStorageStore::open();
    let manager: SharedManager = Rc::new(RefCell::new(ThemeManager::new(store)));
    let icon_id = config.theme_icon_id.clone();
    let mut listeners = Vec::new();

    if let Some(toggle) = dom::by_id(&config.theme_toggle_id) {
        let manager = manager.clone();
        let icon_id = icon_id.clone();
        listeners.push(EventListener::new(&toggle, "click", move |_event| {
            let mut manager = manager.borrow_mut();
            if let Err(err) = manager.toggle() {
                gloo::console::warn!("theme not saved", err.to_string());
            }
            render(manager.applied(), &icon_id);
        }));
    }

    let load = manager.borrow_mut().load();
    if let Some(err) = load.persist_error {
        gloo::console::warn!("default theme not saved", err.to_string());
    }
    render(load.theme, &icon_id);

    let query = web_sys::window()
        .and_then(|window| window.match_media(DARK_SCHEME_QUERY).ok().flatten());
    if let Some(query) = query {
        listeners.push(EventListener::new(&query, "change", move |event| {
            let Some(event) = event.dyn_ref::<MediaQueryListEvent>() else {
                return;
            };
            if let Some(theme) = manager.borrow_mut().system_scheme_changed(event.matches()) {
                render(theme, &icon_id);
            }
        }));
    }

    ThemeBinding {
        _listeners: listeners,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockpulse_core::theme::THEME_KEY;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn local_storage_round_trips() {
        let store = LocalStorageStore::open();
        store.set(THEME_KEY, "dark").expect("write");
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
        store.set(THEME_KEY, "light").expect("write");
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
    }

    #[wasm_bindgen_test]
    fn toggle_twice_restores_body_class_and_storage() {
        let document = dom::document().expect("document");
        let toggle = document.create_element("button").expect("button");
        toggle.set_id("themeTestToggle");
        document.body().expect("body").append_child(&toggle).expect("append");
        let toggle: web_sys::HtmlElement = toggle.dyn_into().expect("html button");

        let store = LocalStorageStore::open();
        store.set(THEME_KEY, "light").expect("write");
        let config = PageConfig {
            theme_toggle_id: "themeTestToggle".to_string(),
            ..PageConfig::default()
        };
        let _binding = install(&config);
        let body = document.body().expect("body");
        assert!(!body.class_list().contains(DARK_THEME_CLASS));

        toggle.click();
        assert!(body.class_list().contains(DARK_THEME_CLASS));
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));

        toggle.click();
        assert!(!body.class_list().contains(DARK_THEME_CLASS));
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
        toggle.remove();
    }
}
