use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use web_sys::{Element, Event};

use stockpulse_core::menu::{MenuView, MobileMenu, OVERLAY_SHOW_CLASS, SIDEBAR_OPEN_CLASS};

use crate::config::PageConfig;
use crate::dom;

#[derive(Clone)]
struct MenuElements {
    button: Element,
    sidebar: Element,
    overlay: Element,
}

impl MenuElements {
    fn render(&self, view: MenuView) {
        dom::set_class(&self.sidebar, SIDEBAR_OPEN_CLASS, view.sidebar_open);
        dom::set_class(&self.overlay, OVERLAY_SHOW_CLASS, view.overlay_visible);
        if let Ok(Some(icon)) = self.button.query_selector("i") {
            icon.set_class_name(view.icon_class);
        }
    }
}

pub(crate) struct MenuBinding {
    #[cfg_attr(not(test), allow(dead_code))]
    menu: Rc<RefCell<MobileMenu>>,
    _listeners: Vec<EventListener>,
}

impl MenuBinding {
    #[cfg(test)]
    pub(crate) fn state(&self) -> stockpulse_core::MenuState {
        self.menu.borrow().state()
    }
}

pub(crate) fn install(config: &PageConfig) -> Option<MenuBinding> {
    let button = dom::by_id(&config.mobile_menu_button_id);
    let sidebar = dom::by_id(&config.sidebar_id);
    let overlay = dom::by_id(&config.mobile_overlay_id);
    let (button, sidebar, overlay) = match (button, sidebar, overlay) {
        (Some(button), Some(sidebar), Some(overlay)) => (button, sidebar, overlay),
        (button, sidebar, overlay) => {
            gloo::console::error!(
                "mobile menu elements not found",
                format!(
                    "button: {}, sidebar: {}, overlay: {}",
                    button.is_some(),
                    sidebar.is_some(),
                    overlay.is_some()
                )
            );
            return None;
        }
    };
    let elements = MenuElements {
        button,
        sidebar,
        overlay,
    };
    let menu = Rc::new(RefCell::new(MobileMenu::new()));
    elements.render(menu.borrow().view());

    let mut listeners = Vec::new();

    {
        let menu = menu.clone();
        let elements_for_cb = elements.clone();
        listeners.push(EventListener::new_with_options(
            &elements.button,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                event.prevent_default();
                event.stop_propagation();
                gloo::console::log!("mobile menu button clicked");
                let view = {
                    let mut menu = menu.borrow_mut();
                    menu.toggle();
                    menu.view()
                };
                elements_for_cb.render(view);
            },
        ));
    }

    {
        let menu = menu.clone();
        let elements_for_cb = elements.clone();
        listeners.push(EventListener::new(&elements.overlay, "click", move |_event| {
            let view = {
                let mut menu = menu.borrow_mut();
                menu.close();
                menu.view()
            };
            elements_for_cb.render(view);
        }));
    }

    for link in dom::query_all(&config.sidebar_link_selector) {
        let menu = menu.clone();
        let elements_for_cb = elements.clone();
        listeners.push(EventListener::new(&link, "click", move |_event| {
            let mut menu = menu.borrow_mut();
            if menu.link_clicked(dom::viewport_width()) {
                elements_for_cb.render(menu.view());
            }
        }));
    }

    if let Some(window) = web_sys::window() {
        let menu = menu.clone();
        let elements_for_cb = elements.clone();
        listeners.push(EventListener::new(&window, "resize", move |_event| {
            let mut menu = menu.borrow_mut();
            if menu.viewport_resized(dom::viewport_width()) {
                elements_for_cb.render(menu.view());
            }
        }));
    }

    Some(MenuBinding {
        menu,
        _listeners: listeners,
    })
}
