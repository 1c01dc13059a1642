use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, KeyboardEvent};

use stockpulse_core::autocomplete::{
    ListVersion, NavKey, NavOutcome, SuggestionCursor, HIGHLIGHT_BACKGROUND,
    HIGHLIGHT_FONT_WEIGHT,
};

use crate::config::PageConfig;
use crate::dom;

pub(crate) struct AutocompleteBinding {
    _listener: EventListener,
}

/// Cursor plus the item nodes it was last applied to.
#[derive(Default)]
struct SuggestionState {
    cursor: SuggestionCursor,
    rendered: Vec<HtmlElement>,
    generation: u64,
}

impl SuggestionState {
    /// Version of `items`, bumped whenever any node differs from the last
    /// rendering seen.
    fn observe(&mut self, items: &[HtmlElement]) -> ListVersion {
        let same = self.rendered.len() == items.len()
            && self
                .rendered
                .iter()
                .zip(items)
                .all(|(seen, item)| seen.is_same_node(Some(item.as_ref())));
        if !same {
            self.generation = self.generation.wrapping_add(1);
            self.rendered = items.to_vec();
        }
        ListVersion::new(items.len(), self.generation)
    }
}

fn render_highlight(items: &[HtmlElement], selected: Option<usize>) {
    for (idx, item) in items.iter().enumerate() {
        let active = selected == Some(idx);
        dom::set_style(
            item,
            "background-color",
            active.then_some(HIGHLIGHT_BACKGROUND),
        );
        dom::set_style(item, "font-weight", active.then_some(HIGHLIGHT_FONT_WEIGHT));
    }
}

fn hide_dropdown(dropdown_id: &str) {
    if let Some(dropdown) = dom::html_by_id(dropdown_id) {
        dom::set_style(&dropdown, "display", Some("none"));
    }
}

/// Applies one key press against the live suggestion list. Returns whether
/// the key was consumed (the caller prevents the browser default).
fn apply_key(
    state: &RefCell<SuggestionState>,
    key: NavKey,
    item_selector: &str,
    dropdown_id: &str,
) -> bool {
    let items = dom::query_all_html(item_selector);
    let outcome = {
        let mut state = state.borrow_mut();
        let list = state.observe(&items);
        state.cursor.handle(key, list)
    };
    match outcome {
        NavOutcome::Ignored => {}
        NavOutcome::Highlight(selected) => render_highlight(&items, selected),
        NavOutcome::Activate(idx) => {
            if let Some(item) = items.get(idx) {
                item.click();
            }
        }
        NavOutcome::Dismiss => hide_dropdown(dropdown_id),
    }
    !items.is_empty() && key.prevents_default()
}

pub(crate) fn install(config: &PageConfig) -> Option<AutocompleteBinding> {
    let document = dom::document().ok()?;
    let state = Rc::new(RefCell::new(SuggestionState::default()));
    let item_selector = config.autocomplete_item_selector.clone();
    let dropdown_id = config.autocomplete_dropdown_id.clone();
    let listener = EventListener::new_with_options(
        &document,
        "keydown",
        EventListenerOptions::enable_prevent_default(),
        move |event: &Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let Some(key) = NavKey::from_key(&event.key()) else {
                return;
            };
            if apply_key(&state, key, &item_selector, &dropdown_id) {
                event.prevent_default();
            }
        },
    );
    Some(AutocompleteBinding {
        _listener: listener,
    })
}
