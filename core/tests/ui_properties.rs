use proptest::prelude::*;
use stockpulse_core::autocomplete::{ListVersion, NavKey, NavOutcome, SuggestionCursor};
use stockpulse_core::scroll::back_to_top_visible;
use stockpulse_core::theme::{MemoryStore, PreferenceStore, Theme, ThemeManager, THEME_KEY};
use stockpulse_core::timing::{DebounceGate, ThrottleGate, Ticket};

/// Minimal stand-in for the browser timer queue.
struct VirtualTimers {
    queue: Vec<(f64, Ticket)>,
}

impl VirtualTimers {
    fn new() -> Self {
        Self { queue: Vec::new() }
    }

    fn schedule(&mut self, at: f64, ticket: Ticket) {
        self.queue.push((at, ticket));
    }

    fn drain_in_order(&mut self) -> Vec<(f64, Ticket)> {
        let mut queue = std::mem::take(&mut self.queue);
        queue.sort_by(|a, b| a.0.total_cmp(&b.0));
        queue
    }
}

fn arb_nav_key() -> impl Strategy<Value = NavKey> {
    prop_oneof![
        4 => Just(NavKey::Down),
        4 => Just(NavKey::Up),
        1 => Just(NavKey::Enter),
        1 => Just(NavKey::Escape),
    ]
}

/// A key press against a list that may have been re-rendered just before it.
fn arb_step() -> impl Strategy<Value = (NavKey, usize, bool)> {
    (arb_nav_key(), 0usize..6, prop::bool::weighted(0.1))
}

proptest! {
    #[test]
    fn key_sequences_keep_a_single_in_bounds_highlight(
        initial_len in 1usize..6,
        steps in prop::collection::vec(arb_step(), 0..200),
    ) {
        let mut cursor = SuggestionCursor::new();
        let mut list = ListVersion::new(initial_len, 0);
        for (key, new_len, rerender) in steps {
            let rerendered = rerender || new_len == 0;
            if rerendered {
                list = ListVersion::new(new_len, list.generation + 1);
            }
            let before = cursor.selected();
            let outcome = cursor.handle(key, list);
            let index = cursor.index();
            prop_assert!(index >= -1 && index < list.len as isize);
            let highlighted = (0..list.len)
                .filter(|idx| cursor.is_highlighted(*idx))
                .count();
            prop_assert!(highlighted <= 1);
            match outcome {
                NavOutcome::Highlight(selected) => prop_assert_eq!(selected, cursor.selected()),
                NavOutcome::Activate(idx) => {
                    prop_assert!(!rerendered);
                    prop_assert_eq!(Some(idx), before);
                }
                NavOutcome::Dismiss => prop_assert_eq!(cursor.selected(), None),
                NavOutcome::Ignored => {}
            }
        }
    }

    #[test]
    fn debounce_burst_fires_once_after_last_call(
        gaps in prop::collection::vec(0u32..50, 1..20),
    ) {
        let mut gate = DebounceGate::new(100);
        let mut timers = VirtualTimers::new();
        let mut call_at = 0.0;
        for gap in &gaps {
            call_at += f64::from(*gap);
            let ticket = gate.arm();
            timers.schedule(call_at + f64::from(gate.wait_ms()), ticket);
        }
        let fired: Vec<f64> = timers
            .drain_in_order()
            .into_iter()
            .filter(|(_, ticket)| gate.fire(*ticket))
            .map(|(at, _)| at)
            .collect();
        prop_assert_eq!(fired, vec![call_at + 100.0]);
        prop_assert!(!gate.is_pending());
    }

    #[test]
    fn throttle_burst_only_passes_the_first_call(
        offsets in prop::collection::vec(0.0f64..100.0, 0..20),
    ) {
        let mut gate = ThrottleGate::new(100);
        prop_assert!(gate.try_pass(0.0));
        for offset in offsets {
            prop_assert!(!gate.try_pass(offset));
        }
        prop_assert!(gate.try_pass(100.0));
    }
}

#[test]
fn toggling_twice_restores_theme_and_storage() {
    let store = MemoryStore::with_value(THEME_KEY, "dark");
    let mut manager = ThemeManager::new(&store);
    manager.load();
    let before = (manager.applied(), store.get(THEME_KEY));

    manager.toggle().unwrap();
    assert_eq!(manager.applied(), Theme::Light);
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
    manager.toggle().unwrap();

    assert_eq!((manager.applied(), store.get(THEME_KEY)), before);
}

#[test]
fn first_visit_defaults_to_light_and_persists_it() {
    let store = MemoryStore::new();
    let mut manager = ThemeManager::new(&store);
    let load = manager.load();
    assert_eq!(load.theme, Theme::Light);
    assert!(load.persist_error.is_none());
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
    // The stored default now counts as a preference, so OS changes are ignored.
    assert_eq!(manager.system_scheme_changed(true), None);
}

#[test]
fn back_to_top_threshold() {
    assert!(back_to_top_visible(301.0));
    assert!(!back_to_top_visible(300.0));
    assert!(!back_to_top_visible(12.0));
}
