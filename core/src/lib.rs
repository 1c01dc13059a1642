pub mod actions;
pub mod autocomplete;
pub mod menu;
pub mod notice;
pub mod scroll;
pub mod theme;
pub mod timing;

pub use actions::{CopyOutcome, SharePayload};
pub use autocomplete::{ListVersion, NavKey, NavOutcome, SuggestionCursor};
pub use menu::{MenuState, MenuView, MobileMenu};
pub use theme::{MemoryStore, PreferenceStore, StoreError, Theme, ThemeManager, ThemeParseError};
pub use timing::{DebounceGate, FeedbackSlot, ThrottleGate, Ticket, TicketCounter};
