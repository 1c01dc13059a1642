pub const HIGHLIGHT_BACKGROUND: &str = "#e9ecef";
pub const HIGHLIGHT_FONT_WEIGHT: &str = "bold";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Down,
    Up,
    Enter,
    Escape,
}

impl NavKey {
    /// Maps a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(Self::Down),
            "ArrowUp" => Some(Self::Up),
            "Enter" => Some(Self::Enter),
            "Escape" => Some(Self::Escape),
            _ => None,
        }
    }

    /// Escape is left to the browser so it can still close other widgets.
    pub fn prevents_default(self) -> bool {
        !matches!(self, Self::Escape)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    /// Nothing to do: empty list, or Enter with no selection.
    Ignored,
    /// Restyle so that only this item (if any) is highlighted.
    Highlight(Option<usize>),
    /// Click the item at this index.
    Activate(usize),
    /// Hide the dropdown.
    Dismiss,
}

/// Identity of one rendering of the suggestion list. The page bumps
/// `generation` whenever the rendered items are replaced, even if the new
/// list has the same length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListVersion {
    pub len: usize,
    pub generation: u64,
}

impl ListVersion {
    pub fn new(len: usize, generation: u64) -> Self {
        Self { len, generation }
    }
}

/// Selection over the currently rendered suggestion items.
///
/// `None` is the "nothing selected" position (index -1 in DOM terms). The
/// cursor remembers which list version it last saw, so a re-rendered list
/// starts from an empty selection.
#[derive(Clone, Debug, Default)]
pub struct SuggestionCursor {
    selected: Option<usize>,
    seen: ListVersion,
}

impl SuggestionCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Signed view of the selection, -1 when nothing is selected.
    pub fn index(&self) -> isize {
        self.selected.map_or(-1, |idx| idx as isize)
    }

    pub fn reset(&mut self) {
        self.selected = None;
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    pub fn handle(&mut self, key: NavKey, list: ListVersion) -> NavOutcome {
        if list != self.seen {
            self.seen = list;
            self.selected = None;
        }
        if list.len == 0 {
            return NavOutcome::Ignored;
        }
        let last = list.len - 1;
        match key {
            NavKey::Down => {
                self.selected = Some(match self.selected {
                    None => 0,
                    Some(idx) => (idx + 1).min(last),
                });
                NavOutcome::Highlight(self.selected)
            }
            NavKey::Up => {
                self.selected = match self.selected {
                    None | Some(0) => None,
                    Some(idx) => Some((idx - 1).min(last)),
                };
                NavOutcome::Highlight(self.selected)
            }
            NavKey::Enter => match self.selected {
                Some(idx) if idx <= last => NavOutcome::Activate(idx),
                _ => NavOutcome::Ignored,
            },
            NavKey::Escape => {
                self.selected = None;
                NavOutcome::Dismiss
            }
        }
    }
}
