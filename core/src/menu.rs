pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

pub const SIDEBAR_OPEN_CLASS: &str = "open";
pub const OVERLAY_SHOW_CLASS: &str = "show";

const OPEN_ICON_CLASS: &str = "fas fa-times";
const CLOSED_ICON_CLASS: &str = "fas fa-bars";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// Class membership derived from a [`MenuState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuView {
    pub sidebar_open: bool,
    pub overlay_visible: bool,
    pub icon_class: &'static str,
}

/// Mobile navigation drawer. The DOM is a projection of `state`, never the
/// other way around.
#[derive(Clone, Debug, Default)]
pub struct MobileMenu {
    state: MenuState,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn toggle(&mut self) -> MenuState {
        self.state = match self.state {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        };
        self.state
    }

    pub fn close(&mut self) {
        self.state = MenuState::Closed;
    }

    /// Navigation links close the drawer only on narrow viewports.
    /// Returns whether a close was applied.
    pub fn link_clicked(&mut self, viewport_width: f64) -> bool {
        if viewport_width <= MOBILE_BREAKPOINT_PX {
            self.close();
            return true;
        }
        false
    }

    /// Growing past the breakpoint always closes the drawer.
    pub fn viewport_resized(&mut self, viewport_width: f64) -> bool {
        if viewport_width > MOBILE_BREAKPOINT_PX {
            self.close();
            return true;
        }
        false
    }

    pub fn view(&self) -> MenuView {
        let open = self.state.is_open();
        MenuView {
            sidebar_open: open,
            overlay_visible: open,
            icon_class: if open { OPEN_ICON_CLASS } else { CLOSED_ICON_CLASS },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_alternates_and_view_follows() {
        let mut menu = MobileMenu::new();
        assert_eq!(menu.toggle(), MenuState::Open);
        let view = menu.view();
        assert!(view.sidebar_open && view.overlay_visible);
        assert_eq!(view.icon_class, "fas fa-times");

        assert_eq!(menu.toggle(), MenuState::Closed);
        let view = menu.view();
        assert!(!view.sidebar_open && !view.overlay_visible);
        assert_eq!(view.icon_class, "fas fa-bars");
    }

    #[test]
    fn link_click_closes_only_at_or_below_breakpoint() {
        let mut menu = MobileMenu::new();
        menu.toggle();
        assert!(!menu.link_clicked(1024.0));
        assert_eq!(menu.state(), MenuState::Open);
        assert!(menu.link_clicked(768.0));
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn resize_closes_only_above_breakpoint() {
        let mut menu = MobileMenu::new();
        menu.toggle();
        assert!(!menu.viewport_resized(768.0));
        assert_eq!(menu.state(), MenuState::Open);
        assert!(menu.viewport_resized(769.0));
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn close_is_idempotent() {
        let mut menu = MobileMenu::new();
        menu.close();
        menu.close();
        assert_eq!(menu.state(), MenuState::Closed);
    }
}
