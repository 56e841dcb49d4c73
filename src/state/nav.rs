#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Mobile navigation menu state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
}

impl NavState {
    /// Toggle-button click.
    pub fn toggle(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Any nav-link click dismisses the menu.
    pub fn close(&mut self) {
        self.menu_open = false;
    }

    /// Body overflow value: page scroll is locked while the menu is open.
    pub fn body_overflow(self) -> &'static str {
        if self.menu_open { "hidden" } else { "visible" }
    }
}
