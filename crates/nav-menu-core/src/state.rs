//! Visibility state of the mobile menu.
//!
//! The state is never stored on its own. It is read back from the panel's
//! class list each time it is needed, and the control's glyph is computed
//! from it, so the two representations on the page cannot drift apart.

use crate::config::MenuConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    #[inline]
    pub fn from_active(active: bool) -> Self {
        if active {
            MenuState::Open
        } else {
            MenuState::Closed
        }
    }

    #[inline]
    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }

    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        }
    }

    /// Glyph the toggle control shows for this state.
    pub fn glyph(self, config: &MenuConfig) -> &str {
        match self {
            MenuState::Open => &config.open_glyph,
            MenuState::Closed => &config.closed_glyph,
        }
    }
}
