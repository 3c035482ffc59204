use crate::constants::{ACTIVE_CLASS, CLOSED_GLYPH, OPEN_GLYPH, PANEL_ID, TOGGLE_ID};

/// Markup contract the binder works against.
///
/// `Default` matches the site header: `#mobileMenuToggle` drives `#navLinks`
/// through the `active` class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuConfig {
    pub toggle_id: String,
    pub panel_id: String,
    pub active_class: String,
    pub open_glyph: String,
    pub closed_glyph: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            toggle_id: TOGGLE_ID.to_string(),
            panel_id: PANEL_ID.to_string(),
            active_class: ACTIVE_CLASS.to_string(),
            open_glyph: OPEN_GLYPH.to_string(),
            closed_glyph: CLOSED_GLYPH.to_string(),
        }
    }
}

impl MenuConfig {
    pub fn with_ids(mut self, toggle_id: impl Into<String>, panel_id: impl Into<String>) -> Self {
        self.toggle_id = toggle_id.into();
        self.panel_id = panel_id.into();
        self
    }

    pub fn with_active_class(mut self, class: impl Into<String>) -> Self {
        self.active_class = class.into();
        self
    }

    pub fn with_glyphs(mut self, open: impl Into<String>, closed: impl Into<String>) -> Self {
        self.open_glyph = open.into();
        self.closed_glyph = closed.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_header_markup() {
        let cfg = MenuConfig::default();
        assert_eq!(cfg.toggle_id, "mobileMenuToggle");
        assert_eq!(cfg.panel_id, "navLinks");
        assert_eq!(cfg.active_class, "active");
    }

    #[test]
    fn builders_override_only_their_fields() {
        let cfg = MenuConfig::default()
            .with_ids("burger", "drawer")
            .with_active_class("is-open");
        assert_eq!(cfg.toggle_id, "burger");
        assert_eq!(cfg.panel_id, "drawer");
        assert_eq!(cfg.active_class, "is-open");
        assert_eq!(cfg.open_glyph, MenuConfig::default().open_glyph);
        assert_eq!(cfg.closed_glyph, MenuConfig::default().closed_glyph);
    }
}
