// Default markup contract shared with the host page.

// Element identifiers
pub const TOGGLE_ID: &str = "mobileMenuToggle"; // clickable hamburger/close control
pub const PANEL_ID: &str = "navLinks"; // panel whose class drives visibility

// Class toggled on the panel; the page's CSS gives it meaning
pub const ACTIVE_CLASS: &str = "active";

// Control glyphs
pub const OPEN_GLYPH: &str = "\u{2715}"; // ✕
pub const CLOSED_GLYPH: &str = "\u{2630}"; // ☰

// Attribute written on a control once a listener is attached
pub const BOUND_MARKER_ATTR: &str = "data-menu-bound";
