//! Click handler binder for the mobile navigation menu.
//!
//! The binder never touches a global document. It receives an
//! [`ElementSource`] that resolves identifiers to element handles, which lets
//! the browser front-end plug in `web_sys` handles and lets tests plug in an
//! in-memory page.

use crate::config::MenuConfig;
use crate::error::BindError;
use crate::state::MenuState;

/// Clickable control whose label shows the menu glyph.
///
/// Handles are cheap clones of the same underlying element.
pub trait ToggleControl: Clone + 'static {
    fn set_label(&self, label: &str);
    /// Whether a menu listener was already attached to this element.
    fn is_bound(&self) -> bool;
    fn mark_bound(&self);
    /// Register `handler` to run on every click. There is no removal.
    fn on_click(&self, handler: Box<dyn FnMut()>);
}

/// Panel whose class membership carries the visibility state.
pub trait NavPanel: Clone + 'static {
    fn toggle_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;
}

/// Resolves element identifiers on the hosting page.
pub trait ElementSource {
    type Control: ToggleControl;
    type Panel: NavPanel;

    fn toggle_control(&self, id: &str) -> Option<Self::Control>;
    fn nav_panel(&self, id: &str) -> Option<Self::Panel>;
}

#[inline]
pub fn current_state<P: NavPanel>(panel: &P, config: &MenuConfig) -> MenuState {
    MenuState::from_active(panel.has_class(&config.active_class))
}

/// Handle one click: flip the class, then derive the label from what the
/// panel reports afterwards.
pub fn apply_click<C, P>(control: &C, panel: &P, config: &MenuConfig) -> MenuState
where
    C: ToggleControl,
    P: NavPanel,
{
    panel.toggle_class(&config.active_class);
    let state = current_state(panel, config);
    control.set_label(state.glyph(config));
    state
}

/// Attach the menu click listener when both elements exist.
///
/// Returns `Err` without touching the page when an element is missing or the
/// control already carries a listener from an earlier call.
pub fn bind_mobile_menu_toggle<S: ElementSource>(
    source: &S,
    config: &MenuConfig,
) -> Result<(), BindError> {
    let control = source.toggle_control(&config.toggle_id);
    let panel = source.nav_panel(&config.panel_id);
    let (control, panel) = match (control, panel) {
        (Some(c), Some(p)) => (c, p),
        (None, _) => return Err(BindError::MissingToggle(config.toggle_id.clone())),
        (_, None) => return Err(BindError::MissingPanel(config.panel_id.clone())),
    };
    if control.is_bound() {
        return Err(BindError::AlreadyBound(config.toggle_id.clone()));
    }
    control.mark_bound();

    let cfg = config.clone();
    let control_for_click = control.clone();
    control.on_click(Box::new(move || {
        let state = apply_click(&control_for_click, &panel, &cfg);
        log::debug!("[menu] open={}", state.is_open());
    }));
    log::debug!("[menu] bound #{} -> #{}", config.toggle_id, config.panel_id);
    Ok(())
}
