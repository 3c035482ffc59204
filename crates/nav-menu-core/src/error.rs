use thiserror::Error;

/// Reasons a bind attempt left the page untouched.
///
/// None of these are failures from the page's point of view: the browser
/// entry points discard them so that pages without the mobile menu markup
/// keep working.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("toggle control #{0} not found")]
    MissingToggle(String),
    #[error("navigation panel #{0} not found")]
    MissingPanel(String),
    #[error("toggle control #{0} already has a menu listener")]
    AlreadyBound(String),
}
