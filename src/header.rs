use crate::dom::{self, DomSource};
use nav_menu_core::{bind_mobile_menu_toggle, BindError, MenuConfig};
use web_sys as web;

#[inline]
pub fn bind(document: &web::Document, config: &MenuConfig) -> Result<(), BindError> {
    bind_mobile_menu_toggle(&DomSource::new(document.clone()), config)
}

// Bind now, or once the markup is parsed if the module started early.
pub fn bind_when_ready(document: &web::Document, config: MenuConfig) {
    if dom::is_loading(document) {
        let doc = document.clone();
        dom::add_event_listener(document, "DOMContentLoaded", move || {
            _ = bind(&doc, &config);
        });
    } else {
        _ = bind(document, &config);
    }
}
