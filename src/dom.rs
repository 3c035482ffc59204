use nav_menu_core::constants::BOUND_MARKER_ATTR;
use nav_menu_core::{ElementSource, NavPanel, ToggleControl};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// True while the parser is still building the document.
pub fn is_loading(document: &web::Document) -> bool {
    js_sys::Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|v| v.as_string())
        .map(|s| s == "loading")
        .unwrap_or(false)
}

#[inline]
pub fn add_event_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut() + 'static,
) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[derive(Clone)]
pub struct DomControl(web::Element);

impl ToggleControl for DomControl {
    fn set_label(&self, label: &str) {
        self.0.set_text_content(Some(label));
    }

    fn is_bound(&self) -> bool {
        self.0.has_attribute(BOUND_MARKER_ATTR)
    }

    fn mark_bound(&self) {
        _ = self.0.set_attribute(BOUND_MARKER_ATTR, "1");
    }

    fn on_click(&self, handler: Box<dyn FnMut()>) {
        add_event_listener(&self.0, "click", handler);
    }
}

#[derive(Clone)]
pub struct DomPanel(web::Element);

impl NavPanel for DomPanel {
    fn toggle_class(&self, class: &str) {
        // a rejected token leaves the list as it was; the label is read back below
        _ = self.0.class_list().toggle(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }
}

/// Element lookup by id on a live document.
pub struct DomSource {
    document: web::Document,
}

impl DomSource {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }
}

impl ElementSource for DomSource {
    type Control = DomControl;
    type Panel = DomPanel;

    fn toggle_control(&self, id: &str) -> Option<DomControl> {
        self.document.get_element_by_id(id).map(DomControl)
    }

    fn nav_panel(&self, id: &str) -> Option<DomPanel> {
        self.document.get_element_by_id(id).map(DomPanel)
    }
}
