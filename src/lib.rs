#![cfg(target_arch = "wasm32")]
use nav_menu_core::MenuConfig;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod dom;
mod header;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("nav-menu-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    header::bind_when_ready(&document, MenuConfig::default());
    Ok(())
}

/// Bind `#mobileMenuToggle` to `#navLinks`. Does nothing when either element
/// is missing or the toggle is already bound.
#[wasm_bindgen(js_name = bindMobileMenuToggle)]
pub fn bind_mobile_menu_toggle() {
    if let Some(document) = dom::window_document() {
        _ = header::bind(&document, &MenuConfig::default());
    }
}

/// Same as `bindMobileMenuToggle` for markup that uses other identifiers.
#[wasm_bindgen(js_name = bindMobileMenuToggleWith)]
pub fn bind_mobile_menu_toggle_with(toggle_id: &str, panel_id: &str) {
    if let Some(document) = dom::window_document() {
        let config = MenuConfig::default().with_ids(toggle_id, panel_id);
        _ = header::bind(&document, &config);
    }
}
