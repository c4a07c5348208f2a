// ============================================================================
// APP VIEW - Vista principal: login o panel según la sesión
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::AppController;
use crate::views::{render_dashboard, render_login};

/// Renderizar app completa
pub fn render_app(controller: &AppController) -> Result<Element, JsValue> {
    if controller.is_logged_in() {
        render_dashboard(controller)
    } else {
        render_login(controller)
    }
}
