// ============================================================================
// INCREMENTAL DOM UPDATES - Actualización incremental del DOM
// ============================================================================
// Solo reemplaza las secciones que cambiaron. Si una sección no existe (p.ej.
// seguimos en la pantalla de login) se devuelve un error "needs full render"
// y lib.rs cae a un re-render completo.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::AppController;
use crate::dom::{get_element_by_id, replace_children};
use crate::views::charts::render_charts;
use crate::views::dashboard::{
    fill_status_options, render_analytics_cards, render_error_banner, render_header, CARDS_ID,
    CHARTS_ID, ERROR_ID, HEADER_ID, STATUS_SELECT_ID, TABLE_ID,
};
use crate::views::orders_table::render_orders_table;

pub const NEEDS_FULL_RENDER: &str = "needs full render";

fn section(id: &str) -> Result<Element, JsValue> {
    get_element_by_id(id).ok_or_else(|| {
        JsValue::from_str(&format!("Section #{} not found, {}", id, NEEDS_FULL_RENDER))
    })
}

/// Hora de actualización, estado del botón de refresh y del auto-refresh
pub fn update_header(controller: &AppController) -> Result<(), JsValue> {
    replace_children(&section(HEADER_ID)?, &render_header(controller)?)
}

/// Todo lo que depende del snapshot: error, analítica, gráficos, opciones de estado y tabla
pub fn update_data_sections(controller: &AppController) -> Result<(), JsValue> {
    update_header(controller)?;
    replace_children(&section(ERROR_ID)?, &render_error_banner(controller)?)?;
    replace_children(&section(CARDS_ID)?, &render_analytics_cards(controller)?)?;
    replace_children(&section(CHARTS_ID)?, &render_charts(controller)?)?;
    // El <select> se conserva (y su listener); solo cambian las opciones
    fill_status_options(controller, &section(STATUS_SELECT_ID)?)?;
    update_orders_table(controller)
}

/// Solo la tabla: el input de búsqueda no se toca y mantiene el foco
pub fn update_orders_table(controller: &AppController) -> Result<(), JsValue> {
    replace_children(&section(TABLE_ID)?, &render_orders_table(controller)?)
}
