// ============================================================================
// APP - Aplicación principal
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::{AppConfig, CONFIG};
use crate::dom::incremental::*;
use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::services::{ApiClient, BrowserEventLoop};
use crate::state::{IncrementalUpdate, UpdateType};
use crate::viewmodels::{DashboardController, RefreshSettings};
use crate::views::render_app;

/// Controller con la API HTTP real y los timers del navegador
pub type AppController = DashboardController<ApiClient, BrowserEventLoop>;

/// ID del `<script type="application/json">` con opciones de la página
const CONFIG_ELEMENT_ID: &str = "app-config";

/// Aplicación principal
pub struct App {
    controller: AppController,
    root: Element,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let config = load_config();
        log::info!(
            "⚙️ [APP] API: {} | refresh cada {} ms | timeout {} ms",
            config.base_url,
            config.refresh_interval_ms,
            config.fetch_timeout_ms
        );

        let controller = DashboardController::new(
            ApiClient::with_base_url(&config.base_url),
            BrowserEventLoop,
            RefreshSettings::from_config(&config),
        );

        // Suscribirse a cambios de estado para re-renderizar automáticamente
        controller.state().subscribe_to_changes(|update: UpdateType| {
            // Timeout(0) saca el render fuera del borrow de APP que pudo originar el cambio
            use gloo_timers::callback::Timeout;
            Timeout::new(0, move || {
                crate::rerender_app_with_type(update);
            })
            .forget();
        });

        Ok(Self { controller, root })
    }

    /// Renderizar aplicación
    pub fn render(&mut self) -> Result<(), JsValue> {
        log::debug!("🎬 [APP] render()");
        set_inner_html(&self.root, "");
        let view = render_app(&self.controller)?;
        append_child(&self.root, &view)
    }

    /// Actualizar solo una sección del panel
    pub fn update_incremental(&self, update_type: IncrementalUpdate) -> Result<(), JsValue> {
        if !self.controller.is_logged_in() {
            // Pantalla de login: no hay secciones de datos que actualizar
            return Ok(());
        }

        match update_type {
            IncrementalUpdate::Header => update_header(&self.controller),
            IncrementalUpdate::DataSections => update_data_sections(&self.controller),
            IncrementalUpdate::OrdersTable => update_orders_table(&self.controller),
        }
    }
}

/// Configuración de compilación + opciones JSON inyectadas por la página
fn load_config() -> AppConfig {
    let Some(text) = get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return CONFIG.clone();
    };

    match CONFIG.with_options_json(&text) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("⚠️ [APP] #{} ignorado, JSON inválido: {}", CONFIG_ELEMENT_ID, e);
            CONFIG.clone()
        }
    }
}
