// ============================================================================
// DASHBOARD - Panel de pedidos (cabecera, analítica, gráficos, filtros, tabla)
// ============================================================================
// Cada sección vive en un contenedor con ID fijo para que dom::incremental
// pueda reemplazarla sin re-renderizar todo el panel.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::AppController;
use crate::dom::{append_child, on_click, on_input, on_select, on_toggle, ElementBuilder};
use crate::models::{StatusFilter, ALL_STATUSES};
use crate::utils::status;
use crate::utils::{format_timestamp, t};
use crate::viewmodels::StatusOption;
use crate::views::charts::render_charts;
use crate::views::orders_table::render_orders_table;

pub const HEADER_ID: &str = "dashboard-header";
pub const ERROR_ID: &str = "dashboard-error";
pub const CARDS_ID: &str = "analytics-cards";
pub const CHARTS_ID: &str = "charts";
pub const STATUS_SELECT_ID: &str = "status-filter";
pub const SEARCH_INPUT_ID: &str = "order-search";
pub const TABLE_ID: &str = "orders-table";

/// Renderizar panel completo
pub fn render_dashboard(controller: &AppController) -> Result<Element, JsValue> {
    log::debug!("🎬 [VIEW] render_dashboard()");

    Ok(ElementBuilder::new("div")?
        .class("dashboard")
        .child(section(HEADER_ID, render_header(controller)?)?)?
        .child(section(ERROR_ID, render_error_banner(controller)?)?)?
        .child(section(CARDS_ID, render_analytics_cards(controller)?)?)?
        .child(section(CHARTS_ID, render_charts(controller)?)?)?
        .child(render_filters(controller)?)?
        .child(section(TABLE_ID, render_orders_table(controller)?)?)?
        .build())
}

fn section(id: &str, content: Element) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("section")?.id(id)?.child(content)?.build())
}

// ============================================================================
// CABECERA
// ============================================================================

pub fn render_header(controller: &AppController) -> Result<Element, JsValue> {
    let loading = controller.is_loading();
    let fetched_at = controller.state().store.fetched_at();

    let updated = ElementBuilder::new("span")?
        .class("updated-at")
        .text(&match fetched_at {
            Some(at) => format!("{} {}", t("updated_at"), format_timestamp(&at)),
            None => String::new(),
        })
        .build();

    let refresh_btn = ElementBuilder::new("button")?
        .class("btn-refresh")
        .attr("type", "button")?
        .flag("disabled", loading)?
        .text(if loading { t("loading") } else { t("refresh") })
        .build();
    {
        let controller = controller.clone();
        on_click(&refresh_btn, move |_| {
            log::info!("🔄 [VIEW] Refresh manual");
            controller.refresh_now();
        })?;
    }

    let checkbox = ElementBuilder::new("input")?
        .attr("type", "checkbox")?
        .flag("checked", controller.state().auto_refresh_enabled())?
        .build();
    {
        let controller = controller.clone();
        on_toggle(&checkbox, move |enabled| controller.set_auto_refresh(enabled))?;
    }
    let auto_refresh = ElementBuilder::new("label")?
        .class("auto-refresh")
        .child(checkbox)?
        .child(ElementBuilder::new("span")?.text(t("auto_refresh")).build())?
        .build();

    let logout_btn = ElementBuilder::new("button")?
        .class("btn-logout")
        .attr("type", "button")?
        .text(t("logout"))
        .build();
    {
        let controller = controller.clone();
        on_click(&logout_btn, move |_| {
            log::info!("🚪 [VIEW] Logout");
            controller.logout();
        })?;
    }

    Ok(ElementBuilder::new("header")?
        .class("dashboard-header")
        .child(ElementBuilder::new("h1")?.text(t("panel_title")).build())?
        .child(updated)?
        .child(
            ElementBuilder::new("div")?
                .class("header-actions")
                .child(refresh_btn)?
                .child(auto_refresh)?
                .child(logout_btn)?
                .build(),
        )?
        .build())
}

// ============================================================================
// ERROR + ANALÍTICA
// ============================================================================

pub fn render_error_banner(controller: &AppController) -> Result<Element, JsValue> {
    let banner = ElementBuilder::new("div")?;
    Ok(match controller.state().store.error() {
        Some(message) => banner.class("error-message").attr("role", "alert")?.text(&message).build(),
        None => banner.class("error-message hidden").build(),
    })
}

pub fn render_analytics_cards(controller: &AppController) -> Result<Element, JsValue> {
    let cards = controller.with_projector(|p| p.analytics_cards());

    if cards.is_empty() {
        return Ok(ElementBuilder::new("div")?
            .class("analytics-empty")
            .text(t("no_analytics"))
            .build());
    }

    let grid = ElementBuilder::new("div")?.class("stats-grid").build();
    for card in cards {
        let element = ElementBuilder::new("div")?
            .class(&format!("stat-card stat-{}", card.key))
            .child(ElementBuilder::new("div")?.class("stat-value").text(&card.value).build())?
            .child(ElementBuilder::new("div")?.class("stat-label").text(card.label).build())?
            .build();
        append_child(&grid, &element)?;
    }
    Ok(grid)
}

// ============================================================================
// FILTROS
// ============================================================================

fn render_filters(controller: &AppController) -> Result<Element, JsValue> {
    let select = ElementBuilder::new("select")?.id(STATUS_SELECT_ID)?.build();
    fill_status_options(controller, &select)?;
    {
        let controller = controller.clone();
        on_select(&select, move |value| controller.set_status_filter(&value))?;
    }

    let search = ElementBuilder::new("input")?
        .id(SEARCH_INPUT_ID)?
        .attr("type", "search")?
        .attr("placeholder", t("search_placeholder"))?
        .attr("value", &controller.state().filter().search_query)?
        .build();
    {
        let controller = controller.clone();
        on_input(&search, move |query| controller.set_search_query(&query))?;
    }

    Ok(ElementBuilder::new("div")?
        .class("filters")
        .child(
            ElementBuilder::new("label")?
                .attr("for", STATUS_SELECT_ID)?
                .text(t("status_label"))
                .build(),
        )?
        .child(select)?
        .child(
            ElementBuilder::new("label")?
                .attr("for", SEARCH_INPUT_ID)?
                .text(t("search_label"))
                .build(),
        )?
        .child(search)?
        .build())
}

/// Rellena el `<select>` con "todos" + los estados presentes en el snapshot.
/// Un estado filtrado que ya no aparece sigue como opción para no perder la selección.
pub fn fill_status_options(controller: &AppController, select: &Element) -> Result<(), JsValue> {
    select.set_inner_html("");

    let mut options = controller.with_projector(|p| p.status_options());
    let current = controller.state().filter().status;
    if let StatusFilter::Status(code) = &current {
        if !options.iter().any(|o| &o.value == code) {
            options.push(StatusOption {
                value: code.clone(),
                label: status::translate(code).to_string(),
                selected: true,
            });
        }
    }

    let all = ElementBuilder::new("option")?
        .attr("value", ALL_STATUSES)?
        .flag("selected", current == StatusFilter::All)?
        .text(t("all_statuses"))
        .build();
    append_child(select, &all)?;

    for option in options {
        let element = ElementBuilder::new("option")?
            .attr("value", &option.value)?
            .flag("selected", option.selected)?
            .text(&option.label)
            .build();
        append_child(select, &element)?;
    }
    Ok(())
}
