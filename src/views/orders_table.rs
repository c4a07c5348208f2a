// ============================================================================
// ORDERS TABLE - Tabla de pedidos filtrada
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::AppController;
use crate::dom::{append_child, ElementBuilder};
use crate::models::Order;
use crate::utils::status;
use crate::utils::t;

const COLUMNS: [&str; 4] = ["col_number", "col_status", "col_qty_without_delivery", "col_total_qty"];

/// Contenido de `#orders-table`
pub fn render_orders_table(controller: &AppController) -> Result<Element, JsValue> {
    let rows = controller.with_projector(|p| {
        p.filtered_orders()
            .into_iter()
            .map(render_row)
            .collect::<Result<Vec<_>, JsValue>>()
    })?;
    let count = rows.len();

    let header_row = ElementBuilder::new("tr")?
        .children(
            COLUMNS
                .iter()
                .map(|key| ElementBuilder::new("th").map(|th| th.text(t(key)).build()))
                .collect::<Result<Vec<_>, JsValue>>()?,
        )?
        .build();

    let tbody = ElementBuilder::new("tbody")?.build();
    if rows.is_empty() {
        let empty = ElementBuilder::new("tr")?
            .class("empty-row")
            .child(
                ElementBuilder::new("td")?
                    .attr("colspan", &COLUMNS.len().to_string())?
                    .text(t("no_orders"))
                    .build(),
            )?
            .build();
        append_child(&tbody, &empty)?;
    } else {
        for row in rows {
            append_child(&tbody, &row)?;
        }
    }

    let table = ElementBuilder::new("table")?
        .class("orders-table")
        .child(ElementBuilder::new("thead")?.child(header_row)?.build())?
        .child(tbody)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("table-wrapper")
        .child(
            ElementBuilder::new("h2")?
                .text(&format!("{} ({})", t("orders"), count))
                .build(),
        )?
        .child(table)?
        .build())
}

fn render_row(order: &Order) -> Result<Element, JsValue> {
    let label = status::translate(&order.status);
    let mut badge = ElementBuilder::new("span")?.class("status-badge").text(label);
    if let Some(color) = status::status_color(&order.status) {
        badge = badge.attr("style", &format!("background-color: {}", color))?;
    }

    let row_class = if order.is_consistent() {
        "order-row"
    } else {
        "order-row data-warning"
    };

    Ok(ElementBuilder::new("tr")?
        .class(row_class)
        .child(ElementBuilder::new("td")?.text(&order.number.to_string()).build())?
        .child(ElementBuilder::new("td")?.child(badge.build())?.build())?
        .child(
            ElementBuilder::new("td")?
                .text(&order.qty_without_delivery.to_string())
                .build(),
        )?
        .child(ElementBuilder::new("td")?.text(&order.total_qty.to_string()).build())?
        .build())
}
