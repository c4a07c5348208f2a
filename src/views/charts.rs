// ============================================================================
// CHARTS - Gráfico circular de apruebos y barras de porcentajes (SVG)
// ============================================================================

use std::f64::consts::PI;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::AppController;
use crate::dom::ElementBuilder;
use crate::utils::{format_percent, t};
use crate::viewmodels::{BarChartData, BarValue, PieChartData};

const APPROVED_COLOR: &str = "#4CAF50";
const OTHER_COLOR: &str = "#E0E0E0";
const PERCENT_APPROVED_COLOR: &str = "#2196F3";
const PERCENT_DELIVERED_COLOR: &str = "#9C27B0";

const PIE_CENTER: f64 = 100.0;
const PIE_RADIUS: f64 = 80.0;

// Área de barras: y = 20 es 100 %, y = 170 es 0 %
const BAR_TOP: f64 = 20.0;
const BAR_BASE: f64 = 170.0;
const BAR_WIDTH: f64 = 50.0;

/// Sección de gráficos (contenido de `#charts`)
pub fn render_charts(controller: &AppController) -> Result<Element, JsValue> {
    let (pie, bars) = controller.with_projector(|p| (p.pie_chart_data(), p.bar_chart_data()));

    let pie_card = ElementBuilder::new("div")?
        .class("chart-card")
        .child(ElementBuilder::new("h3")?.text(t("pie_title")).build())?
        .child(ElementBuilder::new("div")?.class("chart").html(&pie_chart_svg(&pie)).build())?
        .child(render_pie_legend(&pie)?)?
        .build();

    let bar_card = ElementBuilder::new("div")?
        .class("chart-card")
        .child(ElementBuilder::new("h3")?.text(t("bar_title")).build())?
        .child(ElementBuilder::new("div")?.class("chart").html(&bar_chart_svg(&bars)).build())?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("charts-grid")
        .child(pie_card)?
        .child(bar_card)?
        .build())
}

fn render_pie_legend(data: &PieChartData) -> Result<Element, JsValue> {
    let item = |color: &str, label: &str, value: i64| -> Result<Element, JsValue> {
        Ok(ElementBuilder::new("li")?
            .child(
                ElementBuilder::new("span")?
                    .class("legend-swatch")
                    .attr("style", &format!("background-color: {}", color))?
                    .build(),
            )?
            .child(ElementBuilder::new("span")?.text(&format!("{}: {}", label, value)).build())?
            .build())
    };

    Ok(ElementBuilder::new("ul")?
        .class("chart-legend")
        .child(item(APPROVED_COLOR, t("pie_approved"), data.approved)?)?
        .child(item(OTHER_COLOR, t("pie_other"), data.other)?)?
        .build())
}

/// Círculo apruebos/resto. Sin datos (o con datos negativos) se dibuja vacío.
pub fn pie_chart_svg(data: &PieChartData) -> String {
    let mut svg = String::from(
        r#"<svg class="pie-chart" viewBox="0 0 200 200" xmlns="http://www.w3.org/2000/svg">"#,
    );

    let total = data.total();
    if total <= 0 || data.approved < 0 || data.other < 0 {
        svg.push_str(&full_circle(OTHER_COLOR, "chart-empty"));
    } else if data.other == 0 {
        svg.push_str(&full_circle(APPROVED_COLOR, "slice slice-approved"));
    } else if data.approved == 0 {
        svg.push_str(&full_circle(OTHER_COLOR, "slice slice-other"));
    } else {
        let fraction = data.approved as f64 / total as f64;
        let angle = fraction * 2.0 * PI;
        let x = PIE_CENTER + PIE_RADIUS * angle.sin();
        let y = PIE_CENTER - PIE_RADIUS * angle.cos();
        let large_arc = u8::from(fraction > 0.5);
        let top = PIE_CENTER - PIE_RADIUS;

        svg.push_str(&format!(
            r#"<path class="slice slice-approved" d="M {c} {c} L {c} {top} A {r} {r} 0 {large} 1 {x:.2} {y:.2} Z" fill="{color}"/>"#,
            c = PIE_CENTER,
            top = top,
            r = PIE_RADIUS,
            large = large_arc,
            x = x,
            y = y,
            color = APPROVED_COLOR,
        ));
        svg.push_str(&format!(
            r#"<path class="slice slice-other" d="M {c} {c} L {x:.2} {y:.2} A {r} {r} 0 {large} 1 {c} {top} Z" fill="{color}"/>"#,
            c = PIE_CENTER,
            top = top,
            r = PIE_RADIUS,
            large = 1 - large_arc,
            x = x,
            y = y,
            color = OTHER_COLOR,
        ));
    }

    svg.push_str("</svg>");
    svg
}

fn full_circle(color: &str, class: &str) -> String {
    format!(
        r#"<circle class="{}" cx="{}" cy="{}" r="{}" fill="{}"/>"#,
        class, PIE_CENTER, PIE_CENTER, PIE_RADIUS, color
    )
}

/// Dos barras sobre un eje 0–100 %. La etiqueta muestra el valor recibido,
/// la altura se limita al eje.
pub fn bar_chart_svg(data: &BarChartData) -> String {
    let mut svg = String::from(
        r#"<svg class="bar-chart" viewBox="0 0 240 200" xmlns="http://www.w3.org/2000/svg">"#,
    );

    // Eje Y
    for tick in (0..=100).step_by(25) {
        let y = bar_y(tick as f64);
        svg.push_str(&format!(
            r##"<line class="grid" x1="40" y1="{y:.2}" x2="230" y2="{y:.2}" stroke="#EEEEEE"/><text class="axis-label" x="35" y="{ty:.2}" text-anchor="end" font-size="10">{tick}%</text>"##,
            y = y,
            ty = y + 3.0,
            tick = tick,
        ));
    }

    svg.push_str(&bar(&data.percent_approved, 60.0, PERCENT_APPROVED_COLOR, t("percent_approved")));
    svg.push_str(&bar(&data.percent_delivered, 150.0, PERCENT_DELIVERED_COLOR, t("percent_delivered")));

    svg.push_str("</svg>");
    svg
}

fn bar_y(percent: f64) -> f64 {
    BAR_BASE - percent / 100.0 * (BAR_BASE - BAR_TOP)
}

fn bar(value: &BarValue, x: f64, color: &str, label: &str) -> String {
    let top = bar_y(value.display());
    let height = BAR_BASE - top;
    let class = if value.is_out_of_range() {
        "bar out-of-range"
    } else {
        "bar"
    };
    let center = x + BAR_WIDTH / 2.0;

    format!(
        r#"<rect class="{class}" x="{x:.2}" y="{top:.2}" width="{w:.2}" height="{h:.2}" fill="{color}"/><text class="bar-value" x="{cx:.2}" y="{vy:.2}" text-anchor="middle" font-size="11">{value}</text><text class="bar-label" x="{cx:.2}" y="188" text-anchor="middle" font-size="10">{label}</text>"#,
        class = class,
        x = x,
        top = top,
        w = BAR_WIDTH,
        h = height,
        color = color,
        cx = center,
        vy = top - 4.0,
        value = format_percent(value.raw),
        label = label,
    )
}
