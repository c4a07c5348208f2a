// ============================================================================
// PROJECTOR - Vistas derivadas del store para la capa de presentación
// ============================================================================
// Funciones puras: no guardan nada, se recalculan en cada render
// ============================================================================

use std::collections::HashSet;

use crate::models::{Analytics, FilterState, Order};
use crate::state::StoreData;
use crate::utils::status;
use crate::utils::{format_count, format_percent, t};

/// Opción del `<select>` de estados
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusOption {
    /// Código crudo (lo que filtra)
    pub value: String,
    /// Etiqueta en ruso (lo que se ve)
    pub label: String,
    pub selected: bool,
}

/// Apruebos vs. resto. `other` puede ser negativo si el servicio manda datos incoherentes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PieChartData {
    pub approved: i64,
    pub other: i64,
}

impl PieChartData {
    pub fn total(&self) -> i64 {
        self.approved + self.other
    }
}

/// Porcentaje tal como llegó; el eje del gráfico va de 0 a 100
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BarValue {
    pub raw: f64,
}

impl BarValue {
    /// Altura que se dibuja (limitada al eje)
    pub fn display(&self) -> f64 {
        if self.raw.is_finite() {
            self.raw.clamp(0.0, 100.0)
        } else {
            0.0
        }
    }

    pub fn is_out_of_range(&self) -> bool {
        !(0.0..=100.0).contains(&self.raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BarChartData {
    pub percent_approved: BarValue,
    pub percent_delivered: BarValue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsCard {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
}

pub struct ViewProjector<'a> {
    orders: &'a [Order],
    analytics: Option<&'a Analytics>,
    filter: &'a FilterState,
}

impl<'a> ViewProjector<'a> {
    pub fn new(data: &'a StoreData, filter: &'a FilterState) -> Self {
        Self::from_parts(&data.orders, data.analytics.as_ref(), filter)
    }

    pub fn from_parts(orders: &'a [Order], analytics: Option<&'a Analytics>, filter: &'a FilterState) -> Self {
        Self {
            orders,
            analytics,
            filter,
        }
    }

    /// Pedidos que pasan el filtro de estado y la búsqueda, en el orden del servicio
    pub fn filtered_orders(&self) -> Vec<&'a Order> {
        self.orders.iter().filter(|order| self.filter.matches(order)).collect()
    }

    /// Códigos distintos en orden de primera aparición
    pub fn distinct_statuses(&self) -> Vec<&'a str> {
        let mut seen = HashSet::new();
        self.orders
            .iter()
            .map(|order| order.status.as_str())
            .filter(|code| seen.insert(*code))
            .collect()
    }

    pub fn status_options(&self) -> Vec<StatusOption> {
        let selected = self.filter.status.as_select_value();
        self.distinct_statuses()
            .into_iter()
            .map(|code| StatusOption {
                value: code.to_string(),
                label: status::translate(code).to_string(),
                selected: code == selected,
            })
            .collect()
    }

    pub fn has_analytics(&self) -> bool {
        self.analytics.is_some()
    }

    /// Sin analítica el gráfico queda en cero
    pub fn pie_chart_data(&self) -> PieChartData {
        self.analytics
            .map(|a| PieChartData {
                approved: a.approved_orders,
                other: a.other_orders(),
            })
            .unwrap_or_default()
    }

    pub fn bar_chart_data(&self) -> BarChartData {
        self.analytics
            .map(|a| BarChartData {
                percent_approved: BarValue { raw: a.percent_approved },
                percent_delivered: BarValue { raw: a.percent_delivered },
            })
            .unwrap_or_default()
    }

    /// Tarjetas de la cabecera de analítica; vacío si no hay analítica
    pub fn analytics_cards(&self) -> Vec<AnalyticsCard> {
        let Some(a) = self.analytics else {
            return Vec::new();
        };

        let card = |key: &'static str, value: String| AnalyticsCard {
            key,
            label: t(key),
            value,
        };
        vec![
            card("total_orders", format_count(a.total_orders as f64)),
            card("approved_orders", format_count(a.approved_orders as f64)),
            card("delivered_orders", format_count(a.delivered_orders as f64)),
            card("percent_approved", format_percent(a.percent_approved)),
            card("percent_delivered", format_percent(a.percent_delivered)),
        ]
    }
}
