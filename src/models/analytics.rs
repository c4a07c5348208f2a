use serde::{Deserialize, Serialize};

/// Analítica precalculada por el servicio, llega junto con los pedidos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analytics {
    pub total_orders: i64,
    pub approved_orders: i64,
    pub delivered_orders: i64,
    pub percent_approved: f64,
    pub percent_delivered: f64,
}

impl Analytics {
    /// Pedidos que no cuentan como aprobados
    pub fn other_orders(&self) -> i64 {
        self.total_orders - self.approved_orders
    }

    /// Invariantes de calidad de datos; si fallan se avisa, no se corrige
    pub fn is_consistent(&self) -> bool {
        let counts_ok = self.total_orders >= 0
            && (0..=self.total_orders).contains(&self.approved_orders)
            && (0..=self.total_orders).contains(&self.delivered_orders);
        counts_ok && is_percent(self.percent_approved) && is_percent(self.percent_delivered)
    }
}

fn is_percent(value: f64) -> bool {
    (0.0..=100.0).contains(&value)
}
