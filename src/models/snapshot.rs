use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;
use crate::models::{Analytics, Order};

/// Pedidos + analítica de UN mismo fetch. Se reemplaza entero, nunca se mezcla.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub orders: Vec<Order>,
    pub analytics: Analytics,
    pub fetched_at: NaiveDateTime,
}

/// Respuesta cruda de `GET /orders`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrdersResponse {
    #[serde(default)]
    pub orders: Option<Vec<Order>>,
    #[serde(default)]
    pub analytics: Option<Analytics>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl OrdersResponse {
    /// Valida la respuesta: faltar `orders` o `analytics` es un error, no un éxito parcial
    pub fn into_snapshot(self, now: NaiveDateTime) -> Result<Snapshot, DashboardError> {
        let orders = self
            .orders
            .ok_or_else(|| DashboardError::MalformedResponse("нет поля orders".to_string()))?;
        let analytics = self
            .analytics
            .ok_or_else(|| DashboardError::MalformedResponse("нет поля analytics".to_string()))?;

        let fetched_at = match self.timestamp.as_deref() {
            Some(raw) => parse_timestamp(raw).unwrap_or_else(|| {
                log::warn!("⚠️ [STORE] Timestamp ilegible '{}', se usa la hora local", raw);
                now
            }),
            None => now,
        };

        Ok(Snapshot {
            orders,
            analytics,
            fetched_at,
        })
    }
}

/// ISO-8601 con o sin zona horaria (el servicio manda hora local sin zona).
/// Con zona se conserva la hora de pared que envió el servidor.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    #[test]
    fn test_full_response_becomes_snapshot() {
        let body: OrdersResponse = serde_json::from_str(
            r#"{
                "orders": [{"number": "1001", "status": "payoff", "qty_without_delivery": 0, "total_qty": 2}],
                "analytics": {"total_orders": 1, "approved_orders": 1, "delivered_orders": 0,
                              "percent_approved": 100, "percent_delivered": 0},
                "timestamp": "2025-03-04T10:20:30.123456"
            }"#,
        )
        .unwrap();

        let snapshot = body.into_snapshot(now()).unwrap();
        assert_eq!(snapshot.orders.len(), 1);
        assert_eq!(snapshot.analytics.approved_orders, 1);
        assert_eq!(snapshot.fetched_at.format("%d.%m.%Y %H:%M:%S").to_string(), "04.03.2025 10:20:30");
    }

    #[test]
    fn test_float_quantities_and_null_number_still_give_snapshot() {
        let body: OrdersResponse = serde_json::from_str(
            r#"{
                "orders": [
                    {"number": "1001", "status": "payoff", "qty_without_delivery": 1.0, "total_qty": 2.0},
                    {"number": null, "status": "new", "qty_without_delivery": 0.0, "total_qty": 1.0}
                ],
                "analytics": {"total_orders": 2, "approved_orders": 1, "delivered_orders": 0,
                              "percent_approved": 50.0, "percent_delivered": 0.0},
                "timestamp": "2025-03-04T10:20:30"
            }"#,
        )
        .unwrap();

        let snapshot = body.into_snapshot(now()).unwrap();
        assert_eq!(snapshot.orders.len(), 2);
        assert_eq!(snapshot.orders[0].total_qty, 2);
        assert_eq!(snapshot.orders[1].number.to_string(), "");
    }

    #[test]
    fn test_missing_fields_are_malformed() {
        let no_analytics: OrdersResponse = serde_json::from_str(r#"{"orders": []}"#).unwrap();
        assert!(matches!(
            no_analytics.into_snapshot(now()),
            Err(DashboardError::MalformedResponse(_))
        ));

        let no_orders: OrdersResponse = serde_json::from_str(
            r#"{"analytics": {"total_orders": 0, "approved_orders": 0, "delivered_orders": 0,
                              "percent_approved": 0, "percent_delivered": 0}}"#,
        )
        .unwrap();
        assert!(matches!(
            no_orders.into_snapshot(now()),
            Err(DashboardError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_empty_order_list_is_valid() {
        let body: OrdersResponse = serde_json::from_str(
            r#"{"orders": [], "analytics": {"total_orders": 0, "approved_orders": 0,
                "delivered_orders": 0, "percent_approved": 0, "percent_delivered": 0}}"#,
        )
        .unwrap();
        let snapshot = body.into_snapshot(now()).unwrap();
        assert!(snapshot.orders.is_empty());
        assert_eq!(snapshot.fetched_at, now());
    }

    #[test]
    fn test_parse_timestamp_variants() {
        assert!(parse_timestamp("2025-03-04T10:20:30").is_some());
        assert!(parse_timestamp("2025-03-04 10:20:30.5").is_some());
        let with_zone = parse_timestamp("2025-03-04T10:20:30+03:00").unwrap();
        assert_eq!(with_zone.format("%H:%M").to_string(), "10:20");
        assert!(parse_timestamp("ayer").is_none());
    }
}
